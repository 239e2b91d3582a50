use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Resolves the user behind an `Authorization: Bearer <token>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Returns the token owner, or `None` for a request without a bearer token.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token belongs to a live user
    /// - `Ok(None)` - No bearer token was sent
    /// - `Err(AppError::AuthErr)` - A token was sent but matches no live user
    pub async fn identify(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Ok(None);
        };

        let Some(user) = UserRepository::new(self.db).find_by_api_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(Some(user))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// User performing the request, recorded in the audit trail.
///
/// Authentication is enforced upstream; an anonymous request is allowed and
/// simply leaves no audit entry.
pub struct Actor(pub Option<entity::user::Model>);

impl Actor {
    pub fn user(&self) -> Option<&entity::user::Model> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let user = AuthGuard::new(&state.db, &parts.headers).identify().await?;

        Ok(Actor(user))
    }
}
