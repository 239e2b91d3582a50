use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DbErr;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use test_utils::{builder::TestBuilder, factory};

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests resolving the owner of a valid token.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn identifies_token_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .api_token("secret-token")
        .build()
        .await?;

    let headers = bearer("secret-token");
    let actor = AuthGuard::new(db, &headers).identify().await?;

    assert_eq!(actor.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a request without a token is anonymous.
///
/// Expected: Ok(None)
#[tokio::test]
async fn allows_anonymous_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let actor = AuthGuard::new(db, &headers).identify().await;

    assert!(matches!(actor, Ok(None)));

    Ok(())
}

/// Tests that an unknown token is rejected rather than treated as anonymous.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .api_token("secret-token")
        .build()
        .await?;

    let headers = bearer("other-token");
    let actor = AuthGuard::new(db, &headers).identify().await;

    assert!(matches!(actor, Err(AppError::AuthErr(AuthError::InvalidToken))));

    Ok(())
}
