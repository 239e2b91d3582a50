use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A bearer token was supplied but matches no live user.
    ///
    /// Requests without a token are allowed through as anonymous; a token that
    /// cannot be resolved is rejected with 401 Unauthorized instead of being
    /// silently ignored, so audit entries are never attributed to nobody by mistake.
    #[error("The provided API token is not valid")]
    InvalidToken,
}
