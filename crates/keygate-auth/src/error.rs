use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Sign-up refused by the user pool. Holds the provider's message as-is.
    #[error("{0}")]
    RegistrationRejected(String),

    #[error("Cognito error: {0}")]
    Cognito(String),
}
