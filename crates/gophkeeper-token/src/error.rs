use thiserror::Error;

/// Result type alias for token operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while issuing or validating bearer tokens.
#[derive(Debug, Error)]
pub enum Error {
    #[error("signing key must be at least {min} bytes, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("token has expired")]
    ExpiredToken,

    #[error("token is malformed or fails signature verification")]
    InvalidToken,

    #[error("failed to sign token: {0}")]
    Encoding(jsonwebtoken::errors::Error),
}
