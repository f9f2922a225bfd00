use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the user and secret stores.
#[derive(Debug, Error)]
pub enum Error {
    #[error("email is already registered")]
    UserConflict,

    #[error("no user matches the given email and password")]
    UserNotFound,

    #[error("a secret with that name already exists for this owner")]
    SecretConflict,

    #[error("no secret with that name exists for this owner")]
    SecretNotFound,

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database worker task panicked: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
