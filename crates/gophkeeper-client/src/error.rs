//! Errors surfaced by [`crate::GophKeeperClient`] and [`crate::TokenStore`].

use gophkeeper_proto::ApiErrorKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{kind}: {message}")]
    Server {
        kind: ApiErrorKind,
        message: String,
    },

    #[error("server returned a non-JSON error body (status {status})")]
    UnexpectedResponse { status: u16 },

    #[error("token store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the one error shape the CLI should treat as "not logged in
    /// yet" rather than a generic failure.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Error::Server {
                kind: ApiErrorKind::Unauthenticated,
                ..
            }
        )
    }
}
