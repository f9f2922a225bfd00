//! Server error types and their translation to wire responses (`spec.md` §7).
//!
//! Stores and libraries return typed sentinel errors; this module is the
//! single place that maps them onto the five wire kinds and an HTTP status.
//! The internal cause is logged; the client only ever sees the generic
//! [`gophkeeper_proto::ApiError`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gophkeeper_proto::{ApiError, ApiErrorKind};

/// Server result type.
pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    fn kind(&self) -> ApiErrorKind {
        match self {
            ServerError::InvalidArgument(_) => ApiErrorKind::InvalidArgument,
            ServerError::Unauthenticated(_) => ApiErrorKind::Unauthenticated,
            ServerError::AlreadyExists(_) => ApiErrorKind::AlreadyExists,
            ServerError::NotFound(_) => ApiErrorKind::NotFound,
            ServerError::Internal(_) => ApiErrorKind::Internal,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServerError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ServerError::AlreadyExists(_) => StatusCode::CONFLICT,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent over the wire. Internal errors never leak their
    /// cause; everything else is already a user-facing message.
    fn wire_message(&self) -> String {
        match self {
            ServerError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if matches!(self, ServerError::Internal(_)) {
            tracing::error!(cause = %self, "internal error");
        } else {
            tracing::debug!(cause = %self, "request rejected");
        }

        let body = ApiError::new(self.kind(), self.wire_message());
        (self.status(), Json(body)).into_response()
    }
}

impl From<gophkeeper_db::Error> for ServerError {
    fn from(err: gophkeeper_db::Error) -> Self {
        use gophkeeper_db::Error as DbError;
        match err {
            DbError::UserConflict => ServerError::AlreadyExists(
                "a user with that email already exists".to_string(),
            ),
            DbError::UserNotFound => {
                ServerError::Unauthenticated("invalid email or password".to_string())
            }
            DbError::SecretConflict => ServerError::AlreadyExists(
                "a secret with that name already exists".to_string(),
            ),
            DbError::SecretNotFound => ServerError::NotFound("secret not found".to_string()),
            DbError::Sqlite(err) => ServerError::Internal(err.to_string()),
            DbError::TaskJoin(err) => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<gophkeeper_token::Error> for ServerError {
    fn from(err: gophkeeper_token::Error) -> Self {
        use gophkeeper_token::Error as TokenError;
        match err {
            TokenError::ExpiredToken => {
                ServerError::Unauthenticated("token expired".to_string())
            }
            TokenError::InvalidToken => {
                ServerError::Unauthenticated("token invalid".to_string())
            }
            // Key-size misconfiguration and signing failures are server bugs,
            // never surfaced as an auth rejection (`spec.md` §7).
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<gophkeeper_crypto::Error> for ServerError {
    fn from(err: gophkeeper_crypto::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServerError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServerError::InvalidArgument(err.to_string())
    }
}
