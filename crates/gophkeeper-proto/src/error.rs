//! The wire error shape shared by server and client (`spec.md` §7): a closed
//! set of error kinds plus a generic message. The server never serializes
//! the underlying cause (database text, signing errors); it logs that
//! internally and sends only this.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    InvalidArgument,
    Unauthenticated,
    AlreadyExists,
    NotFound,
    Internal,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiErrorKind::InvalidArgument => "invalid_argument",
            ApiErrorKind::Unauthenticated => "unauthenticated",
            ApiErrorKind::AlreadyExists => "already_exists",
            ApiErrorKind::NotFound => "not_found",
            ApiErrorKind::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// The JSON body returned for any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}
