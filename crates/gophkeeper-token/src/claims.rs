use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The registered claims carried by a GophKeeper bearer token.
///
/// `jti` gives every token a unique identity even when issued to the same
/// user back-to-back within the same second, which keeps `iat`/`exp` from
/// being the only distinguishing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub jti: Uuid,
    pub user_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// The validated payload returned by [`crate::TokenManager::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub jti: Uuid,
    pub user_id: i64,
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        Self {
            jti: claims.jti,
            user_id: claims.user_id,
        }
    }
}
