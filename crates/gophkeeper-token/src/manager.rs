//! Bearer token issuance and validation (C4).
//!
//! Builds on `jsonwebtoken` rather than a hand-rolled signer, restricting
//! both encoding and decoding to a single explicit algorithm so a token
//! signed with `alg: none` or a different algorithm is never accepted.

use std::time::Duration;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::claims::{Claims, TokenPayload};
use crate::error::{Error, Result};

/// Minimum accepted signing key length, in bytes.
pub const MIN_KEY_SIZE: usize = 16;

/// Issues and validates HS256 bearer tokens for authenticated users.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenManager {
    /// Builds a manager from a signing key and token lifetime. Fails if the
    /// key is shorter than [`MIN_KEY_SIZE`].
    pub fn new(key: &[u8], ttl: Duration) -> Result<Self> {
        if key.len() < MIN_KEY_SIZE {
            return Err(Error::InvalidKeySize {
                min: MIN_KEY_SIZE,
                actual: key.len(),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256];
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(key),
            decoding_key: DecodingKey::from_secret(key),
            validation,
            ttl,
        })
    }

    /// Issues a fresh token for `user_id`, valid for this manager's TTL.
    pub fn create(&self, user_id: i64) -> Result<String> {
        let now = chrono_now();
        let claims = Claims {
            jti: Uuid::new_v4(),
            user_id,
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(Error::Encoding)
    }

    /// Validates `token`, returning its payload on success.
    pub fn validate(&self, token: &str) -> Result<TokenPayload> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.into())
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => Error::ExpiredToken,
                _ => Error::InvalidToken,
            })
    }
}

/// Seconds since the Unix epoch. Isolated behind a function so tests can
/// reason about it without depending on wall-clock time directly.
fn chrono_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is after the Unix epoch")
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> TokenManager {
        TokenManager::new(b"0123456789abcdef", Duration::from_secs(3600)).unwrap()
    }

    #[test]
    fn rejects_short_keys() {
        assert!(matches!(
            TokenManager::new(b"short", Duration::from_secs(60)),
            Err(Error::InvalidKeySize { min: 16, actual: 5 })
        ));
    }

    #[test]
    fn create_and_validate_round_trips() {
        let manager = manager();
        let token = manager.create(42).unwrap();
        let payload = manager.validate(&token).unwrap();
        assert_eq!(payload.user_id, 42);
    }

    #[test]
    fn distinct_tokens_get_distinct_jti() {
        let manager = manager();
        let a = manager.validate(&manager.create(1).unwrap()).unwrap();
        let b = manager.validate(&manager.create(1).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn rejects_token_signed_with_different_key() {
        let manager = manager();
        let other = TokenManager::new(b"fedcba9876543210", Duration::from_secs(3600)).unwrap();
        let token = other.create(1).unwrap();
        assert!(matches!(manager.validate(&token), Err(Error::InvalidToken)));
    }

    #[test]
    fn rejects_garbage_token() {
        let manager = manager();
        assert!(matches!(
            manager.validate("not.a.token"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let manager = TokenManager::new(b"0123456789abcdef", Duration::from_secs(0)).unwrap();
        let token = manager.create(1).unwrap();
        std::thread::sleep(Duration::from_secs(2));
        assert!(matches!(manager.validate(&token), Err(Error::ExpiredToken)));
    }
}
