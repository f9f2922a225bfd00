//! Keyed HMAC-SHA-256 password hashing (C1).
//!
//! `password_hash` stored by the server is a *keyed* MAC of the password, not
//! a salted password hash. This is deliberate: it keeps a stolen `users`
//! table useless for offline attacks as long as the server key stays secret.
//! The corollary is an operational invariant that every server process
//! authenticating the same users MUST share the same key — rotating it
//! silently locks every existing user out.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// Minimum accepted hasher key length, in bytes.
pub const MIN_KEY_SIZE: usize = 16;

type HmacSha256 = Hmac<Sha256>;

/// Computes and checks keyed HMAC-SHA-256 digests of passwords. The key is
/// wiped from memory when the hasher is dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Hasher {
    key: Vec<u8>,
}

impl Hasher {
    /// Builds a hasher from a server key. Fails if the key is shorter than
    /// [`MIN_KEY_SIZE`].
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        if key.len() < MIN_KEY_SIZE {
            return Err(Error::InvalidKeySize {
                min: MIN_KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(Self { key })
    }

    /// Hashes `data`, returning a lowercase hex digest. Deterministic: equal
    /// inputs under the same key always produce equal outputs.
    pub fn hash(&self, data: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC accepts keys of any length");
        mac.update(data.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Recomputes the hash of `data` and compares it against `hash` in
    /// constant time to avoid leaking information through timing.
    pub fn is_valid(&self, data: &str, hash: &str) -> bool {
        let expected = self.hash(data);
        expected.as_bytes().ct_eq(hash.as_bytes()).into()
    }
}
