//! AES-256-GCM authenticated encryption (C2).
//!
//! Two variants share a passphrase-to-key derivation (`SHA-256(passphrase)`):
//!
//! - [`LegacyCipher`] reproduces the source's deterministic nonce scheme
//!   bit-for-bit (nonce = last 12 bytes of the derived key, fixed per key).
//!   It is **not** IND-CPA-secure across repeated encryptions of the same
//!   plaintext under the same passphrase — kept only for wire/KAT
//!   compatibility.
//! - [`Cipher`] is the hardened default: a fresh random 96-bit nonce is
//!   sampled per call and prepended to the ciphertext.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// Minimum accepted passphrase length, in characters.
pub const MIN_PASSPHRASE_SIZE: usize = 32;

const KEY_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 12;

/// Derives a 256-bit AES key from a passphrase via `SHA-256`.
///
/// Fails with [`Error::InvalidPassphraseSize`] if the passphrase is shorter
/// than [`MIN_PASSPHRASE_SIZE`] characters.
pub fn derive_key(passphrase: &str) -> Result<[u8; KEY_LENGTH]> {
    let len = passphrase.chars().count();
    if len < MIN_PASSPHRASE_SIZE {
        return Err(Error::InvalidPassphraseSize {
            min: MIN_PASSPHRASE_SIZE,
            actual: len,
        });
    }
    let mut hasher = Sha256::new();
    hasher.update(passphrase.as_bytes());
    Ok(hasher.finalize().into())
}

/// Deterministic-nonce AES-256-GCM, for wire/KAT compatibility only. The key
/// is wiped from memory when the cipher is dropped.
#[derive(ZeroizeOnDrop)]
pub struct LegacyCipher {
    key: [u8; KEY_LENGTH],
}

impl LegacyCipher {
    /// Builds a cipher from a passphrase of at least [`MIN_PASSPHRASE_SIZE`]
    /// characters.
    pub fn new(passphrase: &str) -> Result<Self> {
        Ok(Self {
            key: derive_key(passphrase)?,
        })
    }

    /// Builds a cipher directly from a raw 32-byte key, bypassing passphrase
    /// derivation. Used for known-answer testing against a fixed key.
    pub fn from_key(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    fn nonce(&self) -> [u8; NONCE_LENGTH] {
        let mut nonce = [0u8; NONCE_LENGTH];
        nonce.copy_from_slice(&self.key[KEY_LENGTH - NONCE_LENGTH..]);
        nonce
    }

    /// Encrypts `plaintext`, returning `ciphertext || 16-byte tag`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));
        let nonce = self.nonce();
        cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| Error::AuthenticationFailure)
    }

    /// Decrypts a ciphertext produced by [`LegacyCipher::encrypt`].
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));
        let nonce = self.nonce();
        cipher
            .decrypt(Nonce::from_slice(&nonce), ciphertext)
            .map_err(|_| Error::AuthenticationFailure)
    }
}

/// Random-nonce AES-256-GCM. The default cipher for new deployments. The
/// key is wiped from memory when the cipher is dropped.
#[derive(ZeroizeOnDrop)]
pub struct Cipher {
    key: [u8; KEY_LENGTH],
}

impl Cipher {
    /// Builds a cipher from a passphrase of at least [`MIN_PASSPHRASE_SIZE`]
    /// characters.
    pub fn new(passphrase: &str) -> Result<Self> {
        Ok(Self {
            key: derive_key(passphrase)?,
        })
    }

    /// Encrypts `plaintext`, returning `nonce (12 bytes) || ciphertext || tag`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let mut out = Vec::with_capacity(NONCE_LENGTH + plaintext.len() + 16);
        out.extend_from_slice(&nonce_bytes);
        out.extend(
            cipher
                .encrypt(nonce, plaintext)
                .map_err(|_| Error::AuthenticationFailure)?,
        );
        Ok(out)
    }

    /// Decrypts a payload produced by [`Cipher::encrypt`].
    pub fn decrypt(&self, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < NONCE_LENGTH {
            return Err(Error::CiphertextTooShort);
        }
        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LENGTH);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key));
        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| Error::AuthenticationFailure)
    }
}
