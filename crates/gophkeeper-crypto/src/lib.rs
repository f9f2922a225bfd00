//! Password hashing, authenticated encryption and secret envelope encoding.
//!
//! This crate provides:
//! - Keyed HMAC-SHA-256 password hashing (see [`hasher`])
//! - AES-256-GCM authenticated encryption, legacy and hardened variants
//!   (see [`cipher`])
//! - The tagged secret envelope format shared between client and server
//!   (see [`envelope`])

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod hasher;

pub use cipher::{Cipher, LegacyCipher};
pub use envelope::SecretPayload;
pub use error::{Error, Result};
pub use hasher::Hasher;
