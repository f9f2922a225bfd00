use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the hasher, cipher and envelope codecs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("key must be at least {min} bytes, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("passphrase must be at least {min} characters, got {actual}")]
    InvalidPassphraseSize { min: usize, actual: usize },

    #[error("authentication failure: ciphertext failed to decrypt or verify")]
    AuthenticationFailure,

    #[error("ciphertext is too short to contain a nonce")]
    CiphertextTooShort,

    #[error("unknown secret kind: {0}")]
    UnknownSecretKind(String),

    #[error("invalid envelope encoding: {0}")]
    InvalidEnvelope(#[from] serde_json::Error),
}
