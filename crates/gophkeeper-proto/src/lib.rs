//! Request/response DTOs shared between `gophkeeper-server` and
//! `gophkeeper-client`: the JSON realization of the RPC contracts in
//! `spec.md` §6.

mod base64_bytes;
pub mod auth;
pub mod error;
pub mod secret;

pub use auth::{
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, VerifyTokenRequest,
    VerifyTokenResponse,
};
pub use error::{ApiError, ApiErrorKind};
pub use secret::{
    CreateSecretRequest, CreateSecretResponse, DeleteSecretResponse, GetSecretResponse,
    ListSecretsResponse, SecretSummary, UpdateSecretRequest, UpdateSecretResponse,
};
