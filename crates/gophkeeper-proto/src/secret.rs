//! Request/response bodies for `SecretService` (`spec.md` §4.6, §6). `name`
//! comes from the route path for Get/Update/Delete; request bodies here
//! cover only the fields carried in the JSON payload.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::base64_bytes;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSecretResponse {
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSecretRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSecretResponse {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSecretRequest {
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSecretResponse {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSecretResponse {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretSummary {
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSecretsResponse {
    pub secrets: Vec<SecretSummary>,
}

impl CreateSecretRequest {
    /// `content` must be non-empty on create (`spec.md` §3 Secret invariants);
    /// `validator` has no zero-length-bytes rule, so this is checked by hand.
    pub fn validate_content(&self) -> bool {
        !self.content.is_empty()
    }
}

impl UpdateSecretRequest {
    pub fn validate_content(&self) -> bool {
        !self.content.is_empty()
    }
}
