//! Secret envelope encoding (C3): the tagged JSON shape stored, encrypted,
//! inside every secret's `content` column.
//!
//! The wire shape is `{ "type": "<kind>", "data": { ... } }`. This module
//! turns that shape into a closed Rust enum so every call site matches
//! exhaustively on the four supported kinds instead of poking at a loose
//! `serde_json::Value`.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The decoded contents of a secret, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretPayload {
    Credentials { login: String, password: String },
    Text { data: String },
    Bin { data: Vec<u8> },
    Card {
        number: String,
        expiry_date: String,
        security_code: String,
        holder: String,
    },
}

impl SecretPayload {
    /// The `type` tag used on the wire for this payload's kind.
    pub fn type_tag(&self) -> &'static str {
        match self {
            SecretPayload::Credentials { .. } => "credentials",
            SecretPayload::Text { .. } => "text",
            SecretPayload::Bin { .. } => "bin",
            SecretPayload::Card { .. } => "card",
        }
    }
}

impl fmt::Display for SecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretPayload::Credentials { login, password } => {
                write!(f, "login={login} password={password}")
            }
            SecretPayload::Text { data } => write!(f, "{data}"),
            SecretPayload::Bin { .. } => write!(f, "BINARY DATA"),
            SecretPayload::Card {
                number,
                expiry_date,
                security_code,
                holder,
            } => write!(
                f,
                "card={number} expiry={expiry_date} cvc={security_code} holder={holder}"
            ),
        }
    }
}

/// The on-the-wire representation of a [`SecretPayload`]'s `data` field.
/// `Bin` is base64-encoded since JSON has no binary type.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
enum WireEnvelope {
    Credentials { login: String, password: String },
    Text { data: String },
    Bin { data: String },
    Card {
        number: String,
        expiry_date: String,
        security_code: String,
        holder: String,
    },
}

impl From<&SecretPayload> for WireEnvelope {
    fn from(payload: &SecretPayload) -> Self {
        match payload {
            SecretPayload::Credentials { login, password } => WireEnvelope::Credentials {
                login: login.clone(),
                password: password.clone(),
            },
            SecretPayload::Text { data } => WireEnvelope::Text { data: data.clone() },
            SecretPayload::Bin { data } => WireEnvelope::Bin {
                data: STANDARD.encode(data),
            },
            SecretPayload::Card {
                number,
                expiry_date,
                security_code,
                holder,
            } => WireEnvelope::Card {
                number: number.clone(),
                expiry_date: expiry_date.clone(),
                security_code: security_code.clone(),
                holder: holder.clone(),
            },
        }
    }
}

impl TryFrom<WireEnvelope> for SecretPayload {
    type Error = Error;

    fn try_from(wire: WireEnvelope) -> Result<Self> {
        Ok(match wire {
            WireEnvelope::Credentials { login, password } => {
                SecretPayload::Credentials { login, password }
            }
            WireEnvelope::Text { data } => SecretPayload::Text { data },
            WireEnvelope::Bin { data } => SecretPayload::Bin {
                data: STANDARD
                    .decode(data)
                    .map_err(|e| Error::UnknownSecretKind(format!("invalid base64: {e}")))?,
            },
            WireEnvelope::Card {
                number,
                expiry_date,
                security_code,
                holder,
            } => SecretPayload::Card {
                number,
                expiry_date,
                security_code,
                holder,
            },
        })
    }
}

/// Encodes a payload into its `{ "type": ..., "data": ... }` JSON form.
pub fn encode(payload: &SecretPayload) -> Vec<u8> {
    let wire = WireEnvelope::from(payload);
    serde_json::to_vec(&wire).expect("WireEnvelope always serializes")
}

/// Decodes a payload from its JSON form. Fails with
/// [`Error::UnknownSecretKind`] if the `type` tag isn't one of the four
/// known kinds, or with [`Error::InvalidEnvelope`] if the JSON is otherwise
/// malformed.
pub fn decode(bytes: &[u8]) -> Result<SecretPayload> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    match value.get("type").and_then(|t| t.as_str()) {
        Some("credentials" | "text" | "bin" | "card") | None => {}
        Some(other) => return Err(Error::UnknownSecretKind(other.to_string())),
    }

    let wire: WireEnvelope = serde_json::from_value(value)?;
    SecretPayload::try_from(wire)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds() -> Vec<SecretPayload> {
        vec![
            SecretPayload::Credentials {
                login: "alice".into(),
                password: "hunter2".into(),
            },
            SecretPayload::Text {
                data: "a note to self".into(),
            },
            SecretPayload::Bin {
                data: vec![0, 1, 2, 255, 254],
            },
            SecretPayload::Card {
                number: "4111111111111111".into(),
                expiry_date: "12/29".into(),
                security_code: "123".into(),
                holder: "ALICE A".into(),
            },
        ]
    }

    #[test]
    fn round_trips_all_kinds() {
        for payload in all_kinds() {
            let encoded = encode(&payload);
            assert_eq!(decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn encodes_type_tag() {
        let payload = SecretPayload::Text {
            data: "hello".into(),
        };
        let encoded = encode(&payload);
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["data"]["data"], "hello");
    }

    #[test]
    fn rejects_unknown_kind() {
        let bytes = br#"{"type":"totp","data":{}}"#;
        assert!(matches!(decode(bytes), Err(Error::UnknownSecretKind(k)) if k == "totp"));
    }

    #[test]
    fn bin_display_never_leaks_bytes() {
        let payload = SecretPayload::Bin {
            data: vec![1, 2, 3],
        };
        assert_eq!(payload.to_string(), "BINARY DATA");
    }

    #[test]
    fn type_tag_matches_display_kind() {
        for payload in all_kinds() {
            let tag = payload.type_tag();
            assert!(["credentials", "text", "bin", "card"].contains(&tag));
        }
    }
}
