//! Bearer token issuance and validation.
//!
//! Wraps `jsonwebtoken` with an HS256-only algorithm allowlist so the
//! server never accepts a token signed with `alg: none` or any algorithm
//! other than the one it issues with.

pub mod claims;
pub mod error;
pub mod manager;

pub use claims::{Claims, TokenPayload};
pub use error::{Error, Result};
pub use manager::TokenManager;
