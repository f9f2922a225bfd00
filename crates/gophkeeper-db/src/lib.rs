//! Durable SQLite-backed storage for GophKeeper's user directory and
//! per-owner secrets.
//!
//! The schema is applied at [`Database::open`] by [`migrations::run`]; all
//! application code reaches the database through [`UserStore`] and
//! [`SecretStore`], never the raw connection.

mod database;
mod error;
mod migrations;
mod models;
mod secret_store;
mod user_store;

pub use database::Database;
pub use error::{Error, Result};
pub use models::{Secret, User};
pub use secret_store::SecretStore;
pub use user_store::UserStore;
