//! Server configuration (`spec.md` §6 config keys), read from CLI flags or
//! environment variables via `clap`'s `env` feature. Full layered
//! config-file/env merging is an external collaborator per `spec.md` §1 —
//! this is intentionally the thin wrapper the scope calls for.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gophkeeper-server", about = "GophKeeper password manager server")]
pub struct ServerConfig {
    /// Address the HTTP server binds to (config key `grpc.address`, named
    /// for wire compatibility with the spec even though transport is REST).
    #[arg(long = "grpc-address", env = "GOPHKEEPER_GRPC_ADDRESS", default_value = "127.0.0.1:8080")]
    pub bind_addr: SocketAddr,

    /// SQLite database path (config key `db.url`). `:memory:` for ephemeral
    /// storage.
    #[arg(long = "db-url", env = "GOPHKEEPER_DB_URL", default_value = "gophkeeper.db")]
    pub database_url: String,

    /// Token-signing key, at least 16 bytes (config key `auth.key`).
    #[arg(long = "auth-key", env = "GOPHKEEPER_AUTH_KEY")]
    pub auth_key: String,

    /// Bearer-token lifetime in seconds (config key `auth.expiration_time`).
    #[arg(
        long = "auth-expiration-seconds",
        env = "GOPHKEEPER_AUTH_EXPIRATION_SECONDS",
        default_value = "3600"
    )]
    pub auth_expiration_seconds: u64,

    /// Password-hasher MAC key, at least 16 bytes (config key `hasher.key`).
    /// Every server process authenticating the same users MUST share this
    /// key, or existing users can never sign in again (`spec.md` §4.1).
    #[arg(long = "hasher-key", env = "GOPHKEEPER_HASHER_KEY")]
    pub hasher_key: String,
}

impl ServerConfig {
    pub fn auth_expiration(&self) -> Duration {
        Duration::from_secs(self.auth_expiration_seconds)
    }
}
