//! Client-side configuration (`spec.md` §6 config keys `grpc.address`,
//! `encryption.key`, `token`).
//!
//! Full hierarchical config-file/env/CLI merging is out of scope (§1 names
//! configuration loading as an external collaborator); this is the thin
//! `clap`-driven struct the ambient stack still calls for — every field is
//! also readable from an environment variable so scripted use doesn't need
//! flags on every invocation.

use clap::Args;

/// Flattened into [`crate::cli::Cli`] so every subcommand sees the same
/// connection settings without repeating the flags.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Base URL of the GophKeeper server (`grpc.address` in `spec.md` §6;
    /// the name is kept for config-key compatibility even though the
    /// transport here is REST over HTTP).
    #[arg(
        long = "server",
        env = "GOPHKEEPER_GRPC_ADDRESS",
        default_value = "http://127.0.0.1:9090",
        global = true
    )]
    pub server: String,

    /// Passphrase used to derive the client-side `Cipher` key
    /// (`encryption.key`). Required by every `secret` subcommand.
    #[arg(long = "encryption-key", env = "GOPHKEEPER_ENCRYPTION_KEY", global = true)]
    pub encryption_key: Option<String>,

    /// Overrides the token persisted by `auth login` (`token`). Falls back
    /// to the on-disk `TokenStore` when absent.
    #[arg(long = "token", env = "GOPHKEEPER_TOKEN", global = true)]
    pub token: Option<String>,
}
