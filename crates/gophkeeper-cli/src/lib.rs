//! GophKeeper command-line client (C13): `auth` and `secret` command groups
//! over [`gophkeeper_client::GophKeeperClient`].

pub mod auth;
pub mod cli;
pub mod config;
pub mod secret;

use gophkeeper_client::GophKeeperClient;
use gophkeeper_crypto::cipher::Cipher;

pub use cli::{Cli, Command};

/// Dispatches a parsed [`Cli`] invocation. Builds the RPC client and, for
/// `secret` commands, the envelope cipher, from the flattened
/// [`config::ClientConfig`].
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = GophKeeperClient::from_url(&cli.config.server)?;

    match cli.command {
        Command::Auth(args) => auth::run(args.command, client).await,
        Command::Secret(args) => {
            let passphrase = cli.config.encryption_key.ok_or_else(|| {
                anyhow::anyhow!("--encryption-key (or GOPHKEEPER_ENCRYPTION_KEY) is required")
            })?;
            let cipher = Cipher::new(&passphrase)?;
            let token = cli.config.token.map_or_else(
                || {
                    gophkeeper_client::TokenStore::open_default()?
                        .load()?
                        .ok_or_else(|| anyhow::anyhow!("no access token stored; run `auth login` first"))
                },
                Ok,
            )?;
            secret::run(args.command, client.with_token(token), cipher).await
        }
    }
}
