//! `auth register|login|verify` — grounded in
//! `original_source/cmd/client/cmd/{auth_register,auth_login,auth_verify}.go`.
//!
//! `verify` is supplemental: dropped from the distilled spec's CLI summary
//! but present in the original and reintroduced here since it exercises
//! `VerifyToken` without touching any Non-goal.

use clap::Subcommand;
use gophkeeper_client::{GophKeeperClient, TokenStore};

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Registers a user in the GophKeeper service.
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Logs a user in and persists the access token for subsequent commands.
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Verifies an access token and prints the resolved user id.
    Verify {
        /// Token to verify. Defaults to the token persisted by `login`.
        #[arg(short, long)]
        token: Option<String>,
    },
}

pub async fn run(command: AuthCommand, client: GophKeeperClient) -> anyhow::Result<()> {
    match command {
        AuthCommand::Register { email, password } => {
            let token = client.sign_up(&email, &password).await?;
            TokenStore::open_default()?.save(&token)?;
            println!("Access Token: {token}");
        }
        AuthCommand::Login { email, password } => {
            let token = client.sign_in(&email, &password).await?;
            TokenStore::open_default()?.save(&token)?;
            println!("Access Token: {token}");
        }
        AuthCommand::Verify { token } => {
            let token = match token {
                Some(token) => token,
                None => TokenStore::open_default()?
                    .load()?
                    .ok_or_else(|| anyhow::anyhow!("no access token stored; run `auth login` first"))?,
            };
            let user_id = client.verify_token(&token).await?;
            println!("Token is valid, UserID: {user_id}");
        }
    }
    Ok(())
}
