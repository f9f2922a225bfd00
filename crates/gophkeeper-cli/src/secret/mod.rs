//! `secret create|update {credentials|text|bin|card}|get|delete|list` —
//! grounded in `original_source/cmd/client/cmd/secret_{create,update,get,
//! delete,list}*.go`. One module per command group, per-kind subcommands
//! mirroring the Go original's `secret_create_{credentials,text,bin,card}.go`
//! files.

use std::path::PathBuf;

use clap::Subcommand;
use gophkeeper_client::GophKeeperClient;
use gophkeeper_crypto::{cipher::Cipher, envelope};

#[derive(Debug, Subcommand)]
pub enum SecretCommand {
    /// Creates a new secret.
    Create {
        #[command(subcommand)]
        kind: SecretKind,
    },
    /// Replaces the content of an existing secret.
    Update {
        #[command(subcommand)]
        kind: SecretKind,
    },
    /// Fetches and decrypts a secret.
    Get {
        #[arg(long)]
        name: String,
    },
    /// Deletes a secret.
    Delete {
        #[arg(long)]
        name: String,
    },
    /// Lists and decrypts every secret owned by the caller.
    List,
}

#[derive(Debug, Subcommand)]
pub enum SecretKind {
    Credentials {
        #[arg(long)]
        name: String,
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    Text {
        #[arg(long)]
        name: String,
        #[arg(long)]
        data: String,
    },
    Bin {
        #[arg(long)]
        name: String,
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    Card {
        #[arg(long)]
        name: String,
        #[arg(long)]
        number: String,
        #[arg(long = "date")]
        expiry_date: String,
        #[arg(long = "code")]
        security_code: String,
        #[arg(long)]
        holder: String,
    },
}

impl SecretKind {
    fn name(&self) -> &str {
        match self {
            SecretKind::Credentials { name, .. }
            | SecretKind::Text { name, .. }
            | SecretKind::Bin { name, .. }
            | SecretKind::Card { name, .. } => name,
        }
    }

    fn into_payload(self) -> anyhow::Result<envelope::SecretPayload> {
        Ok(match self {
            SecretKind::Credentials {
                login, password, ..
            } => envelope::SecretPayload::Credentials { login, password },
            SecretKind::Text { data, .. } => envelope::SecretPayload::Text { data },
            SecretKind::Bin { file, .. } => {
                let data = std::fs::read(&file)
                    .map_err(|err| anyhow::anyhow!("failed to read {}: {err}", file.display()))?;
                envelope::SecretPayload::Bin { data }
            }
            SecretKind::Card {
                number,
                expiry_date,
                security_code,
                holder,
                ..
            } => envelope::SecretPayload::Card {
                number,
                expiry_date,
                security_code,
                holder,
            },
        })
    }
}

pub async fn run(
    command: SecretCommand,
    client: GophKeeperClient,
    cipher: Cipher,
) -> anyhow::Result<()> {
    match command {
        SecretCommand::Create { kind } => {
            let name = kind.name().to_string();
            let content = encrypt(&cipher, kind.into_payload()?)?;
            let resp = client.create_secret(&name, content).await?;
            println!(
                "Secret {} version {} created successfully",
                resp.name, resp.version
            );
        }
        SecretCommand::Update { kind } => {
            let name = kind.name().to_string();
            let content = encrypt(&cipher, kind.into_payload()?)?;
            let resp = client.update_secret(&name, content).await?;
            println!(
                "Secret {} version {} updated successfully",
                resp.name, resp.version
            );
        }
        SecretCommand::Get { name } => {
            let resp = client.get_secret(&name).await?;
            println!("{}", decrypt(&cipher, &resp.content)?);
        }
        SecretCommand::Delete { name } => {
            let resp = client.delete_secret(&name).await?;
            println!("Secret {} deleted successfully", resp.name);
        }
        SecretCommand::List => {
            let resp = client.list_secrets().await?;
            for summary in resp.secrets {
                println!("{}", decrypt(&cipher, &summary.content)?);
            }
        }
    }
    Ok(())
}

fn encrypt(cipher: &Cipher, payload: envelope::SecretPayload) -> anyhow::Result<Vec<u8>> {
    Ok(cipher.encrypt(&envelope::encode(&payload))?)
}

fn decrypt(cipher: &Cipher, ciphertext: &[u8]) -> anyhow::Result<envelope::SecretPayload> {
    let plaintext = cipher.decrypt(ciphertext)?;
    Ok(envelope::decode(&plaintext)?)
}
