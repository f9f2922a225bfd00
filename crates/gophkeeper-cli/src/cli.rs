//! Top-level command tree — grounded in
//! `original_source/cmd/client/cmd/root.go`.

use clap::{Args, Parser, Subcommand};

use crate::auth::AuthCommand;
use crate::config::ClientConfig;
use crate::secret::SecretCommand;

#[derive(Debug, Parser)]
#[command(name = "gophkeeper-cli", about = "GophKeeper client", version)]
pub struct Cli {
    #[command(flatten)]
    pub config: ClientConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage user registration, authentication and authorization.
    Auth(AuthArgs),
    /// Manage user private data.
    Secret(SecretArgs),
}

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Args)]
pub struct SecretArgs {
    #[command(subcommand)]
    pub command: SecretCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthCommand;
    use crate::secret::{SecretCommand, SecretKind};

    #[test]
    fn parses_auth_login() {
        let cli = Cli::try_parse_from([
            "gophkeeper-cli",
            "auth",
            "login",
            "--email",
            "alice@example.com",
            "--password",
            "hunter2",
        ])
        .unwrap();

        match cli.command {
            Command::Auth(AuthArgs {
                command: AuthCommand::Login { email, password },
            }) => {
                assert_eq!(email, "alice@example.com");
                assert_eq!(password, "hunter2");
            }
            other => panic!("expected AuthCommand::Login, got {other:?}"),
        }
    }

    #[test]
    fn parses_secret_create_credentials() {
        let cli = Cli::try_parse_from([
            "gophkeeper-cli",
            "secret",
            "create",
            "credentials",
            "--name",
            "gmail",
            "--login",
            "alice",
            "--password",
            "hunter2",
        ])
        .unwrap();

        match cli.command {
            Command::Secret(SecretArgs {
                command: SecretCommand::Create {
                    kind: SecretKind::Credentials { name, login, .. },
                },
            }) => {
                assert_eq!(name, "gmail");
                assert_eq!(login, "alice");
            }
            other => panic!("expected SecretCommand::Create(Credentials), got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_required_flags() {
        assert!(Cli::try_parse_from(["gophkeeper-cli", "auth", "login", "--email", "a"]).is_err());
    }

    #[test]
    fn server_defaults_when_unset() {
        let cli = Cli::try_parse_from(["gophkeeper-cli", "secret", "list"]).unwrap();
        assert_eq!(cli.config.server, "http://127.0.0.1:9090");
    }
}
