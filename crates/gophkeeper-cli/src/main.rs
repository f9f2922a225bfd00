//! GophKeeper CLI binary.

use clap::Parser;
use gophkeeper_cli::Cli;
use gophkeeper_logging::{Level, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gophkeeper_logging::init("gophkeeper-cli", Level::WARN, LogFormat::Plaintext)?;

    if let Err(err) = gophkeeper_cli::run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
    Ok(())
}
