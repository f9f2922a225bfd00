//! GophKeeper server binary.

use clap::Parser;
use gophkeeper_logging::{Level, LogFormat};
use gophkeeper_server::{Server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    gophkeeper_logging::init("gophkeeper-server", Level::INFO, LogFormat::Plaintext)?;
    tracing::info!("starting gophkeeper-server");

    let server = Server::new(&config)?;
    server.run().await?;

    Ok(())
}
