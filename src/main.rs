//! Minimal IRC Bot - Entry Point
//!
//! Loads the config, connects, and serves commands until the connection
//! fails.

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ircbot::{BotConfig, Commands, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with environment filter
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=ircbot=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ircbot=info")),
        )
        .init();

    // Optional config file path as the only argument
    let config = match env::args().nth(1) {
        Some(path) => BotConfig::load(&path)?,
        None => BotConfig::default(),
    };

    info!("Connecting to {} as {}", config.server, config.nick);
    let mut session = Session::connect(&config, Commands::builtin()).await?;

    // Only returns on a fatal read or write error
    if let Err(e) = session.read_and_respond().await {
        error!("Session ended: {}", e);
        return Err(e.into());
    }

    Ok(())
}
