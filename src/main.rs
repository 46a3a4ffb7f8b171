//! Main entry point for the AIFortune prediction service.

use anyhow::Result;
use std::path::Path;

use aifortune::{server, Config};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = match std::env::var("AIFORTUNE_CONFIG") {
        Ok(path) => Config::from_file(Path::new(&path))?,
        Err(_) => Config::default(),
    };

    info!("Starting AIFortune prediction service");

    server::run(config).await?;

    Ok(())
}
