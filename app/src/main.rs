use anyhow::Result;
use clap::Parser;

use uez_app::{commands, logging, settings, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = settings::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    tracing::debug!(environment = %config.environment, api = %config.api.base_url, "Configuration loaded");

    commands::run(cli.command, &config).await
}
