use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gift_valuator::application::{Cli, CommandExecutor};
use gift_valuator::shared::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Config priority: --config path > ./Config.toml > defaults
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from(path)?,
        None => ConfigLoader::load_config()?,
    };

    CommandExecutor::execute(cli.command, config).await?;
    Ok(())
}
