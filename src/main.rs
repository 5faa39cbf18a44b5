use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use tracing::level_filters::LevelFilter;

use sol_holdings::{Config, ConsoleRenderer, PortfolioTracker, VERSION};

fn main() -> anyhow::Result<()> {
    let max_level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::INFO);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(max_level)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Config::from_env()?;

    tokio::runtime::Runtime::new()?.block_on(async {
        info!("sol-holdings v{}", VERSION);
        info!("RPC URL: {}", config.solana_rpc_url);
        if let Some(address) = &config.wallet_address {
            info!("Wallet Address: {}", address);
        }

        let tracker = PortfolioTracker::from_config(&config, Arc::new(ConsoleRenderer::new()))?;
        tracker.run().await?;

        Ok(())
    })
}
