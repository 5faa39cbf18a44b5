use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::error::PipelineError;
use crate::models::portfolio::PortfolioView;
use crate::models::token::NATIVE_ASSET_ID;
use crate::providers::{AddressWallet, BirdeyePriceProvider, DasMetadataProvider, RpcChainClient};
use crate::traits::renderer::PortfolioRenderer;
use crate::traits::wallet_provider::{WalletKind, WalletProvider};

use super::assembler::assemble;
use super::balance_fetcher::BalanceFetcher;
use super::metadata_fetcher::MetadataFetcher;
use super::price_fetcher::{PriceFetcher, RateLimitPolicy};
use super::wallet_connector::{RetryPolicy, WalletConnector};

/// Shown in place of the holdings list when a run fails
pub const ERROR_PLACEHOLDER: &str = "Error loading balances";

/// Runs the connect → balances → prices/metadata → assemble pipeline
pub struct PortfolioTracker {
    connector: WalletConnector,
    balance_fetcher: BalanceFetcher,
    price_fetcher: PriceFetcher,
    metadata_fetcher: MetadataFetcher,
    renderer: Arc<dyn PortfolioRenderer>,
}

impl PortfolioTracker {
    /// Create a new portfolio tracker
    pub fn new(
        connector: WalletConnector,
        balance_fetcher: BalanceFetcher,
        price_fetcher: PriceFetcher,
        metadata_fetcher: MetadataFetcher,
        renderer: Arc<dyn PortfolioRenderer>,
    ) -> Self {
        Self {
            connector,
            balance_fetcher,
            price_fetcher,
            metadata_fetcher,
            renderer,
        }
    }

    /// Wire the HTTP/RPC implementations from configuration
    pub fn from_config(config: &Config, renderer: Arc<dyn PortfolioRenderer>) -> anyhow::Result<Self> {
        let wallet = config
            .wallet_address
            .as_ref()
            .map(|address| Arc::new(AddressWallet::new(address.clone())) as Arc<dyn WalletProvider>);

        let connector = WalletConnector::new(
            wallet,
            WalletKind::WatchOnly,
            RetryPolicy {
                max_attempts: config.connect_max_attempts,
                backoff: config.connect_backoff,
            },
        );

        let chain = RpcChainClient::new(config.solana_rpc_url.clone(), config.request_timeout);

        let price_provider = BirdeyePriceProvider::new(
            config.price_api_url.clone(),
            config.price_chain.clone(),
            config.birdeye_api_key.clone(),
            config.request_timeout,
        )?;
        let policy = RateLimitPolicy {
            inter_delay: config.price_request_delay,
            ..RateLimitPolicy::default()
        };

        let metadata_provider =
            DasMetadataProvider::new(config.metadata_rpc_url.clone(), config.request_timeout)?;

        Ok(Self::new(
            connector,
            BalanceFetcher::new(Arc::new(chain)),
            PriceFetcher::new(Arc::new(price_provider), policy),
            MetadataFetcher::new(Arc::new(metadata_provider)),
            renderer,
        ))
    }

    /// Run the pipeline once. Either the full list is rendered or the
    /// error placeholder and an alert replace it.
    pub async fn run(&self) -> Result<PortfolioView, PipelineError> {
        self.renderer.show_loading().await;

        match self.load().await {
            Ok(view) => {
                self.renderer.render(&view.lines()).await;
                Ok(view)
            }
            Err(e) => {
                error!("Pipeline failed: {}", e);
                self.renderer.show_error(ERROR_PLACEHOLDER).await;
                self.renderer.alert(&e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<PortfolioView, PipelineError> {
        let session = self.connector.connect().await?;
        let holdings = self.balance_fetcher.fetch_holdings(&session.account).await?;

        let mut price_ids = Vec::with_capacity(holdings.distinct_mints.len() + 1);
        price_ids.push(NATIVE_ASSET_ID.to_string());
        price_ids.extend(holdings.distinct_mints.iter().cloned());

        info!(
            "Fetching prices for {} assets and metadata for {} mints",
            price_ids.len(),
            holdings.distinct_mints.len()
        );

        let (prices, metadata) = tokio::join!(
            self.price_fetcher.fetch_prices(&price_ids),
            self.metadata_fetcher.fetch_metadata(&holdings.distinct_mints),
        );

        let valued = assemble(
            holdings.native_amount,
            &holdings.token_holdings,
            &prices,
            &metadata,
        )?;

        let view = PortfolioView::new(session.account, valued);
        log_summary(&view);
        Ok(view)
    }
}

fn log_summary(view: &PortfolioView) {
    info!("{}", "=".repeat(80));
    info!("PORTFOLIO SUMMARY");
    info!("{}", "-".repeat(80));
    info!("Wallet Address: {}", view.account);
    info!(
        "Timestamp: {}",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    info!("Holdings: {}", view.holdings.len());
    info!("➤ Total Portfolio Value: ${:.2}", view.total_value_usd());
    info!("{}", "=".repeat(80));
}
