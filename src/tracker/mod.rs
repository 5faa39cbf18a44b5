//! The holdings pipeline and its stages

pub mod wallet_connector;
pub mod balance_fetcher;
pub mod price_fetcher;
pub mod metadata_fetcher;
pub mod assembler;
pub mod portfolio_tracker;

pub use wallet_connector::{RetryPolicy, WalletConnector};
pub use balance_fetcher::BalanceFetcher;
pub use price_fetcher::{PriceFetcher, RateLimitPolicy};
pub use metadata_fetcher::MetadataFetcher;
pub use assembler::assemble;
pub use portfolio_tracker::{PortfolioTracker, ERROR_PLACEHOLDER};
