//! Solana Holdings Library
//!
//! Connects a wallet, reads its SOL and SPL token balances, values them
//! in USD and renders the holdings sorted by value.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::Config;
pub use error::{AssemblyError, ConnectionError, FetchError, LookupError, PipelineError};
pub use models::{
    token::{AssetId, Holding, TokenHolding, TokenMetadata, ValuedHolding, NATIVE_ASSET_ID},
    portfolio::{Account, AccountHoldings, MetadataTable, PortfolioView, PriceTable, Session},
};
pub use traits::{
    data_provider::{ChainClient, ParsedTokenAccount},
    price_provider::PriceProvider,
    metadata_provider::MetadataProvider,
    wallet_provider::{WalletKind, WalletProvider},
    renderer::PortfolioRenderer,
};
pub use providers::{
    rpc_provider::RpcChainClient,
    price_provider::BirdeyePriceProvider,
    metadata_provider::DasMetadataProvider,
    address_wallet::AddressWallet,
};
pub use handlers::{console::ConsoleRenderer, memory::MemoryRenderer};
pub use tracker::{
    BalanceFetcher, MetadataFetcher, PortfolioTracker, PriceFetcher, RateLimitPolicy,
    RetryPolicy, WalletConnector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
