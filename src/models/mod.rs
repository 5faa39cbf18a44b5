//! Data models for the holdings pipeline

pub mod token;
pub mod portfolio;

// Re-export for convenience
pub use token::{AssetId, Holding, TokenHolding, TokenMetadata, ValuedHolding, NATIVE_ASSET_ID};
pub use portfolio::{Account, AccountHoldings, MetadataTable, PortfolioView, PriceTable, Session};
