//! Seams to the external collaborators

pub mod data_provider;
pub mod price_provider;
pub mod metadata_provider;
pub mod wallet_provider;
pub mod renderer;

// Re-export for convenience
pub use data_provider::{ChainClient, ParsedTokenAccount};
pub use price_provider::PriceProvider;
pub use metadata_provider::MetadataProvider;
pub use wallet_provider::{WalletKind, WalletProvider};
pub use renderer::PortfolioRenderer;
