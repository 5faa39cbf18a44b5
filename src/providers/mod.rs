//! Implementations of the external collaborators

pub mod rpc_provider;
pub mod price_provider;
pub mod metadata_provider;
pub mod address_wallet;

#[cfg(test)]
pub(crate) mod test_server;

// Re-export for convenience
pub use rpc_provider::RpcChainClient;
pub use price_provider::BirdeyePriceProvider;
pub use metadata_provider::DasMetadataProvider;
pub use address_wallet::AddressWallet;
