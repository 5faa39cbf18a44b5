use async_trait::async_trait;

use crate::error::LookupError;
use crate::models::token::TokenMetadata;

/// Trait for token metadata sources
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name and symbol of a mint; fields missing from the response are `None`
    async fn get_asset_metadata(&self, asset_id: &str) -> Result<TokenMetadata, LookupError>;
}
