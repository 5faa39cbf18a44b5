use async_trait::async_trait;

use crate::error::LookupError;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// USD unit price of one asset. `Ok(None)` when the response carried no value.
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, LookupError>;
}
