use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::models::portfolio::PriceTable;
use crate::models::token::AssetId;
use crate::traits::price_provider::PriceProvider;

/// Self-imposed rate limit for the price API.
///
/// `concurrency` lookups are in flight at a time and every group is
/// followed by `inter_delay`, whatever its outcome.
#[derive(Debug, Clone)]
pub struct RateLimitPolicy {
    pub concurrency: usize,
    pub inter_delay: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            concurrency: 1,
            inter_delay: Duration::from_millis(1000),
        }
    }
}

/// Builds a price table one asset at a time
pub struct PriceFetcher {
    provider: Arc<dyn PriceProvider>,
    policy: RateLimitPolicy,
}

impl PriceFetcher {
    pub fn new(provider: Arc<dyn PriceProvider>, policy: RateLimitPolicy) -> Self {
        Self { provider, policy }
    }

    /// Never fails: a lookup that errors or carries no value records 0
    pub async fn fetch_prices(&self, asset_ids: &[AssetId]) -> PriceTable {
        let mut seen = HashSet::new();
        let unique: Vec<&AssetId> = asset_ids.iter().filter(|id| seen.insert(*id)).collect();

        let mut prices = PriceTable::with_capacity(unique.len());
        for group in unique.chunks(self.policy.concurrency.max(1)) {
            let results = join_all(group.iter().map(|id| self.lookup(id))).await;
            for (id, price) in group.iter().zip(results) {
                prices.insert((*id).clone(), price);
            }

            tokio::time::sleep(self.policy.inter_delay).await;
        }

        debug!("Fetched {} prices", prices.len());
        prices
    }

    async fn lookup(&self, asset_id: &str) -> f64 {
        match self.provider.get_price(asset_id).await {
            Ok(Some(price)) if price.is_finite() && price >= 0.0 => price,
            Ok(Some(price)) => {
                warn!("Discarding invalid price {} for {}", price, asset_id);
                0.0
            }
            Ok(None) => {
                debug!("No price value for {}", asset_id);
                0.0
            }
            Err(e) => {
                warn!("Price lookup failed for {}: {}", asset_id, e);
                0.0
            }
        }
    }
}
