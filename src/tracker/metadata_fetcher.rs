use std::sync::Arc;

use dashmap::DashMap;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::models::portfolio::MetadataTable;
use crate::models::token::{AssetId, TokenMetadata};
use crate::traits::metadata_provider::MetadataProvider;

/// Looks up name/symbol for every mint at once
pub struct MetadataFetcher {
    provider: Arc<dyn MetadataProvider>,
}

impl MetadataFetcher {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// One request per mint, all in flight together. Failed lookups are
    /// left out of the table.
    pub async fn fetch_metadata(&self, mints: &[AssetId]) -> MetadataTable {
        let table: DashMap<AssetId, TokenMetadata> = DashMap::with_capacity(mints.len());

        join_all(mints.iter().map(|mint| {
            let table = &table;
            async move {
                match self.provider.get_asset_metadata(mint).await {
                    Ok(metadata) => {
                        table.insert(mint.clone(), metadata);
                    }
                    Err(e) => warn!("Metadata lookup failed for {}: {}", mint, e),
                }
            }
        }))
        .await;

        debug!("Resolved metadata for {}/{} mints", table.len(), mints.len());
        table.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::LookupError;

    /// Every call sleeps, tracking how many overlap
    #[derive(Default)]
    struct SlowMetadata {
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    #[async_trait]
    impl MetadataProvider for SlowMetadata {
        async fn get_asset_metadata(&self, asset_id: &str) -> Result<TokenMetadata, LookupError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            match asset_id {
                "bad" => Err(LookupError::Transport("connection reset".into())),
                "bare" => Ok(TokenMetadata::default()),
                id => Ok(TokenMetadata::new(format!("{} token", id), id.to_uppercase())),
            }
        }
    }

    fn mints(list: &[&str]) -> Vec<AssetId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn requests_run_concurrently() {
        let provider = Arc::new(SlowMetadata::default());
        let fetcher = MetadataFetcher::new(provider.clone());

        let start = tokio::time::Instant::now();
        let table = fetcher.fetch_metadata(&mints(&["a", "b", "c", "d"])).await;

        assert_eq!(table.len(), 4);
        assert_eq!(provider.max_in_flight.load(Ordering::SeqCst), 4);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn failed_lookup_is_left_out() {
        let fetcher = MetadataFetcher::new(Arc::new(SlowMetadata::default()));

        let table = fetcher.fetch_metadata(&mints(&["jup", "bad", "bare"])).await;

        assert_eq!(table.get("jup"), Some(&TokenMetadata::new("jup token", "JUP")));
        assert!(!table.contains_key("bad"));
        assert_eq!(table.get("bare"), Some(&TokenMetadata::default()));
    }

    #[tokio::test]
    async fn no_mints_no_requests() {
        let provider = Arc::new(SlowMetadata::default());
        let fetcher = MetadataFetcher::new(provider.clone());

        assert!(fetcher.fetch_metadata(&[]).await.is_empty());
        assert_eq!(provider.max_in_flight.load(Ordering::SeqCst), 0);
    }
}
