use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::LookupError;
use crate::models::token::TokenMetadata;
use crate::traits::metadata_provider::MetadataProvider;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<AssetResult>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AssetResult {
    content: Option<AssetContent>,
}

#[derive(Debug, Deserialize)]
struct AssetContent {
    metadata: Option<TokenMetadata>,
}

/// Metadata provider using the DAS `getAsset` JSON-RPC method
pub struct DasMetadataProvider {
    client: Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl DasMetadataProvider {
    /// Create a new metadata provider
    pub fn new(rpc_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            rpc_url,
            next_id: AtomicU64::new(1),
        })
    }

    fn request_body(&self, asset_id: &str) -> serde_json::Value {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": id.to_string(),
            "method": "getAsset",
            "params": { "id": asset_id },
        })
    }
}

/// Pull `content.metadata.{name,symbol}` out of a `getAsset` response
pub fn parse_asset_body(body: &str) -> Result<TokenMetadata, LookupError> {
    let response: RpcResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    if let Some(err) = response.error {
        return Err(LookupError::Rpc(format!("{} ({})", err.message, err.code)));
    }

    Ok(response
        .result
        .and_then(|r| r.content)
        .and_then(|c| c.metadata)
        .unwrap_or_default())
}

#[async_trait]
impl MetadataProvider for DasMetadataProvider {
    async fn get_asset_metadata(&self, asset_id: &str) -> Result<TokenMetadata, LookupError> {
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&self.request_body(asset_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let metadata = parse_asset_body(&body)?;
        debug!(
            "Metadata for {}: name={:?} symbol={:?}",
            asset_id, metadata.name, metadata.symbol
        );

        Ok(metadata)
    }
}
