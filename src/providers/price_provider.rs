use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::LookupError;
use crate::traits::price_provider::PriceProvider;

/// Price provider for the Birdeye `GET /defi/price` endpoint
pub struct BirdeyePriceProvider {
    client: Client,
    price_url: String,
    chain: String,
    api_key: String,
}

impl BirdeyePriceProvider {
    /// Create a new price provider
    pub fn new(
        price_url: String,
        chain: String,
        api_key: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            price_url,
            chain,
            api_key,
        })
    }
}

/// Extract `data.value` from a price response body
pub fn parse_price_body(body: &str) -> Result<Option<f64>, LookupError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    Ok(json["data"]["value"].as_f64())
}

#[async_trait]
impl PriceProvider for BirdeyePriceProvider {
    async fn get_price(&self, asset_id: &str) -> Result<Option<f64>, LookupError> {
        let response = self
            .client
            .get(&self.price_url)
            .query(&[("address", asset_id)])
            .header("accept", "application/json")
            .header("x-chain", &self.chain)
            .header("X-API-KEY", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let price = parse_price_body(&body)?;
        debug!("Price for {}: {:?}", asset_id, price);

        Ok(price)
    }
}
