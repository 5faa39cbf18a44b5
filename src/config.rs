// Configuration loading and settings
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
const DEFAULT_PRICE_URL: &str = "https://public-api.birdeye.so/defi/price";
const DEFAULT_METADATA_URL: &str = "https://mainnet.helius-rpc.com/";

#[derive(Debug, Clone)]
pub struct Config {
    pub solana_rpc_url: String,
    /// Absent means no wallet provider is available
    pub wallet_address: Option<String>,
    pub price_api_url: String,
    pub price_chain: String,
    pub birdeye_api_key: String,
    pub metadata_rpc_url: String,
    pub price_request_delay: Duration,
    pub connect_max_attempts: u32,
    pub connect_backoff: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            solana_rpc_url: DEFAULT_RPC_URL.to_string(),
            wallet_address: None,
            price_api_url: DEFAULT_PRICE_URL.to_string(),
            price_chain: "solana".to_string(),
            birdeye_api_key: String::new(),
            metadata_rpc_url: DEFAULT_METADATA_URL.to_string(),
            price_request_delay: Duration::from_millis(1000),
            connect_max_attempts: 3,
            connect_backoff: Duration::from_millis(500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load from the environment, reading `.env` first if it exists
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let metadata_rpc_url = match var("METADATA_RPC_URL") {
            Some(url) => url,
            None => match var("HELIUS_API_KEY") {
                Some(key) => format!("{}?api-key={}", DEFAULT_METADATA_URL, key),
                None => defaults.metadata_rpc_url,
            },
        };

        Ok(Config {
            solana_rpc_url: var("SOLANA_RPC_URL").unwrap_or(defaults.solana_rpc_url),
            wallet_address: var("WALLET_ADDRESS"),
            price_api_url: var("PRICE_API_URL").unwrap_or(defaults.price_api_url),
            price_chain: var("PRICE_CHAIN").unwrap_or(defaults.price_chain),
            birdeye_api_key: var("BIRDEYE_API_KEY").unwrap_or(defaults.birdeye_api_key),
            metadata_rpc_url,
            price_request_delay: parse_var(&var, "PRICE_REQUEST_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.price_request_delay),
            connect_max_attempts: parse_var(&var, "CONNECT_MAX_ATTEMPTS")?
                .filter(|n| *n > 0)
                .unwrap_or(defaults.connect_max_attempts),
            connect_backoff: parse_var(&var, "CONNECT_BACKOFF_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_backoff),
            request_timeout: parse_var(&var, "REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }
}

fn parse_var<T, F>(var: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.solana_rpc_url, "https://api.devnet.solana.com");
        assert_eq!(config.wallet_address, None);
        assert_eq!(config.price_request_delay, Duration::from_millis(1000));
        assert_eq!(config.connect_max_attempts, 3);
        assert_eq!(config.connect_backoff, Duration::from_millis(500));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SOLANA_RPC_URL", "http://localhost:8899"),
            ("WALLET_ADDRESS", "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1"),
            ("PRICE_REQUEST_DELAY_MS", "250"),
            ("BIRDEYE_API_KEY", "secret"),
        ])
        .unwrap();

        assert_eq!(config.solana_rpc_url, "http://localhost:8899");
        assert!(config.wallet_address.is_some());
        assert_eq!(config.price_request_delay, Duration::from_millis(250));
        assert_eq!(config.birdeye_api_key, "secret");
    }

    #[test]
    fn helius_key_builds_metadata_url() {
        let config = config_from(&[("HELIUS_API_KEY", "abc")]).unwrap();
        assert_eq!(config.metadata_rpc_url, "https://mainnet.helius-rpc.com/?api-key=abc");
    }

    #[test]
    fn blank_wallet_address_is_absent() {
        let config = config_from(&[("WALLET_ADDRESS", "  ")]).unwrap();
        assert_eq!(config.wallet_address, None);
    }

    #[test]
    fn invalid_number_is_an_error() {
        let err = config_from(&[("CONNECT_MAX_ATTEMPTS", "three")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for CONNECT_MAX_ATTEMPTS: three");
    }
}
