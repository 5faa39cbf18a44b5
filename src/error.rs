use thiserror::Error;

/// Failures while obtaining an account from the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("no wallet provider found, install or configure a Solana wallet")]
    ProviderMissing,

    #[error("wallet connected but returned no usable identity")]
    NoIdentityReturned,

    #[error("failed to connect wallet after {attempts} attempts")]
    MaxAttemptsExceeded { attempts: u32 },
}

/// Failures while reading balances from the chain RPC. Always fatal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("unparseable token account: {0}")]
    Parse(String),

    #[error("rpc request timed out")]
    Timeout,
}

/// A single price or metadata lookup that failed. Never fatal.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("http status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Parse(String),

    #[error("json-rpc error: {0}")]
    Rpc(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LookupError::Status(status.as_u16())
        } else if err.is_decode() {
            LookupError::Parse(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("invalid amount {amount} for {asset_id}")]
    InvalidAmount { asset_id: String, amount: f64 },
}

/// Everything that aborts a pipeline run. The `Display` text is what the
/// user sees in the alert.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to connect wallet: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Failed to load balances: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to build portfolio: {0}")]
    Assembly(#[from] AssemblyError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
