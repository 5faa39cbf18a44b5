use serde::Deserialize;

/// Opaque, case-sensitive asset key (a mint address, or the native placeholder).
pub type AssetId = String;

/// Wrapped SOL mint, used as the price key for the native balance
pub const NATIVE_ASSET_ID: &str = "So11111111111111111111111111111111111111112";

pub const NATIVE_SYMBOL: &str = "SOL";

/// Name shown when metadata has no name
pub const UNKNOWN_NAME: &str = "Unknown";

const FALLBACK_SYMBOL_LEN: usize = 6;

/// One token account's balance as reported by the chain
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolding {
    pub asset_id: AssetId,
    pub raw_amount: f64,
}

impl TokenHolding {
    pub fn new(asset_id: impl Into<AssetId>, raw_amount: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            raw_amount,
        }
    }
}

/// Name and symbol from the metadata RPC. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            symbol: Some(symbol.into()),
        }
    }
}

/// A holding with display labels resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub asset_id: AssetId,
    pub raw_amount: f64,
    pub display_name: String,
    pub display_symbol: String,
    pub is_native: bool,
}

impl Holding {
    /// The native SOL balance; never looked up in metadata
    pub fn native(raw_amount: f64) -> Self {
        Self {
            asset_id: NATIVE_ASSET_ID.to_string(),
            raw_amount,
            display_name: NATIVE_SYMBOL.to_string(),
            display_symbol: NATIVE_SYMBOL.to_string(),
            is_native: true,
        }
    }

    /// A token holding labelled from metadata, falling back to
    /// `"Unknown"` and the first characters of the mint. Blank labels
    /// count as missing.
    pub fn token(holding: &TokenHolding, metadata: Option<&TokenMetadata>) -> Self {
        let name = metadata
            .and_then(|m| non_blank(m.name.as_deref()))
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let symbol = metadata
            .and_then(|m| non_blank(m.symbol.as_deref()))
            .unwrap_or_else(|| fallback_symbol(&holding.asset_id));

        Self {
            asset_id: holding.asset_id.clone(),
            raw_amount: holding.raw_amount,
            display_name: name,
            display_symbol: symbol,
            is_native: false,
        }
    }
}

fn non_blank(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First six characters of an asset id
pub fn fallback_symbol(asset_id: &str) -> String {
    asset_id.chars().take(FALLBACK_SYMBOL_LEN).collect()
}

/// A holding with its USD valuation
#[derive(Debug, Clone, PartialEq)]
pub struct ValuedHolding {
    pub holding: Holding,
    pub usd_value: f64,
}

impl ValuedHolding {
    pub fn new(holding: Holding, price: f64) -> Self {
        let usd_value = holding.raw_amount * price;
        Self { holding, usd_value }
    }

    /// The line handed to the renderer
    pub fn display_line(&self) -> String {
        if self.holding.is_native {
            format!(
                "$ {:.2} USD - {}: {}",
                self.usd_value, NATIVE_SYMBOL, self.holding.raw_amount
            )
        } else {
            format!(
                "$ {:.2} USD - {} ({}): {}",
                self.usd_value,
                self.holding.display_name,
                self.holding.display_symbol,
                self.holding.raw_amount
            )
        }
    }
}
