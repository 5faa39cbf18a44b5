use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

use super::token::{AssetId, TokenHolding, TokenMetadata, ValuedHolding};

/// USD unit price per asset. Missing entries read as zero.
pub type PriceTable = HashMap<AssetId, f64>;

/// Name/symbol per asset. Missing entries fall back to defaults.
pub type MetadataTable = HashMap<AssetId, TokenMetadata>;

/// The connected wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Account(Pubkey);

impl Account {
    pub fn new(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }

    pub fn pubkey(&self) -> &Pubkey {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An authorized wallet connection, alive for one pipeline run
#[derive(Debug, Clone)]
pub struct Session {
    pub account: Account,
    pub connected_at: DateTime<Utc>,
}

impl Session {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            connected_at: Utc::now(),
        }
    }
}

/// Balances read from the chain for one account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountHoldings {
    pub native_amount: f64,
    /// Every token account with a positive balance. A mint may repeat.
    pub token_holdings: Vec<TokenHolding>,
    /// Mints of `token_holdings`, de-duplicated, in discovery order
    pub distinct_mints: Vec<AssetId>,
}

/// The rendered result of one pipeline run
#[derive(Debug, Clone)]
pub struct PortfolioView {
    pub account: Account,
    pub generated_at: DateTime<Utc>,
    pub holdings: Vec<ValuedHolding>,
}

impl PortfolioView {
    pub fn new(account: Account, holdings: Vec<ValuedHolding>) -> Self {
        Self {
            account,
            generated_at: Utc::now(),
            holdings,
        }
    }

    pub fn total_value_usd(&self) -> f64 {
        self.holdings.iter().map(|h| h.usd_value).sum()
    }

    pub fn lines(&self) -> Vec<String> {
        self.holdings.iter().map(ValuedHolding::display_line).collect()
    }
}
