use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;

use crate::error::FetchError;

/// A token account as returned by a `jsonParsed` owner query
#[derive(Debug, Clone)]
pub struct ParsedTokenAccount {
    /// Address of the token account itself
    pub pubkey: String,
    /// The `parsed` object, e.g. `{ "type": "account", "info": { "mint": .., "tokenAmount": .. } }`
    pub parsed: serde_json::Value,
}

/// Chain RPC operations the balance fetcher depends on
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Native balance in lamports
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64, FetchError>;

    /// Token accounts owned by `owner` under the given token program
    async fn get_parsed_token_accounts(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<ParsedTokenAccount>, FetchError>;
}
