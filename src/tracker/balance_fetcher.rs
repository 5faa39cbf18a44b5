use std::collections::HashSet;
use std::sync::Arc;

use solana_account_decoder_client_types::token::UiTokenAccount;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::portfolio::{Account, AccountHoldings};
use crate::models::token::TokenHolding;
use crate::traits::data_provider::{ChainClient, ParsedTokenAccount};
use crate::utils::helper::lamports_to_sol;

/// Reads native and token balances of an account
pub struct BalanceFetcher {
    chain: Arc<dyn ChainClient>,
    token_program_id: Pubkey,
}

impl BalanceFetcher {
    /// Fetcher for the SPL Token program
    pub fn new(chain: Arc<dyn ChainClient>) -> Self {
        Self::with_program(chain, spl_token::id())
    }

    pub fn with_program(chain: Arc<dyn ChainClient>, token_program_id: Pubkey) -> Self {
        Self {
            chain,
            token_program_id,
        }
    }

    pub async fn fetch_holdings(&self, account: &Account) -> Result<AccountHoldings, FetchError> {
        let lamports = self.chain.get_balance(account.pubkey()).await?;
        let native_amount = lamports_to_sol(lamports);
        info!("SOL balance: ◎{:.9}", native_amount);

        let accounts = self
            .chain
            .get_parsed_token_accounts(account.pubkey(), &self.token_program_id)
            .await?;

        let mut token_holdings = Vec::new();
        let mut distinct_mints = Vec::new();
        let mut seen = HashSet::new();

        for parsed_account in &accounts {
            let Some(holding) = parse_token_account(parsed_account)? else {
                continue;
            };

            if seen.insert(holding.asset_id.clone()) {
                distinct_mints.push(holding.asset_id.clone());
            }
            token_holdings.push(holding);
        }

        info!(
            "Found {} token accounts with non-zero balance ({} distinct mints)",
            token_holdings.len(),
            distinct_mints.len()
        );

        Ok(AccountHoldings {
            native_amount,
            token_holdings,
            distinct_mints,
        })
    }
}

/// `None` for empty or dust-free accounts (`uiAmount` missing or `<= 0`)
fn parse_token_account(account: &ParsedTokenAccount) -> Result<Option<TokenHolding>, FetchError> {
    let info = account.parsed.get("info").ok_or_else(|| {
        FetchError::Parse(format!("token account {} has no info", account.pubkey))
    })?;

    let token_data = serde_json::from_value::<UiTokenAccount>(info.clone())
        .map_err(|e| FetchError::Parse(format!("token account {}: {}", account.pubkey, e)))?;

    match token_data.token_amount.ui_amount {
        Some(amount) if amount > 0.0 => Ok(Some(TokenHolding::new(token_data.mint, amount))),
        _ => {
            debug!("Skipping empty token account {} ({})", account.pubkey, token_data.mint);
            Ok(None)
        }
    }
}
