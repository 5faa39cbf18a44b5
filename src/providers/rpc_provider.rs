use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use solana_account_decoder_client_types::UiAccountData;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::error::FetchError;
use crate::traits::data_provider::{ChainClient, ParsedTokenAccount};

/// `ChainClient` backed by a Solana JSON-RPC endpoint
pub struct RpcChainClient {
    rpc_client: Arc<RpcClient>,
}

impl RpcChainClient {
    /// Create a new RPC chain client
    pub fn new(rpc_url: String, timeout: Duration) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            rpc_url,
            timeout,
            CommitmentConfig::confirmed(),
        );

        Self {
            rpc_client: Arc::new(client),
        }
    }
}

fn map_client_error(err: ClientError) -> FetchError {
    match err.kind() {
        ClientErrorKind::Reqwest(e) if e.is_timeout() => FetchError::Timeout,
        _ => FetchError::Rpc(err.to_string()),
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64, FetchError> {
        self.rpc_client
            .get_balance(owner)
            .await
            .map_err(map_client_error)
    }

    async fn get_parsed_token_accounts(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<ParsedTokenAccount>, FetchError> {
        let accounts = self
            .rpc_client
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(*program_id))
            .await
            .map_err(map_client_error)?;

        debug!("RPC returned {} token accounts for {}", accounts.len(), owner);

        accounts
            .into_iter()
            .map(|keyed_account| match keyed_account.account.data {
                UiAccountData::Json(parsed_account) => Ok(ParsedTokenAccount {
                    pubkey: keyed_account.pubkey,
                    parsed: parsed_account.parsed,
                }),
                _ => Err(FetchError::Parse(format!(
                    "token account {} was not returned as jsonParsed",
                    keyed_account.pubkey
                ))),
            })
            .collect()
    }
}
