use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::ConnectionError;
use crate::models::portfolio::{Account, Session};
use crate::traits::wallet_provider::{WalletKind, WalletProvider};
use crate::utils::helper::{format_pubkey, parse_pubkey};

/// Fixed-backoff retry settings for wallet connection
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Obtains an authorized account from the wallet provider
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    expected_kind: WalletKind,
    policy: RetryPolicy,
}

impl WalletConnector {
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        expected_kind: WalletKind,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            provider,
            expected_kind,
            policy,
        }
    }

    /// Connect, retrying recoverable failures up to `max_attempts` times.
    /// At least one attempt is always made.
    pub async fn connect(&self) -> Result<Session, ConnectionError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ConnectionError::ProviderMissing)?;

        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.try_connect(provider.as_ref()).await {
                Ok(account) => {
                    info!(
                        "Wallet connected: {} (attempt {})",
                        format_pubkey(account.pubkey()),
                        attempt
                    );
                    return Ok(Session::new(account));
                }
                Err(e) => {
                    warn!(
                        "Wallet connection attempt {}/{} failed: {}",
                        attempt, max_attempts, e
                    );
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.backoff).await;
            }
        }

        Err(ConnectionError::MaxAttemptsExceeded {
            attempts: max_attempts,
        })
    }

    async fn try_connect(&self, provider: &dyn WalletProvider) -> anyhow::Result<Account> {
        provider.connect().await?;

        let kind = provider.kind();
        if kind != self.expected_kind {
            anyhow::bail!(
                "{} (provider is {}, expected {})",
                ConnectionError::NoIdentityReturned,
                kind,
                self.expected_kind
            );
        }

        let address = provider
            .public_key()
            .filter(|key| !key.is_empty())
            .ok_or(ConnectionError::NoIdentityReturned)?;

        Ok(Account::new(parse_pubkey(&address)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use solana_sdk::pubkey::Pubkey;

    /// Fails the first `failures` connects, then succeeds
    struct FlakyWallet {
        failures: usize,
        calls: AtomicUsize,
        address: String,
        kind: WalletKind,
    }

    impl FlakyWallet {
        fn new(failures: usize, address: String) -> Self {
            Self {
                failures,
                calls: AtomicUsize::new(0),
                address,
                kind: WalletKind::Phantom,
            }
        }
    }

    #[async_trait]
    impl WalletProvider for FlakyWallet {
        async fn connect(&self) -> anyhow::Result<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                anyhow::bail!("user rejected the request");
            }
            Ok(())
        }

        fn kind(&self) -> WalletKind {
            self.kind.clone()
        }

        fn public_key(&self) -> Option<String> {
            Some(self.address.clone())
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            backoff: Duration::from_millis(5),
        }
    }

    #[tokio::test]
    async fn succeeds_on_third_attempt() {
        let pubkey = Pubkey::new_unique();
        let wallet = Arc::new(FlakyWallet::new(2, pubkey.to_string()));
        let connector = WalletConnector::new(Some(wallet.clone()), WalletKind::Phantom, fast_policy());

        let session = connector.connect().await.unwrap();

        assert_eq!(session.account.pubkey(), &pubkey);
        assert_eq!(wallet.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let wallet = Arc::new(FlakyWallet::new(10, Pubkey::new_unique().to_string()));
        let connector = WalletConnector::new(Some(wallet.clone()), WalletKind::Phantom, fast_policy());

        let err = connector.connect().await.unwrap_err();

        assert_eq!(err, ConnectionError::MaxAttemptsExceeded { attempts: 3 });
        assert_eq!(wallet.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_max_attempts_still_tries_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            backoff: Duration::from_millis(5),
        };

        let good = Arc::new(FlakyWallet::new(0, Pubkey::new_unique().to_string()));
        let connector = WalletConnector::new(Some(good.clone()), WalletKind::Phantom, policy.clone());
        assert!(connector.connect().await.is_ok());
        assert_eq!(good.calls.load(Ordering::SeqCst), 1);

        let bad = Arc::new(FlakyWallet::new(10, Pubkey::new_unique().to_string()));
        let connector = WalletConnector::new(Some(bad.clone()), WalletKind::Phantom, policy);
        assert_eq!(
            connector.connect().await.unwrap_err(),
            ConnectionError::MaxAttemptsExceeded { attempts: 1 }
        );
        assert_eq!(bad.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_provider_fails_immediately() {
        let connector = WalletConnector::new(None, WalletKind::Phantom, fast_policy());
        assert_eq!(connector.connect().await.unwrap_err(), ConnectionError::ProviderMissing);
    }

    #[tokio::test]
    async fn empty_identity_is_retried() {
        let wallet = Arc::new(FlakyWallet::new(0, String::new()));
        let connector = WalletConnector::new(Some(wallet.clone()), WalletKind::Phantom, fast_policy());

        let err = connector.connect().await.unwrap_err();

        assert_eq!(err, ConnectionError::MaxAttemptsExceeded { attempts: 3 });
        assert_eq!(wallet.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn wrong_wallet_kind_is_rejected() {
        let mut wallet = FlakyWallet::new(0, Pubkey::new_unique().to_string());
        wallet.kind = WalletKind::Other("solflare".into());
        let connector = WalletConnector::new(Some(Arc::new(wallet)), WalletKind::Phantom, fast_policy());

        assert!(matches!(
            connector.connect().await,
            Err(ConnectionError::MaxAttemptsExceeded { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn waits_fixed_backoff_between_attempts() {
        let wallet = Arc::new(FlakyWallet::new(2, Pubkey::new_unique().to_string()));
        let connector = WalletConnector::new(Some(wallet), WalletKind::Phantom, RetryPolicy::default());

        let start = tokio::time::Instant::now();
        connector.connect().await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(1500));
    }
}
