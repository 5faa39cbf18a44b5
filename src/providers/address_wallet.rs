use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::traits::wallet_provider::{WalletKind, WalletProvider};
use crate::utils::helper::parse_pubkey;

/// Watch-only wallet for a configured address. Holds no keys.
pub struct AddressWallet {
    address: String,
    connected: AtomicBool,
}

impl AddressWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connected: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl WalletProvider for AddressWallet {
    async fn connect(&self) -> anyhow::Result<()> {
        parse_pubkey(&self.address)?;
        self.connected.store(true, Ordering::SeqCst);
        debug!("Watch-only wallet connected: {}", self.address);
        Ok(())
    }

    fn kind(&self) -> WalletKind {
        WalletKind::WatchOnly
    }

    fn public_key(&self) -> Option<String> {
        if self.connected.load(Ordering::SeqCst) {
            Some(self.address.clone())
        } else {
            None
        }
    }
}
