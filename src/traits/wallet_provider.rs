use std::fmt;

use async_trait::async_trait;

/// Which wallet a provider claims to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletKind {
    Phantom,
    WatchOnly,
    Other(String),
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletKind::Phantom => write!(f, "phantom"),
            WalletKind::WatchOnly => write!(f, "watch-only"),
            WalletKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// An external wallet that can authorize an account
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request authorization. May wait on the user.
    async fn connect(&self) -> anyhow::Result<()>;

    fn kind(&self) -> WalletKind;

    /// Base58 address of the authorized account, once connected
    fn public_key(&self) -> Option<String>;
}
