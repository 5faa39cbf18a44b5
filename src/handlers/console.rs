use async_trait::async_trait;
use tracing::{error, info};

use crate::traits::renderer::PortfolioRenderer;

/// Placeholder printed while the pipeline runs
pub const LOADING_PLACEHOLDER: &str = "Loading balances...";

/// Console logging renderer
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Create a new console renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PortfolioRenderer for ConsoleRenderer {
    async fn show_loading(&self) {
        info!("{}", LOADING_PLACEHOLDER);
    }

    async fn render(&self, lines: &[String]) {
        info!("");
        info!("TOKEN HOLDINGS:");
        info!("{}", "-".repeat(80));
        for line in lines {
            info!("{}", line);
        }
        info!("{}", "=".repeat(80));
    }

    async fn show_error(&self, placeholder: &str) {
        info!("{}", placeholder);
    }

    async fn alert(&self, message: &str) {
        error!("{}", message);
    }
}
