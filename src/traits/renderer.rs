use async_trait::async_trait;

/// Receives the output of a pipeline run
#[async_trait]
pub trait PortfolioRenderer: Send + Sync {
    /// Shown before the pipeline starts
    async fn show_loading(&self);

    /// Formatted holdings, highest value first
    async fn render(&self, lines: &[String]);

    /// Replaces the holdings list when nothing can be shown
    async fn show_error(&self, placeholder: &str);

    /// User-facing failure message
    async fn alert(&self, message: &str);
}
