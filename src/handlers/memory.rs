use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::renderer::PortfolioRenderer;

/// One call received by a [`MemoryRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Loading,
    Lines(Vec<String>),
    Error(String),
    Alert(String),
}

/// Records everything it is asked to render
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Lines of the most recent successful render
    pub fn last_lines(&self) -> Option<Vec<String>> {
        self.events().into_iter().rev().find_map(|event| match event {
            RenderEvent::Lines(lines) => Some(lines),
            _ => None,
        })
    }

    fn push(&self, event: RenderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[async_trait]
impl PortfolioRenderer for MemoryRenderer {
    async fn show_loading(&self) {
        self.push(RenderEvent::Loading);
    }

    async fn render(&self, lines: &[String]) {
        self.push(RenderEvent::Lines(lines.to_vec()));
    }

    async fn show_error(&self, placeholder: &str) {
        self.push(RenderEvent::Error(placeholder.to_string()));
    }

    async fn alert(&self, message: &str) {
        self.push(RenderEvent::Alert(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_order() {
        let renderer = MemoryRenderer::new();
        renderer.show_loading().await;
        renderer.render(&["a".to_string()]).await;

        assert_eq!(
            renderer.events(),
            vec![RenderEvent::Loading, RenderEvent::Lines(vec!["a".to_string()])]
        );
        assert_eq!(renderer.last_lines(), Some(vec!["a".to_string()]));
    }
}
