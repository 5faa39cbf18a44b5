//! Renderers for pipeline output

pub mod console;
pub mod memory;

// Re-export for convenience
pub use console::ConsoleRenderer;
pub use memory::{MemoryRenderer, RenderEvent};
