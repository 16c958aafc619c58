use crate::errors::AppError;
use crate::sidebar::Sidebar;
use clap::ValueEnum;
use serde::Deserialize;

/// Output format for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Navigation markup for the documentation site
    #[default]
    Html,
    /// Nested Markdown bullet lists
    Markdown,
    /// The sidebar model as JSON
    Json,
}

/// Configuration for rendering
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Wrap the sidebar in the page layout (HTML only)
    pub layout: bool,
}

/// Trait for rendering a sidebar in different formats
pub trait Renderer {
    fn render(&self, sidebar: &Sidebar) -> Result<String, AppError>;

    fn output_format(&self) -> OutputFormat;
}
