use crate::errors::AppError;
use crate::render::renderer::{OutputFormat, Renderer};
use crate::sidebar::Sidebar;

/// Emits the sidebar model as pretty-printed JSON
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, sidebar: &Sidebar) -> Result<String, AppError> {
        let mut output = serde_json::to_string_pretty(sidebar)?;
        output.push('\n');
        Ok(output)
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
