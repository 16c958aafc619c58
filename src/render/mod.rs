pub mod html;
pub mod json;
pub mod markdown;
pub mod renderer;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use renderer::{OutputFormat, RenderConfig, Renderer};

/// Create the renderer for the configured output format
pub fn create_renderer(config: &RenderConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(config.layout)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_renderer_per_format() {
        for format in [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::Json] {
            let config = RenderConfig {
                format,
                layout: false,
            };
            assert_eq!(create_renderer(&config).output_format(), format);
        }
    }

    #[test]
    fn test_default_format_is_html() {
        let renderer = create_renderer(&RenderConfig::default());
        assert_eq!(renderer.output_format(), OutputFormat::Html);
    }
}
