use crate::errors::AppError;
use crate::render::renderer::{OutputFormat, Renderer};
use crate::sidebar::Sidebar;

/// Pure Markdown renderer with bullet lists
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn link(label: &str, href: &str) -> String {
        // Spaces would end the link target
        format!("[{}]({})", label.replace(']', "\\]"), href.replace(' ', "%20"))
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, sidebar: &Sidebar) -> Result<String, AppError> {
        let mut output = String::new();
        for section in &sidebar.sections {
            output.push_str(&format!("- {}\n", Self::link(&section.label, &section.href)));
            for item in &section.items {
                output.push_str(&format!("  - {}\n", Self::link(&item.label, &item.href)));
            }
        }
        Ok(output)
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidebar::{NavLink, Section};

    #[test]
    fn test_markdown_nested_lists() {
        let sidebar = Sidebar {
            sections: vec![
                Section {
                    label: "guides".to_string(),
                    href: "docs/02-guides".to_string(),
                    items: vec![NavLink {
                        label: "first steps".to_string(),
                        href: "docs/02-guides/01-first steps.mdx".to_string(),
                    }],
                },
                Section {
                    label: "faq".to_string(),
                    href: "docs/03-faq.mdx".to_string(),
                    items: vec![],
                },
            ],
        };

        let output = MarkdownRenderer.render(&sidebar).unwrap();

        assert_eq!(
            output,
            "- [guides](docs/02-guides)\n  - [first steps](docs/02-guides/01-first%20steps.mdx)\n- [faq](docs/03-faq.mdx)\n"
        );
    }

    #[test]
    fn test_markdown_empty() {
        assert_eq!(MarkdownRenderer.render(&Sidebar::default()).unwrap(), "");
    }
}
