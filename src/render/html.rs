use crate::errors::AppError;
use crate::render::renderer::{OutputFormat, Renderer};
use crate::sidebar::{NavLink, Section, Sidebar};
use std::fmt::Write;

const CONTAINER_CLASS: &str = "hidden md:flex w-[284px] md:shrink-0 sticky top-[121px] h-full md:flex-col md:justify-between";
const NAV_CLASS: &str = "flex flex-col pb-4 pr-2 overflow-y-auto dark:text-white";
const SECTION_ITEM_CLASS: &str = "my-4";
const SECTION_LINK_CLASS: &str = "relative flex items-center justify-between w-full py-1 pl-2 text-sm text-left text-white capitalize rounded-md cursor-pointer";
const LINK_ITEM_CLASS: &str = "my-1.5";
const LINK_CLASS: &str = "relative flex items-center justify-between w-full py-1 pl-2 text-sm text-left text-gray-400 capitalize transition-colors rounded-md cursor-pointer hover:text-white";
const LAYOUT_CLASS: &str = "relative max-w-screen-xl px-4 py-10 mx-auto md:flex md:py-10 md:flex-row";

/// Renders the sidebar as the site's navigation markup
pub struct HtmlRenderer {
    layout: bool,
}

impl HtmlRenderer {
    pub fn new(layout: bool) -> Self {
        Self { layout }
    }

    fn render_section(out: &mut String, section: &Section) -> std::fmt::Result {
        writeln!(out, "      <li class=\"{}\">", SECTION_ITEM_CLASS)?;
        writeln!(
            out,
            "        <a class=\"{}\" href=\"{}\">{}</a>",
            SECTION_LINK_CLASS,
            escape_html(&section.href),
            escape_html(&section.label)
        )?;
        writeln!(out, "        <ul>")?;
        for link in &section.items {
            Self::render_link(out, link)?;
        }
        writeln!(out, "        </ul>")?;
        writeln!(out, "      </li>")
    }

    fn render_link(out: &mut String, link: &NavLink) -> std::fmt::Result {
        writeln!(out, "          <li class=\"{}\">", LINK_ITEM_CLASS)?;
        writeln!(
            out,
            "            <a class=\"{}\" href=\"{}\">{}</a>",
            LINK_CLASS,
            escape_html(&link.href),
            escape_html(&link.label)
        )?;
        writeln!(out, "          </li>")
    }

    fn render_sidebar(&self, sidebar: &Sidebar) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "<div class=\"{}\">", CONTAINER_CLASS)?;
        writeln!(out, "  <nav class=\"{}\">", NAV_CLASS)?;
        writeln!(out, "    <ul>")?;
        for section in &sidebar.sections {
            Self::render_section(&mut out, section)?;
        }
        writeln!(out, "    </ul>")?;
        writeln!(out, "  </nav>")?;
        writeln!(out, "</div>")?;

        if self.layout {
            out = format!("<main class=\"{}\">\n{}</main>\n", LAYOUT_CLASS, out);
        }
        Ok(out)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, sidebar: &Sidebar) -> Result<String, AppError> {
        Ok(self.render_sidebar(sidebar)?)
    }

    fn output_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sidebar {
        Sidebar {
            sections: vec![Section {
                label: "getting started".to_string(),
                href: "docs/01-getting-started".to_string(),
                items: vec![NavLink {
                    label: "install".to_string(),
                    href: "docs/01-getting-started/01-install.mdx".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_html_renderer_basic() {
        let output = HtmlRenderer::new(false).render(&sample()).unwrap();

        assert!(output.starts_with("<div class=\"hidden md:flex"));
        assert!(output.contains("<nav class=\"flex flex-col"));
        assert!(output.contains(
            "<a class=\"relative flex items-center justify-between w-full py-1 pl-2 text-sm text-left text-white capitalize rounded-md cursor-pointer\" href=\"docs/01-getting-started\">getting started</a>"
        ));
        assert!(output.contains("<li class=\"my-1.5\">"));
        assert!(output.contains("href=\"docs/01-getting-started/01-install.mdx\">install</a>"));
        assert!(!output.contains("<main"));
    }

    #[test]
    fn test_html_renderer_layout() {
        let output = HtmlRenderer::new(true).render(&sample()).unwrap();

        assert!(output.starts_with("<main class=\"relative max-w-screen-xl"));
        assert!(output.trim_end().ends_with("</main>"));
        assert!(output.contains("<nav"));
    }

    #[test]
    fn test_html_renderer_empty_sidebar() {
        let output = HtmlRenderer::new(false).render(&Sidebar::default()).unwrap();

        assert!(output.contains("<ul>\n    </ul>"));
        assert!(!output.contains("<li"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let sidebar = Sidebar {
            sections: vec![Section {
                label: "q&a <faq>".to_string(),
                href: "docs/q\"a".to_string(),
                items: vec![],
            }],
        };

        let output = HtmlRenderer::new(false).render(&sidebar).unwrap();

        assert!(output.contains(">q&amp;a &lt;faq&gt;</a>"));
        assert!(output.contains("href=\"docs/q&quot;a\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a'b"), "a&#39;b");
    }

    #[test]
    fn test_html_output_format() {
        assert_eq!(HtmlRenderer::new(false).output_format(), OutputFormat::Html);
    }
}
