use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Numeric ordering markers such as `01-`
static ORDER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+-").unwrap());

/// Derive a display label from the last segment of `path`.
///
/// The first occurrence of `ext` is removed, every `digits-` ordering marker is
/// dropped, and the remaining dashes become spaces:
/// `docs/02-guides/01-getting-started.mdx` gives `"getting started"`.
pub fn label_for(path: &Path, ext: &str) -> String {
    let segment = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let segment = if ext.is_empty() {
        segment
    } else {
        segment.replacen(ext, "", 1)
    };

    ORDER_PREFIX.replace_all(&segment, "").replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension_and_order() {
        assert_eq!(label_for(Path::new("docs/01-intro.mdx"), ".mdx"), "intro");
        assert_eq!(
            label_for(Path::new("docs/02-guides/10-getting-started.mdx"), ".mdx"),
            "getting started"
        );
    }

    #[test]
    fn test_directory_label() {
        assert_eq!(label_for(Path::new("docs/03-api-reference"), ".mdx"), "api reference");
        assert_eq!(label_for(Path::new("docs"), ".mdx"), "docs");
        assert_eq!(label_for(Path::new("docs/"), ".mdx"), "docs");
    }

    #[test]
    fn test_every_order_marker_removed() {
        assert_eq!(label_for(Path::new("docs/v2-01-setup.mdx"), ".mdx"), "vsetup");
        assert_eq!(label_for(Path::new("docs/2024-10-release.mdx"), ".mdx"), "release");
    }

    #[test]
    fn test_only_first_extension_removed() {
        assert_eq!(label_for(Path::new("docs/a.mdx.mdx"), ".mdx"), "a.mdx");
        assert_eq!(label_for(Path::new("docs/notes.md"), ".mdx"), "notes.md");
    }

    #[test]
    fn test_custom_and_empty_extension() {
        assert_eq!(label_for(Path::new("docs/01-faq.md"), ".md"), "faq");
        assert_eq!(label_for(Path::new("docs/01-faq.md"), ""), "faq.md");
    }
}
