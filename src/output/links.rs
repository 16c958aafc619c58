use crate::util::path::{calculate_display_path, to_url_path};
use std::path::{Path, PathBuf};

/// Generator for sidebar hrefs with optional base URL rewriting
#[derive(Debug, Clone, Default)]
pub struct LinkGenerator {
    base_url: Option<String>,
    link_root: Option<PathBuf>,
}

impl LinkGenerator {
    pub fn new(base_url: Option<&str>, link_root: Option<&Path>) -> Self {
        // Trailing slash is added back when joining
        let base_url = base_url.map(|url| url.trim_end_matches('/').to_string());

        Self {
            base_url,
            link_root: link_root.map(Path::to_path_buf),
        }
    }

    /// Generate the href for a node path
    pub fn generate_url(&self, path: &Path) -> String {
        let path_str = match &self.link_root {
            Some(root) => to_url_path(&calculate_display_path(path, root)),
            None => to_url_path(path),
        };

        match &self.base_url {
            Some(base) => format!("{}/{}", base, path_str.trim_start_matches('/')),
            None => path_str,
        }
    }
}
