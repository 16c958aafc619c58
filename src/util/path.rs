use std::path::{Path, PathBuf};

/// Path of `path` relative to `link_root`, or `path` unchanged when no relative form exists
pub fn calculate_display_path(path: &Path, link_root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, link_root).unwrap_or_else(|| path.to_path_buf())
}

/// Render a path with forward slashes
pub fn to_url_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
