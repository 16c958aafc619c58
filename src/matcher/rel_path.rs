use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A path relative to the content root, used for glob and gitignore matching
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelPath {
    inner: OsString,
}

impl RelPath {
    /// Create a RelPath from a path under `root`.
    /// Returns None if the path is not under the root.
    pub fn from_root_rel<P: AsRef<Path>>(path: P, root: &Path) -> Option<Self> {
        let relative = path.as_ref().strip_prefix(root).ok()?;
        Some(Self {
            inner: relative.as_os_str().to_owned(),
        })
    }

    pub fn from_relative<P: AsRef<Path>>(path: P) -> Self {
        Self {
            inner: path.as_ref().as_os_str().to_owned(),
        }
    }

    /// The path with forward slashes, for matching
    pub fn as_match_str(&self) -> Cow<'_, str> {
        let path_str = self.inner.to_string_lossy();
        if path_str.contains('\\') {
            Cow::Owned(path_str.replace('\\', "/"))
        } else {
            path_str
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the last segment starts with a dot
    pub fn is_hidden(&self) -> bool {
        Path::new(&self.inner)
            .file_name()
            .map(|name| name.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root_rel() {
        let rel = RelPath::from_root_rel("docs/guides/setup.mdx", Path::new("docs")).unwrap();
        assert_eq!(rel.as_match_str(), "guides/setup.mdx");
        assert_eq!(rel.to_path_buf(), PathBuf::from("guides/setup.mdx"));
    }

    #[test]
    fn test_outside_root() {
        assert!(RelPath::from_root_rel("other/setup.mdx", Path::new("docs")).is_none());
    }

    #[test]
    fn test_backslashes_normalized() {
        let rel = RelPath::from_relative(r"guides\setup.mdx");
        assert_eq!(rel.as_match_str(), "guides/setup.mdx");
    }

    #[test]
    fn test_is_hidden() {
        assert!(RelPath::from_relative("guides/.draft.mdx").is_hidden());
        assert!(RelPath::from_relative(".git").is_hidden());
        assert!(!RelPath::from_relative("guides/setup.mdx").is_hidden());
    }
}
