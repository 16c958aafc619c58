/// Declarative rules deciding which entries stay in the sidebar
#[derive(Debug, Clone)]
pub struct MatchSpec {
    /// Substrings that hide an entry when found anywhere in its path (e.g., ["index"])
    pub hide: Vec<String>,

    /// Glob patterns to exclude, relative to the content root (e.g., ["drafts", "*.png"])
    pub exclude_glob: Vec<String>,

    /// Whether to respect gitignore files
    pub respect_gitignore: bool,

    /// Whether dot-files and dot-directories are kept
    pub include_hidden: bool,
}

impl Default for MatchSpec {
    fn default() -> Self {
        Self {
            hide: vec!["index".to_string()],
            exclude_glob: Vec::new(),
            respect_gitignore: false,
            include_hidden: false,
        }
    }
}

impl MatchSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a glob pattern so that bare names match at any depth.
    /// "*.png" becomes "**/*.png" and "drafts/" becomes "**/drafts".
    pub(crate) fn normalize_pattern(pattern: &str) -> String {
        let pattern = pattern.strip_suffix('/').unwrap_or(pattern);

        if pattern.contains('/') || pattern.starts_with("**") {
            pattern.to_string()
        } else {
            format!("**/{}", pattern)
        }
    }

    pub fn with_hide(mut self, hide: Vec<String>) -> Self {
        self.hide = hide;
        self
    }

    pub fn with_exclude_glob(mut self, patterns: Vec<String>) -> Self {
        self.exclude_glob = patterns;
        self
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}
