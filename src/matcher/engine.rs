use super::{MatchSpec, RelPath};
use crate::errors::AppError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Selection decision for a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Keep the entry
    Include,
    /// Path contains one of the hide substrings
    Hidden,
    /// Dot-file or dot-directory
    DotFile,
    /// Matches an exclude glob
    Excluded,
    /// Matches a gitignore rule
    Ignored,
}

impl Selection {
    pub fn is_include(self) -> bool {
        self == Selection::Include
    }
}

/// Compiled matcher that evaluates sidebar entries against a MatchSpec
pub struct MatcherEngine {
    hide: Vec<String>,
    exclude_globset: Option<GlobSet>,
    gitignore: Option<Gitignore>,
    include_hidden: bool,
}

impl MatcherEngine {
    /// Compile a MatchSpec for entries under `root`
    pub fn compile(spec: &MatchSpec, root: &Path) -> Result<Self, AppError> {
        let exclude_globset = if !spec.exclude_glob.is_empty() {
            let mut builder = GlobSetBuilder::new();
            for pattern in &spec.exclude_glob {
                let normalized = MatchSpec::normalize_pattern(pattern);
                let glob = Glob::new(&normalized).map_err(|e| {
                    AppError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
            Some(builder.build().map_err(|e| {
                AppError::InvalidPattern(format!("failed to build exclude globset: {}", e))
            })?)
        } else {
            None
        };

        let gitignore = if spec.respect_gitignore {
            Some(Self::compile_gitignore(root)?)
        } else {
            None
        };

        Ok(Self {
            hide: spec.hide.iter().filter(|s| !s.is_empty()).cloned().collect(),
            exclude_globset,
            gitignore,
            include_hidden: spec.include_hidden,
        })
    }

    /// Collect .gitignore files from the root and its parents, plus the global one
    fn compile_gitignore(root: &Path) -> Result<Gitignore, AppError> {
        let mut builder = GitignoreBuilder::new(root);

        let mut current = Some(root);
        while let Some(dir) = current {
            let gitignore_path = dir.join(".gitignore");
            if gitignore_path.exists() {
                if let Some(e) = builder.add(&gitignore_path) {
                    tracing::warn!(path = %gitignore_path.display(), error = %e, "Skipping unreadable gitignore");
                }
            }
            current = dir.parent();
        }

        if let Some(home) = dirs::home_dir() {
            let global_gitignore = home.join(".gitignore");
            if global_gitignore.exists() {
                if let Some(e) = builder.add(&global_gitignore) {
                    tracing::warn!(path = %global_gitignore.display(), error = %e, "Skipping unreadable gitignore");
                }
            }
        }

        builder
            .build()
            .map_err(|e| AppError::InvalidPattern(format!("failed to build gitignore: {}", e)))
    }

    /// Decide whether the entry at `path` (relative form `rel_path`) stays
    pub fn select(&self, path: &Path, rel_path: &RelPath, is_dir: bool) -> Selection {
        let full = path.to_string_lossy();
        if self.hide.iter().any(|needle| full.contains(needle.as_str())) {
            return Selection::Hidden;
        }

        if !self.include_hidden && rel_path.is_hidden() {
            return Selection::DotFile;
        }

        if let Some(ref exclude_globset) = self.exclude_globset {
            if exclude_globset.is_match(rel_path.as_match_str().as_ref()) {
                return Selection::Excluded;
            }
        }

        if let Some(ref gitignore) = self.gitignore {
            if gitignore
                .matched_path_or_any_parents(rel_path.to_path_buf(), is_dir)
                .is_ignore()
            {
                return Selection::Ignored;
            }
        }

        Selection::Include
    }
}
