use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while walking the content directory
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        TreeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the entry that could not be read
    pub fn path(&self) -> &Path {
        match self {
            TreeError::Io { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("failed to encode sidebar: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to format output")]
    Format(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_names_path() {
        let err = TreeError::io(
            Path::new("docs/missing"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );

        assert_eq!(err.path(), Path::new("docs/missing"));
        assert!(err.to_string().contains("docs/missing"));
    }

    #[test]
    fn test_app_error_wraps_tree_error() {
        let err: AppError = TreeError::io(
            Path::new("docs"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();

        assert!(matches!(err, AppError::Tree(_)));
        assert!(err.to_string().starts_with("failed to read docs"));
    }
}
