use super::options::{ChildOrder, TreeOptions};
use crate::errors::TreeError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One filesystem entry of the navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    path: PathBuf,
    is_dir: bool,
    children: Vec<Node<T>>,
    data: T,
}

impl<T: Default> Node<T> {
    /// Build the node for `path`, recursing into directories.
    ///
    /// Children are constructed first, then filtered against the full sibling
    /// list, then the node's own data is derived from its path. Any metadata or
    /// listing failure aborts the whole build.
    pub fn build(path: PathBuf, options: &TreeOptions<'_, T>) -> Result<Self, TreeError> {
        let metadata = fs::metadata(&path).map_err(|e| TreeError::io(&path, e))?;

        let mut children = Vec::new();
        if metadata.is_dir() {
            debug!(path = %path.display(), "listing directory");
            for entry in fs::read_dir(&path).map_err(|e| TreeError::io(&path, e))? {
                let entry = entry.map_err(|e| TreeError::io(&path, e))?;
                children.push(Node::build(path.join(entry.file_name()), options)?);
            }

            if options.order() == ChildOrder::Name {
                children.sort_by(|a, b| a.name().cmp(&b.name()));
            }
        }

        let children = options.retain(&path, children);
        let data = options.derive(&path);

        Ok(Self {
            path,
            is_dir: metadata.is_dir(),
            children,
            data,
        })
    }
}

impl<T> Node<T> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Last path segment, lossily decoded
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Whether the entry was a directory when it was read
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    pub fn into_parts(self) -> (PathBuf, Vec<Node<T>>, T) {
        (self.path, self.children, self.data)
    }
}
