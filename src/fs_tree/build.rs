use super::node::Node;
use super::options::TreeOptions;
use crate::errors::TreeError;
use std::path::Path;
use tracing::info;

/// Navigation tree owning the root node for a starting path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T: Default> Tree<T> {
    /// Build a tree with no transform, no filter and enumeration order
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        Self::build(path, &TreeOptions::new())
    }

    pub fn build<P: AsRef<Path>>(path: P, options: &TreeOptions<'_, T>) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let root = Node::build(path.to_path_buf(), options)?;
        info!(root = %path.display(), nodes = root.count(), "built tree");
        Ok(Self { root })
    }
}

impl<T> Tree<T> {
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn into_root(self) -> Node<T> {
        self.root
    }
}
