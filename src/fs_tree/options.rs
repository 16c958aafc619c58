use super::node::Node;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

/// Derives per-node data from the node's own path
pub type TransformFn<'a, T> = Box<dyn Fn(&Path) -> T + 'a>;

/// Decides whether a child stays in its parent's list.
/// Arguments are the parent path, the candidate, and all unfiltered siblings.
pub type FilterFn<'a, T> = Box<dyn Fn(&Path, &Node<T>, &[Node<T>]) -> bool + 'a>;

/// Order in which a directory's children are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildOrder {
    /// Whatever order the filesystem lists entries in
    #[default]
    Enumeration,
    /// Sorted by file name
    Name,
}

/// Traversal options shared by every node of a tree
pub struct TreeOptions<'a, T> {
    transform: Option<TransformFn<'a, T>>,
    filter: Option<FilterFn<'a, T>>,
    order: ChildOrder,
}

impl<'a, T> TreeOptions<'a, T> {
    pub fn new() -> Self {
        Self {
            transform: None,
            filter: None,
            order: ChildOrder::Enumeration,
        }
    }

    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&Path) -> T + 'a,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Path, &Node<T>, &[Node<T>]) -> bool + 'a,
    {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_order(mut self, order: ChildOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ChildOrder {
        self.order
    }

    /// Data for the node at `path`, or the default value when no transform is set
    pub(crate) fn derive(&self, path: &Path) -> T
    where
        T: Default,
    {
        match &self.transform {
            Some(transform) => transform(path),
            None => T::default(),
        }
    }

    /// Apply the filter to a fully constructed child list
    pub(crate) fn retain(&self, parent: &Path, children: Vec<Node<T>>) -> Vec<Node<T>> {
        let Some(filter) = &self.filter else {
            return children;
        };

        let keep: Vec<bool> = children
            .iter()
            .map(|child| filter(parent, child, &children))
            .collect();

        children
            .into_iter()
            .zip(keep)
            .filter_map(|(child, keep)| keep.then_some(child))
            .collect()
    }
}

impl<T> Default for TreeOptions<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
