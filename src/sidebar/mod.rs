//! Two-level documentation sidebar.
//!
//! The children of the content root become sections and each section's own
//! children become links. Anything deeper is not part of the sidebar.

pub mod label;

pub use label::label_for;

use crate::errors::AppError;
use crate::fs_tree::{ChildOrder, Node, Tree, TreeOptions};
use crate::matcher::{MatchSpec, MatcherEngine, RelPath};
use crate::output::LinkGenerator;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Per-node data derived while walking the content directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavData {
    pub label: String,
}

/// Everything needed to build a sidebar
#[derive(Debug, Clone)]
pub struct SidebarConfig {
    /// Content directory the sidebar is built from
    pub root: PathBuf,
    /// Extension stripped from labels (e.g., ".mdx")
    pub ext: String,
    pub matcher: MatchSpec,
    pub order: ChildOrder,
    pub base_url: Option<String>,
    /// Hrefs are made relative to this directory when set
    pub link_root: Option<PathBuf>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            ext: ".mdx".to_string(),
            matcher: MatchSpec::default(),
            order: ChildOrder::Enumeration,
            base_url: None,
            link_root: None,
        }
    }
}

/// Second-level entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Top-level entry with its links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub sections: Vec<Section>,
}

impl Sidebar {
    /// Walk `config.root` and build the sidebar
    pub fn build(config: &SidebarConfig) -> Result<Self, AppError> {
        let engine = MatcherEngine::compile(&config.matcher, &config.root)?;
        let links = LinkGenerator::new(config.base_url.as_deref(), config.link_root.as_deref());

        let options = TreeOptions::new()
            .with_transform(|path: &Path| NavData {
                label: label_for(path, &config.ext),
            })
            .with_filter(|_, child, _| keep_child(&engine, &config.root, child))
            .with_order(config.order);

        let tree = Tree::build(&config.root, &options)?;
        let sidebar = Self::from_tree(&tree, &links);
        debug!(
            sections = sidebar.sections.len(),
            links = sidebar.link_count(),
            "built sidebar"
        );
        Ok(sidebar)
    }

    /// Map a labelled tree to sections and links
    pub fn from_tree(tree: &Tree<NavData>, links: &LinkGenerator) -> Self {
        let sections = tree
            .root()
            .children()
            .iter()
            .map(|node| Section {
                label: node.data().label.clone(),
                href: links.generate_url(node.path()),
                items: node
                    .children()
                    .iter()
                    .map(|child| NavLink {
                        label: child.data().label.clone(),
                        href: links.generate_url(child.path()),
                    })
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of second-level links across all sections
    pub fn link_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

fn keep_child(engine: &MatcherEngine, root: &Path, child: &Node<NavData>) -> bool {
    let rel_path = RelPath::from_root_rel(child.path(), root)
        .unwrap_or_else(|| RelPath::from_relative(child.path()));
    let selection = engine.select(child.path(), &rel_path, child.is_dir());

    if !selection.is_include() {
        trace!(path = %child.path().display(), ?selection, "dropping sidebar entry");
    }
    selection.is_include()
}
