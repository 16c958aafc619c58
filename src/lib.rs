//! Documentation sidebar builder.
//!
//! [`fs_tree`] turns a directory into a tree of [`Node`]s, letting the caller
//! derive per-node data and filter children. [`sidebar`] uses it to produce the
//! two-level navigation of a documentation site and [`render`] writes that
//! navigation out as HTML, Markdown or JSON.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_tree;
pub mod matcher;
pub mod output;
pub mod render;
pub mod sidebar;
pub mod util;

pub use errors::{AppError, TreeError};
pub use fs_tree::{ChildOrder, Node, Tree, TreeOptions};
pub use sidebar::{Sidebar, SidebarConfig};
