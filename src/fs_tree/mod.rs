pub mod build;
pub mod node;
pub mod options;

pub use build::Tree;
pub use node::Node;
pub use options::{ChildOrder, TreeOptions};
