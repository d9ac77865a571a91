//! Menu data model.
//!
//! Menus reach the walker either as a nested tree of [`MenuNode`]s or as a
//! flat list of [`MenuLink`]s with parent references, and provide:
//! - Per-node label, link target, and raw tags
//! - Validation of ids before anything is rendered
//! - Decoding from JSON or YAML menu documents

mod document;
mod node;
mod tree;

pub use document::{DocumentFormat, MenuDocument};
pub use node::{MenuLink, MenuNode, NodeId};
pub use tree::MenuTree;
