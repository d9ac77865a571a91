//! Menu node and link records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier, unique within one menu tree.
///
/// Menu sources hand out numeric or string ids; both deserialize into the
/// same textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawNodeId", into = "String")]
pub struct NodeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Number(u64),
    Text(String),
}

impl From<RawNodeId> for NodeId {
    fn from(raw: RawNodeId) -> Self {
        match raw {
            RawNodeId::Number(n) => Self(n.to_string()),
            RawNodeId::Text(s) => Self(s.trim().to_string()),
        }
    }
}

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// One entry of a menu tree: a link, divider, header, or text block.
///
/// The walker never mutates a node; tag stripping happens on a per-render
/// copy inside the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Unique identifier within the tree.
    pub id: NodeId,

    /// Display text (may be empty).
    #[serde(default)]
    pub label: String,

    /// Link target.
    #[serde(default)]
    pub url: Option<String>,

    /// Free-form tags; recognized ones drive rendering, the rest become classes.
    #[serde(default, alias = "classes", alias = "tags")]
    pub raw_tags: Vec<String>,

    /// Whether this node is the page currently being viewed.
    #[serde(default, alias = "current")]
    pub is_current: bool,

    /// Link `title` attribute.
    #[serde(default)]
    pub attr_title: Option<String>,

    /// Link `target` attribute (e.g. `_blank`).
    #[serde(default)]
    pub target: Option<String>,

    /// Link `rel` attribute.
    #[serde(default)]
    pub rel: Option<String>,

    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a leaf node with no url or tags.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(MenuNode::subtree_len).sum::<usize>()
    }
}

/// A flat menu record that references its parent by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub id: NodeId,

    /// Parent link id; `None` (or an empty id) places the link at top level.
    #[serde(default, alias = "parent")]
    pub parent_id: Option<NodeId>,

    /// Sort position among siblings (lower = earlier).
    #[serde(default, alias = "weight")]
    pub position: i32,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, alias = "classes", alias = "tags")]
    pub raw_tags: Vec<String>,

    #[serde(default, alias = "current")]
    pub is_current: bool,

    #[serde(default)]
    pub attr_title: Option<String>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub rel: Option<String>,
}

impl MenuLink {
    /// Parent id, treating an empty id as "no parent".
    pub fn parent(&self) -> Option<&NodeId> {
        self.parent_id.as_ref().filter(|p| !p.is_empty())
    }

    /// Convert into a childless node.
    pub fn into_node(self) -> MenuNode {
        MenuNode {
            id: self.id,
            label: self.label,
            url: self.url,
            raw_tags: self.raw_tags,
            is_current: self.is_current,
            attr_title: self.attr_title,
            target: self.target,
            rel: self.rel,
            children: Vec::new(),
        }
    }
}
