//! Menu tree assembly and validation.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::node::{MenuLink, MenuNode, NodeId};
use crate::error::{TreeError, TreeResult};

/// A validated menu tree: every node has a non-empty id, unique in the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Validate a nested tree.
    pub fn new(roots: Vec<MenuNode>) -> TreeResult<Self> {
        let mut seen = HashSet::new();
        validate_ids(&roots, &mut seen)?;
        Ok(Self { roots })
    }

    /// Assemble a tree from flat links that reference their parents.
    ///
    /// Siblings are ordered by `position`, ties keep input order. Links whose
    /// parent does not exist are placed at top level. Links that can never be
    /// reached from the top level (parent cycles) are rejected.
    pub fn from_links(mut links: Vec<MenuLink>) -> TreeResult<Self> {
        let mut seen = HashSet::new();
        for link in &links {
            if link.id.is_empty() {
                return Err(TreeError::MissingId {
                    label: link.label.clone(),
                });
            }
            if !seen.insert(link.id.clone()) {
                return Err(TreeError::DuplicateId(link.id.clone()));
            }
        }

        links.sort_by_key(|link| link.position);

        let mut top_level = Vec::new();
        let mut children: HashMap<NodeId, Vec<usize>> = HashMap::new();
        for (index, link) in links.iter().enumerate() {
            match link.parent() {
                Some(parent) if parent == &link.id => {
                    return Err(TreeError::Cycle(link.id.clone()));
                }
                Some(parent) if seen.contains(parent) => {
                    children.entry(parent.clone()).or_default().push(index);
                }
                Some(parent) => {
                    warn!(
                        link = %link.id,
                        parent = %parent,
                        "menu link references a missing parent; placing it at top level"
                    );
                    top_level.push(index);
                }
                None => top_level.push(index),
            }
        }

        let total = links.len();
        let mut slots: Vec<Option<MenuLink>> = links.into_iter().map(Some).collect();
        let roots: Vec<MenuNode> = top_level
            .iter()
            .filter_map(|&index| build_node(index, &mut slots, &children))
            .collect();

        if let Some(stranded) = slots.iter().flatten().next() {
            return Err(TreeError::Cycle(stranded.id.clone()));
        }

        debug!(links = total, roots = roots.len(), "assembled menu tree");
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<MenuNode> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.roots.iter().map(MenuNode::subtree_len).sum()
    }

    /// Find a node anywhere in the tree.
    pub fn find(&self, id: &NodeId) -> Option<&MenuNode> {
        fn search<'a>(nodes: &'a [MenuNode], id: &NodeId) -> Option<&'a MenuNode> {
            nodes.iter().find_map(|node| {
                if &node.id == id {
                    Some(node)
                } else {
                    search(&node.children, id)
                }
            })
        }
        search(&self.roots, id)
    }
}

fn validate_ids<'a>(nodes: &'a [MenuNode], seen: &mut HashSet<&'a NodeId>) -> TreeResult<()> {
    for node in nodes {
        if node.id.is_empty() {
            return Err(TreeError::MissingId {
                label: node.label.clone(),
            });
        }
        if !seen.insert(&node.id) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
        validate_ids(&node.children, seen)?;
    }
    Ok(())
}

/// Take the link at `index` out of `slots` and attach its descendants.
fn build_node(
    index: usize,
    slots: &mut [Option<MenuLink>],
    children: &HashMap<NodeId, Vec<usize>>,
) -> Option<MenuNode> {
    let link = slots.get_mut(index)?.take()?;
    let child_indices = children.get(&link.id).cloned().unwrap_or_default();
    let mut node = link.into_node();
    node.children = child_indices
        .into_iter()
        .filter_map(|child| build_node(child, slots, children))
        .collect();
    Some(node)
}
