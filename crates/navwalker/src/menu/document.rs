//! Menu documents: the on-disk form of a menu.
//!
//! A document carries either a nested `items` tree or a flat `links` list:
//!
//! ```yaml
//! name: main
//! items:
//!   - id: 1
//!     label: Home
//!     url: /
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::node::{MenuLink, MenuNode};
use super::tree::MenuTree;
use crate::error::LoadError;

/// Serialization format of a menu document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// A decoded menu document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Menu machine name (informational).
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub items: Vec<MenuNode>,

    #[serde(default)]
    pub links: Vec<MenuLink>,
}

impl MenuDocument {
    pub fn parse(input: &str, format: DocumentFormat) -> Result<Self, LoadError> {
        let doc = match format {
            DocumentFormat::Json => serde_json::from_str(input)?,
            DocumentFormat::Yaml => serde_yml::from_str(input)?,
        };
        Ok(doc)
    }

    /// Validate and assemble the document's tree.
    pub fn into_tree(self) -> Result<MenuTree, LoadError> {
        match (self.items.is_empty(), self.links.is_empty()) {
            (false, false) => Err(LoadError::MixedDocument),
            (true, false) => Ok(MenuTree::from_links(self.links)?),
            _ => Ok(MenuTree::new(self.items)?),
        }
    }
}
