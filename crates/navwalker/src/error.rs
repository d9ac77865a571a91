//! Error types.

use thiserror::Error;

use crate::menu::NodeId;

/// Structural problems found while assembling or validating a menu tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("menu node without an id (label: {label:?})")]
    MissingId { label: String },

    #[error("duplicate menu node id: {0}")]
    DuplicateId(NodeId),

    #[error("menu node {0} is part of a parent cycle")]
    Cycle(NodeId),
}

/// Errors raised while decoding a menu document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid menu JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid menu YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("menu document defines both nested `items` and flat `links`")]
    MixedDocument,

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid item spacing {0:?} (expected \"preserve\" or \"discard\")")]
    ItemSpacing(String),

    #[error("{name} must be a boolean, got {value:?}")]
    Boolean { name: String, value: String },
}

/// Result type alias for tree assembly.
pub type TreeResult<T> = Result<T, TreeError>;
