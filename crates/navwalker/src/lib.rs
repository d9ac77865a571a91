//! Navwalker Library
//!
//! Walks a menu tree and renders it as Bootstrap navigation markup:
//! top-level nav links, dropdown toggles, dropdown menus, dividers,
//! headers, disabled entries, and icon-prefixed labels.
//! The `navwalker` binary wraps this library for command-line use.

pub mod classify;
pub mod config;
pub mod error;
pub mod menu;
pub mod theme;

pub use classify::{Classification, Classifier, LinkModifier};
pub use config::{Config, ItemSpacing, NavMenuArgs};
pub use error::{ConfigError, LoadError, TreeError};
pub use menu::{MenuDocument, MenuLink, MenuNode, MenuTree, NodeId};
pub use theme::{NavWalker, display_nav_menu, render_fallback, render_nav_menu};
