//! Navigation markup rendering.
//!
//! Provides the depth-first [`NavWalker`], the outer menu wrapper, and the
//! fallback shown when no menu exists.

mod attributes;
mod escape;
mod fallback;
mod nav_menu;
mod output;
mod walker;

pub use attributes::Attributes;
pub use escape::{escape_url, html_escape};
pub use fallback::{FALLBACK_LABEL, display_fallback, render_fallback};
pub use nav_menu::{ALLOWED_CONTAINERS, display_nav_menu, render_nav_menu};
pub use output::emit;
pub use walker::{LinkElement, NavWalker, SCHEMA_ITEM_TYPE};
