//! Render arguments and environment configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default target of the fallback "Add a menu" link.
pub const DEFAULT_MANAGE_URL: &str = "/admin/structure/menu";

/// Whitespace emitted between menu items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSpacing {
    /// Tab indentation by depth and a newline after each item.
    #[default]
    #[serde(alias = "normal")]
    Preserve,
    /// No tabs or newlines at all.
    #[serde(alias = "compact")]
    Discard,
}

impl ItemSpacing {
    pub fn tab(self) -> &'static str {
        match self {
            Self::Preserve => "\t",
            Self::Discard => "",
        }
    }

    pub fn newline(self) -> &'static str {
        match self {
            Self::Preserve => "\n",
            Self::Discard => "",
        }
    }
}

impl FromStr for ItemSpacing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" | "normal" => Ok(Self::Preserve),
            "discard" | "compact" => Ok(Self::Discard),
            _ => Err(ConfigError::ItemSpacing(s.to_string())),
        }
    }
}

impl fmt::Display for ItemSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Preserve => "preserve",
            Self::Discard => "discard",
        })
    }
}

/// Arguments for a single menu render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMenuArgs {
    /// Add schema.org `SiteNavigationElement` markup.
    pub schema_markup: bool,
    pub item_spacing: ItemSpacing,
    /// Class of the outer `<ul>` (default: `menu`).
    pub menu_class: String,
    /// Id of the outer `<ul>`; omitted when empty.
    pub menu_id: String,
    /// Wrapping element, `div` or `nav`; anything else means no wrapper.
    pub container: String,
    pub container_class: String,
    pub container_id: String,
    /// Extra classes for every `dropdown-menu` wrapper.
    pub submenu_class: String,
    /// Markup before each link.
    pub before: String,
    /// Markup after each link.
    pub after: String,
    /// Markup inside each link, before the label.
    pub link_before: String,
    /// Markup inside each link, after the label.
    pub link_after: String,
    /// Levels to render; 0 renders the whole tree.
    pub depth: usize,
    /// Write the markup to the sink instead of returning it.
    pub echo: bool,
    /// Target of the fallback link.
    pub manage_url: String,
    /// Whether the viewer may manage menus; the fallback is empty otherwise.
    pub can_manage_menus: bool,
}

impl Default for NavMenuArgs {
    fn default() -> Self {
        Self {
            schema_markup: false,
            item_spacing: ItemSpacing::Preserve,
            menu_class: "menu".to_string(),
            menu_id: String::new(),
            container: "div".to_string(),
            container_class: String::new(),
            container_id: String::new(),
            submenu_class: String::new(),
            before: String::new(),
            after: String::new(),
            link_before: String::new(),
            link_after: String::new(),
            depth: 0,
            echo: false,
            manage_url: DEFAULT_MANAGE_URL.to_string(),
            can_manage_menus: true,
        }
    }
}

/// Binary configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Schema.org markup (NAVWALKER_SCHEMA_MARKUP, default: false).
    pub schema_markup: bool,

    /// Item spacing (NAVWALKER_ITEM_SPACING, default: preserve).
    pub item_spacing: ItemSpacing,

    /// Outer list class (NAVWALKER_MENU_CLASS, default: "menu").
    pub menu_class: String,

    /// Container element (NAVWALKER_CONTAINER, default: "div").
    pub container: String,

    /// Fallback link target (NAVWALKER_MANAGE_URL).
    pub manage_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let schema_markup = match lookup("NAVWALKER_SCHEMA_MARKUP") {
            Some(value) => parse_bool("NAVWALKER_SCHEMA_MARKUP", &value)?,
            None => false,
        };

        let item_spacing = lookup("NAVWALKER_ITEM_SPACING")
            .map(|value| value.parse::<ItemSpacing>())
            .transpose()
            .context("NAVWALKER_ITEM_SPACING must be \"preserve\" or \"discard\"")?
            .unwrap_or_default();

        let menu_class = lookup("NAVWALKER_MENU_CLASS").unwrap_or_else(|| "menu".to_string());

        let container = lookup("NAVWALKER_CONTAINER")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(|| "div".to_string());

        let manage_url =
            lookup("NAVWALKER_MANAGE_URL").unwrap_or_else(|| DEFAULT_MANAGE_URL.to_string());

        Ok(Self {
            schema_markup,
            item_spacing,
            menu_class,
            container,
            manage_url,
        })
    }

    /// Render arguments seeded from this configuration.
    pub fn menu_args(&self) -> NavMenuArgs {
        NavMenuArgs {
            schema_markup: self.schema_markup,
            item_spacing: self.item_spacing,
            menu_class: self.menu_class.clone(),
            container: self.container.clone(),
            manage_url: self.manage_url.clone(),
            ..NavMenuArgs::default()
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Boolean {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
