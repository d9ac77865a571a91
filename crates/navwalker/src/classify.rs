//! Node classification.
//!
//! A node's raw tags carry every semantic signal the walker acts on: link
//! modifiers (`disabled`, `sr-only`, dropdown headers, dividers and text),
//! icon-font classes, and plain styling classes. Classification runs once
//! per node per render and never touches the node itself; recognized tags
//! are dropped from the returned class list instead.
//!
//! Precedence when tags combine: `disabled` beats every dropdown modifier,
//! dropdown modifiers beat `sr-only`. The losing tags are still consumed.

use std::sync::LazyLock;

use regex::Regex;

/// Icon-font classes: Font Awesome 4/5 (`fa`, `fas`, `far`, `fal`, `fab`,
/// `fa-*`) and Glyphicons (`glyphicon`, `glyphicon-*`).
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static ICON_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:fa-\S*|fa[srlb]?|glyphicon-\S*|glyphicon)$")
        .expect("valid regex literal")
});

/// How a node deviates from a plain navigation link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkModifier {
    #[default]
    None,
    Disabled,
    ScreenReaderOnly,
    DropdownHeader,
    DropdownDivider,
    DropdownText,
}

impl LinkModifier {
    fn from_dropdown_tag(tag: &str) -> Option<Self> {
        match tag {
            "dropdown-header" => Some(Self::DropdownHeader),
            "dropdown-divider" => Some(Self::DropdownDivider),
            "dropdown-item-text" => Some(Self::DropdownText),
            _ => None,
        }
    }
}

/// Per-render classification of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub link_modifier: LinkModifier,
    /// Set whenever a `disabled` tag is present.
    pub disabled: bool,
    /// Set whenever an `sr-only` tag is present, even if another modifier won.
    pub screen_reader_only: bool,
    /// Icon-font classes, in tag order.
    pub icon_tags: Vec<String>,
    pub schema_eligible: bool,
    pub has_children: bool,
    /// Tags not consumed as signals, passed through as styling classes.
    pub classes: Vec<String>,
}

/// Classifies nodes for one render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    schema_markup: bool,
}

impl Classifier {
    pub fn new(schema_markup: bool) -> Self {
        Self { schema_markup }
    }

    /// Classify a node's raw tags at the given depth.
    ///
    /// Dropdown modifier tags are only recognized inside a dropdown
    /// (`depth > 0`); at the top level they stay ordinary classes.
    pub fn classify(
        &self,
        raw_tags: &[String],
        depth: usize,
        has_children: bool,
    ) -> Classification {
        let mut classification = Classification {
            has_children,
            ..Classification::default()
        };
        let mut dropdown = None;

        for tag in raw_tags.iter().flat_map(|t| t.split_whitespace()) {
            let lower = tag.to_ascii_lowercase();
            if lower == "disabled" {
                classification.disabled = true;
            } else if lower == "sr-only" {
                classification.screen_reader_only = true;
            } else if let Some(modifier) =
                LinkModifier::from_dropdown_tag(&lower).filter(|_| depth > 0)
            {
                dropdown.get_or_insert(modifier);
            } else if ICON_CLASS.is_match(tag) {
                classification.icon_tags.push(tag.to_string());
            } else {
                classification.classes.push(tag.to_string());
            }
        }

        classification.link_modifier = if classification.disabled {
            LinkModifier::Disabled
        } else if let Some(modifier) = dropdown {
            modifier
        } else if classification.screen_reader_only {
            LinkModifier::ScreenReaderOnly
        } else {
            LinkModifier::None
        };

        classification.schema_eligible =
            self.schema_markup && classification.link_modifier == LinkModifier::None;

        classification
    }
}
