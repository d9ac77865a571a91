//! Ordered HTML attribute lists.

use super::escape::{escape_url, html_escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    Text,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Attribute {
    name: &'static str,
    value: String,
    kind: ValueKind,
}

/// An ordered attribute list.
///
/// Overwriting an attribute keeps its original position, so output order is
/// decided by the first `set`. Empty values are kept but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text attribute.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.upsert(name, value.into(), ValueKind::Text)
    }

    /// Set a URL attribute (rendered through URL escaping).
    pub fn set_url(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.upsert(name, value.into(), ValueKind::Url)
    }

    fn upsert(&mut self, name: &'static str, value: String, kind: ValueKind) -> &mut Self {
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => {
                existing.value = value;
                existing.kind = kind;
            }
            None => self.entries.push(Attribute { name, value, kind }),
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.entries.retain(|a| a.name != name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Append a class to the `class` attribute, creating it if needed.
    pub fn push_class(&mut self, class: &str) -> &mut Self {
        let classes = match self.get("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set("class", classes)
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Render as ` name="value"` pairs, skipping empty values.
    pub fn render(&self) -> String {
        let mut html = String::new();
        for attr in &self.entries {
            if attr.value.is_empty() {
                continue;
            }
            let value = match attr.kind {
                ValueKind::Text => html_escape(&attr.value),
                ValueKind::Url => match escape_url(&attr.value) {
                    Some(url) => url,
                    None => continue,
                },
            };
            html.push(' ');
            html.push_str(attr.name);
            html.push_str("=\"");
            html.push_str(&value);
            html.push('"');
        }
        html
    }
}
