//! Navwalker test utilities.
//!
//! Helpers for integration testing: menu node builders, ready-made menu
//! trees, and assertion helpers for rendered markup.

use navwalker::menu::{MenuNode, NodeId};

/// Create a test node with the given id and label.
pub fn test_node(id: u64, label: &str) -> TestNode {
    TestNode {
        id: NodeId::from(id),
        label: label.to_string(),
        url: None,
        tags: Vec::new(),
        current: false,
        attr_title: None,
        target: None,
        rel: None,
        children: Vec::new(),
    }
}

/// A menu node builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub id: NodeId,
    pub label: String,
    pub url: Option<String>,
    pub tags: Vec<String>,
    pub current: bool,
    pub attr_title: Option<String>,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub children: Vec<TestNode>,
}

impl TestNode {
    /// Set the link target.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Add raw tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    /// Mark as the current page.
    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Set the `title` attribute.
    pub fn with_attr_title(mut self, title: &str) -> Self {
        self.attr_title = Some(title.to_string());
        self
    }

    /// Set the `target` attribute.
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    /// Set the `rel` attribute.
    pub fn with_rel(mut self, rel: &str) -> Self {
        self.rel = Some(rel.to_string());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }

    /// Build the node and its descendants.
    pub fn build(self) -> MenuNode {
        MenuNode {
            id: self.id,
            label: self.label,
            url: self.url,
            raw_tags: self.tags,
            is_current: self.current,
            attr_title: self.attr_title,
            target: self.target,
            rel: self.rel,
            children: self.children.into_iter().map(TestNode::build).collect(),
        }
    }
}

/// A typical Bootstrap navbar: a current home link, a dropdown with a
/// header, items, a divider and a disabled entry, and a top-level icon link.
pub fn sample_menu() -> Vec<MenuNode> {
    vec![
        test_node(1, "Home").with_url("/").current().build(),
        test_node(2, "Products")
            .with_url("/products")
            .with_child(test_node(3, "Catalog").with_tags(&["dropdown-header"]))
            .with_child(test_node(4, "Widgets").with_url("/widgets"))
            .with_child(
                test_node(5, "Gadgets")
                    .with_url("/gadgets")
                    .with_tags(&["fa", "fa-cog"]),
            )
            .with_child(test_node(6, "").with_tags(&["dropdown-divider"]))
            .with_child(
                test_node(7, "Coming soon")
                    .with_url("/soon")
                    .with_target("_blank")
                    .with_tags(&["disabled"]),
            )
            .build(),
        test_node(8, "Contact")
            .with_url("/contact")
            .with_tags(&["glyphicon", "glyphicon-envelope", "highlight"])
            .build(),
    ]
}

/// The same menu as [`sample_menu`], as a JSON menu document.
pub fn sample_menu_json() -> serde_json::Value {
    serde_json::json!({
        "name": "main",
        "items": serde_json::to_value(sample_menu()).unwrap_or_default(),
    })
}

/// Assertion helpers for rendered markup.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected markup to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected markup to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert the number of non-overlapping occurrences of a substring.
    pub fn occurrences(haystack: &str, needle: &str, expected: usize) {
        let actual = haystack.matches(needle).count();
        assert_eq!(
            actual, expected,
            "Expected '{needle}' {expected} time(s), found {actual}\nActual: {haystack}"
        );
    }

    /// The opening tag of the element whose `id` attribute is `id`.
    pub fn element_with_id<'a>(haystack: &'a str, id: &str) -> &'a str {
        let marker = format!("id=\"{id}\"");
        let Some(pos) = haystack.find(&marker) else {
            panic!("no element with id '{id}'\nActual: {haystack}");
        };
        let start = haystack[..pos].rfind('<').unwrap_or(0);
        let end = haystack[pos..].find('>').map_or(haystack.len(), |e| pos + e + 1);
        &haystack[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = test_node(3, "Docs")
            .with_url("/docs")
            .with_tags(&["fa-book"])
            .current()
            .with_child(test_node(4, "Guide"))
            .build();

        assert_eq!(node.id.as_str(), "3");
        assert_eq!(node.url.as_deref(), Some("/docs"));
        assert_eq!(node.raw_tags, vec!["fa-book"]);
        assert!(node.is_current);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_sample_menu_shape() {
        let menu = sample_menu();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[1].children.len(), 5);
        assert_eq!(sample_menu_json()["items"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_assertions() {
        assert::contains("<a id=\"x\">", "id=\"x\"");
        assert::not_contains("<a>", "href");
        assert::occurrences("<li></li><li></li>", "<li>", 2);
        assert_eq!(
            assert::element_with_id("<ul><li><a href=\"/\" id=\"m\">A</a></li></ul>", "m"),
            "<a href=\"/\" id=\"m\">"
        );
    }
}
