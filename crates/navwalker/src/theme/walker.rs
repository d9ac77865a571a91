//! Depth-first walker that turns a menu tree into Bootstrap navigation markup.
//!
//! Each sibling group is planned before anything is emitted: every node is
//! classified and its link attributes are built, then the group decides once
//! whether its `<li>` wrappers are dropped (dropdown entries are flat
//! siblings inside `.dropdown-menu`). Children are rendered after their
//! parent's link, inside a `dropdown-menu` wrapper.

use tracing::debug;

use super::attributes::Attributes;
use super::escape::html_escape;
use crate::classify::{Classification, Classifier, LinkModifier};
use crate::config::NavMenuArgs;
use crate::menu::MenuNode;

/// Schema.org type attached to navigation entries when schema markup is on.
pub const SCHEMA_ITEM_TYPE: &str = "https://www.schema.org/SiteNavigationElement";

/// Element a node's link is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkElement {
    Anchor,
    /// Headers, text-only entries, and the current page.
    Span,
    /// Dividers.
    Div,
}

impl LinkElement {
    pub fn for_node(classification: &Classification, is_current: bool) -> Self {
        match classification.link_modifier {
            LinkModifier::DropdownDivider => Self::Div,
            LinkModifier::DropdownHeader | LinkModifier::DropdownText => Self::Span,
            _ if is_current => Self::Span,
            _ => Self::Anchor,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Anchor => "a",
            Self::Span => "span",
            Self::Div => "div",
        }
    }
}

/// A node prepared for emission.
struct PlannedItem<'n> {
    node: &'n MenuNode,
    classification: Classification,
    element: LinkElement,
    link_attrs: Attributes,
}

/// Renders menu nodes with the given arguments.
#[derive(Debug, Clone, Copy)]
pub struct NavWalker<'a> {
    args: &'a NavMenuArgs,
    classifier: Classifier,
}

impl<'a> NavWalker<'a> {
    pub fn new(args: &'a NavMenuArgs) -> Self {
        Self {
            args,
            classifier: Classifier::new(args.schema_markup),
        }
    }

    /// Render top-level nodes and everything beneath them.
    pub fn walk(&self, nodes: &[MenuNode]) -> String {
        let mut output = String::new();
        self.render_level(&mut output, nodes, 0);
        debug!(
            items = nodes.len(),
            bytes = output.len(),
            "rendered navigation items"
        );
        output
    }

    /// Render one sibling group at `depth`.
    fn render_level(&self, output: &mut String, nodes: &[MenuNode], depth: usize) {
        let items: Vec<PlannedItem<'_>> = nodes.iter().map(|node| self.plan(node, depth)).collect();

        let unwrap = depth > 0
            && items.iter().any(|item| {
                item.link_attrs.has_class("dropdown-item")
                    || item.link_attrs.has_class("dropdown-item-text")
            });

        for item in &items {
            self.render_item(output, item, depth, unwrap);
        }
    }

    /// Whether `node`'s children are rendered, honoring the depth limit.
    fn renders_children(&self, node: &MenuNode, depth: usize) -> bool {
        node.has_children() && (self.args.depth == 0 || depth + 1 < self.args.depth)
    }

    fn plan<'n>(&self, node: &'n MenuNode, depth: usize) -> PlannedItem<'n> {
        let has_children = self.renders_children(node, depth);
        let classification = self.classifier.classify(&node.raw_tags, depth, has_children);
        let link_attrs = link_attributes(node, &classification, depth);
        let element = LinkElement::for_node(&classification, node.is_current);
        PlannedItem {
            node,
            classification,
            element,
            link_attrs,
        }
    }

    fn render_item(&self, output: &mut String, item: &PlannedItem<'_>, depth: usize, unwrap: bool) {
        let spacing = self.args.item_spacing;
        let tag = item.element.tag();

        output.push_str(&spacing.tab().repeat(depth));
        if !unwrap {
            output.push_str("<li");
            output.push_str(&list_item_attributes(item, depth).render());
            output.push('>');
        }

        output.push_str(&self.args.before);
        output.push('<');
        output.push_str(tag);
        output.push_str(&item.link_attrs.render());
        output.push('>');
        output.push_str(&self.args.link_before);
        output.push_str(&item_title(item.node, &item.classification));
        output.push_str(&self.args.link_after);
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
        output.push_str(&self.args.after);

        if item.classification.has_children {
            self.start_level(output, item.node, depth);
            self.render_level(output, &item.node.children, depth + 1);
            self.end_level(output, depth);
        }

        if !unwrap {
            output.push_str("</li>");
        }
        output.push_str(spacing.newline());
    }

    /// Open the `dropdown-menu` wrapper for `parent`'s children.
    fn start_level(&self, output: &mut String, parent: &MenuNode, depth: usize) {
        let spacing = self.args.item_spacing;

        let mut attrs = Attributes::new();
        attrs.push_class("dropdown-menu");
        for class in self.args.submenu_class.split_whitespace() {
            attrs.push_class(class);
        }
        attrs.set("aria-labelledby", format!("menu-item-dropdown-{}", parent.id));

        output.push_str(spacing.newline());
        output.push_str(&spacing.tab().repeat(depth));
        output.push_str("<div");
        output.push_str(&attrs.render());
        output.push('>');
        output.push_str(spacing.newline());
    }

    fn end_level(&self, output: &mut String, depth: usize) {
        let spacing = self.args.item_spacing;
        output.push_str(&spacing.tab().repeat(depth));
        output.push_str("</div>");
        output.push_str(spacing.newline());
    }
}

/// Attributes of the `<li>` wrapping a node. Nested entries get none.
fn list_item_attributes(item: &PlannedItem<'_>, depth: usize) -> Attributes {
    let mut attrs = Attributes::new();
    if depth > 0 {
        return attrs;
    }

    let node = item.node;
    let has_children = item.classification.has_children;

    if item.classification.schema_eligible {
        attrs.set("itemscope", "itemscope");
        attrs.set("itemtype", SCHEMA_ITEM_TYPE);
    }

    attrs.push_class("menu-item");
    attrs.push_class(&format!("menu-item-{}", node.id));
    for class in &item.classification.classes {
        attrs.push_class(class);
    }
    if has_children {
        attrs.push_class("menu-item-has-children");
    }
    if node.is_current {
        attrs.push_class("current-menu-item");
    }
    attrs.push_class("nav-item");
    if has_children {
        attrs.push_class("dropdown");
    }
    if node.is_current {
        attrs.push_class("active");
    }
    attrs
}

/// Attributes of a node's link element.
fn link_attributes(node: &MenuNode, classification: &Classification, depth: usize) -> Attributes {
    let mut attrs = Attributes::new();
    attrs
        .set("title", node.attr_title.clone().unwrap_or_default())
        .set("target", node.target.clone().unwrap_or_default())
        .set("rel", node.rel.clone().unwrap_or_default())
        .set_url("href", node.url.clone().unwrap_or_default())
        .set("aria-current", if node.is_current { "page" } else { "" })
        .set("id", format!("menu-item-{}", node.id))
        .set("class", classification.classes.join(" "));

    if depth == 0 && classification.has_children {
        attrs
            .set_url("href", "#")
            .set("data-toggle", "dropdown")
            .set("aria-haspopup", "true")
            .set("aria-expanded", "false")
            .push_class("nav-link")
            .push_class("dropdown-toggle")
            .set("id", format!("menu-item-dropdown-{}", node.id));
    } else if depth > 0 {
        attrs.push_class("dropdown-item");
        if node.is_current {
            attrs.push_class("active");
        }
    } else {
        attrs.push_class("nav-link");
    }

    match classification.link_modifier {
        LinkModifier::Disabled => {
            attrs
                .remove("target")
                .set_url("href", "#")
                .set("tabindex", "-1")
                .set("aria-disabled", "true")
                .push_class("disabled");
        }
        LinkModifier::DropdownHeader => {
            attrs
                .remove("href")
                .remove("target")
                .set("class", "dropdown-header h6");
        }
        LinkModifier::DropdownDivider => {
            attrs
                .remove("href")
                .remove("target")
                .set("class", "dropdown-divider");
        }
        LinkModifier::DropdownText => {
            attrs
                .remove("href")
                .remove("target")
                .set("class", "dropdown-item-text");
        }
        LinkModifier::None | LinkModifier::ScreenReaderOnly => {}
    }

    if classification.schema_eligible {
        if depth > 0 {
            attrs
                .set("itemscope", "itemscope")
                .set("itemtype", SCHEMA_ITEM_TYPE);
        }
        attrs.set("itemprop", "url");
    }

    attrs
}

/// Label markup: optional icon, then the wrapped label. Dividers have none.
fn item_title(node: &MenuNode, classification: &Classification) -> String {
    if classification.link_modifier == LinkModifier::DropdownDivider {
        return String::new();
    }

    let mut title = String::new();
    if !node.label.is_empty() {
        let class = if classification.screen_reader_only {
            "menu-item-title sr-only"
        } else {
            "menu-item-title"
        };
        title = format!(
            "<span class=\"{class}\">{}</span>",
            html_escape(&node.label)
        );
    }

    if classification.icon_tags.is_empty() {
        return title;
    }
    format!(
        "<i class=\"{}\" aria-hidden=\"true\"></i> {title}",
        html_escape(&classification.icon_tags.join(" "))
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn node(id: u64, label: &str, url: &str, tags: &[&str]) -> MenuNode {
        MenuNode {
            url: Some(url.to_string()).filter(|u| !u.is_empty()),
            raw_tags: tags.iter().map(|t| t.to_string()).collect(),
            ..MenuNode::new(id, label)
        }
    }

    fn classify(n: &MenuNode, depth: usize, schema: bool) -> Classification {
        Classifier::new(schema).classify(&n.raw_tags, depth, n.has_children())
    }

    #[test]
    fn test_top_level_leaf_attributes() {
        let home = node(1, "Home", "/", &[]);
        let attrs = link_attributes(&home, &classify(&home, 0, false), 0);
        assert_eq!(attrs.render(), r#" href="/" id="menu-item-1" class="nav-link""#);
    }

    #[test]
    fn test_dropdown_toggle_attributes() {
        let mut parent = node(2, "More", "/more", &["wide"]);
        parent.children.push(node(3, "Child", "/child", &[]));
        let attrs = link_attributes(&parent, &classify(&parent, 0, false), 0);
        assert_eq!(
            attrs.render(),
            r##" href="#" id="menu-item-dropdown-2" class="wide nav-link dropdown-toggle" data-toggle="dropdown" aria-haspopup="true" aria-expanded="false""##
        );
    }

    #[test]
    fn test_nested_current_item_is_active() {
        let mut child = node(4, "Here", "/here", &[]);
        child.is_current = true;
        let c = classify(&child, 1, false);
        let attrs = link_attributes(&child, &c, 1);
        assert_eq!(attrs.get("class"), Some("dropdown-item active"));
        assert_eq!(attrs.get("aria-current"), Some("page"));
        assert_eq!(LinkElement::for_node(&c, child.is_current), LinkElement::Span);
    }

    #[test]
    fn test_disabled_link_drops_target() {
        let mut soon = node(7, "Soon", "/soon", &["disabled"]);
        soon.target = Some("_blank".to_string());
        let attrs = link_attributes(&soon, &classify(&soon, 0, false), 0);
        assert_eq!(
            attrs.render(),
            r##" href="#" id="menu-item-7" class="nav-link disabled" tabindex="-1" aria-disabled="true""##
        );
    }

    #[test]
    fn test_dropdown_header_attributes() {
        let header = node(8, "Section", "/ignored", &["dropdown-header", "custom"]);
        let c = classify(&header, 1, true);
        let attrs = link_attributes(&header, &c, 1);
        assert_eq!(attrs.render(), r#" id="menu-item-8" class="dropdown-header h6""#);
        assert_eq!(LinkElement::for_node(&c, false), LinkElement::Span);
    }

    #[test]
    fn test_schema_attributes_by_depth() {
        let top = node(1, "Top", "/", &[]);
        let attrs = link_attributes(&top, &classify(&top, 0, true), 0);
        assert_eq!(attrs.get("itemprop"), Some("url"));
        assert_eq!(attrs.get("itemscope"), None);

        let nested = node(2, "Nested", "/n", &[]);
        let attrs = link_attributes(&nested, &classify(&nested, 1, true), 1);
        assert_eq!(attrs.get("itemscope"), Some("itemscope"));
        assert_eq!(attrs.get("itemtype"), Some(SCHEMA_ITEM_TYPE));
        assert_eq!(attrs.get("itemprop"), Some("url"));
    }

    #[test]
    fn test_item_title_variants() {
        let plain = node(1, "Home", "/", &[]);
        assert_eq!(
            item_title(&plain, &classify(&plain, 0, false)),
            r#"<span class="menu-item-title">Home</span>"#
        );

        let hidden = node(2, "Skip", "/", &["sr-only"]);
        assert_eq!(
            item_title(&hidden, &classify(&hidden, 0, false)),
            r#"<span class="menu-item-title sr-only">Skip</span>"#
        );

        let icon_only = node(3, "", "/", &["fa", "fa-home"]);
        assert_eq!(
            item_title(&icon_only, &classify(&icon_only, 0, false)),
            r#"<i class="fa fa-home" aria-hidden="true"></i> "#
        );

        let divider = node(4, "Ignored", "", &["dropdown-divider", "fa-star"]);
        assert_eq!(item_title(&divider, &classify(&divider, 1, false)), "");
    }

    #[test]
    fn test_label_is_escaped() {
        let n = node(1, "<b>Bold</b> & co", "/", &[]);
        assert_eq!(
            item_title(&n, &classify(&n, 0, false)),
            r#"<span class="menu-item-title">&lt;b&gt;Bold&lt;/b&gt; &amp; co</span>"#
        );
    }

    #[test]
    fn test_walk_single_item() {
        let args = NavMenuArgs::default();
        let html = NavWalker::new(&args).walk(&[node(1, "Home", "/", &[])]);
        assert_eq!(
            html,
            "<li class=\"menu-item menu-item-1 nav-item\"><a href=\"/\" id=\"menu-item-1\" class=\"nav-link\"><span class=\"menu-item-title\">Home</span></a></li>\n"
        );
    }

    #[test]
    fn test_walk_dropdown_preserve_spacing() {
        let mut parent = node(2, "Products", "/products", &[]);
        parent.children.push(node(3, "Widgets", "/widgets", &[]));
        parent.children.push(node(4, "Ignored", "", &["dropdown-divider"]));

        let args = NavMenuArgs::default();
        let html = NavWalker::new(&args).walk(&[parent]);
        let expected = concat!(
            "<li class=\"menu-item menu-item-2 menu-item-has-children nav-item dropdown\">",
            "<a href=\"#\" id=\"menu-item-dropdown-2\" class=\"nav-link dropdown-toggle\" data-toggle=\"dropdown\" aria-haspopup=\"true\" aria-expanded=\"false\">",
            "<span class=\"menu-item-title\">Products</span></a>\n",
            "<div class=\"dropdown-menu\" aria-labelledby=\"menu-item-dropdown-2\">\n",
            "\t<a href=\"/widgets\" id=\"menu-item-3\" class=\"dropdown-item\"><span class=\"menu-item-title\">Widgets</span></a>\n",
            "\t<div id=\"menu-item-4\" class=\"dropdown-divider\"></div>\n",
            "</div>\n",
            "</li>\n",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_group_without_dropdown_items_keeps_list_items() {
        let mut parent = node(1, "Parent", "/", &[]);
        parent.children.push(node(2, "Header", "", &["dropdown-header"]));
        parent.children.push(node(3, "", "", &["dropdown-divider"]));

        let args = NavMenuArgs {
            item_spacing: crate::config::ItemSpacing::Discard,
            ..NavMenuArgs::default()
        };
        let html = NavWalker::new(&args).walk(&[parent]);
        assert!(html.contains("<li><span id=\"menu-item-2\" class=\"dropdown-header h6\">"));
        assert!(html.contains("<li><div id=\"menu-item-3\" class=\"dropdown-divider\"></div></li>"));
    }

    #[test]
    fn test_depth_limit_cuts_children() {
        let mut parent = node(1, "Parent", "/parent", &[]);
        parent.children.push(node(2, "Child", "/child", &[]));

        let args = NavMenuArgs {
            depth: 1,
            ..NavMenuArgs::default()
        };
        let html = NavWalker::new(&args).walk(&[parent]);
        assert!(!html.contains("dropdown-menu"));
        assert!(!html.contains("data-toggle"));
        assert!(html.contains("href=\"/parent\""));
        assert!(!html.contains("Child"));
    }

    #[test]
    fn test_before_and_after_wrap_link() {
        let args = NavMenuArgs {
            before: "<em>".to_string(),
            after: "</em>".to_string(),
            link_before: "[".to_string(),
            link_after: "]".to_string(),
            item_spacing: crate::config::ItemSpacing::Discard,
            ..NavMenuArgs::default()
        };
        let html = NavWalker::new(&args).walk(&[node(1, "Home", "/", &[])]);
        assert!(html.contains(
            "<em><a href=\"/\" id=\"menu-item-1\" class=\"nav-link\">[<span class=\"menu-item-title\">Home</span>]</a></em>"
        ));
    }

    #[test]
    fn test_submenu_class_is_appended() {
        let mut parent = node(1, "Parent", "/", &[]);
        parent.children.push(node(2, "Child", "/c", &[]));
        let args = NavMenuArgs {
            submenu_class: "dropdown-menu-right shadow".to_string(),
            ..NavMenuArgs::default()
        };
        let html = NavWalker::new(&args).walk(&[parent]);
        assert!(html.contains(
            "<div class=\"dropdown-menu dropdown-menu-right shadow\" aria-labelledby=\"menu-item-dropdown-1\">"
        ));
    }
}
