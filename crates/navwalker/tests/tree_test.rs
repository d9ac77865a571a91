#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu document and tree assembly tests.

use navwalker::menu::{DocumentFormat, MenuDocument, MenuLink, MenuTree, NodeId};
use navwalker::theme::{display_nav_menu, render_nav_menu};
use navwalker::{NavMenuArgs, TreeError};
use navwalker_test_utils::{assert, sample_menu, sample_menu_json};

#[test]
fn test_json_document_renders_like_builder_tree() {
    let json = sample_menu_json().to_string();
    let tree = MenuDocument::parse(&json, DocumentFormat::Json)
        .unwrap()
        .into_tree()
        .unwrap();
    let direct = MenuTree::new(sample_menu()).unwrap();

    let args = NavMenuArgs::default();
    assert_eq!(render_nav_menu(Some(&tree), &args), render_nav_menu(Some(&direct), &args));
}

#[test]
fn test_full_menu_wrapper() {
    let tree = MenuTree::new(sample_menu()).unwrap();
    let args = NavMenuArgs {
        menu_id: "primary".to_string(),
        menu_class: "navbar-nav mr-auto".to_string(),
        ..NavMenuArgs::default()
    };
    let html = render_nav_menu(Some(&tree), &args);
    assert!(html.starts_with("<div><ul id=\"primary\" class=\"navbar-nav mr-auto\"><li"));
    assert!(html.ends_with("</li>\n</ul></div>"));
}

#[test]
fn test_flat_yaml_links_render_as_dropdown() {
    let yaml = r#"
name: footer
links:
  - id: 10
    label: Company
    url: /company
  - id: 12
    label: Careers
    url: /careers
    parent_id: 10
    position: 2
  - id: 11
    label: About
    url: /about
    parent_id: 10
    position: 1
"#;
    let tree = MenuDocument::parse(yaml, DocumentFormat::Yaml)
        .unwrap()
        .into_tree()
        .unwrap();
    let html = render_nav_menu(Some(&tree), &NavMenuArgs::default());

    assert::contains(&html, "id=\"menu-item-dropdown-10\"");
    let about = html.find("menu-item-11").unwrap();
    let careers = html.find("menu-item-12").unwrap();
    assert!(about < careers, "siblings follow position order");
}

#[test]
fn test_missing_tree_uses_fallback() {
    let html = render_nav_menu(None, &NavMenuArgs::default());
    assert::contains(&html, "menu-fallback-menu");
    assert::contains(&html, "Add a menu");
}

#[test]
fn test_echo_writes_to_sink() {
    let tree = MenuTree::new(sample_menu()).unwrap();
    let args = NavMenuArgs {
        echo: true,
        ..NavMenuArgs::default()
    };
    let mut sink = Vec::new();
    let returned = display_nav_menu(Some(&tree), &args, &mut sink).unwrap();
    assert!(returned.is_none());
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        render_nav_menu(Some(&tree), &args)
    );
}

#[test]
fn test_tree_validation_rejects_missing_ids() {
    let json = r#"{"items": [{"id": "", "label": "Broken"}]}"#;
    let err = MenuDocument::parse(json, DocumentFormat::Json)
        .unwrap()
        .into_tree()
        .unwrap_err();
    assert!(err.to_string().contains("without an id"));
}

#[test]
fn test_link_cycle_is_rejected() {
    let links = vec![
        MenuLink {
            id: NodeId::from(1_u64),
            parent_id: Some(NodeId::from(3_u64)),
            ..MenuLink::default()
        },
        MenuLink {
            id: NodeId::from(2_u64),
            ..MenuLink::default()
        },
        MenuLink {
            id: NodeId::from(3_u64),
            parent_id: Some(NodeId::from(1_u64)),
            ..MenuLink::default()
        },
    ];
    let err = MenuTree::from_links(links).unwrap_err();
    assert!(matches!(err, TreeError::Cycle(_)));
}
