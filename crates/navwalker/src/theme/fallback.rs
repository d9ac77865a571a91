//! Fallback markup for when no menu has been assigned.

use std::io::{self, Write};

use tracing::debug;

use super::attributes::Attributes;
use super::nav_menu::container_tag;
use super::output::emit;
use crate::config::NavMenuArgs;

/// Text of the single fallback link.
pub const FALLBACK_LABEL: &str = "Add a menu";

/// Render a one-item list linking to menu management.
///
/// Viewers who cannot manage menus get an empty string.
pub fn render_fallback(args: &NavMenuArgs) -> String {
    if !args.can_manage_menus {
        debug!("viewer cannot manage menus; fallback suppressed");
        return String::new();
    }

    let container = container_tag(&args.container);
    let mut html = String::new();

    if let Some(tag) = container {
        let mut attrs = Attributes::new();
        attrs.set("id", &args.container_id);
        attrs.push_class("menu-fallback-container");
        for class in args.container_class.split_whitespace() {
            attrs.push_class(class);
        }
        html.push_str(&format!("<{tag}{}>", attrs.render()));
    }

    let mut list = Attributes::new();
    list.set("id", &args.menu_id);
    list.push_class("menu-fallback-menu");
    for class in args.menu_class.split_whitespace() {
        list.push_class(class);
    }

    let mut link = Attributes::new();
    link.set_url("href", &args.manage_url)
        .set("class", "nav-link")
        .set("title", FALLBACK_LABEL);

    html.push_str(&format!(
        "<ul{}><li class=\"nav-item\"><a{}>{FALLBACK_LABEL}</a></li></ul>",
        list.render(),
        link.render()
    ));

    if let Some(tag) = container {
        html.push_str(&format!("</{tag}>"));
    }

    html
}

/// Render the fallback, then echo or return it per `args.echo`.
pub fn display_fallback<W: Write + ?Sized>(
    args: &NavMenuArgs,
    sink: &mut W,
) -> io::Result<Option<String>> {
    emit(render_fallback(args), args.echo, sink)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_with_default_container() {
        let html = render_fallback(&NavMenuArgs::default());
        assert_eq!(
            html,
            "<div class=\"menu-fallback-container\"><ul class=\"menu-fallback-menu menu\"><li class=\"nav-item\"><a href=\"/admin/structure/menu\" class=\"nav-link\" title=\"Add a menu\">Add a menu</a></li></ul></div>"
        );
    }

    #[test]
    fn test_fallback_container_attributes() {
        let args = NavMenuArgs {
            container: "nav".to_string(),
            container_class: "navbar-collapse".to_string(),
            container_id: "main-nav".to_string(),
            menu_class: "navbar-nav".to_string(),
            menu_id: "primary".to_string(),
            ..NavMenuArgs::default()
        };
        let html = render_fallback(&args);
        assert!(html.starts_with(
            "<nav id=\"main-nav\" class=\"menu-fallback-container navbar-collapse\"><ul id=\"primary\" class=\"menu-fallback-menu navbar-nav\">"
        ));
        assert!(html.ends_with("</ul></nav>"));
    }

    #[test]
    fn test_fallback_without_container() {
        let args = NavMenuArgs {
            container: String::new(),
            ..NavMenuArgs::default()
        };
        let html = render_fallback(&args);
        assert!(html.starts_with("<ul"));
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_fallback_rejects_unknown_container() {
        let args = NavMenuArgs {
            container: "section".to_string(),
            ..NavMenuArgs::default()
        };
        assert!(!render_fallback(&args).contains("section"));
    }

    #[test]
    fn test_fallback_hidden_without_permission() {
        let args = NavMenuArgs {
            can_manage_menus: false,
            ..NavMenuArgs::default()
        };
        assert_eq!(render_fallback(&args), "");
    }

    #[test]
    fn test_display_fallback_echo() {
        let args = NavMenuArgs {
            echo: true,
            ..NavMenuArgs::default()
        };
        let mut sink = Vec::new();
        assert!(display_fallback(&args, &mut sink).unwrap().is_none());
        assert!(String::from_utf8(sink).unwrap().contains(FALLBACK_LABEL));
    }
}
