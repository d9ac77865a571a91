//! The outer menu: container, `<ul>`, and the walked items.

use std::io::{self, Write};

use tracing::debug;

use super::attributes::Attributes;
use super::fallback::render_fallback;
use super::output::emit;
use super::walker::NavWalker;
use crate::config::NavMenuArgs;
use crate::menu::MenuTree;

/// Elements accepted as menu containers.
pub const ALLOWED_CONTAINERS: &[&str] = &["div", "nav"];

/// Container tag to emit, if `name` is an allowed container.
pub(crate) fn container_tag(name: &str) -> Option<&str> {
    ALLOWED_CONTAINERS.iter().copied().find(|tag| *tag == name)
}

/// Render a full navigation menu.
///
/// With no tree, or an empty one, the fallback is rendered instead.
pub fn render_nav_menu(tree: Option<&MenuTree>, args: &NavMenuArgs) -> String {
    let Some(tree) = tree.filter(|tree| !tree.is_empty()) else {
        debug!("no menu tree supplied; rendering fallback");
        return render_fallback(args);
    };

    let items = NavWalker::new(args).walk(tree.roots());
    let container = container_tag(&args.container);
    let mut html = String::new();

    if let Some(tag) = container {
        let mut attrs = Attributes::new();
        attrs
            .set("id", &args.container_id)
            .set("class", &args.container_class);
        html.push_str(&format!("<{tag}{}>", attrs.render()));
    }

    let mut list = Attributes::new();
    list.set("id", &args.menu_id).set("class", &args.menu_class);
    html.push_str(&format!("<ul{}>{items}</ul>", list.render()));

    if let Some(tag) = container {
        html.push_str(&format!("</{tag}>"));
    }

    debug!(nodes = tree.len(), bytes = html.len(), "rendered navigation menu");
    html
}

/// Render a menu, then echo or return it per `args.echo`.
pub fn display_nav_menu<W: Write + ?Sized>(
    tree: Option<&MenuTree>,
    args: &NavMenuArgs,
    sink: &mut W,
) -> io::Result<Option<String>> {
    emit(render_nav_menu(tree, args), args.echo, sink)
}
