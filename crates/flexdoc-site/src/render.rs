//! HTML fragments derived from the document tree.
//!
//! Pure functions over a [`DocTree`]; memoization, logging and error
//! reporting live in [`Site`](crate::Site).

use crate::naming::titleize;
use crate::tree::{DocNode, DocTree, NodeId};

/// Class of the `<span>` emitted in place of an unresolved reference group.
pub const BROKEN_LINK_CLASS: &str = "broken-link";

/// Separator placed between breadcrumb items.
pub const BREADCRUMB_SEPARATOR: &str = " &gt; ";

const NAV_ARROW: &str = r#"<div class="arrow right"></div>"#;

/// Escape text for safe inclusion in HTML content and attributes.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// A see-also expression whose reference did not resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenReference {
    /// The offending expression, trimmed.
    pub raw: String,
}

impl BrokenReference {
    /// Visibly flagged marker rendered in place of the whole group.
    #[must_use]
    pub fn marker(&self) -> String {
        format!(
            r#"<span class="{BROKEN_LINK_CLASS}">&lt;BROKEN LINK ({})&gt;</span>"#,
            escape_html(&self.raw)
        )
    }
}

/// Parsed `<ref>[#<anchor>] [<label>]` expression.
#[derive(Debug, PartialEq, Eq)]
struct SeeExpression<'a> {
    reference: &'a str,
    anchor: Option<&'a str>,
    label: Option<&'a str>,
}

impl<'a> SeeExpression<'a> {
    fn parse(expr: &'a str) -> Self {
        let (link, label) = match expr.split_once(char::is_whitespace) {
            Some((link, rest)) => (link, Some(rest.trim()).filter(|l| !l.is_empty())),
            None => (expr, None),
        };
        let (reference, anchor) = match link.split_once('#') {
            Some((reference, rest)) => {
                let anchor = rest.split('#').next().filter(|a| !a.is_empty());
                (reference, anchor)
            }
            None => (link, None),
        };

        Self {
            reference,
            anchor,
            label,
        }
    }
}

/// Render a comma-separated group of references as `(see A, B and C)`.
///
/// # Errors
///
/// Returns the first expression that does not resolve; nothing from the
/// group is rendered in that case.
pub fn see_also(tree: &DocTree, base_url: &str, text: &str) -> Result<String, BrokenReference> {
    let mut links = Vec::new();

    for expr in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let parsed = SeeExpression::parse(expr);
        let Some(node) = tree.find_by_reference(parsed.reference) else {
            return Err(BrokenReference {
                raw: expr.to_owned(),
            });
        };

        let label = match (parsed.label, parsed.anchor) {
            (Some(label), _) => label.to_owned(),
            (None, Some(anchor)) => titleize(anchor),
            (None, None) => node.short_title().to_owned(),
        };
        let href = match parsed.anchor {
            Some(anchor) => format!("{base_url}{}#{anchor}", node.path),
            None => format!("{base_url}{}", node.path),
        };

        links.push(format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(&href),
            escape_html(&label)
        ));
    }

    let Some(last) = links.pop() else {
        return Err(BrokenReference {
            raw: text.trim().to_owned(),
        });
    };

    if links.is_empty() {
        Ok(format!("(see {last})"))
    } else {
        Ok(format!("(see {} and {last})", links.join(", ")))
    }
}

/// Render the breadcrumb trail of a page.
///
/// Ancestors from the root down are linked; the page itself is plain text.
/// Returns `None` if the page is not in the tree.
pub fn breadcrumb(tree: &DocTree, base_url: &str, page_path: &str) -> Option<String> {
    let id = tree.find_id_by_path(page_path)?;

    let mut items: Vec<String> = tree
        .ancestors(id)
        .into_iter()
        .map(|node| {
            format!(
                r#"<span><a href="{}">{}</a></span>"#,
                escape_html(&page_href(base_url, &node.path)),
                escape_html(node.short_title())
            )
        })
        .collect();
    items.push(format!(
        "<span>{}</span>",
        escape_html(tree.node(id).short_title())
    ));

    Some(items.join(BREADCRUMB_SEPARATOR))
}

/// Link target of a node; the site root is `/` rather than an empty href.
fn page_href(base_url: &str, path: &str) -> String {
    let href = format!("{base_url}{path}");
    if href.is_empty() {
        "/".to_owned()
    } else {
        href
    }
}

/// Render the whole tree as the nested navigation menu.
pub fn nav_menu(tree: &DocTree, base_url: &str) -> String {
    let mut out = String::from(r#"<ul id="nav-menu" class="menu_h_list">"#);
    render_nav_node(tree, base_url, tree.root_id(), 0, &mut out);
    out.push_str("</ul>");
    out
}

fn render_nav_node(tree: &DocTree, base_url: &str, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);

    if node.is_root() {
        render_nav_children(tree, base_url, node, depth, out);
        return;
    }

    out.push_str("<li>");
    if node.is_leaf() {
        out.push_str(&format!(
            r#"<a href="{}">{}</a>"#,
            escape_html(&page_href(base_url, &node.path)),
            escape_html(node.short_title())
        ));
    } else {
        out.push_str(&format!(
            r##"<a href="#" class="isLabel">{}</a>"##,
            escape_html(node.short_title())
        ));
        // Top-level groups sit directly in the horizontal bar.
        if depth >= 2 {
            out.push_str(NAV_ARROW);
        }
        out.push_str("<ul>");
        render_nav_children(tree, base_url, node, depth, out);
        out.push_str("</ul>");
    }
    out.push_str("</li>");
}

fn render_nav_children(
    tree: &DocTree,
    base_url: &str,
    node: &DocNode,
    depth: usize,
    out: &mut String,
) {
    for &child in node.children() {
        render_nav_node(tree, base_url, child, depth + 1, out);
    }
}
