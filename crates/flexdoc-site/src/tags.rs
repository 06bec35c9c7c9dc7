//! Named template tags backed by the document tree.
//!
//! The host templating engine looks tags up by name and calls
//! [`Tag::render`] with the tag's markup and the current page. Three tags
//! are built in:
//!
//! | Tag | Markup | Output |
//! |---|---|---|
//! | `nav_menu` | none | navigation menu |
//! | `see` | `1.2 Setup, 1.3#install` | `(see …)` links |
//! | `breadcrumb` | none | trail of the current page |

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::site::{Site, SiteError};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%\s*(\w+)(?:\s+(.*?))?\s*%\}").unwrap());

/// Per-invocation input of a tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagContext<'a> {
    /// Logical path of the page being rendered, if known.
    pub page_path: Option<&'a str>,
    /// Text between the tag name and the closing delimiter.
    pub markup: &'a str,
}

/// Template tag rendered from site state.
pub trait Tag: Send + Sync {
    /// Name the tag is registered under.
    fn name(&self) -> &'static str;

    /// Render the tag to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the tree can't be built or the tag's
    /// preconditions are not met.
    fn render(&self, site: &Site, ctx: &TagContext<'_>) -> Result<String, SiteError>;
}

struct NavMenuTag;

impl Tag for NavMenuTag {
    fn name(&self) -> &'static str {
        "nav_menu"
    }

    fn render(&self, site: &Site, _ctx: &TagContext<'_>) -> Result<String, SiteError> {
        Ok(site.nav_menu()?.to_string())
    }
}

struct SeeTag;

impl Tag for SeeTag {
    fn name(&self) -> &'static str {
        "see"
    }

    fn render(&self, site: &Site, ctx: &TagContext<'_>) -> Result<String, SiteError> {
        site.see_also(ctx.markup)
    }
}

struct BreadcrumbTag;

impl Tag for BreadcrumbTag {
    fn name(&self) -> &'static str {
        "breadcrumb"
    }

    fn render(&self, site: &Site, ctx: &TagContext<'_>) -> Result<String, SiteError> {
        let page_path = ctx.page_path.ok_or(SiteError::NoCurrentPage("breadcrumb"))?;
        site.breadcrumb(page_path)
    }
}

/// Lookup table of tags by name.
#[derive(Default)]
pub struct TagRegistry {
    tags: HashMap<&'static str, Box<dyn Tag>>,
}

impl TagRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `nav_menu`, `see` and `breadcrumb`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NavMenuTag));
        registry.register(Box::new(SeeTag));
        registry.register(Box::new(BreadcrumbTag));
        registry
    }

    /// Register a tag, replacing any tag with the same name.
    pub fn register(&mut self, tag: Box<dyn Tag>) {
        self.tags.insert(tag.name(), tag);
    }

    /// True if a tag with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Render the tag registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::UnknownTag`] for unregistered names, or the tag's own error.
    pub fn render(&self, site: &Site, name: &str, ctx: &TagContext<'_>) -> Result<String, SiteError> {
        let tag = self
            .tags
            .get(name)
            .ok_or_else(|| SiteError::UnknownTag(name.to_owned()))?;
        tag.render(site, ctx)
    }

    /// Replace every `{% name markup %}` occurrence of a registered tag in `text`.
    ///
    /// Occurrences of unregistered names are left untouched for the host.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a tag.
    pub fn expand(
        &self,
        site: &Site,
        text: &str,
        page_path: Option<&str>,
    ) -> Result<String, SiteError> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in TAG_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let name = &caps[1];
            if !self.contains(name) {
                continue;
            }
            let ctx = TagContext {
                page_path,
                markup: markup(&caps),
            };
            out.push_str(&text[last..whole.start()]);
            out.push_str(&self.render(site, name, &ctx)?);
            last = whole.end();
        }
        out.push_str(&text[last..]);

        Ok(out)
    }

    /// Markup of every occurrence of tag `name` in `text`.
    #[must_use]
    pub fn occurrences<'t>(name: &str, text: &'t str) -> Vec<&'t str> {
        TAG_RE
            .captures_iter(text)
            .filter(|caps| &caps[1] == name)
            .map(|caps| markup(&caps))
            .collect()
    }
}

fn markup<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(2).map_or("", |m| m.as_str())
}
