//! Document tree, cross-reference resolution and navigation for FlexDoc.
//!
//! This crate provides:
//! - [`DocTree`]: ordered document hierarchy built from a documentation
//!   directory, with dotted references (`1.3.2`) and path lookups
//! - [`Site`]: per-run context that builds the tree once and renders
//!   see-also links, breadcrumbs and the navigation menu
//! - [`ReferenceLinks`]: shared Markdown link definitions
//! - [`TagRegistry`]: named tags a host templating engine can dispatch to
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use flexdoc_site::{Site, SiteConfig};
//!
//! let config = SiteConfig {
//!     mount_path: "/docs".to_owned(),
//!     ..SiteConfig::default()
//! };
//! let site = Site::from_dir(PathBuf::from("site/docs"), config);
//!
//! let menu = site.nav_menu()?;
//! let links = site.see_also("1.2 Setup, 1.3#install")?;
//! let trail = site.breadcrumb("/docs/1-intro/2-setup.html")?;
//! # Ok(())
//! # }
//! ```

mod front_matter;
mod naming;
mod references;
pub mod render;
mod site;
mod tags;
mod tree;

pub use front_matter::{FRONT_MATTER_LIMIT, extract_title};
pub use naming::UNTITLED;
pub use references::{REFERENCES_FILENAME, ReferenceLinks};
pub use render::{BrokenReference, escape_html};
pub use site::{BrokenLink, Site, SiteConfig, SiteError};
pub use tags::{Tag, TagContext, TagRegistry};
pub use tree::{DocNode, DocTree, DocTreeBuilder, NodeId, NodeKind, TreeError};
