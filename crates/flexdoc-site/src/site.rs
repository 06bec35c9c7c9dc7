//! Per-run site context.
//!
//! Provides [`Site`], the object constructed once per generation run and
//! handed to every component that needs tree access.
//!
//! # Thread Safety
//!
//! `Site` is designed for concurrent access:
//! - `tree()` returns `Arc<DocTree>`; after the first build this is a lock-free read
//! - the first build is serialized by a mutex with double-checked publication,
//!   so concurrent first callers observe a single tree
//! - a failed build is not cached; the next caller retries
//! - `nav_menu()` is computed once and shared
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use flexdoc_site::{Site, SiteConfig};
//!
//! let site = Site::from_dir(PathBuf::from("docs"), SiteConfig::default());
//! let menu = site.nav_menu()?;
//! let see = site.see_also("1.2 Setup, 1.3#install")?;
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use flexdoc_storage::{FsStorage, Storage};

use crate::references::ReferenceLinks;
use crate::render::{self, BrokenReference};
use crate::tree::{DocTree, TreeError};

/// Error returned by [`Site`] operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The document tree could not be built.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// The current page is not part of the document tree.
    #[error("Page not found in document tree: {0}")]
    PageNotFound(String),
    /// A tag needing the current page was rendered without one.
    #[error("Tag '{0}' requires a current page")]
    NoCurrentPage(&'static str),
    /// No tag registered under this name.
    #[error("Unknown tag: {0}")]
    UnknownTag(String),
    /// Shared link definitions could not be read.
    #[error("Failed to read reference definitions {}: {source}", path.display())]
    References {
        /// Path of the definitions file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for [`Site`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Logical path of the documentation directory (e.g. `"/docs"`, `""`).
    pub mount_path: String,
    /// Title of the tree root.
    pub root_title: String,
    /// Prefix prepended to every rendered link.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mount_path: String::new(),
            root_title: "FlexDoc".to_owned(),
            base_url: String::new(),
        }
    }
}

/// A reference group that failed to resolve during this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokenLink {
    /// The offending expression.
    pub reference: String,
}

/// Documentation site context for one generation run.
pub struct Site {
    storage: Arc<dyn Storage>,
    config: SiteConfig,
    references: ReferenceLinks,
    /// Serializes the one-time tree build.
    build_lock: Mutex<()>,
    tree: OnceLock<Arc<DocTree>>,
    nav_menu: OnceLock<Arc<str>>,
    broken_links: Mutex<Vec<BrokenLink>>,
}

impl Site {
    /// Create a site over any storage backend.
    ///
    /// The tree is not built until first needed.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self {
            storage,
            config,
            references: ReferenceLinks::default(),
            build_lock: Mutex::new(()),
            tree: OnceLock::new(),
            nav_menu: OnceLock::new(),
            broken_links: Mutex::new(Vec::new()),
        }
    }

    /// Create a site over a documentation directory on disk.
    #[must_use]
    pub fn from_dir(doc_dir: PathBuf, config: SiteConfig) -> Self {
        Self::new(Arc::new(FsStorage::new(doc_dir)), config)
    }

    /// Attach the shared Markdown link definitions.
    #[must_use]
    pub fn with_references(mut self, references: ReferenceLinks) -> Self {
        self.references = references;
        self
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The document tree, built on first call.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Tree`] if the build fails.
    pub fn tree(&self) -> Result<Arc<DocTree>, SiteError> {
        // Fast path: already published
        if let Some(tree) = self.tree.get() {
            return Ok(Arc::clone(tree));
        }

        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Double-check after acquiring lock
        if let Some(tree) = self.tree.get() {
            return Ok(Arc::clone(tree));
        }

        let tree = Arc::new(DocTree::build(
            self.storage.as_ref(),
            &self.config.mount_path,
            &self.config.root_title,
        )?);
        Ok(Arc::clone(self.tree.get_or_init(|| tree)))
    }

    /// Render a see-also group such as `"1.2 Setup, 1.3#install"`.
    ///
    /// An unresolved reference replaces the whole group with a broken-link
    /// marker, logs it and records it in [`Site::broken_links`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Tree`] if the tree can't be built.
    pub fn see_also(&self, text: &str) -> Result<String, SiteError> {
        let tree = self.tree()?;
        Ok(
            match render::see_also(&tree, &self.config.base_url, text) {
                Ok(html) => html,
                Err(broken) => self.report_broken(&broken),
            },
        )
    }

    /// Render the breadcrumb trail of the page at `page_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] if the page is not in the tree.
    pub fn breadcrumb(&self, page_path: &str) -> Result<String, SiteError> {
        let tree = self.tree()?;
        render::breadcrumb(&tree, &self.config.base_url, page_path)
            .ok_or_else(|| SiteError::PageNotFound(page_path.to_owned()))
    }

    /// The navigation menu, rendered once per run.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Tree`] if the tree can't be built.
    pub fn nav_menu(&self) -> Result<Arc<str>, SiteError> {
        let tree = self.tree()?;
        let menu = self
            .nav_menu
            .get_or_init(|| render::nav_menu(&tree, &self.config.base_url).into());
        Ok(Arc::clone(menu))
    }

    /// Append the shared link definitions to a Markdown document.
    #[must_use]
    pub fn inject_references(&self, markdown: &str) -> String {
        self.references.inject(markdown)
    }

    /// Broken references reported so far in this run.
    #[must_use]
    pub fn broken_links(&self) -> Vec<BrokenLink> {
        self.broken_links
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn report_broken(&self, broken: &BrokenReference) -> String {
        tracing::warn!(
            target: "flexdoc::broken_link",
            reference = %broken.raw,
            "BROKEN-LINK"
        );
        self.broken_links
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(BrokenLink {
                reference: broken.raw.clone(),
            });
        broken.marker()
    }
}
