//! Shared Markdown link definitions.
//!
//! A site may keep reference-style link definitions in one file:
//!
//! ```text
//! [google]: http://www.google.com  "Google it!"
//! [wiki]: http://wikipedia.org  "Online Encyclopedia"
//! ```
//!
//! Appending them to every document before Markdown conversion lets any
//! page write `[Wikipedia][wiki]` without repeating the URL.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::site::SiteError;

/// Default file name of the shared definitions, relative to the site source.
pub const REFERENCES_FILENAME: &str = "_references.md";

static DEFINITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^ {0,3}\[([^\]]+)\]:[ \t]*\S+").unwrap());

/// Link definitions appended to Markdown documents.
#[derive(Clone, Debug, Default)]
pub struct ReferenceLinks {
    content: Option<String>,
}

impl ReferenceLinks {
    /// Load definitions from `path`.
    ///
    /// A missing file yields empty definitions.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::References`] if the file exists but can't be read.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded reference definitions");
                Ok(Self::from_content(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(SiteError::References {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Definitions from an in-memory string.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// True if there is nothing to inject.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Append the definitions to a Markdown document.
    #[must_use]
    pub fn inject(&self, markdown: &str) -> String {
        match &self.content {
            Some(content) => format!("{markdown}\n{content}"),
            None => markdown.to_owned(),
        }
    }

    /// Labels of the defined links, in file order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        let Some(content) = &self.content else {
            return Vec::new();
        };
        DEFINITION_RE
            .captures_iter(content)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}
