//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores entries and file contents in memory and yields entries exactly in
/// the order they were added. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use flexdoc_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_dir("1-intro")
///     .with_file("1-intro/2-setup.md", "---\ntitle: Setup\n---\n");
///
/// let entries = storage.scan().unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockStorage {
    entries: Vec<Entry>,
    contents: HashMap<PathBuf, Vec<u8>>,
    scan_error: Option<StorageErrorKind>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory entry.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(Entry::directory(path));
        self
    }

    /// Add a file entry with content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        let path: PathBuf = path.into();
        self.contents.insert(path.clone(), content.into());
        self.entries.push(Entry::file(path));
        self
    }

    /// Add a file entry whose content can't be read.
    #[must_use]
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(Entry::file(path));
        self
    }

    /// Make `scan()` fail with the given error kind.
    #[must_use]
    pub fn with_scan_error(mut self, kind: StorageErrorKind) -> Self {
        self.scan_error = Some(kind);
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Entry>, StorageError> {
        if let Some(kind) = self.scan_error {
            return Err(StorageError::new(kind).with_backend(BACKEND));
        }
        Ok(self.entries.clone())
    }

    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, StorageError> {
        let content = self
            .contents
            .get(path)
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))?;
        Ok(content[..content.len().min(limit)].to_vec())
    }
}
