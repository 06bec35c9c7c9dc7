//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for walking a documentation directory on the local
//! filesystem.

use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Walks the source directory depth-first in pre-order: a directory is
/// yielded before its contents, and siblings are yielded sorted by file
/// name. Every entry is yielded, including dot-prefixed ones such as
/// `.gitkeep`; [`FsStorage::with_hidden`] can turn those off.
///
/// Symbolic links are reported by the kind of their target but symlinked
/// directories are not descended into.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use flexdoc_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs"));
/// let entries = storage.scan()?;
/// ```
#[derive(Debug)]
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    /// Whether dot-prefixed entries are yielded.
    include_hidden: bool,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self {
            source_dir,
            include_hidden: true,
        }
    }

    /// Include or skip dot-prefixed entries.
    #[must_use]
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Root directory being walked.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Validate that a path doesn't escape the source directory.
    ///
    /// Rejects absolute paths and paths containing parent directory
    /// components (`..`).
    fn validate_path(path: &Path) -> Result<(), StorageError> {
        let escapes = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Walk a directory and append its entries in pre-order.
    fn scan_directory(
        &self,
        dir_path: &Path,
        base_path: &Path,
        entries: &mut Vec<Entry>,
    ) -> Result<(), StorageError> {
        let read_dir = fs::read_dir(dir_path)
            .map_err(|e| StorageError::io(e, dir_path).with_backend(BACKEND))?;

        let mut children = Vec::new();
        for dir_entry in read_dir {
            let dir_entry =
                dir_entry.map_err(|e| StorageError::io(e, dir_path).with_backend(BACKEND))?;
            let name = dir_entry.file_name();
            if !self.include_hidden && name.to_string_lossy().starts_with('.') {
                continue;
            }
            let file_type = dir_entry
                .file_type()
                .map_err(|e| StorageError::io(e, dir_entry.path()).with_backend(BACKEND))?;
            children.push((name, dir_entry.path(), file_type));
        }

        children.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

        for (name, path, file_type) in children {
            let rel_path = base_path.join(&name);

            if file_type.is_symlink() {
                let is_dir = fs::metadata(&path).is_ok_and(|m| m.is_dir());
                let kind = if is_dir {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                entries.push(Entry {
                    path: rel_path,
                    kind,
                });
            } else if file_type.is_dir() {
                entries.push(Entry::directory(rel_path.clone()));
                self.scan_directory(&path, &rel_path, entries)?;
            } else {
                entries.push(Entry::file(rel_path));
            }
        }

        Ok(())
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Entry>, StorageError> {
        if !self.source_dir.is_dir() {
            return Err(StorageError::not_found(&self.source_dir).with_backend(BACKEND));
        }

        let mut entries = Vec::new();
        self.scan_directory(&self.source_dir, Path::new(""), &mut entries)?;

        tracing::debug!(
            source_dir = %self.source_dir.display(),
            entry_count = entries.len(),
            "Directory scan completed"
        );

        Ok(entries)
    }

    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, StorageError> {
        Self::validate_path(path)?;

        let full_path = self.source_dir.join(path);
        let file = fs::File::open(&full_path)
            .map_err(|e| StorageError::io(e, &full_path).with_backend(BACKEND))?;

        let mut buf = Vec::new();
        file.take(u64::try_from(limit).unwrap_or(u64::MAX))
            .read_to_end(&mut buf)
            .map_err(|e| StorageError::io(e, &full_path).with_backend(BACKEND))?;

        Ok(buf)
    }
}
