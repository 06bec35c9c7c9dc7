//! Directory walking abstraction for the FlexDoc documentation tree.
//!
//! This crate provides a [`Storage`] trait that yields every entry below a
//! documentation root together with its kind, and reads bounded file prefixes
//! for front-matter extraction. This enables:
//!
//! - **Unit testing** of tree construction without touching the real filesystem
//! - **Clean separation** between tree-building logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()` and `read_head()` methods
//! - [`FsStorage`] implementation walking the local filesystem
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), flexdoc_storage::StorageError> {
//! use std::path::PathBuf;
//! use flexdoc_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! for entry in storage.scan()? {
//!     println!("{:?} {}", entry.kind, entry.path.display());
//! }
//! # Ok(())
//! # }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind};
