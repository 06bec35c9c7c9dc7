//! CLI error types.

use flexdoc_config::ConfigError;
use flexdoc_site::SiteError;
use flexdoc_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0} broken link(s) found")]
    BrokenLinks(usize),
}
