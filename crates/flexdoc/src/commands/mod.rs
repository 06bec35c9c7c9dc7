//! CLI command implementations.

pub(crate) mod breadcrumb;
pub(crate) mod check;
pub(crate) mod inject;
pub(crate) mod nav;
pub(crate) mod see;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use flexdoc_config::{CliSettings, Config};
use flexdoc_site::{ReferenceLinks, Site, SiteConfig};

use crate::error::CliError;

pub(crate) use breadcrumb::BreadcrumbArgs;
pub(crate) use inject::InjectArgs;
pub(crate) use see::SeeArgs;
pub(crate) use tree::TreeArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover flexdoc.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Site source directory (overrides config).
    #[arg(short, long, global = true)]
    source_dir: Option<PathBuf>,

    /// Prefix for every rendered link (overrides config).
    #[arg(long, global = true, env = "FLEXDOC_BASE_URL")]
    base_url: Option<String>,
}

/// Loaded configuration and the site built from it.
pub(crate) struct SiteContext {
    pub(crate) config: Config,
    pub(crate) site: Site,
}

impl SiteArgs {
    /// Load configuration and create the site.
    ///
    /// The document tree is built lazily by the first command that needs it.
    pub(crate) fn open(self) -> Result<SiteContext, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let site_config = SiteConfig {
            mount_path: config.mount_path(),
            root_title: config.doc_tree.root_title.clone(),
            base_url: config.site_resolved.base_url.clone(),
        };
        let references = ReferenceLinks::load(&config.references_path())?;

        tracing::debug!(
            doc_dir = %config.doc_dir().display(),
            mount_path = %site_config.mount_path,
            "Opening site"
        );

        let site = Site::from_dir(config.doc_dir(), site_config).with_references(references);
        Ok(SiteContext { config, site })
    }
}
