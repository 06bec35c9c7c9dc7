//! Configuration management for FlexDoc.
//!
//! Parses `flexdoc.toml` with serde and discovers it in the working
//! directory or its parents. CLI settings can be applied during load via
//! [`CliSettings`].
//!
//! ```toml
//! [site]
//! source_dir = "."
//! base_url = "${DOCS_PREFIX:-}"
//! references = "_references.md"
//!
//! [doc_tree]
//! doc_source_path = "docs"
//! root_title = "FlexDoc"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `site.base_url` supports `${VAR}` (error if unset) and
//! `${VAR:-default}`.
//!
//! ## Paths
//!
//! `site.source_dir` is relative to the config file. `doc_tree.doc_source_path`
//! and `site.references` are relative to the source directory, and the
//! documentation directory appears in rendered links under
//! [`Config::mount_path`].

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site source directory.
    pub source_dir: Option<PathBuf>,
    /// Override link prefix.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "flexdoc.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site section as parsed from TOML (paths as strings).
    site: SiteConfigRaw,
    /// Document tree configuration.
    pub doc_tree: DocTreeConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    base_url: Option<String>,
    references: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteSettings {
    /// Site source root.
    pub source_dir: PathBuf,
    /// Prefix prepended to every rendered link, without trailing slash.
    pub base_url: String,
    /// Shared link definitions file, relative to the source root.
    pub references: String,
}

/// Document tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocTreeConfig {
    /// Documentation directory relative to the source root.
    pub doc_source_path: String,
    /// Title of the tree root.
    pub root_title: String,
}

impl Default for DocTreeConfig {
    fn default() -> Self {
        Self {
            doc_source_path: "docs".to_owned(),
            root_title: "FlexDoc".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`DOCS_PREFIX`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path to stay inside the source root.
fn require_relative(value: &str, field: &str) -> Result<(), ConfigError> {
    let escapes = Path::new(value).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(ConfigError::Validation(format!(
            "{field} must be relative to site.source_dir"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `flexdoc.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after path resolution and take precedence
    /// over config file values. The result is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site_resolved.base_url.clone_from(base_url);
        }
    }

    /// Documentation directory on disk.
    #[must_use]
    pub fn doc_dir(&self) -> PathBuf {
        self.site_resolved
            .source_dir
            .join(&self.doc_tree.doc_source_path)
    }

    /// Shared link definitions file on disk.
    #[must_use]
    pub fn references_path(&self) -> PathBuf {
        self.site_resolved
            .source_dir
            .join(&self.site_resolved.references)
    }

    /// Logical path of the documentation directory inside the site.
    ///
    /// `"docs"` mounts at `"/docs"`; `"."` or `""` mounts at the site root (`""`).
    #[must_use]
    pub fn mount_path(&self) -> String {
        self.doc_tree
            .doc_source_path
            .split(['/', '\\'])
            .filter(|seg| !seg.is_empty() && *seg != ".")
            .fold(String::new(), |mut mount, seg| {
                mount.push('/');
                mount.push_str(seg);
                mount
            })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            doc_tree: DocTreeConfig::default(),
            site_resolved: SiteSettings {
                source_dir: base.to_path_buf(),
                base_url: String::new(),
                references: "_references.md".to_owned(),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand before resolution so the resolved value is final
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::load`] after CLI settings are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.doc_tree.root_title, "doc_tree.root_title")?;
        require_relative(&self.doc_tree.doc_source_path, "doc_tree.doc_source_path")?;
        require_non_empty(&self.site_resolved.references, "site.references")?;
        require_relative(&self.site_resolved.references, "site.references")?;

        if self.site_resolved.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with '/'".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }
        Ok(())
    }

    /// Resolve the source directory against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteSettings {
            source_dir: config_dir.join(self.site.source_dir.as_deref().unwrap_or(".")),
            base_url: self.site.base_url.clone().unwrap_or_default(),
            references: self
                .site
                .references
                .clone()
                .unwrap_or_else(|| "_references.md".to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.site_resolved.source_dir, PathBuf::from("/test"));
        assert_eq!(config.site_resolved.base_url, "");
        assert_eq!(config.doc_tree.root_title, "FlexDoc");
        assert_eq!(config.doc_dir(), PathBuf::from("/test/docs"));
        assert_eq!(
            config.references_path(),
            PathBuf::from("/test/_references.md")
        );
        assert_eq!(config.mount_path(), "/docs");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.doc_tree.doc_source_path, "docs");
        assert_eq!(config.doc_tree.root_title, "FlexDoc");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
source_dir = "site"
base_url = "/guide"
references = "shared/links.md"

[doc_tree]
doc_source_path = "manual"
root_title = "Manual"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.source_dir,
            PathBuf::from("/project/site")
        );
        assert_eq!(config.site_resolved.base_url, "/guide");
        assert_eq!(config.doc_dir(), PathBuf::from("/project/site/manual"));
        assert_eq!(
            config.references_path(),
            PathBuf::from("/project/site/shared/links.md")
        );
        assert_eq!(config.doc_tree.root_title, "Manual");
        assert_eq!(config.mount_path(), "/manual");
    }

    #[test]
    fn test_mount_path_nested() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.doc_tree.doc_source_path = "./content/docs/".to_owned();

        assert_eq!(config.mount_path(), "/content/docs");
    }

    #[test]
    fn test_mount_path_site_root() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.doc_tree.doc_source_path = ".".to_owned();
        assert_eq!(config.mount_path(), "");

        config.doc_tree.doc_source_path = String::new();
        assert_eq!(config.mount_path(), "");
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site_resolved.source_dir, PathBuf::from("/custom"));
        assert_eq!(config.doc_dir(), PathBuf::from("/custom/docs"));
        assert_eq!(config.site_resolved.base_url, ""); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_url: Some("/preview".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site_resolved.base_url, "/preview");
        assert_eq!(config.site_resolved.source_dir, PathBuf::from("/test")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site_resolved.source_dir, PathBuf::from("/test"));
        assert_eq!(config.site_resolved.base_url, "");
    }

    #[test]
    fn test_expand_env_vars_base_url() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("FLEXDOC_TEST_BASE_URL", "/from-env");
        }
        let toml = r#"
[site]
base_url = "${FLEXDOC_TEST_BASE_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site_resolved.base_url, "/from-env");
        unsafe {
            std::env::remove_var("FLEXDOC_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("FLEXDOC_TEST_NO_SUCH_VAR");
        }
        let toml = r#"
[site]
base_url = "${FLEXDOC_TEST_NO_SUCH_VAR}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();

        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "site.base_url"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_root_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.doc_tree.root_title = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("doc_tree.root_title"));
    }

    #[test]
    fn test_validate_base_url_trailing_slash() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.base_url = "/guide/".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_doc_source_path_escapes_source() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.doc_tree.doc_source_path = "../docs".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("doc_tree.doc_source_path"));
    }

    #[test]
    fn test_validate_absolute_references() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.references = "/etc/links.md".to_owned();

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("site.references"));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &config_path,
            "[site]\nbase_url = \"/guide\"\n\n[doc_tree]\nroot_title = \"Guide\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();

        assert_eq!(config.config_path, Some(config_path));
        assert_eq!(config.site_resolved.source_dir, temp_dir.path().join("."));
        assert_eq!(config.site_resolved.base_url, "/guide");
        assert_eq!(config.doc_tree.root_title, "Guide");
    }

    #[test]
    fn test_load_cli_settings_win() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "[site]\nbase_url = \"/guide\"\n").unwrap();
        let settings = CliSettings {
            base_url: Some("/preview".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&config_path), Some(&settings)).unwrap();

        assert_eq!(config.site_resolved.base_url, "/preview");
    }

    #[test]
    fn test_load_validates_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "").unwrap();
        let settings = CliSettings {
            base_url: Some("/preview/".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&config_path), Some(&settings)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = Config::load(Some(&missing), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(ref p) if *p == missing));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "[doc_tree\nroot_title = 1").unwrap();

        let err = Config::load(Some(&config_path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
