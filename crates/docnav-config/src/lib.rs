//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Language partitioning
//!
//! There is no explicit "partitioned" switch. A source directory containing
//! the literal `/{lng}` placeholder (e.g. `docs/{lng}/manual`) declares the
//! tree as language-partitioned; [`ContentConfig::source_root`] yields the
//! directory with the placeholder removed for the host's file scanner.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Placeholder marking the language segment in a source directory.
const LANG_PLACEHOLDER: &str = "/{lng}";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation configuration.
    pub site: SiteConfig,
    /// Content source configuration.
    pub content: ContentConfig,
    /// Navigation configuration.
    pub nav: NavConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site presentation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title. Empty means "fall back to the first top-level route's
    /// label".
    pub title: String,
    /// Deployment prefix pages are served under (e.g. `/manual`). Empty for
    /// root deployments.
    pub path_prefix: String,
}

/// Content source configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Source directory for markdown files, possibly carrying the `/{lng}`
    /// placeholder.
    pub source_dir: String,
    /// Logo file path relative to the source root, if the site has one.
    pub logo: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source_dir: "docs".to_owned(),
            logo: None,
        }
    }
}

impl ContentConfig {
    /// Whether the source tree is language-partitioned.
    ///
    /// True when `source_dir` carries the `/{lng}` placeholder past its
    /// first character (a leading placeholder would leave no base
    /// directory).
    #[must_use]
    pub fn language_partitioned(&self) -> bool {
        self.source_dir.find(LANG_PLACEHOLDER).is_some_and(|i| i > 1)
    }

    /// Source directory with the language placeholder removed.
    #[must_use]
    pub fn source_root(&self) -> PathBuf {
        PathBuf::from(self.source_dir.replace(LANG_PLACEHOLDER, ""))
    }
}

/// Navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Deepest heading level visible in the sidebar.
    pub max_menu_depth: u8,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { max_menu_depth: 3 }
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
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docnav.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        if let Some(discovered) = Self::discover_config() {
            return Self::load_from_file(&discovered);
        }
        tracing::debug!("no {CONFIG_FILENAME} found, using defaults");
        Ok(Self::default())
    }

    /// Search for the config file in the current directory and parents.
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav.max_menu_depth < 1 {
            return Err(ConfigError::Validation(
                "nav.max_menu_depth must be at least 1".to_owned(),
            ));
        }
        if !self.site.path_prefix.is_empty() && !self.site.path_prefix.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.path_prefix must start with '/'".to_owned(),
            ));
        }
        if self.content.source_dir.is_empty() {
            return Err(ConfigError::Validation(
                "content.source_dir cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
