//! Decorator configuration management for `decor.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── page       # [page] [disclaimer] [toc] [tables]
//! │   └── crossref   # [crossref]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config file discovery
//! └── mod.rs         # DecorConfig (this file)
//! ```
//!
//! The file is optional: without one every section takes its defaults,
//! which reproduce the markers used by the generated book pages.

mod error;
pub mod section;
mod util;

use util::find_config_file;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{
    CrossRefConfig, DisclaimerConfig, ListKind, PageConfig, TablesConfig, TocConfig,
};

use crate::utils::plural_s;
use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing decor.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Rendered site directory decorated when no paths are given
    pub site: PathBuf,

    /// Invoking script node
    pub page: PageConfig,

    /// Disclaimer container and notice
    pub disclaimer: DisclaimerConfig,

    /// Table of contents
    pub toc: TocConfig,

    /// Table styling
    pub tables: TablesConfig,

    /// Cross-reference table generation
    pub crossref: CrossRefConfig,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            root: PathBuf::new(),
            site: PathBuf::from("_site"),
            page: PageConfig::default(),
            disclaimer: DisclaimerConfig::default(),
            toc: TocConfig::default(),
            tables: TablesConfig::default(),
            crossref: CrossRefConfig::default(),
        }
    }
}

impl DecorConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// The project root is the config file's parent directory, or cwd when
    /// no config file exists.
    pub fn load(config_name: &Path) -> Result<Self> {
        let (mut config, root) = match find_config_file(config_name) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                (config, root)
            }
            None => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                (Self::default(), std::env::current_dir()?)
            }
        };

        config.normalize_paths(&root);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Read `path`, warning about (and ignoring) unknown keys.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (config, unknown) = Self::parse_with_ignored(&content)?;

        if !unknown.is_empty() {
            log!(
                "warning";
                "ignoring unknown field{} in {}: {}",
                plural_s(unknown.len()),
                path.display(),
                unknown.join(", ")
            );
        }
        Ok(config)
    }

    /// Deserialize, recording the dotted path of every key serde skipped.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(toml::Deserializer::new(content), |key| {
            unknown.push(key.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, unknown))
    }

    /// Directory holding the config file, or cwd without one.
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Resolve configured relative paths against the project root.
    fn normalize_paths(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.site = root.join(&self.site);
        self.crossref.source = root.join(&self.crossref.source);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.page.validate(&mut diag);
        self.disclaimer.validate(&mut diag);
        self.toc.validate(&mut diag);
        self.tables.validate(&mut diag);
        self.crossref.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> DecorConfig {
    let (parsed, ignored) = DecorConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
