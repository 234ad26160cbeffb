//! Process-wide render configuration
//!
//! Defaults shared by every render: the fallback icon, default fill and
//! class, path aliases and icon-set directories. Usually loaded once from a
//! TOML file:
//!
//! ```toml
//! fallback = "@icons/missing.svg"
//! default_fill = "currentColor"
//! default_class = "icon"
//!
//! [aliases]
//! icons = "assets/icons"
//!
//! [icon_sets]
//! bootstrap = "node_modules/bootstrap-icons/icons"
//! font-awesome = "vendor/fontawesome/svgs"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::source::PathResolver;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration read by every render
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Icon rendered in place of one that fails to load
    pub fallback: Option<String>,

    /// Fill used when a request sets none; empty disables fill
    pub default_fill: String,

    /// Class used when a request sets none
    pub default_class: String,

    /// Directory relative paths are resolved against
    pub base_dir: Option<PathBuf>,

    /// `@alias` -> directory
    pub aliases: BTreeMap<String, PathBuf>,

    /// Icon set name -> directory holding its SVGs
    pub icon_sets: BTreeMap<String, PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fallback: None,
            default_fill: "currentColor".to_string(),
            default_class: String::new(),
            base_dir: None,
            aliases: BTreeMap::new(),
            icon_sets: BTreeMap::new(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `base_dir` (or none) is taken relative to the file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;
        if let Some(dir) = path.parent() {
            config.base_dir = Some(match config.base_dir.take() {
                Some(base) => dir.join(base),
                None => dir.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the fallback icon path
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the default fill; an empty string disables it
    pub fn with_default_fill(mut self, fill: impl Into<String>) -> Self {
        self.default_fill = fill.into();
        self
    }

    /// Set the default class list
    pub fn with_default_class(mut self, class: impl Into<String>) -> Self {
        self.default_class = class.into();
        self
    }

    /// Set the base directory for relative paths
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Add a path alias
    pub fn with_alias(mut self, alias: &str, target: impl Into<PathBuf>) -> Self {
        self.aliases
            .insert(alias.trim_start_matches('@').to_string(), target.into());
        self
    }

    /// Set the directory of an icon set
    pub fn with_icon_set(mut self, name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.icon_sets.insert(name.into(), root.into());
        self
    }

    /// Path resolver built from the aliases and base directory
    pub fn path_resolver(&self) -> PathResolver {
        let mut resolver = PathResolver::new();
        if let Some(base) = &self.base_dir {
            resolver = resolver.with_base_dir(base.clone());
        }
        for (alias, target) in &self.aliases {
            resolver.add_alias(alias, target.clone());
        }
        resolver
    }
}
