//! Site configuration management for `stadiumport.toml`.
//!
//! # Sections
//!
//! | Section  | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `[site]` | Site identity (url, name, logo, language)        |
//! | `[data]` | Lookup tables (stadiums, host cities, editorial) |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://stadiumport.com"
//! name = "Stadiumport"
//! description = "World Cup 2026 travel guides"
//!
//! [data]
//! path = "data.toml"
//! ```
//!
//! The config file is optional. Without one, the defaults below describe
//! the production site and the built-in dataset is used.

mod data;
pub mod defaults;
mod error;
mod site;

pub use data::DataConfig;
pub use error::ConfigError;
pub use site::SiteSection;

use crate::cli::Cli;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing stadiumport.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteSection,

    /// Lookup table sources
    #[serde(default)]
    pub data: DataConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Directory that relative paths inside the config resolve against.
    pub fn get_root(&self) -> &Path {
        self.config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("./"))
    }

    /// Site url without trailing slashes, ready for `format!("{base}{path}")`.
    pub fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.site_url {
            self.site.url = url.clone();
        }
        if let Some(path) = &cli.data {
            // CLI paths are relative to the working directory, not the config
            self.data.path = Some(std::path::absolute(path).unwrap_or_else(|_| path.clone()));
        }
    }

    /// Validate configuration values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.site.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "[site].url must start with http:// or https://, got `{url}`"
            )));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("[site].name must not be empty".into()));
        }
        Ok(())
    }

    /// Resolved path of the lookup-table file, if one is configured.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                self.get_root().join(path)
            }
        })
    }
}
