//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `stadiumport.toml` or a lookup-table file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}
