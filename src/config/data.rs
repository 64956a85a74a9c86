//! `[data]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[data]` section in stadiumport.toml.
///
/// When `path` is unset the built-in World Cup 2026 dataset is used.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Lookup-table file, relative to the config file.
    #[serde(default = "defaults::data::path")]
    #[educe(Default = defaults::data::path())]
    pub path: Option<PathBuf>,
}
