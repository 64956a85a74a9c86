//! Read-only lookup tables consumed by the schema builders.
//!
//! Three tables feed the structured-data pass:
//!
//! | Table        | Key               | Used for                                   |
//! |--------------|-------------------|--------------------------------------------|
//! | stadiums     | slug              | StadiumOrArena capacity/locality, ItemList |
//! | host cities  | slug              | city guide titles, cities ItemList         |
//! | editorial    | (kind, slug)      | datePublished, keywords, sitemap lastmod   |
//!
//! The tables are injected into the navigator rather than consulted
//! globally, so tests can run the pass against any dataset.
//!
//! # Data file
//!
//! ```toml
//! [[stadiums]]
//! slug = "sofi-stadium"
//! name = "SoFi Stadium"
//! city = "Inglewood, California, USA"
//! capacity = 70240
//!
//! [[host_cities]]
//! slug = "los-angeles-city-guide"
//! name = "Los Angeles"
//!
//! [[editorial]]
//! kind = "city"
//! slug = "los-angeles-city-guide"
//! date_published = "2025-01-21"
//! keywords = ["SoFi Stadium"]
//! ```

mod builtin;
mod store;
mod types;

pub use store::SiteData;
pub use types::{EditorialEntry, EditorialKind, StadiumInfo};

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};

/// Load the lookup tables selected by the config.
pub fn load_site_data(config: &SiteConfig) -> Result<SiteData> {
    match config.data_path() {
        Some(path) => {
            let data = SiteData::from_path(&path)
                .with_context(|| format!("Failed to load lookup tables from {}", path.display()))?;
            log!(
                "data";
                "{} stadiums, {} host cities from {}",
                data.stadiums().len(),
                data.host_cities().len(),
                path.display()
            );
            Ok(data)
        }
        None => Ok(SiteData::builtin()),
    }
}
