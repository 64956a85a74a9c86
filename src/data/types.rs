//! Row types for the read-only lookup tables.
//!
//! These mirror the `[[stadiums]]`, `[[host_cities]]` and `[[editorial]]`
//! arrays of a data file.

use serde::{Deserialize, Serialize};

/// One venue in the stadium metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StadiumInfo {
    /// Path segment under `/world-cup-2026-stadiums/`
    pub slug: String,

    /// Display name (e.g., "SoFi Stadium")
    pub name: String,

    /// Locality line used for `address.addressLocality`
    pub city: String,

    /// Tournament seating capacity
    pub capacity: u32,

    /// Card image path or absolute URL
    #[serde(default)]
    pub image: Option<String>,
}

/// One entry in the host-city slug list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostCity {
    /// Path segment under `/world-cup-2026-host-cities/`
    pub slug: String,

    /// City name (e.g., "Miami")
    pub name: String,

    #[serde(default)]
    pub image: Option<String>,
}

/// Which table an editorial entry annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorialKind {
    City,
    Stadium,
    Article,
}

/// Editorial-calendar metadata for one page. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorialEntry {
    /// ISO 8601 date or datetime
    pub date_published: Option<String>,

    /// Last editorial revision (sitemap `lastmod`)
    pub date_modified: Option<String>,

    pub keywords: Option<Vec<String>>,

    /// Display label for `articleSection`
    pub section: Option<String>,

    /// Canonical pathname, required for articles to appear in the sitemap
    pub path: Option<String>,
}

impl EditorialEntry {
    /// Most recent editorial date, preferring `date_modified`.
    pub fn last_touched(&self) -> Option<&str> {
        self.date_modified
            .as_deref()
            .or(self.date_published.as_deref())
    }
}

/// Serialized form of an editorial entry inside a data file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct EditorialRow {
    pub kind: EditorialKind,
    pub slug: String,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl EditorialRow {
    pub fn into_keyed(self) -> ((EditorialKind, String), EditorialEntry) {
        let entry = EditorialEntry {
            date_published: self.date_published,
            date_modified: self.date_modified,
            // An empty keyword list carries no information
            keywords: self.keywords.filter(|k| !k.is_empty()),
            section: self.section,
            path: self.path,
        };
        ((self.kind, self.slug), entry)
    }
}

/// Top-level layout of a data file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct DataFile {
    #[serde(default)]
    pub stadiums: Vec<StadiumInfo>,
    #[serde(default)]
    pub host_cities: Vec<HostCity>,
    #[serde(default)]
    pub editorial: Vec<EditorialRow>,
}
