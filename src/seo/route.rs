//! Entity resolution: pathname → page kind.
//!
//! # Routing Table
//!
//! | Path | Entity |
//! |------|--------|
//! | `/` | `Home` |
//! | `/world-cup-2026-host-cities` | `CollectionIndex { Cities }` |
//! | `/world-cup-2026-host-cities/<slug>` | `CityGuide { slug }` |
//! | `/world-cup-2026-stadiums` | `CollectionIndex { Stadiums }` |
//! | `/world-cup-2026-stadiums/<slug>` | `StadiumGuide { slug }` |
//! | `/<editorial-root>/<slug>` | `Article { slug, section }` |
//! | anything else | `Generic` |
//!
//! The prefixes are disjoint, so rule order only matters for readability.

use serde::Serialize;

use crate::data::{SiteData, StadiumInfo};
use crate::log;
use crate::utils::slug::{normalize_pathname, path_segments, titleize};

use super::reconcile::canonical_url;

pub const HOST_CITIES_ROOT: &str = "world-cup-2026-host-cities";
pub const STADIUMS_ROOT: &str = "world-cup-2026-stadiums";

/// First segments that hold long-form editorial articles.
pub const EDITORIAL_ROOTS: &[&str] = &[
    "travel-guides",
    "transportation",
    "world-cup-2026-travel-tips",
    "guides",
    "safety-guide",
    "luxury-travel",
    "budget-guides",
    "travel-routes",
    "city-comparisons",
    "accommodation",
];

// ============================================================================
// Types
// ============================================================================

/// Which collection an index page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Cities,
    Stadiums,
}

impl CollectionKind {
    /// First path segment of the collection.
    pub const fn root(self) -> &'static str {
        match self {
            Self::Cities => HOST_CITIES_ROOT,
            Self::Stadiums => STADIUMS_ROOT,
        }
    }
}

/// Semantic kind of a page, with the slug(s) that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity", rename_all = "kebab-case")]
pub enum PageEntity {
    Home,
    CityGuide { slug: String },
    StadiumGuide { slug: String },
    CollectionIndex { kind: CollectionKind },
    Article { slug: String, section: String },
    Generic,
}

/// Per-navigation view of the current URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    /// Normalized pathname (leading `/`, no query or fragment)
    pub pathname: String,
    /// Canonical absolute URL of the page
    pub full_url: String,
    /// Non-empty path segments, still percent-encoded
    pub segments: Vec<String>,
}

impl RouteContext {
    pub fn new(site_url: &str, raw_pathname: &str) -> Self {
        let pathname = normalize_pathname(raw_pathname);
        let segments = path_segments(&pathname)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let full_url = canonical_url(site_url, &pathname);
        Self {
            pathname,
            full_url,
            segments,
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Classify a pathname. Pure and total: every input maps to one entity.
pub fn resolve(pathname: &str) -> PageEntity {
    let pathname = normalize_pathname(pathname);
    let segments = path_segments(&pathname);

    match segments.as_slice() {
        [] => PageEntity::Home,
        [root, slug, ..] if *root == HOST_CITIES_ROOT => PageEntity::CityGuide {
            slug: (*slug).to_owned(),
        },
        [root, slug, ..] if *root == STADIUMS_ROOT => PageEntity::StadiumGuide {
            slug: (*slug).to_owned(),
        },
        [root] if *root == HOST_CITIES_ROOT => PageEntity::CollectionIndex {
            kind: CollectionKind::Cities,
        },
        [root] if *root == STADIUMS_ROOT => PageEntity::CollectionIndex {
            kind: CollectionKind::Stadiums,
        },
        [root, slug, ..] if EDITORIAL_ROOTS.contains(root) => PageEntity::Article {
            slug: (*slug).to_owned(),
            section: (*root).to_owned(),
        },
        _ => PageEntity::Generic,
    }
}

// ============================================================================
// Stadium Enrichment
// ============================================================================

/// Stadium fields available to the StadiumOrArena builder.
///
/// `locality` and `capacity` are either both known (table match) or both
/// absent (fallback from the slug).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StadiumProfile {
    pub name: String,
    pub locality: Option<String>,
    pub capacity: Option<u32>,
}

impl StadiumProfile {
    /// Look up a stadium slug, falling back to a titleized slug on a miss.
    pub fn lookup(slug: &str, data: &SiteData) -> Self {
        match data.stadium(slug) {
            Some(info) => Self::from(info),
            None => {
                log!("seo"; "no stadium metadata for `{slug}`, using slug as name");
                Self {
                    name: titleize(slug),
                    locality: None,
                    capacity: None,
                }
            }
        }
    }
}

impl StadiumProfile {
    /// Whether the profile came from the stadium table.
    pub const fn is_enriched(&self) -> bool {
        self.capacity.is_some()
    }
}

impl From<&StadiumInfo> for StadiumProfile {
    fn from(info: &StadiumInfo) -> Self {
        Self {
            name: info.name.clone(),
            locality: Some(info.city.clone()),
            capacity: Some(info.capacity),
        }
    }
}
