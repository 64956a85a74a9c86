//! Navigation effect orchestrator.
//!
//! One [`Navigator::on_route_change`] call is one reconciliation pass:
//!
//! ```text
//! pathname
//!    │
//!    ├── RouteContext::new ──► resolve() ──► PageEntity
//!    │
//!    ├── reconcile_meta()        canonical, og:url, twitter:url, timestamps
//!    │
//!    ├── plan_graphs()           site graphs + date graphs + entity graphs
//!    │
//!    └── inject_json_ld() ×N     then retract stale entity markers
//! ```
//!
//! The navigator is `Idle` between passes and `Reconciling` during one.
//! Passes take `&mut self`, so they cannot overlap; each runs to completion
//! and the next navigation supersedes its output.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::config::SiteSection;
use crate::data::{EditorialEntry, EditorialKind, SiteData};
use crate::log;
use crate::utils::{date::iso_timestamp, slug::titleize};

use super::head::HeadTagStore;
use super::inject::{
    ENTITY_MARKERS, MARKER_ARTICLE_DATE_MODIFIED, MARKER_BREADCRUMB, MARKER_DATE_MODIFIED,
    MARKER_ENTITY, MARKER_ITEM_LIST, MARKER_ORGANIZATION, MARKER_SPEAKABLE, MARKER_WEBSITE,
    inject_json_ld, retract_json_ld,
};
use super::reconcile::{canonical_url, reconcile_meta};
use super::route::{CollectionKind, PageEntity, RouteContext, StadiumProfile, resolve};
use super::schema::{
    CollectionItem, NodeRef, PageParams, SchemaGraph, build_article, build_breadcrumb,
    build_city_guide, build_collection_page, build_item_list, build_organization, build_stadium,
    build_web_page_date, build_website, organization_id,
};

// ============================================================================
// Clock
// ============================================================================

/// Source of the "current instant" stamped into `dateModified`.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// Navigator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Reconciling { pathname: String },
}

/// What one pass did.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub route: RouteContext,
    pub entity: PageEntity,
    /// Timestamp written to every date tag and graph of this pass
    pub stamp: String,
    /// Markers injected, in injection order
    pub emitted: Vec<&'static str>,
    /// Entity markers from an earlier pass that were removed
    pub retracted: Vec<&'static str>,
}

/// Runs reconciliation passes against a head store.
pub struct Navigator<'a, C: Clock = SystemClock> {
    site: &'a SiteSection,
    data: &'a SiteData,
    clock: C,
    state: NavState,
    last_instant: Option<DateTime<Utc>>,
}

impl<'a> Navigator<'a, SystemClock> {
    pub fn new(site: &'a SiteSection, data: &'a SiteData) -> Self {
        Self::with_clock(site, data, SystemClock)
    }
}

impl<'a, C: Clock> Navigator<'a, C> {
    pub fn with_clock(site: &'a SiteSection, data: &'a SiteData, clock: C) -> Self {
        Self {
            site,
            data,
            clock,
            state: NavState::Idle,
            last_instant: None,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Handle one route change.
    ///
    /// Lookup misses only drop optional fields. The only error is a graph
    /// that fails to serialize; the navigator is back to `Idle` either way.
    pub fn on_route_change<S: HeadTagStore + ?Sized>(
        &mut self,
        store: &mut S,
        pathname: &str,
    ) -> Result<PassReport> {
        let route = RouteContext::new(&self.site.url, pathname);
        self.state = NavState::Reconciling {
            pathname: route.pathname.clone(),
        };
        let result = self.reconcile(store, route);
        self.state = NavState::Idle;
        result
    }

    fn reconcile<S: HeadTagStore + ?Sized>(
        &mut self,
        store: &mut S,
        route: RouteContext,
    ) -> Result<PassReport> {
        let entity = resolve(&route.pathname);
        let stamp = self.next_stamp();

        reconcile_meta(store, &route.full_url, &stamp);

        let graphs = plan_graphs(self.site, self.data, &route, &entity, &stamp);
        let mut emitted = Vec::with_capacity(graphs.len());
        for (marker, graph) in &graphs {
            inject_json_ld(store, marker, graph)?;
            emitted.push(*marker);
        }

        let retracted = ENTITY_MARKERS
            .iter()
            .copied()
            .filter(|marker| !emitted.contains(marker))
            .filter(|marker| retract_json_ld(store, marker))
            .collect();

        Ok(PassReport {
            route,
            entity,
            stamp,
            emitted,
            retracted,
        })
    }

    /// Current instant, never earlier than the previous pass's.
    fn next_stamp(&mut self) -> String {
        let now = self.clock.now();
        let instant = match self.last_instant {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_instant = Some(instant);
        iso_timestamp(instant)
    }
}

// ============================================================================
// Graph Planning
// ============================================================================

/// Every graph a page gets, paired with its marker, in injection order.
pub fn plan_graphs(
    site: &SiteSection,
    data: &SiteData,
    route: &RouteContext,
    entity: &PageEntity,
    stamp: &str,
) -> Vec<(&'static str, SchemaGraph)> {
    let base = site.url.trim_end_matches('/');
    let organization = NodeRef::new(organization_id(base));
    let page = describe_page(site, data, entity, route);
    let editorial = editorial_for(data, entity);

    let mut graphs: Vec<(&'static str, SchemaGraph)> = vec![
        (MARKER_WEBSITE, build_website(site).into()),
        (MARKER_ORGANIZATION, build_organization(site).into()),
        (MARKER_BREADCRUMB, build_breadcrumb(base, &route.segments).into()),
        (
            MARKER_DATE_MODIFIED,
            build_web_page_date(&page.title, &page.url, stamp).into(),
        ),
        (
            MARKER_ARTICLE_DATE_MODIFIED,
            build_article(
                &page.title,
                &page.url,
                stamp,
                editorial.and_then(|e| e.date_published.as_deref()),
                editorial.and_then(|e| e.keywords.as_deref()),
                section_label(entity, editorial).as_deref(),
            )
            .into(),
        ),
    ];

    match entity {
        PageEntity::CityGuide { .. } => {
            let city = build_city_guide(&page, editorial, &organization, stamp);
            graphs.push((MARKER_ENTITY, city.article.into()));
            graphs.push((MARKER_SPEAKABLE, city.speakable.into()));
        }
        PageEntity::StadiumGuide { slug } => {
            let profile = StadiumProfile::lookup(slug, data);
            // A slug-only fallback carries its name and nothing else
            let url = profile.is_enriched().then_some(page.url.as_str());
            graphs.push((MARKER_ENTITY, build_stadium(&profile, url).into()));
        }
        PageEntity::CollectionIndex { kind } => {
            let items = collection_items(base, data, *kind);
            graphs.push((
                MARKER_ENTITY,
                build_collection_page(&page.title, &page.description, &page.url, &items).into(),
            ));
            graphs.push((MARKER_ITEM_LIST, build_item_list(&items).into()));
        }
        PageEntity::Article { .. } => {
            let mut article = build_article(
                &page.title,
                &page.url,
                stamp,
                editorial.and_then(|e| e.date_published.as_deref()),
                editorial.and_then(|e| e.keywords.as_deref()),
                section_label(entity, editorial).as_deref(),
            );
            article.in_language = Some(site.language.clone());
            article.author = Some(organization.clone());
            article.publisher = Some(organization);
            graphs.push((MARKER_ENTITY, article.into()));
        }
        PageEntity::Home | PageEntity::Generic => {}
    }

    graphs
}

/// Title and description for a page, from lookup tables where possible.
pub fn describe_page(
    site: &SiteSection,
    data: &SiteData,
    entity: &PageEntity,
    route: &RouteContext,
) -> PageParams {
    let (title, description) = match entity {
        PageEntity::Home => (site.name.clone(), site.description.clone()),
        PageEntity::CityGuide { slug } => {
            let name = match data.host_city(slug) {
                Some(city) => city.name.clone(),
                None => {
                    log!("seo"; "no host city entry for `{slug}`, using slug as name");
                    titleize(slug.strip_suffix("-city-guide").unwrap_or(slug))
                }
            };
            (
                format!("{name} World Cup 2026 City Guide"),
                format!(
                    "Where to stay, how to reach the stadium and what to do in {name} during the 2026 World Cup."
                ),
            )
        }
        PageEntity::StadiumGuide { slug } => {
            let name = data
                .stadium(slug)
                .map_or_else(|| titleize(slug), |s| s.name.clone());
            (
                format!("{name} World Cup 2026 Stadium Guide"),
                format!("Seating, transport and matchday tips for {name} at the 2026 World Cup."),
            )
        }
        PageEntity::CollectionIndex { kind } => match kind {
            CollectionKind::Cities => (
                "World Cup 2026 Host Cities".to_owned(),
                format!(
                    "Travel guides for all {} World Cup 2026 host cities.",
                    data.host_cities().len()
                ),
            ),
            CollectionKind::Stadiums => (
                "World Cup 2026 Stadiums".to_owned(),
                format!(
                    "Guides to all {} World Cup 2026 stadiums.",
                    data.stadiums().len()
                ),
            ),
        },
        PageEntity::Article { slug, .. } => (titleize(slug), String::new()),
        PageEntity::Generic => (
            route
                .segments
                .last()
                .map_or_else(|| site.name.clone(), |s| titleize(s)),
            String::new(),
        ),
    };

    PageParams {
        title,
        description,
        url: route.full_url.clone(),
    }
}

fn editorial_for<'d>(data: &'d SiteData, entity: &PageEntity) -> Option<&'d EditorialEntry> {
    match entity {
        PageEntity::CityGuide { slug } => data.editorial(EditorialKind::City, slug),
        PageEntity::StadiumGuide { slug } => data.editorial(EditorialKind::Stadium, slug),
        PageEntity::Article { slug, .. } => data.editorial(EditorialKind::Article, slug),
        _ => None,
    }
}

/// `articleSection` for the page: editorial label first, then the kind.
fn section_label(entity: &PageEntity, editorial: Option<&EditorialEntry>) -> Option<String> {
    if let Some(section) = editorial.and_then(|e| e.section.clone()) {
        return Some(section);
    }
    match entity {
        PageEntity::CityGuide { .. } => Some("Host Cities".into()),
        PageEntity::StadiumGuide { .. } => Some("Stadiums".into()),
        PageEntity::Article { section, .. } => Some(titleize(section)),
        _ => None,
    }
}

/// Collection members with absolute page and image URLs.
fn collection_items(base: &str, data: &SiteData, collection: CollectionKind) -> Vec<CollectionItem> {
    let root = collection.root();
    let absolute = |image: &Option<String>| {
        image.as_deref().map(|image| {
            if image.starts_with("http://") || image.starts_with("https://") {
                image.to_owned()
            } else {
                canonical_url(base, image)
            }
        })
    };

    match collection {
        CollectionKind::Cities => data
            .host_cities()
            .iter()
            .map(|city| CollectionItem {
                name: city.name.clone(),
                url: format!("{base}/{root}/{}", city.slug),
                image: absolute(&city.image),
            })
            .collect(),
        CollectionKind::Stadiums => data
            .stadiums()
            .iter()
            .map(|stadium| CollectionItem {
                name: stadium.name.clone(),
                url: format!("{base}/{root}/{}", stadium.slug),
                image: absolute(&stadium.image),
            })
            .collect(),
    }
}
