//! schema.org JSON-LD graph builders.
//!
//! Every builder is a pure function returning a typed, serializable graph.
//! Optional fields are `Option`/empty and skipped during serialization, so a
//! missing lookup never shows up as `null` in the output.
//!
//! Timestamps are passed in by the caller instead of read from a clock,
//! which keeps builders deterministic; the navigator supplies the current
//! instant for `dateModified`.
//!
//! # Builders
//!
//! | Builder | `@type` |
//! |---------|---------|
//! | [`build_website`] | `WebSite` |
//! | [`build_organization`] | `Organization` |
//! | [`build_breadcrumb`] | `BreadcrumbList` |
//! | [`build_city_guide`] | `Article` + speakable `WebPage` |
//! | `build_speakable` | `WebPage` with `SpeakableSpecification` |
//! | [`build_article`] | `Article` |
//! | [`build_web_page_date`] | `WebPage` |
//! | [`build_stadium`] | `StadiumOrArena` |
//! | [`build_collection_page`] | `CollectionPage` |
//! | [`build_item_list`] | `ItemList` |

mod collection;
mod page;
mod site;

pub use collection::{
    CollectionItem, CollectionPage, ItemList, build_collection_page, build_item_list,
};
pub use page::{
    Article, PageParams, StadiumOrArena, WebPage, build_article, build_city_guide, build_stadium,
    build_web_page_date,
};
pub use site::{BreadcrumbList, Organization, WebSite, build_breadcrumb, build_organization, build_website};

use serde::Serialize;

/// Value of every graph's `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Reference to a node defined in another graph: `{"@id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    #[serde(rename = "@id")]
    pub id: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// `@id` of the site-wide Organization node.
pub fn organization_id(base_url: &str) -> String {
    format!("{base_url}/#organization")
}

/// `@id` of the site-wide WebSite node.
pub fn website_id(base_url: &str) -> String {
    format!("{base_url}/#website")
}

/// Any graph the pass can emit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaGraph {
    WebSite(WebSite),
    Organization(Organization),
    Breadcrumb(BreadcrumbList),
    Article(Article),
    WebPage(WebPage),
    Stadium(StadiumOrArena),
    CollectionPage(CollectionPage),
    ItemList(ItemList),
}

macro_rules! impl_from_graph {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SchemaGraph {
                fn from(graph: $ty) -> Self {
                    Self::$variant(graph)
                }
            }
        )*
    };
}

impl_from_graph! {
    WebSite => WebSite,
    Organization => Organization,
    Breadcrumb => BreadcrumbList,
    Article => Article,
    WebPage => WebPage,
    Stadium => StadiumOrArena,
    CollectionPage => CollectionPage,
    ItemList => ItemList,
}
