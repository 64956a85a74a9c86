//! Per-page graphs: Article, WebPage (speakable / date tracking),
//! StadiumOrArena.

use serde::Serialize;

use super::{NodeRef, SCHEMA_CONTEXT};
use crate::data::EditorialEntry;
use crate::seo::route::StadiumProfile;

/// City guides are written in US English regardless of site language.
const CITY_GUIDE_LANGUAGE: &str = "en-US";
const CITY_GUIDE_SECTION: &str = "Host Cities";

/// CSS selectors voice assistants should read on a guide page.
pub const SPEAKABLE_SELECTORS: &[&str] = &[".hero-title", ".guide-content p"];

/// Title, description and canonical URL of the page being described.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub title: String,
    pub description: String,
    pub url: String,
}

// ============================================================================
// Article
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub main_entity_of_page: NodeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    pub date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<NodeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<NodeRef>,
}

/// General-purpose Article graph used for date tracking on every page kind.
///
/// `keywords` are joined with `", "`; an empty list is treated as absent.
pub fn build_article(
    headline: &str,
    url: &str,
    date_modified: &str,
    date_published: Option<&str>,
    keywords: Option<&[String]>,
    section: Option<&str>,
) -> Article {
    Article {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline: headline.to_owned(),
        description: None,
        url: url.to_owned(),
        main_entity_of_page: NodeRef::new(url),
        date_published: date_published.map(str::to_owned),
        date_modified: date_modified.to_owned(),
        in_language: None,
        keywords: keywords.filter(|k| !k.is_empty()).map(|k| k.join(", ")),
        article_section: section.map(str::to_owned),
        author: None,
        publisher: None,
    }
}

// ============================================================================
// City Guide
// ============================================================================

/// Graphs emitted for a city guide page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGuideGraphs {
    pub article: Article,
    pub speakable: WebPage,
}

/// Article graph for a host-city guide plus its speakable sibling.
///
/// `datePublished` and `keywords` come from the editorial entry and are
/// omitted when it has none; `dateModified` is the instant of the pass.
pub fn build_city_guide(
    params: &PageParams,
    editorial: Option<&EditorialEntry>,
    organization: &NodeRef,
    date_modified: &str,
) -> CityGuideGraphs {
    let mut article = build_article(
        &params.title,
        &params.url,
        date_modified,
        editorial.and_then(|e| e.date_published.as_deref()),
        editorial.and_then(|e| e.keywords.as_deref()),
        Some(CITY_GUIDE_SECTION),
    );
    article.description = Some(params.description.clone()).filter(|d| !d.is_empty());
    article.in_language = Some(CITY_GUIDE_LANGUAGE.into());
    article.author = Some(organization.clone());
    article.publisher = Some(organization.clone());

    CityGuideGraphs {
        article,
        speakable: build_speakable(&params.title, &params.url),
    }
}

// ============================================================================
// WebPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakable: Option<SpeakableSpecification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakableSpecification {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub css_selector: Vec<&'static str>,
}

/// WebPage graph naming the hero title and body paragraphs as speakable.
pub fn build_speakable(name: &str, url: &str) -> WebPage {
    WebPage {
        context: SCHEMA_CONTEXT,
        kind: "WebPage",
        name: Some(name.to_owned()),
        url: url.to_owned(),
        date_modified: None,
        speakable: Some(SpeakableSpecification {
            kind: "SpeakableSpecification",
            css_selector: SPEAKABLE_SELECTORS.to_vec(),
        }),
    }
}

/// Minimal WebPage graph carrying only the page's `dateModified`.
pub fn build_web_page_date(name: &str, url: &str, date_modified: &str) -> WebPage {
    WebPage {
        context: SCHEMA_CONTEXT,
        kind: "WebPage",
        name: Some(name.to_owned()),
        url: url.to_owned(),
        date_modified: Some(date_modified.to_owned()),
        speakable: None,
    }
}

// ============================================================================
// StadiumOrArena
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StadiumOrArena {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_attendee_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
}

/// StadiumOrArena graph. Capacity and address appear only for table matches.
pub fn build_stadium(profile: &StadiumProfile, url: Option<&str>) -> StadiumOrArena {
    StadiumOrArena {
        context: SCHEMA_CONTEXT,
        kind: "StadiumOrArena",
        name: profile.name.clone(),
        url: url.map(str::to_owned),
        maximum_attendee_capacity: profile.capacity,
        address: profile.locality.clone().map(|locality| PostalAddress {
            kind: "PostalAddress",
            address_locality: locality,
        }),
    }
}
