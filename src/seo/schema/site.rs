//! Site-wide graphs: WebSite, Organization, BreadcrumbList.

use serde::Serialize;

use super::{NodeRef, SCHEMA_CONTEXT, organization_id, website_id};
use crate::config::SiteSection;
use crate::utils::slug::breadcrumb_label;

// ============================================================================
// WebSite
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "inLanguage")]
    pub in_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub publisher: NodeRef,
    #[serde(rename = "potentialAction")]
    pub potential_action: SearchAction,
}

/// Sitelinks search box action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "urlTemplate")]
    pub url_template: String,
}

/// WebSite graph for the whole site. Identical on every page.
pub fn build_website(site: &SiteSection) -> WebSite {
    let base = site.url.trim_end_matches('/');
    WebSite {
        context: SCHEMA_CONTEXT,
        kind: "WebSite",
        id: website_id(base),
        name: site.name.clone(),
        url: format!("{base}/"),
        in_language: site.language.clone(),
        description: Some(site.description.clone()).filter(|d| !d.is_empty()),
        publisher: NodeRef::new(organization_id(base)),
        potential_action: SearchAction {
            kind: "SearchAction",
            target: EntryPoint {
                kind: "EntryPoint",
                url_template: format!("{base}/search?q={{search_term_string}}"),
            },
            query_input: "required name=search_term_string",
        },
    }
}

// ============================================================================
// Organization
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Organization graph for the publisher. Identical on every page.
pub fn build_organization(site: &SiteSection) -> Organization {
    let base = site.url.trim_end_matches('/');
    Organization {
        context: SCHEMA_CONTEXT,
        kind: "Organization",
        id: organization_id(base),
        name: site.name.clone(),
        url: format!("{base}/"),
        logo: site.logo.clone().filter(|l| !l.is_empty()),
        same_as: site.same_as.clone(),
    }
}

// ============================================================================
// BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub items: Vec<BreadcrumbItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// One crumb per path prefix, starting with "Home" at the site root.
///
/// `segments` are raw (possibly percent-encoded) path segments; they are
/// re-joined verbatim for `item` and decoded only for `name`.
pub fn build_breadcrumb<S: AsRef<str>>(site_url: &str, segments: &[S]) -> BreadcrumbList {
    let base = site_url.trim_end_matches('/');

    let mut items = Vec::with_capacity(segments.len() + 1);
    items.push(BreadcrumbItem {
        kind: "ListItem",
        position: 1,
        name: "Home".into(),
        item: base.to_owned(),
    });

    let mut prefix = base.to_owned();
    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        prefix.push('/');
        prefix.push_str(segment);
        items.push(BreadcrumbItem {
            kind: "ListItem",
            position: i + 2,
            name: breadcrumb_label(segment),
            item: prefix.clone(),
        });
    }

    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        items,
    }
}
