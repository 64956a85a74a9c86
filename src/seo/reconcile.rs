//! Metadata reconciliation: `<meta>` and `<link rel=canonical>` tags.
//!
//! Every tag is written with find-or-create, so any number of passes leaves
//! exactly one node per key.
//!
//! # Tags Written Each Pass
//!
//! | Tag | Value |
//! |-----|-------|
//! | `link[rel=canonical]` | canonical URL |
//! | `meta[property=og:url]` | canonical URL |
//! | `meta[name=twitter:url]` | canonical URL |
//! | `meta[property=og:updated_time]` | pass timestamp |
//! | `meta[property=article:modified_time]` | pass timestamp |
//! | `meta[name=last-modified]` | pass timestamp |

use super::head::{HeadTagStore, MetaAttr};

/// Keys written on every pass, with the attribute that selects them.
pub const URL_TAGS: &[(MetaAttr, &str)] = &[
    (MetaAttr::Property, "og:url"),
    (MetaAttr::Name, "twitter:url"),
];

pub const TIMESTAMP_TAGS: &[(MetaAttr, &str)] = &[
    (MetaAttr::Property, "og:updated_time"),
    (MetaAttr::Property, "article:modified_time"),
    (MetaAttr::Name, "last-modified"),
];

/// Build the canonical URL for a pathname.
///
/// Trailing slashes on `site_url` are stripped and the pathname is given a
/// leading slash, so the join always has exactly one `/`.
pub fn canonical_url(site_url: &str, pathname: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if pathname.starts_with('/') {
        format!("{base}{pathname}")
    } else {
        format!("{base}/{pathname}")
    }
}

/// Find-or-create `<meta {attr}="{key}">` and set its `content`.
pub fn ensure_meta<S: HeadTagStore + ?Sized>(store: &mut S, attr: MetaAttr, key: &str, value: &str) {
    if !store.has_meta(attr, key) {
        store.create_meta(attr, key);
    }
    store.set_meta_content(attr, key, value);
}

/// Find-or-create `<link rel="canonical">` and set its `href`.
pub fn ensure_canonical<S: HeadTagStore + ?Sized>(store: &mut S, href: &str) {
    if !store.has_link("canonical") {
        store.create_link("canonical");
    }
    store.set_link_href("canonical", href);
}

/// Write the canonical, URL and timestamp tags for one pass.
pub fn reconcile_meta<S: HeadTagStore + ?Sized>(store: &mut S, full_url: &str, stamp: &str) {
    ensure_canonical(store, full_url);
    for &(attr, key) in URL_TAGS {
        ensure_meta(store, attr, key, full_url);
    }
    for &(attr, key) in TIMESTAMP_TAGS {
        ensure_meta(store, attr, key, stamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::head::{HeadNode, MemoryHead};

    #[test]
    fn test_canonical_url_trailing_slash() {
        assert_eq!(
            canonical_url("https://stadiumport.com/", "/world-cup-2026-groups/group-b"),
            "https://stadiumport.com/world-cup-2026-groups/group-b"
        );
        assert_eq!(
            canonical_url("https://stadiumport.com", "/world-cup-2026-groups/group-b"),
            "https://stadiumport.com/world-cup-2026-groups/group-b"
        );
        assert_eq!(
            canonical_url("https://stadiumport.com///", "guides"),
            "https://stadiumport.com/guides"
        );
    }

    #[test]
    fn test_canonical_url_root() {
        assert_eq!(canonical_url("https://stadiumport.com/", "/"), "https://stadiumport.com/");
    }

    #[test]
    fn test_ensure_meta_is_idempotent() {
        let mut head = MemoryHead::new();
        for value in ["a", "b", "c"] {
            ensure_meta(&mut head, MetaAttr::Property, "og:url", value);
        }
        assert_eq!(head.count_meta(MetaAttr::Property, "og:url"), 1);
        assert_eq!(head.meta_content(MetaAttr::Property, "og:url"), Some("c"));
    }

    #[test]
    fn test_ensure_meta_updates_existing_static_tag() {
        let mut head = MemoryHead::with_nodes(vec![HeadNode::Meta {
            attr: MetaAttr::Name,
            key: "last-modified".into(),
            content: "2024-01-01".into(),
        }]);
        ensure_meta(&mut head, MetaAttr::Name, "last-modified", "2026-06-11");
        assert_eq!(head.nodes().len(), 1);
        assert_eq!(head.meta_content(MetaAttr::Name, "last-modified"), Some("2026-06-11"));
    }

    #[test]
    fn test_property_and_name_are_distinct_keys() {
        let mut head = MemoryHead::new();
        ensure_meta(&mut head, MetaAttr::Property, "x", "p");
        ensure_meta(&mut head, MetaAttr::Name, "x", "n");
        assert_eq!(head.nodes().len(), 2);
    }

    #[test]
    fn test_reconcile_meta_twice() {
        let mut head = MemoryHead::new();
        reconcile_meta(&mut head, "https://a.com/x", "2026-06-11T00:00:00.000Z");
        reconcile_meta(&mut head, "https://a.com/y", "2026-06-11T00:00:01.000Z");

        assert_eq!(head.count_links("canonical"), 1);
        assert_eq!(head.link_href("canonical"), Some("https://a.com/y"));
        for &(attr, key) in URL_TAGS.iter().chain(TIMESTAMP_TAGS) {
            assert_eq!(head.count_meta(attr, key), 1, "{key}");
        }
        assert_eq!(
            head.meta_content(MetaAttr::Property, "og:updated_time"),
            Some("2026-06-11T00:00:01.000Z")
        );
        assert_eq!(head.nodes().len(), 1 + URL_TAGS.len() + TIMESTAMP_TAGS.len());
    }
}
