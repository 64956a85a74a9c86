//! Sitemap generation.
//!
//! Lists every route the lookup tables know about, so crawlers reach the
//! same canonical URLs the head pass writes.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://stadiumport.com/world-cup-2026-host-cities/miami-city-guide</loc>
//!     <lastmod>2025-09-02</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    data::{EditorialKind, SiteData},
    log,
    seo::{reconcile::canonical_url, route::CollectionKind},
    utils::{
        date::ymd,
        xml::{create_xml_writer, into_string, write_text_element},
    },
};
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Write the sitemap to `output`, or to stdout when `None`.
pub fn write_sitemap(site_url: &str, data: &SiteData, output: Option<&Path>) -> Result<()> {
    let sitemap = Sitemap::from_data(site_url, data);
    let count = sitemap.urls.len();
    let xml = sitemap.into_xml()?;

    match output {
        Some(path) => {
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            log!("sitemap"; "{count} urls -> {}", path.display());
        }
        None => {
            stdout()
                .lock()
                .write_all(xml.as_bytes())
                .context("Failed to write sitemap to stdout")?;
        }
    }
    Ok(())
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    lastmod: Option<String>,
}

impl Sitemap {
    /// Collect home, collection indexes, every guide and every routable article.
    fn from_data(site_url: &str, data: &SiteData) -> Self {
        let lastmod = |kind, slug: &str| {
            data.editorial(kind, slug)
                .and_then(|entry| entry.last_touched())
                .and_then(ymd)
        };
        let entry = |pathname: &str, lastmod: Option<String>| UrlEntry {
            loc: canonical_url(site_url, pathname),
            lastmod,
        };

        let cities = CollectionKind::Cities.root();
        let stadiums = CollectionKind::Stadiums.root();

        let mut urls = vec![
            entry("/", None),
            entry(&format!("/{cities}"), None),
            entry(&format!("/{stadiums}"), None),
        ];
        urls.extend(data.host_cities().iter().map(|city| {
            entry(
                &format!("/{cities}/{}", city.slug),
                lastmod(EditorialKind::City, &city.slug),
            )
        }));
        urls.extend(data.stadiums().iter().map(|stadium| {
            entry(
                &format!("/{stadiums}/{}", stadium.slug),
                lastmod(EditorialKind::Stadium, &stadium.slug),
            )
        }));
        // Articles have no table of their own; only entries with a path are routable
        urls.extend(
            data.editorial_entries()
                .into_iter()
                .filter(|(kind, _, _)| *kind == EditorialKind::Article)
                .filter_map(|(_, _, article)| {
                    let path = article.path.as_deref()?;
                    Some(entry(path, article.last_touched().and_then(ymd)))
                }),
        );

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> Result<String> {
        let mut writer = create_xml_writer();
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for entry in self.urls {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            if let Some(lastmod) = entry.lastmod {
                write_text_element(&mut writer, "lastmod", &lastmod)?;
            }
            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;
        let mut xml = into_string(writer)?;
        xml.push('\n');
        Ok(xml)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StadiumInfo;

    const BASE: &str = "https://stadiumport.com";

    #[test]
    fn test_loc_is_escaped() {
        let stadium = StadiumInfo {
            slug: "r&d-arena".into(),
            name: "R&D Arena".into(),
            city: "Springfield".into(),
            capacity: 1000,
            image: None,
        };
        let data = SiteData::new(vec![stadium], Vec::new(), std::iter::empty()).unwrap();
        let xml = Sitemap::from_data(BASE, &data).into_xml().unwrap();

        assert!(xml.contains("<loc>https://stadiumport.com/world-cup-2026-stadiums/r&amp;d-arena</loc>"));
        assert!(!xml.contains("r&d-arena"));
    }

    #[test]
    fn test_empty_tables() {
        let data = SiteData::new(Vec::new(), Vec::new(), std::iter::empty()).unwrap();
        let xml = Sitemap::from_data(BASE, &data).into_xml().unwrap();
        // Home and both collection indexes are always listed
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_builtin_routes() {
        let data = SiteData::builtin();
        let sitemap = Sitemap::from_data(BASE, &data);

        // home + 2 indexes + 16 cities + 16 stadiums + 3 articles
        assert_eq!(sitemap.urls.len(), 3 + 16 + 16 + 3);
        assert_eq!(sitemap.urls[0].loc, "https://stadiumport.com/");
        assert_eq!(sitemap.urls[1].loc, "https://stadiumport.com/world-cup-2026-host-cities");
    }

    #[test]
    fn test_lastmod_from_editorial() {
        let data = SiteData::builtin();
        let xml = Sitemap::from_data(BASE, &data).into_xml().unwrap();

        assert!(xml.contains(
            "    <loc>https://stadiumport.com/world-cup-2026-host-cities/miami-city-guide</loc>\n    <lastmod>2025-09-02</lastmod>"
        ));
        // Falls back to the publish date
        assert!(xml.contains(
            "    <loc>https://stadiumport.com/world-cup-2026-host-cities/toronto-city-guide</loc>\n    <lastmod>2025-02-17</lastmod>"
        ));
        assert!(xml.contains(
            "    <loc>https://stadiumport.com/transportation/world-cup-2026-transportation-guide</loc>\n    <lastmod>2025-09-15</lastmod>"
        ));
        // No editorial entry, no lastmod
        assert!(xml.contains(
            "    <loc>https://stadiumport.com/world-cup-2026-host-cities/boston-city-guide</loc>\n  </url>"
        ));
    }

    #[test]
    fn test_trailing_slash_site_url() {
        let data = SiteData::builtin();
        let sitemap = Sitemap::from_data("https://stadiumport.com/", &data);
        assert!(sitemap.urls.iter().all(|u| !u.loc.contains(".com//")));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let data = SiteData::builtin();
        let xml = Sitemap::from_data(BASE, &data).into_xml().unwrap();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
        assert_eq!(xml.matches("<url>").count(), xml.matches("</url>").count());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        write_sitemap(BASE, &SiteData::builtin(), Some(&path)).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains("<loc>https://stadiumport.com/world-cup-2026-stadiums/sofi-stadium</loc>"));
    }
}
