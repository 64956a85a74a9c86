//! Built-in World Cup 2026 dataset.
//!
//! Used when no `[data].path` is configured.

use super::store::SiteData;
use super::types::{EditorialEntry, EditorialKind, HostCity, StadiumInfo};

/// (slug, name, locality, capacity)
const STADIUMS: &[(&str, &str, &str, u32)] = &[
    ("metlife-stadium", "MetLife Stadium", "East Rutherford, New Jersey, USA", 82500),
    ("att-stadium", "AT&T Stadium", "Arlington, Texas, USA", 80000),
    ("arrowhead-stadium", "Arrowhead Stadium", "Kansas City, Missouri, USA", 76416),
    ("nrg-stadium", "NRG Stadium", "Houston, Texas, USA", 72220),
    ("mercedes-benz-stadium", "Mercedes-Benz Stadium", "Atlanta, Georgia, USA", 71000),
    ("sofi-stadium", "SoFi Stadium", "Inglewood, California, USA", 70240),
    ("lincoln-financial-field", "Lincoln Financial Field", "Philadelphia, Pennsylvania, USA", 69796),
    ("lumen-field", "Lumen Field", "Seattle, Washington, USA", 68740),
    ("levis-stadium", "Levi's Stadium", "Santa Clara, California, USA", 68500),
    ("gillette-stadium", "Gillette Stadium", "Foxborough, Massachusetts, USA", 65878),
    ("hard-rock-stadium", "Hard Rock Stadium", "Miami Gardens, Florida, USA", 64767),
    ("estadio-azteca", "Estadio Azteca", "Mexico City, Mexico", 87523),
    ("estadio-bbva", "Estadio BBVA", "Guadalupe, Nuevo León, Mexico", 53500),
    ("estadio-akron", "Estadio Akron", "Zapopan, Jalisco, Mexico", 48071),
    ("bc-place", "BC Place", "Vancouver, British Columbia, Canada", 54500),
    ("bmo-field", "BMO Field", "Toronto, Ontario, Canada", 45736),
];

/// (slug, city name)
const HOST_CITIES: &[(&str, &str)] = &[
    ("new-york-new-jersey-city-guide", "New York New Jersey"),
    ("dallas-city-guide", "Dallas"),
    ("kansas-city-city-guide", "Kansas City"),
    ("houston-city-guide", "Houston"),
    ("atlanta-city-guide", "Atlanta"),
    ("los-angeles-city-guide", "Los Angeles"),
    ("philadelphia-city-guide", "Philadelphia"),
    ("seattle-city-guide", "Seattle"),
    ("san-francisco-bay-area-city-guide", "San Francisco Bay Area"),
    ("boston-city-guide", "Boston"),
    ("miami-city-guide", "Miami"),
    ("mexico-city-city-guide", "Mexico City"),
    ("monterrey-city-guide", "Monterrey"),
    ("guadalajara-city-guide", "Guadalajara"),
    ("vancouver-city-guide", "Vancouver"),
    ("toronto-city-guide", "Toronto"),
];

/// (kind, slug, published, modified, keywords, path)
type EditorialLiteral = (
    EditorialKind,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    &'static [&'static str],
    Option<&'static str>,
);

const EDITORIAL: &[EditorialLiteral] = &[
    (
        EditorialKind::City,
        "miami-city-guide",
        Some("2025-01-14"),
        Some("2025-09-02"),
        &["Miami World Cup 2026", "Hard Rock Stadium", "Miami Gardens travel"],
        None,
    ),
    (
        EditorialKind::City,
        "los-angeles-city-guide",
        Some("2025-01-21"),
        Some("2025-08-27"),
        &["Los Angeles World Cup 2026", "SoFi Stadium", "Inglewood"],
        None,
    ),
    (
        EditorialKind::City,
        "new-york-new-jersey-city-guide",
        Some("2025-02-03"),
        None,
        &["World Cup 2026 final", "MetLife Stadium"],
        None,
    ),
    (
        EditorialKind::City,
        "toronto-city-guide",
        Some("2025-02-17"),
        None,
        &[],
        None,
    ),
    (
        EditorialKind::Stadium,
        "sofi-stadium",
        Some("2025-03-04"),
        Some("2025-07-30"),
        &["SoFi Stadium seating", "Inglewood"],
        None,
    ),
    (
        EditorialKind::Article,
        "world-cup-2026-transportation-guide",
        Some("2025-04-08"),
        Some("2025-09-15"),
        &["World Cup 2026 transportation", "host city transit"],
        Some("/transportation/world-cup-2026-transportation-guide"),
    ),
    (
        EditorialKind::Article,
        "world-cup-2026-budget-guide",
        Some("2025-04-22"),
        None,
        &["World Cup 2026 on a budget"],
        Some("/budget-guides/world-cup-2026-budget-guide"),
    ),
    (
        EditorialKind::Article,
        "world-cup-2026-safety-guide",
        Some("2025-05-06"),
        Some("2025-08-11"),
        &[],
        Some("/safety-guide/world-cup-2026-safety-guide"),
    ),
];

/// Strip the `-city-guide` suffix to get the image stem for a city.
fn city_stem(slug: &str) -> &str {
    slug.strip_suffix("-city-guide").unwrap_or(slug)
}

impl SiteData {
    /// The dataset shipped with the binary.
    pub fn builtin() -> Self {
        let stadiums = STADIUMS
            .iter()
            .map(|&(slug, name, city, capacity)| StadiumInfo {
                slug: slug.into(),
                name: name.into(),
                city: city.into(),
                capacity,
                image: Some(format!("/images/stadiums/{slug}.webp")),
            })
            .collect();

        let host_cities = HOST_CITIES
            .iter()
            .map(|&(slug, name)| HostCity {
                slug: slug.into(),
                name: name.into(),
                image: Some(format!("/images/cities/{}.webp", city_stem(slug))),
            })
            .collect();

        let editorial = EDITORIAL
            .iter()
            .map(|&(kind, slug, published, modified, keywords, path)| {
                let entry = EditorialEntry {
                    date_published: published.map(Into::into),
                    date_modified: modified.map(Into::into),
                    keywords: (!keywords.is_empty())
                        .then(|| keywords.iter().map(|k| (*k).to_owned()).collect()),
                    section: None,
                    path: path.map(Into::into),
                };
                ((kind, slug.to_owned()), entry)
            });

        // Literal tables are checked by `test_builtin_is_consistent`
        Self::new(stadiums, host_cities, editorial).unwrap_or_default()
    }
}
