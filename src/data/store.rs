//! Indexed, read-only lookup tables.
//!
//! `SiteData` is built once at startup (from the built-in dataset or a data
//! file) and then only borrowed. Rows keep their file order so that
//! collection pages and the sitemap list venues in editorial order.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::types::{DataFile, EditorialEntry, EditorialKind, HostCity, StadiumInfo};
use crate::config::ConfigError;

/// Stadium metadata, host-city list and editorial calendar.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    stadiums: Vec<StadiumInfo>,
    stadium_index: FxHashMap<String, usize>,
    host_cities: Vec<HostCity>,
    host_city_index: FxHashMap<String, usize>,
    editorial: FxHashMap<(EditorialKind, String), EditorialEntry>,
}

impl SiteData {
    /// Build indexed tables from rows.
    ///
    /// Duplicate slugs are a data error: a later row would silently shadow an
    /// earlier one in lookups but both would be listed in collections.
    pub fn new(
        stadiums: Vec<StadiumInfo>,
        host_cities: Vec<HostCity>,
        editorial: impl IntoIterator<Item = ((EditorialKind, String), EditorialEntry)>,
    ) -> Result<Self, ConfigError> {
        let stadium_index = index_by_slug(&stadiums, |s| &s.slug, "stadium")?;
        let host_city_index = index_by_slug(&host_cities, |c| &c.slug, "host city")?;

        let mut table = FxHashMap::default();
        for (key, entry) in editorial {
            if table.contains_key(&key) {
                return Err(ConfigError::Validation(format!(
                    "duplicate editorial entry for {:?} `{}`",
                    key.0, key.1
                )));
            }
            table.insert(key, entry);
        }

        Ok(Self {
            stadiums,
            stadium_index,
            host_cities,
            host_city_index,
            editorial: table,
        })
    }

    /// Parse tables from a TOML data file.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let file: DataFile = toml::from_str(content)?;
        Self::new(
            file.stadiums,
            file.host_cities,
            file.editorial.into_iter().map(|row| row.into_keyed()),
        )
    }

    /// Load tables from a TOML data file on disk.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    pub fn stadium(&self, slug: &str) -> Option<&StadiumInfo> {
        self.stadium_index.get(slug).map(|&i| &self.stadiums[i])
    }

    pub fn stadiums(&self) -> &[StadiumInfo] {
        &self.stadiums
    }

    pub fn host_city(&self, slug: &str) -> Option<&HostCity> {
        self.host_city_index.get(slug).map(|&i| &self.host_cities[i])
    }

    pub fn host_cities(&self) -> &[HostCity] {
        &self.host_cities
    }

    /// Editorial entry for `(kind, slug)`, if the calendar has one.
    pub fn editorial(&self, kind: EditorialKind, slug: &str) -> Option<&EditorialEntry> {
        // Borrowed lookup would need a custom key type; the tables are tiny
        self.editorial.get(&(kind, slug.to_owned()))
    }

    /// All editorial entries sorted by kind then slug.
    pub fn editorial_entries(&self) -> Vec<(EditorialKind, &str, &EditorialEntry)> {
        let mut entries: Vec<_> = self
            .editorial
            .iter()
            .map(|((kind, slug), entry)| (*kind, slug.as_str(), entry))
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries
    }
}

fn index_by_slug<T>(
    rows: &[T],
    slug: impl Fn(&T) -> &String,
    what: &str,
) -> Result<FxHashMap<String, usize>, ConfigError> {
    let mut index = FxHashMap::default();
    for (i, row) in rows.iter().enumerate() {
        if index.insert(slug(row).clone(), i).is_some() {
            return Err(ConfigError::Validation(format!(
                "duplicate {what} slug `{}`",
                slug(row)
            )));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [[stadiums]]
        slug = "sofi-stadium"
        name = "SoFi Stadium"
        city = "Inglewood, California, USA"
        capacity = 70240

        [[host_cities]]
        slug = "miami-city-guide"
        name = "Miami"
        image = "/images/cities/miami.webp"

        [[editorial]]
        kind = "city"
        slug = "miami-city-guide"
        date_published = "2025-03-01"
        keywords = ["Miami", "Hard Rock Stadium"]

        [[editorial]]
        kind = "article"
        slug = "getting-around-toronto"
        date_modified = "2025-06-10"
        keywords = []
        path = "/transportation/getting-around-toronto"
    "#;

    #[test]
    fn test_parse_data_file() {
        let data = SiteData::from_str(SAMPLE).unwrap();

        assert_eq!(data.stadiums().len(), 1);
        assert_eq!(data.stadium("sofi-stadium").unwrap().capacity, 70240);
        assert!(data.stadium("unknown").is_none());
        assert_eq!(data.host_city("miami-city-guide").unwrap().name, "Miami");

        let entry = data.editorial(EditorialKind::City, "miami-city-guide").unwrap();
        assert_eq!(entry.date_published.as_deref(), Some("2025-03-01"));
        assert_eq!(entry.keywords.as_ref().unwrap().len(), 2);
        assert!(data.editorial(EditorialKind::Stadium, "miami-city-guide").is_none());
    }

    #[test]
    fn test_empty_keywords_dropped() {
        let data = SiteData::from_str(SAMPLE).unwrap();
        let entry = data
            .editorial(EditorialKind::Article, "getting-around-toronto")
            .unwrap();
        assert!(entry.keywords.is_none());
        assert_eq!(entry.last_touched(), Some("2025-06-10"));
    }

    #[test]
    fn test_duplicate_stadium_slug_rejected() {
        let content = r#"
            [[stadiums]]
            slug = "bc-place"
            name = "BC Place"
            city = "Vancouver"
            capacity = 54500

            [[stadiums]]
            slug = "bc-place"
            name = "BC Place Vancouver"
            city = "Vancouver"
            capacity = 54500
        "#;
        let err = SiteData::from_str(content).unwrap_err();
        assert!(err.to_string().contains("bc-place"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let content = r#"
            [[host_cities]]
            slug = "boston-city-guide"
            name = "Boston"
            population = 650000
        "#;
        assert!(matches!(SiteData::from_str(content), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_editorial_entries_sorted() {
        let data = SiteData::from_str(SAMPLE).unwrap();
        let entries = data.editorial_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, EditorialKind::City);
        assert_eq!(entries[1].0, EditorialKind::Article);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let data = SiteData::from_path(file.path()).unwrap();
        assert_eq!(data.host_cities().len(), 1);
    }
}
