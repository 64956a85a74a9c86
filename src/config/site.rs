//! `[site]` section configuration.
//!
//! Identity fields shared by the WebSite and Organization graphs and by
//! every absolute URL the crate produces.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in stadiumport.toml.
///
/// # Example
/// ```toml
/// [site]
/// url = "https://stadiumport.com"
/// name = "Stadiumport"
/// logo = "https://stadiumport.com/logo.png"
/// same_as = ["https://x.com/stadiumport"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Deployed origin. A trailing slash is tolerated and stripped on use.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Publisher name for WebSite/Organization graphs.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Absolute logo URL for the Organization graph.
    #[serde(default = "defaults::site::logo")]
    #[educe(Default = defaults::site::logo())]
    pub logo: Option<String>,

    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Social profile URLs (`sameAs`).
    #[serde(default)]
    pub same_as: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_section_full() {
        let config = r#"
            [site]
            url = "https://staging.stadiumport.com/"
            name = "Stadiumport Staging"
            description = "Preview"
            logo = "https://staging.stadiumport.com/logo.svg"
            language = "en-GB"
            same_as = ["https://x.com/stadiumport", "https://instagram.com/stadiumport"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.url, "https://staging.stadiumport.com/");
        assert_eq!(config.site.name, "Stadiumport Staging");
        assert_eq!(config.site.language, "en-GB");
        assert_eq!(config.site.same_as.len(), 2);
        assert_eq!(
            config.site.logo.as_deref(),
            Some("https://staging.stadiumport.com/logo.svg")
        );
    }

    #[test]
    fn test_site_section_defaults() {
        let config: SiteConfig = toml::from_str("[site]\n").unwrap();

        assert_eq!(config.site.url, "https://stadiumport.com");
        assert_eq!(config.site.name, "Stadiumport");
        assert!(config.site.same_as.is_empty());
        assert!(config.site.logo.is_some());
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            name = "Test"
            twitter = "@stadiumport"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
