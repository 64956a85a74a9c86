//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> String {
        "https://stadiumport.com".into()
    }

    pub fn name() -> String {
        "Stadiumport".into()
    }

    pub fn description() -> String {
        "Independent World Cup 2026 travel guides for every host city and stadium.".into()
    }

    pub fn logo() -> Option<String> {
        Some("https://stadiumport.com/logo.png".into())
    }

    /// BCP 47 language code used for `inLanguage`.
    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [data] Section Defaults
// ============================================================================

pub mod data {
    use std::path::PathBuf;

    pub fn path() -> Option<PathBuf> {
        None
    }
}
