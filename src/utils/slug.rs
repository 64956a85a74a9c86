//! Path segment and slug utilities.
//!
//! Converts between URL paths, path segments and human-readable labels.

use std::borrow::Cow;

// ============================================================================
// Path Handling
// ============================================================================

/// Normalize a router pathname.
///
/// Strips any query string or fragment and guarantees a leading `/`.
/// Everything else (including a trailing slash) is kept as navigated.
///
/// | Input | Output |
/// |-------|--------|
/// | `""` | `/` |
/// | `world-cup-2026-stadiums` | `/world-cup-2026-stadiums` |
/// | `/guides/x?ref=nav#top` | `/guides/x` |
pub fn normalize_pathname(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Split a pathname into its non-empty segments.
pub fn path_segments(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Percent-decode a segment, keeping the raw text if it is not valid UTF-8.
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

// ============================================================================
// Labels
// ============================================================================

/// Breadcrumb label for a segment: decoded, dashes to spaces, first letter
/// capitalized, rest untouched.
///
/// `world-cup-2026-host-cities` → `World cup 2026 host cities`
pub fn breadcrumb_label(segment: &str) -> String {
    capitalize_first(&decode_segment(segment).replace('-', " "))
}

/// Title-case every dash-separated word of a slug.
///
/// `sofi-stadium` → `Sofi Stadium`
pub fn titleize(slug: &str) -> String {
    decode_segment(slug)
        .split(['-', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pathname() {
        assert_eq!(normalize_pathname(""), "/");
        assert_eq!(normalize_pathname("/"), "/");
        assert_eq!(normalize_pathname("guides"), "/guides");
        assert_eq!(normalize_pathname("/guides/x?ref=nav#top"), "/guides/x");
        assert_eq!(normalize_pathname("/guides/x#top?y"), "/guides/x");
        assert_eq!(normalize_pathname("/world-cup-2026-stadiums/"), "/world-cup-2026-stadiums/");
    }

    #[test]
    fn test_path_segments_skips_empty() {
        assert_eq!(path_segments("/"), Vec::<&str>::new());
        assert_eq!(path_segments("//a///b/"), vec!["a", "b"]);
    }

    #[test]
    fn test_breadcrumb_label() {
        assert_eq!(breadcrumb_label("world-cup-2026-host-cities"), "World cup 2026 host cities");
        assert_eq!(breadcrumb_label("miami-city-guide"), "Miami city guide");
        assert_eq!(breadcrumb_label("group-b"), "Group b");
    }

    #[test]
    fn test_breadcrumb_label_decodes() {
        assert_eq!(breadcrumb_label("le%C3%B3n-guide"), "León guide");
        assert_eq!(breadcrumb_label("%C3%A9t%C3%A9"), "Été");
    }

    #[test]
    fn test_breadcrumb_label_invalid_escape_kept() {
        // %FF alone is not valid UTF-8
        assert_eq!(breadcrumb_label("bad%FF"), "Bad%FF");
    }

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("sofi-stadium"), "Sofi Stadium");
        assert_eq!(titleize("unknown-slug"), "Unknown Slug");
        assert_eq!(titleize("a--b"), "A B");
        assert_eq!(titleize(""), "");
    }
}
