//! Timestamp formatting for `dateModified` and sitemap `lastmod`.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// ISO 8601 UTC with millisecond precision: `2026-06-11T18:00:00.000Z`.
pub fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Extract a `YYYY-MM-DD` date from an ISO date or datetime string.
///
/// Returns `None` for anything that does not start with a valid calendar
/// date, so malformed editorial data is dropped rather than emitted.
pub fn ymd(date: &str) -> Option<String> {
    let prefix = date.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_millis() {
        let t = Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap();
        assert_eq!(iso_timestamp(t), "2026-06-11T18:00:00.000Z");
    }

    #[test]
    fn test_iso_timestamps_sort_lexically() {
        let a = iso_timestamp(Utc.with_ymd_and_hms(2026, 6, 11, 9, 59, 59).unwrap());
        let b = iso_timestamp(Utc.with_ymd_and_hms(2026, 6, 11, 10, 0, 0).unwrap());
        assert!(a < b);
    }

    #[test]
    fn test_ymd() {
        assert_eq!(ymd("2025-01-14"), Some("2025-01-14".into()));
        assert_eq!(ymd("2025-09-15T08:30:00Z"), Some("2025-09-15".into()));
        assert_eq!(ymd("2025-02-30"), None);
        assert_eq!(ymd("soon"), None);
        assert_eq!(ymd(""), None);
    }
}
