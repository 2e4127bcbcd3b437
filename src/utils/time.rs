//! Timestamp helpers
//!
//! All persisted timestamps are ISO-8601 in UTC with second precision.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current time as an ISO-8601 string (e.g. `2026-08-25T12:00:00Z`)
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an ISO-8601 timestamp previously produced by [`iso_now`]
pub fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_round_trip() {
        let now = iso_now();
        let parsed = parse_iso(&now).expect("iso_now output should parse");
        assert_eq!(parsed.to_rfc3339_opts(SecondsFormat::Secs, true), now);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso("not a timestamp").is_none());
    }
}
