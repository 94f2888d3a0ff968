//! Timestamp utilities

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Display style for show start times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

/// Render a start time for listing pages
pub fn format_start_time(value: &DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    value.format(pattern).to_string()
}

/// Naive layouts accepted from forms, interpreted as UTC
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a start time submitted by a client
///
/// Accepts RFC 3339 (any offset, normalized to UTC) or one of the naive
/// layouts in [`NAIVE_FORMATS`].
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::Validation("start_time is required".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::Validation(format!("start_time is not a valid timestamp: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_now_returns_recent_timestamp() {
        let timestamp = now();
        assert!(timestamp.timestamp() > 946_684_800); // 2000-01-01 00:00:00 UTC
        assert!(timestamp.timestamp() < 4_102_444_800); // 2100-01-01 00:00:00 UTC
    }

    #[test]
    fn test_parse_rfc3339_with_fraction() {
        let dt = parse_start_time("2019-05-21T21:30:00.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_offset_normalized() {
        let dt = parse_start_time("2019-05-21T23:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_layouts() {
        let expected = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();
        assert_eq!(parse_start_time("2035-04-01 20:00:00").unwrap(), expected);
        assert_eq!(parse_start_time("2035-04-01T20:00").unwrap(), expected);
        assert_eq!(parse_start_time(" 2035-04-01 20:00 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_start_time("next tuesday"), Err(Error::Validation(_))));
        assert!(matches!(parse_start_time("   "), Err(Error::Validation(_))));
    }

    #[test]
    fn test_format_medium_and_full() {
        let dt = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(format_start_time(&dt, DateFormat::Medium), "Tue 05, 21, 2019 9:30PM");
        assert_eq!(
            format_start_time(&dt, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }
}
