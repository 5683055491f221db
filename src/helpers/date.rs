//! Date parsing and formatting helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO-like date string in any of the accepted formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d",
        "%Y/%m/%d",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
        // Try parsing date only
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    None
}

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2025-03-03"
/// ```
pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert a Moment.js format string to a chrono one
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date_string("2025-03-03").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-03-03 00:00:00");
    }

    #[test]
    fn test_parse_datetime_variants() {
        assert!(parse_date_string("2024-01-15 10:30:00").is_some());
        assert!(parse_date_string("2024/01/15 10:30:00").is_some());
        assert!(parse_date_string("2024-01-15T10:30:00").is_some());
        assert!(parse_date_string(" 2024/01/15 ").is_some());
    }

    #[test]
    fn test_parse_rfc3339() {
        assert!(parse_date_string("2025-03-04T10:00:00+02:00").is_some());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_date_string("not a date").is_none());
        assert!(parse_date_string("").is_none());
    }

    #[test]
    fn test_format_date() {
        let dt = parse_date_string("2025-03-03 10:30:00").unwrap();
        assert_eq!(format_date(&dt, "YYYY-MM-DD"), "2025-03-03");
        assert_eq!(format_date(&dt, "MMMM DD, YYYY"), "March 03, 2025");
        assert_eq!(format_date(&dt, "YYYY/MM/DD HH:mm"), "2025/03/03 10:30");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
    }
}
