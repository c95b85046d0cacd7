//! Deadline points in time

use chrono::{NaiveDate, NaiveDateTime};

/// Format for a bare date, e.g. `2024-12-01`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for a date with a 24h time, e.g. `2024-12-01 1800`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// When a deadline is due
///
/// Input that doesn't match a known format is kept verbatim, so
/// `deadline pay rent /by end of month` still works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Due {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl Due {
    /// Interpret user (or stored) text as a due point
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
            return Self::DateTime(date_time);
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Self::Date(date);
        }

        Self::Text(raw.to_string())
    }
}

impl std::fmt::Display for Due {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::DateTime(date_time) => write!(f, "{}", date_time.format(DATE_TIME_FORMAT)),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let due = Due::parse("2024-12-01");
        assert_eq!(due, Due::Date(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
        assert_eq!(due.to_string(), "2024-12-01");
    }

    #[test]
    fn test_parse_date_time() {
        let due = Due::parse("2024-12-01 1800");
        let expected = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(due, Due::DateTime(expected));
        assert_eq!(due.to_string(), "2024-12-01 1800");
    }

    #[test]
    fn test_parse_falls_back_to_text() {
        let due = Due::parse("  sunday night ");
        assert_eq!(due, Due::Text("sunday night".to_string()));
        assert_eq!(due.to_string(), "sunday night");

        // Impossible dates stay as text too
        assert_eq!(Due::parse("2024-02-30"), Due::Text("2024-02-30".to_string()));
    }

    #[test]
    fn test_display_reparses_to_same_value() {
        for raw in ["2023-01-09", "2023-01-09 0730", "after lunch"] {
            let due = Due::parse(raw);
            assert_eq!(Due::parse(&due.to_string()), due);
        }
    }
}
