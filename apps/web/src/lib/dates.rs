//! Timestamp formatting for the management tables. API timestamps arrive as
//! RFC 3339 strings (with or without an offset); unparseable values are shown
//! as-is rather than hidden.

use chrono::{DateTime, NaiveDateTime};

/// Formats an API timestamp as `YYYY-MM-DD - HH:MM:SS` for the log table.
pub fn format_log_timestamp(value: &str) -> String {
    parse(value)
        .map(|timestamp| timestamp.format("%Y-%m-%d - %H:%M:%S").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Formats an API timestamp as `MM/DD/YYYY` for table date columns.
pub fn format_table_date(value: &str) -> String {
    parse(value)
        .map(|timestamp| timestamp.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

fn parse(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_log_timestamps() {
        assert_eq!(
            format_log_timestamp("2025-03-04T09:05:06Z"),
            "2025-03-04 - 09:05:06"
        );
        assert_eq!(
            format_log_timestamp("2025-03-04 09:05:06"),
            "2025-03-04 - 09:05:06"
        );
    }

    #[test]
    fn formats_table_dates() {
        assert_eq!(format_table_date("2025-03-04T09:05:06Z"), "03/04/2025");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_log_timestamp("n/a"), "n/a");
        assert_eq!(format_table_date(""), "");
    }
}
