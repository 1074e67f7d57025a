/// Utilities for date and time formatting
///
/// Provides consistent timestamp formatting for list columns.
use chrono::{DateTime, Utc};

/// Format a wire timestamp for table cells.
/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02"
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Like [`format_timestamp`], with "-" for records that have no timestamp.
pub fn format_optional_timestamp(dt: &Option<DateTime<Utc>>) -> String {
    dt.as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_format_optional_timestamp() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_optional_timestamp(&Some(dt)), "2024-12-31 23:59");
        assert_eq!(format_optional_timestamp(&None), "-");
    }
}
