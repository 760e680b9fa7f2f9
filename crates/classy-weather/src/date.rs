//! Weekday labels for forecast dates.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Abbreviated English weekday, e.g. "Mon".
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Weekday label for an ISO date string; `None` if it does not parse.
pub fn format_day(date: &str) -> Option<String> {
    parse_date(date).map(weekday_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weekdays() {
        assert_eq!(format_day("2024-01-01").as_deref(), Some("Mon"));
        assert_eq!(format_day("2024-02-29").as_deref(), Some("Thu"));
        assert_eq!(format_day("2026-10-18").as_deref(), Some("Sun"));
    }

    #[test]
    fn test_week_in_order() {
        let labels: Vec<String> = (1..=7)
            .map(|d| format_day(&format!("2024-01-0{}", d)).unwrap())
            .collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(format_day(""), None);
        assert_eq!(format_day("2024-02-30"), None);
        assert_eq!(format_day("01/02/2024"), None);
    }
}
