/// Utilities for date and time formatting
///
/// Provides consistent date/time presentation across the application
/// (Brazilian dd/mm/yyyy).
use chrono::{Duration, NaiveDate, Utc};

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2025-01-10" or "2025-01-10T14:02:26Z" -> "10/01/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2025-01-10T14:02:26.123Z" -> "10/01/2025 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time = time_part.split('.').next().unwrap_or(time_part);
        let time = time.trim_end_matches('Z');
        let hhmm: String = time.splitn(3, ':').take(2).collect::<Vec<_>>().join(":");
        return format!("{} {}", format_date(date_part), hhmm);
    }
    format_date(datetime_str)
}

/// Default expected delivery date for a fresh draft: one week out, as the
/// yyyy-mm-dd string date inputs expect.
pub fn default_delivery_date(today: NaiveDate) -> String {
    (today + Duration::days(7)).format("%Y-%m-%d").to_string()
}

/// Today's date as yyyy-mm-dd (for the date input `min` bound).
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-10"), "10/01/2025");
        assert_eq!(format_date("2025-01-10T14:02:26.123Z"), "10/01/2025");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-01-10T14:02:26.123Z"), "10/01/2025 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_default_delivery_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(default_delivery_date(today), "2025-01-10");

        // Crosses the year boundary.
        let late = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        assert_eq!(default_delivery_date(late), "2025-01-04");
    }
}
