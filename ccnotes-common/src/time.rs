//! Timestamp utilities

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Date format accepted and displayed for note dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Today's calendar date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // After 2000-01-01 00:00:00 UTC
        assert!(timestamp.timestamp() > 946_684_800);
    }

    #[tokio::test]
    async fn test_now_successive_calls_advance() {
        let time1 = now();
        tokio::time::sleep(Duration::from_millis(10)).await;
        let time2 = now();
        assert!(time2 > time1);
    }

    #[test]
    fn test_parse_date_accepts_iso_format() {
        let date = parse_date("2017-03-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 3, 5).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("05/03/2017").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2017-02-30").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_format_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(date), "2024-12-01");
        assert_eq!(parse_date(&format_date(date)), Some(date));
    }

    #[test]
    fn test_today_formats_as_date() {
        assert_eq!(format_date(today()).len(), 10);
    }
}
