//! Date helpers: parsing stored dates, display formatting, week bounds.

use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date as stored in the records database.
/// Stored values are either "YYYY-MM-DD" or "YYYY-MM-DD HH:MM:SS"; only the
/// date part is significant.
pub fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.split_whitespace().next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format a date in the display form used by every rendered table.
pub fn format_display(d: NaiveDate) -> String {
    d.format("%d-%m-%Y").to_string()
}

/// Parse a display-form date ("DD-MM-YYYY") back into a calendar date.
pub fn parse_display(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
}

/// Monday-start week containing `today`, as an inclusive [start, end] pair.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    (start, start + Duration::days(6))
}
