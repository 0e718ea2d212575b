use chrono::NaiveDate;
use worklog::core::period::{Period, get_work_hours, period_range};

mod common;
use common::{add_record, records_conn};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn day_range_is_today_only() {
    let (start, end) = period_range(Period::Day, d(2024, 3, 15));
    assert_eq!(start, d(2024, 3, 15));
    assert_eq!(end, d(2024, 3, 15));
}

#[test]
fn week_range_is_monday_through_sunday() {
    // 2024-03-15 is a Friday
    let (start, end) = period_range(Period::Week, d(2024, 3, 15));
    assert_eq!(start, d(2024, 3, 11));
    assert_eq!(end, d(2024, 3, 17));
}

#[test]
fn week_range_anchored_on_a_monday_starts_that_day() {
    let (start, end) = period_range(Period::Week, d(2024, 3, 11));
    assert_eq!(start, d(2024, 3, 11));
    assert_eq!(end, d(2024, 3, 17));
}

#[test]
fn month_range_covers_whole_of_march() {
    let (start, end) = period_range(Period::Month, d(2024, 3, 15));
    assert_eq!(start, d(2024, 3, 1));
    assert_eq!(end, d(2024, 3, 31));
}

#[test]
fn february_in_a_leap_year_ends_on_day_29() {
    let (start, end) = period_range(Period::Month, d(2024, 2, 10));
    assert_eq!(start, d(2024, 2, 1));
    assert_eq!(end, d(2024, 2, 29));
}

#[test]
fn december_month_end_is_fixed_at_day_31() {
    let (start, end) = period_range(Period::Month, d(2024, 12, 10));
    assert_eq!(start, d(2024, 12, 1));
    assert_eq!(end, d(2024, 12, 31));
}

#[test]
fn unknown_period_yields_empty_result() {
    let conn = records_conn();
    add_record(&conn, 1, "2024-03-15", "09:00", "17:00");

    let rows = get_work_hours(&conn, "fortnight", 1, d(2024, 3, 15)).expect("aggregate");
    assert!(rows.is_empty());
}

#[test]
fn dates_with_time_component_display_as_dd_mm_yyyy() {
    let conn = records_conn();
    add_record(&conn, 1, "2024-03-05 00:00:00", "09:00", "17:00");

    let rows = get_work_hours(&conn, "month", 1, d(2024, 3, 15)).expect("aggregate");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, "05-03-2024");
}

#[test]
fn range_fetch_is_inclusive_and_scoped_to_user() {
    let conn = records_conn();
    add_record(&conn, 1, "2024-03-11", "09:00", "17:00"); // Monday, range start
    add_record(&conn, 1, "2024-03-17", "08:00", "16:00"); // Sunday, range end
    add_record(&conn, 1, "2024-03-18", "09:00", "17:00"); // following Monday
    add_record(&conn, 2, "2024-03-12", "09:00", "17:00"); // someone else's row

    let rows = get_work_hours(&conn, "week", 1, d(2024, 3, 15)).expect("aggregate");
    let dates: Vec<&str> = rows.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["11-03-2024", "17-03-2024"]);
}

#[test]
fn malformed_stored_dates_never_match_a_range() {
    let conn = records_conn();
    add_record(&conn, 1, "not-a-date", "09:00", "17:00");

    let rows = get_work_hours(&conn, "month", 1, d(2024, 3, 15)).expect("aggregate");
    assert!(rows.is_empty());
}
