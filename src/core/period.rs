//! Period aggregation: translate a coarse period keyword into an inclusive
//! date range anchored on "today", then fetch and reformat matching work
//! records.

use crate::db::records;
use crate::errors::AppResult;
use crate::models::work_record::WorkHoursEntry;
use chrono::{Datelike, Duration, NaiveDate};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }
}

/// Inclusive [start, end] range for a period, anchored on `today`.
/// Week is ISO Monday-start.
pub fn period_range(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Day => (today, today),
        Period::Week => {
            let start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
            (start, start + Duration::days(6))
        }
        Period::Month => {
            let start = today.with_day(1).unwrap_or(today);
            // December is fixed at day 31 directly; every other month rolls
            // back from the first of the next one.
            let end = if start.month() == 12 {
                start.with_day(31).unwrap_or(start)
            } else {
                start
                    .with_month(start.month() + 1)
                    .and_then(|d| d.pred_opt())
                    .unwrap_or(start)
            };
            (start, end)
        }
    }
}

/// Fetch a user's work records for the period containing `today`, with each
/// date rewritten to the DD-MM-YYYY display form.
///
/// Unknown period keywords yield an empty list, not an error. Callers are
/// expected to narrow the result a second time (the daily view keeps only
/// rows matching today's display date, the weekly view re-derives the week
/// bounds); do not fold that narrowing in here.
pub fn get_work_hours(
    conn: &Connection,
    period: &str,
    user_id: i64,
    today: NaiveDate,
) -> AppResult<Vec<WorkHoursEntry>> {
    let Some(p) = Period::parse(period) else {
        return Ok(Vec::new());
    };

    let (start, end) = period_range(p, today);
    let rows = records::fetch_work_records_in_range(conn, user_id, start, end)?;

    Ok(rows.into_iter().map(|r| r.into_display()).collect())
}
