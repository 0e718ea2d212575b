use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// Work-hours row as read from the records database.
/// The stored date may carry a time-of-day component; it is parsed down to
/// a calendar date on load so range comparisons never happen on raw text.
#[derive(Debug, Clone)]
pub struct WorkRecord {
    pub id: i64,
    pub date: NaiveDate,                // ⇔ arbejdstider.date (TEXT, date or datetime)
    pub start: String,                  // ⇔ arbejdstider.start (TEXT "HH:MM")
    pub end: String,                    // ⇔ arbejdstider."end" (TEXT "HH:MM")
    pub break_start: Option<String>,    // ⇔ arbejdstider.break_start
    pub break_end: Option<String>,      // ⇔ arbejdstider.break_end
    pub user_id: i64,
}

/// A work record as handed to page rendering: the date is rewritten to the
/// DD-MM-YYYY display form, every other field passes through unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct WorkHoursEntry {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub user_id: i64,
}

impl WorkRecord {
    pub fn into_display(self) -> WorkHoursEntry {
        WorkHoursEntry {
            id: self.id,
            date: date::format_display(self.date),
            start: self.start,
            end: self.end,
            break_start: self.break_start,
            break_end: self.break_end,
            user_id: self.user_id,
        }
    }
}

/// Insert payload for a work record. Rows normally enter the table
/// out-of-band (seeding, imports); the store exposes the insert so the
/// admin CLI and tests can populate it.
#[derive(Debug, Clone)]
pub struct NewWorkRecord<'a> {
    pub date: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub break_start: Option<&'a str>,
    pub break_end: Option<&'a str>,
    pub user_id: i64,
}
