/// Pending time-correction row, submitted from the dashboard form.
/// Same shape as a work record; values are kept as submitted and displayed
/// as stored.
#[derive(Debug, Clone)]
pub struct ChangeRequest {
    pub id: i64,
    pub date: String,                // ⇔ change_requests.date (TEXT)
    pub start: String,               // ⇔ change_requests.start (TEXT)
    pub end: String,                 // ⇔ change_requests."end" (TEXT)
    pub break_start: Option<String>, // ⇔ change_requests.break_start
    pub break_end: Option<String>,   // ⇔ change_requests.break_end
    pub user_id: i64,
}

/// Insert payload for a change request. date/start/end are validated as
/// present by the caller before this is built; breaks stay optional.
#[derive(Debug, Clone)]
pub struct NewChangeRequest<'a> {
    pub date: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub break_start: Option<&'a str>,
    pub break_end: Option<&'a str>,
    pub user_id: i64,
}
