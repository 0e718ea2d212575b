//! Work-record store: time entries and pending change requests.

use crate::errors::AppResult;
use crate::models::change_request::{ChangeRequest, NewChangeRequest};
use crate::models::work_record::{NewWorkRecord, WorkRecord};
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

pub fn init_schema(conn: &Connection) -> AppResult<()> {
    // "end" needs quoting: END is a reserved word in SQLite.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS work_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            start TEXT NOT NULL,
            \"end\" TEXT NOT NULL,
            break_start TEXT,
            break_end TEXT,
            user_id INTEGER NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS change_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            start TEXT NOT NULL,
            \"end\" TEXT NOT NULL,
            break_start TEXT,
            break_end TEXT,
            user_id INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn map_change_request(row: &Row) -> Result<ChangeRequest> {
    Ok(ChangeRequest {
        id: row.get("id")?,
        date: row.get("date")?,
        start: row.get("start")?,
        end: row.get("end")?,
        break_start: row.get("break_start")?,
        break_end: row.get("break_end")?,
        user_id: row.get("user_id")?,
    })
}

pub fn insert_change_request(conn: &Connection, req: &NewChangeRequest) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO change_requests (date, start, \"end\", break_start, break_end, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            req.date,
            req.start,
            req.end,
            req.break_start,
            req.break_end,
            req.user_id
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Unconditional delete by primary key; no ownership check. The checked
/// variant behind `enforce_delete_ownership` is
/// [`delete_change_request_owned`].
pub fn delete_change_request(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM change_requests WHERE id = ?1", [id])?;
    Ok(())
}

/// Delete only when the row belongs to `user_id`. Returns the number of
/// affected rows so the caller can distinguish a refused delete.
pub fn delete_change_request_owned(conn: &Connection, id: i64, user_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM change_requests WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(n)
}

/// All change requests for a user, unfiltered by date, in insertion order.
pub fn fetch_change_requests(conn: &Connection, user_id: i64) -> AppResult<Vec<ChangeRequest>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, start, \"end\", break_start, break_end, user_id
         FROM change_requests
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([user_id], map_change_request)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_work_record(conn: &Connection, rec: &NewWorkRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_records (date, start, \"end\", break_start, break_end, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.date,
            rec.start,
            rec.end,
            rec.break_start,
            rec.break_end,
            rec.user_id
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Work records for `user_id` whose date falls within [start, end] inclusive.
/// Stored dates may carry a time-of-day component, so each one is parsed to a
/// calendar date before comparing; rows with unparseable dates never match.
pub fn fetch_work_records_in_range(
    conn: &Connection,
    user_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<WorkRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, start, \"end\", break_start, break_end, user_id
         FROM work_records
         WHERE user_id = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        Ok((
            row.get::<_, i64>("id")?,
            row.get::<_, String>("date")?,
            row.get::<_, String>("start")?,
            row.get::<_, String>("end")?,
            row.get::<_, Option<String>>("break_start")?,
            row.get::<_, Option<String>>("break_end")?,
            row.get::<_, i64>("user_id")?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, raw_date, start_t, end_t, break_start, break_end, uid) = r?;
        let Some(d) = date::parse_stored_date(&raw_date) else {
            continue;
        };
        if d < start || d > end {
            continue;
        }
        out.push(WorkRecord {
            id,
            date: d,
            start: start_t,
            end: end_t,
            break_start,
            break_end,
            user_id: uid,
        });
    }
    Ok(out)
}
