#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

use worklog::db::{records, users};
use worklog::models::work_record::NewWorkRecord;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh in-memory records store with the schema applied.
pub fn records_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open records store");
    records::init_schema(&conn).expect("init records schema");
    conn
}

/// Fresh in-memory credentials store with the schema applied.
pub fn users_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open credentials store");
    users::init_schema(&conn).expect("init users schema");
    conn
}

/// Insert a work record without breaks; `date` is stored as given.
pub fn add_record(conn: &Connection, user_id: i64, date: &str, start: &str, end: &str) {
    records::insert_work_record(
        conn,
        &NewWorkRecord {
            date,
            start,
            end,
            break_start: None,
            break_end: None,
            user_id,
        },
    )
    .expect("insert work record");
}
