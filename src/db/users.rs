//! Credential store: username/password-hash rows.

use crate::core::auth;
use crate::errors::AppResult;
use crate::models::user::{CreateUserOutcome, User};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn map_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        password_hash: row.get("password_hash")?,
    })
}

/// Hash the password and insert a new account.
/// A username collision surfaces as `DuplicateUsername`; nothing is written
/// in that case.
pub fn create_user(
    conn: &Connection,
    username: &str,
    password: &str,
) -> AppResult<CreateUserOutcome> {
    let hash = auth::hash_password(password)?;

    match conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
        params![username, hash],
    ) {
        Ok(_) => Ok(CreateUserOutcome::Created),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Ok(CreateUserOutcome::DuplicateUsername)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn find_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password_hash FROM users WHERE username = ?1")?;
    Ok(stmt.query_row([username], map_row).optional()?)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT id, username, password_hash FROM users WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}
