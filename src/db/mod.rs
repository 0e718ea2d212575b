pub mod records;
pub mod users;

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Open a connection to one of the SQLite stores.
/// Connections are short-lived: every request or CLI command opens its own,
/// runs a few statements and drops it.
pub fn open(path: &str) -> AppResult<Connection> {
    Ok(Connection::open(Path::new(path))?)
}

/// Create both schemas if missing. Called by `init` and at server startup.
pub fn init_all(users_db: &str, records_db: &str) -> AppResult<()> {
    users::init_schema(&open(users_db)?)?;
    records::init_schema(&open(records_db)?)?;
    Ok(())
}
