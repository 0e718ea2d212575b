use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db;
use crate::db::users;
use crate::errors::AppResult;
use crate::models::user::CreateUserOutcome;
use crate::ui::messages;

/// Create an account in the credentials store.
/// A duplicate username is reported, not raised; nothing is written in that
/// case.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddUser { username, password } = cmd {
        let conn = db::open(&cfg.users_database)?;
        users::init_schema(&conn)?;

        match users::create_user(&conn, username, password)? {
            CreateUserOutcome::Created => messages::success("User created successfully"),
            CreateUserOutcome::DuplicateUsername => messages::warning("Username already exists"),
        }
    }
    Ok(())
}
