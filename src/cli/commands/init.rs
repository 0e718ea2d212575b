use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages;

/// Create the configuration file and both database schemas.
/// Everything is idempotent; running init twice is harmless.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.users_db.as_deref(), cli.records_db.as_deref(), cli.test)?;

    db::init_all(&cfg.users_database, &cfg.records_database)?;

    messages::success(format!(
        "Initialized databases at {} and {}",
        cfg.users_database, cfg.records_database
    ));
    Ok(())
}
