use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::web;

/// Run the HTTP server with optional bind/port overrides.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(b) = bind {
            cfg.bind_address = b.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }
        web::server::serve(cfg)?;
    }
    Ok(())
}
