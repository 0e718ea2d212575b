use crate::config::Config;

/// Application state shared with every handler: database paths and toggles
/// resolved at startup. Identity is never kept here; it is re-resolved from
/// the session cookie on each request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
