//! HTTP server bootstrap: session middleware, schema init, route wiring.

use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::web;
use crate::web::state::AppState;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite};
use actix_web::{App, HttpServer, web as aweb};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const SESSION_KEY_MIN_LEN: usize = 64;

pub fn serve(cfg: Config) -> AppResult<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Both schemas are created idempotently before accepting requests.
    db::init_all(&cfg.users_database, &cfg.records_database)?;

    let key = load_session_key(&cfg.session_key_file);
    let cookie_secure = cfg.cookie_secure;
    let bind = (cfg.bind_address.clone(), cfg.port);
    let state = AppState::new(cfg);

    info!(address = %bind.0, port = bind.1, "starting worklog server");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let session = SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                .cookie_name("session".into())
                .cookie_path("/".into())
                .cookie_secure(cookie_secure)
                .cookie_http_only(true)
                .cookie_same_site(SameSite::Lax)
                .build();

            App::new()
                .app_data(aweb::Data::new(state.clone()))
                .wrap(session)
                .configure(web::configure)
        })
        .bind(bind)?
        .run()
        .await
    })?;

    Ok(())
}

/// Load the cookie signing key from the configured file. Falls back to an
/// ephemeral key (sessions will not survive a restart) when the file is
/// absent or too short.
fn load_session_key(path: &str) -> Key {
    match std::fs::read(path) {
        Ok(bytes) if bytes.len() >= SESSION_KEY_MIN_LEN => Key::derive_from(&bytes),
        Ok(bytes) => {
            warn!(
                path,
                length = bytes.len(),
                "session key too short, using a temporary key"
            );
            Key::generate()
        }
        Err(e) => {
            warn!(path, error = %e, "session key not readable, using a temporary key");
            Key::generate()
        }
    }
}
