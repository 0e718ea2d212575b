//! Session helpers so handlers only deal with domain-level operations:
//! persisting the logged-in user id and queueing flash messages.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub(crate) const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "flash";

/// One flash message, consumed on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: String,
    pub message: String,
}

impl Flash {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: "danger".to_string(),
            message: message.into(),
        }
    }
}

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated user's id in the session cookie.
    pub fn persist_user(&self, user_id: i64) -> AppResult<()> {
        self.0
            .insert(USER_ID_KEY, user_id)
            .map_err(|e| AppError::Session(format!("failed to persist session: {e}")))
    }

    /// Fetch the current user id from the session, if present.
    pub fn user_id(&self) -> AppResult<Option<i64>> {
        self.0
            .get::<i64>(USER_ID_KEY)
            .map_err(|e| AppError::Session(format!("failed to read session: {e}")))
    }

    /// Tear down the session entirely (logout).
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Queue a flash message for the next rendered page.
    pub fn flash(&self, level: &str, message: &str) -> AppResult<()> {
        let mut queued = self.peek_flashes()?;
        queued.push(Flash {
            level: level.to_string(),
            message: message.to_string(),
        });
        self.0
            .insert(FLASH_KEY, queued)
            .map_err(|e| AppError::Session(format!("failed to queue flash: {e}")))
    }

    /// Drain all queued flash messages.
    pub fn take_flashes(&self) -> AppResult<Vec<Flash>> {
        let queued = self.peek_flashes()?;
        self.0.remove(FLASH_KEY);
        Ok(queued)
    }

    fn peek_flashes(&self) -> AppResult<Vec<Flash>> {
        Ok(self
            .0
            .get::<Vec<Flash>>(FLASH_KEY)
            .map_err(|e| AppError::Session(format!("failed to read flashes: {e}")))?
            .unwrap_or_default())
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
