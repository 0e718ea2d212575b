//! HTTP layer: route handlers, session helpers, pages, server bootstrap.

pub mod forms;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod session;
pub mod state;

use crate::errors::AppError;
use actix_web::http::{StatusCode, header};
use actix_web::web::ServiceConfig;
use actix_web::{HttpResponse, ResponseError};

/// Internal failures surface as a plain 500 page. Expected failures
/// (validation, bad credentials, ownership mismatches) never take this
/// path; handlers turn those into flashes and redirects.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");
        HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body(pages::error_page())
    }
}

/// Register every route on the app.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::index)
        .service(handlers::login_form)
        .service(handlers::login_submit)
        .service(handlers::dashboard)
        .service(handlers::dashboard_submit)
        .service(handlers::delete_entry)
        .service(handlers::logout)
        .service(handlers::skema)
        .service(handlers::arbejdstider);
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
