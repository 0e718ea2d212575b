//! Route handlers. Each handler resolves the identity from the session,
//! opens a short-lived store connection, and renders a page or redirects.

use crate::core::{auth, period};
use crate::db::{self, records, users};
use crate::errors::{AppError, AppResult};
use crate::models::change_request::NewChangeRequest;
use crate::models::user::User;
use crate::utils::date;
use crate::web::forms::{EntryForm, LoginForm};
use crate::web::pages;
use crate::web::redirect;
use crate::web::session::{Flash, SessionContext};
use crate::web::state::AppState;
use actix_web::{HttpResponse, get, post, web};
use tracing::warn;

type HandlerResult = Result<HttpResponse, AppError>;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Resolve the logged-in user, if any, from the session cookie.
fn current_user(state: &AppState, session: &SessionContext) -> AppResult<Option<User>> {
    let Some(id) = session.user_id()? else {
        return Ok(None);
    };
    let conn = db::open(&state.config.users_database)?;
    users::find_by_id(&conn, id)
}

#[get("/")]
pub async fn index() -> HttpResponse {
    html(pages::index_page())
}

#[get("/login")]
pub async fn login_form() -> HttpResponse {
    html(pages::login_page(&[]))
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HandlerResult {
    if !form.is_valid() {
        return Ok(html(pages::login_page(&[])));
    }

    let conn = db::open(&state.config.users_database)?;
    let user = users::find_by_username(&conn, &form.username)?;

    // One generic message for unknown user and wrong password alike.
    match user {
        Some(u) if auth::verify_password(&form.password, &u.password_hash) => {
            session.persist_user(u.id)?;
            Ok(redirect("/dashboard"))
        }
        _ => {
            warn!(username = %form.username, "failed login attempt");
            Ok(html(pages::login_page(&[Flash::danger(
                "Invalid username or password",
            )])))
        }
    }
}

#[get("/dashboard")]
pub async fn dashboard(state: web::Data<AppState>, session: SessionContext) -> HandlerResult {
    let Some(user) = current_user(&state, &session)? else {
        return Ok(redirect("/login"));
    };

    let today = date::today();
    let conn = db::open(&state.config.records_database)?;
    let entries = period::get_work_hours(&conn, "day", user.id, today)?;
    let flashes = session.take_flashes()?;

    Ok(html(pages::dashboard_page(
        &user,
        &date::format_display(today),
        &entries,
        &flashes,
    )))
}

#[post("/dashboard")]
pub async fn dashboard_submit(
    state: web::Data<AppState>,
    session: SessionContext,
    form: web::Form<EntryForm>,
) -> HandlerResult {
    let Some(user) = current_user(&state, &session)? else {
        return Ok(redirect("/login"));
    };

    if !form.required_present() {
        session.flash("danger", "All fields for work hours are required")?;
    } else {
        let conn = db::open(&state.config.records_database)?;
        records::insert_change_request(
            &conn,
            &NewChangeRequest {
                date: &form.date,
                start: &form.start,
                end: &form.end,
                break_start: form.break_start(),
                break_end: form.break_end(),
                user_id: user.id,
            },
        )?;
        session.flash("success", "Record added")?;
    }

    Ok(redirect("/dashboard"))
}

#[post("/delete/{entry_id}")]
pub async fn delete_entry(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> HandlerResult {
    let Some(user) = current_user(&state, &session)? else {
        return Ok(redirect("/login"));
    };
    let entry_id = path.into_inner();

    let conn = db::open(&state.config.records_database)?;
    if state.config.enforce_delete_ownership {
        let deleted = records::delete_change_request_owned(&conn, entry_id, user.id)?;
        if deleted == 0 {
            warn!(entry_id, user_id = user.id, "refused delete of foreign record");
            session.flash("danger", "You do not have permission to remove this record")?;
            return Ok(redirect("/dashboard"));
        }
    } else {
        records::delete_change_request(&conn, entry_id)?;
    }

    session.flash("danger", "Record removed")?;
    Ok(redirect("/dashboard"))
}

#[get("/logout")]
pub async fn logout(state: web::Data<AppState>, session: SessionContext) -> HandlerResult {
    if current_user(&state, &session)?.is_none() {
        return Ok(redirect("/login"));
    }

    session.purge();
    Ok(redirect("/"))
}

#[get("/Skema/{user}")]
pub async fn skema(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<String>,
) -> HandlerResult {
    let Some(user) = current_user(&state, &session)? else {
        return Ok(redirect("/login"));
    };
    let requested = path.into_inner();

    // Only the owner's page is served; nothing is fetched otherwise.
    if requested != user.username {
        session.flash("danger", "You do not have permission to view this page.")?;
        return Ok(redirect("/dashboard"));
    }

    let conn = db::open(&state.config.records_database)?;
    let rows = records::fetch_change_requests(&conn, user.id)?;
    let flashes = session.take_flashes()?;

    Ok(html(pages::skema_page(&user.username, &rows, &flashes)))
}

#[get("/arbejdstider/{user_id}")]
pub async fn arbejdstider(
    state: web::Data<AppState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> HandlerResult {
    if current_user(&state, &session)?.is_none() {
        return Ok(redirect("/login"));
    }
    let user_id = path.into_inner();

    let today = date::today();
    let today_str = date::format_display(today);
    let (week_start, week_end) = date::week_bounds(today);

    let conn = db::open(&state.config.records_database)?;
    let daily = period::get_work_hours(&conn, "day", user_id, today)?;
    let weekly = period::get_work_hours(&conn, "week", user_id, today)?;
    let monthly = period::get_work_hours(&conn, "month", user_id, today)?;

    // Second narrowing pass on top of the aggregator's range fetch: the
    // daily table keeps rows whose display date is exactly today, the
    // weekly one re-derives the week bounds and filters on the parsed
    // display date.
    let daily_today: Vec<_> = daily.into_iter().filter(|e| e.date == today_str).collect();
    let weekly_this_week: Vec<_> = weekly
        .into_iter()
        .filter(|e| {
            date::parse_display(&e.date).is_some_and(|d| week_start <= d && d <= week_end)
        })
        .collect();

    let flashes = session.take_flashes()?;

    Ok(html(pages::work_hours_page(
        &daily_today,
        &weekly_this_week,
        &monthly,
        &flashes,
    )))
}
