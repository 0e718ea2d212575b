//! Server-rendered pages. Every view is a small HTML document assembled
//! here; all dynamic values pass through `escape`.

use crate::models::change_request::ChangeRequest;
use crate::models::user::User;
use crate::models::work_record::WorkHoursEntry;
use crate::web::session::Flash;
use std::fmt::Write as _;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut flash_html = String::new();
    for f in flashes {
        let _ = writeln!(
            flash_html,
            "<p class=\"flash flash-{}\">{}</p>",
            escape(&f.level),
            escape(&f.message)
        );
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{} - worklog</title></head>\n<body>\n{}{}\n</body>\n</html>\n",
        escape(title),
        flash_html,
        body
    )
}

fn optional(field: &Option<String>) -> String {
    escape(field.as_deref().unwrap_or(""))
}

fn work_hours_table(entries: &[WorkHoursEntry]) -> String {
    let mut rows = String::new();
    for e in entries {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&e.date),
            escape(&e.start),
            escape(&e.end),
            optional(&e.break_start),
            optional(&e.break_end)
        );
    }

    format!(
        "<table>\n<tr><th>Date</th><th>Start</th><th>End</th><th>Break start</th><th>Break end</th></tr>\n{}</table>",
        rows
    )
}

pub fn index_page() -> String {
    layout(
        "Welcome",
        &[],
        "<h1>worklog</h1>\n<p><a href=\"/login\">Log in</a> to record your working hours.</p>",
    )
}

pub fn login_page(flashes: &[Flash]) -> String {
    layout(
        "Login",
        flashes,
        "<h1>Login</h1>\n<form method=\"post\" action=\"/login\">\n\
         <input name=\"username\" placeholder=\"Username\" required>\n\
         <input name=\"password\" type=\"password\" placeholder=\"Password\" required>\n\
         <button type=\"submit\">Login</button>\n</form>",
    )
}

pub fn dashboard_page(
    user: &User,
    today: &str,
    entries: &[WorkHoursEntry],
    flashes: &[Flash],
) -> String {
    let body = format!(
        "<h1>Dashboard</h1>\n\
         <p>Logged in as {username}, today is {today}</p>\n\
         <nav><a href=\"/Skema/{username}\">My change requests</a> | \
         <a href=\"/arbejdstider/{user_id}\">Totals</a> | \
         <a href=\"/logout\">Log out</a></nav>\n\
         <h2>Today's hours</h2>\n{table}\n\
         <h2>Submit a change request</h2>\n\
         <form method=\"post\" action=\"/dashboard\">\n\
         <input name=\"date\" type=\"date\">\n\
         <input name=\"start\" type=\"time\">\n\
         <input name=\"end\" type=\"time\">\n\
         <input name=\"pause_start\" type=\"time\">\n\
         <input name=\"pause_end\" type=\"time\">\n\
         <button type=\"submit\">Submit</button>\n</form>",
        username = escape(&user.username),
        user_id = user.id,
        today = escape(today),
        table = work_hours_table(entries),
    );

    layout("Dashboard", flashes, &body)
}

pub fn skema_page(username: &str, requests: &[ChangeRequest], flashes: &[Flash]) -> String {
    let mut rows = String::new();
    for r in requests {
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><form method=\"post\" action=\"/delete/{}\"><button type=\"submit\">Delete</button></form></td></tr>",
            escape(&r.date),
            escape(&r.start),
            escape(&r.end),
            optional(&r.break_start),
            optional(&r.break_end),
            r.id
        );
    }

    let body = format!(
        "<h1>Change requests for {}</h1>\n\
         <table>\n<tr><th>Date</th><th>Start</th><th>End</th><th>Break start</th><th>Break end</th><th></th></tr>\n{}</table>\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        escape(username),
        rows
    );

    layout("Change requests", flashes, &body)
}

pub fn work_hours_page(
    daily: &[WorkHoursEntry],
    weekly: &[WorkHoursEntry],
    monthly: &[WorkHoursEntry],
    flashes: &[Flash],
) -> String {
    let body = format!(
        "<h1>Work hours</h1>\n\
         <h2>Today</h2>\n{}\n\
         <h2>This week</h2>\n{}\n\
         <h2>This month</h2>\n{}\n\
         <p><a href=\"/dashboard\">Back to dashboard</a></p>",
        work_hours_table(daily),
        work_hours_table(weekly),
        work_hours_table(monthly),
    );

    layout("Work hours", flashes, &body)
}

pub fn error_page() -> String {
    layout(
        "Error",
        &[],
        "<h1>Something went wrong</h1>\n<p><a href=\"/dashboard\">Back to dashboard</a></p>",
    )
}
