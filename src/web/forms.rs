//! Typed form payloads, one per endpoint, validated once at the boundary.

use serde::Deserialize;

/// Login form. Both fields are required and 3–20 characters.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        length_in_bounds(&self.username) && length_in_bounds(&self.password)
    }
}

fn length_in_bounds(s: &str) -> bool {
    (3..=20).contains(&s.chars().count())
}

/// Dashboard change-request form. date/start/end are required; the break
/// fields may be empty.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub pause_start: String,
    #[serde(default)]
    pub pause_end: String,
}

impl EntryForm {
    pub fn required_present(&self) -> bool {
        !self.date.is_empty() && !self.start.is_empty() && !self.end.is_empty()
    }

    pub fn break_start(&self) -> Option<&str> {
        non_empty(&self.pause_start)
    }

    pub fn break_end(&self) -> Option<&str> {
        non_empty(&self.pause_end)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
