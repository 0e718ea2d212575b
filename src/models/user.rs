/// Account row from the credentials database.
/// Created out-of-band via `worklog add-user`; never deleted in-app.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,                // ⇔ users.id (INTEGER PRIMARY KEY)
    pub username: String,       // ⇔ users.username (TEXT UNIQUE)
    pub password_hash: String,  // ⇔ users.password_hash (PHC string)
}

/// Outcome of a user creation attempt. A uniqueness violation on the
/// username is an expected result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created,
    DuplicateUsername,
}
