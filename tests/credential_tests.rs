use worklog::core::auth::{hash_password, verify_password};
use worklog::db::users::{create_user, find_by_id, find_by_username};
use worklog::models::user::CreateUserOutcome;

mod common;
use common::users_conn;

#[test]
fn verify_accepts_original_password_and_rejects_others() {
    let hash = hash_password("hunter2").expect("hash");
    assert!(verify_password("hunter2", &hash));
    assert!(!verify_password("hunter3", &hash));
    assert!(!verify_password("", &hash));
}

#[test]
fn verify_rejects_garbage_hashes() {
    assert!(!verify_password("hunter2", "not-a-phc-string"));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("hunter2").expect("hash");
    let b = hash_password("hunter2").expect("hash");
    assert_ne!(a, b);
}

#[test]
fn duplicate_username_leaves_existing_row_untouched() {
    let conn = users_conn();

    let outcome = create_user(&conn, "nina", "123456").expect("create");
    assert_eq!(outcome, CreateUserOutcome::Created);
    let original = find_by_username(&conn, "nina")
        .expect("lookup")
        .expect("row present");

    let outcome = create_user(&conn, "nina", "different").expect("create");
    assert_eq!(outcome, CreateUserOutcome::DuplicateUsername);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users WHERE username = 'nina'", [], |r| r.get(0))
        .expect("count");
    assert_eq!(count, 1);

    let after = find_by_username(&conn, "nina")
        .expect("lookup")
        .expect("row present");
    assert_eq!(after.password_hash, original.password_hash);
    assert!(verify_password("123456", &after.password_hash));
}

#[test]
fn lookups_return_absent_for_unknown_users() {
    let conn = users_conn();
    assert!(find_by_username(&conn, "nobody").expect("lookup").is_none());
    assert!(find_by_id(&conn, 99).expect("lookup").is_none());
}

#[test]
fn find_by_id_matches_created_user() {
    let conn = users_conn();
    create_user(&conn, "otto", "abcdef").expect("create");

    let by_name = find_by_username(&conn, "otto")
        .expect("lookup")
        .expect("row present");
    let by_id = find_by_id(&conn, by_name.id)
        .expect("lookup")
        .expect("row present");
    assert_eq!(by_id.username, "otto");
}
