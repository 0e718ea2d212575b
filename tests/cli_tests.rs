use predicates::str::contains;

mod common;
use common::{setup_test_db, wl};

#[test]
fn init_creates_both_databases() {
    let users_db = setup_test_db("cli_init_users");
    let records_db = setup_test_db("cli_init_records");

    wl().args([
        "--users-db",
        &users_db,
        "--records-db",
        &records_db,
        "--test",
        "init",
    ])
    .assert()
    .success()
    .stdout(contains("Initialized databases"));

    assert!(std::path::Path::new(&users_db).exists());
    assert!(std::path::Path::new(&records_db).exists());
}

#[test]
fn init_is_idempotent() {
    let users_db = setup_test_db("cli_reinit_users");
    let records_db = setup_test_db("cli_reinit_records");

    for _ in 0..2 {
        wl().args([
            "--users-db",
            &users_db,
            "--records-db",
            &records_db,
            "--test",
            "init",
        ])
        .assert()
        .success();
    }
}

#[test]
fn add_user_reports_duplicate_on_second_run() {
    let users_db = setup_test_db("cli_adduser_users");
    let records_db = setup_test_db("cli_adduser_records");

    wl().args([
        "--users-db",
        &users_db,
        "--records-db",
        &records_db,
        "--test",
        "add-user",
        "nina",
        "123456",
    ])
    .assert()
    .success()
    .stdout(contains("User created successfully"));

    wl().args([
        "--users-db",
        &users_db,
        "--records-db",
        &records_db,
        "--test",
        "add-user",
        "nina",
        "different",
    ])
    .assert()
    .success()
    .stdout(contains("Username already exists"));
}
