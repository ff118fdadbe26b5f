use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn rolodex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolodex-store").unwrap();
    cmd.env("CONTACTS_STORAGE", "json")
        .env("CONTACTS_STORAGE_PATH", dir.path().join("contacts.json"))
        .env("CONTACTS_MAX_LATENCY_MS", "0");
    cmd
}

fn add(dir: &TempDir, first: &str, last: &str) {
    rolodex(dir)
        .args(["create", "--first", first, "--last", last])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact created successfully"));
}

#[test]
fn listing_empty_book() {
    let dir = tempdir().unwrap();

    rolodex(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));
}

#[test]
fn listing_contacts() {
    let dir = tempdir().unwrap();

    add(&dir, "Patricia", "Martinez");
    add(&dir, "Diane", "Graham");
    add(&dir, "John", "Turner");
    add(&dir, "Alice", "Adams");

    let output = rolodex(&dir)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = output.lines().collect();

    // Sorted by last name
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Alice Adams"));
    assert!(lines[1].contains("Diane Graham"));
    assert!(lines[2].contains("Patricia Martinez"));
    assert!(lines[3].contains("John Turner"));
    assert!(lines[0].starts_with("  1. "));
}

#[test]
fn listing_with_query() {
    let dir = tempdir().unwrap();

    add(&dir, "Ada", "Lovelace");
    add(&dir, "Bob", "Byron");
    add(&dir, "Adaline", "Zed");

    let output = rolodex(&dir)
        .args(["list", "--query", "ada"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Ada Lovelace"));
    assert!(lines[1].contains("Adaline Zed"));

    rolodex(&dir)
        .args(["list", "-q", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no contact matching {xyz}"));
}
