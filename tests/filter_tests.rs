//! Integration tests for the persisted filter category

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{motto_cmd, motto_cmd_in};

fn init_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    motto_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_filter_defaults_to_all() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("all"));
}

#[test]
fn test_filter_set_persists() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .args(["filter", "Success"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter set to 'Success'"));

    let content = fs::read_to_string(temp.path().join(".motto/config.toml")).unwrap();
    assert!(content.contains("selected_category = \"Success\""));

    motto_cmd_in(temp.path())
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success"));
}

#[test]
fn test_filter_unknown_category_warns() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .args(["filter", "Zen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stored quotes in category 'Zen'"));
}

#[test]
fn test_filter_known_category_no_warning() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .args(["filter", "Life"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no stored quotes").not());
}

#[test]
fn test_filter_clear_resets() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .args(["filter", "Success"])
        .assert()
        .success();

    motto_cmd_in(temp.path())
        .args(["filter", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter cleared"));

    motto_cmd_in(temp.path())
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("all"));
}

#[test]
fn test_filter_all_sentinel_clears() {
    let temp = init_store();

    motto_cmd_in(temp.path())
        .args(["filter", "Success"])
        .assert()
        .success();

    motto_cmd_in(temp.path())
        .args(["filter", "all"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".motto/config.toml")).unwrap();
    assert!(content.contains("selected_category = \"all\""));
}

#[test]
fn test_malformed_prefs_heal_silently() {
    let temp = init_store();
    fs::write(temp.path().join(".motto/config.toml"), "broken = [").unwrap();

    motto_cmd_in(temp.path())
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("all"));
}
