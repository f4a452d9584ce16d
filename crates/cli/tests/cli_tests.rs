//! Smoke tests for the freenews binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_pages() {
    Command::cargo_bin("freenews")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("news"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("wallet"));
}

#[test]
fn unknown_environment_fails_before_any_network_access() {
    Command::cargo_bin("freenews")
        .unwrap()
        .args(["--env", "sandbox", "news"])
        .env_remove("NEWS_ENV")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unconfigured environment 'sandbox'"));
}

#[test]
fn vote_reports_the_stub_without_a_session() {
    Command::cargo_bin("freenews")
        .unwrap()
        .args(["vote", "like", "3"])
        .env_remove("NEWS_ENV")
        .assert()
        .success()
        .stdout(predicate::str::contains("not yet implemented"));
}
