use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("historical-news").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Historical newspaper archive server"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("historical-news").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_today_rejects_bad_date() {
    let mut cmd = Command::cargo_bin("historical-news").unwrap();
    cmd.args(["today", "--date", "15-06-2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
}

#[test]
fn test_cli_lists_commands() {
    let mut cmd = Command::cargo_bin("historical-news").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init-db").and(predicate::str::contains("monthly")));
}
