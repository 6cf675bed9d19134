use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("muxup")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("which"))
        .stdout(predicate::str::contains("root"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_check_help_mentions_local_default() {
    cargo_bin_cmd!("muxup")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local project file"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("muxup")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
