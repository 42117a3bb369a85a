use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_mentions_target_url_flag() {
    Command::cargo_bin("airwatch-smoke")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"));
}

#[test]
fn test_unreachable_backend_exits_zero_with_full_summary() {
    Command::cargo_bin("airwatch-smoke")
        .unwrap()
        .args(["--url", "http://127.0.0.1:1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("0/4 checks passed"))
        .stdout(predicate::str::contains("Health Check"))
        .stdout(predicate::str::contains("Error Handling"));
}

#[test]
fn test_json_output_lists_all_four_checks() {
    Command::cargo_bin("airwatch-smoke")
        .unwrap()
        .args(["--url", "http://127.0.0.1:1", "--json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#""name": "Health Check""#))
        .stdout(predicate::str::contains(r#""name": "Single City Fetch""#))
        .stdout(predicate::str::contains(r#""name": "Batch Fetch""#))
        .stdout(predicate::str::contains(r#""name": "Error Handling""#));
}
