//! Integration tests for the qcrack CLI
//!
//! These tests run the qcrack binary and verify output and exit codes.

mod common;

use common::{parse_stdout_json, qcrack};
use predicates::prelude::*;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    qcrack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: qcrack"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("cost"))
        .stdout(predicate::str::contains("crack"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("predict"));
}

#[test]
fn test_version_flag() {
    qcrack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qcrack"));
}

#[test]
fn test_subcommand_help() {
    qcrack()
        .args(["crack", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crack a password"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    qcrack().args(["--format", "xml", "cost", "4"]).assert().code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    qcrack()
        .args(["--format", "json", "cost", "4", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_negative_size_exit_code_2() {
    qcrack()
        .args(["cost", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid size"));
}

#[test]
fn test_negative_size_json_envelope() {
    qcrack()
        .args(["--format", "json", "cost", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_size\""));
}

#[test]
fn test_quiet_suppresses_error_output() {
    qcrack()
        .args(["--quiet", "crack", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// cost
// ============================================================================

#[test]
fn test_cost_human_output() {
    qcrack()
        .args(["cost", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linear search steps: 100"))
        .stdout(predicate::str::contains("grover search steps: 8"));
}

#[test]
fn test_cost_zero() {
    qcrack()
        .args(["cost", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grover search steps: 0"));
}

#[test]
fn test_cost_one() {
    qcrack()
        .args(["cost", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grover search steps: 1"));
}

#[test]
fn test_cost_json_output() {
    let output = qcrack()
        .args(["--format", "json", "cost", "100"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["size"], 100.0);
    assert_eq!(json["linear_steps"], 100.0);
    assert_eq!(json["grover_steps"], 8);
}

#[test]
fn test_cost_records_output() {
    qcrack()
        .args(["--format", "records", "cost", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C size=100 linear=100 grover=8"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_worst_case_default_target() {
    qcrack()
        .args(["search", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target index 99"))
        .stdout(predicate::str::contains("found at index 99 in 100 steps"))
        .stdout(predicate::str::contains("found at index 99 in 8 steps"));
}

#[test]
fn test_search_explicit_target() {
    qcrack()
        .args(["search", "100", "--target", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found at index 10 in 11 steps"));
}

#[test]
fn test_search_target_out_of_range() {
    qcrack()
        .args(["search", "10", "--target", "20"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

// ============================================================================
// crack
// ============================================================================

#[test]
fn test_crack_short_password() {
    qcrack()
        .args(["crack", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classical: cracked in 2 attempts"))
        .stdout(predicate::str::contains("quantum:"));
}

#[test]
fn test_crack_json_attempt_counts() {
    let output = qcrack()
        .args(["--format", "json", "crack", "ab"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["classical"]["attempts"], 2);
    assert_eq!(json["classical"]["cracked"], "ab");
    // π/4 · √676 = 20.42, rounded up to 21
    assert_eq!(json["quantum"]["iterations"], 21);
    assert_eq!(json["quantum"]["qubits"], 10);
}

#[test]
fn test_crack_classical_only() {
    let output = qcrack()
        .args(["--format", "json", "crack", "ab", "--method", "classical"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["classical"]["attempts"], 2);
    assert!(json["quantum"].is_null());
}

#[test]
fn test_crack_empty_password_exit_code_2() {
    qcrack()
        .args(["crack", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_crack_charset_mismatch_exit_code_2() {
    qcrack()
        .args(["crack", "AB"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not in the lower charset"));
}

#[test]
fn test_crack_alternate_charset() {
    qcrack()
        .args(["crack", "AB", "--charset", "alnum"])
        .assert()
        .success();
}

#[test]
fn test_unknown_charset_exit_code_2() {
    qcrack()
        .args(["crack", "ab", "--charset", "base64"])
        .assert()
        .code(2);
}

// ============================================================================
// predict
// ============================================================================

#[test]
fn test_predict_reports_crossover() {
    qcrack()
        .arg("predict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Complexity Predictions"))
        .stdout(predicate::str::contains("Quantum advantage begins at length 5"));
}

#[test]
fn test_predict_json_output() {
    let output = qcrack()
        .args(["--format", "json", "predict", "--min", "2", "--max", "4"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["charset_size"], 94);
    assert_eq!(json["predictions"].as_array().unwrap().len(), 3);
    assert_eq!(json["crossover"]["length"], 5);
}

#[test]
fn test_predict_records_output() {
    qcrack()
        .args(["--format", "records", "predict", "--min", "2", "--max", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P length=2"))
        .stdout(predicate::str::contains("X crossover_length=5"));
}

#[test]
fn test_predict_invalid_range_exit_code_2() {
    qcrack()
        .args(["predict", "--min", "5", "--max", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid length range"));
}

#[test]
fn test_predict_invalid_charset_size_exit_code_2() {
    qcrack()
        .args(["predict", "--charset-size", "1"])
        .assert()
        .code(2);
}
