//! Integration tests for the compare sweep and its config/CSV plumbing

mod common;

use std::fs;

use common::{parse_stdout_json, qcrack};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_compare_human_table() {
    qcrack()
        .args(["compare", "--lengths", "2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("Password Length"))
        .stdout(predicate::str::contains("Quantum Time (ms)"));
}

#[test]
fn test_compare_json_structure() {
    let output = qcrack()
        .args(["--format", "json", "compare", "--lengths", "2"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["charset"], "lower");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["password_length"], 2);
    // 26^2 candidates, so the brute force can need at most 676 attempts
    let attempts = results[0]["classical_attempts"].as_u64().unwrap();
    assert!(attempts >= 1 && attempts <= 676);
    assert_eq!(results[0]["quantum_iterations"], 21);
    assert!(json["recorded_at"].is_string());
}

#[test]
fn test_compare_records_output() {
    qcrack()
        .args(["--format", "records", "compare", "--lengths", "2,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R length=2"))
        .stdout(predicate::str::contains("R length=3"));
}

#[test]
fn test_compare_writes_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("results").join("cracking_results.csv");

    qcrack()
        .args(["compare", "--lengths", "2,3", "--csv"])
        .arg(&csv_path)
        .assert()
        .success();

    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Password Length,Password,Classical Time (ms),Quantum Time (ms),Classical Space (bytes),Quantum Space (bytes)"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2,"));
    assert!(lines[2].starts_with("3,"));
}

#[test]
fn test_compare_skips_classical_beyond_limit() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("qcrack.toml");
    fs::write(&config_path, "max_brute_length = 2\ncharset = \"lower16\"\n").unwrap();

    let output = qcrack()
        .args(["--format", "json", "--config"])
        .arg(&config_path)
        .args(["compare", "--lengths", "2,3"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    let results = json["results"].as_array().unwrap();
    assert!(results[0]["classical_attempts"].is_u64());
    assert!(results[1]["classical_attempts"].is_null());
    assert!(results[1]["classical_time_ms"].is_null());
}

#[test]
fn test_compare_lengths_from_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("qcrack.toml");
    fs::write(&config_path, "lengths = [2]\ncharset = \"lower16\"\n").unwrap();

    let output = qcrack()
        .args(["--format", "json", "--config"])
        .arg(&config_path)
        .arg("compare")
        .assert()
        .success()
        .get_output()
        .clone();

    let json = parse_stdout_json(&output);
    assert_eq!(json["charset"], "lower16");
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
}

#[test]
fn test_compare_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("qcrack.toml");
    fs::write(&config_path, "lengths = not-a-list").unwrap();

    qcrack()
        .args(["--config"])
        .arg(&config_path)
        .arg("compare")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_compare_missing_config_exit_code_3() {
    qcrack()
        .args(["--config", "/nonexistent/qcrack.toml", "compare"])
        .assert()
        .code(3);
}
