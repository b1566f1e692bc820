use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

pub fn qcrack() -> Command {
    cargo_bin_cmd!("qcrack")
}

#[allow(dead_code)]
pub fn parse_stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
