//! Experiment result records and CSV export

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::charset::Charset;
use crate::error::Result;

/// CSV header row for exported comparison results
const CSV_HEADER: &str = "Password Length,Password,Classical Time (ms),Quantum Time (ms),Classical Space (bytes),Quantum Space (bytes)";

/// Outcome of one classical-vs-quantum cracking comparison
#[derive(Debug, Clone, Serialize)]
pub struct CrackingResult {
    pub password: String,
    pub password_length: u32,
    /// Wall-clock time of the classical crack, in ms; None when skipped
    pub classical_time_ms: Option<f64>,
    /// Wall-clock time of the quantum simulation, in ms
    pub quantum_time_ms: f64,
    /// Candidates the classical crack tried; None when skipped
    pub classical_attempts: Option<u64>,
    /// Theoretical Grover iterations
    pub quantum_iterations: u64,
    /// Classical working-set size in bytes; None when it overflows
    pub classical_space_bytes: Option<u128>,
    /// Quantum working-set size in bytes; None when it overflows
    pub quantum_space_bytes: Option<u128>,
}

/// A full comparison sweep, stamped at completion
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub recorded_at: DateTime<Utc>,
    pub charset: Charset,
    pub results: Vec<CrackingResult>,
}

impl RunReport {
    pub fn new(charset: Charset, results: Vec<CrackingResult>) -> Self {
        RunReport {
            recorded_at: Utc::now(),
            charset,
            results,
        }
    }
}

/// Write comparison results as CSV, creating parent directories as needed.
pub fn write_csv(path: &Path, results: &[CrackingResult]) -> Result<()> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for result in results {
        lines.push(format!(
            "{},{},{},{:.2},{},{}",
            result.password_length,
            csv_field(&result.password),
            format_ms(result.classical_time_ms),
            result.quantum_time_ms,
            format_space(result.classical_space_bytes),
            format_space(result.quantum_space_bytes),
        ));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, lines.join("\n") + "\n")?;

    tracing::info!(path = %path.display(), rows = results.len(), "results saved");
    Ok(())
}

fn format_ms(ms: Option<f64>) -> String {
    match ms {
        Some(value) => format!("{:.2}", value),
        None => "Skipped".to_string(),
    }
}

fn format_space(bytes: Option<u128>) -> String {
    match bytes {
        Some(value) => value.to_string(),
        None => "Overflow".to_string(),
    }
}

/// Quote a CSV field containing separators or quotes.
fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
