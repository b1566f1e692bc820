//! `qcrack compare` command - timed classical vs quantum sweep
//!
//! For each length: generate a random password, time the brute-force crack
//! (up to the configured practical limit) and the Grover simulation, and
//! account for the search space. Optionally exports CSV.

use std::path::Path;

use qcrack_core::charset::{random_password, Charset};
use qcrack_core::config::ExperimentConfig;
use qcrack_core::crack::{brute_force_crack, grover_crack};
use qcrack_core::error::Result;
use qcrack_core::format::OutputFormat;
use qcrack_core::report::{write_csv, CrackingResult, RunReport};
use qcrack_core::timing::time_ms;

use crate::cli::Cli;
use crate::commands::helpers::interrupt_flag;

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    config: &ExperimentConfig,
    lengths: Option<Vec<u32>>,
    charset: Option<Charset>,
    csv: Option<&Path>,
) -> Result<()> {
    let lengths = lengths.unwrap_or_else(|| config.lengths.clone());
    let charset = charset.unwrap_or(config.charset);
    let interrupted = interrupt_flag();

    let mut results = Vec::with_capacity(lengths.len());
    for &length in &lengths {
        tracing::info!(length, %charset, "starting comparison");
        results.push(compare_length(config, charset, length, &interrupted)?);
    }

    let report = RunReport::new(charset, results);

    if let Some(path) = csv {
        write_csv(path, &report.results)?;
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Records => output_records(&report),
        OutputFormat::Human => output_human(&report),
    }

    Ok(())
}

fn compare_length(
    config: &ExperimentConfig,
    charset: Charset,
    length: u32,
    interrupted: &std::sync::atomic::AtomicBool,
) -> Result<CrackingResult> {
    let password = random_password(charset, length as usize);

    // Space accounting mirrors the cost model: the classical working set is
    // the search space times the candidate width, the quantum side its
    // square root. Overflow becomes an empty cell rather than an error.
    let classical_space = charset
        .search_space(length)
        .ok()
        .and_then(|space| space.checked_mul(length as u128));
    let quantum_space = classical_space.map(|space| (space as f64).sqrt() as u128);

    let (classical_time_ms, classical_attempts) = if length <= config.max_brute_length {
        let (outcome, elapsed) = time_ms(|| brute_force_crack(&password, charset, Some(interrupted)));
        (Some(elapsed), Some(outcome?.attempts))
    } else {
        tracing::warn!(
            length,
            limit = config.max_brute_length,
            "skipping classical crack beyond practical limit"
        );
        (None, None)
    };

    let (quantum, quantum_time_ms) = time_ms(|| grover_crack(&password, charset));
    let quantum = quantum?;

    Ok(CrackingResult {
        password,
        password_length: length,
        classical_time_ms,
        quantum_time_ms,
        classical_attempts,
        quantum_iterations: quantum.attempts,
        classical_space_bytes: classical_space,
        quantum_space_bytes: quantum_space,
    })
}

fn output_records(report: &RunReport) {
    for result in &report.results {
        let classical = match (result.classical_attempts, result.classical_time_ms) {
            (Some(attempts), Some(ms)) => format!("attempts={} classical_ms={:.2}", attempts, ms),
            _ => "attempts=skipped".to_string(),
        };
        println!(
            "R length={} password={} {} iterations={} quantum_ms={:.2}",
            result.password_length,
            result.password,
            classical,
            result.quantum_iterations,
            result.quantum_time_ms
        );
    }
}

fn output_human(report: &RunReport) {
    println!("Comparison Results ({} charset):", report.charset);
    println!(
        "{:^15} | {:^10} | {:^19} | {:^17}",
        "Password Length", "Password", "Classical Time (ms)", "Quantum Time (ms)"
    );
    println!("{}", "-".repeat(70));
    for result in &report.results {
        let classical = match result.classical_time_ms {
            Some(ms) => format!("{:.2}", ms),
            None => "skipped".to_string(),
        };
        println!(
            "{:^15} | {:^10} | {:^19} | {:^17.2}",
            result.password_length, result.password, classical, result.quantum_time_ms
        );
    }
}
