//! `qcrack crack` command - crack a single password

use qcrack_core::charset::Charset;
use qcrack_core::crack::{brute_force_crack, grover_crack, CrackOutcome};
use qcrack_core::error::Result;
use qcrack_core::format::OutputFormat;
use qcrack_core::timing::time_ms;

use crate::cli::{Cli, CrackMethod};
use crate::commands::helpers::interrupt_flag;

/// Execute the crack command
pub fn execute(cli: &Cli, password: &str, charset: Charset, method: CrackMethod) -> Result<()> {
    let classical = if matches!(method, CrackMethod::Classical | CrackMethod::Both) {
        let interrupted = interrupt_flag();
        let (outcome, elapsed) =
            time_ms(|| brute_force_crack(password, charset, Some(interrupted.as_ref())));
        Some((outcome?, elapsed))
    } else {
        None
    };

    let quantum = if matches!(method, CrackMethod::Quantum | CrackMethod::Both) {
        let (outcome, elapsed) = time_ms(|| grover_crack(password, charset));
        Some((outcome?, elapsed))
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => output_json(password, charset, &classical, &quantum)?,
        OutputFormat::Records => output_records(&classical, &quantum),
        OutputFormat::Human => output_human(password, charset, &classical, &quantum),
    }

    Ok(())
}

type TimedOutcome = Option<(CrackOutcome, f64)>;

fn output_json(
    password: &str,
    charset: Charset,
    classical: &TimedOutcome,
    quantum: &TimedOutcome,
) -> Result<()> {
    let output = serde_json::json!({
        "password": password,
        "charset": charset.to_string(),
        "classical": classical.as_ref().map(|(outcome, elapsed)| serde_json::json!({
            "cracked": outcome.password,
            "attempts": outcome.attempts,
            "elapsed_ms": elapsed,
        })),
        "quantum": quantum.as_ref().map(|(outcome, elapsed)| serde_json::json!({
            "cracked": outcome.password,
            "iterations": outcome.attempts,
            "qubits": outcome.qubits,
            "elapsed_ms": elapsed,
        })),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(classical: &TimedOutcome, quantum: &TimedOutcome) {
    if let Some((outcome, elapsed)) = classical {
        println!(
            "K method=classical attempts={} elapsed_ms={:.2}",
            outcome.attempts, elapsed
        );
    }
    if let Some((outcome, elapsed)) = quantum {
        println!(
            "K method=quantum iterations={} qubits={} elapsed_ms={:.2}",
            outcome.attempts,
            outcome.qubits.unwrap_or(0),
            elapsed
        );
    }
}

fn output_human(
    password: &str,
    charset: Charset,
    classical: &TimedOutcome,
    quantum: &TimedOutcome,
) {
    println!(
        "password: {} ({} charset, {} characters)",
        password,
        charset,
        password.len()
    );
    if let Some((outcome, elapsed)) = classical {
        println!(
            "classical: cracked in {} attempts ({:.2} ms)",
            outcome.attempts, elapsed
        );
    }
    if let Some((outcome, elapsed)) = quantum {
        println!(
            "quantum: {} iterations over a {}-qubit register ({:.2} ms)",
            outcome.attempts,
            outcome.qubits.unwrap_or(0),
            elapsed
        );
    }
}
