//! `qcrack predict` command - complexity predictions
//!
//! Extrapolates cracking times across a length range and reports where
//! quantum search overtakes classical brute force.

use qcrack_core::error::{QcrackError, Result};
use qcrack_core::format::OutputFormat;
use qcrack_core::predict::{ComplexityPrediction, ComplexityPredictor};

use crate::cli::Cli;

/// Execute the predict command
pub fn execute(cli: &Cli, min: u32, max: u32, charset_size: usize) -> Result<()> {
    if min == 0 || min > max {
        return Err(QcrackError::UsageError(format!(
            "invalid length range: {}..={} (min must be >= 1 and <= max)",
            min, max
        )));
    }
    if charset_size < 2 {
        return Err(QcrackError::UsageError(format!(
            "invalid charset size: {} (need at least 2 symbols)",
            charset_size
        )));
    }

    let predictor = ComplexityPredictor::new(charset_size);
    let predictions = predictor.predict_range(min, max);
    let crossover = predictor.find_crossover_point();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "charset_size": charset_size,
                "predictions": predictions,
                "crossover": crossover.map(|(length, quantum_time_ms)| serde_json::json!({
                    "length": length,
                    "quantum_time_ms": quantum_time_ms,
                })),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            for p in &predictions {
                println!(
                    "P length={} classical_ms={:.2} quantum_ms={:.2} space_ratio={:.2e}",
                    p.password_length,
                    p.classical_time_ms,
                    p.quantum_time_ms,
                    space_ratio(p)
                );
            }
            if let Some((length, quantum_time_ms)) = crossover {
                println!("X crossover_length={} quantum_ms={:.2}", length, quantum_time_ms);
            }
        }
        OutputFormat::Human => output_human(&predictions, crossover),
    }

    Ok(())
}

fn space_ratio(prediction: &ComplexityPrediction) -> f64 {
    prediction.quantum_space_bytes / prediction.classical_space_bytes
}

fn output_human(predictions: &[ComplexityPrediction], crossover: Option<(u32, f64)>) {
    println!("Complexity Predictions:");
    println!("{}", "-".repeat(80));
    println!(
        "{:^8} | {:^20} | {:^20} | {:^15}",
        "Length", "Classical Time (ms)", "Quantum Time (ms)", "Space Ratio"
    );
    println!("{}", "-".repeat(80));

    for p in predictions {
        println!(
            "{:^8} | {:^20.2} | {:^20.2} | {:^15.2e}",
            p.password_length,
            p.classical_time_ms,
            p.quantum_time_ms,
            space_ratio(p)
        );
    }

    match crossover {
        Some((length, quantum_time_ms)) => println!(
            "\nQuantum advantage begins at length {} (time: {:.2} ms)",
            length, quantum_time_ms
        ),
        None => println!("\nNo quantum crossover found within the predicted range"),
    }
}
