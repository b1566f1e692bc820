//! `qcrack search` command - step-counted search simulation
//!
//! Builds a `0..size` haystack and searches it with both algorithms,
//! reporting the exact probe count next to the theoretical query count.

use qcrack_core::error::{QcrackError, Result};
use qcrack_core::format::OutputFormat;
use qcrack_core::search::{grover_search, linear_search, SearchOutcome};

use crate::cli::Cli;

/// Execute the search command
pub fn execute(cli: &Cli, size: usize, target: Option<usize>) -> Result<()> {
    let target = match target {
        Some(t) if t >= size => {
            return Err(QcrackError::UsageError(format!(
                "target index {} is out of range for a haystack of {} elements",
                t, size
            )));
        }
        Some(t) => t,
        // The last element is linear search's worst case.
        None => size.saturating_sub(1),
    };

    let haystack: Vec<usize> = (0..size).collect();
    let linear = linear_search(&haystack, &target);
    let grover = grover_search(&haystack, &target);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "size": size,
                "target": target,
                "linear": outcome_json(&linear),
                "grover": outcome_json(&grover),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("S algorithm=linear {}", outcome_record(&linear));
            println!("S algorithm=grover {}", outcome_record(&grover));
        }
        OutputFormat::Human => {
            println!("haystack: {} elements, target index {}", size, target);
            println!("linear: {}", outcome_human(&linear));
            println!("grover: {}", outcome_human(&grover));
        }
    }

    Ok(())
}

fn outcome_json(outcome: &SearchOutcome) -> serde_json::Value {
    serde_json::json!({
        "index": outcome.index,
        "steps": outcome.steps,
    })
}

fn outcome_record(outcome: &SearchOutcome) -> String {
    match outcome.index {
        Some(index) => format!("index={} steps={}", index, outcome.steps),
        None => format!("index=none steps={}", outcome.steps),
    }
}

fn outcome_human(outcome: &SearchOutcome) -> String {
    match outcome.index {
        Some(index) => format!("found at index {} in {} steps", index, outcome.steps),
        None => format!("not found after {} steps", outcome.steps),
    }
}
