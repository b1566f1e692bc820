//! `qcrack cost` command - search cost estimates

use qcrack_core::cost::{grover_search_cost, linear_search_cost};
use qcrack_core::error::Result;
use qcrack_core::format::OutputFormat;

use crate::cli::Cli;

/// Execute the cost command
pub fn execute(cli: &Cli, size: f64) -> Result<()> {
    let linear = linear_search_cost(size);
    let grover = grover_search_cost(size)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "size": size,
                "linear_steps": linear,
                "grover_steps": grover,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!("C size={} linear={} grover={}", size, linear, grover);
        }
        OutputFormat::Human => {
            println!("search space: {} elements", size);
            println!("linear search steps: {}", linear);
            println!("grover search steps: {}", grover);
        }
    }

    Ok(())
}
