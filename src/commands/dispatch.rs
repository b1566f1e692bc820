//! Command dispatch logic for qcrack

use qcrack_core::config::ExperimentConfig;
use qcrack_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Cost { size } => commands::cost::execute(cli, *size),

        Commands::Search { size, target } => commands::search::execute(cli, *size, *target),

        Commands::Crack {
            password,
            charset,
            method,
        } => commands::crack::execute(cli, password, *charset, *method),

        Commands::Compare {
            lengths,
            charset,
            csv,
        } => {
            let config = ExperimentConfig::load(cli.config.as_deref())?;
            commands::compare::execute(cli, &config, lengths.clone(), *charset, csv.as_deref())
        }

        Commands::Predict {
            min,
            max,
            charset_size,
        } => commands::predict::execute(cli, *min, *max, *charset_size),
    }
}
