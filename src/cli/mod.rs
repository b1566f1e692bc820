//! CLI argument parsing for qcrack
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json, --config

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use qcrack_core::charset::Charset;
pub use qcrack_core::format::OutputFormat;

use parse::{parse_charset, parse_format};

/// Qcrack - compare classical and quantum search costs
#[derive(Parser, Debug)]
#[command(name = "qcrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, or records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and progress detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to an experiment config file (TOML)
    #[arg(long, global = true, env = "QCRACK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate classical and quantum search costs for a search space size
    Cost {
        /// Number of elements in the search space
        #[arg(allow_hyphen_values = true)]
        size: f64,
    },

    /// Run step-counted linear and Grover searches over a generated haystack
    Search {
        /// Haystack size
        size: usize,

        /// Index to search for (default: the last element, the worst case)
        #[arg(long, short)]
        target: Option<usize>,
    },

    /// Crack a password by brute force and Grover simulation
    Crack {
        /// Password to crack
        password: String,

        /// Charset to enumerate
        #[arg(long, short, value_parser = parse_charset, default_value = "lower")]
        charset: Charset,

        /// Cracking method
        #[arg(long, short, value_enum, default_value = "both")]
        method: CrackMethod,
    },

    /// Sweep password lengths, timing classical vs quantum cracking
    Compare {
        /// Password lengths to sweep (comma separated)
        #[arg(long, short, value_delimiter = ',')]
        lengths: Option<Vec<u32>>,

        /// Charset to draw passwords from
        #[arg(long, short, value_parser = parse_charset)]
        charset: Option<Charset>,

        /// Write results to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Predict time and space complexity across password lengths
    Predict {
        /// Shortest password length
        #[arg(long, default_value_t = 2)]
        min: u32,

        /// Longest password length
        #[arg(long, default_value_t = 8)]
        max: u32,

        /// Number of distinct symbols in the hypothetical charset
        #[arg(long, default_value_t = 94)]
        charset_size: usize,
    },
}

/// Which cracker(s) a `crack` invocation runs
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackMethod {
    /// Brute-force enumeration only
    Classical,
    /// Grover simulation only
    Quantum,
    /// Both, for side-by-side comparison
    Both,
}
