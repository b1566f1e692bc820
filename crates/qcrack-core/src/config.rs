//! Experiment configuration
//!
//! Optional TOML file tuning `compare` sweeps. Every field has a default,
//! so a missing file or an empty table is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::charset::Charset;
use crate::error::{QcrackError, Result};

/// Configuration for comparison sweeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Password lengths to sweep
    #[serde(default = "default_lengths")]
    pub lengths: Vec<u32>,

    /// Charset passwords are drawn from
    #[serde(default)]
    pub charset: Charset,

    /// Longest password the classical cracker is timed on; beyond this
    /// the sweep records only the quantum side
    #[serde(default = "default_max_brute_length")]
    pub max_brute_length: u32,

    /// Directory for CSV exports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            lengths: default_lengths(),
            charset: Charset::default(),
            max_brute_length: default_max_brute_length(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_lengths() -> Vec<u32> {
    vec![2, 3, 4, 5]
}

fn default_max_brute_length() -> u32 {
    6
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

impl ExperimentConfig {
    /// Load from a TOML file; `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(ExperimentConfig::default());
        };

        let raw = fs::read_to_string(path).map_err(|e| QcrackError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| QcrackError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
