//! Error types and exit codes for qcrack
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid config file)

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using QcrackError
pub type Result<T> = std::result::Result<T, QcrackError>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid config file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors produced by qcrack operations
#[derive(Error, Debug)]
pub enum QcrackError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown charset: {0} (expected: lower, lower16, alnum, or printable)")]
    UnknownCharset(String),

    #[error("invalid size: {value} (expected a non-negative number)")]
    InvalidSize { value: f64 },

    #[error("target password cannot be empty")]
    EmptyTarget,

    #[error("character {ch:?} is not in the {charset} charset")]
    CharsetMismatch { ch: char, charset: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("search space overflow: {charset_len}^{length} exceeds the supported range")]
    SearchSpaceOverflow { charset_len: usize, length: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl QcrackError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            QcrackError::UnknownFormat(_)
            | QcrackError::UnknownCharset(_)
            | QcrackError::InvalidSize { .. }
            | QcrackError::EmptyTarget
            | QcrackError::CharsetMismatch { .. }
            | QcrackError::UsageError(_) => ExitCode::Usage,

            // Data errors
            QcrackError::InvalidConfig { .. } => ExitCode::Data,

            // Generic failures
            QcrackError::SearchSpaceOverflow { .. }
            | QcrackError::Io(_)
            | QcrackError::Json(_)
            | QcrackError::Interrupted
            | QcrackError::Other(_) => ExitCode::Failure,
        }
    }

    /// Machine-readable error type tag for the JSON envelope
    pub fn error_type(&self) -> &'static str {
        match self {
            QcrackError::UnknownFormat(_) => "unknown_format",
            QcrackError::UnknownCharset(_) => "unknown_charset",
            QcrackError::InvalidSize { .. } => "invalid_size",
            QcrackError::EmptyTarget => "empty_target",
            QcrackError::CharsetMismatch { .. } => "charset_mismatch",
            QcrackError::UsageError(_) => "usage_error",
            QcrackError::InvalidConfig { .. } => "invalid_config",
            QcrackError::SearchSpaceOverflow { .. } => "search_space_overflow",
            QcrackError::Io(_) => "io_error",
            QcrackError::Json(_) => "json_error",
            QcrackError::Interrupted => "interrupted",
            QcrackError::Other(_) => "other",
        }
    }

    /// Serialize this error as a JSON envelope for `--format json` callers
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}
