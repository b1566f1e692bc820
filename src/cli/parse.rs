//! Value parsers for clap arguments

use qcrack_core::charset::Charset;
use qcrack_core::format::OutputFormat;

/// Parse an output format name
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: qcrack_core::error::QcrackError| e.to_string())
}

/// Parse a charset name
pub fn parse_charset(s: &str) -> Result<Charset, String> {
    s.parse().map_err(|e: qcrack_core::error::QcrackError| e.to_string())
}
