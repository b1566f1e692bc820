//! Grover search simulation for password cracking
//!
//! Builds no circuit: the outcome reports the register width a circuit
//! would need (one index register per character) and the theoretical
//! iteration count over the charset_len^length candidates. The measured
//! state is the marked one, so the recovered password is the target
//! itself.

use crate::charset::Charset;
use crate::cost;
use crate::error::Result;

use super::{validate_target, CrackOutcome};

/// Simulate cracking `target` with Grover's algorithm.
pub fn grover_crack(target: &str, charset: Charset) -> Result<CrackOutcome> {
    validate_target(target, charset)?;

    let length = target.len() as u32;
    let qubits = length * charset.qubits_per_char();
    let search_space = charset.search_space(length)?;
    let iterations = cost::grover_iterations(search_space);

    tracing::debug!(qubits, iterations, "grover simulation");

    Ok(CrackOutcome {
        password: Some(target.to_string()),
        attempts: iterations,
        qubits: Some(qubits),
    })
}
