//! Brute-force password cracking
//!
//! Systematically generates and tests every candidate of the target's
//! length until a match. Effective for short passwords; the search space
//! grows as charset_len^length, so callers should cap the length they
//! hand to this function.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::charset::Charset;
use crate::error::{QcrackError, Result};

use super::{validate_target, CrackOutcome};

/// Candidates tried between interrupt checks and progress events
const CHECK_INTERVAL: u64 = 1 << 20;

/// Enumerate every candidate of the target's length until a match.
///
/// Candidates advance odometer-style with the rightmost position fastest,
/// so attempt counts are deterministic for a given target and charset.
/// When `interrupt` is set (a Ctrl-C handler flips it), the run stops at
/// the next check with `Interrupted`.
pub fn brute_force_crack(
    target: &str,
    charset: Charset,
    interrupt: Option<&AtomicBool>,
) -> Result<CrackOutcome> {
    validate_target(target, charset)?;

    let symbols = charset.symbols();
    let length = target.len();
    let target_bytes = target.as_bytes();

    let mut wheels = vec![0usize; length];
    let mut candidate = vec![symbols[0]; length];
    let mut attempts = 0u64;

    loop {
        attempts += 1;
        if candidate == target_bytes {
            tracing::debug!(attempts, "brute force match");
            return Ok(CrackOutcome {
                password: Some(target.to_string()),
                attempts,
                qubits: None,
            });
        }

        if attempts % CHECK_INTERVAL == 0 {
            if let Some(flag) = interrupt {
                if flag.load(Ordering::SeqCst) {
                    return Err(QcrackError::Interrupted);
                }
            }
            tracing::debug!(attempts, "brute force progress");
        }

        // Advance the rightmost wheel, carrying left.
        let mut pos = length;
        loop {
            if pos == 0 {
                // Wheels wrapped: the whole space has been enumerated.
                return Ok(CrackOutcome {
                    password: None,
                    attempts,
                    qubits: None,
                });
            }
            pos -= 1;
            wheels[pos] += 1;
            if wheels[pos] < symbols.len() {
                candidate[pos] = symbols[wheels[pos]];
                break;
            }
            wheels[pos] = 0;
            candidate[pos] = symbols[0];
        }
    }
}
