//! Shared helpers for command implementations

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Install a Ctrl-C handler and return the flag it flips.
///
/// The handler can only be installed once per process; later calls keep
/// the existing handler and the returned flag simply stays false.
pub fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    });

    interrupted
}
