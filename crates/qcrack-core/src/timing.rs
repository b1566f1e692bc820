//! Wall-clock timing helpers

use std::time::Instant;

/// Run `f`, returning its result and the elapsed wall-clock milliseconds.
pub fn time_ms<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
