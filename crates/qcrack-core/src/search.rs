//! Step-counted search simulations
//!
//! `linear_search` walks the haystack and reports exactly how many probes
//! it made. `grover_search` charges the theoretical Grover query count for
//! the haystack size; the index is located classically for demonstration,
//! since no quantum hardware is involved.

use crate::cost;

/// Result of a simulated search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Index of the first match, if any
    pub index: Option<usize>,
    /// Steps (probes or oracle queries) charged to the search
    pub steps: u64,
}

/// Classical linear search, counting one step per probed element.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> SearchOutcome {
    let mut steps = 0u64;
    for (i, item) in items.iter().enumerate() {
        steps += 1;
        if item == target {
            return SearchOutcome {
                index: Some(i),
                steps,
            };
        }
    }
    SearchOutcome { index: None, steps }
}

/// Simulated Grover search over an unstructured haystack.
pub fn grover_search<T: PartialEq>(items: &[T], target: &T) -> SearchOutcome {
    let steps = cost::grover_iterations(items.len() as u128);
    let index = items.iter().position(|item| item == target);
    SearchOutcome { index, steps }
}
