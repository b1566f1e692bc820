//! Complexity prediction from experimental calibration data
//!
//! Extrapolates cracking times from measured length-2 runs: classical
//! brute force scales with the O(N) search space, the quantum simulation
//! with O(√N) plus a fixed per-character overhead.

use serde::Serialize;

/// Register width per character assumed for space prediction
const QUBITS_PER_CHAR: u32 = 7;

/// Longest password length the crossover search considers
const CROSSOVER_LIMIT: u32 = 20;

/// Predicted time and space requirements for one password length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityPrediction {
    pub password_length: u32,
    /// Predicted classical brute-force time in milliseconds
    pub classical_time_ms: f64,
    /// Predicted quantum search time in milliseconds
    pub quantum_time_ms: f64,
    /// Predicted classical working-set size in bytes
    pub classical_space_bytes: f64,
    /// Predicted quantum register plus control space in bytes
    pub quantum_space_bytes: f64,
}

/// Complexity predictor calibrated from experimental length-2 runs
#[derive(Debug, Clone)]
pub struct ComplexityPredictor {
    charset_size: f64,
    /// Measured classical brute-force time at length 2, in ms
    classical_base_time_ms: f64,
    /// Measured quantum simulation time at length 2, in ms
    quantum_base_time_ms: f64,
    /// Fixed quantum overhead per character, in ms
    quantum_overhead_ms: f64,
}

impl Default for ComplexityPredictor {
    fn default() -> Self {
        // 94 = letters, digits, and punctuation
        Self::new(94)
    }
}

impl ComplexityPredictor {
    pub fn new(charset_size: usize) -> Self {
        ComplexityPredictor {
            charset_size: charset_size as f64,
            classical_base_time_ms: 0.45,
            quantum_base_time_ms: 69.84,
            quantum_overhead_ms: 10.0,
        }
    }

    /// Classical O(N) time, scaled from the length-2 measurement.
    pub fn predict_classical_time(&self, length: u32) -> f64 {
        let scaling = self.classical_base_time_ms / self.charset_size.powi(2);
        scaling * self.charset_size.powi(length as i32)
    }

    /// Quantum O(√N) time plus per-character overhead.
    pub fn predict_quantum_time(&self, length: u32) -> f64 {
        let search_space = self.charset_size.powi(length as i32);
        let scaling = (self.quantum_base_time_ms - self.quantum_overhead_ms * 2.0)
            / self.charset_size.powi(2).sqrt();
        scaling * search_space.sqrt() + self.quantum_overhead_ms * length as f64
    }

    /// Classical working set: the search space times the candidate width.
    pub fn predict_classical_space(&self, length: u32) -> f64 {
        length as f64 * self.charset_size.powi(length as i32)
    }

    /// Quantum state space for the register, plus classical control per
    /// character.
    pub fn predict_quantum_space(&self, length: u32) -> f64 {
        let register = length * QUBITS_PER_CHAR;
        2f64.powi(register as i32) + length as f64 * 32.0
    }

    /// Full prediction for one password length
    pub fn predict(&self, length: u32) -> ComplexityPrediction {
        ComplexityPrediction {
            password_length: length,
            classical_time_ms: self.predict_classical_time(length),
            quantum_time_ms: self.predict_quantum_time(length),
            classical_space_bytes: self.predict_classical_space(length),
            quantum_space_bytes: self.predict_quantum_space(length),
        }
    }

    /// Predictions for an inclusive range of password lengths
    pub fn predict_range(&self, min: u32, max: u32) -> Vec<ComplexityPrediction> {
        (min..=max).map(|length| self.predict(length)).collect()
    }

    /// Password length where quantum search first beats classical, with
    /// the predicted quantum time at that length.
    pub fn find_crossover_point(&self) -> Option<(u32, f64)> {
        for length in 1..=CROSSOVER_LIMIT {
            let prediction = self.predict(length);
            if prediction.quantum_time_ms < prediction.classical_time_ms {
                return Some((length, prediction.quantum_time_ms));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_case_reproduces_calibration() {
        let predictor = ComplexityPredictor::default();
        assert!(close(predictor.predict_classical_time(2), 0.45));
        assert!(close(predictor.predict_quantum_time(2), 69.84));
    }

    #[test]
    fn test_classical_time_scales_linearly_with_space() {
        let predictor = ComplexityPredictor::new(94);
        let t3 = predictor.predict_classical_time(3);
        let t4 = predictor.predict_classical_time(4);
        assert!(close(t4 / t3, 94.0));
    }

    #[test]
    fn test_times_grow_with_length() {
        let predictor = ComplexityPredictor::default();
        let predictions = predictor.predict_range(2, 8);
        assert_eq!(predictions.len(), 7);
        for pair in predictions.windows(2) {
            assert!(pair[0].classical_time_ms < pair[1].classical_time_ms);
            assert!(pair[0].quantum_time_ms < pair[1].quantum_time_ms);
        }
    }

    #[test]
    fn test_crossover_point_for_default_charset() {
        // Classical grows 94x per character, quantum only ~9.7x, so the
        // curves cross at length 5 for the calibration constants.
        let predictor = ComplexityPredictor::default();
        let (length, quantum_time) = predictor.find_crossover_point().unwrap();
        assert_eq!(length, 5);
        assert!(quantum_time > 0.0);
        let prediction = predictor.predict(length);
        assert!(prediction.quantum_time_ms < prediction.classical_time_ms);
    }

    #[test]
    fn test_space_predictions_positive_and_growing() {
        let predictor = ComplexityPredictor::default();
        let p2 = predictor.predict(2);
        let p3 = predictor.predict(3);
        assert!(p2.classical_space_bytes > 0.0);
        assert!(p2.quantum_space_bytes > 0.0);
        assert!(p3.classical_space_bytes > p2.classical_space_bytes);
        assert!(p3.quantum_space_bytes > p2.quantum_space_bytes);
    }
}
