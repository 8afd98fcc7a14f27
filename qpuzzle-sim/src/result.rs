//! Simulation result types

use qpuzzle_state::{DenseState, SamplingResult};
use std::collections::BTreeMap;

/// Result of a quantum circuit simulation
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Final quantum state after all gates have been applied
    pub state: DenseState,
}

impl SimulationResult {
    pub fn new(state: DenseState) -> Self {
        Self { state }
    }

    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Exact outcome probabilities of the final state
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.get_all_probabilities()
    }
}

/// Measurement outcome counts
///
/// Maps bitstrings, written with qubit 0 first, to the number of times they
/// were observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCounts {
    counts: BTreeMap<String, usize>,
    total_shots: usize,
}

impl MeasurementCounts {
    pub fn get(&self, bitstring: &str) -> usize {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Observed frequency of a bitstring
    pub fn probability(&self, bitstring: &str) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.get(bitstring) as f64 / self.total_shots as f64
        }
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn total_shots(&self) -> usize {
        self.total_shots
    }

    /// Outcomes sorted by frequency (descending), ties by bitstring
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self
            .counts
            .iter()
            .map(|(bs, &count)| (bs.as_str(), count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        sorted
    }
}

impl From<SamplingResult> for MeasurementCounts {
    fn from(sampling: SamplingResult) -> Self {
        Self {
            counts: sampling.to_bitstring_counts(),
            total_shots: sampling.shots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(num_qubits: usize, outcomes: &[(usize, usize)]) -> MeasurementCounts {
        let shots = outcomes.iter().map(|(_, n)| n).sum();
        let mut sampling = SamplingResult::new(num_qubits, shots);
        for &(outcome, n) in outcomes {
            for _ in 0..n {
                sampling.add_outcome(outcome);
            }
        }
        MeasurementCounts::from(sampling)
    }

    #[test]
    fn test_measurement_counts_basic() {
        // index 0b10 sets qubit 1, written "01"
        let counts = counts_of(2, &[(0b00, 50), (0b10, 30), (0b11, 20)]);

        assert_eq!(counts.get("00"), 50);
        assert_eq!(counts.get("01"), 30);
        assert_eq!(counts.get("10"), 0);
        assert_eq!(counts.total_shots(), 100);
        assert_eq!(counts.counts().len(), 3);
        assert!((counts.probability("01") - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_sorted_by_frequency() {
        let counts = counts_of(2, &[(0b00, 10), (0b01, 30), (0b10, 60), (0b11, 30)]);
        let order: Vec<_> = counts.sorted().into_iter().map(|(bs, _)| bs).collect();
        assert_eq!(order, vec!["01", "10", "11", "00"]);
    }

    #[test]
    fn test_empty_counts() {
        let counts = counts_of(1, &[]);
        assert_eq!(counts.probability("0"), 0.0);
        assert!(counts.sorted().is_empty());
    }
}
