//! Computational basis sampling

use crate::dense_state::{sample_index, DenseState};
use crate::ket;
use std::collections::BTreeMap;

/// Counts from repeated measurement of every qubit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingResult {
    /// Basis state index to count
    pub counts: BTreeMap<usize, usize>,

    /// Total number of shots
    pub shots: usize,

    num_qubits: usize,
}

impl SamplingResult {
    pub fn new(num_qubits: usize, shots: usize) -> Self {
        Self {
            counts: BTreeMap::new(),
            shots,
            num_qubits,
        }
    }

    pub fn add_outcome(&mut self, outcome: usize) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    pub fn get_count(&self, outcome: usize) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Observed frequency of an outcome
    pub fn get_probability(&self, outcome: usize) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get_count(outcome) as f64 / self.shots as f64
    }

    /// Outcomes by descending count, ties by index
    pub fn sorted_outcomes(&self) -> Vec<(usize, usize)> {
        let mut outcomes: Vec<_> = self.counts.iter().map(|(&k, &v)| (k, v)).collect();
        outcomes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        outcomes
    }

    /// Counts keyed by bitstring, qubit 0 first
    pub fn to_bitstring_counts(&self) -> BTreeMap<String, usize> {
        self.counts
            .iter()
            .map(|(&outcome, &count)| (ket::bitstring(outcome, self.num_qubits), count))
            .collect()
    }
}

/// Measures all qubits in the Z basis without disturbing the state
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputationalBasis;

impl ComputationalBasis {
    /// Draw `shots` outcomes; `rng` yields uniform values in [0, 1)
    pub fn sample(
        &self,
        state: &DenseState,
        shots: usize,
        rng: &mut dyn FnMut() -> f64,
    ) -> SamplingResult {
        let probabilities = state.get_all_probabilities();
        let mut result = SamplingResult::new(state.num_qubits(), shots);
        for _ in 0..shots {
            result.add_outcome(sample_index(&probabilities, rng()));
        }
        result
    }
}
