//! Dense quantum state with gate application, measurement and comparison

use crate::error::{Result, StateError};
use crate::kernels;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use std::fmt;

/// Dense quantum state
///
/// # Example
///
/// ```
/// use qpuzzle_state::DenseState;
/// use num_complex::Complex64;
///
/// let mut state = DenseState::new(2).unwrap();
/// let hadamard = [
///     [Complex64::new(0.7071067811865476, 0.0), Complex64::new(0.7071067811865476, 0.0)],
///     [Complex64::new(0.7071067811865476, 0.0), Complex64::new(-0.7071067811865476, 0.0)],
/// ];
/// state.apply_single_qubit_gate(&hadamard, 0).unwrap();
/// state.apply_cnot(0, 1).unwrap();
///
/// assert!((state.get_probability(0b11).unwrap() - 0.5).abs() < 1e-12);
/// assert!(state.is_normalized(1e-10));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseState {
    vector: StateVector,
}

impl DenseState {
    /// Create |0...0⟩
    ///
    /// # Example
    /// ```
    /// use qpuzzle_state::DenseState;
    ///
    /// let state = DenseState::new(3).unwrap();
    /// assert_eq!(state.dimension(), 8);
    /// ```
    pub fn new(num_qubits: usize) -> Result<Self> {
        Ok(Self {
            vector: StateVector::new(num_qubits)?,
        })
    }

    /// Create a computational basis state
    pub fn basis_state(num_qubits: usize, index: usize) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        if index >= state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: index + 1,
            });
        }
        let amps = state.vector.amplitudes_mut();
        amps[0] = Complex64::new(0.0, 0.0);
        amps[index] = Complex64::new(1.0, 0.0);
        Ok(state)
    }

    /// Create a state from amplitudes, normalizing them
    ///
    /// # Errors
    /// Fails if the length is not 2^num_qubits or every amplitude is zero.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut vector = StateVector::from_amplitudes(num_qubits, amplitudes)?;
        let norm = vector.norm();
        if norm < 1e-12 {
            return Err(StateError::NotNormalized { norm });
        }
        vector.normalize();
        Ok(Self { vector })
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.vector.num_qubits()
    }

    /// State dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vector.dimension()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        self.vector.amplitudes()
    }

    /// Amplitude of one basis state
    pub fn amplitude(&self, basis_state: usize) -> Option<Complex64> {
        self.amplitudes().get(basis_state).copied()
    }

    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }

    pub fn is_normalized(&self, epsilon: f64) -> bool {
        self.vector.is_normalized(epsilon)
    }

    pub fn normalize(&mut self) {
        self.vector.normalize();
    }

    /// Reset to |0...0⟩
    pub fn reset(&mut self) {
        self.vector.reset();
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        if qubit >= self.num_qubits() {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits(),
            });
        }
        Ok(())
    }

    fn check_distinct(&self, qubits: &[usize]) -> Result<()> {
        for (i, &q) in qubits.iter().enumerate() {
            self.check_qubit(q)?;
            if qubits[i + 1..].contains(&q) {
                return Err(StateError::DuplicateQubit { index: q });
            }
        }
        Ok(())
    }

    /// Apply a 2×2 gate to `qubit`
    pub fn apply_single_qubit_gate(
        &mut self,
        matrix: &[[Complex64; 2]; 2],
        qubit: usize,
    ) -> Result<()> {
        self.check_qubit(qubit)?;
        kernels::apply_single_qubit(self.vector.amplitudes_mut(), matrix, qubit);
        Ok(())
    }

    /// Apply a 4×4 gate; `first` is the high bit of the matrix index
    pub fn apply_two_qubit_gate(
        &mut self,
        matrix: &[[Complex64; 4]; 4],
        first: usize,
        second: usize,
    ) -> Result<()> {
        self.check_distinct(&[first, second])?;
        kernels::apply_two_qubit(self.vector.amplitudes_mut(), matrix, first, second);
        Ok(())
    }

    /// Apply CNOT
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_distinct(&[control, target])?;
        kernels::apply_controlled_x(self.vector.amplitudes_mut(), &[control], target);
        Ok(())
    }

    /// Apply CZ
    pub fn apply_cz(&mut self, qubit1: usize, qubit2: usize) -> Result<()> {
        self.check_distinct(&[qubit1, qubit2])?;
        kernels::apply_cz(self.vector.amplitudes_mut(), qubit1, qubit2);
        Ok(())
    }

    /// Apply Toffoli
    pub fn apply_toffoli(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.check_distinct(&[control1, control2, target])?;
        kernels::apply_controlled_x(self.vector.amplitudes_mut(), &[control1, control2], target);
        Ok(())
    }

    /// Apply a row-major 2^k × 2^k matrix to `qubits`
    pub fn apply_matrix(&mut self, matrix: &[Complex64], qubits: &[usize]) -> Result<()> {
        self.check_distinct(qubits)?;
        let dim = 1usize << qubits.len();
        if matrix.len() != dim * dim {
            return Err(StateError::InvalidMatrix {
                expected: dim * dim,
                actual: matrix.len(),
            });
        }
        kernels::apply_matrix(self.vector.amplitudes_mut(), matrix, qubits);
        Ok(())
    }

    /// Probability of one basis state
    pub fn get_probability(&self, basis_state: usize) -> Result<f64> {
        self.amplitude(basis_state)
            .map(|a| a.norm_sqr())
            .ok_or(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: basis_state + 1,
            })
    }

    /// Probabilities for all basis states
    pub fn get_all_probabilities(&self) -> Vec<f64> {
        let mut probabilities = vec![0.0; self.dimension()];
        kernels::compute_probabilities(self.amplitudes(), &mut probabilities);
        probabilities
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &DenseState) -> Result<Complex64> {
        if self.dimension() != other.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }

        Ok(self
            .amplitudes()
            .iter()
            .zip(other.amplitudes().iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// |⟨self|other⟩|², insensitive to global phase
    pub fn fidelity(&self, other: &DenseState) -> Result<f64> {
        Ok(self.inner_product(other)?.norm_sqr())
    }

    /// Every amplitude within `tolerance` of the other state's
    pub fn approx_eq(&self, other: &DenseState, tolerance: f64) -> Result<bool> {
        if self.dimension() != other.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(self
            .amplitudes()
            .iter()
            .zip(other.amplitudes())
            .all(|(a, b)| (a - b).norm() <= tolerance))
    }
}

/// Index chosen by a cumulative walk over `probabilities`
///
/// Rounding that leaves `random_value` past the total picks the last state
/// with nonzero probability.
pub(crate) fn sample_index(probabilities: &[f64], random_value: f64) -> usize {
    let mut cumulative = 0.0;
    let mut last_nonzero = 0;
    for (idx, &p) in probabilities.iter().enumerate() {
        if p > 0.0 {
            last_nonzero = idx;
        }
        cumulative += p;
        if random_value < cumulative {
            return idx;
        }
    }
    last_nonzero
}

impl fmt::Display for DenseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::ket::format_state(self, 1e-9))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qpuzzle_gates::matrices;

    fn bell() -> DenseState {
        let mut state = DenseState::new(2).unwrap();
        state.apply_single_qubit_gate(&matrices::HADAMARD, 0).unwrap();
        state.apply_cnot(0, 1).unwrap();
        state
    }

    #[test]
    fn test_bell_state() {
        let state = bell();
        let probs = state.get_all_probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[3], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[1] + probs[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_basis_state() {
        let state = DenseState::basis_state(3, 5).unwrap();
        assert_eq!(state.amplitude(5), Some(Complex64::new(1.0, 0.0)));
        assert_eq!(state.amplitude(0), Some(Complex64::new(0.0, 0.0)));
        assert!(DenseState::basis_state(2, 4).is_err());
    }

    #[test]
    fn test_invalid_qubits() {
        let mut state = DenseState::new(2).unwrap();
        assert!(matches!(
            state.apply_single_qubit_gate(&matrices::PAULI_X, 2),
            Err(StateError::InvalidQubitIndex { index: 2, num_qubits: 2 })
        ));
        assert!(matches!(
            state.apply_cnot(1, 1),
            Err(StateError::DuplicateQubit { index: 1 })
        ));
        assert!(matches!(
            state.apply_matrix(&[Complex64::new(1.0, 0.0); 3], &[0]),
            Err(StateError::InvalidMatrix { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_toffoli() {
        let mut state = DenseState::basis_state(3, 0b011).unwrap();
        state.apply_toffoli(0, 1, 2).unwrap();
        assert_relative_eq!(state.get_probability(0b111).unwrap(), 1.0);
    }

    #[test]
    fn test_from_amplitudes_normalizes() {
        let state =
            DenseState::from_amplitudes(1, &[Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0)])
                .unwrap();
        assert!(state.is_normalized(1e-12));
        assert!(DenseState::from_amplitudes(1, &[Complex64::new(0.0, 0.0); 2]).is_err());
    }

    #[test]
    fn test_sample_index_rounding() {
        assert_eq!(sample_index(&[0.5, 0.5, 0.0], 0.999_999_999_999), 1);
        assert_eq!(sample_index(&[0.5, 0.5, 0.0], 1.0), 1);
        assert_eq!(sample_index(&[0.0, 1.0], 0.0), 1);
    }

    #[test]
    fn test_fidelity_ignores_global_phase() {
        let a = bell();
        let mut b = bell();
        b.apply_single_qubit_gate(&matrices::PAULI_Z, 0).unwrap();
        b.apply_single_qubit_gate(&matrices::PAULI_X, 0).unwrap();
        b.apply_single_qubit_gate(&matrices::PAULI_Z, 0).unwrap();
        b.apply_single_qubit_gate(&matrices::PAULI_X, 0).unwrap();
        // ZXZX = -I
        assert_relative_eq!(a.fidelity(&b).unwrap(), 1.0, epsilon = 1e-12);
        assert!(!a.approx_eq(&b, 1e-9).unwrap());
    }

    #[test]
    fn test_orthogonal_states() {
        let zero = DenseState::new(1).unwrap();
        let one = DenseState::basis_state(1, 1).unwrap();
        assert_relative_eq!(zero.fidelity(&one).unwrap(), 0.0);
    }
}
