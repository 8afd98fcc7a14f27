//! Amplitude storage

use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Largest register a state vector will allocate
pub const MAX_STATE_QUBITS: usize = 24;

/// Owned vector of 2^n complex amplitudes
///
/// Amplitude `i` belongs to the basis state whose bit `k` is the value of
/// qubit `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Allocate |0...0⟩
    ///
    /// # Errors
    /// Fails for zero qubits or more than [`MAX_STATE_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        let dimension = Self::dimension_for(num_qubits)?;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Copy amplitudes into a new vector
    ///
    /// The amplitudes are taken as given; callers normalize if they need to.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let dimension = Self::dimension_for(num_qubits)?;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    fn dimension_for(num_qubits: usize) -> Result<usize> {
        if num_qubits == 0 {
            return Err(StateError::InvalidDimension { dimension: 1 });
        }
        if num_qubits > MAX_STATE_QUBITS {
            return Err(StateError::AllocationError { num_qubits });
        }
        Ok(1 << num_qubits)
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit norm; a zero vector is left untouched
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-15 {
            let inv = 1.0 / norm;
            for amp in &mut self.amplitudes {
                *amp *= inv;
            }
        }
    }

    /// Check |norm - 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Back to |0...0⟩
    pub fn reset(&mut self) {
        for amp in &mut self.amplitudes {
            *amp = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }
}
