//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Invalid qubit index
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Invalid state dimension
    #[error("Invalid state dimension {dimension}, expected power of 2")]
    InvalidDimension { dimension: usize },

    /// State not normalized
    #[error("State vector not normalized, norm = {norm}")]
    NotNormalized { norm: f64 },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Register too large to hold in memory
    #[error("Cannot allocate a {num_qubits}-qubit state vector")]
    AllocationError { num_qubits: usize },

    /// The same qubit passed twice to a kernel
    #[error("Qubit {index} appears more than once")]
    DuplicateQubit { index: usize },

    /// Gate matrix of the wrong size for the qubits it acts on
    #[error("Gate matrix has {actual} entries, expected {expected}")]
    InvalidMatrix { expected: usize, actual: usize },

    /// Ket string that could not be parsed
    #[error("Invalid ket '{label}': {reason}")]
    InvalidKet { label: String, reason: String },
}

impl StateError {
    pub(crate) fn invalid_ket(label: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKet {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
