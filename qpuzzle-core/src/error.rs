//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors raised while building or validating a circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    /// Qubit index outside the register
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to the wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Register with no qubits
    #[error("Circuit must have at least one qubit")]
    EmptyCircuit,

    /// The same qubit used twice by one gate
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Gate symbol that no gate answers to
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Any other validation failure
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }
}
