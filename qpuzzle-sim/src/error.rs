//! Error types for the simulator

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors that can occur during simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Circuit is invalid or malformed
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Register larger than the configured limit
    #[error("Too many qubits: circuit has {num_qubits}, max supported is {max_qubits}")]
    TooManyQubits {
        num_qubits: usize,
        max_qubits: usize,
    },

    /// Initial state and circuit disagree on the register size
    #[error("Circuit has {circuit_qubits} qubits but the initial state has {state_qubits}")]
    RegisterMismatch {
        circuit_qubits: usize,
        state_qubits: usize,
    },

    #[error("State initialization failed: {0}")]
    StateInitializationFailed(String),

    /// Gate has no matrix and no dedicated kernel
    #[error("Gate {gate_index} ({gate}) cannot be simulated")]
    UnsupportedGate {
        gate_index: usize,
        gate: String,
    },

    #[error("Gate {gate_index} application failed: {reason}")]
    GateApplicationFailed {
        gate_index: usize,
        reason: String,
    },
}

impl From<qpuzzle_core::QuantumError> for SimulatorError {
    fn from(err: qpuzzle_core::QuantumError) -> Self {
        SimulatorError::InvalidCircuit(err.to_string())
    }
}

impl From<qpuzzle_state::StateError> for SimulatorError {
    fn from(err: qpuzzle_state::StateError) -> Self {
        SimulatorError::StateInitializationFailed(err.to_string())
    }
}
