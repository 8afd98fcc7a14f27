//! Error types for the game layer

use qpuzzle_core::QuantumError;
use qpuzzle_sim::SimulatorError;
use qpuzzle_state::StateError;
use std::path::PathBuf;
use thiserror::Error;

/// A placement the player is not allowed to make
///
/// These are reported back as an invalid move; none of them end the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    #[error("Gate {gate} is not available here (allowed: {allowed})")]
    GateNotAllowed { gate: String, allowed: String },

    #[error("{gate} needs {expected} qubit(s), got {actual}")]
    WrongArity {
        gate: String,
        expected: usize,
        actual: usize,
    },

    #[error("Qubit {qubit} does not exist, this circuit has qubits 0 to {max}")]
    QubitOutOfRange { qubit: usize, max: usize },

    #[error("{gate} cannot use qubit {qubit} twice")]
    DuplicateQubit { gate: String, qubit: usize },

    #[error("Gate limit reached ({max} gates)")]
    BudgetExhausted { max: usize },

    #[error("Add some gates first")]
    EmptySequence,

    #[error("{0}")]
    Rejected(String),
}

/// Errors raised by the game layer
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Cannot read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Level file is not a JSON array of levels: {0}")]
    Format(#[from] serde_json::Error),

    #[error("No playable levels")]
    NoLevels,

    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    #[error("Qubit count must be between 1 and {max}, got {actual}")]
    QubitCount { actual: usize, max: usize },

    #[error("Invalid game configuration: {0}")]
    Config(String),

    #[error(transparent)]
    InvalidMove(#[from] MoveError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Circuit(#[from] QuantumError),

    #[error(transparent)]
    Simulation(#[from] SimulatorError),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::EmptySequence.to_string(), "Add some gates first");
        let err = MoveError::QubitOutOfRange { qubit: 3, max: 1 };
        assert_eq!(
            err.to_string(),
            "Qubit 3 does not exist, this circuit has qubits 0 to 1"
        );
        let err = MoveError::GateNotAllowed {
            gate: "T".into(),
            allowed: "H, X".into(),
        };
        assert!(err.to_string().contains("allowed: H, X"));
    }

    #[test]
    fn test_move_error_converts() {
        let err: GameError = MoveError::BudgetExhausted { max: 2 }.into();
        assert!(matches!(err, GameError::InvalidMove(MoveError::BudgetExhausted { max: 2 })));
        assert_eq!(err.to_string(), "Gate limit reached (2 gates)");
    }
}
