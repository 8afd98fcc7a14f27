//! Core types for the qpuzzle quantum puzzle game
//!
//! This crate provides the vocabulary shared by the simulator and the game:
//! - [`QubitId`]: typed qubit addressing
//! - [`Gate`]: trait implemented by every gate
//! - [`GateOp`]: a gate bound to concrete qubits
//! - [`Circuit`]: an ordered list of operations over a fixed register
//!
//! # Example
//! ```
//! use qpuzzle_core::{Circuit, QubitId};
//!
//! let circuit = Circuit::new(2);
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(QubitId::new(1).check(circuit.num_qubits()).is_ok());
//! ```

pub mod ascii_renderer;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use ascii_renderer::{AsciiConfig, RenderStyle};
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Result alias for circuit operations
pub type Result<T> = std::result::Result<T, QuantumError>;
