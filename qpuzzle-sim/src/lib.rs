//! Statevector simulator for qpuzzle circuits
//!
//! [`Simulator`] runs a [`qpuzzle_core::Circuit`] on a dense state, either
//! from |0...0⟩ or from a caller-supplied input state, and can sample
//! measurement counts with an optional fixed seed.
//!
//! # Example
//!
//! ```
//! use qpuzzle_sim::{Simulator, SimulatorConfig};
//! use qpuzzle_core::{Circuit, QubitId};
//! use qpuzzle_gates::PauliX;
//! use qpuzzle_state::ket::parse_ket;
//! use std::sync::Arc;
//!
//! let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
//! let mut circuit = Circuit::new(1);
//! circuit.add_gate(Arc::new(PauliX), &[QubitId::new(0)]).unwrap();
//!
//! let input = parse_ket("|+⟩", 1).unwrap();
//! let result = simulator.run_from(&circuit, &input).unwrap();
//! assert!(result.state.fidelity(&input).unwrap() > 0.999);
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod result;
pub mod simulator;

pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use result::{MeasurementCounts, SimulationResult};
pub use simulator::Simulator;
