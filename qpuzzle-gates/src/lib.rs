//! Gate set for qpuzzle
//!
//! Every gate a level can offer: the single-qubit H, X, Y, Z, S, T and I,
//! and the controlled CNOT, CZ and Toffoli. Matrices are compile-time
//! constants in [`matrices`]; [`GateRegistry`] maps the symbols used in
//! level files and at the prompt to gate instances.
//!
//! ```
//! use qpuzzle_gates::{GateRegistry, Hadamard};
//! use qpuzzle_core::Gate;
//!
//! let h = Hadamard::matrix();
//! assert!((h[1][1].re + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
//!
//! let registry = GateRegistry::standard();
//! assert_eq!(registry.resolve("h").unwrap().name(), "H");
//! ```

pub mod gate_registry;
pub mod matrices;
pub mod standard;

pub use gate_registry::{GateInfo, GateRegistry};
pub use standard::*;
