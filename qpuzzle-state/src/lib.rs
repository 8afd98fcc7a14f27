//! Quantum states for qpuzzle
//!
//! A [`DenseState`] holds 2^n amplitudes; amplitude index bit `k` is qubit
//! `k`. Gates are applied with the scalar kernels in [`kernels`], states are
//! written and read in ket notation through [`ket`], and
//! [`ComputationalBasis`] samples measurement outcomes.
//!
//! # Example
//!
//! ```
//! use qpuzzle_state::{ket, DenseState};
//!
//! let input = ket::parse_ket("|00⟩", 2).unwrap();
//! let target = ket::parse_ket("|Φ+⟩", 2).unwrap();
//! assert!(input.fidelity(&target).unwrap() < 0.51);
//! ```

pub mod dense_state;
pub mod error;
pub mod kernels;
pub mod ket;
pub mod measurement;
pub mod state_vector;

pub use dense_state::DenseState;
pub use error::{Result, StateError};
pub use ket::{basis_label, format_state, identify, parse_ket};
pub use measurement::{ComputationalBasis, SamplingResult};
pub use state_vector::{StateVector, MAX_STATE_QUBITS};
