//! The gates a player can place

use crate::matrices;
use num_complex::Complex64;
use qpuzzle_core::Gate;

/// Implements `matrix()` returning the constant table and a flattened copy
macro_rules! impl_matrix_method {
    ($gate_type:ty, $matrix:expr, $size:expr) => {
        impl $gate_type {
            /// The constant gate matrix
            #[inline]
            pub const fn matrix() -> &'static [[Complex64; $size]; $size] {
                $matrix
            }

            #[inline]
            fn matrix_vec() -> Vec<Complex64> {
                matrices::flatten(Self::matrix())
            }
        }
    };
}

/// Identity, leaves the qubit alone
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl Gate for Identity {
    fn name(&self) -> &str {
        "I"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Identity: does nothing to the qubit".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(Identity, &matrices::IDENTITY, 2);

/// Hadamard
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Hadamard: puts |0⟩ into |+⟩ and |1⟩ into |-⟩ (equal superposition)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(Hadamard, &matrices::HADAMARD, 2);

/// Pauli-X, the quantum NOT
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Pauli-X: flips |0⟩ and |1⟩ (quantum NOT)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(PauliX, &matrices::PAULI_X, 2);

/// Pauli-Y
///
/// Bit and phase flip: Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliY;

impl Gate for PauliY {
    fn name(&self) -> &str {
        "Y"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Pauli-Y: flips the bit and adds a phase of ±i".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(PauliY, &matrices::PAULI_Y, 2);

/// Pauli-Z
///
/// Phase flip: Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliZ;

impl Gate for PauliZ {
    fn name(&self) -> &str {
        "Z"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Pauli-Z: negates the |1⟩ amplitude (phase flip)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(PauliZ, &matrices::PAULI_Z, 2);

/// S gate (√Z)
#[derive(Debug, Clone, Copy)]
pub struct SGate;

impl Gate for SGate {
    fn name(&self) -> &str {
        "S"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        "S: multiplies the |1⟩ amplitude by i (quarter turn about Z)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(SGate, &matrices::S_GATE, 2);

/// T gate (√S)
#[derive(Debug, Clone, Copy)]
pub struct TGate;

impl Gate for TGate {
    fn name(&self) -> &str {
        "T"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        "T: multiplies the |1⟩ amplitude by e^(iπ/4) (eighth turn about Z)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(TGate, &matrices::T_GATE, 2);

/// Controlled-NOT
///
/// Flips the target (second qubit) when the control (first qubit) is |1⟩.
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn num_controls(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "CNOT: flips the target qubit when the control qubit is |1⟩".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(CNot, &matrices::CNOT, 4);

/// Controlled-Z
///
/// Symmetric in its two qubits: negates |11⟩.
#[derive(Debug, Clone, Copy)]
pub struct CZ;

impl Gate for CZ {
    fn name(&self) -> &str {
        "CZ"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn num_controls(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "CZ: negates the amplitude when both qubits are |1⟩".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(CZ, &matrices::CZ, 4);

/// Toffoli (CCX)
///
/// Flips the third qubit when both controls are |1⟩.
#[derive(Debug, Clone, Copy)]
pub struct Toffoli;

impl Gate for Toffoli {
    fn name(&self) -> &str {
        "Toffoli"
    }

    fn num_qubits(&self) -> usize {
        3
    }

    fn num_controls(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Toffoli: flips the target qubit when both control qubits are |1⟩".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(Self::matrix_vec())
    }
}

impl_matrix_method!(Toffoli, &matrices::TOFFOLI, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_and_controls() {
        assert_eq!(Hadamard.num_qubits(), 1);
        assert_eq!(Hadamard.num_controls(), 0);
        assert_eq!(CNot.num_qubits(), 2);
        assert_eq!(CNot.num_controls(), 1);
        assert_eq!(Toffoli.num_qubits(), 3);
        assert_eq!(Toffoli.num_controls(), 2);
    }

    #[test]
    fn test_matrix_sizes_match_arity() {
        let gates: [&dyn Gate; 10] = [
            &Identity, &Hadamard, &PauliX, &PauliY, &PauliZ, &SGate, &TGate, &CNot, &CZ,
            &Toffoli,
        ];
        for gate in gates {
            let dim = 1 << gate.num_qubits();
            let matrix = gate.matrix().unwrap();
            assert_eq!(matrix.len(), dim * dim, "{}", gate.name());
        }
    }

    #[test]
    fn test_phase_gates_not_hermitian() {
        assert!(!SGate.is_hermitian());
        assert!(!TGate.is_hermitian());
        assert!(PauliY.is_hermitian());
    }
}
