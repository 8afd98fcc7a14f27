//! Applies circuit operations to a dense state

use num_complex::Complex64;
use qpuzzle_core::{Circuit, GateOp};
use qpuzzle_state::DenseState;

use crate::error::{Result, SimulatorError};

/// Apply every operation of `circuit` in order
pub fn execute(circuit: &Circuit, state: &mut DenseState) -> Result<()> {
    for (index, op) in circuit.operations().enumerate() {
        apply_operation(state, op, index)?;
    }
    Ok(())
}

/// Apply one operation
///
/// CNOT, CZ and Toffoli use dedicated kernels; every other gate goes through
/// its matrix.
pub fn apply_operation(state: &mut DenseState, op: &GateOp, index: usize) -> Result<()> {
    let qubits: Vec<usize> = op.qubits().iter().map(|q| q.index()).collect();
    let failed = |err: qpuzzle_state::StateError| SimulatorError::GateApplicationFailed {
        gate_index: index,
        reason: format!("{}: {}", op, err),
    };

    match (op.name(), qubits.as_slice()) {
        ("CNOT", &[control, target]) => state.apply_cnot(control, target).map_err(failed),
        ("CZ", &[a, b]) => state.apply_cz(a, b).map_err(failed),
        ("Toffoli", &[c1, c2, target]) => state.apply_toffoli(c1, c2, target).map_err(failed),
        _ => {
            let matrix = op.gate().matrix().ok_or_else(|| SimulatorError::UnsupportedGate {
                gate_index: index,
                gate: op.name().to_string(),
            })?;
            match qubits.as_slice() {
                &[q] if matrix.len() == 4 => state
                    .apply_single_qubit_gate(&to_2x2(&matrix), q)
                    .map_err(failed),
                &[first, second] if matrix.len() == 16 => state
                    .apply_two_qubit_gate(&to_4x4(&matrix), first, second)
                    .map_err(failed),
                // Any other arity, for gates without a dedicated kernel
                _ => state.apply_matrix(&matrix, &qubits).map_err(failed),
            }
        }
    }
}

fn to_2x2(m: &[Complex64]) -> [[Complex64; 2]; 2] {
    [[m[0], m[1]], [m[2], m[3]]]
}

fn to_4x4(m: &[Complex64]) -> [[Complex64; 4]; 4] {
    let mut out = [[Complex64::new(0.0, 0.0); 4]; 4];
    for (i, row) in out.iter_mut().enumerate() {
        row.copy_from_slice(&m[i * 4..i * 4 + 4]);
    }
    out
}
