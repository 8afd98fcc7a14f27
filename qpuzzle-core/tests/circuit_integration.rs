//! Integration tests for circuits and their rendering

use qpuzzle_core::{AsciiConfig, Circuit, Gate, QuantumError, QubitId};
use std::sync::Arc;

#[derive(Debug)]
struct HadamardGate;

impl Gate for HadamardGate {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}

#[derive(Debug)]
struct CnotGate;

impl Gate for CnotGate {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn num_controls(&self) -> usize {
        1
    }
}

fn bell_circuit() -> Circuit {
    let mut circuit = Circuit::new(2);
    circuit
        .add_gate(Arc::new(HadamardGate), &[QubitId::new(0)])
        .unwrap();
    circuit
        .add_gate(Arc::new(CnotGate), &[QubitId::new(0), QubitId::new(1)])
        .unwrap();
    circuit
}

#[test]
fn test_bell_circuit_structure() {
    let circuit = bell_circuit();
    assert_eq!(circuit.len(), 2);
    assert_eq!(circuit.depth(), 2);

    let cnot = circuit.get_operation(1).unwrap();
    assert_eq!(cnot.controls(), &[QubitId::new(0)]);
    assert_eq!(cnot.targets(), &[QubitId::new(1)]);
}

#[test]
fn test_bell_circuit_drawing() {
    let art = bell_circuit().to_ascii(&AsciiConfig::default());
    let lines: Vec<&str> = art.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("q0: "));
    assert!(lines[0].contains("[H]"));
    assert!(lines[0].contains('●'));
    assert!(lines[2].starts_with("q1: "));
    assert!(lines[2].contains('⊕'));

    // The control dot and the target sit in the same column
    let dot = lines[0].chars().position(|c| c == '●').unwrap();
    let plus = lines[2].chars().position(|c| c == '⊕').unwrap();
    assert_eq!(dot, plus);
}

#[test]
fn test_ascii_drawing_is_plain() {
    let art = bell_circuit().to_ascii(&AsciiConfig::ascii_only());
    assert!(art.is_ascii());
    assert!(art.contains("(+)"));
}

#[test]
fn test_errors_leave_circuit_untouched() {
    let mut circuit = bell_circuit();
    let err = circuit
        .add_gate(Arc::new(CnotGate), &[QubitId::new(1), QubitId::new(1)])
        .unwrap_err();
    assert_eq!(err, QuantumError::DuplicateQubit(QubitId::new(1)));
    assert_eq!(circuit.len(), 2);
}
