//! Gate trait and gate operations

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A quantum gate
///
/// Gates are stateless and shared between circuits through `Arc<dyn Gate>`.
/// Controlled gates list their control qubits first and the target last,
/// and report how many leading qubits are controls through
/// [`Gate::num_controls`].
///
/// # Example
/// ```
/// use qpuzzle_core::Gate;
///
/// #[derive(Debug)]
/// struct Flip;
///
/// impl Gate for Flip {
///     fn name(&self) -> &str { "X" }
///     fn num_qubits(&self) -> usize { 1 }
/// }
///
/// assert_eq!(Flip.description(), "1-qubit gate 'X'");
/// ```
pub trait Gate: Send + Sync + fmt::Debug {
    /// Gate symbol as the player types it ("H", "CNOT", ...)
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Number of leading qubits that act as controls
    fn num_controls(&self) -> usize {
        0
    }

    /// Whether the gate is its own inverse
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Human readable description
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }

    /// Row-major unitary of dimension 2^n × 2^n
    ///
    /// Textbook ordering: the first qubit passed to [`GateOp::new`] is the
    /// most significant bit of the row and column index, so CNOT(control,
    /// target) has its `X` block in the lower right. Gates without a matrix
    /// return `None`.
    fn matrix(&self) -> Option<Vec<Complex64>> {
        None
    }
}

/// A gate bound to concrete qubits
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 3]>,
}

impl GateOp {
    /// Bind a gate to qubits
    ///
    /// # Errors
    /// Fails when the number of qubits does not match the gate's arity or a
    /// qubit appears twice.
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for (i, q) in qubits.iter().enumerate() {
            if qubits[i + 1..].contains(q) {
                return Err(QuantumError::DuplicateQubit(*q));
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// The gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Gate symbol
    #[inline]
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// All qubits, controls first
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Control qubits (empty for uncontrolled gates)
    pub fn controls(&self) -> &[QubitId] {
        &self.qubits[..self.gate.num_controls()]
    }

    /// Qubits the gate acts on once the controls are satisfied
    pub fn targets(&self) -> &[QubitId] {
        &self.qubits[self.gate.num_controls()..]
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Highest qubit index touched by this operation
    pub fn max_qubit(&self) -> usize {
        self.qubits.iter().map(|q| q.index()).max().unwrap_or(0)
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockGate {
        name: &'static str,
        num_qubits: usize,
        num_controls: usize,
    }

    impl Gate for MockGate {
        fn name(&self) -> &str {
            self.name
        }

        fn num_qubits(&self) -> usize {
            self.num_qubits
        }

        fn num_controls(&self) -> usize {
            self.num_controls
        }
    }

    fn mock(name: &'static str, num_qubits: usize, num_controls: usize) -> Arc<dyn Gate> {
        Arc::new(MockGate {
            name,
            num_qubits,
            num_controls,
        })
    }

    #[test]
    fn test_gate_op_creation() {
        let op = GateOp::new(mock("H", 1, 0), &[QubitId::new(0)]).unwrap();
        assert_eq!(op.num_qubits(), 1);
        assert_eq!(op.qubits()[0], QubitId::new(0));
        assert!(op.controls().is_empty());
        assert_eq!(op.targets(), &[QubitId::new(0)]);
    }

    #[test]
    fn test_gate_op_wrong_arity() {
        let result = GateOp::new(mock("CNOT", 2, 1), &[QubitId::new(0)]);
        assert!(matches!(
            result,
            Err(QuantumError::InvalidQubitCount { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_gate_op_duplicate_qubit() {
        let q = QubitId::new(1);
        let result = GateOp::new(mock("CNOT", 2, 1), &[q, q]);
        assert!(matches!(result, Err(QuantumError::DuplicateQubit(d)) if d == q));
    }

    #[test]
    fn test_controls_and_targets() {
        let qubits = [QubitId::new(2), QubitId::new(0), QubitId::new(1)];
        let op = GateOp::new(mock("Toffoli", 3, 2), &qubits).unwrap();
        assert_eq!(op.controls(), &qubits[..2]);
        assert_eq!(op.targets(), &qubits[2..]);
        assert_eq!(op.max_qubit(), 2);
    }

    #[test]
    fn test_gate_op_display() {
        let op = GateOp::new(mock("CZ", 2, 1), &[QubitId::new(0), QubitId::new(1)]).unwrap();
        assert_eq!(op.to_string(), "CZ(q0, q1)");
    }
}
