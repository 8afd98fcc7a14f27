//! Quantum circuit container

use crate::gate::Gate;
use crate::{GateOp, QuantumError, QubitId, Result};
use std::sync::Arc;

/// An ordered list of gate operations over a fixed register
///
/// # Example
/// ```
/// use qpuzzle_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert!(circuit.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0. Use [`Circuit::try_new`] for input that
    /// has not been validated.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create an empty circuit, rejecting a zero-qubit register
    pub fn try_new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QuantumError::EmptyCircuit);
        }
        Ok(Self::new(num_qubits))
    }

    /// Number of qubits in the register
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of operations
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// True when no gate has been placed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a gate on the given qubits
    ///
    /// # Errors
    /// Fails if a qubit is outside the register, the arity is wrong, or a
    /// qubit is repeated.
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        let op = GateOp::new(gate, qubits)?;
        self.push(op)
    }

    /// Append an already bound operation
    pub fn push(&mut self, op: GateOp) -> Result<()> {
        for &qubit in op.qubits() {
            qubit.check(self.num_qubits)?;
        }
        self.operations.push(op);
        Ok(())
    }

    /// Remove and return the last operation
    pub fn pop(&mut self) -> Option<GateOp> {
        self.operations.pop()
    }

    /// Iterate over operations in application order
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Operation at `index`
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Remove every operation
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Number of layers when gates on disjoint qubits share a layer
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.num_qubits];
        for op in &self.operations {
            let next = op
                .qubits()
                .iter()
                .map(|q| layer[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in op.qubits() {
                layer[q.index()] = next;
            }
        }
        layer.into_iter().max().unwrap_or(0)
    }

    /// Check every operation against the register size
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            if op.max_qubit() >= self.num_qubits {
                return Err(QuantumError::ValidationError(format!(
                    "Operation {} ({}) uses a qubit outside the {}-qubit register",
                    i, op, self.num_qubits
                )));
            }
        }
        Ok(())
    }

    /// Render as ASCII art
    pub fn to_ascii(&self, config: &crate::AsciiConfig) -> String {
        crate::ascii_renderer::render_with_config(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockGate(&'static str, usize);

    impl Gate for MockGate {
        fn name(&self) -> &str {
            self.0
        }

        fn num_qubits(&self) -> usize {
            self.1
        }
    }

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(2);
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.len(), 0);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_zero_qubits_panics() {
        Circuit::new(0);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert_eq!(Circuit::try_new(0).unwrap_err(), QuantumError::EmptyCircuit);
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = Circuit::new(2);
        let err = circuit
            .add_gate(Arc::new(MockGate("H", 1)), &[QubitId::new(2)])
            .unwrap_err();
        assert_eq!(err, QuantumError::InvalidQubit(2, 2));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_push_pop_clear() {
        let mut circuit = Circuit::new(2);
        let h: Arc<dyn Gate> = Arc::new(MockGate("H", 1));
        circuit.add_gate(h.clone(), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(h, &[QubitId::new(1)]).unwrap();
        assert_eq!(circuit.len(), 2);

        let last = circuit.pop().unwrap();
        assert_eq!(last.qubits(), &[QubitId::new(1)]);
        assert_eq!(circuit.len(), 1);

        circuit.clear();
        assert!(circuit.is_empty());
        assert!(circuit.pop().is_none());
    }

    #[test]
    fn test_depth_packs_disjoint_gates() {
        let mut circuit = Circuit::new(3);
        let h: Arc<dyn Gate> = Arc::new(MockGate("H", 1));
        let cx: Arc<dyn Gate> = Arc::new(MockGate("CNOT", 2));
        circuit.add_gate(h.clone(), &[QubitId::new(0)]).unwrap();
        circuit.add_gate(h, &[QubitId::new(2)]).unwrap();
        circuit
            .add_gate(cx.clone(), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();
        circuit
            .add_gate(cx, &[QubitId::new(1), QubitId::new(2)])
            .unwrap();
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.depth(), 3);
        assert!(circuit.validate().is_ok());
    }
}
