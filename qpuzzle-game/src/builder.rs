//! Player-driven circuit construction
//!
//! [`CircuitBuilder`] keeps the ordered list of gates the player has placed
//! and refuses any placement that breaks the current [`Constraints`], so the
//! circuit it produces can always be handed to the simulator.

use crate::error::MoveError;
use qpuzzle_core::{AsciiConfig, Circuit, GateOp, QuantumError, QubitId};
use qpuzzle_gates::GateRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One gate choice: a symbol and its qubits, controls first
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GatePlacement {
    pub gate: String,
    pub qubits: Vec<usize>,
}

impl GatePlacement {
    pub fn new(gate: impl Into<String>, qubits: &[usize]) -> Self {
        Self {
            gate: gate.into(),
            qubits: qubits.to_vec(),
        }
    }
}

impl fmt::Display for GatePlacement {
    /// `CNOT 0 1`, the same form the player types
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.gate)?;
        for q in &self.qubits {
            write!(f, " {}", q)?;
        }
        Ok(())
    }
}

/// Rules a placement has to satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub num_qubits: usize,
    /// Canonical gate symbols, `None` allows every registered gate
    pub allowed: Option<Vec<String>>,
    /// Gate budget, `None` for unlimited
    pub max_gates: Option<usize>,
}

impl Constraints {
    /// Any gate, no budget
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            allowed: None,
            max_gates: None,
        }
    }

    pub fn with_allowed<I, S>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(gates.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_gates(mut self, max_gates: usize) -> Self {
        self.max_gates = Some(max_gates);
        self
    }

    fn allows(&self, canonical: &str) -> bool {
        self.allowed
            .as_ref()
            .map_or(true, |gates| gates.iter().any(|g| g == canonical))
    }
}

/// Ordered gate sequence under construction
#[derive(Debug, Clone)]
pub struct CircuitBuilder {
    constraints: Constraints,
    registry: GateRegistry,
    placements: Vec<GatePlacement>,
    ops: Vec<GateOp>,
}

impl CircuitBuilder {
    pub fn new(constraints: Constraints, registry: GateRegistry) -> Self {
        Self {
            constraints,
            registry,
            placements: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Builder with any standard gate on `num_qubits` qubits and no budget
    pub fn free(num_qubits: usize) -> Self {
        Self::new(Constraints::new(num_qubits), GateRegistry::standard())
    }

    /// Rebuild a builder from a stored sequence, checking every step
    pub fn from_placements(
        constraints: Constraints,
        registry: GateRegistry,
        placements: &[GatePlacement],
    ) -> Result<Self, MoveError> {
        let mut builder = Self::new(constraints, registry);
        for placement in placements {
            builder.place(&placement.gate, &placement.qubits)?;
        }
        Ok(builder)
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn num_qubits(&self) -> usize {
        self.constraints.num_qubits
    }

    /// Append a gate
    ///
    /// The symbol is matched case-insensitively and stored under its
    /// canonical name (`cx` becomes `CNOT`). Nothing is recorded when the
    /// placement is rejected.
    pub fn place(&mut self, symbol: &str, qubits: &[usize]) -> Result<&GatePlacement, MoveError> {
        if let Some(max) = self.constraints.max_gates {
            if self.ops.len() >= max {
                return Err(MoveError::BudgetExhausted { max });
            }
        }

        let gate = self
            .registry
            .get(symbol)
            .ok_or_else(|| MoveError::UnknownGate(symbol.trim().to_string()))?;
        let name = gate.name().to_string();

        if !self.constraints.allows(&name) {
            return Err(MoveError::GateNotAllowed {
                gate: name,
                allowed: self
                    .constraints
                    .allowed
                    .as_deref()
                    .unwrap_or_default()
                    .join(", "),
            });
        }

        let ids: Vec<QubitId> = qubits.iter().copied().map(QubitId::new).collect();
        let op = GateOp::new(gate, &ids).map_err(|err| move_error(&name, err))?;
        for &q in qubits {
            if q >= self.constraints.num_qubits {
                return Err(MoveError::QubitOutOfRange {
                    qubit: q,
                    max: self.constraints.num_qubits.saturating_sub(1),
                });
            }
        }

        self.ops.push(op);
        self.placements.push(GatePlacement::new(name, qubits));
        Ok(&self.placements[self.placements.len() - 1])
    }

    /// Remove the last gate
    pub fn undo(&mut self) -> Option<GatePlacement> {
        self.ops.pop();
        self.placements.pop()
    }

    /// Remove every gate
    pub fn clear(&mut self) {
        self.ops.clear();
        self.placements.clear();
    }

    pub fn placements(&self) -> &[GatePlacement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Gates left in the budget, `None` when unlimited
    pub fn remaining(&self) -> Option<usize> {
        self.constraints
            .max_gates
            .map(|max| max.saturating_sub(self.ops.len()))
    }

    /// Assemble the circuit
    ///
    /// Every operation is checked against the register again before it is
    /// pushed.
    pub fn to_circuit(&self) -> Result<Circuit, MoveError> {
        let mut circuit = Circuit::try_new(self.constraints.num_qubits)
            .map_err(|err| MoveError::Rejected(err.to_string()))?;
        for op in &self.ops {
            circuit
                .push(op.clone())
                .map_err(|err| move_error(op.name(), err))?;
        }
        Ok(circuit)
    }

    /// ASCII drawing with one wire per qubit
    pub fn draw(&self, style: &AsciiConfig) -> String {
        match self.to_circuit() {
            Ok(circuit) => circuit.to_ascii(style),
            Err(err) => format!("<{}>", err),
        }
    }
}

fn move_error(gate: &str, err: QuantumError) -> MoveError {
    match err {
        QuantumError::InvalidQubitCount {
            expected, actual, ..
        } => MoveError::WrongArity {
            gate: gate.to_string(),
            expected,
            actual,
        },
        QuantumError::DuplicateQubit(q) => MoveError::DuplicateQubit {
            gate: gate.to_string(),
            qubit: q.index(),
        },
        QuantumError::InvalidQubit(qubit, n) => MoveError::QubitOutOfRange {
            qubit,
            max: n.saturating_sub(1),
        },
        QuantumError::UnknownGate(symbol) => MoveError::UnknownGate(symbol),
        other => MoveError::Rejected(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_builder() -> CircuitBuilder {
        let constraints = Constraints::new(2)
            .with_allowed(["H", "X", "CNOT"])
            .with_max_gates(3);
        CircuitBuilder::new(constraints, GateRegistry::standard())
    }

    #[test]
    fn test_place_and_canonical_names() {
        let mut builder = level_builder();
        builder.place("h", &[0]).unwrap();
        let placed = builder.place("cx", &[0, 1]).unwrap().clone();
        assert_eq!(placed, GatePlacement::new("CNOT", &[0, 1]));
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.remaining(), Some(1));
        assert_eq!(builder.to_circuit().unwrap().len(), 2);
    }

    #[test]
    fn test_rejections_leave_builder_unchanged() {
        let mut builder = level_builder();
        assert_eq!(
            builder.place("RX", &[0]).unwrap_err(),
            MoveError::UnknownGate("RX".into())
        );
        assert!(matches!(
            builder.place("Z", &[0]).unwrap_err(),
            MoveError::GateNotAllowed { ref gate, .. } if gate == "Z"
        ));
        assert!(matches!(
            builder.place("CNOT", &[0]).unwrap_err(),
            MoveError::WrongArity { expected: 2, actual: 1, .. }
        ));
        assert_eq!(
            builder.place("X", &[2]).unwrap_err(),
            MoveError::QubitOutOfRange { qubit: 2, max: 1 }
        );
        assert!(matches!(
            builder.place("CNOT", &[1, 1]).unwrap_err(),
            MoveError::DuplicateQubit { qubit: 1, .. }
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_budget() {
        let mut builder = level_builder();
        for _ in 0..3 {
            builder.place("X", &[0]).unwrap();
        }
        assert_eq!(builder.remaining(), Some(0));
        assert_eq!(
            builder.place("X", &[0]).unwrap_err(),
            MoveError::BudgetExhausted { max: 3 }
        );
    }

    #[test]
    fn test_undo_and_clear() {
        let mut builder = level_builder();
        builder.place("H", &[0]).unwrap();
        builder.place("X", &[1]).unwrap();
        assert_eq!(builder.undo(), Some(GatePlacement::new("X", &[1])));
        assert_eq!(builder.len(), 1);
        builder.clear();
        assert!(builder.is_empty());
        assert_eq!(builder.undo(), None);
        assert!(builder.to_circuit().unwrap().is_empty());
    }

    #[test]
    fn test_free_builder_accepts_any_gate() {
        let mut builder = CircuitBuilder::free(3);
        builder.place("Toffoli", &[0, 1, 2]).unwrap();
        builder.place("T", &[2]).unwrap();
        assert_eq!(builder.remaining(), None);
    }

    #[test]
    fn test_from_placements_reports_bad_step() {
        let steps = [GatePlacement::new("H", &[0]), GatePlacement::new("H", &[5])];
        let err = CircuitBuilder::from_placements(Constraints::new(2), GateRegistry::standard(), &steps)
            .unwrap_err();
        assert_eq!(err, MoveError::QubitOutOfRange { qubit: 5, max: 1 });
    }

    #[test]
    fn test_placement_display_and_draw() {
        assert_eq!(GatePlacement::new("CNOT", &[0, 1]).to_string(), "CNOT 0 1");
        let mut builder = level_builder();
        builder.place("H", &[0]).unwrap();
        let drawing = builder.draw(&AsciiConfig::default());
        assert!(drawing.contains('H'));
        assert_eq!(drawing.lines().filter(|l| l.contains("q0") || l.contains("q1")).count(), 2);
    }

    #[test]
    fn test_plain_drawing() {
        let mut builder = level_builder();
        builder.place("CNOT", &[0, 1]).unwrap();
        let drawing = builder.draw(&AsciiConfig::ascii_only());
        assert!(drawing.is_ascii());
        assert!(drawing.contains('@'));
        assert!(drawing.contains("(+)"));
    }
}
