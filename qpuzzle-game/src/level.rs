//! Puzzle level definitions
//!
//! A level file is a JSON array of [`LevelSpec`] objects. Each spec is
//! checked and turned into a [`Level`], which holds the parsed input and
//! target states next to the original ket strings.

use crate::builder::{CircuitBuilder, Constraints, GatePlacement};
use crate::error::{GameError, Result};
use qpuzzle_gates::GateRegistry;
use qpuzzle_state::{parse_ket, DenseState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest register a level may declare
pub const MAX_LEVEL_QUBITS: usize = 4;

/// Gate budget for levels that do not set `max_gates`
pub const DEFAULT_MAX_GATES: usize = 20;

/// Difficulty tier shown next to the level name
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
        Difficulty::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
            Difficulty::Master => "Master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A level as written in a level file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub input_state: String,
    pub target_state: String,
    pub available_gates: Vec<String>,
    #[serde(alias = "qubits")]
    pub qubit_count: usize,
    #[serde(default)]
    pub hint: String,
    #[serde(default = "default_max_gates")]
    pub max_gates: usize,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Canonical gate sequence that solves the level
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solution: Vec<GatePlacement>,
    /// Require exact amplitudes instead of equality up to global phase
    #[serde(default)]
    pub phase_sensitive: bool,
}

fn default_max_gates() -> usize {
    DEFAULT_MAX_GATES
}

/// A checked, immutable puzzle level
#[derive(Debug, Clone)]
pub struct Level {
    spec: LevelSpec,
    allowed: Vec<String>,
    input: DenseState,
    target: DenseState,
}

impl Level {
    /// Check a spec against the gate registry and parse its states
    ///
    /// # Errors
    /// - [`GameError::QubitCount`] for 0 or more than [`MAX_LEVEL_QUBITS`] qubits
    /// - [`GameError::InvalidLevel`] for unknown gates, a zero gate budget or
    ///   a solution that breaks the level's own rules
    /// - [`GameError::State`] when the input or target ket does not parse
    pub fn from_spec(spec: LevelSpec, registry: &GateRegistry) -> Result<Self> {
        if spec.qubit_count == 0 || spec.qubit_count > MAX_LEVEL_QUBITS {
            return Err(GameError::QubitCount {
                actual: spec.qubit_count,
                max: MAX_LEVEL_QUBITS,
            });
        }
        if spec.max_gates == 0 {
            return Err(GameError::InvalidLevel("max_gates must be at least 1".into()));
        }
        if spec.available_gates.is_empty() {
            return Err(GameError::InvalidLevel("no available gates".into()));
        }

        let mut allowed: Vec<String> = Vec::with_capacity(spec.available_gates.len());
        for symbol in &spec.available_gates {
            let name = registry
                .canonical_name(symbol)
                .ok_or_else(|| GameError::InvalidLevel(format!("unknown gate '{}'", symbol.trim())))?;
            if !allowed.iter().any(|a| a == name) {
                allowed.push(name.to_string());
            }
        }

        let input = parse_ket(&spec.input_state, spec.qubit_count)?;
        let target = parse_ket(&spec.target_state, spec.qubit_count)?;

        let level = Self {
            spec,
            allowed,
            input,
            target,
        };

        if !level.spec.solution.is_empty() {
            let mut builder = CircuitBuilder::new(level.constraints(), registry.clone());
            for (step, placement) in level.spec.solution.iter().enumerate() {
                builder.place(&placement.gate, &placement.qubits).map_err(|err| {
                    GameError::InvalidLevel(format!("solution step {}: {}", step + 1, err))
                })?;
            }
        }

        Ok(level)
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn description(&self) -> &str {
        &self.spec.description
    }

    pub fn hint(&self) -> &str {
        &self.spec.hint
    }

    pub fn difficulty(&self) -> Difficulty {
        self.spec.difficulty
    }

    pub fn num_qubits(&self) -> usize {
        self.spec.qubit_count
    }

    pub fn max_gates(&self) -> usize {
        self.spec.max_gates
    }

    pub fn is_phase_sensitive(&self) -> bool {
        self.spec.phase_sensitive
    }

    /// Canonical symbols of the gates the player may use
    pub fn allowed_gates(&self) -> &[String] {
        &self.allowed
    }

    /// Input state as written in the level file
    pub fn input_label(&self) -> &str {
        &self.spec.input_state
    }

    /// Target state as written in the level file
    pub fn target_label(&self) -> &str {
        &self.spec.target_state
    }

    pub fn input_state(&self) -> &DenseState {
        &self.input
    }

    pub fn target_state(&self) -> &DenseState {
        &self.target
    }

    /// Canonical solution, empty when the level file has none
    pub fn solution(&self) -> &[GatePlacement] {
        &self.spec.solution
    }

    /// Placement rules for a builder working on this level
    pub fn constraints(&self) -> Constraints {
        Constraints::new(self.spec.qubit_count)
            .with_allowed(self.allowed.iter().cloned())
            .with_max_gates(self.spec.max_gates)
    }

    /// The spec this level was built from
    pub fn spec(&self) -> &LevelSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(json: &str) -> LevelSpec {
        serde_json::from_str(json).unwrap()
    }

    const BELL: &str = r#"{
        "name": "First Bell State",
        "description": "Entangle two qubits",
        "input_state": "|00⟩",
        "target_state": "|Φ+⟩",
        "available_gates": ["H", "X", "cx"],
        "qubits": 2,
        "hint": "Apply H to qubit 0, then CNOT 0 1",
        "max_gates": 2,
        "difficulty": "Intermediate",
        "solution": [{"gate": "H", "qubits": [0]}, {"gate": "CNOT", "qubits": [0, 1]}]
    }"#;

    #[test]
    fn test_level_from_spec() {
        let level = Level::from_spec(spec(BELL), &GateRegistry::standard()).unwrap();
        assert_eq!(level.name(), "First Bell State");
        assert_eq!(level.num_qubits(), 2);
        assert_eq!(level.max_gates(), 2);
        assert_eq!(level.difficulty(), Difficulty::Intermediate);
        assert_eq!(level.allowed_gates(), &["H", "X", "CNOT"]);
        assert_eq!(level.solution().len(), 2);
        assert!(!level.is_phase_sensitive());
        assert_eq!(level.target_label(), "|Φ+⟩");
    }

    #[test]
    fn test_defaults_apply() {
        let spec = spec(
            r#"{"name": "Flip", "input_state": "|0⟩", "target_state": "|1⟩",
                "available_gates": ["X"], "qubit_count": 1}"#,
        );
        assert_eq!(spec.max_gates, DEFAULT_MAX_GATES);
        assert_eq!(spec.difficulty, Difficulty::Beginner);
        assert!(spec.hint.is_empty());
        assert!(Level::from_spec(spec, &GateRegistry::standard()).is_ok());
    }

    #[test]
    fn test_rejects_bad_qubit_count() {
        let mut s = spec(BELL);
        s.qubit_count = 5;
        let err = Level::from_spec(s, &GateRegistry::standard()).unwrap_err();
        assert!(matches!(err, GameError::QubitCount { actual: 5, max: 4 }));
    }

    #[test]
    fn test_rejects_unknown_gate() {
        let mut s = spec(BELL);
        s.available_gates.push("RX".into());
        let err = Level::from_spec(s, &GateRegistry::standard()).unwrap_err();
        assert!(err.to_string().contains("unknown gate 'RX'"));
    }

    #[test]
    fn test_rejects_mismatched_ket() {
        let mut s = spec(BELL);
        s.target_state = "|GHZ⟩".into();
        s.qubit_count = 3;
        s.input_state = "|00⟩".into();
        let err = Level::from_spec(s, &GateRegistry::standard()).unwrap_err();
        assert!(matches!(err, GameError::State(_)));
    }

    #[test]
    fn test_rejects_solution_over_budget() {
        let mut s = spec(BELL);
        s.max_gates = 1;
        let err = Level::from_spec(s, &GateRegistry::standard()).unwrap_err();
        assert!(err.to_string().contains("solution step 2"));
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Beginner < Difficulty::Master);
        assert_eq!(Difficulty::Expert.to_string(), "Expert");
        assert_eq!(Difficulty::ALL.len(), 5);
    }
}
