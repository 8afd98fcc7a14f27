//! Run a gate sequence on a level and judge the result

use crate::builder::{CircuitBuilder, GatePlacement};
use crate::config::GameConfig;
use crate::error::{GameError, MoveError, Result};
use crate::level::{Level, MAX_LEVEL_QUBITS};
use qpuzzle_gates::GateRegistry;
use qpuzzle_sim::{Simulator, SimulatorConfig};
use qpuzzle_state::DenseState;
use std::fmt;
use tracing::{debug, warn};

/// Verdict on one attempt
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    Solved,
    NotSolved,
    /// The sequence could not be simulated; the reason is shown to the player
    InvalidMove(MoveError),
}

impl fmt::Display for EvaluationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved => f.write_str("Solved"),
            Self::NotSolved => f.write_str("Not solved"),
            Self::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
        }
    }
}

/// Outcome of an attempt plus what the player needs for feedback
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub outcome: EvaluationOutcome,
    /// Simulated output, absent for an invalid move
    pub final_state: Option<DenseState>,
    /// |⟨target|final⟩|², absent for an invalid move
    pub fidelity: Option<f64>,
    pub gates_used: usize,
}

impl EvaluationResult {
    fn invalid(reason: MoveError, gates_used: usize) -> Self {
        Self {
            outcome: EvaluationOutcome::InvalidMove(reason),
            final_state: None,
            fidelity: None,
            gates_used,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == EvaluationOutcome::Solved
    }
}

/// Simulates attempts and compares them with the level target
#[derive(Debug, Clone)]
pub struct Evaluator {
    simulator: Simulator,
    registry: GateRegistry,
    config: GameConfig,
}

impl Evaluator {
    /// # Errors
    /// [`GameError::Config`] when `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().map_err(GameError::Config)?;
        let simulator =
            Simulator::new(SimulatorConfig::default().with_max_qubits(MAX_LEVEL_QUBITS))?;
        Ok(Self {
            simulator,
            registry: GateRegistry::standard(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &GateRegistry {
        &self.registry
    }

    /// Evaluate a stored gate sequence against `level`
    ///
    /// The whole sequence is checked against the level's rules first; a
    /// sequence that breaks them is an invalid move and is not simulated.
    pub fn evaluate(&self, level: &Level, placements: &[GatePlacement]) -> EvaluationResult {
        let gates_used = placements.len();
        if placements.is_empty() {
            return EvaluationResult::invalid(MoveError::EmptySequence, 0);
        }

        match CircuitBuilder::from_placements(level.constraints(), self.registry.clone(), placements) {
            Ok(builder) => self.evaluate_builder(level, &builder),
            Err(reason) => {
                debug!(level = level.name(), %reason, "rejected gate sequence");
                EvaluationResult::invalid(reason, gates_used)
            }
        }
    }

    /// Evaluate the circuit held by `builder`
    pub fn evaluate_builder(&self, level: &Level, builder: &CircuitBuilder) -> EvaluationResult {
        let gates_used = builder.len();
        if builder.is_empty() {
            return EvaluationResult::invalid(MoveError::EmptySequence, 0);
        }
        if builder.num_qubits() != level.num_qubits() {
            return EvaluationResult::invalid(
                MoveError::Rejected(format!(
                    "circuit has {} qubits but the level has {}",
                    builder.num_qubits(),
                    level.num_qubits()
                )),
                gates_used,
            );
        }

        let circuit = match builder.to_circuit() {
            Ok(circuit) => circuit,
            Err(reason) => return EvaluationResult::invalid(reason, gates_used),
        };

        let final_state = match self.simulator.run_from(&circuit, level.input_state()) {
            Ok(result) => result.state,
            Err(err) => {
                warn!(level = level.name(), error = %err, "simulation failed");
                return EvaluationResult::invalid(MoveError::Rejected(err.to_string()), gates_used);
            }
        };

        let (solved, fidelity) =
            match self.matches(&final_state, level.target_state(), level.is_phase_sensitive()) {
                Ok(verdict) => verdict,
                Err(err) => {
                    warn!(level = level.name(), error = %err, "state comparison failed");
                    return EvaluationResult::invalid(MoveError::Rejected(err.to_string()), gates_used);
                }
            };

        debug!(
            level = level.name(),
            gates = gates_used,
            fidelity,
            solved,
            "evaluated attempt"
        );

        EvaluationResult {
            outcome: if solved {
                EvaluationOutcome::Solved
            } else {
                EvaluationOutcome::NotSolved
            },
            final_state: Some(final_state),
            fidelity: Some(fidelity),
            gates_used,
        }
    }

    /// Compare a final state with a target
    ///
    /// Returns whether they match and their fidelity. Without
    /// `phase_sensitive` a global phase is ignored; with it every amplitude
    /// must also agree within the amplitude tolerance.
    pub fn matches(
        &self,
        final_state: &DenseState,
        target: &DenseState,
        phase_sensitive: bool,
    ) -> Result<(bool, f64)> {
        let fidelity = final_state.fidelity(target)?;
        let mut solved = fidelity >= self.config.fidelity_threshold;
        if solved && phase_sensitive {
            solved = final_state.approx_eq(target, self.config.amplitude_tolerance)?;
        }
        Ok((solved, fidelity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelSpec;
    use approx::assert_relative_eq;

    fn level(input: &str, target: &str, qubits: usize, phase_sensitive: bool) -> Level {
        let spec = LevelSpec {
            name: "test".into(),
            description: String::new(),
            input_state: input.into(),
            target_state: target.into(),
            available_gates: vec!["H".into(), "X".into(), "Y".into(), "Z".into(), "S".into(), "CNOT".into()],
            qubit_count: qubits,
            hint: String::new(),
            max_gates: 4,
            difficulty: Default::default(),
            solution: Vec::new(),
            phase_sensitive,
        };
        Level::from_spec(spec, &GateRegistry::standard()).unwrap()
    }

    fn evaluator() -> Evaluator {
        Evaluator::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_solved_bell_state() {
        let level = level("|00⟩", "|Φ+⟩", 2, false);
        let result = evaluator().evaluate(
            &level,
            &[GatePlacement::new("H", &[0]), GatePlacement::new("CNOT", &[0, 1])],
        );
        assert!(result.is_solved());
        assert_relative_eq!(result.fidelity.unwrap(), 1.0, epsilon = 1e-10);
        assert_eq!(result.gates_used, 2);
    }

    #[test]
    fn test_not_solved_reports_state() {
        let level = level("|0⟩", "|1⟩", 1, false);
        let result = evaluator().evaluate(&level, &[GatePlacement::new("H", &[0])]);
        assert_eq!(result.outcome, EvaluationOutcome::NotSolved);
        assert_relative_eq!(result.fidelity.unwrap(), 0.5, epsilon = 1e-10);
        assert!(result.final_state.is_some());
    }

    #[test]
    fn test_empty_sequence_is_invalid() {
        let level = level("|0⟩", "|1⟩", 1, false);
        let result = evaluator().evaluate(&level, &[]);
        assert_eq!(result.outcome, EvaluationOutcome::InvalidMove(MoveError::EmptySequence));
        assert!(result.final_state.is_none());
    }

    #[test]
    fn test_disallowed_gate_is_invalid() {
        let level = level("|0⟩", "|1⟩", 1, false);
        let result = evaluator().evaluate(&level, &[GatePlacement::new("T", &[0])]);
        assert!(matches!(
            result.outcome,
            EvaluationOutcome::InvalidMove(MoveError::GateNotAllowed { .. })
        ));
        let result = evaluator().evaluate(&level, &[GatePlacement::new("X", &[1])]);
        assert!(matches!(
            result.outcome,
            EvaluationOutcome::InvalidMove(MoveError::QubitOutOfRange { qubit: 1, max: 0 })
        ));
    }

    #[test]
    fn test_global_phase_ignored_unless_phase_sensitive() {
        // Y|0⟩ = i|1⟩
        let relaxed = level("|0⟩", "|1⟩", 1, false);
        let strict = level("|0⟩", "|1⟩", 1, true);
        let moves = [GatePlacement::new("Y", &[0])];
        assert!(evaluator().evaluate(&relaxed, &moves).is_solved());
        assert_eq!(
            evaluator().evaluate(&strict, &moves).outcome,
            EvaluationOutcome::NotSolved
        );

        let exact = level("|0⟩", "|i·1⟩", 1, true);
        assert!(evaluator().evaluate(&exact, &moves).is_solved());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_fidelity_threshold(2.0);
        assert!(matches!(Evaluator::new(config), Err(GameError::Config(_))));
    }
}
