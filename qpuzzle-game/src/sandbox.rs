//! Free-form circuit playground

use crate::builder::{CircuitBuilder, GatePlacement};
use crate::error::{GameError, MoveError, Result};
use crate::level::MAX_LEVEL_QUBITS;
use qpuzzle_core::AsciiConfig;
use qpuzzle_sim::{MeasurementCounts, Simulator, SimulatorConfig};
use qpuzzle_state::{basis_label, identify, parse_ket, DenseState};
use tracing::debug;

/// Tolerance used to name a final state
const IDENTIFY_TOLERANCE: f64 = 1e-9;

/// Final state of a sandbox run
#[derive(Debug, Clone)]
pub struct SandboxRun {
    pub state: DenseState,
    /// Probability of each basis state, by amplitude index
    pub probabilities: Vec<f64>,
    /// Name of the state when it is a recognisable one, e.g. `|Φ+⟩`
    pub label: Option<String>,
}

impl SandboxRun {
    /// Basis states with non-negligible probability, labelled qubit 0 first
    pub fn nonzero_probabilities(&self, epsilon: f64) -> Vec<(String, f64)> {
        let n = self.state.num_qubits();
        self.probabilities
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > epsilon)
            .map(|(i, &p)| (basis_label(i, n), p))
            .collect()
    }
}

/// Unrestricted circuit on 1 to 4 qubits
#[derive(Debug, Clone)]
pub struct Sandbox {
    builder: CircuitBuilder,
    initial_label: String,
    initial: DenseState,
    simulator: Simulator,
}

impl Sandbox {
    pub fn new(num_qubits: usize) -> Result<Self> {
        let (initial_label, initial) = zero_state(num_qubits)?;
        let simulator =
            Simulator::new(SimulatorConfig::default().with_max_qubits(MAX_LEVEL_QUBITS))?;
        Ok(Self {
            builder: CircuitBuilder::free(num_qubits),
            initial_label,
            initial,
            simulator,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.builder.num_qubits()
    }

    /// Resize the register, clearing the gates and resetting to |0…0⟩
    pub fn set_qubit_count(&mut self, num_qubits: usize) -> Result<()> {
        let (label, initial) = zero_state(num_qubits)?;
        self.builder = CircuitBuilder::free(num_qubits);
        self.initial_label = label;
        self.initial = initial;
        debug!(num_qubits, "sandbox resized");
        Ok(())
    }

    /// Start from any ket valid for the current qubit count
    pub fn set_initial_state(&mut self, label: &str) -> Result<()> {
        self.initial = parse_ket(label, self.num_qubits())?;
        self.initial_label = label.trim().to_string();
        Ok(())
    }

    pub fn initial_label(&self) -> &str {
        &self.initial_label
    }

    pub fn initial_state(&self) -> &DenseState {
        &self.initial
    }

    pub fn place(&mut self, symbol: &str, qubits: &[usize]) -> std::result::Result<&GatePlacement, MoveError> {
        self.builder.place(symbol, qubits)
    }

    pub fn undo(&mut self) -> Option<GatePlacement> {
        self.builder.undo()
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }

    pub fn placements(&self) -> &[GatePlacement] {
        self.builder.placements()
    }

    pub fn draw(&self, style: &AsciiConfig) -> String {
        self.builder.draw(style)
    }

    /// Simulate the circuit; an empty circuit returns the initial state
    pub fn run(&self) -> Result<SandboxRun> {
        let circuit = self.builder.to_circuit()?;
        let result = self.simulator.run_from(&circuit, &self.initial)?;
        let probabilities = result.probabilities();
        let label = identify(&result.state, IDENTIFY_TOLERANCE);
        Ok(SandboxRun {
            state: result.state,
            probabilities,
            label,
        })
    }

    /// Run, then sample `shots` measurements of the whole register
    pub fn measure(&self, shots: usize, seed: Option<u64>) -> Result<MeasurementCounts> {
        if shots == 0 {
            return Err(GameError::Config("shots must be greater than 0".into()));
        }
        let run = self.run()?;
        let simulator = Simulator::new(
            SimulatorConfig::default()
                .with_max_qubits(MAX_LEVEL_QUBITS)
                .with_shots(shots)
                .with_optional_seed(seed),
        )?;
        Ok(simulator.sample(&run.state, shots))
    }
}

fn zero_state(num_qubits: usize) -> Result<(String, DenseState)> {
    if num_qubits == 0 || num_qubits > MAX_LEVEL_QUBITS {
        return Err(GameError::QubitCount {
            actual: num_qubits,
            max: MAX_LEVEL_QUBITS,
        });
    }
    Ok((
        basis_label(0, num_qubits),
        DenseState::new(num_qubits)?,
    ))
}
