//! Core simulator implementation

use qpuzzle_core::Circuit;
use qpuzzle_state::{ComputationalBasis, DenseState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

use crate::{
    config::SimulatorConfig,
    error::{Result, SimulatorError},
    executor,
    result::{MeasurementCounts, SimulationResult},
};

/// Statevector circuit simulator
///
/// # Example
///
/// ```
/// use qpuzzle_sim::{Simulator, SimulatorConfig};
/// use qpuzzle_core::{Circuit, QubitId};
/// use qpuzzle_gates::{CNot, Hadamard};
/// use std::sync::Arc;
///
/// let simulator = Simulator::new(SimulatorConfig::default().with_seed(1)).unwrap();
///
/// let mut circuit = Circuit::new(2);
/// circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
/// circuit.add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)]).unwrap();
///
/// let result = simulator.run(&circuit).unwrap();
/// let probs = result.probabilities();
/// assert!((probs[0] - 0.5).abs() < 1e-12 && (probs[3] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator
    ///
    /// # Errors
    /// [`SimulatorError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate().map_err(SimulatorError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Get the simulator configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run a circuit starting from |0...0⟩
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        self.check_register(circuit.num_qubits())?;
        let initial = DenseState::new(circuit.num_qubits())?;
        self.run_from(circuit, &initial)
    }

    /// Run a circuit starting from `initial`
    ///
    /// An empty circuit returns the initial state unchanged.
    ///
    /// # Errors
    /// Fails when the register exceeds `max_qubits`, the initial state has a
    /// different qubit count, or an operation cannot be applied.
    pub fn run_from(&self, circuit: &Circuit, initial: &DenseState) -> Result<SimulationResult> {
        let num_qubits = circuit.num_qubits();
        self.check_register(num_qubits)?;
        if initial.num_qubits() != num_qubits {
            return Err(SimulatorError::RegisterMismatch {
                circuit_qubits: num_qubits,
                state_qubits: initial.num_qubits(),
            });
        }
        circuit.validate()?;

        let mut state = initial.clone();
        let start = Instant::now();
        executor::execute(circuit, &mut state)?;

        debug!(
            qubits = num_qubits,
            gates = circuit.len(),
            depth = circuit.depth(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "circuit simulated"
        );

        Ok(SimulationResult::new(state))
    }

    /// Sample `shots` full-register measurements without collapsing `state`
    ///
    /// With a configured seed the counts are reproducible.
    pub fn sample(&self, state: &DenseState, shots: usize) -> MeasurementCounts {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sampling = ComputationalBasis.sample(state, shots, &mut || rng.gen::<f64>());
        debug!(shots, outcomes = sampling.counts.len(), "measurements sampled");
        MeasurementCounts::from(sampling)
    }

    fn check_register(&self, num_qubits: usize) -> Result<()> {
        if num_qubits > self.config.max_qubits {
            return Err(SimulatorError::TooManyQubits {
                num_qubits,
                max_qubits: self.config.max_qubits,
            });
        }
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            config: SimulatorConfig::default(),
        }
    }
}
