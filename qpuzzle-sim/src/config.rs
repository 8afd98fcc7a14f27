//! Simulator configuration

/// Configuration for the quantum simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Largest register the simulator accepts
    ///
    /// Default: 10
    pub max_qubits: usize,

    /// Number of measurement shots for sampling
    ///
    /// Default: 1024
    pub shots: usize,

    /// Random number generator seed for reproducible sampling
    ///
    /// If None, sampling draws a fresh seed from the OS.
    ///
    /// Default: None
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 10,
            shots: 1024,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest accepted register
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    /// Set the number of measurement shots
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Set the random seed for deterministic sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the seed
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_qubits == 0 {
            return Err("max_qubits must be > 0".to_string());
        }

        if self.max_qubits > qpuzzle_state::MAX_STATE_QUBITS {
            return Err(format!(
                "max_qubits must be at most {}, got {}",
                qpuzzle_state::MAX_STATE_QUBITS,
                self.max_qubits
            ));
        }

        if self.shots == 0 {
            return Err("shots must be > 0".to_string());
        }

        Ok(())
    }
}
