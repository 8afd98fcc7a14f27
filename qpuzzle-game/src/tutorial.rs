//! One lesson per gate
//!
//! Each lesson applies its gate, and only its gate, to a small input
//! state. Results are compared amplitude by amplitude, so `i|1⟩` and `|1⟩`
//! count as different answers here.

use crate::builder::{CircuitBuilder, Constraints, GatePlacement};
use crate::error::{MoveError, Result};
use qpuzzle_core::AsciiConfig;
use qpuzzle_gates::GateRegistry;
use qpuzzle_sim::{Simulator, SimulatorConfig};
use qpuzzle_state::{format_state, parse_ket, DenseState};

/// Gates a lesson attempt may hold
pub const LESSON_GATE_LIMIT: usize = 3;

const AMPLITUDE_TOLERANCE: f64 = 1e-6;

/// A gate lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub gate: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub num_qubits: usize,
    pub input_state: &'static str,
    pub target_state: &'static str,
}

pub static LESSONS: [Lesson; 8] = [
    Lesson {
        gate: "H",
        name: "Hadamard Gate",
        description: "Creates superposition by transforming |0⟩ to |+⟩ and |1⟩ to |-⟩",
        example: "H|0⟩ = |+⟩ = (|0⟩ + |1⟩)/√2",
        num_qubits: 1,
        input_state: "|0⟩",
        target_state: "|+⟩",
    },
    Lesson {
        gate: "X",
        name: "Pauli-X Gate (NOT)",
        description: "Flips qubit state: |0⟩ ↔ |1⟩",
        example: "X|0⟩ = |1⟩, X|1⟩ = |0⟩",
        num_qubits: 1,
        input_state: "|0⟩",
        target_state: "|1⟩",
    },
    Lesson {
        gate: "Y",
        name: "Pauli-Y Gate",
        description: "Combination of X and Z gates with phase",
        example: "Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩",
        num_qubits: 1,
        input_state: "|0⟩",
        target_state: "i|1⟩",
    },
    Lesson {
        gate: "Z",
        name: "Pauli-Z Gate",
        description: "Applies phase flip to |1⟩ state",
        example: "Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩",
        num_qubits: 1,
        input_state: "|1⟩",
        target_state: "-|1⟩",
    },
    Lesson {
        gate: "S",
        name: "S Gate (Phase)",
        description: "Applies a 90° phase shift to |1⟩ state",
        example: "S|1⟩ = i|1⟩",
        num_qubits: 1,
        input_state: "|1⟩",
        target_state: "i|1⟩",
    },
    Lesson {
        gate: "T",
        name: "T Gate (π/8)",
        description: "Applies a 45° phase shift to |1⟩ state",
        example: "T|1⟩ = e^(iπ/4)|1⟩, so T|+⟩ = (|0⟩ + e^(iπ/4)|1⟩)/√2",
        num_qubits: 1,
        input_state: "|+⟩",
        target_state: "|T+⟩",
    },
    Lesson {
        gate: "CNOT",
        name: "Controlled-NOT Gate",
        description: "Flips target qubit if control qubit is |1⟩",
        example: "CNOT|10⟩ = |11⟩, CNOT|00⟩ = |00⟩",
        num_qubits: 2,
        input_state: "|10⟩",
        target_state: "|11⟩",
    },
    Lesson {
        gate: "CZ",
        name: "Controlled-Z Gate",
        description: "Applies Z gate to target qubit if control qubit is |1⟩",
        example: "CZ|11⟩ = -|11⟩",
        num_qubits: 2,
        input_state: "|11⟩",
        target_state: "-|11⟩",
    },
];

/// Look up a lesson by gate symbol, case-insensitively
pub fn lesson(gate: &str) -> Option<&'static Lesson> {
    let gate = gate.trim();
    LESSONS.iter().find(|l| l.gate.eq_ignore_ascii_case(gate))
}

/// Result of running a lesson attempt
#[derive(Debug, Clone)]
pub struct LessonRun {
    pub state: DenseState,
    /// The final state in ket notation
    pub formatted: String,
    pub matches_target: bool,
}

/// The player's work on one lesson
#[derive(Debug, Clone)]
pub struct LessonAttempt {
    lesson: &'static Lesson,
    builder: CircuitBuilder,
    input: DenseState,
    target: DenseState,
    simulator: Simulator,
}

impl LessonAttempt {
    pub fn new(lesson: &'static Lesson) -> Result<Self> {
        let constraints = Constraints::new(lesson.num_qubits)
            .with_allowed([lesson.gate])
            .with_max_gates(LESSON_GATE_LIMIT);
        Ok(Self {
            lesson,
            builder: CircuitBuilder::new(constraints, GateRegistry::standard()),
            input: parse_ket(lesson.input_state, lesson.num_qubits)?,
            target: parse_ket(lesson.target_state, lesson.num_qubits)?,
            simulator: Simulator::new(SimulatorConfig::default())?,
        })
    }

    pub fn lesson(&self) -> &'static Lesson {
        self.lesson
    }

    /// Apply the lesson gate once more
    pub fn apply(&mut self, qubits: &[usize]) -> std::result::Result<&GatePlacement, MoveError> {
        self.builder.place(self.lesson.gate, qubits)
    }

    pub fn applied(&self) -> usize {
        self.builder.len()
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }

    pub fn draw(&self, style: &AsciiConfig) -> String {
        self.builder.draw(style)
    }

    pub fn run(&self) -> Result<LessonRun> {
        let circuit = self.builder.to_circuit()?;
        let state = self.simulator.run_from(&circuit, &self.input)?.state;
        let matches_target = state.approx_eq(&self.target, AMPLITUDE_TOLERANCE)?;
        Ok(LessonRun {
            formatted: format_state(&state, 1e-9),
            state,
            matches_target,
        })
    }
}
