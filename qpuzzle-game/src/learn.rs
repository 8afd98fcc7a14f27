//! Learn hub reference pages

use std::fmt::{self, Write as _};

/// A titled block of bullet points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
}

/// An external reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// One learn hub page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Short name typed at the prompt
    pub key: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
    pub links: &'static [Link],
}

impl Page {
    /// Plain text rendering for the terminal
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        if !self.intro.is_empty() {
            let _ = writeln!(out, "\n{}", self.intro);
        }
        for section in self.sections {
            let _ = writeln!(out, "\n{}", section.heading);
            for line in section.lines {
                let _ = writeln!(out, "  • {}", line);
            }
        }
        if !self.links.is_empty() {
            out.push('\n');
            for link in self.links {
                let _ = writeln!(out, "  {} <{}>\n      {}", link.title, link.url, link.description);
            }
        }
        out
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub static PAGES: [Page; 5] = [CONCEPTS, GATES, ALGORITHMS, RESOURCES, HOW_TO_PLAY];

/// Find a page by key or by a case-insensitive prefix of its key
pub fn page(key: &str) -> Option<&'static Page> {
    let key = key.trim().to_ascii_lowercase();
    if key.is_empty() {
        return None;
    }
    PAGES
        .iter()
        .find(|p| p.key == key)
        .or_else(|| PAGES.iter().find(|p| p.key.starts_with(&key)))
}

const CONCEPTS: Page = Page {
    key: "concepts",
    title: "Quantum Computing Fundamentals",
    intro: "Quantum computers process information with quantum bits (qubits). \
            Where a classical bit is either 0 or 1, a qubit can be in a \
            superposition of both.",
    sections: &[
        Section {
            heading: "Qubit",
            lines: &[
                "The basic unit of quantum information",
                "Can be |0⟩, |1⟩, or a superposition α|0⟩ + β|1⟩ with |α|² + |β|² = 1",
            ],
        },
        Section {
            heading: "Superposition",
            lines: &[
                "A qubit holds amplitudes for several basis states at once",
                "Measurement collapses it to one definite state",
            ],
        },
        Section {
            heading: "Entanglement",
            lines: &[
                "Entangled qubits share correlations no classical system can reproduce",
                "A Bell state such as (|00⟩ + |11⟩)/√2 cannot be written qubit by qubit",
                "Key resource for quantum algorithms and communication",
            ],
        },
        Section {
            heading: "Interference",
            lines: &[
                "Amplitudes add constructively or cancel destructively",
                "Algorithms use it to amplify correct answers and suppress wrong ones",
            ],
        },
        Section {
            heading: "Measurement",
            lines: &[
                "Observing a qubit gives a classical outcome",
                "Each outcome appears with probability |amplitude|²",
                "A global phase never changes measurement statistics",
            ],
        },
        Section {
            heading: "Why it matters",
            lines: &[
                "Exponential speedups for certain problems",
                "Cryptography, molecular simulation and optimization",
                "Machine learning and financial modelling",
            ],
        },
        Section {
            heading: "Current challenges",
            lines: &[
                "Decoherence: qubits lose their quantum properties",
                "Error rates in gate operations",
                "Limited qubit counts and very low operating temperatures",
                "Quantum error correction is still expensive",
            ],
        },
    ],
    links: &[],
};

const GATES: Page = Page {
    key: "gates",
    title: "Quantum Gates",
    intro: "Gates are the instructions of a quantum circuit. Controlled gates \
            take their control qubit(s) first: CNOT 0 1 uses qubit 0 as control.",
    sections: &[
        Section {
            heading: "X (NOT)",
            lines: &["Flips |0⟩ ↔ |1⟩", "Pauli-X rotation"],
        },
        Section {
            heading: "Y",
            lines: &["Rotates around the Y axis", "Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩"],
        },
        Section {
            heading: "Z",
            lines: &["Phase flip: |1⟩ → -|1⟩", "Turns |+⟩ into |-⟩"],
        },
        Section {
            heading: "H (Hadamard)",
            lines: &["Creates superposition", "|0⟩ → (|0⟩ + |1⟩)/√2"],
        },
        Section {
            heading: "S",
            lines: &["Phase gate: |1⟩ → i|1⟩", "90° rotation about Z"],
        },
        Section {
            heading: "T",
            lines: &["π/8 gate: |1⟩ → e^(iπ/4)|1⟩", "45° rotation about Z"],
        },
        Section {
            heading: "CNOT",
            lines: &["Controlled NOT: flips the target when the control is |1⟩", "Entangles two qubits"],
        },
        Section {
            heading: "CZ",
            lines: &["Controlled Z: conditional phase flip", "CZ|11⟩ = -|11⟩"],
        },
        Section {
            heading: "Toffoli",
            lines: &["Flips the target when both controls are |1⟩", "Reversible AND"],
        },
    ],
    links: &[],
};

const ALGORITHMS: Page = Page {
    key: "algorithms",
    title: "Famous Quantum Algorithms",
    intro: "",
    sections: &[
        Section {
            heading: "Shor's algorithm (1994)",
            lines: &[
                "Integer factorization with an exponential speedup",
                "Finds the period of modular exponentiation with the quantum Fourier transform",
                "Breaks RSA and motivates post-quantum cryptography",
            ],
        },
        Section {
            heading: "Grover's algorithm (1996)",
            lines: &[
                "Unstructured search in √N steps instead of N",
                "Amplitude amplification through repeated interference",
            ],
        },
        Section {
            heading: "Deutsch-Jozsa algorithm",
            lines: &[
                "Decides whether a function is constant or balanced",
                "One query instead of N/2 + 1 classically",
            ],
        },
        Section {
            heading: "Simon's algorithm",
            lines: &[
                "Finds a hidden XOR period of a function",
                "Exponential speedup that inspired Shor's algorithm",
            ],
        },
        Section {
            heading: "Variational Quantum Eigensolver (VQE)",
            lines: &[
                "Finds ground-state energies of molecules",
                "Parametrized circuit tuned by a classical optimizer",
            ],
        },
        Section {
            heading: "Quantum Approximate Optimization Algorithm (QAOA)",
            lines: &[
                "Combinatorial optimization on near-term hardware",
                "Alternates problem and mixing Hamiltonians",
            ],
        },
        Section {
            heading: "Categories",
            lines: &[
                "Algebraic: factoring, discrete logarithm, hidden subgroup",
                "Search: Grover, amplitude amplification, quantum walks",
                "Simulation: chemistry, many-body physics",
                "Optimization: QAOA, VQE, quantum annealing",
            ],
        },
    ],
    links: &[],
};

const RESOURCES: Page = Page {
    key: "resources",
    title: "Learning Resources",
    intro: "Courses, textbooks and toolkits for going further.",
    sections: &[],
    links: &[
        Link {
            title: "IBM Quantum Experience",
            url: "https://quantum-computing.ibm.com/",
            description: "Hands-on quantum programming",
        },
        Link {
            title: "Microsoft Quantum Development Kit",
            url: "https://azure.microsoft.com/en-us/products/quantum/",
            description: "Q# programming language",
        },
        Link {
            title: "Qiskit Textbook",
            url: "https://qiskit.org/textbook/",
            description: "Comprehensive quantum computing textbook",
        },
        Link {
            title: "Qiskit",
            url: "https://qiskit.org/",
            description: "Open-source quantum computing framework",
        },
        Link {
            title: "Cirq",
            url: "https://quantumai.google/cirq",
            description: "Python framework for quantum circuits",
        },
        Link {
            title: "PennyLane",
            url: "https://pennylane.ai/",
            description: "Quantum machine learning library",
        },
        Link {
            title: "Forest SDK",
            url: "https://pyquil-docs.rigetti.com/en/stable/",
            description: "Rigetti's quantum programming toolkit",
        },
        Link {
            title: "Quantum Inspire",
            url: "https://www.quantum-inspire.com/",
            description: "QuTech's quantum computing platform",
        },
    ],
};

const HOW_TO_PLAY: Page = Page {
    key: "howto",
    title: "How to Play",
    intro: "Each puzzle gives an input state and a target state. Place gates \
            until the circuit turns one into the other, then run it.",
    sections: &[
        Section {
            heading: "Reading states",
            lines: &[
                "Qubit 0 is written first: |10⟩ means qubit 0 is 1 and qubit 1 is 0",
                "|+⟩ = (|0⟩ + |1⟩)/√2 and |-⟩ = (|0⟩ - |1⟩)/√2",
                "|Φ+⟩ = (|00⟩ + |11⟩)/√2 is a Bell state",
                "A global phase is ignored unless the level says otherwise",
            ],
        },
        Section {
            heading: "Scoring",
            lines: &[
                "A solved level scores 100 minus 5 per gate",
                "Skipping a level costs 50 points",
            ],
        },
        Section {
            heading: "Tips",
            lines: &[
                "Start from the input state and think about what each gate does",
                "Use the hint when stuck",
                "Fewer gates give higher scores",
            ],
        },
    ],
    links: &[],
};
