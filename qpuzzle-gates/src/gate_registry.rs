//! Lookup of gates by the symbols players and level files use
//!
//! Symbols are matched case-insensitively, and a few common aliases are
//! accepted (`CX` for `CNOT`, `CCX` and `CCNOT` for `Toffoli`).
//!
//! # Example
//!
//! ```rust
//! use qpuzzle_gates::gate_registry::GateRegistry;
//!
//! let registry = GateRegistry::standard();
//! let cx = registry.get("cx").unwrap();
//! assert_eq!(cx.name(), "CNOT");
//! assert!(registry.resolve("RX").is_err());
//! ```

use crate::standard::{CNot, Hadamard, Identity, PauliX, PauliY, PauliZ, SGate, TGate, Toffoli, CZ};
use qpuzzle_core::{Gate, QuantumError};
use std::collections::HashMap;
use std::sync::Arc;

/// Gate table keyed by normalized symbol
#[derive(Debug, Clone)]
pub struct GateRegistry {
    gates: Vec<Arc<dyn Gate>>,
    symbols: HashMap<String, usize>,
}

impl GateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            gates: Vec::new(),
            symbols: HashMap::new(),
        }
    }

    /// Registry holding every gate the game knows, in menu order
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Hadamard));
        registry.register(Arc::new(PauliX));
        registry.register(Arc::new(PauliY));
        registry.register(Arc::new(PauliZ));
        registry.register(Arc::new(SGate));
        registry.register(Arc::new(TGate));
        registry.register(Arc::new(CNot));
        registry.register(Arc::new(CZ));
        registry.register(Arc::new(Toffoli));
        registry.register(Arc::new(Identity));
        registry.alias("CX", "CNOT");
        registry.alias("CCX", "Toffoli");
        registry.alias("CCNOT", "Toffoli");
        registry.alias("ID", "I");
        registry
    }

    /// Register a gate under its own name
    ///
    /// A gate with the same symbol is replaced.
    pub fn register(&mut self, gate: Arc<dyn Gate>) {
        let key = normalize(gate.name());
        match self.symbols.get(&key) {
            Some(&slot) => self.gates[slot] = gate,
            None => {
                self.symbols.insert(key, self.gates.len());
                self.gates.push(gate);
            }
        }
    }

    /// Make `alias` resolve to the gate registered as `target`
    ///
    /// Returns false when `target` is not registered.
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        match self.symbols.get(&normalize(target)).copied() {
            Some(slot) => {
                self.symbols.insert(normalize(alias), slot);
                true
            }
            None => false,
        }
    }

    /// Look up a gate by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<Arc<dyn Gate>> {
        self.symbols
            .get(&normalize(symbol))
            .map(|&slot| Arc::clone(&self.gates[slot]))
    }

    /// Look up a gate, failing with [`QuantumError::UnknownGate`]
    pub fn resolve(&self, symbol: &str) -> Result<Arc<dyn Gate>, QuantumError> {
        self.get(symbol)
            .ok_or_else(|| QuantumError::UnknownGate(symbol.trim().to_string()))
    }

    /// Canonical symbol for `symbol`, e.g. `"cx"` gives `"CNOT"`
    pub fn canonical_name(&self, symbol: &str) -> Option<&str> {
        self.symbols
            .get(&normalize(symbol))
            .map(|&slot| self.gates[slot].name())
    }

    /// Check if a symbol or alias is known
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains_key(&normalize(symbol))
    }

    /// Registered gates in registration order
    pub fn gates(&self) -> impl Iterator<Item = &Arc<dyn Gate>> {
        self.gates.iter()
    }

    /// Canonical names in registration order
    pub fn gate_names(&self) -> Vec<&str> {
        self.gates.iter().map(|g| g.name()).collect()
    }

    /// Number of distinct gates (aliases not counted)
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Summary rows for listings
    pub fn list_gates(&self) -> Vec<GateInfo> {
        self.gates
            .iter()
            .map(|gate| GateInfo {
                name: gate.name().to_string(),
                num_qubits: gate.num_qubits(),
                is_hermitian: gate.is_hermitian(),
                description: gate.description(),
            })
            .collect()
    }
}

impl Default for GateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Information about a registered gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateInfo {
    pub name: String,
    pub num_qubits: usize,
    pub is_hermitian: bool,
    pub description: String,
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry() {
        let registry = GateRegistry::standard();
        assert_eq!(registry.len(), 10);
        assert_eq!(
            registry.gate_names(),
            vec!["H", "X", "Y", "Z", "S", "T", "CNOT", "CZ", "Toffoli", "I"]
        );
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = GateRegistry::standard();
        assert_eq!(registry.get("h").unwrap().name(), "H");
        assert_eq!(registry.get(" toffoli ").unwrap().name(), "Toffoli");
        assert!(registry.contains("cz"));
    }

    #[test]
    fn test_aliases() {
        let registry = GateRegistry::standard();
        assert_eq!(registry.canonical_name("cx"), Some("CNOT"));
        assert_eq!(registry.canonical_name("CCX"), Some("Toffoli"));
        assert_eq!(registry.canonical_name("ccnot"), Some("Toffoli"));
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_unknown_gate() {
        let mut registry = GateRegistry::standard();
        let err = registry.resolve("SWAP").unwrap_err();
        assert_eq!(err, QuantumError::UnknownGate("SWAP".into()));
        assert!(!registry.alias("FOO", "BAR"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = GateRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(Hadamard));
        registry.register(Arc::new(Hadamard));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_gates() {
        let infos = GateRegistry::standard().list_gates();
        let cnot = infos.iter().find(|i| i.name == "CNOT").unwrap();
        assert_eq!(cnot.num_qubits, 2);
        assert!(cnot.is_hermitian);
        assert!(cnot.description.contains("control"));
    }
}
