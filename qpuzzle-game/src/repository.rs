//! Loading level collections
//!
//! A level file is a JSON array. Entries that cannot be used are skipped
//! with a warning and listed in [`LevelRepository::skipped`], so one bad
//! level never hides the rest.

use crate::error::{GameError, Result};
use crate::level::{Level, LevelSpec};
use qpuzzle_gates::GateRegistry;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Levels shipped with the game
pub const BUILTIN_LEVELS: &str = include_str!("../levels/default.json");

/// A level file entry that was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLevel {
    /// Position in the file, from 0
    pub index: usize,
    /// The entry's `name`, when it had one
    pub name: Option<String>,
    pub reason: String,
}

impl std::fmt::Display for SkippedLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "level {} ({}): {}", self.index + 1, name, self.reason),
            None => write!(f, "level {}: {}", self.index + 1, self.reason),
        }
    }
}

/// Ordered, validated levels
#[derive(Debug, Clone, Default)]
pub struct LevelRepository {
    levels: Vec<Level>,
    skipped: Vec<SkippedLevel>,
}

impl LevelRepository {
    /// Parse a JSON array of levels
    ///
    /// # Errors
    /// [`GameError::Format`] when the text is not a JSON array. Problems
    /// with individual entries are not errors.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        let registry = GateRegistry::standard();
        let mut repository = Self::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string);

            let loaded = serde_json::from_value::<LevelSpec>(entry)
                .map_err(GameError::from)
                .and_then(|spec| Level::from_spec(spec, &registry));

            match loaded {
                Ok(level) => repository.levels.push(level),
                Err(err) => {
                    let reason = match err {
                        GameError::Format(err) => format!("malformed entry: {}", err),
                        other => other.to_string(),
                    };
                    warn!(index, name = name.as_deref().unwrap_or("?"), %reason, "skipping level");
                    repository.skipped.push(SkippedLevel {
                        index,
                        name,
                        reason,
                    });
                }
            }
        }

        info!(
            loaded = repository.levels.len(),
            skipped = repository.skipped.len(),
            "levels loaded"
        );
        Ok(repository)
    }

    /// Read and parse a level file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The bundled level set
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_LEVELS)
    }

    /// Level file at `path`, or the bundled set when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => Self::builtin(),
        }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn skipped(&self) -> &[SkippedLevel] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn into_levels(self) -> Vec<Level> {
        self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_levels_load_cleanly() {
        let repo = LevelRepository::builtin().unwrap();
        assert!(repo.skipped().is_empty(), "{:?}", repo.skipped());
        assert_eq!(repo.len(), 28);
        assert_eq!(repo.get(0).unwrap().name(), "Quantum Flip");
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let json = r#"[
            {"name": "Good", "input_state": "|0⟩", "target_state": "|1⟩",
             "available_gates": ["X"], "qubits": 1},
            {"name": "No target", "input_state": "|0⟩",
             "available_gates": ["X"], "qubits": 1},
            {"name": "Too big", "input_state": "|00000⟩", "target_state": "|00000⟩",
             "available_gates": ["X"], "qubits": 5},
            {"name": "Bad gate", "input_state": "|0⟩", "target_state": "|1⟩",
             "available_gates": ["SWAP"], "qubits": 1},
            {"name": "Bad ket", "input_state": "|2⟩", "target_state": "|1⟩",
             "available_gates": ["X"], "qubits": 1},
            42
        ]"#;
        let repo = LevelRepository::from_json_str(json).unwrap();
        assert_eq!(repo.len(), 1);
        let skipped: Vec<usize> = repo.skipped().iter().map(|s| s.index).collect();
        assert_eq!(skipped, vec![1, 2, 3, 4, 5]);
        assert_eq!(repo.skipped()[0].name.as_deref(), Some("No target"));
        assert!(repo.skipped()[0].reason.starts_with("malformed entry"));
        assert_eq!(repo.skipped()[4].name, None);
    }

    #[test]
    fn test_not_an_array_is_an_error() {
        assert!(matches!(
            LevelRepository::from_json_str(r#"{"name": "x"}"#),
            Err(GameError::Format(_))
        ));
        assert!(LevelRepository::from_json_str("not json").is_err());
    }

    #[test]
    fn test_skipped_display() {
        let skipped = SkippedLevel {
            index: 2,
            name: Some("Bad".into()),
            reason: "unknown gate".into(),
        };
        assert_eq!(skipped.to_string(), "level 3 (Bad): unknown gate");
    }
}
