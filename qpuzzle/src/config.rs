//! Front-end configuration
//!
//! Settings come from a TOML file chosen by `--config` or `QPUZZLE_CONFIG`;
//! without one the defaults apply. Every key is optional.
//!
//! ```toml
//! levels_path = "levels/custom.json"
//! log_level = "info"
//! color = true
//!
//! [game]
//! fidelity_threshold = 0.99
//! min_score = 10
//! skip_penalty = 50
//!
//! [sandbox]
//! qubits = 2
//! shots = 1024
//! seed = 7
//! ```

use qpuzzle_game::{GameConfig, MAX_LEVEL_QUBITS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Sandbox defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Qubits when the sandbox opens
    pub qubits: usize,
    /// Shots for `measure` without an explicit count
    pub shots: usize,
    /// Fixed sampling seed, random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            qubits: 2,
            shots: 1024,
            seed: None,
        }
    }
}

/// Complete front-end configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Level file, the bundled levels when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels_path: Option<PathBuf>,
    /// Used when neither `--log-level` nor `RUST_LOG` is set
    pub log_level: String,
    pub color: bool,
    pub game: GameConfig,
    pub sandbox: SandboxConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            levels_path: None,
            log_level: "warn".to_string(),
            color: true,
            game: GameConfig::default(),
            sandbox: SandboxConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a file; relative `levels_path` values are taken relative to it
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        let resolved = match (&config.levels_path, path.parent()) {
            (Some(levels), Some(dir)) if levels.is_relative() => Some(dir.join(levels)),
            _ => None,
        };
        if resolved.is_some() {
            config.levels_path = resolved;
        }
        Ok(config)
    }

    /// The file at `path` when given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.game.validate().map_err(ConfigError::Validation)?;

        if self.sandbox.qubits == 0 || self.sandbox.qubits > MAX_LEVEL_QUBITS {
            return Err(ConfigError::Validation(format!(
                "sandbox.qubits must be between 1 and {}",
                MAX_LEVEL_QUBITS
            )));
        }

        if self.sandbox.shots == 0 {
            return Err(ConfigError::Validation(
                "sandbox.shots must be greater than 0".to_string(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Validation("log_level cannot be empty".to_string()));
        }

        Ok(())
    }
}
