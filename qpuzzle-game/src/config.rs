//! Evaluation and scoring settings

use serde::{Deserialize, Serialize};

/// Settings for judging and scoring puzzles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum |⟨target|final⟩|² for a level to count as solved
    ///
    /// Default: 0.99
    pub fidelity_threshold: f64,

    /// Per-amplitude tolerance for phase-sensitive levels
    ///
    /// Default: 1e-6
    pub amplitude_tolerance: f64,

    /// Lowest score a solved level can award
    ///
    /// Default: 10
    pub min_score: u32,

    /// Points removed from the session total when a level is skipped
    ///
    /// Default: 50
    pub skip_penalty: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fidelity_threshold: 0.99,
            amplitude_tolerance: 1e-6,
            min_score: 10,
            skip_penalty: 50,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fidelity_threshold(mut self, threshold: f64) -> Self {
        self.fidelity_threshold = threshold;
        self
    }

    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_skip_penalty(mut self, penalty: u32) -> Self {
        self.skip_penalty = penalty;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fidelity_threshold > 0.0 && self.fidelity_threshold <= 1.0) {
            return Err(format!(
                "fidelity_threshold must be in (0, 1], got {}",
                self.fidelity_threshold
            ));
        }

        if !(self.amplitude_tolerance > 0.0 && self.amplitude_tolerance < 1.0) {
            return Err(format!(
                "amplitude_tolerance must be in (0, 1), got {}",
                self.amplitude_tolerance
            ));
        }

        if self.min_score > crate::scoring::BASE_SCORE {
            return Err(format!(
                "min_score must be at most {}, got {}",
                crate::scoring::BASE_SCORE,
                self.min_score
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.fidelity_threshold, 0.99);
        assert_eq!(config.min_score, 10);
        assert_eq!(config.skip_penalty, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(GameConfig::new().with_fidelity_threshold(0.0).validate().is_err());
        assert!(GameConfig::new().with_fidelity_threshold(1.5).validate().is_err());
        assert!(GameConfig::new().with_min_score(101).validate().is_err());
        let config = GameConfig {
            amplitude_tolerance: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"min_score": 25}"#).unwrap();
        assert_eq!(config.min_score, 25);
        assert_eq!(config.skip_penalty, 50);
    }
}
