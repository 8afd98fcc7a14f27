//! A run through the level list

use crate::builder::{CircuitBuilder, GatePlacement};
use crate::config::GameConfig;
use crate::error::{GameError, MoveError, Result};
use crate::evaluator::{EvaluationResult, Evaluator};
use crate::level::Level;
use crate::repository::LevelRepository;
use crate::scoring::{score_for_gates, EfficiencyRating, Scoreboard};
use tracing::{debug, info};

/// What a `run` produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub evaluation: EvaluationResult,
    /// Points awarded, present only when solved
    pub score: Option<u32>,
    pub rating: Option<EfficiencyRating>,
    /// The solve beat this level's previous best
    pub new_best: bool,
}

/// Where the session went after leaving a level
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    /// Now on the level with this index
    Next(usize),
    /// The last level was left; the session is over
    Complete(SessionSummary),
}

/// Statistics shown when every level has been played
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub total_score: u32,
    /// Sum of the fewest gates used on each solved level
    pub total_gates: usize,
    /// Mean of `max_gates - fewest_gates` over solved levels
    pub average_spare_gates: f64,
    pub levels_completed: usize,
    pub levels_total: usize,
    pub skips: u32,
}

/// Skip outcome: the points deducted and where the session moved
#[derive(Debug, Clone, PartialEq)]
pub struct SkipReport {
    pub penalty: u32,
    pub advance: Advance,
}

/// State of a puzzle-mode session
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    levels: Vec<Level>,
    index: usize,
    builder: CircuitBuilder,
    evaluator: Evaluator,
    scoreboard: Scoreboard,
    complete: bool,
}

impl PuzzleSession {
    /// Start at the first level
    ///
    /// # Errors
    /// [`GameError::NoLevels`] for an empty level list, or
    /// [`GameError::Config`] for an invalid configuration.
    pub fn new(levels: Vec<Level>, config: GameConfig) -> Result<Self> {
        let evaluator = Evaluator::new(config)?;
        let first = levels.first().ok_or(GameError::NoLevels)?;
        let builder = CircuitBuilder::new(first.constraints(), evaluator.registry().clone());
        Ok(Self {
            levels,
            index: 0,
            builder,
            evaluator,
            scoreboard: Scoreboard::new(),
            complete: false,
        })
    }

    pub fn from_repository(repository: LevelRepository, config: GameConfig) -> Result<Self> {
        Self::new(repository.into_levels(), config)
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.index]
    }

    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn builder(&self) -> &CircuitBuilder {
        &self.builder
    }

    pub fn placements(&self) -> &[GatePlacement] {
        self.builder.placements()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn total_score(&self) -> u32 {
        self.scoreboard.total()
    }

    /// Place a gate on the current level's circuit
    pub fn place(&mut self, symbol: &str, qubits: &[usize]) -> std::result::Result<&GatePlacement, MoveError> {
        self.builder.place(symbol, qubits)
    }

    pub fn undo(&mut self) -> Option<GatePlacement> {
        self.builder.undo()
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }

    /// Evaluate the current circuit and record a solve
    pub fn run(&mut self) -> RunReport {
        let level = &self.levels[self.index];
        let evaluation = self.evaluator.evaluate_builder(level, &self.builder);
        if !evaluation.is_solved() {
            return RunReport {
                evaluation,
                score: None,
                rating: None,
                new_best: false,
            };
        }

        let gates = evaluation.gates_used;
        let score = score_for_gates(gates, self.evaluator.config().min_score);
        let rating = EfficiencyRating::from_usage(gates, level.max_gates());
        let new_best = self.scoreboard.record_solve(self.index, gates, score);
        info!(level = level.name(), gates, score, %rating, "level solved");

        RunReport {
            evaluation,
            score: Some(score),
            rating: Some(rating),
            new_best,
        }
    }

    /// Move to the next level, or finish after the last one
    pub fn advance(&mut self) -> Advance {
        if self.index + 1 < self.levels.len() {
            self.load(self.index + 1);
            Advance::Next(self.index)
        } else {
            self.complete = true;
            self.builder.clear();
            info!(score = self.scoreboard.total(), "all levels played");
            Advance::Complete(self.summary())
        }
    }

    /// Leave the current level for a score penalty
    pub fn skip(&mut self) -> SkipReport {
        let penalty = self
            .scoreboard
            .record_skip(self.evaluator.config().skip_penalty);
        debug!(level = self.current_level().name(), penalty, "level skipped");
        SkipReport {
            penalty,
            advance: self.advance(),
        }
    }

    pub fn hint(&self) -> &str {
        self.current_level().hint()
    }

    /// Jump to a level by index
    ///
    /// Returns false when `index` is out of range.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.levels.len() {
            return false;
        }
        self.load(index);
        true
    }

    /// Back to the first level with an empty score record
    pub fn restart(&mut self) {
        self.scoreboard.reset();
        self.load(0);
    }

    pub fn summary(&self) -> SessionSummary {
        let solved: Vec<(usize, usize)> = self
            .scoreboard
            .records()
            .map(|(level, record)| (level, record.fewest_gates))
            .collect();

        let average_spare_gates = if solved.is_empty() {
            0.0
        } else {
            let spare: usize = solved
                .iter()
                .map(|&(level, gates)| self.levels[level].max_gates().saturating_sub(gates))
                .sum();
            spare as f64 / solved.len() as f64
        };

        SessionSummary {
            total_score: self.scoreboard.total(),
            total_gates: self.scoreboard.total_gates(),
            average_spare_gates,
            levels_completed: self.scoreboard.levels_completed(),
            levels_total: self.levels.len(),
            skips: self.scoreboard.skips(),
        }
    }

    fn load(&mut self, index: usize) {
        self.index = index;
        self.complete = false;
        self.builder = CircuitBuilder::new(
            self.levels[index].constraints(),
            self.evaluator.registry().clone(),
        );
        debug!(index, level = self.levels[index].name(), "level loaded");
    }
}
