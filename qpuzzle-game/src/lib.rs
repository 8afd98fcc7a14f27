//! Game logic for qpuzzle
//!
//! Levels come from a [`LevelRepository`]. The player fills a
//! [`CircuitBuilder`] within the level's rules, the [`Evaluator`] simulates
//! the circuit from the level's input state and compares the result with
//! the target, and [`scoring`] turns the gate count into points. A
//! [`PuzzleSession`] ties these together for puzzle mode; [`Sandbox`],
//! [`tutorial`] and [`learn`] back the other modes.
//!
//! # Example
//!
//! ```
//! use qpuzzle_game::{GameConfig, LevelRepository, PuzzleSession};
//!
//! let levels = LevelRepository::builtin().unwrap();
//! let mut session = PuzzleSession::from_repository(levels, GameConfig::default()).unwrap();
//!
//! // Quantum Flip: |0⟩ to |1⟩
//! session.place("X", &[0]).unwrap();
//! let report = session.run();
//! assert!(report.evaluation.is_solved());
//! assert_eq!(report.score, Some(95));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod learn;
pub mod level;
pub mod repository;
pub mod sandbox;
pub mod scoring;
pub mod session;
pub mod tutorial;

pub use builder::{CircuitBuilder, Constraints, GatePlacement};
pub use config::GameConfig;
pub use error::{GameError, MoveError, Result};
pub use evaluator::{EvaluationOutcome, EvaluationResult, Evaluator};
pub use level::{Difficulty, Level, LevelSpec, MAX_LEVEL_QUBITS};
pub use repository::{LevelRepository, SkippedLevel};
pub use sandbox::{Sandbox, SandboxRun};
pub use scoring::{score_for_gates, EfficiencyRating, Scoreboard};
pub use session::{Advance, PuzzleSession, RunReport, SessionSummary, SkipReport};
pub use tutorial::{Lesson, LessonAttempt, LessonRun, LESSONS};
