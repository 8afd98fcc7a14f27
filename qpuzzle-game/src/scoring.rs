//! Level scores and the session score record

use std::collections::BTreeMap;
use std::fmt;

/// Score for a solution with no gates
pub const BASE_SCORE: u32 = 100;

/// Points lost per gate used
pub const GATE_COST: u32 = 5;

/// Score for solving a level with `gates` gates
///
/// `100 - 5 × gates`, never below `min_score`.
///
/// ```
/// use qpuzzle_game::scoring::score_for_gates;
///
/// assert_eq!(score_for_gates(2, 10), 90);
/// assert_eq!(score_for_gates(30, 10), 10);
/// ```
pub fn score_for_gates(gates: usize, min_score: u32) -> u32 {
    let cost = u32::try_from(gates)
        .unwrap_or(u32::MAX)
        .saturating_mul(GATE_COST);
    BASE_SCORE.saturating_sub(cost).max(min_score)
}

/// How much of the gate budget was left over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EfficiencyRating {
    Solved,
    Good,
    Great,
    Excellent,
}

impl EfficiencyRating {
    /// Rate by the unused share of the budget, `(max - used) / max`
    pub fn from_usage(used: usize, max_gates: usize) -> Self {
        if max_gates == 0 {
            return Self::Solved;
        }
        let spare = max_gates.saturating_sub(used) as f64 / max_gates as f64;
        if spare >= 0.8 {
            Self::Excellent
        } else if spare >= 0.6 {
            Self::Great
        } else if spare >= 0.4 {
            Self::Good
        } else {
            Self::Solved
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Solved => "Solved",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Best result on one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRecord {
    pub best_score: u32,
    pub fewest_gates: usize,
    pub solves: u32,
}

/// Scores kept for the length of a session
///
/// The total grows by the improvement each time a level's best score is
/// beaten, so replaying a level never counts twice. Skips subtract a
/// penalty from the total, which stops at zero.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    records: BTreeMap<usize, LevelRecord>,
    skips: u32,
    total: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a solve, returning true when it beats the level's best score
    pub fn record_solve(&mut self, level: usize, gates: usize, score: u32) -> bool {
        match self.records.get_mut(&level) {
            Some(record) => {
                record.solves += 1;
                record.fewest_gates = record.fewest_gates.min(gates);
                if score > record.best_score {
                    self.total = self.total.saturating_add(score - record.best_score);
                    record.best_score = score;
                    true
                } else {
                    false
                }
            }
            None => {
                self.records.insert(
                    level,
                    LevelRecord {
                        best_score: score,
                        fewest_gates: gates,
                        solves: 1,
                    },
                );
                self.total = self.total.saturating_add(score);
                true
            }
        }
    }

    /// Record a skip, returning the points actually deducted
    pub fn record_skip(&mut self, penalty: u32) -> u32 {
        self.skips += 1;
        let deducted = penalty.min(self.total);
        self.total -= deducted;
        deducted
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn skips(&self) -> u32 {
        self.skips
    }

    pub fn record(&self, level: usize) -> Option<&LevelRecord> {
        self.records.get(&level)
    }

    pub fn best_score(&self, level: usize) -> Option<u32> {
        self.records.get(&level).map(|r| r.best_score)
    }

    /// Solved levels with their records, by level index
    pub fn records(&self) -> impl Iterator<Item = (usize, &LevelRecord)> {
        self.records.iter().map(|(&level, record)| (level, record))
    }

    pub fn levels_completed(&self) -> usize {
        self.records.len()
    }

    /// Sum of the fewest gates used on each solved level
    pub fn total_gates(&self) -> usize {
        self.records.values().map(|r| r.fewest_gates).sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        assert_eq!(score_for_gates(0, 10), 100);
        assert_eq!(score_for_gates(1, 10), 95);
        assert_eq!(score_for_gates(18, 10), 10);
        assert_eq!(score_for_gates(19, 0), 5);
        assert_eq!(score_for_gates(usize::MAX, 10), 10);
    }

    #[test]
    fn test_efficiency_rating() {
        assert_eq!(EfficiencyRating::from_usage(1, 5), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_usage(2, 5), EfficiencyRating::Great);
        assert_eq!(EfficiencyRating::from_usage(3, 5), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_usage(4, 5), EfficiencyRating::Solved);
        assert_eq!(EfficiencyRating::from_usage(1, 1), EfficiencyRating::Solved);
        assert_eq!(EfficiencyRating::from_usage(3, 0), EfficiencyRating::Solved);
        assert_eq!(EfficiencyRating::Great.to_string(), "Great");
    }

    #[test]
    fn test_best_score_counts_once() {
        let mut board = Scoreboard::new();
        assert!(board.record_solve(0, 3, 85));
        assert!(!board.record_solve(0, 4, 80));
        assert_eq!(board.total(), 85);
        assert!(board.record_solve(0, 2, 90));
        assert_eq!(board.total(), 90);

        let record = board.record(0).unwrap();
        assert_eq!(record.best_score, 90);
        assert_eq!(record.fewest_gates, 2);
        assert_eq!(record.solves, 3);
    }

    #[test]
    fn test_skip_penalty_saturates() {
        let mut board = Scoreboard::new();
        board.record_solve(0, 2, 90);
        assert_eq!(board.record_skip(50), 50);
        assert_eq!(board.total(), 40);
        assert_eq!(board.record_skip(50), 40);
        assert_eq!(board.total(), 0);
        assert_eq!(board.skips(), 2);
    }

    #[test]
    fn test_totals() {
        let mut board = Scoreboard::new();
        board.record_solve(0, 1, 95);
        board.record_solve(3, 4, 80);
        assert_eq!(board.levels_completed(), 2);
        assert_eq!(board.total_gates(), 5);
        board.reset();
        assert_eq!(board.total(), 0);
        assert_eq!(board.levels_completed(), 0);
    }
}
