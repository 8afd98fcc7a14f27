//! Level file check

use crate::config::AppConfig;
use crate::output;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use qpuzzle_game::{EvaluationOutcome, Evaluator, LevelRepository};
use std::path::Path;

#[derive(Args, Debug, Default)]
pub struct LevelsArgs {
    /// Treat skipped entries as failures
    #[arg(long)]
    pub strict: bool,
}

/// List the levels and run every canonical solution
///
/// Fails when a solution does not solve its level, or with `--strict` when
/// an entry was skipped.
pub fn run(args: &LevelsArgs, config: &AppConfig, levels_path: Option<&Path>) -> Result<()> {
    let source = match levels_path {
        Some(path) => path.display().to_string(),
        None => "built-in levels".to_string(),
    };
    let repository = LevelRepository::load(levels_path)?;
    let evaluator = Evaluator::new(config.game.clone())?;

    output::heading(&format!("Levels from {}", source));
    let mut failures = 0;
    for (i, level) in repository.levels().iter().enumerate() {
        let check = if level.solution().is_empty() {
            "no solution".dimmed()
        } else {
            let result = evaluator.evaluate(level, level.solution());
            match result.outcome {
                EvaluationOutcome::Solved => "ok".bright_green(),
                other => {
                    failures += 1;
                    format!("FAILED: {}", other).bright_red()
                }
            }
        };
        println!(
            "  {:>2}. {:<32} {:<12} {}q  max {:<3} {}",
            i + 1,
            level.name(),
            level.difficulty().as_str(),
            level.num_qubits(),
            level.max_gates(),
            check
        );
    }

    output::skipped_levels(repository.skipped());
    println!(
        "\n{} playable, {} skipped, {} failing",
        repository.len(),
        repository.skipped().len(),
        failures
    );

    if failures > 0 {
        anyhow::bail!("{} level solution(s) do not solve their level", failures);
    }
    if args.strict && !repository.skipped().is_empty() {
        anyhow::bail!("{} level(s) were skipped", repository.skipped().len());
    }
    if repository.is_empty() {
        anyhow::bail!("no playable levels in {}", source);
    }
    Ok(())
}
