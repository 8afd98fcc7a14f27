//! Puzzle mode

use super::{Context, Flow};
use crate::input::Command;
use crate::output;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use qpuzzle_game::{Advance, LevelRepository, PuzzleSession};

#[derive(Args, Debug, Default)]
pub struct PuzzleArgs {
    /// Level to start from, numbered from 1
    #[arg(short, long)]
    pub start: Option<usize>,
}

const HELP: &str = "\
  add GATE Q..   place a gate, controls first (add CNOT 0 1, or just CNOT 0 1)
  undo | clear   remove the last gate | all gates
  run            simulate and compare with the target
  hint           show the level hint
  next           go on after solving
  skip           skip the level (costs points)
  level N        jump to level N
  restart        start over from level 1 with a zero score
  circuit        draw the circuit
  state          show the level details
  back | quit    return to the menu | leave";

pub fn load_session(ctx: &Context) -> Result<PuzzleSession> {
    let repository = LevelRepository::load(ctx.levels_path.as_deref())?;
    output::skipped_levels(repository.skipped());
    Ok(PuzzleSession::from_repository(
        repository,
        ctx.config.game.clone(),
    )?)
}

pub fn run(args: PuzzleArgs, ctx: &mut Context) -> Result<Flow> {
    let mut session = load_session(ctx)?;
    if let Some(start) = args.start {
        if start == 0 || !session.goto(start - 1) {
            output::warning(&format!(
                "There is no level {}, starting from level 1",
                start
            ));
        }
    }
    play(&mut session, ctx)
}

fn show_level(session: &PuzzleSession) {
    output::level_header(
        session.current_level(),
        session.level_index() + 1,
        session.level_count(),
    );
    output::info("Type help for commands.");
}

fn play(session: &mut PuzzleSession, ctx: &mut Context) -> Result<Flow> {
    show_level(session);

    loop {
        let prompt = if session.is_complete() {
            format!("[done {}] > ", session.total_score())
        } else {
            format!(
                "[{}/{} | {} pts] > ",
                session.level_index() + 1,
                session.level_count(),
                session.total_score()
            )
        };

        match ctx.next_command(&prompt)? {
            Command::Back => return Ok(Flow::Back),
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => println!("{}", HELP),
            Command::Restart => {
                session.restart();
                output::info("Score reset.");
                show_level(session);
            }
            Command::Goto(n) => {
                if n >= 1 && session.goto(n - 1) {
                    show_level(session);
                } else {
                    output::failure(&format!("Levels are numbered 1 to {}", session.level_count()));
                }
            }
            Command::List => {
                for (i, level) in session.levels().iter().enumerate() {
                    let done = match session.scoreboard().best_score(i) {
                        Some(score) => format!("{} pts", score).bright_green(),
                        None => "".normal(),
                    };
                    println!(
                        "  {:>2}. {:<32} {:<12} {}",
                        i + 1,
                        level.name(),
                        level.difficulty().as_str(),
                        done
                    );
                }
            }
            _ if session.is_complete() => {
                output::info("Every level has been played. Type restart, back or quit.");
            }
            Command::Add { gate, qubits } => {
                let qubits = default_qubits(qubits, session.current_level().num_qubits());
                match session.place(&gate, &qubits) {
                    Ok(placed) => {
                        let placed = placed.to_string();
                        let left = session.builder().remaining().unwrap_or(0);
                        output::success(&format!("Placed {} ({} gate(s) left)", placed, left));
                    }
                    Err(err) => output::failure(&format!("Invalid move: {}", err)),
                }
            }
            Command::Undo => match session.undo() {
                Some(removed) => output::info(&format!("Removed {}", removed)),
                None => output::info("Nothing to undo."),
            },
            Command::Clear => {
                session.clear();
                output::info("Circuit cleared.");
            }
            Command::Run => {
                let report = session.run();
                output::run_report(&report);
            }
            Command::Hint => {
                let hint = session.hint();
                if hint.is_empty() {
                    output::info("No hint for this level.");
                } else {
                    println!("{} {}", "Hint:".bright_yellow().bold(), hint);
                }
            }
            Command::Next => {
                if session.scoreboard().record(session.level_index()).is_none() {
                    output::info("Solve this level first, or type skip.");
                    continue;
                }
                advance(session.advance(), session);
            }
            Command::Skip => {
                let report = session.skip();
                output::warning(&format!("Level skipped, -{} points", report.penalty));
                advance(report.advance, session);
            }
            Command::Circuit => println!("{}", session.builder().draw(&ctx.drawing)),
            Command::State => {
                output::level_info(session.current_level(), session.placements().len());
                for (i, placement) in session.placements().iter().enumerate() {
                    println!("  {}. {}", i + 1, placement);
                }
            }
            Command::Open(_) | Command::Qubits(_) | Command::Init(_) | Command::Measure(_) => {
                output::info("Not available in puzzle mode. Type help for commands.");
            }
        }
    }
}

fn advance(advance: Advance, session: &PuzzleSession) {
    match advance {
        Advance::Next(_) => show_level(session),
        Advance::Complete(summary) => {
            output::summary(&summary);
            output::info("Type restart to play again, or back for the menu.");
        }
    }
}

/// Single-qubit registers need no qubit argument
fn default_qubits(qubits: Vec<usize>, num_qubits: usize) -> Vec<usize> {
    if qubits.is_empty() && num_qubits == 1 {
        vec![0]
    } else {
        qubits
    }
}
