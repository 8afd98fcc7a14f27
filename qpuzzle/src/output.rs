//! Terminal formatting

use colored::Colorize;
use qpuzzle_game::{
    Difficulty, EvaluationOutcome, Level, RunReport, SandboxRun, SessionSummary, SkippedLevel,
};
use qpuzzle_gates::GateInfo;
use qpuzzle_state::{basis_label, format_state, DenseState};

/// Amplitudes below this are not printed
const DISPLAY_EPSILON: f64 = 1e-3;

pub const LOGO: &str = r"
   ____  _____                _
  / __ \|  __ \              | |
 | |  | | |__) |   _ _________| | ___
 | |  | |  ___/ | | |_  /_  / | |/ _ \
 | |__| | |   | |_| |/ / / /| | |  __/
  \___\_\_|    \__,_/___/___|_|_|\___|
";

pub fn splash() {
    println!("{}", LOGO.bright_cyan().bold());
    println!("  {}", "Quantum Puzzle Game".bold());
    println!("  {}\n", "Learn superposition and entanglement one gate at a time".dimmed());
}

pub fn heading(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "─".repeat(text.chars().count()).bright_cyan());
}

pub fn success(text: &str) {
    println!("{} {}", "✓".bright_green().bold(), text.bright_green());
}

pub fn failure(text: &str) {
    println!("{} {}", "✗".bright_red().bold(), text.bright_red());
}

pub fn warning(text: &str) {
    println!("{} {}", "!".yellow().bold(), text.yellow());
}

pub fn info(text: &str) {
    println!("{}", text.dimmed());
}

fn difficulty(d: Difficulty) -> colored::ColoredString {
    let text = d.as_str();
    match d {
        Difficulty::Beginner => text.green(),
        Difficulty::Intermediate => text.cyan(),
        Difficulty::Advanced => text.yellow(),
        Difficulty::Expert => text.magenta(),
        Difficulty::Master => text.red().bold(),
    }
}

/// Title block shown when a level is loaded
pub fn level_header(level: &Level, number: usize, total: usize) {
    heading(&format!("Level {}/{}: {}", number, total, level.name()));
    println!("{}  {}", "Difficulty:".bold(), difficulty(level.difficulty()));
    if !level.description().is_empty() {
        println!("{}", level.description());
    }
    level_info(level, 0);
}

/// Input, target, register and gate budget
pub fn level_info(level: &Level, gates_used: usize) {
    println!("{}  {}", "Input: ".bold(), level.input_label().bright_white());
    println!("{}  {}", "Target:".bold(), level.target_label().bright_yellow());
    let phase = if level.is_phase_sensitive() {
        " (phase must match exactly)"
    } else {
        ""
    };
    println!(
        "{}  {}{}",
        "Qubits:".bold(),
        level.num_qubits(),
        phase.dimmed()
    );
    println!(
        "{}  {}/{}",
        "Gates: ".bold(),
        gates_used,
        level.max_gates()
    );
    println!("{}  {}", "Allowed:".bold(), level.allowed_gates().join(" "));
}

/// One row per gate: symbol, qubit count, and what it does
pub fn gate_table(gates: &[GateInfo]) {
    for gate in gates {
        let qubits = if gate.num_qubits == 1 {
            "1 qubit".to_string()
        } else {
            format!("{} qubits", gate.num_qubits)
        };
        let inverse = if gate.is_hermitian { "self-inverse" } else { "" };
        println!(
            "  {}  {:<9} {}  {}",
            format!("{:<8}", gate.name).bright_white().bold(),
            qubits,
            format!("{:<12}", inverse).dimmed(),
            gate.description
        );
    }
}

/// Amplitude table, one line per basis state with visible weight
pub fn state_table(state: &DenseState) {
    let n = state.num_qubits();
    for (index, amp) in state.amplitudes().iter().enumerate() {
        let p = amp.norm_sqr();
        if amp.norm() < DISPLAY_EPSILON {
            continue;
        }
        let bar = "█".repeat((p * 20.0).round() as usize);
        println!(
            "  {}  {:>7.3}{:>+8.3}i  {:>5.1}%  {}",
            basis_label(index, n),
            amp.re,
            amp.im,
            p * 100.0,
            bar.bright_blue()
        );
    }
}

pub fn run_report(report: &RunReport) {
    let eval = &report.evaluation;
    if let Some(state) = &eval.final_state {
        println!("{}  {}", "Result:".bold(), format_state(state, DISPLAY_EPSILON));
        state_table(state);
    }
    if let Some(fidelity) = eval.fidelity {
        println!("{}  {:.4}", "Fidelity:".bold(), fidelity);
    }

    match &eval.outcome {
        EvaluationOutcome::Solved => {
            success("Puzzle solved!");
            if let (Some(score), Some(rating)) = (report.score, report.rating) {
                println!(
                    "  {} points for {} gate(s), efficiency: {}",
                    score.to_string().bright_green().bold(),
                    eval.gates_used,
                    rating.to_string().bright_yellow()
                );
            }
            if report.new_best {
                println!("  {}", "New best for this level".bright_green());
            }
            info("Type next to continue.");
        }
        EvaluationOutcome::NotSolved => failure("Not the target state yet. Try again, or type hint."),
        EvaluationOutcome::InvalidMove(reason) => failure(&format!("Invalid move: {}", reason)),
    }
}

pub fn summary(summary: &SessionSummary) {
    heading("All puzzles complete!");
    println!("{}  {}", "Final score:".bold(), summary.total_score.to_string().bright_green().bold());
    println!("{}  {}", "Total gates used:".bold(), summary.total_gates);
    println!("{}  {:.1}", "Average spare gates:".bold(), summary.average_spare_gates);
    println!(
        "{}  {}/{}",
        "Levels completed:".bold(),
        summary.levels_completed,
        summary.levels_total
    );
    if summary.skips > 0 {
        println!("{}  {}", "Levels skipped:".bold(), summary.skips);
    }
}

pub fn sandbox_run(run: &SandboxRun) {
    println!("{}  {}", "State:".bold(), format_state(&run.state, DISPLAY_EPSILON));
    if let Some(label) = &run.label {
        println!("{}  {}", "Known as:".bold(), label.bright_yellow());
    }
    state_table(&run.state);
}

pub fn skipped_levels(skipped: &[SkippedLevel]) {
    for entry in skipped {
        warning(&format!("Skipped {}", entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_lines_fit_terminal() {
        assert!(LOGO.lines().all(|l| l.chars().count() <= 80));
    }
}
