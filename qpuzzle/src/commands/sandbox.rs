//! Sandbox mode

use super::{Context, Flow};
use crate::input::Command;
use crate::output;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use qpuzzle_game::Sandbox;
use qpuzzle_gates::GateRegistry;

#[derive(Args, Debug, Default)]
pub struct SandboxArgs {
    /// Number of qubits (1 to 4), defaults to the configured value
    #[arg(short, long)]
    pub qubits: Option<usize>,
}

const HELP: &str = "\
  list           show every gate with its qubit count
  undo | clear   remove the last gate | all gates
  run            show the final state and probabilities
  measure [N]    sample N measurements
  qubits N       resize the register (clears the circuit)
  init KET       choose the input state, e.g. init |+⟩ ⊗ |1⟩
  circuit        draw the circuit
  state          show the input state and gate list
  back | quit    return to the menu | leave";

pub fn run(args: SandboxArgs, ctx: &mut Context) -> Result<Flow> {
    let qubits = args.qubits.unwrap_or(ctx.config.sandbox.qubits);
    let mut sandbox = Sandbox::new(qubits)?;

    output::heading("Quantum Sandbox");
    println!(
        "Free play on {} qubit(s) starting from {}. Type help for commands.",
        sandbox.num_qubits(),
        sandbox.initial_label()
    );

    loop {
        let prompt = format!("[sandbox {}q] > ", sandbox.num_qubits());
        match ctx.next_command(&prompt)? {
            Command::Back => return Ok(Flow::Back),
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => println!("{}", help_text(&ctx.gates)),
            Command::List => output::gate_table(&ctx.gates.list_gates()),
            Command::Add { gate, qubits } => {
                let qubits = if qubits.is_empty() && sandbox.num_qubits() == 1 {
                    vec![0]
                } else {
                    qubits
                };
                match sandbox.place(&gate, &qubits) {
                    Ok(placed) => output::success(&format!("Placed {}", placed)),
                    Err(err) => output::failure(&format!("Invalid move: {}", err)),
                }
            }
            Command::Undo => match sandbox.undo() {
                Some(removed) => output::info(&format!("Removed {}", removed)),
                None => output::info("Nothing to undo."),
            },
            Command::Clear => {
                sandbox.clear();
                output::info("Circuit cleared.");
            }
            Command::Run => match sandbox.run() {
                Ok(run) => output::sandbox_run(&run),
                Err(err) => output::failure(&err.to_string()),
            },
            Command::Measure(shots) => {
                let shots = shots.unwrap_or(ctx.config.sandbox.shots);
                match sandbox.measure(shots, ctx.config.sandbox.seed) {
                    Ok(counts) => {
                        println!("{} shots:", counts.total_shots());
                        for (outcome, count) in counts.sorted() {
                            let share = counts.probability(outcome);
                            println!(
                                "  |{}⟩  {:>6}  {}",
                                outcome,
                                count,
                                "█".repeat((share * 30.0).round() as usize).bright_blue()
                            );
                        }
                    }
                    Err(err) => output::failure(&err.to_string()),
                }
            }
            Command::Qubits(n) => match sandbox.set_qubit_count(n) {
                Ok(()) => output::info(&format!(
                    "Now {} qubit(s), starting from {}.",
                    n,
                    sandbox.initial_label()
                )),
                Err(err) => output::failure(&err.to_string()),
            },
            Command::Init(ket) => match sandbox.set_initial_state(&ket) {
                Ok(()) => output::info(&format!("Input state set to {}.", sandbox.initial_label())),
                Err(err) => output::failure(&err.to_string()),
            },
            Command::Circuit => println!("{}", sandbox.draw(&ctx.drawing)),
            Command::State => {
                println!("{}  {}", "Input:".bold(), sandbox.initial_label());
                output::state_table(sandbox.initial_state());
                for (i, placement) in sandbox.placements().iter().enumerate() {
                    println!("  {}. {}", i + 1, placement);
                }
            }
            _ => output::info("Not available in the sandbox. Type help for commands."),
        }
    }
}

/// Help with the `add` line naming every registered gate
fn help_text(gates: &GateRegistry) -> String {
    format!(
        "  add GATE Q..   place any gate ({})\n{}",
        gates.gate_names().join(" "),
        HELP
    )
}
