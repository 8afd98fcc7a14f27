//! Gate tutorial

use super::{Context, Flow};
use crate::input::Command;
use crate::output;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use qpuzzle_core::AsciiConfig;
use qpuzzle_game::tutorial::{self, LessonAttempt, LESSON_GATE_LIMIT};
use qpuzzle_game::{Lesson, LESSONS};

#[derive(Args, Debug, Default)]
pub struct TutorialArgs {
    /// Open the lesson for this gate directly
    pub gate: Option<String>,
}

const HELP: &str = "\
  list           show the lessons
  lesson G | N   open the lesson for gate G or number N
  add Q..        apply the lesson gate (add 0, or H 0)
  run            show the result and compare with the target
  clear          start the lesson again
  next           open the following lesson
  circuit        draw the circuit
  state          repeat the lesson text
  back | quit    return to the menu | leave";

pub fn run(args: TutorialArgs, ctx: &mut Context) -> Result<Flow> {
    output::heading("Quantum Gates Tutorial");

    let mut attempt: Option<LessonAttempt> = None;
    match args.gate.as_deref() {
        Some(gate) => attempt = open(gate)?,
        None => {
            list();
            output::info("Open a lesson with lesson H or its number. Type help for commands.");
        }
    }

    loop {
        let prompt = match &attempt {
            Some(a) => format!("[tutorial {}] > ", a.lesson().gate),
            None => "[tutorial] > ".to_string(),
        };

        match ctx.next_command(&prompt)? {
            Command::Back => return Ok(Flow::Back),
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => println!("{}", HELP),
            Command::List => list(),
            Command::Open(name) => {
                if let Some(next) = open(&name)? {
                    attempt = Some(next);
                }
            }
            Command::Goto(n) => {
                if let Some(next) = open(&n.to_string())? {
                    attempt = Some(next);
                }
            }
            Command::Next => {
                let index = attempt
                    .as_ref()
                    .and_then(|a| LESSONS.iter().position(|l| l.gate == a.lesson().gate))
                    .map_or(0, |i| i + 1);
                match LESSONS.get(index) {
                    Some(lesson) => attempt = Some(start(lesson)?),
                    None => output::success("That was the last lesson. Try puzzle mode next!"),
                }
            }
            command => match attempt.as_mut() {
                Some(current) => lesson_command(current, command, &ctx.drawing),
                None => output::info("Open a lesson first, e.g. lesson H"),
            },
        }
    }
}

fn lesson_command(attempt: &mut LessonAttempt, command: Command, drawing: &AsciiConfig) {
    let lesson = attempt.lesson();
    match command {
        Command::Add { gate, qubits } => {
            // `add 0` arrives as a gate named "0"
            let (gate, qubits) = match gate.parse::<usize>() {
                Ok(q) => (lesson.gate.to_string(), std::iter::once(q).chain(qubits).collect()),
                Err(_) => (gate, qubits),
            };
            if !gate.eq_ignore_ascii_case(lesson.gate) {
                output::failure(&format!("This lesson only uses the {} gate", lesson.gate));
                return;
            }
            let qubits: Vec<usize> = if qubits.is_empty() {
                (0..lesson.num_qubits).collect()
            } else {
                qubits
            };
            match attempt.apply(&qubits).map(|placed| placed.to_string()) {
                Ok(placed) => output::success(&format!(
                    "Applied {} ({} of {})",
                    placed,
                    attempt.applied(),
                    LESSON_GATE_LIMIT
                )),
                Err(err) => output::failure(&err.to_string()),
            }
        }
        Command::Run => match attempt.run() {
            Ok(run) => {
                println!("{}  {}", "Initial:".bold(), lesson.input_state);
                println!("{}  {}", "Gates:  ".bold(), attempt.applied());
                println!("{}  {}", "Result: ".bold(), run.formatted);
                output::state_table(&run.state);
                if run.matches_target {
                    output::success(&format!("You reached {}. Type next for the next lesson.", lesson.target_state));
                } else {
                    output::failure(&format!("Not {} yet.", lesson.target_state));
                }
            }
            Err(err) => output::failure(&err.to_string()),
        },
        Command::Clear | Command::Undo | Command::Restart => {
            attempt.clear();
            output::info("Lesson reset.");
        }
        Command::Circuit => println!("{}", attempt.draw(drawing)),
        Command::State => show(lesson),
        _ => output::info("Not available in the tutorial. Type help for commands."),
    }
}

fn list() {
    for (i, lesson) in LESSONS.iter().enumerate() {
        println!("  {}. {:<8} {}", i + 1, lesson.gate, lesson.name);
    }
}

fn show(lesson: &Lesson) {
    output::heading(lesson.name);
    println!("{}", lesson.description);
    println!("{}  {}", "Example:".bold(), lesson.example.bright_white());
    println!(
        "{}  {}  →  {}",
        "Task:   ".bold(),
        lesson.input_state,
        lesson.target_state.bright_yellow()
    );
    output::info(&format!(
        "Apply {} up to {} times with add, then run. The phase has to match exactly.",
        lesson.gate, LESSON_GATE_LIMIT
    ));
}

fn start(lesson: &'static Lesson) -> Result<LessonAttempt> {
    show(lesson);
    Ok(LessonAttempt::new(lesson)?)
}

/// Open a lesson by gate symbol or 1-based number
fn open(name: &str) -> Result<Option<LessonAttempt>> {
    let lesson = match name.trim().parse::<usize>() {
        Ok(n) if n >= 1 => LESSONS.get(n - 1),
        Ok(_) => None,
        Err(_) => tutorial::lesson(name),
    };
    match lesson {
        Some(lesson) => Ok(Some(start(lesson)?)),
        None => {
            output::failure(&format!("No lesson '{}'. Type list to see them.", name.trim()));
            Ok(None)
        }
    }
}
