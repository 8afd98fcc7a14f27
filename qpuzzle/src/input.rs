//! Parsing of the commands typed at the game prompts
//!
//! `add CNOT 0 1` and the shorthand `CNOT 0 1` both place a gate. Qubits may
//! be written as `1` or `q1`.

use qpuzzle_core::QubitId;
use qpuzzle_gates::GateRegistry;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { gate: String, qubits: Vec<usize> },
    Undo,
    Clear,
    Run,
    Hint,
    Skip,
    Next,
    Restart,
    /// Jump to a level or lesson, numbered from 1
    Goto(usize),
    /// Open a lesson or page by name
    Open(String),
    Qubits(usize),
    Init(String),
    Measure(Option<usize>),
    Circuit,
    State,
    List,
    Help,
    Back,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}', type help for the list")]
    Unknown(String),
    #[error("{command} needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("'{value}' is not a valid {what}")]
    BadNumber { value: String, what: &'static str },
}

/// Parse one line; `Ok(None)` for a blank line
pub fn parse(line: &str, gates: &GateRegistry) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match first.to_ascii_lowercase().as_str() {
        "add" | "place" | "apply" => {
            let (gate, qubits) = rest.split_first().ok_or(ParseError::MissingArgument {
                command: "add",
                what: "a gate, e.g. add CNOT 0 1",
            })?;
            Command::Add {
                gate: (*gate).to_string(),
                qubits: parse_qubits(qubits)?,
            }
        }
        "undo" => Command::Undo,
        "clear" | "reset" => Command::Clear,
        "run" | "go" => Command::Run,
        "hint" => Command::Hint,
        "skip" => Command::Skip,
        "next" | "n" => Command::Next,
        "restart" => Command::Restart,
        "level" | "goto" => Command::Goto(number(&rest, "level", "a level number")?),
        "lesson" | "page" | "open" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "open",
                    what: "a name or number",
                });
            }
            Command::Open(rest.join(" "))
        }
        "qubits" => Command::Qubits(number(&rest, "qubits", "a qubit count")?),
        "init" | "input" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "init",
                    what: "a ket, e.g. init |+0⟩",
                });
            }
            Command::Init(rest.join(" "))
        }
        "measure" | "shots" => match rest.first() {
            Some(value) => Command::Measure(Some(parse_number(value, "shot count")?)),
            None => Command::Measure(None),
        },
        "circuit" | "draw" => Command::Circuit,
        "state" | "info" => Command::State,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "back" | "menu" => Command::Back,
        "quit" | "exit" | "q" => Command::Quit,
        _ if gates.contains(first) => Command::Add {
            gate: first.to_string(),
            qubits: parse_qubits(&rest)?,
        },
        _ => match first.parse::<usize>() {
            Ok(n) if rest.is_empty() => Command::Goto(n),
            _ => return Err(ParseError::Unknown(first.to_string())),
        },
    };
    Ok(Some(command))
}

fn parse_qubits(words: &[&str]) -> Result<Vec<usize>, ParseError> {
    words
        .iter()
        .flat_map(|w| w.split(','))
        .filter(|w| !w.is_empty())
        .map(|w| {
            w.parse::<QubitId>()
                .map(|q| q.index())
                .map_err(|_| ParseError::BadNumber {
                    value: w.to_string(),
                    what: "qubit",
                })
        })
        .collect()
}

fn number(rest: &[&str], command: &'static str, what: &'static str) -> Result<usize, ParseError> {
    let value = rest
        .first()
        .ok_or(ParseError::MissingArgument { command, what })?;
    parse_number(value, what)
}

fn parse_number(value: &str, what: &'static str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::BadNumber {
        value: value.to_string(),
        what,
    })
}
