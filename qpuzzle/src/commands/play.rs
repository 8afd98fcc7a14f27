//! Splash screen and main menu

use super::{learn, puzzle, sandbox, tutorial, Context, Flow};
use crate::output;
use crate::terminal::Line;
use anyhow::Result;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Puzzle,
    Sandbox,
    Tutorial,
    Learn,
    Quit,
}

const MENU: [(Choice, &str, &str); 5] = [
    (Choice::Puzzle, "Puzzle mode", "solve levels from superposition to error correction"),
    (Choice::Sandbox, "Sandbox", "build any circuit on up to 4 qubits"),
    (Choice::Tutorial, "Tutorial", "one short lesson per gate"),
    (Choice::Learn, "Learn hub", "concepts, gates, algorithms and resources"),
    (Choice::Quit, "Quit", ""),
];

fn parse_choice(text: &str) -> Option<Choice> {
    let text = text.trim().to_ascii_lowercase();
    if let Ok(n) = text.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| MENU.get(i)).map(|(c, _, _)| *c);
    }
    match text.as_str() {
        "puzzle" | "play" | "p" => Some(Choice::Puzzle),
        "sandbox" | "s" => Some(Choice::Sandbox),
        "tutorial" | "t" => Some(Choice::Tutorial),
        "learn" | "l" => Some(Choice::Learn),
        "quit" | "exit" | "q" => Some(Choice::Quit),
        _ => None,
    }
}

fn show_menu() {
    output::heading("Choose a mode");
    for (i, (_, name, blurb)) in MENU.iter().enumerate() {
        println!("  {}. {:<12} {}", i + 1, name.bold(), blurb.dimmed());
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    output::splash();

    loop {
        show_menu();
        let choice = loop {
            let text = match ctx.prompt.read("menu > ")? {
                Line::Text(text) => text,
                Line::Interrupted => continue,
                Line::Eof => return Ok(()),
            };
            if text.is_empty() {
                continue;
            }
            match parse_choice(&text) {
                Some(choice) => break choice,
                None => output::failure("Pick 1 to 5, or a mode name"),
            }
        };

        let flow = match choice {
            Choice::Puzzle => puzzle::run(puzzle::PuzzleArgs::default(), ctx),
            Choice::Sandbox => sandbox::run(sandbox::SandboxArgs::default(), ctx),
            Choice::Tutorial => tutorial::run(tutorial::TutorialArgs::default(), ctx),
            Choice::Learn => learn::run(ctx),
            Choice::Quit => Ok(Flow::Quit),
        };

        match flow {
            Ok(Flow::Back) => {}
            Ok(Flow::Quit) => break,
            // A failed screen returns to the menu
            Err(err) => output::failure(&format!("{:#}", err)),
        }
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Some(Choice::Puzzle));
        assert_eq!(parse_choice(" Sandbox "), Some(Choice::Sandbox));
        assert_eq!(parse_choice("t"), Some(Choice::Tutorial));
        assert_eq!(parse_choice("4"), Some(Choice::Learn));
        assert_eq!(parse_choice("5"), Some(Choice::Quit));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("6"), None);
        assert_eq!(parse_choice("dance"), None);
    }
}
