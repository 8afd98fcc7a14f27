//! Learn hub

use super::{Context, Flow};
use crate::input::Command;
use crate::output;
use anyhow::Result;
use clap::Args;
use qpuzzle_game::learn::{self, PAGES};

#[derive(Args, Debug, Default)]
pub struct LearnArgs {
    /// Print one page and exit (concepts, gates, algorithms, resources, howto)
    pub page: Option<String>,
}

/// Print a page straight away, without the prompt
pub fn print_page(name: &str) -> Result<()> {
    match learn::page(name) {
        Some(page) => {
            print!("{}", page);
            Ok(())
        }
        None => anyhow::bail!("No learn page '{}'", name),
    }
}

pub fn run(ctx: &mut Context) -> Result<Flow> {
    output::heading("Quantum Computing Learn Hub");
    list();

    loop {
        match ctx.next_command("[learn] > ")? {
            Command::Back => return Ok(Flow::Back),
            Command::Quit => return Ok(Flow::Quit),
            Command::List | Command::Help => list(),
            Command::Open(name) => show(&name),
            Command::Goto(n) => match n.checked_sub(1).and_then(|i| PAGES.get(i)) {
                Some(page) => print!("\n{}", page),
                None => output::failure(&format!("Pages are numbered 1 to {}", PAGES.len())),
            },
            _ => output::info("Type a page number or name, list, back or quit."),
        }
    }
}

fn show(name: &str) {
    match learn::page(name) {
        Some(page) => print!("\n{}", page),
        None => output::failure(&format!("No page '{}'", name.trim())),
    }
}

fn list() {
    for (i, page) in PAGES.iter().enumerate() {
        println!("  {}. {:<11} {}", i + 1, page.key, page.title);
    }
    output::info("Open a page with its number or with page NAME.");
}
