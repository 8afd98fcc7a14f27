//! Subcommands and the interactive screens behind them

pub mod learn;
pub mod levels;
pub mod play;
pub mod puzzle;
pub mod sandbox;
pub mod tutorial;

use crate::config::AppConfig;
use crate::input::{self, Command};
use crate::output;
use crate::terminal::{Line, Prompt};
use anyhow::Result;
use qpuzzle_core::AsciiConfig;
use qpuzzle_gates::GateRegistry;
use std::path::PathBuf;

/// Where control goes when a screen ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Return to the menu
    Back,
    /// Leave the program
    Quit,
}

/// Settings and input shared by every screen
pub struct Context {
    pub config: AppConfig,
    /// `--levels` wins over `levels_path` from the config file
    pub levels_path: Option<PathBuf>,
    pub prompt: Prompt,
    pub gates: GateRegistry,
    /// Plain ASCII circuits when color is off
    pub drawing: AsciiConfig,
}

impl Context {
    pub fn new(config: AppConfig, levels_override: Option<PathBuf>) -> Result<Self> {
        let levels_path = levels_override.or_else(|| config.levels_path.clone());
        Ok(Self {
            drawing: AsciiConfig::for_terminal(!config.color),
            config,
            levels_path,
            prompt: Prompt::new()?,
            gates: GateRegistry::standard(),
        })
    }

    /// Read until the player enters a command
    ///
    /// Parse errors are printed and the prompt repeats. Ctrl-D reads as
    /// `quit`.
    pub fn next_command(&mut self, prompt: &str) -> Result<Command> {
        loop {
            let text = match self.prompt.read(prompt)? {
                Line::Text(text) => text,
                Line::Interrupted => continue,
                Line::Eof => return Ok(Command::Quit),
            };
            match input::parse(&text, &self.gates) {
                Ok(Some(command)) => return Ok(command),
                Ok(None) => {}
                Err(err) => output::failure(&err.to_string()),
            }
        }
    }
}
