//! qpuzzle: learn quantum gates by solving circuit puzzles in the terminal

mod commands;
mod config;
mod input;
mod output;
mod terminal;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use commands::learn::LearnArgs;
use commands::levels::LevelsArgs;
use commands::puzzle::PuzzleArgs;
use commands::sandbox::SandboxArgs;
use commands::tutorial::TutorialArgs;
use commands::{Context, Flow};
use config::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "qpuzzle")]
#[command(author, version, about = "Quantum circuit puzzles for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "QPUZZLE_CONFIG")]
    config: Option<PathBuf>,

    /// Level file to play instead of the built-in levels
    #[arg(long, global = true)]
    levels: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the main menu (default)
    Play,
    /// Solve the puzzle levels
    Puzzle(PuzzleArgs),
    /// Build circuits freely
    Sandbox(SandboxArgs),
    /// Gate by gate lessons
    Tutorial(TutorialArgs),
    /// Reference pages on quantum computing
    Learn(LearnArgs),
    /// Check a level file and list its levels
    Levels(LevelsArgs),
}

fn init_tracing(cli: &Cli, config: &AppConfig) {
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
    };

    // Logs go to stderr so they never interleave with the game screen
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load config {}", path.display()),
        None => "invalid default configuration".to_string(),
    })?;

    init_tracing(&cli, &config);
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(levels = ?cli.levels, "starting");

    let command = cli.command.unwrap_or(Commands::Play);

    match &command {
        Commands::Learn(LearnArgs { page: Some(page) }) => return commands::learn::print_page(page),
        Commands::Levels(args) => {
            let levels = cli.levels.as_deref().or(config.levels_path.as_deref());
            return commands::levels::run(args, &config, levels);
        }
        _ => {}
    }

    let mut ctx = Context::new(config, cli.levels)?;
    let flow = match command {
        Commands::Play => {
            commands::play::run(&mut ctx)?;
            Flow::Quit
        }
        Commands::Puzzle(args) => commands::puzzle::run(args, &mut ctx)?,
        Commands::Sandbox(args) => commands::sandbox::run(args, &mut ctx)?,
        Commands::Tutorial(args) => commands::tutorial::run(args, &mut ctx)?,
        Commands::Learn(_) => commands::learn::run(&mut ctx)?,
        Commands::Levels(_) => Flow::Quit,
    };
    tracing::debug!(?flow, "finished");
    Ok(())
}
