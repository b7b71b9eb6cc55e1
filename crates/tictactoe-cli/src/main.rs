//! Tic-tac-toe on the terminal.
//!
//! Reads moves from stdin, one per line, and prints the result when the game
//! ends. Errors in a move are reported and the same player moves again.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tictactoe_cli::config::GameConfig;
use tictactoe_cli::input::Command;
use tictactoe_engine::{Engine, Outcome};
use tracing_subscriber::EnvFilter;

/// Two-player tic-tac-toe on an N×N board.
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on an N×N board")]
struct Args {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size, overriding the config file
    #[arg(short, long)]
    size: Option<i32>,

    /// Default log filter when RUST_LOG is unset, overriding the config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = GameConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting {0}x{0} game", config.size);

    let announce = |outcome: Outcome| println!("{}", outcome);
    let mut engine = Engine::with_size(config.size, announce)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !engine.is_finished() {
        print!("{} to move (x y): ", engine.next_turn());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            tracing::info!("Input closed before the game finished");
            break;
        };

        match Command::parse(&line?) {
            Ok(Some(Command::Move { x, y })) => {
                if let Err(e) = engine.turn(x, y) {
                    eprintln!("Illegal move: {}", e);
                }
            }
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
