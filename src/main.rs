//! Pente command-line interface
//!
//! Two subcommands: an interactive hotseat game and a batch replay of a
//! recorded move list.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pente::cli;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pente on the command line", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive two-player game
    Play {
        /// Write the move history to a timestamped file when the game ends
        #[arg(long)]
        save_moves: bool,
    },
    /// Replay a recorded move list
    Replay {
        /// Move list of the form `x1,y1;x2,y2;...`
        #[arg(long, conflicts_with = "file")]
        moves: Option<String>,

        /// File containing a recorded move list
        #[arg(long)]
        file: Option<PathBuf>,

        /// Render the board after every move
        #[arg(long)]
        show: bool,

        /// Pause between rendered moves, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    if let Err(e) = run(args) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Play { save_moves } => cli::interactive::run(save_moves),
        Command::Replay {
            moves,
            file,
            show,
            delay_ms,
        } => {
            let list = match (moves, file) {
                (Some(list), None) => list,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read move list from {}", path.display()))?,
                _ => bail!("pass a move list with --moves or --file"),
            };
            cli::replay::run(&list, show, delay_ms)?;
            Ok(())
        }
    }
}
