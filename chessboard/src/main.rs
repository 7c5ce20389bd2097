//! chessboard - inspect and convert board placements.
//!
//! Parses FEN placement fields, prints the board, and converts between the
//! letter and digit state strings used by the host game. Runtime defaults
//! live in [`config`].

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "chessboard", about = "FEN placement parser and board state tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the board for a FEN.
    Show {
        /// FEN string; only the placement field is read.
        fen: Option<String>,
        /// Print the board as JSON instead of a diagram.
        #[arg(long)]
        json: bool,
    },
    /// Print the 64-character state string.
    State {
        fen: Option<String>,
        /// Print the digit form used for saving instead of letters.
        #[arg(long)]
        digits: bool,
    },
    /// Rebuild a board from a digit state string.
    Restore { digits: String },
    /// Re-emit the placement field of a FEN.
    Fen { fen: Option<String> },
    /// Write the digit state string of a FEN to the state file.
    Save {
        fen: Option<String>,
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Read the state file and print the restored board.
    Load {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(config::get_log_filter())
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fen_or_default = |fen: Option<String>| fen.unwrap_or_else(config::get_start_fen);

    let output = match cli.command {
        Commands::Show { fen, json } => {
            commands::show(&fen_or_default(fen), json).context("failed to show board")?
        }
        Commands::State { fen, digits } => {
            commands::state(&fen_or_default(fen), digits).context("failed to build state string")?
        }
        Commands::Restore { digits } => {
            commands::restore(&digits).context("failed to restore board")?
        }
        Commands::Fen { fen } => {
            commands::normalize(&fen_or_default(fen)).context("failed to parse FEN")?
        }
        Commands::Save { fen, path } => {
            let path = path.unwrap_or_else(config::get_state_path);
            commands::save(&fen_or_default(fen), &path).context("failed to save board")?
        }
        Commands::Load { path } => {
            let path = path.unwrap_or_else(config::get_state_path);
            commands::load(&path).context("failed to load board")?
        }
    };

    println!("{}", output);
    Ok(())
}
