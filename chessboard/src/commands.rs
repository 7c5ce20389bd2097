//! Subcommand implementations. Each returns the text to print.

use std::path::{Path, PathBuf};

use chess::{format_placement, ChessGame, GameError, MemoryGrid};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("failed to access state file {}: {source}", .path.display())]
    StateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode board: {0}")]
    Json(#[from] serde_json::Error),
}

fn game_from_fen(fen: &str) -> Result<ChessGame<MemoryGrid>, CliError> {
    let mut game = ChessGame::new(MemoryGrid::new());
    game.set_up_board()?;
    game.load_fen(fen)?;
    Ok(game)
}

pub fn show(fen: &str, json: bool) -> Result<String, CliError> {
    let game = game_from_fen(fen)?;
    if json {
        Ok(serde_json::to_string_pretty(game.board())?)
    } else {
        Ok(game.board().to_string())
    }
}

pub fn state(fen: &str, digits: bool) -> Result<String, CliError> {
    let game = game_from_fen(fen)?;
    if digits {
        Ok(game.serialized_state())
    } else {
        Ok(game.state_string())
    }
}

pub fn restore(digits: &str) -> Result<String, CliError> {
    let mut game = ChessGame::new(MemoryGrid::new());
    game.set_up_board()?;
    game.set_state_string(digits)?;
    Ok(game.board().to_string())
}

pub fn normalize(fen: &str) -> Result<String, CliError> {
    let game = game_from_fen(fen)?;
    Ok(format_placement(game.board()))
}

pub fn save(fen: &str, path: &Path) -> Result<String, CliError> {
    let game = game_from_fen(fen)?;
    let state = game.serialized_state();
    std::fs::write(path, format!("{}\n", state)).map_err(|source| CliError::StateFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Saved state to {}", path.display());
    Ok(state)
}

pub fn load(path: &Path) -> Result<String, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::StateFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Loaded state from {}", path.display());
    restore(contents.trim_end())
}
