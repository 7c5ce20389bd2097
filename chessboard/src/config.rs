//! Configuration for the chessboard CLI.
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable.

use std::path::PathBuf;

/// Default tracing filter directive.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Default placement used when a command is given no FEN.
const DEFAULT_START_FEN: &str = chess::STARTING_PLACEMENT;

/// Default file for `save` / `load`.
const DEFAULT_STATE_PATH: &str = "/tmp/chessboard.state";

/// Get the tracing filter directive.
///
/// Priority:
/// 1. `CHESSBOARD_LOG` env variable if set
/// 2. `warn` as fallback
pub fn get_log_filter() -> String {
    if let Ok(filter) = std::env::var("CHESSBOARD_LOG") {
        return filter;
    }

    DEFAULT_LOG_FILTER.to_string()
}

/// Get the FEN used when none is passed on the command line.
///
/// Priority:
/// 1. `CHESSBOARD_START_FEN` env variable if set
/// 2. the standard starting placement as fallback
pub fn get_start_fen() -> String {
    if let Ok(fen) = std::env::var("CHESSBOARD_START_FEN") {
        return fen;
    }

    DEFAULT_START_FEN.to_string()
}

/// Get the state file path.
///
/// Priority:
/// 1. `CHESSBOARD_STATE_PATH` env variable if set
/// 2. `/tmp/chessboard.state` as fallback
pub fn get_state_path() -> PathBuf {
    if let Ok(path) = std::env::var("CHESSBOARD_STATE_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_STATE_PATH)
}
