pub mod board;
pub mod fen;
pub mod game;
pub mod host;
pub mod rules;
pub mod state;
pub mod types;

pub use board::Board;
pub use fen::{format_placement, parse_placement, FenError, STARTING_PLACEMENT};
pub use game::{ChessGame, GameError};
pub use host::{HostGrid, MemoryGrid, PieceHandle};
pub use rules::{GameRules, PermissiveRules};
pub use state::{deserialize, notation_string, piece_notation, serialize, StateError};
pub use types::{GameTag, Owner, Piece, PieceKind, Square, TagError};
