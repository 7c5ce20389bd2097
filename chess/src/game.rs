use crate::board::Board;
use crate::fen::{parse_placement, FenError, STARTING_PLACEMENT};
use crate::host::{sprite_name, HostGrid, PieceHandle, PIECE_SIZE, SQUARE_TEXTURE};
use crate::rules::{GameRules, PermissiveRules};
use crate::state::{self, StateError};
use crate::types::{Owner, Square};

/// Chess board bound to a host grid.
///
/// The board is only ever replaced wholesale. A new board is parsed into a
/// scratch value and pushed to the host on success; a rejected FEN or state
/// string leaves both the board and the host grid untouched.
#[derive(Debug, Clone)]
pub struct ChessGame<G: HostGrid, R: GameRules = PermissiveRules> {
    grid: G,
    rules: R,
    board: Board,
    to_move: Owner,
}

impl<G: HostGrid> ChessGame<G, PermissiveRules> {
    pub fn new(grid: G) -> Self {
        Self::with_rules(grid, PermissiveRules)
    }
}

impl<G: HostGrid, R: GameRules> ChessGame<G, R> {
    pub fn with_rules(grid: G, rules: R) -> Self {
        Self {
            grid,
            rules,
            board: Board::empty(),
            to_move: Owner::White,
        }
    }

    /// Build the 8x8 grid and place the standard starting position.
    pub fn set_up_board(&mut self) -> Result<(), GameError> {
        self.grid.initialize_squares(PIECE_SIZE, SQUARE_TEXTURE);
        self.to_move = Owner::White;
        self.load_fen(STARTING_PLACEMENT)
    }

    /// Replace the position with the placement field of `fen`.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), GameError> {
        let board = parse_placement(fen).inspect_err(|e| {
            tracing::warn!("Rejected FEN {:?}: {}", fen, e);
        })?;
        self.commit(board);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn to_move(&self) -> Owner {
        self.to_move
    }

    /// Turn order is kept by the host; it tells the game who is on move.
    pub fn set_to_move(&mut self, owner: Owner) {
        self.to_move = owner;
    }

    /// Letter notation of the current board.
    pub fn state_string(&self) -> String {
        state::notation_string(&self.board)
    }

    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    /// Digit form used for saving.
    pub fn serialized_state(&self) -> String {
        state::serialize(&self.board)
    }

    /// Restore from the digit form. Every occupied square comes back as a
    /// white pawn.
    pub fn set_state_string(&mut self, s: &str) -> Result<(), GameError> {
        let board = state::deserialize(s).inspect_err(|e| {
            tracing::warn!("Rejected state string: {}", e);
        })?;
        self.commit(board);
        Ok(())
    }

    pub fn owner_at(&self, x: usize, y: usize) -> Option<Owner> {
        self.board.get(x, y).map(|piece| piece.owner)
    }

    /// Remove every piece from the host grid.
    pub fn stop_game(&mut self) {
        for square in Square::all() {
            self.grid.set_bit(square, None);
        }
        self.board.clear();
        tracing::debug!("Board cleared");
    }

    pub fn can_bit_move_from(&self, from: Square) -> bool {
        match self.board.piece_at(from) {
            Some(piece) => self
                .rules
                .can_bit_move_from(&self.board, piece, from, self.to_move),
            None => false,
        }
    }

    pub fn can_bit_move_from_to(&self, from: Square, to: Square) -> bool {
        match self.board.piece_at(from) {
            Some(piece) => self.rules.can_bit_move_from_to(&self.board, piece, from, to),
            None => false,
        }
    }

    pub fn action_for_empty_holder(&self, square: Square) -> bool {
        self.rules.action_for_empty_holder(&self.board, square)
    }

    pub fn check_for_winner(&self) -> Option<Owner> {
        self.rules.check_for_winner(&self.board)
    }

    pub fn check_for_draw(&self) -> bool {
        self.rules.check_for_draw(&self.board)
    }

    fn commit(&mut self, board: Board) {
        for square in Square::all() {
            self.grid.set_bit(square, None);
        }

        for (square, piece) in board.pieces() {
            let sprite = sprite_name(piece);
            tracing::trace!("Placing {} on {}", sprite, square);

            let mut handle = self.grid.load_piece(&sprite);
            handle.set_owner(piece.owner.index());
            handle.set_position(self.grid.square_position(square));
            handle.set_parent(square);
            handle.set_game_tag(piece.tag());
            self.grid.set_bit(square, Some(handle));
        }

        self.board = board;
        tracing::debug!("Board committed with {} pieces", self.board.piece_count());
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("FEN parse error: {0}")]
    FenError(#[from] FenError),
    #[error("State string error: {0}")]
    StateError(#[from] StateError),
}
