//! 8x8 board of optional pieces.

use crate::types::{Owner, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// An 8x8 board. Rows are stored in FEN order, so row 0 is rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.y()][square.x()]
    }

    /// Coordinate lookup that tolerates out-of-range input.
    pub fn get(&self, x: usize, y: usize) -> Option<Piece> {
        Square::new(x, y).and_then(|sq| self.piece_at(sq))
    }

    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.squares[square.y()][square.x()] = cell;
    }

    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// All 64 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |sq| (sq, self.piece_at(sq)))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells()
            .filter_map(|(sq, cell)| cell.map(|piece| (sq, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn count(&self, owner: Owner, kind: PieceKind) -> usize {
        self.pieces()
            .filter(|(_, p)| p.owner == owner && p.kind == kind)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - y)?;
            for cell in row {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
