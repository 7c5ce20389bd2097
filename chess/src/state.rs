//! The two 64-character board strings.
//!
//! The digit form ([`serialize`] / [`deserialize`]) is what save data uses.
//! It only records the piece index of each cell, and restoring it yields
//! white pawns, so it does not round-trip. The letter form
//! ([`notation_string`]) keeps owner and kind and is what hosts display.

use crate::board::Board;
use crate::types::{Owner, Piece, PieceKind, Square};

pub const STATE_LEN: usize = 64;

/// Digit form: `'0'` for empty, otherwise the piece index `'1'..='6'`.
pub fn serialize(board: &Board) -> String {
    board
        .cells()
        .map(|(_, cell)| match cell {
            Some(piece) => (b'0' + piece.kind.index()) as char,
            None => '0',
        })
        .collect()
}

/// Restore a board from the digit form.
///
/// Only the first 64 characters are read. Every non-zero digit becomes a
/// white pawn.
pub fn deserialize(s: &str) -> Result<Board, StateError> {
    let bytes = s.as_bytes();
    if bytes.len() < STATE_LEN {
        return Err(StateError::TooShort { len: bytes.len() });
    }

    let mut board = Board::empty();
    for (sq, &b) in Square::all().zip(bytes) {
        match b {
            b'0' => {}
            b'1'..=b'9' => board.set(sq, Some(Piece::new(Owner::White, PieceKind::Pawn))),
            _ => {
                let ch = s[sq.index()..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(StateError::InvalidDigit {
                    ch,
                    index: sq.index(),
                });
            }
        }
    }
    Ok(board)
}

/// Display letter for a cell: FEN letter for a piece, `'0'` when empty.
pub fn piece_notation(cell: Option<Piece>) -> char {
    cell.map_or('0', Piece::to_fen_char)
}

/// Letter form of the whole board in row-major order.
pub fn notation_string(board: &Board) -> String {
    board.cells().map(|(_, cell)| piece_notation(cell)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state string has {len} characters, expected at least 64")]
    TooShort { len: usize },
    #[error("state string has non-digit {ch:?} at position {index}")]
    InvalidDigit { ch: char, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::{parse_placement, STARTING_PLACEMENT};

    const START_DIGITS: &str =
        "4235632411111111000000000000000000000000000000001111111142356324";

    #[test]
    fn test_serialize_start() {
        let board = parse_placement(STARTING_PLACEMENT).unwrap();
        let s = serialize(&board);
        assert_eq!(s.len(), STATE_LEN);
        assert_eq!(s, START_DIGITS);
    }

    #[test]
    fn test_notation_start() {
        let board = parse_placement(STARTING_PLACEMENT).unwrap();
        assert_eq!(
            notation_string(&board),
            "rnbqkbnrpppppppp00000000000000000000000000000000PPPPPPPPRNBQKBNR"
        );
        assert_eq!(piece_notation(None), '0');
    }

    #[test]
    fn test_deserialize_makes_white_pawns() {
        let board = deserialize(START_DIGITS).unwrap();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.count(Owner::White, PieceKind::Pawn), 32);
        assert_eq!(board.get(4, 4), None);
    }

    #[test]
    fn test_round_trip_loses_owner_and_kind() {
        let board = parse_placement(STARTING_PLACEMENT).unwrap();
        let restored = deserialize(&serialize(&board)).unwrap();
        assert_ne!(restored, board);
        // occupancy survives, identity does not
        let occupied = |b: &Board| b.cells().map(|(_, c)| c.is_some()).collect::<Vec<_>>();
        assert_eq!(occupied(&restored), occupied(&board));
        assert_eq!(restored.count(Owner::Black, PieceKind::Pawn), 0);
    }

    #[test]
    fn test_deserialize_ignores_trailing_text() {
        let long = format!("{}{}", "1".repeat(64), "trailing");
        let board = deserialize(&long).unwrap();
        assert_eq!(board.piece_count(), 64);
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        assert_eq!(deserialize("0123"), Err(StateError::TooShort { len: 4 }));

        let mut s = "0".repeat(64);
        s.replace_range(10..11, "x");
        assert_eq!(
            deserialize(&s),
            Err(StateError::InvalidDigit { ch: 'x', index: 10 })
        );
    }
}
