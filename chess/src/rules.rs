//! Rule hooks the host calls during play.

use crate::board::Board;
use crate::types::{Owner, Piece, Square};

/// Per-game capability interface invoked by the host at move and turn
/// boundaries.
pub trait GameRules {
    /// May `piece` on `from` be picked up when `to_move` is on turn?
    fn can_bit_move_from(&self, board: &Board, piece: Piece, from: Square, to_move: Owner)
        -> bool;

    fn can_bit_move_from_to(&self, board: &Board, piece: Piece, from: Square, to: Square)
        -> bool;

    /// Action when an empty square is clicked. Returns whether anything happened.
    fn action_for_empty_holder(&self, board: &Board, square: Square) -> bool;

    fn check_for_winner(&self, board: &Board) -> Option<Owner>;

    fn check_for_draw(&self, board: &Board) -> bool;
}

/// No chess rules at all. A player may only pick up their own pieces, and
/// may drop them anywhere. Games never end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveRules;

impl GameRules for PermissiveRules {
    fn can_bit_move_from(
        &self,
        _board: &Board,
        piece: Piece,
        _from: Square,
        to_move: Owner,
    ) -> bool {
        piece.owner == to_move
    }

    fn can_bit_move_from_to(
        &self,
        _board: &Board,
        _piece: Piece,
        _from: Square,
        _to: Square,
    ) -> bool {
        true
    }

    fn action_for_empty_holder(&self, _board: &Board, _square: Square) -> bool {
        false
    }

    fn check_for_winner(&self, _board: &Board) -> Option<Owner> {
        None
    }

    fn check_for_draw(&self, _board: &Board) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_only_own_pieces_can_be_picked_up() {
        let board = Board::empty();
        let from = Square::new(0, 6).unwrap();
        let pawn = Piece::new(Owner::White, PieceKind::Pawn);

        assert!(PermissiveRules.can_bit_move_from(&board, pawn, from, Owner::White));
        assert!(!PermissiveRules.can_bit_move_from(&board, pawn, from, Owner::Black));
    }

    #[test]
    fn test_everything_else_is_permissive() {
        let board = Board::empty();
        let from = Square::new(0, 6).unwrap();
        let to = Square::new(7, 0).unwrap();
        let pawn = Piece::new(Owner::White, PieceKind::Pawn);

        assert!(PermissiveRules.can_bit_move_from_to(&board, pawn, from, to));
        assert!(!PermissiveRules.action_for_empty_holder(&board, to));
        assert_eq!(PermissiveRules.check_for_winner(&board), None);
        assert!(!PermissiveRules.check_for_draw(&board));
    }
}
