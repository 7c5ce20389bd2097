use crate::board::Board;
use crate::types::{Piece, Square};

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parse the piece-placement field of a FEN string into a fresh board.
///
/// Only the text before the first space is read; any further FEN fields are
/// ignored. Piece counts are not checked, so any placement with exactly 8
/// ranks of 8 files is accepted.
pub fn parse_placement(fen: &str) -> Result<Board, FenError> {
    if fen.is_empty() {
        return Err(FenError::EmptyInput);
    }

    let placement = fen.split(' ').next().unwrap_or_default();

    let mut board = Board::empty();
    let mut file = 0usize;
    let mut rank = 0usize;

    for (index, c) in placement.chars().enumerate() {
        match c {
            '/' => {
                if file != 8 {
                    return Err(FenError::IncompleteRank { rank, files: file });
                }
                file = 0;
                rank += 1;
                if rank >= 8 {
                    return Err(FenError::TooManyRanks);
                }
            }
            '1'..='9' => {
                // '9' can never fit, it is reported as an overflow
                let skip = c as usize - '0' as usize;
                if file + skip > 8 {
                    return Err(FenError::RankOverflow { rank });
                }
                file += skip;
            }
            _ => {
                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { ch: c, index })?;
                let square = Square::new(file, rank).ok_or(FenError::RankOverflow { rank })?;
                board.set(square, Some(piece));
                file += 1;
            }
        }
    }

    if rank != 7 || file != 8 {
        return Err(FenError::IncompleteBoard {
            ranks: rank + 1,
            files: file,
        });
    }

    Ok(board)
}

/// Format a board as a FEN piece-placement field.
pub fn format_placement(board: &Board) -> String {
    let mut out = String::with_capacity(71);
    for y in 0..8 {
        if y > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for x in 0..8 {
            match board.get(x, y) {
                Some(piece) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("invalid FEN: empty string")]
    EmptyInput,
    #[error("invalid FEN: unexpected character {ch:?} at offset {index}")]
    InvalidPieceChar { ch: char, index: usize },
    #[error("invalid FEN: rank {} has more than 8 files", .rank + 1)]
    RankOverflow { rank: usize },
    #[error("invalid FEN: rank {} ends after {files} files", .rank + 1)]
    IncompleteRank { rank: usize, files: usize },
    #[error("invalid FEN: more than 8 ranks")]
    TooManyRanks,
    #[error("invalid FEN: board ends at rank {ranks} after {files} files")]
    IncompleteBoard { ranks: usize, files: usize },
}
