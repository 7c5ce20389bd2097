//! Canonical piece, owner and square types for the board.
//!
//! Pieces are stored as a tagged value (`Option<Piece>`) in memory. The
//! packed integer form, [`GameTag`], only exists for the host-facing
//! persisted representation.

use serde::{Deserialize, Serialize};

/// Added to a piece index to mark it as owned by the second player.
pub const OWNER_BIT: u8 = 128;

/// Kind of chess piece. Discriminants are the 1-based persisted indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

/// One of the two players. `White` is player 0 (uppercase in FEN),
/// `Black` is player 1 (lowercase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    White,
    Black,
}

/// An occupied cell: who owns it and what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Owner,
    pub kind: PieceKind,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// 1-based index used by the persisted tag and the digit state string.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Pawn),
            2 => Some(Self::Knight),
            3 => Some(Self::Bishop),
            4 => Some(Self::Rook),
            5 => Some(Self::Queen),
            6 => Some(Self::King),
            _ => None,
        }
    }

    pub fn to_char_upper(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    pub fn to_char_lower(self) -> char {
        self.to_char_upper().to_ascii_lowercase()
    }

    /// Case-insensitive lookup of a piece letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl Owner {
    /// Player number as the host framework counts them.
    pub fn index(self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::White),
            1 => Some(Self::Black),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    fn tag_offset(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => OWNER_BIT,
        }
    }
}

impl Piece {
    pub fn new(owner: Owner, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Case-sensitive FEN letter lookup: uppercase is white, lowercase black.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let owner = if c.is_ascii_uppercase() {
            Owner::White
        } else {
            Owner::Black
        };
        Some(Self { owner, kind })
    }

    pub fn to_fen_char(self) -> char {
        match self.owner {
            Owner::White => self.kind.to_char_upper(),
            Owner::Black => self.kind.to_char_lower(),
        }
    }

    pub fn tag(self) -> GameTag {
        GameTag::from_piece(self)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char_upper())
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// A board coordinate. `(0, 0)` is file a of rank 8, the first square of a
/// FEN placement field; `y` grows towards rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..64`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Self::new(index % 8, index / 8)
        } else {
            None
        }
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    pub fn index(self) -> usize {
        self.y() * 8 + self.x()
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.x) as char;
        let rank = 8 - self.y;
        write!(f, "{}{}", file, rank)
    }
}

/// Packed `(owner, kind)` integer attached to host piece handles.
///
/// `0` is empty, `1..=6` are white pieces and `129..=134` black pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameTag(u8);

impl GameTag {
    pub const EMPTY: GameTag = GameTag(0);

    pub fn from_piece(piece: Piece) -> Self {
        Self(piece.kind.index() + piece.owner.tag_offset())
    }

    pub fn from_cell(cell: Option<Piece>) -> Self {
        cell.map_or(Self::EMPTY, Self::from_piece)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decode back to a piece; `None` for the empty tag.
    pub fn piece(self) -> Option<Piece> {
        let owner = if self.0 & OWNER_BIT != 0 {
            Owner::Black
        } else {
            Owner::White
        };
        let kind = PieceKind::from_index(self.0 & !OWNER_BIT)?;
        Some(Piece { owner, kind })
    }
}

impl TryFrom<u8> for GameTag {
    type Error = TagError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        let tag = GameTag(raw);
        if raw == 0 || tag.piece().is_some() {
            Ok(tag)
        } else {
            Err(TagError::Unknown(raw))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("Unknown game tag: {0}")]
    Unknown(u8),
}
