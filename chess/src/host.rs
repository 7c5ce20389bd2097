//! Host framework collaborators.
//!
//! The game engine that embeds this board owns the grid, the piece
//! handles and their textures. It is reached only through [`HostGrid`] and
//! [`PieceHandle`]; [`MemoryGrid`] is a plain in-memory host used by the
//! CLI and tests.

use crate::types::{GameTag, Owner, Piece, Square};

/// Pixel size of a square and of a piece sprite.
pub const PIECE_SIZE: f32 = 64.0;

/// Texture used for every board square.
pub const SQUARE_TEXTURE: &str = "boardsquare.png";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A piece object living on the host grid.
pub trait PieceHandle {
    fn set_game_tag(&mut self, tag: GameTag);
    fn game_tag(&self) -> GameTag;
    /// Assign the piece to the host player with this number.
    fn set_owner(&mut self, player: usize);
    fn set_position(&mut self, position: Point);
    fn set_parent(&mut self, square: Square);
}

/// The host's 8x8 grid of squares, each holding at most one piece.
pub trait HostGrid {
    type Piece: PieceHandle;

    /// Create the 64 squares with the given size and texture.
    fn initialize_squares(&mut self, square_size: f32, texture: &str);

    fn square_position(&self, square: Square) -> Point;

    /// Create a new piece handle, loading its sprite from `sprite`.
    fn load_piece(&mut self, sprite: &str) -> Self::Piece;

    fn set_bit(&mut self, square: Square, piece: Option<Self::Piece>);

    fn bit(&self, square: Square) -> Option<&Self::Piece>;
}

/// Sprite file for a piece, e.g. `w_pawn.png` or `b_king.png`.
pub fn sprite_name(piece: Piece) -> String {
    let prefix = match piece.owner {
        Owner::White => "w_",
        Owner::Black => "b_",
    };
    format!("{}{}.png", prefix, piece.kind.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPiece {
    pub sprite: String,
    pub tag: GameTag,
    pub player: Option<usize>,
    pub position: Point,
    pub parent: Option<Square>,
}

impl MemoryPiece {
    /// Player looked up from the host player number.
    pub fn owner(&self) -> Option<Owner> {
        self.player.and_then(Owner::from_index)
    }
}

impl PieceHandle for MemoryPiece {
    fn set_game_tag(&mut self, tag: GameTag) {
        self.tag = tag;
    }

    fn game_tag(&self) -> GameTag {
        self.tag
    }

    fn set_owner(&mut self, player: usize) {
        self.player = Some(player);
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_parent(&mut self, square: Square) {
        self.parent = Some(square);
    }
}

/// Host grid kept entirely in memory. Records every sprite it was asked to
/// load so callers can observe the asset side effect.
#[derive(Debug, Clone)]
pub struct MemoryGrid {
    square_size: f32,
    texture: Option<String>,
    squares: Vec<Option<MemoryPiece>>,
    loaded: Vec<String>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self {
            square_size: PIECE_SIZE,
            texture: None,
            squares: vec![None; 64],
            loaded: Vec::new(),
        }
    }

    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    pub fn loaded_sprites(&self) -> &[String] {
        &self.loaded
    }

    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }
}

impl Default for MemoryGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HostGrid for MemoryGrid {
    type Piece = MemoryPiece;

    fn initialize_squares(&mut self, square_size: f32, texture: &str) {
        self.square_size = square_size;
        self.texture = Some(texture.to_string());
        self.squares = vec![None; 64];
    }

    fn square_position(&self, square: Square) -> Point {
        let half = self.square_size / 2.0;
        Point {
            x: square.x() as f32 * self.square_size + half,
            y: square.y() as f32 * self.square_size + half,
        }
    }

    fn load_piece(&mut self, sprite: &str) -> MemoryPiece {
        self.loaded.push(sprite.to_string());
        MemoryPiece {
            sprite: sprite.to_string(),
            tag: GameTag::EMPTY,
            player: None,
            position: Point::default(),
            parent: None,
        }
    }

    fn set_bit(&mut self, square: Square, piece: Option<MemoryPiece>) {
        self.squares[square.index()] = piece;
    }

    fn bit(&self, square: Square) -> Option<&MemoryPiece> {
        self.squares[square.index()].as_ref()
    }
}
