//! Piece identity: color and kind
//!
//! Pieces are plain `Copy` values owned by the board. The rule layer only
//! reads them.

use crate::game::types::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank a pawn of this color starts on, and the only rank from which it
    /// may advance two squares.
    pub fn pawn_home_rank(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => BOARD_SIZE - 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Knight,
    King,
    Queen,
    /// Rook + knight.
    Empress,
    /// Bishop + knight.
    Princess,
    /// (3, 1) leaper.
    Camel,
}

impl PieceKind {
    pub const ALL: [PieceKind; 9] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Empress,
        PieceKind::Princess,
        PieceKind::Camel,
    ];

    pub fn is_fairy(self) -> bool {
        matches!(
            self,
            PieceKind::Empress | PieceKind::Princess | PieceKind::Camel
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    pub fn is_white(self) -> bool {
        self.color == PieceColor::White
    }

    /// True when `other` belongs to the opposing side.
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.color != other.color
    }
}

pub const WHITE_PAWN: Piece = Piece::new(PieceColor::White, PieceKind::Pawn);
pub const WHITE_ROOK: Piece = Piece::new(PieceColor::White, PieceKind::Rook);
pub const WHITE_BISHOP: Piece = Piece::new(PieceColor::White, PieceKind::Bishop);
pub const WHITE_KNIGHT: Piece = Piece::new(PieceColor::White, PieceKind::Knight);
pub const WHITE_KING: Piece = Piece::new(PieceColor::White, PieceKind::King);
pub const WHITE_QUEEN: Piece = Piece::new(PieceColor::White, PieceKind::Queen);
pub const WHITE_EMPRESS: Piece = Piece::new(PieceColor::White, PieceKind::Empress);
pub const WHITE_PRINCESS: Piece = Piece::new(PieceColor::White, PieceKind::Princess);
pub const WHITE_CAMEL: Piece = Piece::new(PieceColor::White, PieceKind::Camel);

pub const BLACK_PAWN: Piece = Piece::new(PieceColor::Black, PieceKind::Pawn);
pub const BLACK_ROOK: Piece = Piece::new(PieceColor::Black, PieceKind::Rook);
pub const BLACK_BISHOP: Piece = Piece::new(PieceColor::Black, PieceKind::Bishop);
pub const BLACK_KNIGHT: Piece = Piece::new(PieceColor::Black, PieceKind::Knight);
pub const BLACK_KING: Piece = Piece::new(PieceColor::Black, PieceKind::King);
pub const BLACK_QUEEN: Piece = Piece::new(PieceColor::Black, PieceKind::Queen);
pub const BLACK_EMPRESS: Piece = Piece::new(PieceColor::Black, PieceKind::Empress);
pub const BLACK_PRINCESS: Piece = Piece::new(PieceColor::Black, PieceKind::Princess);
pub const BLACK_CAMEL: Piece = Piece::new(PieceColor::Black, PieceKind::Camel);

/// Orthodox back row, file a to file h.
pub const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
