//! Composable movement patterns
//!
//! Each piece kind maps to a `MovePattern`. Compound pieces are an
//! `AnyOf` over primitive patterns instead of hand-written boolean
//! expressions, so a custom fairy piece is just another constant:
//!
//! ```rust
//! use fairy_move_rules::MovePattern;
//!
//! // Amazon: queen + knight
//! const AMAZON: MovePattern = MovePattern::AnyOf(&[
//!     MovePattern::SlideOrthogonal,
//!     MovePattern::SlideDiagonal,
//!     MovePattern::Leap(2),
//! ]);
//! # let _ = AMAZON;
//! ```

use crate::game::error::RulesResult;
use crate::game::types::Move;
use crate::pieces::{PieceColor, PieceKind};
use super::board_state::BoardState;
use super::capture::piece_at_origin;
use super::piece_moves::{bishop_move, custom_knight_move, king_move, pawn_move, rook_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovePattern {
    /// Any distance along a rank or file, blocked by intervening pieces
    SlideOrthogonal,
    /// Any distance along a diagonal, blocked by intervening pieces
    SlideDiagonal,
    /// (jump, 1) leaper; ignores intervening pieces
    Leap(u8),
    /// One square in any direction
    King,
    /// Forward push, double push from the home rank, diagonal capture
    Pawn(PieceColor),
    /// Legal if any listed pattern allows the move, tried left to right
    AnyOf(&'static [MovePattern]),
}

pub const KNIGHT: MovePattern = MovePattern::Leap(2);
pub const CAMEL: MovePattern = MovePattern::Leap(3);
pub const QUEEN: MovePattern =
    MovePattern::AnyOf(&[MovePattern::SlideOrthogonal, MovePattern::SlideDiagonal]);
pub const EMPRESS: MovePattern =
    MovePattern::AnyOf(&[MovePattern::SlideOrthogonal, MovePattern::Leap(2)]);
pub const PRINCESS: MovePattern =
    MovePattern::AnyOf(&[MovePattern::SlideDiagonal, MovePattern::Leap(2)]);

impl MovePattern {
    /// Whether the piece on the move's origin may make the move under this
    /// pattern
    pub fn allows(&self, board: &BoardState, mv: &Move) -> RulesResult<bool> {
        match *self {
            MovePattern::SlideOrthogonal => rook_move(board, mv),
            MovePattern::SlideDiagonal => bishop_move(board, mv),
            MovePattern::Leap(jump) => custom_knight_move(board, mv, jump),
            MovePattern::King => king_move(board, mv),
            MovePattern::Pawn(color) => pawn_move(board, mv, color),
            MovePattern::AnyOf(patterns) => {
                piece_at_origin(board, mv.from)?;
                for pattern in patterns {
                    if pattern.allows(board, mv)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }

    /// True if some component of the pattern can be blocked en route
    pub fn is_slider(&self) -> bool {
        match *self {
            MovePattern::SlideOrthogonal | MovePattern::SlideDiagonal => true,
            MovePattern::AnyOf(patterns) => patterns.iter().any(MovePattern::is_slider),
            _ => false,
        }
    }
}

/// Movement pattern for a piece of the given kind and color
pub fn rule_for(kind: PieceKind, color: PieceColor) -> MovePattern {
    match kind {
        PieceKind::Pawn => MovePattern::Pawn(color),
        PieceKind::Rook => MovePattern::SlideOrthogonal,
        PieceKind::Bishop => MovePattern::SlideDiagonal,
        PieceKind::Knight => KNIGHT,
        PieceKind::King => MovePattern::King,
        PieceKind::Queen => QUEEN,
        PieceKind::Empress => EMPRESS,
        PieceKind::Princess => PRINCESS,
        PieceKind::Camel => CAMEL,
    }
}
