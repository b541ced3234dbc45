//! Error types for move validation
//!
//! An illegal move is not an error: predicates answer `Ok(false)` for a
//! pattern mismatch, a blocked path or a friendly piece on the target. The
//! variants below cover inputs the predicates cannot judge at all.

use super::types::Position;

/// Errors that can occur while validating a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// The origin square of the move holds no piece
    #[error("Invalid move: no piece at origin {position}")]
    NoPieceAtOrigin { position: Position },

    /// A coordinate outside the board was queried
    #[error("Position ({file}, {rank}) is outside the board")]
    OutOfBounds { file: i8, rank: i8 },

    /// The path tracer was handed a move that is not orthogonal or diagonal
    #[error("Move {from} -> {to} is not a straight line")]
    NotStraightLine { from: Position, to: Position },

    /// Coordinate or move notation could not be parsed
    #[error("Invalid notation: {input:?}")]
    InvalidNotation { input: String },
}

/// Result type alias for rule queries
pub type RulesResult<T> = Result<T, RulesError>;
