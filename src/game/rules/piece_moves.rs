//! Chess piece movement rules
//!
//! One predicate per piece family. All of them:
//! - fail with `NoPieceAtOrigin` when the origin square is empty,
//! - answer `Ok(false)` for a null move (origin equals destination),
//! - never touch the board.

use tracing::debug;

use crate::game::error::RulesResult;
use crate::game::types::{Move, Position, BOARD_SIZE};
use crate::pieces::PieceColor;
use super::board_state::BoardState;
use super::capture::{can_move, piece_at_origin};
use super::path::{trace_line, Line};
use super::pattern::{rule_for, CAMEL, EMPRESS, PRINCESS, QUEEN};

/// Check if the piece on the move's origin may make the move
///
/// Looks up the moving piece and applies the pattern for its kind and color.
pub fn is_valid_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    let piece = piece_at_origin(board, mv.from)?;
    let legal = rule_for(piece.kind, piece.color).allows(board, mv)?;
    debug!(piece = ?piece.kind, color = ?piece.color, %mv, legal, "validated move");
    Ok(legal)
}

/// Get every destination the piece on `from` may move to
pub fn get_possible_moves(board: &BoardState, from: Position) -> RulesResult<Vec<Position>> {
    piece_at_origin(board, from)?;

    let mut moves = Vec::new();
    for file in 0..BOARD_SIZE {
        for rank in 0..BOARD_SIZE {
            let to = Position::new(file, rank);
            if is_valid_move(board, &Move::new(from, to))? {
                moves.push(to);
            }
        }
    }

    Ok(moves)
}

pub fn rook_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    piece_at_origin(board, mv.from)?;
    match Line::between(mv.from, mv.to) {
        Some(line) if line.is_orthogonal() => trace_line(board, &line),
        _ => Ok(false),
    }
}

pub fn bishop_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    piece_at_origin(board, mv.from)?;
    match Line::between(mv.from, mv.to) {
        Some(line) if line.is_diagonal() => trace_line(board, &line),
        _ => Ok(false),
    }
}

pub fn queen_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    QUEEN.allows(board, mv)
}

/// Generalised knight: `jump` squares along one axis and one along the other
///
/// Leapers ignore whatever stands between origin and destination.
pub fn custom_knight_move(board: &BoardState, mv: &Move, jump: u8) -> RulesResult<bool> {
    piece_at_origin(board, mv.from)?;
    if mv.is_null() {
        return Ok(false);
    }

    let moved_rank = i16::from(mv.rank_delta().abs());
    let moved_file = i16::from(mv.file_delta().abs());
    let jump = i16::from(jump);

    if (moved_rank == jump && moved_file == 1) || (moved_file == jump && moved_rank == 1) {
        return can_move(board, mv);
    }
    Ok(false)
}

pub fn knight_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    custom_knight_move(board, mv, 2)
}

pub fn king_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    piece_at_origin(board, mv.from)?;
    if mv.is_null() || mv.chebyshev_distance() > 1 {
        return Ok(false);
    }
    can_move(board, mv)
}

/// Pawn of `color`: single push onto an empty square, double push from the
/// home rank across two empty squares, or a diagonal step onto an enemy
///
/// No en passant and no promotion.
pub fn pawn_move(board: &BoardState, mv: &Move, color: PieceColor) -> RulesResult<bool> {
    piece_at_origin(board, mv.from)?;
    let from = mv.from;
    let one_forward = from.forward(color);

    if mv.to == one_forward {
        return board.is_empty(mv.to);
    }

    if from.rank == color.pawn_home_rank() && mv.to == one_forward.forward(color) {
        return Ok(board.is_empty(one_forward)? && board.is_empty(mv.to)?);
    }

    if mv.to == one_forward.left() || mv.to == one_forward.right() {
        let destination = board.square_at(mv.to)?;
        return Ok(destination
            .piece
            .is_some_and(|target| target.color != color));
    }

    Ok(false)
}

pub fn white_pawn_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    pawn_move(board, mv, PieceColor::White)
}

pub fn black_pawn_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    pawn_move(board, mv, PieceColor::Black)
}

/// Rook or knight
pub fn empress_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    EMPRESS.allows(board, mv)
}

/// Bishop or knight
pub fn princess_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    PRINCESS.allows(board, mv)
}

/// (3, 1) leaper
pub fn camel_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    CAMEL.allows(board, mv)
}
