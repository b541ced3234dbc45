//! Destination check shared by every piece

use crate::game::error::{RulesError, RulesResult};
use crate::game::types::{Move, Position};
use crate::pieces::Piece;
use super::board_state::BoardState;

/// Checked lookup of the moving piece
pub(crate) fn piece_at_origin(board: &BoardState, from: Position) -> RulesResult<Piece> {
    board
        .square_at(from)?
        .piece
        .ok_or(RulesError::NoPieceAtOrigin { position: from })
}

/// Whether the moving piece may enter the destination square
///
/// True when the destination is empty or holds an enemy piece. Does not look
/// at geometry; callers check the pattern first.
pub fn can_move(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    let mover = piece_at_origin(board, mv.from)?;
    let destination = board.square_at(mv.to)?;
    Ok(destination
        .piece
        .map_or(true, |target| mover.is_enemy_of(target)))
}
