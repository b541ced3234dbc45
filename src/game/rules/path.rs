//! Straight-line path tracing for sliding pieces
//!
//! A `Line` can only be built for a non-null orthogonal or equal-magnitude
//! diagonal move, so the walk in `trace_line` always reaches its
//! destination. Each step moves one square along both axes by the sign of
//! the remaining delta (-1, 0 or +1).

use tracing::trace;

use crate::game::error::{RulesError, RulesResult};
use crate::game::types::{Move, Position};
use super::board_state::BoardState;
use super::capture::can_move;

/// A validated straight line between two distinct squares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    from: Position,
    to: Position,
    step: (i8, i8),
}

impl Line {
    /// Build the line from `from` to `to`, or `None` if the squares are
    /// equal or not on a common rank, file or diagonal
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let df = to.file - from.file;
        let dr = to.rank - from.rank;

        let straight = df == 0 || dr == 0 || df.abs() == dr.abs();
        if from == to || !straight {
            return None;
        }

        Some(Line {
            from,
            to,
            step: (df.signum(), dr.signum()),
        })
    }

    pub fn origin(&self) -> Position {
        self.from
    }

    pub fn destination(&self) -> Position {
        self.to
    }

    /// Along a rank or a file
    pub fn is_orthogonal(&self) -> bool {
        self.step.0 == 0 || self.step.1 == 0
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_orthogonal()
    }

    /// Number of squares strictly between the endpoints
    pub fn gap(&self) -> i8 {
        let df = (self.to.file - self.from.file).abs();
        let dr = (self.to.rank - self.from.rank).abs();
        df.max(dr) - 1
    }
}

/// Walk the line and, if nothing stands strictly between the endpoints, defer
/// to capture legality for the destination
pub fn trace_line(board: &BoardState, line: &Line) -> RulesResult<bool> {
    let (step_file, step_rank) = line.step;
    let mut cursor = line.from;

    while cursor != line.to {
        if cursor != line.from && !board.is_empty(cursor)? {
            trace!(blocker = %cursor, from = %line.from, to = %line.to, "path blocked");
            return Ok(false);
        }
        cursor = Position::new(cursor.file + step_file, cursor.rank + step_rank);
    }

    can_move(board, &Move::new(line.from, line.to))
}

/// Trace the path of an arbitrary move
///
/// Fails with `NotStraightLine` when the move is null or not orthogonal or
/// diagonal.
pub fn trace_path(board: &BoardState, mv: &Move) -> RulesResult<bool> {
    let line = Line::between(mv.from, mv.to).ok_or(RulesError::NotStraightLine {
        from: mv.from,
        to: mv.to,
    })?;
    trace_line(board, &line)
}
