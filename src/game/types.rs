//! Type definitions for board coordinates and moves
//!
//! `Position` is an immutable (file, rank) pair, `Move` a read-only
//! descriptor handed to the predicates, and `Square` the occupancy view the
//! board hands back for a coordinate.

use std::fmt;
use std::str::FromStr;

use super::error::{RulesError, RulesResult};
use crate::pieces::{Piece, PieceColor};

/// Number of files and of ranks on the board
pub const BOARD_SIZE: i8 = 8;

/// Board coordinate, 0-based
///
/// File 0 is the a-file, rank 0 is the first rank. Arithmetic helpers
/// (`top`, `bottom`, `left`, `right`) do not clamp, so a shifted position may
/// fall outside the board; check with `is_on_board` before looking it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    /// Create a position from file and rank indices
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fairy_move_rules::Position;
    /// let e4 = Position::new(4, 3);
    /// assert_eq!(e4.to_algebraic(), "e4");
    /// ```
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    /// Create a position, rejecting coordinates off the board
    pub fn try_new(file: i8, rank: i8) -> RulesResult<Self> {
        let position = Position { file, rank };
        if position.is_on_board() {
            Ok(position)
        } else {
            Err(RulesError::OutOfBounds { file, rank })
        }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.file) && (0..BOARD_SIZE).contains(&self.rank)
    }

    /// One rank up (towards black's side)
    pub fn top(self) -> Self {
        Position::new(self.file, self.rank + 1)
    }

    /// One rank down (towards white's side)
    pub fn bottom(self) -> Self {
        Position::new(self.file, self.rank - 1)
    }

    /// One file towards the a-file
    pub fn left(self) -> Self {
        Position::new(self.file - 1, self.rank)
    }

    /// One file towards the h-file
    pub fn right(self) -> Self {
        Position::new(self.file + 1, self.rank)
    }

    /// One step in the direction pawns of `color` advance
    pub fn forward(self, color: PieceColor) -> Self {
        match color {
            PieceColor::White => self.top(),
            PieceColor::Black => self.bottom(),
        }
    }

    /// Parse algebraic notation (e.g., "e4")
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fairy_move_rules::Position;
    /// let square = Position::from_algebraic("h3").unwrap();
    /// assert_eq!(square, Position::new(7, 2));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?.to_ascii_lowercase();
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let file = match file_char {
            'a'..='h' => (file_char as u8 - b'a') as i8,
            _ => return None,
        };
        let rank = match rank_char.to_digit(10)? {
            n @ 1..=8 => n as i8 - 1,
            _ => return None,
        };

        Some(Position { file, rank })
    }

    /// Convert to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_algebraic(s).ok_or_else(|| RulesError::InvalidNotation {
            input: s.to_string(),
        })
    }
}

/// A proposed move from one square to another
///
/// `is_valid` is the caller's own bookkeeping. The predicates never read it
/// and always compute legality from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub is_valid: bool,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            is_valid: false,
        }
    }

    /// Parse coordinate notation such as "e2e4"
    pub fn parse(s: &str) -> RulesResult<Self> {
        let invalid = || RulesError::InvalidNotation {
            input: s.to_string(),
        };
        if !s.is_ascii() || s.len() != 4 {
            return Err(invalid());
        }
        let from = Position::from_algebraic(&s[..2]).ok_or_else(invalid)?;
        let to = Position::from_algebraic(&s[2..]).ok_or_else(invalid)?;
        Ok(Move::new(from, to))
    }

    /// Signed rank change, destination minus origin
    pub fn rank_delta(&self) -> i8 {
        self.to.rank - self.from.rank
    }

    /// Signed file change, destination minus origin
    pub fn file_delta(&self) -> i8 {
        self.to.file - self.from.file
    }

    /// max(|Δrank|, |Δfile|)
    pub fn chebyshev_distance(&self) -> i8 {
        self.rank_delta().abs().max(self.file_delta().abs())
    }

    /// Origin and destination coincide
    pub fn is_null(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

/// Occupancy view of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    pub piece: Option<Piece>,
}

impl Square {
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}
