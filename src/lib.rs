//! Move legality for orthodox and fairy chess pieces
//!
//! Given a board snapshot and a single proposed move, decides whether the
//! piece standing on the origin square may make that move. Covers the
//! orthodox set (pawn, rook, bishop, knight, king, queen) and the fairy
//! pieces built from the same primitives (empress, princess, camel).
//!
//! ```rust
//! use fairy_move_rules::game::rules::{is_valid_move, BoardState};
//! use fairy_move_rules::game::types::{Move, Position};
//! use fairy_move_rules::pieces::WHITE_CAMEL;
//!
//! let mut board = BoardState::empty();
//! board.put_piece(Position::new(4, 3), WHITE_CAMEL).unwrap();
//!
//! let mv = Move::parse("e4h3").unwrap();
//! assert!(is_valid_move(&board, &mv).unwrap());
//! ```

pub mod game;
pub mod pieces;

pub use game::error::{RulesError, RulesResult};
pub use game::rules::{get_possible_moves, is_valid_move, BoardState, MovePattern};
pub use game::types::{Move, Position, Square};
pub use pieces::{Piece, PieceColor, PieceKind};
