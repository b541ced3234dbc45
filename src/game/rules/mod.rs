//! Chess rules module - pure move legality
//!
//! Every predicate takes a read-only `BoardState` and a `Move` and answers
//! `Ok(true)` or `Ok(false)`. An `Err` means the question itself was
//! malformed (no piece on the origin square, a coordinate off the board).
//!
//! # Module Structure
//!
//! - `board_state` - Board storage and occupancy queries
//! - `capture` - Destination check shared by every piece
//! - `path` - Straight-line tracing for sliders
//! - `pattern` - Composable movement patterns and the kind-to-pattern table
//! - `piece_moves` - One predicate per piece family plus the dispatcher

pub mod board_state;
pub mod capture;
pub mod path;
pub mod pattern;
pub mod piece_moves;


pub use board_state::BoardState;
pub use capture::can_move;
pub use path::{trace_line, trace_path, Line};
pub use pattern::{rule_for, MovePattern};
pub use piece_moves::{
    bishop_move, black_pawn_move, camel_move, custom_knight_move, empress_move,
    get_possible_moves, is_valid_move, king_move, knight_move, pawn_move, princess_move,
    queen_move, rook_move, white_pawn_move,
};
