//! Board state representation for move validation

use crate::game::error::{RulesError, RulesResult};
use crate::game::types::{Position, Square, BOARD_SIZE};
use crate::pieces::{Piece, PieceColor, BACK_ROW, BLACK_PAWN, WHITE_PAWN};

const SIZE: usize = BOARD_SIZE as usize;

/// Snapshot of piece placement, indexed `[rank][file]`
///
/// The rules only ever borrow this immutably.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl BoardState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Orthodox starting array: white on ranks 1-2, black on ranks 7-8
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, &kind) in BACK_ROW.iter().enumerate() {
            board.cells[0][file] = Some(Piece::new(PieceColor::White, kind));
            board.cells[1][file] = Some(WHITE_PAWN);
            board.cells[SIZE - 2][file] = Some(BLACK_PAWN);
            board.cells[SIZE - 1][file] = Some(Piece::new(PieceColor::Black, kind));
        }
        board
    }

    fn index(pos: Position) -> RulesResult<(usize, usize)> {
        if pos.is_on_board() {
            Ok((pos.rank as usize, pos.file as usize))
        } else {
            Err(RulesError::OutOfBounds {
                file: pos.file,
                rank: pos.rank,
            })
        }
    }

    /// Place `piece` on `pos`, replacing whatever stood there
    pub fn put_piece(&mut self, pos: Position, piece: Piece) -> RulesResult<()> {
        let (rank, file) = Self::index(pos)?;
        self.cells[rank][file] = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, pos: Position) -> RulesResult<Option<Piece>> {
        let (rank, file) = Self::index(pos)?;
        Ok(self.cells[rank][file].take())
    }

    pub fn square_at(&self, pos: Position) -> RulesResult<Square> {
        let (rank, file) = Self::index(pos)?;
        Ok(Square {
            piece: self.cells[rank][file],
        })
    }

    pub fn is_empty(&self, pos: Position) -> RulesResult<bool> {
        Ok(self.square_at(pos)?.is_empty())
    }

    /// Piece on `pos`, or `None` for an empty or off-board square
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.square_at(pos).ok().and_then(|square| square.piece)
    }

    pub fn get_piece_color(&self, pos: Position) -> Option<PieceColor> {
        self.piece_at(pos).map(|piece| piece.color)
    }

    /// All occupied squares with their pieces, rank by rank
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                cell.map(|piece| (Position::new(file as i8, rank as i8), piece))
            })
        })
    }
}
