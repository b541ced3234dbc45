//! Property tests for the legality predicates
//!
//! Each property is checked exhaustively: every origin square holding a piece
//! against every destination on the board, over a few cluttered positions.

use fairy_move_rules::game::rules::*;
use fairy_move_rules::pieces::*;
use fairy_move_rules::{Move, Position, RulesResult};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn all_squares() -> impl Iterator<Item = Position> {
    (0..8).flat_map(|file| (0..8).map(move |rank| Position::new(file, rank)))
}

fn pos(square: &str) -> Position {
    Position::from_algebraic(square).unwrap()
}

/// Standard array plus a scattering of fairy pieces in the middle
fn cluttered_boards() -> Vec<BoardState> {
    let mut middlegame = BoardState::standard();
    for (piece, square) in [
        (WHITE_EMPRESS, "d4"),
        (BLACK_PRINCESS, "e5"),
        (WHITE_CAMEL, "c5"),
        (BLACK_CAMEL, "f3"),
        (WHITE_KING, "g4"),
        (BLACK_QUEEN, "b4"),
    ] {
        middlegame.put_piece(pos(square), piece).unwrap();
    }

    let mut sparse = BoardState::empty();
    for (piece, square) in [
        (WHITE_ROOK, "a1"),
        (BLACK_BISHOP, "c3"),
        (WHITE_PAWN, "e2"),
        (BLACK_PAWN, "d7"),
        (WHITE_PAWN, "h7"),
        (BLACK_KNIGHT, "h8"),
        (WHITE_PRINCESS, "f6"),
    ] {
        sparse.put_piece(pos(square), piece).unwrap();
    }

    vec![BoardState::standard(), middlegame, sparse]
}

/// Run `check` for every occupied origin and every destination
fn for_every_move(mut check: impl FnMut(&BoardState, &Move) -> RulesResult<()>) {
    init_tracing();
    for board in cluttered_boards() {
        for from in all_squares() {
            if board.piece_at(from).is_none() {
                continue;
            }
            for to in all_squares() {
                check(&board, &Move::new(from, to)).unwrap();
            }
        }
    }
}

#[test]
fn test_queen_is_rook_or_bishop() {
    for_every_move(|board, mv| {
        let expected = rook_move(board, mv)? || bishop_move(board, mv)?;
        assert_eq!(queen_move(board, mv)?, expected, "queen mismatch on {mv}");
        Ok(())
    });
}

#[test]
fn test_fairy_compounds_match_their_components() {
    for_every_move(|board, mv| {
        let leap_two = custom_knight_move(board, mv, 2)?;

        let empress = rook_move(board, mv)? || leap_two;
        assert_eq!(empress_move(board, mv)?, empress, "empress mismatch on {mv}");

        let princess = bishop_move(board, mv)? || leap_two;
        assert_eq!(princess_move(board, mv)?, princess, "princess mismatch on {mv}");

        assert_eq!(camel_move(board, mv)?, custom_knight_move(board, mv, 3)?);
        assert_eq!(knight_move(board, mv)?, leap_two);
        Ok(())
    });
}

#[test]
fn test_king_is_chebyshev_one_onto_non_friendly() {
    for_every_move(|board, mv| {
        let mover = board.piece_at(mv.from).unwrap();
        let friendly_target = board
            .piece_at(mv.to)
            .is_some_and(|target| target.color == mover.color);
        let expected = mv.chebyshev_distance() == 1 && !friendly_target;
        assert_eq!(king_move(board, mv)?, expected, "king mismatch on {mv}");
        Ok(())
    });
}

#[test]
fn test_dispatcher_follows_piece_kind() {
    for_every_move(|board, mv| {
        let piece = board.piece_at(mv.from).unwrap();
        let expected = match piece.kind {
            PieceKind::Pawn => pawn_move(board, mv, piece.color)?,
            PieceKind::Rook => rook_move(board, mv)?,
            PieceKind::Bishop => bishop_move(board, mv)?,
            PieceKind::Knight => knight_move(board, mv)?,
            PieceKind::King => king_move(board, mv)?,
            PieceKind::Queen => queen_move(board, mv)?,
            PieceKind::Empress => empress_move(board, mv)?,
            PieceKind::Princess => princess_move(board, mv)?,
            PieceKind::Camel => camel_move(board, mv)?,
        };
        assert_eq!(is_valid_move(board, mv)?, expected, "dispatch mismatch on {mv}");
        Ok(())
    });
}

#[test]
fn test_null_move_is_never_legal() {
    for_every_move(|board, mv| {
        if mv.is_null() {
            assert!(!is_valid_move(board, mv)?);
            assert!(!king_move(board, mv)?);
            assert!(!custom_knight_move(board, mv, 0)?);
        }
        Ok(())
    });
}

#[test]
fn test_pawn_diagonal_to_empty_square_is_illegal() {
    for_every_move(|board, mv| {
        let diagonal_step = mv.file_delta().abs() == 1 && mv.rank_delta().abs() == 1;
        if diagonal_step && board.piece_at(mv.to).is_none() {
            assert!(!white_pawn_move(board, mv)?, "white pawn {mv}");
            assert!(!black_pawn_move(board, mv)?, "black pawn {mv}");
        }
        Ok(())
    });
}

#[test]
fn test_pawn_double_step_needs_home_rank_and_clear_squares() {
    init_tracing();
    for color in [PieceColor::White, PieceColor::Black] {
        let pawn = Piece::new(color, PieceKind::Pawn);
        for from in all_squares() {
            let to = from.forward(color).forward(color);
            if !to.is_on_board() {
                continue;
            }
            let mid = from.forward(color);

            for (block_mid, block_to) in [(false, false), (true, false), (false, true)] {
                let mut board = BoardState::empty();
                board.put_piece(from, pawn).unwrap();
                if block_mid {
                    board.put_piece(mid, BLACK_ROOK).unwrap();
                }
                if block_to {
                    board.put_piece(to, WHITE_ROOK).unwrap();
                }

                let expected = from.rank == color.pawn_home_rank() && !block_mid && !block_to;
                let legal = pawn_move(&board, &Move::new(from, to), color).unwrap();
                assert_eq!(legal, expected, "{color:?} pawn {from} -> {to}");
            }
        }
    }
}

#[test]
fn test_blocker_stops_sliders_but_not_leapers() {
    init_tracing();
    for from in all_squares() {
        for to in all_squares() {
            let mv = Move::new(from, to);

            if let Some(line) = Line::between(from, to) {
                if line.gap() == 0 {
                    continue;
                }
                let mut board = BoardState::empty();
                board.put_piece(from, WHITE_QUEEN).unwrap();
                assert!(queen_move(&board, &mv).unwrap(), "open line {mv}");

                // first square after the origin along the line
                let step = Position::new(
                    from.file + (to.file - from.file).signum(),
                    from.rank + (to.rank - from.rank).signum(),
                );
                board.put_piece(step, BLACK_PAWN).unwrap();
                assert!(!queen_move(&board, &mv).unwrap(), "blocked line {mv}");
            }

            for jump in [2u8, 3] {
                let mut board = BoardState::empty();
                board.put_piece(from, WHITE_KNIGHT).unwrap();
                let open = custom_knight_move(&board, &mv, jump).unwrap();

                for neighbour in all_squares() {
                    if neighbour != from && neighbour != to {
                        board.put_piece(neighbour, BLACK_PAWN).unwrap();
                    }
                }
                let crowded = custom_knight_move(&board, &mv, jump).unwrap();
                assert_eq!(open, crowded, "leap {jump} {mv}");
            }
        }
    }
}

#[test]
fn test_reachable_empty_destinations_are_legal() {
    init_tracing();
    for kind in PieceKind::ALL {
        let piece = Piece::new(PieceColor::White, kind);
        let pattern = rule_for(kind, PieceColor::White);
        for from in all_squares() {
            let mut board = BoardState::empty();
            board.put_piece(from, piece).unwrap();

            for to in get_possible_moves(&board, from).unwrap() {
                assert!(board.piece_at(to).is_none());
                assert!(pattern.allows(&board, &Move::new(from, to)).unwrap());
            }
        }
    }
}
