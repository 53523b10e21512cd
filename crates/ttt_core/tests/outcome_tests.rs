//! Tests for terminal classification and move legality
//!
//! This module covers:
//! - Mutually exclusive Win / Draw / InProgress classification
//! - Single-cell effect of legal moves
//! - No-op behaviour of rejected moves
//! - Idempotence of read-only queries

use proptest::prelude::*;
use ttt_core::{Board, Mark, MoveError, Outcome};

fn any_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

/// Arbitrary grids, including ones unreachable in real play.
fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(any_cell()).prop_map(Board::from_cells)
}

/// Boards reached by alternating legal moves, stopping at the first terminal position.
fn played_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0usize..9, 0..20).prop_map(|indices| {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for index in indices {
            if board.outcome().is_terminal() {
                break;
            }
            if board.apply_move(index, mark).is_ok() {
                mark = mark.other();
            }
        }
        board
    })
}

// =============================================================================
// Classification
// =============================================================================

proptest! {
    #[test]
    fn classification_is_exclusive(board in any_board()) {
        let winner = board.check_winner();
        let full = board.is_full();
        match board.outcome() {
            Outcome::Win(mark) => prop_assert_eq!(winner, Some(mark)),
            Outcome::Draw => {
                prop_assert!(winner.is_none());
                prop_assert!(full);
            }
            Outcome::InProgress => {
                prop_assert!(winner.is_none());
                prop_assert!(!full);
            }
        }
    }

    #[test]
    fn queries_are_idempotent(board in any_board()) {
        let first = (board.check_winner(), board.is_full(), board.outcome());
        let second = (board.check_winner(), board.is_full(), board.outcome());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn played_boards_have_consistent_counts(board in played_board()) {
        prop_assert!(board.side_to_move().is_some());
    }
}

// =============================================================================
// Move legality
// =============================================================================

proptest! {
    #[test]
    fn legal_move_changes_exactly_one_cell(board in played_board(), index in 0usize..9) {
        prop_assume!(board.is_empty_at(index));
        let mut after = board;
        after.apply_move(index, Mark::O).unwrap();

        for i in 0..9 {
            if i == index {
                prop_assert_eq!(after.get(i), Some(Mark::O));
            } else {
                prop_assert_eq!(after.cells()[i], board.cells()[i]);
            }
        }
    }

    #[test]
    fn occupied_cell_is_rejected_without_change(board in played_board(), index in 0usize..9) {
        prop_assume!(!board.is_empty_at(index));
        let mut after = board;
        prop_assert_eq!(
            after.apply_move(index, Mark::X),
            Err(MoveError::CellOccupied { index })
        );
        prop_assert_eq!(after, board);
    }

    #[test]
    fn out_of_range_is_rejected_without_change(board in played_board(), index in 9usize..1000) {
        let mut after = board;
        prop_assert_eq!(
            after.apply_move(index, Mark::X),
            Err(MoveError::OutOfRange { index })
        );
        prop_assert_eq!(after, board);
    }
}

// =============================================================================
// Coordinates
// =============================================================================

#[test]
fn coordinates_map_to_row_major_indices() {
    assert_eq!(ttt_core::cell_index(0, 0), Some(0));
    assert_eq!(ttt_core::cell_index(1, 2), Some(5));
    assert_eq!(ttt_core::cell_index(2, 2), Some(8));
    assert_eq!(ttt_core::cell_index(3, 0), None);
    assert_eq!(ttt_core::cell_index(0, 3), None);

    for index in 0..9 {
        let (row, col) = (ttt_core::row_of(index), ttt_core::col_of(index));
        assert_eq!(ttt_core::cell_index(row, col), Some(index));
    }
}
