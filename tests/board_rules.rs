//! Board invariants: placement, turn order, terminal detection and snapshots

use tictactoe::game::{BOARD_SIZE, Board, Cell, Mark, Position, WINNING_LINES};

/// Every coordinate, row-major
fn all_positions() -> Vec<Position> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
        .collect()
}

mod placement {
    use super::*;

    #[test]
    fn failed_place_leaves_board_identical() {
        let mut board = Board::new();
        assert!(board.place(1, 1));
        assert!(board.place(0, 0));
        let before = board;

        for (row, col) in [(1, 1), (0, 0), (3, 0), (0, 3), (7, 9)] {
            assert!(!board.place(row, col));
            assert!(!board.place_as(row, col, Mark::O));
            assert_eq!(board, before, "({row}, {col}) changed the board");
        }
    }

    #[test]
    fn implicit_turn_alternates_regardless_of_cells() {
        let order = [(2, 2), (0, 1), (1, 0), (0, 0), (2, 1), (1, 2), (0, 2), (1, 1), (2, 0)];
        let mut board = Board::new();

        for (i, (row, col)) in order.into_iter().enumerate() {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(board.turn(), expected);
            assert!(board.place(row, col));
            assert_eq!(board.cell(row, col), Some(expected.to_cell()));
        }
    }

    #[test]
    fn explicit_mark_can_break_turn_invariant() {
        let mut board = Board::new();
        assert!(board.place_as(0, 0, Mark::O));
        assert!(board.place_as(0, 1, Mark::O));
        assert_eq!(board.turn(), Mark::X);
        assert_eq!(board.empty_cells().len(), 7);
    }

    #[test]
    fn implicit_play_keeps_count_invariant() {
        let mut board = Board::new();
        for position in all_positions() {
            if board.is_terminal() {
                break;
            }
            board.place(position.row, position.col);

            let cells = board.cells().iter().flatten();
            let x = cells.clone().filter(|c| **c == Cell::X).count();
            let o = cells.filter(|c| **c == Cell::O).count();
            assert!(x == o || x == o + 1);
            assert_eq!(board.turn() == Mark::X, x == o);
        }
    }
}

mod terminal_detection {
    use super::*;

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
        assert!(!board.is_terminal());
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for mark in [Mark::X, Mark::O] {
            for line in &WINNING_LINES {
                let mut board = Board::new();
                for &(row, col) in line {
                    board.place_as(row, col, mark);
                }
                assert_eq!(board.winner(), Some(mark), "line {line:?}");
                assert!(board.is_terminal());
            }
        }
    }

    #[test]
    fn two_in_a_line_is_not_a_win() {
        for line in &WINNING_LINES {
            let mut board = Board::new();
            for &(row, col) in &line[..2] {
                board.place_as(row, col, Mark::X);
            }
            assert_eq!(board.winner(), None);
        }
    }

    #[test]
    fn full_board_without_line_is_terminal() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn win_on_last_cell_is_reported() {
        // X O X
        // O X O
        // O X X  <- X completes the diagonal on the final move
        let board = Board::from_string("XOXOXOOXX").unwrap();
        assert!(board.is_full());
        assert_eq!(board.winner(), Some(Mark::X));
    }
}

mod snapshots {
    use super::*;

    #[test]
    fn clone_is_independent() {
        let mut original = Board::new();
        original.place(1, 1);
        let original_cells = *original.cells();

        let mut copy = original.clone();
        assert!(copy.place(0, 0));
        copy.advance_turn();
        copy.place_as(2, 2, Mark::X);

        assert_eq!(*original.cells(), original_cells);
        assert_eq!(original.turn(), Mark::O);
        assert_ne!(copy, original);

        original.place(0, 1);
        assert_eq!(copy.cell(0, 1), Some(Cell::Empty));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut board = Board::from_string("XOX.O....").unwrap();
        board.reset();
        let once = board;
        board.reset();
        assert_eq!(board, once);
        assert_eq!(board, Board::new());
        assert_eq!(board.turn(), Mark::X);
    }
}
