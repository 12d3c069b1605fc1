//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Mark};

/// Winning lines on the 3x3 board as `(row, col)` triples.
///
/// The order is the scan order used by [`LineAnalyzer::winner`]: rows, then
/// columns, then the main diagonal, then the anti-diagonal.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Mark owning a complete line, if all three cells hold the same mark
    pub fn line_owner(cells: &[[Cell; 3]; 3], line: &[(usize, usize); 3]) -> Option<Mark> {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = cells[r0][c0].to_mark()?;
        let target = cells[r0][c0];
        (cells[r1][c1] == target && cells[r2][c2] == target).then_some(first)
    }

    /// First complete line's mark in scan order
    pub fn winner(cells: &[[Cell; 3]; 3]) -> Option<Mark> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if a mark has three in a row anywhere on the board
    pub fn has_won(cells: &[[Cell; 3]; 3], mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(mark))
    }
}
