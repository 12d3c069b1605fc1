//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{history::GameOutcome, lines::LineAnalyzer};

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Mark occupying this cell, if any
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A player symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl std::str::FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _ => Err(crate::Error::InvalidMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A `(row, col)` coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

/// Grid contents plus the mark to move.
///
/// `Board` is a plain `Copy` value (9 cells and a mark), so exploring a
/// hypothetical continuation is just a copy; nothing is shared between the
/// original and the snapshot.
///
/// Two placement paths exist:
/// - [`Board::place`] writes the mark whose turn it is and advances the turn.
/// - [`Board::place_as`] writes an explicit mark and leaves the turn alone.
///   Search uses it to try moves for either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    turn: Mark,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Mark::X,
        }
    }

    /// Create a board from a string representation such as `"XO......."`.
    ///
    /// Whitespace is ignored. The mark to move is inferred from the piece
    /// counts: X when the counts are equal, O when X is one ahead.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X behind, or ahead by more than one)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);
        let turn = Self::determine_turn_from_counts(&count)?;
        Ok(Board { cells, turn })
    }

    fn parse_cells(
        chars: &[char],
        context: &str,
    ) -> Result<[[Cell; BOARD_SIZE]; BOARD_SIZE], crate::Error> {
        let total = BOARD_SIZE * BOARD_SIZE;
        if chars.len() != total {
            return Err(crate::Error::InvalidBoardLength {
                expected: total,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn determine_turn_from_counts(count: &PieceCount) -> Result<Mark, crate::Error> {
        if count.x == count.o {
            Ok(Mark::X)
        } else if count.x == count.o + 1 {
            Ok(Mark::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Mark whose move is next under implicit play
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Raw grid, row-major
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.is_legal_position(row, col)
            .then(|| self.cells[row][col])
    }

    /// Place the current turn's mark and advance the turn.
    ///
    /// Returns `false` without touching the board when the target is out of
    /// bounds or occupied.
    pub fn place(&mut self, row: usize, col: usize) -> bool {
        if !self.place_as(row, col, self.turn) {
            return false;
        }
        self.advance_turn();
        true
    }

    /// Place an explicit mark without advancing the turn.
    ///
    /// Returns `false` without touching the board when the target is out of
    /// bounds or occupied.
    pub fn place_as(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_empty_cell(row, col) {
            return false;
        }
        self.cells[row][col] = mark.to_cell();
        true
    }

    /// Bounds check only
    pub fn is_legal_position(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// `false` for out-of-bounds coordinates
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_empty)
    }

    /// Swap the turn to the other mark
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Final result, once the board is terminal
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(mark) => Some(GameOutcome::Win(mark)),
            None if self.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Every unoccupied coordinate in row-major order.
    ///
    /// Search tie-breaking depends on this order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
            .filter(|pos| self.cells[pos.row][pos.col].is_empty())
            .collect()
    }

    /// Reset to the empty board with X to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let rendered: Vec<String> = row
                .iter()
                .map(|cell| match cell.to_mark() {
                    Some(mark) => mark.to_string(),
                    None => " ".to_string(),
                })
                .collect();
            write!(f, " {} ", rendered.join(" | "))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}
