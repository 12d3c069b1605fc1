//! Game record: a live board plus the moves applied to it

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark, Position};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// A game in progress with its move history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a move for the mark whose turn it is
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the board is terminal and
    /// [`crate::Error::InvalidMove`] for out-of-bounds or occupied targets.
    pub fn play(&mut self, position: Position) -> Result<(), crate::Error> {
        if self.board.is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let mark = self.board.turn();
        if !self.board.place(position.row, position.col) {
            return Err(crate::Error::InvalidMove {
                row: position.row,
                col: position.col,
            });
        }

        self.moves.push(Move { position, mark });
        Ok(())
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied so far, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Final result, once the board is terminal
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    /// Start over from the empty board
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves.clear();
    }
}
