//! Tic-Tac-Toe game implementation

pub mod board;
pub mod history;
pub mod lines;

pub use board::{BOARD_SIZE, Board, Cell, Mark, Position};
pub use history::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
