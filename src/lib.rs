//! Tic-Tac-Toe engine
//!
//! This crate provides:
//! - A 3x3 board with turn tracking, legality checks and terminal detection
//! - An artificial opponent with easy, medium and hard (minimax) tiers
//! - Drivers for playing complete games between agents
//! - A terminal interface built on the above

pub mod ai;
pub mod cli;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod ports;

pub use ai::{Difficulty, SearchEngine};
pub use error::{Error, Result};
pub use game::{Board, Cell, Game, GameOutcome, Mark, Position};
