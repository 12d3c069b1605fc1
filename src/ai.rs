//! Artificial opponent: strength tiers and minimax search

pub mod difficulty;
pub mod engine;

pub use difficulty::Difficulty;
pub use engine::{SearchEngine, WIN_SCORE};
