//! Agent port - anything that can pick a move for a board

use crate::{
    Result,
    game::{Board, Position},
};

/// Agent trait - unified interface for move selection
///
/// Implemented by [`crate::ai::SearchEngine`] for every difficulty tier, so
/// drivers such as [`crate::pipeline::play_game`] can pit any two agents
/// against each other.
///
/// # Examples
///
/// ```no_run
/// use tictactoe::{
///     ai::{Difficulty, SearchEngine},
///     game::Board,
///     ports::Agent,
/// };
///
/// fn opening<A: Agent>(agent: &mut A) -> tictactoe::Result<()> {
///     let position = agent.select_move(&Board::new())?;
///     println!("{} opens at {position}", agent.name());
///     Ok(())
/// }
///
/// opening(&mut SearchEngine::new(Difficulty::Hard)).unwrap();
/// ```
pub trait Agent {
    /// Select an empty cell on `board` for this agent's mark.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (full board).
    fn select_move(&mut self, board: &Board) -> Result<Position>;

    /// Get the agent's name.
    ///
    /// Used in logs and match summaries.
    fn name(&self) -> &str;
}
