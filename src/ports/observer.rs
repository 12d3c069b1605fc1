//! Observer port - hooks for watching a series of games

use crate::{Result, game::GameOutcome};

/// Observer trait for monitoring a series of games
///
/// The methods are called in order:
/// 1. `on_series_start(total_games)` - once
/// 2. `on_game_end(game_num, outcome)` - after each game
/// 3. `on_series_end()` - once
///
/// All methods default to doing nothing.
pub trait Observer {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
