//! Single games and series of games between two agents

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    game::{Game, GameOutcome, Mark},
    ports::{Agent, Observer},
};

/// Tally of a series of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play one game from the empty board, X moving first, and return the
/// finished game with its outcome.
///
/// Each agent is asked for a move only on its own turn; agents are expected
/// to be configured for the mark they control.
///
/// # Errors
///
/// Propagates agent errors and rejects illegal moves with
/// [`crate::Error::InvalidMove`].
pub fn play_game(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
) -> Result<(Game, GameOutcome)> {
    let mut game = Game::new();

    loop {
        if let Some(outcome) = game.outcome() {
            return Ok((game, outcome));
        }

        let agent: &mut dyn Agent = match game.board().turn() {
            Mark::X => &mut *x_agent,
            Mark::O => &mut *o_agent,
        };
        let position = agent.select_move(game.board())?;
        debug!("{} plays {position}", agent.name());
        game.play(position)?;
    }
}

/// Play `games` games between the same two agents and tally the results.
pub fn run_series(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    games: usize,
    observers: &mut [&mut dyn Observer],
) -> Result<SeriesSummary> {
    for observer in observers.iter_mut() {
        observer.on_series_start(games)?;
    }

    let mut summary = SeriesSummary::default();
    for game_num in 0..games {
        let (_, outcome) = play_game(x_agent, o_agent)?;
        summary.record(outcome);
        for observer in observers.iter_mut() {
            observer.on_game_end(game_num, outcome)?;
        }
    }

    for observer in observers.iter_mut() {
        observer.on_series_end()?;
    }

    info!(
        "{} vs {}: {} games, X {} / O {} / draws {}",
        x_agent.name(),
        o_agent.name(),
        summary.games,
        summary.x_wins,
        summary.o_wins,
        summary.draws
    );
    Ok(summary)
}
