//! Driving complete games between agents
//!
//! Used by batch self-play and by tests that check optimal-play results.

pub mod series;

pub use series::{SeriesSummary, play_game, run_series};
