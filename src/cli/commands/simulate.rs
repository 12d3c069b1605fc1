//! Simulate command - AI-vs-AI series

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    ai::{Difficulty, SearchEngine},
    cli::output::{ProgressObserver, print_kv, print_section},
    game::Mark,
    pipeline::{SeriesSummary, run_series},
    ports::Observer,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of AI-vs-AI games")]
pub struct SimulateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Strength of the engine playing X
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pub x_difficulty: Difficulty,

    /// Strength of the engine playing O
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pub o_difficulty: Difficulty,

    /// Random seed for reproducibility (O's engine uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
    #[serde(flatten)]
    summary: SeriesSummary,
}

fn engine_for(mark: Mark, difficulty: Difficulty, seed: Option<u64>) -> SearchEngine {
    let mut engine = match seed {
        Some(seed) => SearchEngine::with_seed(difficulty, seed),
        None => SearchEngine::new(difficulty),
    };
    engine.set_marks(mark, mark.opponent());
    engine
}

/// Run the series described by `args` without printing anything
pub fn simulate(args: &SimulateArgs, observers: &mut [&mut dyn Observer]) -> Result<SeriesSummary> {
    let mut x_engine = engine_for(Mark::X, args.x_difficulty, args.seed);
    let mut o_engine = engine_for(Mark::O, args.o_difficulty, args.seed.map(|s| s.wrapping_add(1)));
    Ok(run_series(&mut x_engine, &mut o_engine, args.games, observers)?)
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let summary = if args.no_progress || args.json {
        simulate(&args, &mut [])?
    } else {
        let mut progress = ProgressObserver::new();
        let mut observers: [&mut dyn Observer; 1] = [&mut progress];
        simulate(&args, &mut observers)?
    };

    if args.json {
        let report = SimulationReport {
            x_difficulty: args.x_difficulty,
            o_difficulty: args.o_difficulty,
            seed: args.seed,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!(
        "{} (X) vs {} (O)",
        args.x_difficulty, args.o_difficulty
    ));
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(games: usize, x: Difficulty, o: Difficulty, seed: u64) -> SimulateArgs {
        SimulateArgs {
            games,
            x_difficulty: x,
            o_difficulty: o,
            seed: Some(seed),
            json: true,
            no_progress: true,
        }
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let a = simulate(&args(20, Difficulty::Easy, Difficulty::Medium, 11), &mut []).unwrap();
        let b = simulate(&args(20, Difficulty::Easy, Difficulty::Medium, 11), &mut []).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.games, 20);
    }

    #[test]
    fn test_hard_never_loses_to_easy() {
        let summary = simulate(&args(5, Difficulty::Easy, Difficulty::Hard, 3), &mut []).unwrap();
        assert_eq!(summary.x_wins, 0);
    }
}
