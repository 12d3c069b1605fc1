//! Tic-Tac-Toe at the terminal
//!
//! Without a subcommand this starts the interactive menu. Batch commands:
//! - `hint` scores every free cell of a position
//! - `simulate` plays a series of AI-vs-AI games

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe::cli::{
    commands::{hint, play, simulate},
    logging::setup_logging,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with a minimax AI opponent", long_about = None)]
struct Cli {
    /// Log search and session details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play(play::PlayArgs),

    /// Show minimax scores and the best move for a position
    Hint(hint::HintArgs),

    /// Play a series of AI-vs-AI games
    Simulate(simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(cli.verbose)?;

    match cli.command.unwrap_or(Commands::Play(play::PlayArgs::default())) {
        Commands::Play(args) => play::execute(args),
        Commands::Hint(args) => hint::execute(args),
        Commands::Simulate(args) => simulate::execute(args),
    }
}
