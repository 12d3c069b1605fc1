//! Hint command - minimax scores for every free cell of a position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::{Difficulty, SearchEngine},
    cli::output::{print_kv, print_section},
    game::{BOARD_SIZE, Board, GameOutcome, Mark, Position},
};

#[derive(Parser, Debug)]
#[command(about = "Show minimax scores and the best move for a position")]
pub struct HintArgs {
    /// Board as 9 cells in row-major order, e.g. "XO..X...." ('.' for empty)
    pub board: String,

    /// Mark to advise (defaults to the mark whose turn it is)
    #[arg(long)]
    pub mark: Option<Mark>,
}

/// Scores and recommendation for one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub mark: Mark,
    pub scores: Vec<(Position, i32)>,
    pub best: Position,
}

/// Run the hard-tier search for `mark` on `board`.
///
/// Returns `None` when the position is already decided.
pub fn compute_hint(board: &Board, mark: Mark) -> Result<Option<Hint>> {
    if board.is_terminal() {
        return Ok(None);
    }

    let mut engine = SearchEngine::with_seed(Difficulty::Hard, 0);
    engine.set_marks(mark, mark.opponent());
    let scores = engine.score_moves(board);
    let best = engine.best_move(board)?;
    Ok(Some(Hint { mark, scores, best }))
}

/// Lay the scores out on the 3x3 grid; occupied cells show their mark
pub fn format_scores(board: &Board, scores: &[(Position, i32)]) -> String {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let position = Position::new(row, col);
                match scores.iter().find(|(p, _)| *p == position) {
                    Some((_, score)) => format!("{score:>3}"),
                    None => match board.cell(row, col).and_then(|c| c.to_mark()) {
                        Some(mark) => format!("{mark:>3}"),
                        None => "  .".to_string(),
                    },
                }
            })
            .collect();
        rows.push(cells.join(" |"));
    }
    rows.join("\n")
}

pub fn execute(args: HintArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("invalid board '{}'", args.board))?;
    let mark = args.mark.unwrap_or(board.turn());

    print_section("Position");
    println!("{board}");

    let Some(hint) = compute_hint(&board, mark)? else {
        match board.outcome() {
            Some(GameOutcome::Win(winner)) => println!("\nGame over: {winner} has won."),
            _ => println!("\nGame over: it's a tie."),
        }
        return Ok(());
    };

    print_section(&format!("Minimax scores for {}", hint.mark));
    println!("{}", format_scores(&board, &hint.scores));
    println!();
    print_kv("Best move", &hint.best.to_string());
    Ok(())
}
