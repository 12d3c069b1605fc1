//! Move selection for the artificial opponent

use log::debug;
use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use super::Difficulty;
use crate::{
    Result,
    game::{Board, LineAnalyzer, Mark, Position},
    ports::Agent,
};

/// Score of a win found at the root; deeper wins score less.
pub const WIN_SCORE: i32 = 10;

/// Chooses moves for one side of the board.
///
/// The engine holds configuration only (tier, which mark it plays, and its
/// random source). Every call to [`SearchEngine::best_move`] works on copies
/// of the board it is given and never mutates it.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    difficulty: Difficulty,
    own_mark: Mark,
    opponent_mark: Mark,
    rng: StdRng,
}

impl SearchEngine {
    /// Create an engine playing O against X, seeded from entropy
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, random())
    }

    /// Create an engine with a deterministic random source
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            own_mark: Mark::O,
            opponent_mark: Mark::X,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn own_mark(&self) -> Mark {
        self.own_mark
    }

    pub fn opponent_mark(&self) -> Mark {
        self.opponent_mark
    }

    /// Set the tier from its name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDifficulty`] for anything other than
    /// `easy`, `medium` or `hard`; the current tier is kept.
    pub fn set_difficulty(&mut self, value: &str) -> Result<()> {
        self.difficulty = value.parse()?;
        Ok(())
    }

    pub fn set_difficulty_level(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Assign both marks. The caller is responsible for passing distinct marks.
    pub fn set_marks(&mut self, own: Mark, opponent: Mark) {
        self.own_mark = own;
        self.opponent_mark = opponent;
    }

    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Choose a move for `own_mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when the board has no empty cell.
    pub fn best_move(&mut self, board: &Board) -> Result<Position> {
        let position = match self.difficulty {
            Difficulty::Easy => self.random_move(board)?,
            Difficulty::Medium => self.medium_move(board)?,
            Difficulty::Hard => self.minimax_move(board)?,
        };
        debug!(
            "{} engine ({}) chose {}",
            self.difficulty, self.own_mark, position
        );
        Ok(position)
    }

    fn random_move(&mut self, board: &Board) -> Result<Position> {
        board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    fn medium_move(&mut self, board: &Board) -> Result<Position> {
        if let Some(win) = Self::find_winning_move(board, self.own_mark) {
            return Ok(win);
        }
        if let Some(block) = Self::find_winning_move(board, self.opponent_mark) {
            return Ok(block);
        }
        self.random_move(board)
    }

    fn minimax_move(&mut self, board: &Board) -> Result<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (position, score) in self.score_moves(board) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((position, score));
            }
        }

        match best {
            Some((position, score)) => {
                debug!("minimax best {position} scores {score}");
                Ok(position)
            }
            None => self.random_move(board),
        }
    }

    /// First empty cell, in row-major order, where `mark` completes a line
    pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Position> {
        board.empty_cells().into_iter().find(|pos| {
            let mut next = *board;
            next.place_as(pos.row, pos.col, mark);
            LineAnalyzer::has_won(next.cells(), mark)
        })
    }

    /// Minimax score of every empty cell for `own_mark`, in row-major order
    pub fn score_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        board
            .empty_cells()
            .into_iter()
            .map(|pos| {
                let mut next = *board;
                next.place_as(pos.row, pos.col, self.own_mark);
                (pos, self.minimax(&next, 0, false))
            })
            .collect()
    }

    /// Exhaustive minimax from `own_mark`'s point of view.
    ///
    /// `depth` counts plies simulated below the root move and `maximizing`
    /// says whether `own_mark` moves at this ply. Wins score
    /// `WIN_SCORE - depth`, losses `depth - WIN_SCORE`, draws zero.
    pub fn minimax(&self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        match board.winner() {
            Some(mark) if mark == self.own_mark => return WIN_SCORE - depth,
            Some(mark) if mark == self.opponent_mark => return depth - WIN_SCORE,
            _ => {}
        }
        if board.is_full() {
            return 0;
        }

        let mark = if maximizing {
            self.own_mark
        } else {
            self.opponent_mark
        };
        let scores = board.empty_cells().into_iter().map(|pos| {
            let mut next = *board;
            next.place_as(pos.row, pos.col, mark);
            self.minimax(&next, depth + 1, !maximizing)
        });

        let best = if maximizing { scores.max() } else { scores.min() };
        best.unwrap_or(0)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Agent for SearchEngine {
    fn select_move(&mut self, board: &Board) -> Result<Position> {
        self.best_move(board)
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Easy AI",
            Difficulty::Medium => "Medium AI",
            Difficulty::Hard => "Hard AI",
        }
    }
}
