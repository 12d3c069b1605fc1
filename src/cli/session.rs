//! Interactive text session: menu, move prompts and the game loops
//!
//! The session is generic over its input and output so scripted input can
//! drive it in tests exactly as a terminal would.

use std::{
    io::{BufRead, Write},
    time::Duration,
};

use anyhow::Result;
use log::info;
use thiserror::Error;

use super::{config::SessionConfig, output::create_spinner};
use crate::{
    ai::SearchEngine,
    game::{BOARD_SIZE, Game, GameOutcome, Mark, Position},
    pipeline::SeriesSummary,
};

/// Why a line typed at the move prompt was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputError {
    #[error("Please enter your move in the format: row,col (e.g., 1,2)")]
    MissingComma,

    #[error("Invalid input! Please enter numbers in the format: row,col (e.g., 1,2)")]
    NotNumbers,

    #[error("Invalid position! Please enter numbers between 0 and 2.")]
    OutOfRange,
}

/// Parse `row,col` as typed by a player. Occupancy is not checked here.
pub fn parse_move_input(input: &str) -> Result<Position, MoveInputError> {
    let (row, col) = input
        .trim()
        .split_once(',')
        .ok_or(MoveInputError::MissingComma)?;
    let row: i64 = row.trim().parse().map_err(|_| MoveInputError::NotNumbers)?;
    let col: i64 = col.trim().parse().map_err(|_| MoveInputError::NotNumbers)?;

    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) if row < BOARD_SIZE && col < BOARD_SIZE => Ok(Position::new(row, col)),
        _ => Err(MoveInputError::OutOfRange),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    HumanVsHuman,
    HumanVsAi,
    Quit,
}

/// A sequence of games played at one terminal
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    engine: SearchEngine,
    ai_mark: Mark,
    spinner: bool,
    scoreboard: SeriesSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: &SessionConfig, input: R, output: W) -> Self {
        let mut engine = match config.seed {
            Some(seed) => SearchEngine::with_seed(config.difficulty, seed),
            None => SearchEngine::new(config.difficulty),
        };
        engine.set_marks(config.ai_mark, config.ai_mark.opponent());

        Self {
            input,
            output,
            game: Game::new(),
            engine,
            ai_mark: config.ai_mark,
            spinner: config.spinner,
            scoreboard: SeriesSummary::default(),
        }
    }

    /// Results of the games finished so far
    pub fn scoreboard(&self) -> &SeriesSummary {
        &self.scoreboard
    }

    /// Main loop: menu, game, "play again?" until the player quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.show_menu()? else {
                writeln!(self.output, "\nGoodbye!")?;
                break;
            };

            let finished = match choice {
                MenuChoice::HumanVsHuman => {
                    self.game.reset();
                    self.play_human_vs_human()?
                }
                MenuChoice::HumanVsAi => {
                    self.game.reset();
                    self.play_human_vs_ai()?
                }
                MenuChoice::Quit => {
                    writeln!(self.output, "Thanks for playing! Goodbye!")?;
                    break;
                }
            };
            if !finished {
                writeln!(self.output, "\nGame interrupted. Goodbye!")?;
                break;
            }

            writeln!(self.output, "\n{}", "=".repeat(50))?;
            let answer = self
                .prompt("Would you like to play another game? (y/n): ")?
                .unwrap_or_default()
                .to_lowercase();
            if answer != "y" && answer != "yes" {
                writeln!(self.output, "Thanks for playing! Goodbye!")?;
                break;
            }
        }

        self.show_scoreboard()?;
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<Option<MenuChoice>> {
        writeln!(self.output, "\n=== Tic-Tac-Toe Game ===")?;
        writeln!(self.output, "1. Human vs Human")?;
        writeln!(
            self.output,
            "2. Human vs AI ({})",
            self.engine.difficulty()
        )?;
        writeln!(self.output, "3. Quit")?;

        loop {
            let Some(choice) = self.prompt("Enter your choice (1-3): ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(MenuChoice::HumanVsHuman)),
                "2" => return Ok(Some(MenuChoice::HumanVsAi)),
                "3" => return Ok(Some(MenuChoice::Quit)),
                _ => writeln!(self.output, "Please enter 1, 2, or 3")?,
            }
        }
    }

    /// Returns `false` if input ended before the game did
    fn play_human_vs_human(&mut self) -> Result<bool> {
        writeln!(self.output, "=== Tic-Tac-Toe: Human vs Human ===")?;
        writeln!(
            self.output,
            "Enter moves as 'row,col' where both row and col are between 0-2"
        )?;
        writeln!(self.output, "For example: '1,1' for the center position")?;
        info!("starting human vs human game");

        while !self.game.board().is_terminal() {
            self.display_board()?;
            let Some(position) = self.read_move()? else {
                return Ok(false);
            };
            self.game.play(position)?;
        }

        self.finish_game()?;
        Ok(true)
    }

    /// Returns `false` if input ended before the game did
    fn play_human_vs_ai(&mut self) -> Result<bool> {
        writeln!(self.output, "=== Tic-Tac-Toe: Human vs AI ===")?;
        writeln!(
            self.output,
            "You are {}, AI is {}",
            self.ai_mark.opponent(),
            self.ai_mark
        )?;
        writeln!(
            self.output,
            "Enter moves as 'row,col' where both row and col are between 0-2"
        )?;
        info!(
            "starting human vs {} AI game, AI plays {}",
            self.engine.difficulty(),
            self.ai_mark
        );

        while !self.game.board().is_terminal() {
            self.display_board()?;

            let position = if self.game.board().turn() == self.ai_mark {
                let position = self.ai_move()?;
                writeln!(self.output, "AI plays: {position}")?;
                position
            } else {
                match self.read_move()? {
                    Some(position) => position,
                    None => return Ok(false),
                }
            };
            self.game.play(position)?;
        }

        self.finish_game()?;
        Ok(true)
    }

    fn ai_move(&mut self) -> Result<Position> {
        if !self.spinner {
            writeln!(self.output, "AI is thinking...")?;
            return Ok(self.engine.best_move(self.game.board())?);
        }

        let spinner = create_spinner("AI is thinking...")?;
        spinner.enable_steady_tick(Duration::from_millis(80));
        let result = self.engine.best_move(self.game.board());
        spinner.finish_and_clear();
        Ok(result?)
    }

    /// Prompt until the current player enters a free cell; `None` on end of input
    fn read_move(&mut self) -> Result<Option<Position>> {
        let text = format!(
            "Player {}, enter your move (row,col) [0-2,0-2]: ",
            self.game.board().turn()
        );

        loop {
            let Some(line) = self.prompt(&text)? else {
                return Ok(None);
            };
            match parse_move_input(&line) {
                Ok(position) if self.game.board().is_empty_cell(position.row, position.col) => {
                    return Ok(Some(position));
                }
                Ok(_) => writeln!(
                    self.output,
                    "That position is already taken! Please choose an empty position."
                )?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn display_board(&mut self) -> Result<()> {
        writeln!(self.output, "\nCurrent board:")?;
        writeln!(self.output, "{}", self.game.board())?;
        writeln!(self.output)?;
        Ok(())
    }

    fn finish_game(&mut self) -> Result<()> {
        self.display_board()?;
        let Some(outcome) = self.game.outcome() else {
            return Ok(());
        };

        match outcome {
            GameOutcome::Win(mark) => writeln!(self.output, "Player {mark} wins!")?,
            GameOutcome::Draw => writeln!(self.output, "It's a tie!")?,
        }
        info!(
            "game over after {} moves: {:?}",
            self.game.moves().len(),
            outcome
        );
        self.scoreboard.record(outcome);
        Ok(())
    }

    fn show_scoreboard(&mut self) -> Result<()> {
        if self.scoreboard.games == 0 {
            return Ok(());
        }
        writeln!(
            self.output,
            "Games played: {} (X wins: {}, O wins: {}, ties: {})",
            self.scoreboard.games,
            self.scoreboard.x_wins,
            self.scoreboard.o_wins,
            self.scoreboard.draws
        )?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
