//! Scripted runs of the interactive session

use std::io::Cursor;

use tictactoe::{
    ai::Difficulty,
    cli::{Session, SessionConfig},
    game::Mark,
};

fn config(difficulty: Difficulty) -> SessionConfig {
    SessionConfig::default()
        .with_difficulty(difficulty)
        .with_seed(17)
        .with_spinner(false)
}

/// Run a session over `input` and return everything it printed plus the final tally
fn run(config: &SessionConfig, input: &str) -> (String, tictactoe::pipeline::SeriesSummary) {
    let mut output = Vec::new();
    let mut session = Session::new(config, Cursor::new(input.to_string()), &mut output);
    session.run().unwrap();
    let summary = session.scoreboard().clone();
    drop(session);
    (String::from_utf8(output).unwrap(), summary)
}

/// Every cell in row-major order; occupied ones are re-prompted
fn every_cell() -> String {
    let mut lines = String::new();
    for row in 0..3 {
        for col in 0..3 {
            lines.push_str(&format!("{row},{col}\n"));
        }
    }
    lines
}

#[test]
fn quit_from_menu() {
    let (output, summary) = run(&config(Difficulty::Hard), "3\n");
    assert!(output.contains("=== Tic-Tac-Toe Game ==="));
    assert!(output.contains("Thanks for playing! Goodbye!"));
    assert_eq!(summary.games, 0);
}

#[test]
fn invalid_menu_choice_reprompts() {
    let (output, _) = run(&config(Difficulty::Hard), "7\nabc\n3\n");
    assert_eq!(output.matches("Please enter 1, 2, or 3").count(), 2);
}

#[test]
fn human_vs_human_x_wins() {
    let input = "1\n0,0\n1,0\n0,1\n1,1\n0,2\nn\n";
    let (output, summary) = run(&config(Difficulty::Hard), input);

    assert!(output.contains("=== Tic-Tac-Toe: Human vs Human ==="));
    assert!(output.contains("Player X, enter your move"));
    assert!(output.contains("Player O, enter your move"));
    assert!(output.contains("Player X wins!"));
    assert!(output.contains("Games played: 1 (X wins: 1, O wins: 0, ties: 0)"));
    assert_eq!(summary.x_wins, 1);
}

#[test]
fn bad_move_input_is_explained() {
    let input = "1\n11\nfoo,bar\n5,5\n-1,0\n0,0\n0,0\n";
    let (output, summary) = run(&config(Difficulty::Hard), input);

    assert!(output.contains("Please enter your move in the format: row,col (e.g., 1,2)"));
    assert!(output.contains("Invalid input! Please enter numbers in the format"));
    assert_eq!(
        output
            .matches("Invalid position! Please enter numbers between 0 and 2.")
            .count(),
        2
    );
    assert!(output.contains("That position is already taken!"));
    assert!(output.contains("Game interrupted. Goodbye!"));
    assert_eq!(summary.games, 0);
}

#[test]
fn hard_ai_never_loses_to_row_major_human() {
    let input = format!("2\n{}", every_cell());
    let (output, summary) = run(&config(Difficulty::Hard), &input);

    assert!(output.contains("You are X, AI is O"));
    assert!(output.contains("AI is thinking..."));
    assert!(output.contains("AI plays: 1,1"));
    assert_eq!(summary.games, 1);
    assert_eq!(summary.x_wins, 0);
}

#[test]
fn ai_playing_x_moves_first() {
    let config = config(Difficulty::Medium).with_ai_mark(Mark::X);
    let input = format!("2\n{}", every_cell());
    let (output, summary) = run(&config, &input);

    assert!(output.contains("You are O, AI is X"));
    let first_ai = output.find("AI plays:").unwrap();
    let first_prompt = output.find("Player O, enter your move").unwrap();
    assert!(first_ai < first_prompt);
    assert_eq!(summary.games, 1);
}

#[test]
fn play_again_resets_board() {
    let game = "0,0\n1,0\n0,1\n1,1\n0,2\n";
    let input = format!("1\n{game}y\n1\n{game}no\n");
    let (output, summary) = run(&config(Difficulty::Hard), &input);

    assert_eq!(output.matches("Player X wins!").count(), 2);
    assert_eq!(summary.games, 2);
    assert_eq!(summary.x_wins, 2);
}

#[test]
fn end_of_input_at_menu() {
    let (output, summary) = run(&config(Difficulty::Easy), "");
    assert!(output.contains("Goodbye!"));
    assert_eq!(summary.games, 0);
}
