//! Subcommands of the `tictactoe` binary

pub mod hint;
pub mod play;
pub mod simulate;
