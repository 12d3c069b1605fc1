//! Terminal interface for the game
//!
//! This module provides the interactive session, the batch commands built on
//! top of the core, and their configuration and output helpers.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod session;

pub use config::SessionConfig;
pub use session::{MoveInputError, Session, parse_move_input};
