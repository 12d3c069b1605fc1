//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The core owns these traits; the search engine, the terminal session and
//! the progress display implement them.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
