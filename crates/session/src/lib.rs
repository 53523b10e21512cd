//! Session layer for the tic-tac-toe engines
//!
//! This crate provides:
//! - The difficulty → strategy factory
//! - Interactive rounds with an in-memory score tally
//! - Matches between strategies
//! - TOML configuration for the `tictactoe` binary
//!
//! # Usage
//!
//! ```bash
//! # Play against the perfect opponent, taking O
//! cargo run -p ttt_session -- play --difficulty hard --human o
//!
//! # Pit two strategies against each other
//! cargo run -p ttt_session -- match hard medium --games 100
//! ```

mod config;
mod difficulty;
mod input;
mod match_runner;
mod render;
mod session;
mod tally;

pub use config::*;
pub use difficulty::*;
pub use input::*;
pub use match_runner::*;
pub use render::*;
pub use session::*;
pub use tally::*;
