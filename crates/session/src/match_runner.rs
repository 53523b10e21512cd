//! Match runner for playing games between strategies

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use ttt_core::{Board, Mark, MoveError, Outcome, Strategy};

use crate::tally::{GameResult, MatchResult};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{strategy} played an illegal move: {source}")]
    IllegalMove {
        strategy: String,
        #[source]
        source: MoveError,
    },

    #[error("{strategy} found no move on a board still in progress")]
    NoMove { strategy: String },
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether the strategies swap marks every game
    pub alternate_marks: bool,
    /// Log every game at info level instead of debug
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_marks: true,
            verbose: true,
        }
    }
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two strategies
    ///
    /// Returns the result from `first`'s perspective. `first` plays X in
    /// even-numbered games, and in every game when marks don't alternate.
    pub fn run_match(
        &self,
        first: &mut dyn Strategy,
        second: &mut dyn Strategy,
    ) -> Result<MatchResult, MatchError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let first_is_x = !self.config.alternate_marks || game_num % 2 == 0;

            let outcome = if first_is_x {
                self.play_game(first, second)?
            } else {
                self.play_game(second, first)?
            };

            let first_mark = if first_is_x { Mark::X } else { Mark::O };
            result.by_mark.record(outcome);
            if let Some(game_result) = GameResult::for_mark(outcome, first_mark) {
                result.add(game_result);
            }

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    first = first.name(),
                    first_mark = %first_mark,
                    %outcome,
                    wins = result.wins,
                    losses = result.losses,
                    draws = result.draws,
                    "game finished"
                );
            } else {
                debug!(game = game_num + 1, %outcome, "game finished");
            }
        }

        Ok(result)
    }

    /// Play a single game with `x` opening; returns the terminal outcome
    pub fn play_game(
        &self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<Outcome, MatchError> {
        let mut board = Board::new();
        x.new_game();
        o.new_game();

        let mut to_move = Mark::X;
        loop {
            let outcome = board.outcome();
            if outcome.is_terminal() {
                return Ok(outcome);
            }

            let strategy: &mut dyn Strategy = match to_move {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };

            let cell = strategy.choose_move(&board, to_move).ok_or_else(|| MatchError::NoMove {
                strategy: strategy.name().to_string(),
            })?;
            board
                .apply_move(cell, to_move)
                .map_err(|source| MatchError::IllegalMove {
                    strategy: strategy.name().to_string(),
                    source,
                })?;

            to_move = to_move.other();
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    num_games: u32,
) -> Result<MatchResult, MatchError> {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(first, second)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
