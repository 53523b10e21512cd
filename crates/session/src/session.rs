//! Round orchestration: whose turn it is, applying moves, scoring rounds

use thiserror::Error;
use tracing::{info, warn};
use ttt_core::{Board, Mark, MoveError, Outcome, Strategy};

use crate::config::SessionConfig;
use crate::difficulty::Difficulty;
use crate::tally::ScoreTally;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the round is over, start a new one")]
    RoundOver,

    #[error("it is the computer's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("{strategy} found no move")]
    NoMoveAvailable { strategy: String },
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished(Outcome),
}

/// One board, the side to move, an optional computer opponent and the
/// running score.
///
/// Rejected moves leave everything unchanged; the turn does not advance.
pub struct Session {
    config: SessionConfig,
    board: Board,
    to_move: Mark,
    phase: Phase,
    tally: ScoreTally,
    opponent: Option<Box<dyn Strategy>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let opponent = build_opponent(&config);
        Self {
            board: Board::new(),
            to_move: config.first,
            phase: Phase::Playing,
            tally: ScoreTally::new(),
            opponent,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn opponent_name(&self) -> Option<&str> {
        self.opponent.as_deref().map(|s| s.name())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.phase == Phase::Playing
            && self.opponent.is_some()
            && self.to_move != self.config.human
    }

    /// Apply a human move for the side to move.
    pub fn play_human(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::RoundOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::NotHumanTurn);
        }

        if let Err(err) = self.board.apply_move(index, self.to_move) {
            warn!(index, mark = %self.to_move, %err, "move rejected");
            return Err(err.into());
        }
        Ok(self.finish_turn())
    }

    /// Ask the opponent for a move and apply it. Returns the chosen cell.
    pub fn play_computer(&mut self) -> Result<(usize, Outcome), SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::RoundOver);
        }
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let Some(strategy) = self.opponent.as_mut() else {
            return Err(SessionError::NotComputerTurn);
        };

        let cell = strategy
            .choose_move(&self.board, self.to_move)
            .ok_or_else(|| SessionError::NoMoveAvailable {
                strategy: strategy.name().to_string(),
            })?;
        self.board.apply_move(cell, self.to_move)?;

        Ok((cell, self.finish_turn()))
    }

    /// Fresh board with the configured opening mark; the tally is kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = self.config.first;
        self.phase = Phase::Playing;
        if let Some(opponent) = self.opponent.as_mut() {
            opponent.new_game();
        }
    }

    /// Switch opponent strength and start a new round; the tally is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.opponent = build_opponent(&self.config);
        self.restart();
    }

    /// Classify the board after a move: score a finished round once, or
    /// pass the turn.
    fn finish_turn(&mut self) -> Outcome {
        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            self.tally.record(outcome);
            self.phase = Phase::Finished(outcome);
            info!(%outcome, tally = %self.tally, "round finished");
        } else {
            self.to_move = self.to_move.other();
        }
        outcome
    }
}

fn build_opponent(config: &SessionConfig) -> Option<Box<dyn Strategy>> {
    if !config.versus_computer {
        return None;
    }
    Some(config.difficulty.strategy(config.seed))
}
