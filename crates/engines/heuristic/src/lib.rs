//! Heuristic Engine
//!
//! One ply of look-ahead with a fixed priority:
//! 1. complete a line for the mover,
//! 2. block a line the opponent would complete next turn,
//! 3. otherwise play a random empty cell.
//!
//! It does not see forks or any other multi-move trap.

mod tactics;

use rand::rngs::StdRng;
use rand::Rng;
use random_engine::RandomStrategy;
use tracing::debug;
use ttt_core::{Board, Mark, SearchResult, Strategy};

pub use tactics::{find_completing_move, Tactic};

/// One-ply win/block engine with a random fallback.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy<R = StdRng> {
    fallback: RandomStrategy<R>,
    nodes: u64,
}

impl HeuristicStrategy<StdRng> {
    pub fn new() -> Self {
        Self::with_fallback(RandomStrategy::new())
    }

    /// Seeds the random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::with_fallback(RandomStrategy::seeded(seed))
    }
}

impl Default for HeuristicStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicStrategy<R> {
    pub fn with_fallback(fallback: RandomStrategy<R>) -> Self {
        Self { fallback, nodes: 0 }
    }

    /// The move this engine plays, together with the rule that produced it.
    pub fn decide(&mut self, board: &Board, to_move: Mark) -> Option<(usize, Tactic)> {
        let mut scratch = *board;

        if let Some(cell) = find_completing_move(&mut scratch, to_move, &mut self.nodes) {
            return Some((cell, Tactic::Win));
        }
        if let Some(cell) = find_completing_move(&mut scratch, to_move.other(), &mut self.nodes) {
            return Some((cell, Tactic::Block));
        }
        self.fallback.pick(board).map(|cell| (cell, Tactic::Random))
    }
}

impl<R: Rng + Send> Strategy for HeuristicStrategy<R> {
    fn search(&mut self, board: &Board, to_move: Mark) -> SearchResult {
        self.nodes = 0;

        let decision = self.decide(board, to_move);
        if let Some((cell, tactic)) = decision {
            debug!(mark = %to_move, cell, ?tactic, nodes = self.nodes, "heuristic move");
        }

        SearchResult {
            best_move: decision.map(|(cell, _)| cell),
            score: decision.map(|(_, tactic)| tactic.score()).unwrap_or(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Heuristic"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.fallback.new_game();
    }
}
