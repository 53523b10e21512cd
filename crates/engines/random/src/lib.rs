//! Random Move Engine
//!
//! Picks uniformly among the empty cells. Used as the "easy" opponent and as
//! the fallback for the heuristic engine when no tactical move applies.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use ttt_core::{Board, Mark, SearchResult, Strategy};


/// An opponent that plays a uniformly random empty cell.
///
/// Each instance owns its generator, so two strategies never share random
/// state and a seeded instance replays the same choices.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
    nodes: u64,
}

impl RandomStrategy<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic instance for tests and reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Uniform pick among the empty cells, scanned in index order.
    pub fn pick(&mut self, board: &Board) -> Option<usize> {
        let moves = board.empty_cells();
        self.nodes = moves.len() as u64;
        moves.choose(&mut self.rng).copied()
    }
}

impl<R: Rng + Send> Strategy for RandomStrategy<R> {
    fn search(&mut self, board: &Board, to_move: Mark) -> SearchResult {
        self.nodes = 0;

        let best_move = self.pick(board);
        debug!(mark = %to_move, cell = ?best_move, "random move");

        SearchResult {
            best_move,
            score: 0,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
