//! Minimax Engine
//!
//! Full-depth minimax over the remaining game tree. The 3x3 tree has fewer
//! than 9! leaves, so no pruning or transposition table is used.

mod eval;
mod search;

use tracing::debug;
use ttt_core::{Board, Mark, SearchResult, Strategy};

/// Perfect-play engine.
///
/// Deterministic: the same board and mark always give the same cell, with
/// ties broken toward the lowest index.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Strategy for MinimaxStrategy {
    fn search(&mut self, board: &Board, to_move: Mark) -> SearchResult {
        self.nodes = 0;

        let best = search::pick_best_move(board, to_move, &mut self.nodes);
        debug!(mark = %to_move, best = ?best, nodes = self.nodes, "minimax move");

        SearchResult {
            best_move: best.map(|(cell, _)| cell),
            score: best.map(|(_, score)| score).unwrap_or(0),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, DRAW_SCORE, WIN_SCORE};
pub use search::pick_best_move;
