pub mod board;
pub mod types;

pub use board::*;
pub use types::*;

// =============================================================================
// Strategy trait: implemented by every opponent (random, heuristic, minimax)
// =============================================================================

/// Result of a move search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen cell (None if the board has no empty cell)
    pub best_move: Option<usize>,
    /// Evaluation of the chosen move from the mover's perspective
    pub score: i32,
    /// Number of provisional positions examined
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a board with nowhere left to play.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }
}

/// Trait that all opponents implement.
///
/// A strategy only reads the board it is given. Any provisional marks it
/// places while evaluating go on its own copy and are reverted with
/// [`Board::probe`], so the caller's board is the same before and after.
pub trait Strategy: Send {
    /// Pick a move for `to_move`.
    ///
    /// Returns `best_move: None` when the board is full; otherwise the
    /// returned cell is always empty on `board`.
    fn search(&mut self, board: &Board, to_move: Mark) -> SearchResult;

    /// Convenience wrapper returning only the chosen cell.
    fn choose_move(&mut self, board: &Board, to_move: Mark) -> Option<usize> {
        self.search(board, to_move).best_move
    }

    /// Display name, also used in logs and match reports
    fn name(&self) -> &str;

    /// Reset per-game state (node counters and the like)
    fn new_game(&mut self) {}
}
