use ttt_core::{Board, Mark};

/// Which rule picked the heuristic engine's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    Win,
    Block,
    Random,
}

impl Tactic {
    /// Rough value of the move for the mover: a win scores 10, the same as
    /// a won terminal in minimax; nothing else is scored.
    pub fn score(self) -> i32 {
        match self {
            Tactic::Win => 10,
            Tactic::Block | Tactic::Random => 0,
        }
    }
}

/// First empty cell (in index order) where `mark` would complete a line.
///
/// Each candidate is probed and reverted, so `board` is unchanged on return.
pub fn find_completing_move(board: &mut Board, mark: Mark, nodes: &mut u64) -> Option<usize> {
    for cell in board.empty_cells() {
        let Ok(wins) = board.probe(cell, mark, |b| b.check_winner() == Some(mark)) else {
            continue;
        };
        *nodes += 1;
        if wins {
            return Some(cell);
        }
    }
    None
}
