//! Exhaustive minimax without pruning

use ttt_core::{Board, Mark};

use crate::eval::evaluate;

/// Starting value for maximizing nodes; below every reachable score.
const SCORE_FLOOR: i32 = -1000;
/// Starting value for minimizing nodes; above every reachable score.
const SCORE_CEIL: i32 = 1000;

/// Searches every continuation and returns the best cell with its score.
///
/// # Arguments
/// * `board` - The position to search (left untouched)
/// * `searcher` - The mark to move and to maximize for
/// * `nodes` - Counter for probed positions (for statistics)
///
/// # Returns
/// `None` when the board has no empty cell. Ties keep the lowest index.
pub fn pick_best_move(board: &Board, searcher: Mark, nodes: &mut u64) -> Option<(usize, i32)> {
    let mut tmp = *board;
    let moves = tmp.empty_cells();

    let mut best = None;
    let mut best_score = SCORE_FLOOR;

    for cell in moves {
        let Ok(score) = tmp.probe(cell, searcher, |b| {
            *nodes += 1;
            minimax(b, false, searcher, nodes)
        }) else {
            continue;
        };

        if score > best_score {
            best_score = score;
            best = Some((cell, score));
        }
    }

    best
}

/// Recursive minimax.
///
/// `maximizing` is true when `searcher` is the side to move. Every
/// continuation is probed and reverted before the next one is tried.
fn minimax(board: &mut Board, maximizing: bool, searcher: Mark, nodes: &mut u64) -> i32 {
    if let Some(score) = evaluate(board, searcher) {
        return score;
    }

    let (mover, mut best) = if maximizing {
        (searcher, SCORE_FLOOR)
    } else {
        (searcher.other(), SCORE_CEIL)
    };

    for cell in board.empty_cells() {
        let Ok(score) = board.probe(cell, mover, |b| {
            *nodes += 1;
            minimax(b, !maximizing, searcher, nodes)
        }) else {
            continue;
        };

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
