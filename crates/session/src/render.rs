//! Plain-text board rendering for the terminal

use ttt_core::{col_of, Board, BOARD_CELLS, BOARD_SIDE};

/// Draws the grid; empty cells show their index so they can be typed back.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for index in 0..BOARD_CELLS {
        let symbol = match board.get(index) {
            Some(mark) => mark.to_char(),
            None => char::from(b'0' + index as u8),
        };
        out.push(' ');
        out.push(symbol);
        out.push(' ');

        if col_of(index) + 1 < BOARD_SIDE {
            out.push('|');
        } else {
            out.push('\n');
            if index + 1 < BOARD_CELLS {
                out.push_str("---+---+---\n");
            }
        }
    }
    out
}
