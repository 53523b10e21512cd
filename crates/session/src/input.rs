//! Parsing of lines typed during interactive play

use ttt_core::cell_index;

use crate::difficulty::Difficulty;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A cell index, not yet checked against the board
    Cell(usize),
    NewRound,
    SetDifficulty(Difficulty),
    Help,
    Quit,
    Unknown(String),
}

/// Accepts `4` (cell index), `1 2` (row and column, zero-based), `n`/`new`,
/// `d <label>`/`difficulty <label>` (label in any case), `h`/`help`/`?` and `q`/`quit`.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => Input::Unknown(String::new()),
        ["n" | "new"] => Input::NewRound,
        ["q" | "quit" | "exit"] => Input::Quit,
        ["h" | "help" | "?"] => Input::Help,
        ["d" | "difficulty", label] => {
            Input::SetDifficulty(Difficulty::from_label(&label.to_ascii_lowercase()))
        }
        [index] => match index.parse::<usize>() {
            Ok(index) => Input::Cell(index),
            Err(_) => Input::Unknown(line.to_string()),
        },
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => match cell_index(row, col) {
                Some(index) => Input::Cell(index),
                None => Input::Unknown(line.to_string()),
            },
            _ => Input::Unknown(line.to_string()),
        },
        _ => Input::Unknown(line.to_string()),
    }
}
