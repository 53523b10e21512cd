use crate::types::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The eight winning triples: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Why a move was rejected. The board is unchanged in both cases.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {index} is outside the board")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 9 cells, found {found}")]
    WrongLength { found: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },
}

/// A 3x3 board in row-major order (`index = row * 3 + col`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Option<Mark>; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.cells
    }

    /// Mark at `index`; `None` for empty or out-of-range cells.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Places `mark` at `index`.
    ///
    /// Fails without touching the board when the index is off the grid or
    /// the cell is already marked.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::OutOfRange { index }),
            Some(Some(_)) => Err(MoveError::CellOccupied { index }),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    /// Provisionally places `mark` at `index`, runs `f`, then clears the cell
    /// again before returning `f`'s result.
    ///
    /// The move goes through the same checks as [`Board::apply_move`], so a
    /// probe can never overwrite (and later erase) an existing mark.
    pub fn probe<T>(
        &mut self,
        index: usize,
        mark: Mark,
        f: impl FnOnce(&mut Board) -> T,
    ) -> Result<T, MoveError> {
        self.apply_move(index, mark)?;
        let result = f(self);
        self.cells[index] = None;
        Ok(result)
    }

    /// The first complete triple of identical marks, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c]
        })
    }

    pub fn check_winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|[a, _, _]| self.cells[a])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Win is checked before Draw, so a full board with a triple is a Win.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.check_winner() {
            Outcome::Win(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(BOARD_CELLS);
        self.empty_cells_into(&mut out);
        out
    }

    pub fn empty_cells_into(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(|(i, _)| i),
        );
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Side to move assuming X opened; `None` if the mark counts can't come
    /// from alternating play.
    pub fn side_to_move(&self) -> Option<Mark> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts `X`/`O` in either case and `.`, `_` or `-` for empty cells.
    /// Whitespace and `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != BOARD_CELLS {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (position, &character) in symbols.iter().enumerate() {
            board.cells[position] = match character {
                '.' | '_' | '-' => None,
                c => match Mark::from_char(c) {
                    Some(mark) => Some(mark),
                    None => {
                        return Err(ParseBoardError::InvalidCell {
                            character,
                            position,
                        })
                    }
                },
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && col_of(i) == 0 {
                write!(f, "/")?;
            }
            match cell {
                Some(mark) => write!(f, "{mark}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
