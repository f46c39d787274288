//! Board and cell types: construction, text parsing, and rendering.
//!
//! A [`Board`] is a rectangular grid of [`CellState`] rows. It is plain data:
//! construction and serialization live here, the generation rule lives in
//! [`crate::stepper`]. Boards serialize to `{"states": [[bool, ...], ...]}`
//! (`true` = alive) for the HTTP API, and to rows of `'x'`/`'-'` for text
//! fixtures and display.
//!
//! Dimensions are fixed at construction. Height is the row count; width is
//! the length of the first row (0 for an empty board). The parser accepts
//! ragged lines — pairwise rectangularity is the fixture loader's job, via
//! [`Board::dimensions_equal`].

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

const ALIVE_CHAR: char = 'x';
const DEAD_CHAR: char = '-';

/// State of one grid cell. Crosses the wire as a JSON boolean.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "bool", into = "bool")]
pub enum CellState {
    Alive,
    Dead,
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(cell: CellState) -> Self {
        cell == CellState::Alive
    }
}

/// A grid of cells at one point in time.
///
/// The one wire field is `states`: ordered rows, each an ordered row of
/// cells. Row `i`, column `j` of the grid is `states[i][j]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub states: Vec<Vec<CellState>>,
}

impl Board {
    /// A `size`×`size` board with every cell dead. `size == 0` gives a board
    /// with zero rows.
    pub fn empty_square(size: usize) -> Board {
        Self::square_with(size, || CellState::Dead)
    }

    /// A `size`×`size` board with each cell independently uniform alive/dead.
    pub fn random_square(size: usize) -> Board {
        let mut rng = rand::thread_rng();
        Self::square_with(size, || CellState::from(rng.gen_bool(0.5)))
    }

    fn square_with(size: usize, mut choose: impl FnMut() -> CellState) -> Board {
        let states = (0..size)
            .map(|_| (0..size).map(|_| choose()).collect())
            .collect();
        Board { states }
    }

    /// Parse a board from text lines: `'x'` is alive, `'-'` is dead, line `i`
    /// character `j` becomes cell `(i, j)`. Any other character fails with
    /// [`FormatError::BadCharacter`] naming its position.
    pub fn from_text<S: AsRef<str>>(lines: &[S]) -> Result<Board, FormatError> {
        let mut states = Vec::with_capacity(lines.len());
        for (line_no, line) in lines.iter().enumerate() {
            let mut row = Vec::new();
            for (col, ch) in line.as_ref().chars().enumerate() {
                row.push(match ch {
                    ALIVE_CHAR => CellState::Alive,
                    DEAD_CHAR => CellState::Dead,
                    _ => {
                        return Err(FormatError::BadCharacter {
                            ch,
                            line: line_no,
                            col,
                        })
                    }
                });
            }
            states.push(row);
        }
        Ok(Board { states })
    }

    /// True iff every row has the same length as row 0. Construction and
    /// text parsing keep no such promise (the parser accepts ragged lines),
    /// and neither does JSON deserialization, so boundaries that go on to
    /// index by `dimensions()` must check this first.
    pub fn is_rectangular(&self) -> bool {
        let (_, width) = self.dimensions();
        self.states.iter().all(|row| row.len() == width)
    }

    /// (height, width). Width is 0 when there are no rows.
    pub fn dimensions(&self) -> (usize, usize) {
        let height = self.states.len();
        let width = if height > 0 { self.states[0].len() } else { 0 };
        (height, width)
    }

    /// True iff both height and width match.
    pub fn dimensions_equal(&self, other: &Board) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Render each row as a string of `'x'`/`'-'`, one entry per row.
    pub fn to_text(&self) -> Vec<String> {
        self.states
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| match cell {
                        CellState::Alive => ALIVE_CHAR,
                        CellState::Dead => DEAD_CHAR,
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text().join("\n"))
    }
}
