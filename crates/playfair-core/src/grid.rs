//! The 5x5 letter grid and its coordinate index.

use std::fmt;

use crate::alphabet::{Letter, ALPHABET_LEN, GRID_SIZE};
use crate::keyword::Keyword;

/// A cell coordinate, `row` and `col` both in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn from_cell(cell: usize) -> Self {
        Self::new(cell / GRID_SIZE, cell % GRID_SIZE)
    }

    pub(crate) fn next_row(self) -> Self {
        Self::new(step_forward(self.row), self.col)
    }

    pub(crate) fn previous_row(self) -> Self {
        Self::new(step_backward(self.row), self.col)
    }

    pub(crate) fn next_col(self) -> Self {
        Self::new(self.row, step_forward(self.col))
    }

    pub(crate) fn previous_col(self) -> Self {
        Self::new(self.row, step_backward(self.col))
    }
}

fn step_forward(i: usize) -> usize {
    (i + 1) % GRID_SIZE
}

fn step_backward(i: usize) -> usize {
    (i + GRID_SIZE - 1) % GRID_SIZE
}

/// Every alphabet letter exactly once, plus the inverse lookup from letter to cell.
///
/// `index[letter.index()]` always points at the cell holding `letter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Letter; GRID_SIZE]; GRID_SIZE],
    index: [Position; ALPHABET_LEN],
}

impl Grid {
    /// Lays out the keyword letters row by row from the top left corner,
    /// followed by the rest of the alphabet in alphabet order.
    pub fn new(keyword: &Keyword) -> Self {
        let mut placed = [false; ALPHABET_LEN];
        for letter in keyword.letters() {
            placed[letter.index()] = true;
        }
        let remaining = Letter::all().filter(|l| !placed[l.index()]);

        let mut cells = [[Letter::PADDING; GRID_SIZE]; GRID_SIZE];
        let mut index = [Position::new(0, 0); ALPHABET_LEN];
        for (cell, letter) in keyword
            .letters()
            .iter()
            .copied()
            .chain(remaining)
            .enumerate()
        {
            let pos = Position::from_cell(cell);
            cells[pos.row][pos.col] = letter;
            index[letter.index()] = pos;
        }

        log::debug!("built grid for keyword '{}'", keyword);
        Self { cells, index }
    }

    pub fn letter_at(&self, pos: Position) -> Letter {
        self.cells[pos.row][pos.col]
    }

    pub fn position_of(&self, letter: Letter) -> Position {
        self.index[letter.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Letter; GRID_SIZE]> {
        self.cells.iter()
    }
}

/// Five lines, every letter followed by a single space.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for letter in row {
                write!(f, "{} ", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
