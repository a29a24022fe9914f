use std::fmt;
use std::str::FromStr;

use crate::digraph::{segment, Digraph};
use crate::error::{PlayfairError, Result};
use crate::grid::{Grid, Position};
use crate::keyword::Keyword;

/// Which way letters travel along a shared row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A keyword together with the grid built from it.
///
/// Immutable once constructed, so a single instance can serve any number of
/// encode and decode calls, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    keyword: Keyword,
    grid: Grid,
}

impl Cipher {
    /// Validates the keyword and builds the grid for it.
    pub fn new(keyword: &str) -> Result<Self> {
        let keyword = Keyword::parse(keyword)?;
        Ok(Self::with_keyword(keyword))
    }

    pub fn with_keyword(keyword: Keyword) -> Self {
        let grid = Grid::new(&keyword);
        Self { keyword, grid }
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid as five lines of space separated letters.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }

    /// Translates plain text into cipher text.
    pub fn encode(&self, plain_text: &str) -> Result<String> {
        self.transform(plain_text, Direction::Forward)
    }

    /// Translates cipher text back into plain text.
    ///
    /// The input goes through the same pairing rules as [`Cipher::encode`],
    /// so doubled letters in foreign cipher text get an `x` inserted too.
    pub fn decode(&self, cipher_text: &str) -> Result<String> {
        self.transform(cipher_text, Direction::Backward)
    }

    fn transform(&self, text: &str, direction: Direction) -> Result<String> {
        let digraphs = segment(text)?;
        log::debug!("{:?} {} digraphs", direction, digraphs.len());

        let mut result = String::with_capacity(digraphs.len() * 2);
        for digraph in digraphs {
            let mapped = self.map_pair(digraph, direction);
            log::trace!("{} -> {}", digraph, mapped);
            result.push(mapped.0.as_char());
            result.push(mapped.1.as_char());
        }

        Ok(result)
    }

    fn map_pair(&self, Digraph(a, b): Digraph, direction: Direction) -> Digraph {
        let pos_a = self.grid.position_of(a);
        let pos_b = self.grid.position_of(b);

        let (new_a, new_b) = if pos_a.col == pos_b.col {
            match direction {
                Direction::Forward => (pos_a.next_row(), pos_b.next_row()),
                Direction::Backward => (pos_a.previous_row(), pos_b.previous_row()),
            }
        } else if pos_a.row == pos_b.row {
            match direction {
                Direction::Forward => (pos_a.next_col(), pos_b.next_col()),
                Direction::Backward => (pos_a.previous_col(), pos_b.previous_col()),
            }
        } else {
            // opposite corners of the rectangle, same either way
            (
                Position::new(pos_a.row, pos_b.col),
                Position::new(pos_b.row, pos_a.col),
            )
        };

        Digraph(self.grid.letter_at(new_a), self.grid.letter_at(new_b))
    }
}

impl FromStr for Cipher {
    type Err = PlayfairError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
