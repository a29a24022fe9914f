//! The 25 letter alphabet the grid is made of.
//!
//! `i` and `j` share one cell, so `j` never appears as a [`Letter`] and is
//! folded into `i` wherever text gets parsed.

use std::fmt;

/// All letters of the grid alphabet in alphabet order.
pub const ALPHABET: &str = "abcdefghiklmnopqrstuvwxyz";
/// Number of letters in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 25;
/// Rows and columns of the grid.
pub const GRID_SIZE: usize = 5;
/// Minimum number of distinct letters a keyword must provide.
pub const MIN_KEYWORD_LEN: usize = 6;

const LETTERS: [u8; ALPHABET_LEN] = *b"abcdefghiklmnopqrstuvwxyz";

/// Lowercases a single character, keeping only the first char of multi char
/// mappings (`'İ'` becomes `'i'`, not `"i\u{307}"`).
pub fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// One symbol of the alphabet, stored as its position inside [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Inserted between doubled letters and appended to odd length input.
    pub const PADDING: Letter = Letter(22);

    /// Maps a lower case character onto the alphabet, folding `j` into `i`.
    ///
    /// Upper case letters are not accepted, callers lowercase first.
    pub fn from_char(c: char) -> Option<Letter> {
        let c = if c == 'j' { 'i' } else { c };
        if !c.is_ascii_lowercase() {
            return None;
        }

        let offset = c as u8 - b'a';
        // everything after 'j' sits one slot lower
        let index = if c > 'j' { offset - 1 } else { offset };
        Some(Letter(index))
    }

    /// Position of the letter inside [`ALPHABET`].
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        LETTERS[self.index()] as char
    }

    /// Iterates the whole alphabet in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
