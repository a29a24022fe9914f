//! Splitting text into the letter pairs the cipher works on.
//!
//! Characters outside the alphabet are skipped, `j` counts as `i`. A doubled
//! letter gets an `x` inserted after its first occurrence, and the second
//! occurrence starts the next pair. A lone trailing letter is padded with `x`.

use std::fmt;
use std::str::Chars;

use crate::alphabet::{lowercase, Letter};
use crate::error::{PlayfairError, Result};

/// An ordered pair of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph(pub Letter, pub Letter);

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Iterator over the digraphs of `text`, lowercasing one char at a time.
///
/// `pending` holds a letter that was looked at but not consumed, which
/// happens after a doubled letter was split.
pub struct Digraphs<'a> {
    chars: Chars<'a>,
    pending: Option<Letter>,
}

impl<'a> Digraphs<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            pending: None,
        }
    }

    fn next_letter(&mut self) -> Option<Letter> {
        self.chars
            .by_ref()
            .find_map(|c| Letter::from_char(lowercase(c)))
    }
}

impl Iterator for Digraphs<'_> {
    type Item = Digraph;

    fn next(&mut self) -> Option<Self::Item> {
        let a = match self.pending.take() {
            Some(letter) => letter,
            None => self.next_letter()?,
        };

        match self.next_letter() {
            None => Some(Digraph(a, Letter::PADDING)),
            Some(b) if a == b => {
                self.pending = Some(b);
                Some(Digraph(a, Letter::PADDING))
            }
            Some(b) => Some(Digraph(a, b)),
        }
    }
}

/// Lowercases `text` and cuts it into digraphs.
///
/// Fails with [`PlayfairError::NoEncodableCharacters`] if not a single
/// alphabet letter was found.
pub fn segment(text: &str) -> Result<Vec<Digraph>> {
    let digraphs: Vec<Digraph> = Digraphs::new(text).collect();

    if digraphs.is_empty() {
        return Err(PlayfairError::NoEncodableCharacters);
    }

    Ok(digraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<String> {
        segment(text)
            .expect("text has encodable characters")
            .iter()
            .map(Digraph::to_string)
            .collect()
    }

    #[test]
    fn should_pair_up_letters_and_skip_everything_else() {
        assert_eq!(
            pairs("Hide the gold in the tree stump"),
            ["hi", "de", "th", "eg", "ol", "di", "nt", "he", "tr", "ex", "es", "tu", "mp"]
        );
    }

    #[test]
    fn should_pad_a_trailing_single_letter() {
        assert_eq!(pairs("instruments"), ["in", "st", "ru", "me", "nt", "sx"]);
        assert_eq!(pairs("a"), ["ax"]);
        assert_eq!(pairs("a!?"), ["ax"]);
    }

    #[test]
    fn should_split_doubled_letters_without_consuming_the_second() {
        assert_eq!(pairs("balloon"), ["ba", "lx", "lo", "on"]);
        assert_eq!(pairs("aaa"), ["ax", "ax", "ax"]);
        assert_eq!(pairs("l l"), ["lx", "lx"]);
    }

    #[test]
    fn should_split_doubled_letters_only_inside_a_pair() {
        // "ab" + "ba" share a 'b' across pairs, which is fine
        assert_eq!(pairs("abba"), ["ab", "ba"]);
    }

    #[test]
    fn should_treat_j_as_i() {
        assert_eq!(pairs("ji"), ["ix", "ix"]);
        assert_eq!(pairs("Jazz"), ["ia", "zx", "zx"]);
    }

    #[test]
    fn should_pad_x_with_x() {
        assert_eq!(pairs("x"), ["xx"]);
        assert_eq!(pairs("xx"), ["xx", "xx"]);
    }

    #[test]
    fn should_skip_multi_byte_characters_whole() {
        assert_eq!(pairs("añb€c"), ["ab", "cx"]);
        assert_eq!(pairs("日本語ab"), ["ab"]);
    }

    #[test]
    fn should_lowercase_dotted_capital_i_to_a_plain_i() {
        assert_eq!(pairs("İK"), ["ik"]);
        assert_eq!(pairs("İi"), ["ix", "ix"]);
    }

    #[test]
    fn should_be_stable_on_normalized_pairs() {
        let once: String = pairs("Hide the gold in the tree stump").concat();
        let twice: String = pairs(&once).concat();
        assert_eq!(once, twice);
    }

    #[test]
    fn should_fail_without_any_letter() {
        for text in ["", " ", "\n", "1234 !?", "ñ€日"] {
            assert_eq!(
                segment(text),
                Err(PlayfairError::NoEncodableCharacters),
                "{:?}",
                text
            );
        }
    }
}
