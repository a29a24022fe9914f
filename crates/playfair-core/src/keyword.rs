use std::fmt;
use std::str::FromStr;

use crate::alphabet::{lowercase, Letter, ALPHABET_LEN, MIN_KEYWORD_LEN};
use crate::error::{PlayfairError, Result};

/// A validated keyword: lower case, `j` folded into `i`, at least
/// [`MIN_KEYWORD_LEN`] distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    text: String,
    distinct: Vec<Letter>,
}

impl Keyword {
    pub fn parse(keyword: &str) -> Result<Self> {
        let mut text = String::with_capacity(keyword.len());
        let mut seen = [false; ALPHABET_LEN];
        let mut distinct = Vec::with_capacity(ALPHABET_LEN);

        for c in keyword.chars().map(lowercase) {
            let letter = Letter::from_char(c).ok_or(PlayfairError::InvalidKeywordCharacter(c))?;
            text.push(letter.as_char());

            if !seen[letter.index()] {
                seen[letter.index()] = true;
                distinct.push(letter);
            }
        }

        if distinct.len() < MIN_KEYWORD_LEN {
            return Err(PlayfairError::keyword_too_short(distinct.len()));
        }

        Ok(Self { text, distinct })
    }

    /// The normalized keyword text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Distinct letters in first occurrence order.
    pub fn letters(&self) -> &[Letter] {
        &self.distinct
    }
}

impl FromStr for Keyword {
    type Err = PlayfairError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
