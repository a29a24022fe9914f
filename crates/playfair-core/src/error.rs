//! Error types for Playfair cipher operations.

use std::fmt;
use thiserror::Error;

use crate::alphabet::MIN_KEYWORD_LEN;

/// Result type alias for Playfair operations.
pub type Result<T> = std::result::Result<T, PlayfairError>;

/// The step that was running when an error got wrapped with context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateMatrix,
    Encode,
    Decode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::CreateMatrix => write!(f, "create matrix"),
            Operation::Encode => write!(f, "encode"),
            Operation::Decode => write!(f, "decode"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    /// Represents a keyword character outside of the 25 letter alphabet, for example a digit or a space
    #[error("matrix keywords must contain lower case ASCII letters only, '{0}' is not valid")]
    InvalidKeywordCharacter(char),

    /// Represents a keyword with too few distinct letters to seed the grid
    #[error("matrix keyword must have at least {min} unique letters, found {found}")]
    KeywordTooShort { min: usize, found: usize },

    /// Represents input text without a single letter that could be paired up
    #[error("found no encodable characters in input")]
    NoEncodableCharacters,

    /// Represents any of the above, tagged with the operation it interrupted
    #[error("failed to {operation}: {source}")]
    Failed {
        operation: Operation,
        source: Box<PlayfairError>,
    },
}

impl PlayfairError {
    pub(crate) fn keyword_too_short(found: usize) -> Self {
        PlayfairError::KeywordTooShort {
            min: MIN_KEYWORD_LEN,
            found,
        }
    }

    /// Wraps the error with the operation that was running when it happened.
    pub fn context(self, operation: Operation) -> Self {
        PlayfairError::Failed {
            operation,
            source: Box::new(self),
        }
    }

    /// Strips every layer of operation context and returns the underlying error.
    pub fn root_cause(&self) -> &PlayfairError {
        let mut err = self;
        while let PlayfairError::Failed { source, .. } = err {
            err = source;
        }
        err
    }
}
