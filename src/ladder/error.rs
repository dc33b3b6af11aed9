use std::fmt;
use thiserror::Error;

/// Which side of a query a word was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    Start,
    End,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordRole::Start => write!(f, "starting"),
            WordRole::End => write!(f, "ending"),
        }
    }
}

// Error type for query validation and ladder searches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The word is not part of the vocabulary.
    #[error("Please enter a valid {role} word, '{word}' is not in the word list.")]
    InvalidWord { word: String, role: WordRole },

    /// An operation was attempted before the state it depends on was set up.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// The ending word does not have the starting word's length.
    #[error("Please enter an ending word with the same length as the starting word. Starting word '{start}' is {start_len} characters long, '{end}' is {end_len}.")]
    LengthMismatch {
        start: String,
        start_len: usize,
        end: String,
        end_len: usize,
    },

    /// The ending word is the starting word.
    #[error("Ending word cannot be the same as starting word ('{0}').")]
    SameWord(String),

    /// Every reachable word was visited without meeting the ending word.
    #[error("No word ladder connects '{start}' to '{end}' with this word list.")]
    Unsolvable { start: String, end: String },
}
