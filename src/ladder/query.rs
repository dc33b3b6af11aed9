//! Validation of the (start, end) word pair.
//!
//! All checks happen when a query is constructed, never inside a search. A
//! `Query` value therefore always satisfies: both words are in the
//! vocabulary, they have the same length, and they are different.

use super::error::{LadderError, WordRole};
use crate::adjacency::AdjacencyIndex;

/// A validated pair of starting and ending words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    start: String,
    end: String,
}

impl Query {
    /// Validates both words together and builds the query.
    ///
    /// # Errors
    /// Returns the first violated precondition, checked in this order:
    /// starting word in vocabulary, equal lengths, distinct words, ending word
    /// in vocabulary.
    pub fn new(index: &AdjacencyIndex, start: &str, end: &str) -> Result<Self, LadderError> {
        validate_start(index, start)?;
        validate_end(index, Some(start), end)?;
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// Replaces the starting word, re-validating the ending word against it.
    pub fn with_start(&self, index: &AdjacencyIndex, start: &str) -> Result<Self, LadderError> {
        Self::new(index, start, &self.end)
    }

    /// Replaces the ending word.
    pub fn with_end(&self, index: &AdjacencyIndex, end: &str) -> Result<Self, LadderError> {
        Self::new(index, &self.start, end)
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Checks that a starting word is part of the vocabulary.
pub fn validate_start(index: &AdjacencyIndex, start: &str) -> Result<(), LadderError> {
    if index.contains(start) {
        Ok(())
    } else {
        Err(LadderError::InvalidWord {
            word: start.to_string(),
            role: WordRole::Start,
        })
    }
}

/// Checks an ending word against an already accepted starting word.
///
/// # Errors
/// - `Precondition` if there is no starting word yet.
/// - `LengthMismatch` if the lengths differ.
/// - `SameWord` if both words are identical.
/// - `InvalidWord` if the ending word is not in the vocabulary.
pub fn validate_end(
    index: &AdjacencyIndex,
    start: Option<&str>,
    end: &str,
) -> Result<(), LadderError> {
    let start = start.ok_or_else(|| {
        LadderError::Precondition("Please enter a starting word first.".to_string())
    })?;

    let start_len = start.chars().count();
    let end_len = end.chars().count();
    if start_len != end_len {
        return Err(LadderError::LengthMismatch {
            start: start.to_string(),
            start_len,
            end: end.to_string(),
            end_len,
        });
    }
    if start == end {
        return Err(LadderError::SameWord(end.to_string()));
    }
    if !index.contains(end) {
        return Err(LadderError::InvalidWord {
            word: end.to_string(),
            role: WordRole::End,
        });
    }
    Ok(())
}
