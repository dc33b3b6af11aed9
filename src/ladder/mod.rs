//! Word ladder searches over an [`AdjacencyIndex`].
//!
//! [`WordLadder`] owns the index and the current validated [`Query`] and runs
//! either search against them. The free functions [`find_shortest`] and
//! [`enumerate`] can also be used directly with a borrowed index.

// enumeration engine
mod enumerate;
// error module
mod error;
// query validation
mod query;
// breadth-first engine
mod shortest;
// search tree
mod tree;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use enumerate::{enumerate, Enumeration, LadderMap};
pub use error::{LadderError, WordRole};
pub use query::{validate_end, validate_start, Query};
pub use shortest::{find_shortest, ShortestLadder};
pub use tree::SearchTree;

use crate::adjacency::AdjacencyIndex;

/// An adjacency index together with the query to run against it.
#[derive(Clone, Debug)]
pub struct WordLadder {
    index: AdjacencyIndex,
    query: Option<Query>,
}

impl WordLadder {
    pub fn new(index: AdjacencyIndex) -> Self {
        Self { index, query: None }
    }

    /// Builds a lazy index over `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AdjacencyIndex::build(words))
    }

    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Validates and stores a new (start, end) pair.
    ///
    /// Both words are checked together. On error the previous query, if any,
    /// is kept as it was.
    pub fn set_query(&mut self, start: &str, end: &str) -> Result<&Query, LadderError> {
        let query = Query::new(&self.index, start, end)?;
        Ok(self.query.insert(query))
    }

    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Runs the breadth-first search for the current query.
    ///
    /// # Errors
    /// `Precondition` if no query is set, `Unsolvable` if the ending word
    /// cannot be reached.
    pub fn find_shortest(&self) -> Result<ShortestLadder, LadderError> {
        find_shortest(&self.index, self.require_query()?)
    }

    /// Runs the distance-decreasing enumeration for the current query.
    ///
    /// # Errors
    /// `Precondition` if no query is set.
    pub fn enumerate(&self) -> Result<Enumeration, LadderError> {
        Ok(enumerate(&self.index, self.require_query()?))
    }

    fn require_query(&self) -> Result<&Query, LadderError> {
        self.query.as_ref().ok_or_else(|| {
            LadderError::Precondition(
                "Please set a starting and ending word before searching.".to_string(),
            )
        })
    }
}
