use thiserror::Error;

/// Error type for building an adjacency index from precomputed neighbor data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A word was stored under a length bucket that does not match its length.
    #[error("Word '{word}' is {actual} characters long but is stored under length {bucket}")]
    WrongBucket {
        word: String,
        bucket: usize,
        actual: usize,
    },

    /// A neighbor list entry is not exactly one character away from its word.
    #[error("'{neighbor}' is listed as a neighbor of '{word}' but they do not differ by exactly one character")]
    NotAdjacent { word: String, neighbor: String },

    /// A neighbor list refers to a word that has no entry of its own.
    #[error("'{neighbor}' is listed as a neighbor of '{word}' but is not in the vocabulary")]
    UnknownNeighbor { word: String, neighbor: String },
}
