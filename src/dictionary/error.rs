use thiserror::Error;

use crate::adjacency::IndexError;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for dictionary loading and snapshot operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when reading a file.
    #[error("Failed to read dictionary '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when writing a snapshot.
    #[error("Failed to write snapshot '{0}': {1}")]
    WriteFile(String, std::io::Error),

    /// Error when the JSON content does not have a supported shape.
    #[error("Failed to parse dictionary '{0}': {1}")]
    ParseJson(String, serde_json::Error),

    /// Error when a snapshot cannot be encoded as JSON.
    #[error("Failed to encode snapshot '{0}': {1}")]
    Serialize(String, serde_json::Error),

    /// Error when a snapshot bucket key is not a word length.
    #[error("Invalid word length key '{key}' in snapshot '{path}'")]
    InvalidLengthKey { path: String, key: String },

    /// Error when the precomputed adjacency is inconsistent.
    #[error("Invalid adjacency in '{0}': {1}")]
    Adjacency(String, IndexError),

    /// Error when the dictionary holds no words.
    #[error("No words found in dictionary '{0}'")]
    Empty(String),
}
