//! Reading word lists and adjacency snapshots from disk, and writing
//! snapshots back out.

mod error;
mod loader;

pub use error::DictionaryError;
pub use loader::{
    load_index, load_words, parse_dictionary, read_dictionary, save_snapshot, Dictionary,
};
