// distance module
pub mod distance;
// error module
mod error;
// index module
mod index;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use distance::{differs_by_one, hamming_distance};
pub use error::IndexError;
pub use index::{AdjacencyIndex, AdjacencyMap};
