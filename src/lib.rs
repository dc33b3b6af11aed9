//! Word ladders: chains of equal-length dictionary words where each word
//! differs from the next in exactly one letter.
//!
//! - [`adjacency`] groups a vocabulary by length and answers neighbor lookups.
//! - [`ladder`] validates (start, end) queries and runs the breadth-first
//!   shortest-ladder search and the distance-decreasing enumeration.
//! - [`dictionary`] loads word lists and adjacency snapshots from disk.
//! - [`app`] is the command-line front end.

pub mod adjacency;
pub mod app;
pub mod dictionary;
pub mod ladder;
