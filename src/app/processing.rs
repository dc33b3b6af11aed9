//! The individual stages of a run: loading the dictionary, writing the
//! snapshot, and running one of the two searches.
//!
//! Each stage logs its progress through the verbose macros and returns the
//! text the orchestrator prints once everything succeeded.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::adjacency::AdjacencyIndex;
use crate::dictionary;
use crate::ladder::{Enumeration, SearchTree, ShortestLadder, WordLadder};
use std::path::Path;

/// What a search produced: the text for stdout and the tree it grew.
#[derive(Debug)]
pub struct SearchReport {
    pub summary: String,
    pub tree: SearchTree,
}

/// Loads the dictionary and builds its adjacency index.
///
/// # Arguments
/// * `dictionary_path` - Word list or snapshot to load.
/// * `eager` - Precompute neighbor lists when the file is a word list.
/// * `quiet_mode` - Suppresses verbose logging if true.
pub fn load_index(
    dictionary_path: &Path,
    eager: bool,
    quiet_mode: bool,
) -> Result<AdjacencyIndex, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading dictionary...");
    let index = dictionary::load_index(dictionary_path, eager).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        AppError::from(e)
    })?;

    verbose_println!(
        quiet_mode,
        "   => {} word(s) across lengths {:?}{}.",
        index.len(),
        index.lengths(),
        if index.is_precomputed() {
            ", neighbors precomputed"
        } else {
            ""
        }
    );
    Ok(index)
}

/// Writes the adjacency snapshot of `index` to `snapshot_path`.
pub fn write_snapshot(
    snapshot_path: &Path,
    index: &AdjacencyIndex,
    quiet_mode: bool,
) -> Result<(), AppError> {
    verbose_println!(
        quiet_mode,
        "   => Writing adjacency snapshot to {}...",
        snapshot_path.display()
    );
    dictionary::save_snapshot(snapshot_path, index)?;
    Ok(())
}

/// Runs the breadth-first search and logs every level it expanded.
pub fn run_shortest(word_ladder: &WordLadder, quiet_mode: bool) -> Result<SearchReport, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 3] Searching for the shortest ladder...");
    let ladder = word_ladder.find_shortest().map_err(|e| {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        AppError::from(e)
    })?;

    for (depth, level) in ladder.levels().iter().enumerate() {
        verbose_println!(quiet_mode, "Depth:{}, Nodes:{:?}", depth, level);
    }
    verbose_println!(quiet_mode, "\nSolution ladder: {}", ladder);
    verbose_println!(quiet_mode, "Steps required: {}", ladder.steps());
    verbose_println!(quiet_mode, "Nodes visited: {}", ladder.nodes_visited());

    Ok(SearchReport {
        summary: summarize_shortest(&ladder, quiet_mode),
        tree: ladder.tree().clone(),
    })
}

/// Runs the distance-decreasing enumeration and logs the resulting map.
pub fn run_enumeration(
    word_ladder: &WordLadder,
    quiet_mode: bool,
) -> Result<SearchReport, AppError> {
    verbose_println!(
        quiet_mode,
        "\n[STEP 3] Enumerating branches that get closer at every step..."
    );
    let enumeration = word_ladder.enumerate()?;

    verbose_println!(
        quiet_mode,
        "   => {} word(s) expanded.",
        enumeration.ladder_map().len()
    );
    for (word, successors) in enumeration.ladder_map().iter() {
        verbose_println!(quiet_mode, "{}: {:?}", word, successors);
    }
    verbose_println!(quiet_mode, "\nSearch tree:\n{}", enumeration.tree());

    Ok(SearchReport {
        summary: summarize_enumeration(&enumeration, end_word(word_ladder)),
        tree: enumeration.tree().clone(),
    })
}

fn end_word(word_ladder: &WordLadder) -> &str {
    word_ladder.query().map(|query| query.end()).unwrap_or_default()
}

fn summarize_shortest(ladder: &ShortestLadder, quiet_mode: bool) -> String {
    if quiet_mode {
        return ladder.to_string();
    }
    format!(
        "Solution ladder: {}\nSteps required: {}\nNodes visited: {}",
        ladder,
        ladder.steps(),
        ladder.nodes_visited()
    )
}

fn summarize_enumeration(enumeration: &Enumeration, end: &str) -> String {
    let mut summary = enumeration.ladder_map().to_string();
    let ladders = enumeration.ladders();
    if ladders.is_empty() {
        summary.push_str(&format!("No branch reaches '{}'.", end));
    }
    let lines: Vec<String> = ladders
        .iter()
        .map(|path| format!("Ladder: {}", path.join(" -> ")))
        .collect();
    summary.push_str(&lines.join("\n"));
    summary
}
