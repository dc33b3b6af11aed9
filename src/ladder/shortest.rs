use std::fmt;

use super::error::LadderError;
use super::query::Query;
use super::tree::SearchTree;
use crate::adjacency::AdjacencyIndex;

/// Result of a shortest-ladder search.
#[derive(Clone, Debug)]
pub struct ShortestLadder {
    /// Words from start to end, inclusive.
    path: Vec<String>,
    /// Words discovered at each depth; `levels[0]` holds only the start word.
    levels: Vec<Vec<String>>,
    tree: SearchTree,
}

impl ShortestLadder {
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn into_path(self) -> Vec<String> {
        self.path
    }

    /// Number of single-letter changes in the ladder.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// Deepest level the search expanded to. Equal to `steps()`.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Number of distinct words discovered, the start word included.
    pub fn nodes_visited(&self) -> usize {
        self.tree.len()
    }

    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}

impl fmt::Display for ShortestLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" -> "))
    }
}

/// Finds one shortest ladder from the query's starting word to its ending
/// word with a breadth-first search.
///
/// Each level is expanded completely before checking whether the ending word
/// was reached. A word is fixed to the first parent that discovers it, and
/// since levels are visited in order of distance from the start, the ladder
/// read back through the parents is a shortest one.
///
/// # Errors
/// Returns `LadderError::Unsolvable` when a level discovers no new words
/// before the ending word is found.
pub fn find_shortest(index: &AdjacencyIndex, query: &Query) -> Result<ShortestLadder, LadderError> {
    let start = query.start();
    let end = query.end();
    let unsolvable = || LadderError::Unsolvable {
        start: start.to_string(),
        end: end.to_string(),
    };

    let mut tree = SearchTree::new(start);
    let mut levels: Vec<Vec<String>> = vec![vec![start.to_string()]];

    loop {
        let frontier = &levels[levels.len() - 1];
        if frontier.iter().any(|word| word == end) {
            break;
        }

        let mut next_level = Vec::new();
        for word in frontier {
            for neighbor in index.neighbors_of(word) {
                if tree.insert(word, neighbor) {
                    next_level.push(neighbor.to_string());
                }
            }
        }

        if next_level.is_empty() {
            return Err(unsolvable());
        }
        levels.push(next_level);
    }

    let path = tree.path_to(end).ok_or_else(unsolvable)?;
    Ok(ShortestLadder { path, levels, tree })
}
