//! Enumeration of every distance-decreasing ladder branch.
//!
//! From each word, only neighbors strictly closer (in Hamming distance) to the
//! ending word are followed. The walk is depth-first: a successor is explored
//! completely before the next neighbor of its parent is looked at. Every
//! closer neighbor is listed as a successor, but a word is expanded only once,
//! under the first branch that reaches it; later branches just link to it.
//! This gives no shortest-path guarantee, every step simply gets closer to the
//! target.
//!
//! The traversal keeps an explicit stack of frames instead of recursing. Its
//! depth never exceeds the starting word's distance to the ending word,
//! because that distance drops by at least one per step.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::query::Query;
use super::tree::SearchTree;
use crate::adjacency::{hamming_distance, AdjacencyIndex};

/// Successor lists of every expanded word, in the order words were expanded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LadderMap {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl LadderMap {
    /// Adds an empty entry for `word` if it has none yet.
    fn open(&mut self, word: &str) {
        if self.positions.contains_key(word) {
            return;
        }
        self.positions.insert(word.to_string(), self.entries.len());
        self.entries.push((word.to_string(), Vec::new()));
    }

    fn push_successor(&mut self, word: &str, successor: &str) {
        self.open(word);
        if let Some(&position) = self.positions.get(word) {
            self.entries[position].1.push(successor.to_string());
        }
    }

    /// Successors recorded for `word`, `None` if it was never expanded.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.positions
            .get(word)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, successors)| (word.as_str(), successors.as_slice()))
    }

    pub fn to_btree_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries.iter().cloned().collect()
    }
}

impl fmt::Display for LadderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, successors) in self.iter() {
            writeln!(f, "{}: [{}]", word, successors.join(", "))?;
        }
        Ok(())
    }
}

/// Result of an enumeration run.
#[derive(Clone, Debug)]
pub struct Enumeration {
    end: String,
    ladder_map: LadderMap,
    tree: SearchTree,
}

impl Enumeration {
    pub fn ladder_map(&self) -> &LadderMap {
        &self.ladder_map
    }

    pub fn into_ladder_map(self) -> LadderMap {
        self.ladder_map
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Whether any branch arrived at the ending word.
    pub fn reached_end(&self) -> bool {
        self.tree.contains(&self.end)
    }

    /// The branch the search tree holds for the ending word, if one got there.
    pub fn ladder(&self) -> Option<Vec<String>> {
        self.tree.path_to(&self.end)
    }

    /// Every start-to-end ladder contained in the ladder map, in successor
    /// order.
    ///
    /// The map has no cycles since each step lowers the distance to the
    /// ending word.
    pub fn ladders(&self) -> Vec<Vec<String>> {
        let mut ladders = Vec::new();
        let mut stack: Vec<Vec<&str>> = vec![vec![self.tree.root()]];
        while let Some(path) = stack.pop() {
            let Some(&last) = path.last() else {
                continue;
            };
            if last == self.end {
                ladders.push(path.iter().map(|word| word.to_string()).collect());
                continue;
            }
            let successors = self.ladder_map.get(last).unwrap_or_default();
            // Reverse so the first successor's ladders come out first.
            for successor in successors.iter().rev() {
                let mut next = path.clone();
                next.push(successor.as_str());
                stack.push(next);
            }
        }
        ladders
    }
}

/// A word being expanded and how far through its neighbors the walk is.
struct Frame<'a> {
    word: &'a str,
    distance: usize,
    neighbors: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Frame<'a> {
    fn new(index: &'a AdjacencyIndex, word: &'a str, end: &str) -> Self {
        Self {
            word,
            distance: hamming_distance(word, end),
            neighbors: index.neighbors_of(word),
            cursor: 0,
        }
    }
}

/// Explores every branch from the starting word along which each step moves
/// strictly closer to the ending word.
///
/// Never fails: an unreachable ending word leaves dead-end entries (empty
/// successor lists) in the ladder map, and `Enumeration::reached_end` reports
/// `false`.
pub fn enumerate(index: &AdjacencyIndex, query: &Query) -> Enumeration {
    let start = query.start();
    let end = query.end();

    let mut tree = SearchTree::new(start);
    let mut ladder_map = LadderMap::default();
    ladder_map.open(start);

    let mut stack = vec![Frame::new(index, start, end)];
    while let Some(frame) = stack.last_mut() {
        let Some(&neighbor) = frame.neighbors.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;
        let word = frame.word;

        if hamming_distance(neighbor, end) >= frame.distance {
            continue;
        }
        ladder_map.push_successor(word, neighbor);

        // Already owned (and expanded) by an earlier branch.
        if !tree.insert(word, neighbor) {
            continue;
        }
        if neighbor != end {
            ladder_map.open(neighbor);
            stack.push(Frame::new(index, neighbor, end));
        }
    }

    Enumeration {
        end: end.to_string(),
        ladder_map,
        tree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step() {
        let index = AdjacencyIndex::build(["task", "talk"]);
        let query = Query::new(&index, "task", "talk").unwrap();
        let result = enumerate(&index, &query);
        assert_eq!(result.ladder_map().len(), 1);
        assert_eq!(result.ladder_map().get("task").unwrap(), ["talk"]);
        assert!(!result.ladder_map().contains("talk"));
        assert!(result.reached_end());
        assert_eq!(result.ladder().unwrap(), vec!["task", "talk"]);
    }

    #[test]
    fn test_only_closer_neighbors_are_followed() {
        // "tack" is a neighbor of "task" but no closer to "talk".
        let index = AdjacencyIndex::build(["task", "tack", "talk"]);
        let query = Query::new(&index, "task", "talk").unwrap();
        let result = enumerate(&index, &query);
        assert_eq!(result.ladder_map().get("task").unwrap(), ["talk"]);
        assert!(!result.tree().contains("tack"));
    }

    #[test]
    fn test_unreachable_end_leaves_dead_end() {
        let index = AdjacencyIndex::build(["boot", "cold", "bolt"]);
        let query = Query::new(&index, "boot", "cold").unwrap();
        let result = enumerate(&index, &query);
        // bolt is closer to cold (2 < 3) but has nowhere closer to go.
        assert_eq!(result.ladder_map().get("boot").unwrap(), ["bolt"]);
        assert!(result.ladder_map().get("bolt").unwrap().is_empty());
        assert!(!result.reached_end());
        assert_eq!(result.ladder(), None);
        assert!(result.ladders().is_empty());
    }

    #[test]
    fn test_converging_branches_share_a_word() {
        // ab -> cb -> cd and ab -> ad -> cd both close in on cd.
        let index = AdjacencyIndex::build(["ab", "cb", "ad", "cd"]);
        let query = Query::new(&index, "ab", "cd").unwrap();
        let result = enumerate(&index, &query);
        let map = result.ladder_map();
        assert_eq!(map.get("ab").unwrap(), ["cb", "ad"]);
        assert_eq!(map.get("cb").unwrap(), ["cd"]);
        assert_eq!(map.get("ad").unwrap(), ["cd"]);

        // The tree keeps the first parent.
        assert_eq!(result.tree().parent_of("cd"), Some("cb"));
        assert_eq!(result.tree().len(), 4);
        assert_eq!(result.ladder().unwrap(), vec!["ab", "cb", "cd"]);
        assert_eq!(
            result.ladders(),
            vec![vec!["ab", "cb", "cd"], vec!["ab", "ad", "cd"]]
        );
    }

    #[test]
    fn test_display() {
        let index = AdjacencyIndex::build(["task", "talk"]);
        let query = Query::new(&index, "task", "talk").unwrap();
        let result = enumerate(&index, &query);
        assert_eq!(result.ladder_map().to_string(), "task: [talk]\n");
    }
}
