// index.rs
// ──────────────────────────────────────────────────────────────────────────────
// Word adjacency index. Words are grouped into buckets by length; two words
// are adjacent when they share a bucket and differ at exactly one position.
// The lazy variant scans the bucket on every lookup, the eager variant keeps
// a precomputed neighbor list per word and is what gets persisted as a
// snapshot.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{BTreeMap, HashMap, HashSet};

use super::distance::{differs_by_one, word_length};
use super::error::IndexError;

/// Precomputed adjacency keyed by word length, then by word.
pub type AdjacencyMap = BTreeMap<usize, BTreeMap<String, Vec<String>>>;

/// Read-only adjacency structure over a vocabulary.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    /// Words grouped by length, in first-occurrence order.
    buckets: HashMap<usize, Vec<String>>,
    /// Neighbor lists, present only for eager indexes.
    precomputed: Option<HashMap<String, Vec<String>>>,
    vocabulary: HashSet<String>,
}

impl AdjacencyIndex {
    /// Builds a lazy index: words are bucketed by length and neighbors are
    /// computed on each lookup.
    ///
    /// Duplicate words are collapsed, keeping the first occurrence.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for word in words {
            let word = word.into();
            if index.vocabulary.contains(&word) {
                continue;
            }
            index
                .buckets
                .entry(word_length(&word))
                .or_default()
                .push(word.clone());
            index.vocabulary.insert(word);
        }
        index
    }

    /// Builds an eager index with every word's neighbor list precomputed.
    pub fn build_eager<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::build(words);
        let mut precomputed = HashMap::with_capacity(index.vocabulary.len());
        for bucket in index.buckets.values() {
            for word in bucket {
                let neighbors = bucket
                    .iter()
                    .filter(|candidate| differs_by_one(candidate, word))
                    .cloned()
                    .collect::<Vec<String>>();
                precomputed.insert(word.clone(), neighbors);
            }
        }
        index.precomputed = Some(precomputed);
        index
    }

    /// Adopts a precomputed adjacency structure as an eager index.
    ///
    /// Bucket order follows the map's (sorted) word order, neighbor lists keep
    /// the order they were supplied in.
    ///
    /// # Errors
    /// Returns an `IndexError` if a word sits in the wrong length bucket, or if
    /// a neighbor entry is unknown or not one character away.
    pub fn from_adjacency(map: AdjacencyMap) -> Result<Self, IndexError> {
        let mut index = Self::default();

        // First pass: vocabulary and buckets, so neighbors can be checked
        // against the full word set.
        for (&length, words) in &map {
            for word in words.keys() {
                let actual = word_length(word);
                if actual != length {
                    return Err(IndexError::WrongBucket {
                        word: word.clone(),
                        bucket: length,
                        actual,
                    });
                }
                index.buckets.entry(length).or_default().push(word.clone());
                index.vocabulary.insert(word.clone());
            }
        }

        let mut precomputed = HashMap::with_capacity(index.vocabulary.len());
        for words in map.into_values() {
            for (word, neighbors) in words {
                for neighbor in &neighbors {
                    if !index.vocabulary.contains(neighbor) {
                        return Err(IndexError::UnknownNeighbor {
                            word,
                            neighbor: neighbor.clone(),
                        });
                    }
                    if word_length(neighbor) != word_length(&word)
                        || !differs_by_one(neighbor, &word)
                    {
                        return Err(IndexError::NotAdjacent {
                            word,
                            neighbor: neighbor.clone(),
                        });
                    }
                }
                precomputed.insert(word, neighbors);
            }
        }
        index.precomputed = Some(precomputed);
        Ok(index)
    }

    /// Returns every vocabulary word one character away from `word`.
    ///
    /// The order is the bucket order (or the stored order for precomputed
    /// lists). Words outside the vocabulary have no neighbors.
    pub fn neighbors_of(&self, word: &str) -> Vec<&str> {
        if !self.vocabulary.contains(word) {
            return Vec::new();
        }
        match &self.precomputed {
            Some(precomputed) => precomputed
                .get(word)
                .map(|neighbors| neighbors.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            None => self
                .words_of_length(word_length(word))
                .iter()
                .filter(|candidate| differs_by_one(candidate, word))
                .map(String::as_str)
                .collect(),
        }
    }

    /// Returns `true` if the word is part of the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Whether neighbor lists were precomputed.
    pub fn is_precomputed(&self) -> bool {
        self.precomputed.is_some()
    }

    /// Word lengths present in the vocabulary, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Words of the given length, in bucket order.
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.buckets
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Exports the full adjacency structure, computing neighbor lists for
    /// lazy indexes.
    pub fn to_adjacency(&self) -> AdjacencyMap {
        let mut map = AdjacencyMap::new();
        for (&length, bucket) in &self.buckets {
            let words = map.entry(length).or_default();
            for word in bucket {
                let neighbors = self
                    .neighbors_of(word)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                words.insert(word.clone(), neighbors);
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 7] = ["task", "talk", "tall", "tack", "cold", "cord", "at"];

    #[test]
    fn test_build_groups_by_length() {
        let index = AdjacencyIndex::build(WORDS);
        assert_eq!(index.len(), 7);
        assert_eq!(index.lengths(), vec![2, 4]);
        assert_eq!(index.words_of_length(2), ["at".to_string()]);
        assert_eq!(index.words_of_length(4).len(), 6);
        assert!(index.words_of_length(9).is_empty());
        assert!(!index.is_precomputed());
    }

    #[test]
    fn test_build_collapses_duplicates() {
        let index = AdjacencyIndex::build(["task", "talk", "task"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.words_of_length(4), ["task".to_string(), "talk".to_string()]);
    }

    #[test]
    fn test_neighbors_in_bucket_order() {
        let index = AdjacencyIndex::build(WORDS);
        assert_eq!(index.neighbors_of("task"), vec!["talk", "tack"]);
        assert_eq!(index.neighbors_of("talk"), vec!["task", "tall"]);
        assert_eq!(index.neighbors_of("cold"), vec!["cord"]);
        assert!(index.neighbors_of("at").is_empty());
    }

    #[test]
    fn test_unknown_word_has_no_neighbors() {
        let index = AdjacencyIndex::build(WORDS);
        assert!(index.neighbors_of("tasp").is_empty());
        assert!(!index.contains("tasp"));
    }

    #[test]
    fn test_eager_matches_lazy() {
        let lazy = AdjacencyIndex::build(WORDS);
        let eager = AdjacencyIndex::build_eager(WORDS);
        assert!(eager.is_precomputed());
        for word in WORDS {
            assert_eq!(lazy.neighbors_of(word), eager.neighbors_of(word));
        }
        assert_eq!(lazy.to_adjacency(), eager.to_adjacency());
    }

    #[test]
    fn test_from_adjacency_round_trips_export() {
        let eager = AdjacencyIndex::build_eager(WORDS);
        let adopted = AdjacencyIndex::from_adjacency(eager.to_adjacency()).unwrap();
        assert!(adopted.is_precomputed());
        assert_eq!(adopted.len(), eager.len());
        assert_eq!(adopted.neighbors_of("talk"), vec!["task", "tall"]);
    }

    #[test]
    fn test_from_adjacency_rejects_wrong_bucket() {
        let mut map = AdjacencyMap::new();
        map.entry(3).or_default().insert("task".to_string(), Vec::new());
        let err = AdjacencyIndex::from_adjacency(map).unwrap_err();
        assert_eq!(
            err,
            IndexError::WrongBucket {
                word: "task".to_string(),
                bucket: 3,
                actual: 4,
            }
        );
    }

    #[test]
    fn test_from_adjacency_rejects_bad_neighbors() {
        let mut map = AdjacencyMap::new();
        let bucket = map.entry(4).or_default();
        bucket.insert("task".to_string(), vec!["cold".to_string()]);
        bucket.insert("cold".to_string(), Vec::new());
        assert!(matches!(
            AdjacencyIndex::from_adjacency(map.clone()),
            Err(IndexError::NotAdjacent { .. })
        ));

        let bucket = map.entry(4).or_default();
        bucket.insert("task".to_string(), vec!["talk".to_string()]);
        assert!(matches!(
            AdjacencyIndex::from_adjacency(map),
            Err(IndexError::UnknownNeighbor { .. })
        ));
    }
}
