//! Common fixtures shared across integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

/// A small vocabulary with known ladders:
/// - task -> talk
/// - boot -> soot -> shot -> shoe
/// - warm -> ward -> card -> cord -> cold
/// - play -> plan -> clan
///
/// plus the two 27-letter words, which have no neighbors at all.
pub const VOCABULARY: &[&str] = &[
    "task",
    "talk",
    "tall",
    "tale",
    "tack",
    "boot",
    "soot",
    "shot",
    "shoe",
    "shod",
    "boat",
    "coat",
    "moot",
    "warm",
    "ward",
    "card",
    "cord",
    "cold",
    "harm",
    "wart",
    "cart",
    "worm",
    "word",
    "form",
    "play",
    "plan",
    "clan",
    "electroencephalographically",
    "hydroxydesoxycorticosterone",
];

fn one_apart(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count() == 1
}

/// Number of steps on a shortest ladder, computed without the crate.
pub fn bfs_distance(words: &[&str], start: &str, end: &str) -> Option<usize> {
    let mut distance: HashMap<&str, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(start, 0);
    queue.push_back(start);
    while let Some(word) = queue.pop_front() {
        let d = distance[word];
        if word == end {
            return Some(d);
        }
        for &candidate in words {
            if one_apart(word, candidate) && !distance.contains_key(candidate) {
                distance.insert(candidate, d + 1);
                queue.push_back(candidate);
            }
        }
    }
    None
}

/// Panics unless `path` is a ladder from `start` to `end` over `words`.
pub fn assert_valid_ladder(words: &[&str], path: &[String], start: &str, end: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(end));
    for word in path {
        assert!(words.contains(&word.as_str()), "{word} is not in the vocabulary");
    }
    for pair in path.windows(2) {
        assert!(
            one_apart(&pair[0], &pair[1]),
            "{} -> {} is not a single-letter change",
            pair[0],
            pair[1]
        );
    }
}

/// Every ordered pair of distinct, equal-length words in `words`.
pub fn equal_length_pairs<'a>(words: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    let mut pairs = Vec::new();
    for &a in words {
        for &b in words {
            if a != b && a.len() == b.len() {
                pairs.push((a, b));
            }
        }
    }
    pairs
}
