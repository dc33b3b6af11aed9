//! Character-level distance between words.
//!
//! Both functions compare strings position by position over their `char`s.
//! Neither checks lengths: the adjacency index only ever compares words from
//! the same length bucket, so the comparison is a plain zip.

/// Returns `true` if the two words differ at exactly one character position.
///
/// The comparison stops at the shorter word, so callers must make sure both
/// words have the same length. Identical words are never one apart.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    let mut found_difference = false;
    for (c1, c2) in a.chars().zip(b.chars()) {
        if c1 != c2 {
            if found_difference {
                // Second mismatch, no need to look any further.
                return false;
            }
            found_difference = true;
        }
    }
    found_difference
}

/// Counts the character positions at which the two words differ.
///
/// Only the first `min(len(a), len(b))` positions are compared. On words of
/// unequal length the result is a truncated comparison and carries no
/// meaning as a distance.
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .filter(|(c1, c2)| c1 != c2)
        .count()
}

/// Number of characters in a word, the key used for length buckets.
pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}
