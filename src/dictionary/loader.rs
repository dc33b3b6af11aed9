use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::error::DictionaryError;
use crate::adjacency::{AdjacencyIndex, AdjacencyMap};

//─────────────────────────────────────────────────────────────────────────────

/// Shapes a JSON dictionary file may take.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDictionary {
    /// A flat list of words.
    Words(Vec<String>),
    /// A snapshot: word length -> word -> neighbors. Keys are JSON strings.
    Adjacency(BTreeMap<String, BTreeMap<String, Vec<String>>>),
}

/// Parsed dictionary content before an index is built from it.
#[derive(Debug)]
pub enum Dictionary {
    Words(Vec<String>),
    Adjacency(AdjacencyMap),
}

/// Loads a plain word list from a file.
///
/// JSON content must be an array of strings; anything else is read as one
/// word per line, with surrounding whitespace trimmed and blank lines skipped.
/// Adjacency snapshots are flattened to their words.
pub fn load_words(path: &Path) -> Result<Vec<String>, DictionaryError> {
    match read_dictionary(path)? {
        Dictionary::Words(words) => Ok(words),
        Dictionary::Adjacency(map) => Ok(map
            .into_values()
            .flat_map(|words| words.into_keys())
            .collect()),
    }
}

/// Loads a dictionary file and builds an adjacency index from it.
///
/// Snapshots are adopted as they are. Word lists build a lazy index, or an
/// eager one when `eager` is set.
///
/// # Errors
/// Returns a `DictionaryError` if the file cannot be read or parsed, holds no
/// words, or contains inconsistent adjacency data.
pub fn load_index(path: &Path, eager: bool) -> Result<AdjacencyIndex, DictionaryError> {
    let index = match read_dictionary(path)? {
        Dictionary::Words(words) if eager => AdjacencyIndex::build_eager(words),
        Dictionary::Words(words) => AdjacencyIndex::build(words),
        Dictionary::Adjacency(map) => AdjacencyIndex::from_adjacency(map)
            .map_err(|e| DictionaryError::Adjacency(path.display().to_string(), e))?,
    };
    Ok(index)
}

/// Reads and parses a dictionary file without building an index.
pub fn read_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    let source = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| DictionaryError::ReadFile(source.clone(), e))?;
    parse_dictionary(&content, &source)
}

/// Parses dictionary content. `source` only names the origin in errors.
pub fn parse_dictionary(content: &str, source: &str) -> Result<Dictionary, DictionaryError> {
    let trimmed = content.trim_start();
    let dictionary = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        let parsed: JsonDictionary = serde_json::from_str(content)
            .map_err(|e| DictionaryError::ParseJson(source.into(), e))?;
        match parsed {
            JsonDictionary::Words(words) => Dictionary::Words(words),
            JsonDictionary::Adjacency(raw) => Dictionary::Adjacency(parse_length_keys(raw, source)?),
        }
    } else {
        Dictionary::Words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    };

    let is_empty = match &dictionary {
        Dictionary::Words(words) => words.is_empty(),
        Dictionary::Adjacency(map) => map.values().all(BTreeMap::is_empty),
    };
    if is_empty {
        return Err(DictionaryError::Empty(source.into()));
    }
    Ok(dictionary)
}

fn parse_length_keys(
    raw: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    source: &str,
) -> Result<AdjacencyMap, DictionaryError> {
    raw.into_iter()
        .map(|(key, words)| {
            key.trim()
                .parse::<usize>()
                .map(|length| (length, words))
                .map_err(|_| DictionaryError::InvalidLengthKey {
                    path: source.into(),
                    key,
                })
        })
        .collect()
}

/// Writes the index's full adjacency as a JSON snapshot.
///
/// Buckets are keyed by word length and sorted, so the same vocabulary
/// always produces the same file. The snapshot can be read back with
/// [`load_index`].
pub fn save_snapshot(path: &Path, index: &AdjacencyIndex) -> Result<(), DictionaryError> {
    let source = path.display().to_string();
    let adjacency = index.to_adjacency();
    let json = serde_json::to_string_pretty(&adjacency)
        .map_err(|e| DictionaryError::Serialize(source.clone(), e))?;
    fs::write(path, json).map_err(|e| DictionaryError::WriteFile(source, e))
}
