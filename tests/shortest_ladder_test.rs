//! Integration tests for the breadth-first shortest-ladder search.

mod common;

use common::{assert_valid_ladder, bfs_distance, equal_length_pairs, VOCABULARY};
use word_ladder::adjacency::AdjacencyIndex;
use word_ladder::ladder::{find_shortest, LadderError, Query, WordLadder};

fn solve(start: &str, end: &str) -> Result<Vec<String>, LadderError> {
    let mut word_ladder = WordLadder::from_words(VOCABULARY.iter().copied());
    word_ladder.set_query(start, end)?;
    Ok(word_ladder.find_shortest()?.into_path())
}

#[test]
fn test_one_char_difference() {
    let word_ladder = {
        let mut ladder = WordLadder::from_words(["task", "talk"]);
        ladder.set_query("task", "talk").unwrap();
        ladder
    };
    let ladder = word_ladder.find_shortest().unwrap();
    assert_eq!(ladder.path(), ["task", "talk"]);
    assert_eq!(ladder.to_string(), "task -> talk");
}

#[test]
fn test_one_char_in_common() {
    assert_eq!(
        solve("boot", "shoe").unwrap(),
        vec!["boot", "soot", "shot", "shoe"]
    );
}

#[test]
fn test_no_chars_in_common() {
    let path = solve("warm", "cold").unwrap();
    assert_eq!(path, vec!["warm", "ward", "card", "cord", "cold"]);
    assert_eq!(path.join(" -> "), "warm -> ward -> card -> cord -> cold");
}

#[test]
fn test_diagnostics() {
    let mut word_ladder = WordLadder::from_words(VOCABULARY.iter().copied());
    word_ladder.set_query("task", "talk").unwrap();
    let ladder = word_ladder.find_shortest().unwrap();
    assert_eq!(ladder.depth(), 1);
    assert_eq!(ladder.steps(), 1);
    // task, then its whole first level: talk and tack.
    assert_eq!(ladder.nodes_visited(), 3);
    assert_eq!(ladder.levels()[0], ["task"]);
    assert_eq!(ladder.levels()[1], ["talk", "tack"]);
}

#[test]
fn test_unsolvable_scenario() {
    let err = solve("electroencephalographically", "hydroxydesoxycorticosterone").unwrap_err();
    assert!(matches!(err, LadderError::Unsolvable { .. }));
}

#[test]
fn test_disconnected_components() {
    let err = solve("boot", "cold").unwrap_err();
    assert_eq!(
        err,
        LadderError::Unsolvable {
            start: "boot".to_string(),
            end: "cold".to_string(),
        }
    );
}

#[test]
fn test_search_requires_query() {
    let word_ladder = WordLadder::from_words(VOCABULARY.iter().copied());
    assert!(matches!(
        word_ladder.find_shortest(),
        Err(LadderError::Precondition(_))
    ));
}

#[test]
fn test_every_ladder_is_valid_and_minimal() {
    let index = AdjacencyIndex::build(VOCABULARY.iter().copied());
    for (start, end) in equal_length_pairs(VOCABULARY) {
        let query = Query::new(&index, start, end).unwrap();
        match (find_shortest(&index, &query), bfs_distance(VOCABULARY, start, end)) {
            (Ok(ladder), Some(expected)) => {
                assert_valid_ladder(VOCABULARY, ladder.path(), start, end);
                assert_eq!(ladder.steps(), expected, "{start} -> {end}");
                assert_eq!(ladder.depth(), expected);
            }
            (Err(LadderError::Unsolvable { .. }), None) => {}
            (result, expected) => {
                panic!("{start} -> {end}: got {result:?}, expected distance {expected:?}")
            }
        }
    }
}

#[test]
fn test_lazy_and_eager_indexes_agree() {
    let lazy = AdjacencyIndex::build(VOCABULARY.iter().copied());
    let eager = AdjacencyIndex::build_eager(VOCABULARY.iter().copied());
    let adopted = AdjacencyIndex::from_adjacency(eager.to_adjacency()).unwrap();
    for (start, end) in [("boot", "shoe"), ("warm", "cold"), ("play", "clan")] {
        let query = Query::new(&lazy, start, end).unwrap();
        let expected = find_shortest(&lazy, &query).unwrap();
        assert_eq!(find_shortest(&eager, &query).unwrap().path(), expected.path());
        // Snapshot buckets are sorted, so only the length is guaranteed.
        assert_eq!(
            find_shortest(&adopted, &query).unwrap().steps(),
            expected.steps()
        );
    }
}

#[test]
fn test_tree_holds_the_ladder() {
    let mut word_ladder = WordLadder::from_words(VOCABULARY.iter().copied());
    word_ladder.set_query("warm", "cold").unwrap();
    let ladder = word_ladder.find_shortest().unwrap();
    let tree = ladder.tree();
    assert_eq!(tree.root(), "warm");
    assert_eq!(tree.path_to("cold").unwrap(), ladder.path());
    assert_eq!(tree.len(), ladder.nodes_visited());
}
