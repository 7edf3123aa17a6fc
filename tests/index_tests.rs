// Integration tests for PermutermIndex

use permuterm::{pattern_to_regex, rotations, PermutermIndex, Posting, PostingList};
use proptest::prelude::*;
use regex::Regex;

fn build(words: &[&str]) -> PermutermIndex {
    let mut index = PermutermIndex::new();
    for (pos, word) in words.iter().enumerate() {
        index.insert(word, 1, pos);
    }
    index
}

fn postings(entries: &[(u32, usize)]) -> PostingList {
    entries
        .iter()
        .map(|&(doc, pos)| Posting::new(doc, pos))
        .collect()
}

// ============ Insertion ============

#[test]
fn test_insertion_fan_out() {
    let index = build(&["apple"]);
    let trie = index.trie();

    for rotated in rotations("apple") {
        assert!(trie.contains_path(&rotated), "missing rotation '{}'", rotated);
    }
    assert_eq!(index.stats().rotations, 6);
}

#[test]
fn test_rotation_count_sums_over_distinct_words() {
    let index = build(&["cat", "car", "cat", "cart"]);
    // (3 + 1) + (3 + 1) + (4 + 1)
    assert_eq!(index.stats().rotations, 13);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_idempotent_posting_accumulation() {
    let mut index = PermutermIndex::new();
    index.insert("apple", 1, 0);
    index.insert("apple", 1, 0);

    assert_eq!(index.postings("apple").unwrap(), &postings(&[(1, 1)]));
}

#[test]
fn test_multiple_occurrences() {
    let mut index = PermutermIndex::new();
    index.insert("apple", 1, 0);
    index.insert("apple", 2, 5);

    assert_eq!(
        index.postings("apple").unwrap(),
        &postings(&[(1, 1), (2, 6)])
    );
}

#[test]
fn test_existence_and_postings_agree() {
    let index = build(&["kiwi", "lime", "kiwi"]);

    for word in index.words() {
        assert!(index.postings(word).is_some(), "no postings for '{}'", word);
    }
    assert_eq!(index.words().count(), index.posting_report().len());
}

// ============ Search ============

#[test]
fn test_exact_round_trip() {
    let mut index = PermutermIndex::new();
    index.insert("apple", 3, 0);

    let results = index.search("apple").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "apple");
    assert_eq!(results[0].postings, postings(&[(3, 1)]));
}

#[test]
fn test_prefix_query_excludes_other_words() {
    let index = build(&["apple", "application", "grape", "snapple"]);
    let results = index.search("app*").unwrap();

    assert!(results.iter().any(|r| r.word == "apple"));
    for result in &results {
        assert!(result.word.starts_with("app"), "'{}' leaked in", result.word);
    }
}

#[test]
fn test_suffix_query() {
    let index = build(&["apple", "grape"]);
    let results = index.search("*ple").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, "apple");
}

#[test]
fn test_substring_query_is_scan_based() {
    let index = build(&["apple", "pineapple", "peach"]);
    let words: Vec<String> = index
        .search("*ppl*")
        .unwrap()
        .into_iter()
        .map(|r| r.word)
        .collect();

    assert_eq!(words, vec!["apple", "pineapple"]);
}

#[test]
fn test_absence_is_empty_not_error() {
    let index = build(&["apple", "banana"]);
    assert!(index.search("xyz*").unwrap().is_empty());
    assert!(index.search("*xyz").unwrap().is_empty());
    assert!(index.search("x*z").unwrap().is_empty());
    assert!(index.search("*xyz*").unwrap().is_empty());
    assert!(index.search("xyz").unwrap().is_empty());
    assert!(index.search("").unwrap().is_empty());
}

#[test]
fn test_empty_index() {
    let index = PermutermIndex::new();
    assert!(index.search("*").unwrap().is_empty());
    assert!(index.search("**").unwrap().is_empty());
}

#[test]
fn test_infix_requires_both_ends() {
    let index = build(&["banana", "bandana", "cabana", "ban"]);
    let words = index.matching_words("b*a").unwrap();
    assert_eq!(words, vec!["banana", "bandana"]);
}

#[test]
fn test_infix_overlapping_parts_do_not_match_short_words() {
    // "ab*ba" needs at least "ab" + "ba"; "aba" shares the middle 'b'
    let index = build(&["aba", "abba", "abcba"]);
    let words = index.matching_words("ab*ba").unwrap();
    assert_eq!(words, vec!["abba", "abcba"]);
}

#[test]
fn test_results_carry_full_posting_sets() {
    let mut index = PermutermIndex::new();
    index.insert("apple", 1, 0);
    index.insert("apple", 2, 3);
    index.insert("apply", 2, 4);

    let results = index.search("appl*").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].postings, postings(&[(1, 1), (2, 4)]));
    assert_eq!(results[1].postings, postings(&[(2, 5)]));
}

#[test]
fn test_invalid_pattern_does_not_mutate() {
    let index = build(&["apple"]);
    let before = index.stats();
    assert!(index.search("a*p*e").is_err());
    assert_eq!(index.stats(), before);
}

// ============ Properties ============

proptest! {
    #[test]
    fn prop_fan_out_matches_word_length(word in "[a-z]{1,12}") {
        let index = build(&[word.as_str()]);
        let stats = index.stats();

        prop_assert_eq!(stats.rotations, word.len() + 1);
        for rotated in rotations(&word) {
            prop_assert!(index.trie().contains_path(&rotated));
        }
    }

    #[test]
    fn prop_search_agrees_with_regex(
        words in prop::collection::vec("[a-d]{1,6}", 1..30),
        head in "[a-d]{0,2}",
        tail in "[a-d]{0,2}",
        shape in 0..5usize,
    ) {
        let pattern = match shape {
            0 => format!("{}{}", head, tail),
            1 => format!("{}*", head),
            2 => format!("*{}", tail),
            3 => format!("{}*{}", head, tail),
            _ => format!("*{}*", head),
        };

        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let index = build(&refs);

        let re = Regex::new(&pattern_to_regex(&pattern).unwrap()).unwrap();
        let mut expected: Vec<&str> = refs.iter().copied().filter(|w| re.is_match(w)).collect();
        expected.sort();
        expected.dedup();

        let found = index.matching_words(&pattern).unwrap();
        prop_assert_eq!(found, expected, "pattern '{}'", pattern);
    }
}
