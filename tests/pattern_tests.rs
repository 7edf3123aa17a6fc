// Integration tests for the query translator

use permuterm::{pattern_to_regex, rotations, translate_query, InvalidReason, QueryKind};
use regex::Regex;

// ============ Rewrite Table ============

#[test]
fn test_rewrite_table() {
    let cases = [
        ("apple", QueryKind::Exact, "apple"),
        ("*ppl*", QueryKind::Substring, "ppl"),
        ("*ple", QueryKind::Suffix, "ple$"),
        ("app*", QueryKind::Prefix, "$app"),
        ("ap*le", QueryKind::Infix, "le$ap"),
    ];

    for (pattern, kind, key) in cases {
        let query = translate_query(pattern).unwrap();
        assert_eq!(query.kind, kind, "wrong kind for '{}'", pattern);
        assert_eq!(query.key, key, "wrong key for '{}'", pattern);
    }
}

#[test]
fn test_infix_key_is_a_rotation_of_matching_word() {
    // "a*le" matches "apple"; its key must start some rotation of apple$
    let query = translate_query("a*le").unwrap();
    assert!(
        rotations("apple").iter().any(|r| r.starts_with(&query.key)),
        "no rotation of apple$ starts with '{}'",
        query.key
    );
}

#[test]
fn test_prefix_and_suffix_are_degenerate_infix() {
    // Empty suffix part: "app*" behaves like "app*" + "" → "" + "$" + "app"
    assert_eq!(translate_query("app*").unwrap().key, "$app");
    // Empty prefix part: "*ple" → "ple" + "$" + ""
    assert_eq!(translate_query("*ple").unwrap().key, "ple$");
}

// ============ Invalid Patterns ============

#[test]
fn test_invalid_patterns() {
    let cases = [
        ("a*b*c", InvalidReason::MisplacedWildcards),
        ("*a*b", InvalidReason::MisplacedWildcards),
        ("a**", InvalidReason::MisplacedWildcards),
        ("**a", InvalidReason::MisplacedWildcards),
        ("*a*b*", InvalidReason::TooManyWildcards(3)),
        ("***", InvalidReason::TooManyWildcards(3)),
        ("ab$", InvalidReason::ReservedBoundary('$')),
    ];

    for (pattern, reason) in cases {
        let err = translate_query(pattern).unwrap_err();
        assert_eq!(err.reason(), reason, "wrong reason for '{}'", pattern);
    }
}

#[test]
fn test_error_message_names_pattern() {
    let err = translate_query("a*b*c").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a*b*c"));
    assert!(message.starts_with("Invalid pattern"));
}

// ============ Rotations ============

#[test]
fn test_rotations_are_distinct() {
    let all = rotations("aaa");
    let mut unique = all.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), all.len());
    assert_eq!(all.len(), 4);
}

#[test]
fn test_rotations_contain_boundary_once() {
    for rotated in rotations("banana") {
        assert_eq!(rotated.matches('$').count(), 1, "bad rotation '{}'", rotated);
        assert_eq!(rotated.chars().count(), 7);
    }
}

// ============ Regex Oracle ============

#[test]
fn test_regex_agrees_with_shapes() {
    let words = ["apple", "apply", "maple", "pineapple"];

    let re = Regex::new(&pattern_to_regex("*ple").unwrap()).unwrap();
    let matched: Vec<&str> = words.iter().copied().filter(|w| re.is_match(w)).collect();
    assert_eq!(matched, vec!["apple", "maple", "pineapple"]);

    let re = Regex::new(&pattern_to_regex("ap*").unwrap()).unwrap();
    let matched: Vec<&str> = words.iter().copied().filter(|w| re.is_match(w)).collect();
    assert_eq!(matched, vec!["apple", "apply"]);
}

#[test]
fn test_regex_escapes_metacharacters() {
    let expr = pattern_to_regex("a.b*").unwrap();
    assert_eq!(expr, r"^a\.b.*$");
}
