// Permuterm Query Translator
// Classifies wildcard patterns and rewrites them into rotated trie prefixes

use crate::types::{InvalidReason, PatternError, QueryKind, TranslatedQuery};

/// Sentinel appended to every word before rotation
pub const BOUNDARY: char = '$';

/// The only wildcard metacharacter
pub const WILDCARD: char = '*';

/// Classify a wildcard pattern and rewrite it for lookup
///
/// # Rewrite Rules
/// - `apple` → Exact, looked up directly
/// - `*ppl*` → Substring, middle `ppl` scanned over every word
/// - `*ple`  → Suffix, trie prefix `ple$`
/// - `app*`  → Prefix, trie prefix `$app`
/// - `a*le`  → Infix, trie prefix `le$a`
///
/// Any other multi-wildcard arrangement is rejected.
///
/// # Examples
/// ```
/// # use permuterm::pattern::translate_query;
/// # use permuterm::types::QueryKind;
/// let query = translate_query("app*").unwrap();
/// assert_eq!(query.kind, QueryKind::Prefix);
/// assert_eq!(query.key, "$app");
///
/// let query = translate_query("a*le").unwrap();
/// assert_eq!(query.key, "le$a");
///
/// assert!(translate_query("a*b*c").is_err());
/// ```
pub fn translate_query(pattern: &str) -> Result<TranslatedQuery, PatternError> {
    let pattern = pattern.trim();

    if pattern.contains(BOUNDARY) {
        return Err(PatternError::invalid(
            pattern,
            InvalidReason::ReservedBoundary(BOUNDARY),
        ));
    }

    let (kind, key) = match count_wildcards(pattern) {
        0 => (QueryKind::Exact, pattern.to_string()),
        1 => {
            if let Some(rest) = pattern.strip_prefix(WILDCARD) {
                (QueryKind::Suffix, format!("{}{}", rest, BOUNDARY))
            } else if let Some(head) = pattern.strip_suffix(WILDCARD) {
                (QueryKind::Prefix, format!("{}{}", BOUNDARY, head))
            } else {
                // Exactly one wildcard, strictly inside the pattern
                let (prefix, suffix) = pattern.split_once(WILDCARD).unwrap_or((pattern, ""));
                (
                    QueryKind::Infix,
                    format!("{}{}{}", suffix, BOUNDARY, prefix),
                )
            }
        }
        2 => match substring_middle(pattern) {
            Some(middle) => (QueryKind::Substring, middle.to_string()),
            None => {
                return Err(PatternError::invalid(
                    pattern,
                    InvalidReason::MisplacedWildcards,
                ))
            }
        },
        n => {
            return Err(PatternError::invalid(
                pattern,
                InvalidReason::TooManyWildcards(n),
            ))
        }
    };

    Ok(TranslatedQuery { kind, key })
}

/// Every cyclic rotation of `word + BOUNDARY`, starting with offset 0
///
/// A word of `m` characters yields `m + 1` rotations.
///
/// # Examples
/// ```
/// # use permuterm::pattern::rotations;
/// assert_eq!(rotations("ab"), vec!["ab$", "b$a", "$ab"]);
/// ```
pub fn rotations(word: &str) -> Vec<String> {
    let rotated: Vec<char> = word.chars().chain(std::iter::once(BOUNDARY)).collect();

    (0..rotated.len())
        .map(|i| rotated[i..].iter().chain(&rotated[..i]).collect())
        .collect()
}

/// Convert a wildcard pattern to an anchored regex string
///
/// Literal runs are escaped and each `*` becomes `.*`. The pattern is
/// validated with the same rules as [`translate_query`], so this never
/// accepts a pattern the index would reject.
///
/// # Examples
/// ```
/// # use permuterm::pattern::pattern_to_regex;
/// assert_eq!(pattern_to_regex("a*le").unwrap(), "^a.*le$");
/// ```
pub fn pattern_to_regex(pattern: &str) -> Result<String, PatternError> {
    translate_query(pattern)?;

    let pattern = pattern.trim();
    let mut expr = String::from("^");
    for (i, literal) in pattern.split(WILDCARD).enumerate() {
        if i > 0 {
            expr.push_str(".*");
        }
        expr.push_str(&regex::escape(literal));
    }
    expr.push('$');

    Ok(expr)
}

#[inline]
fn count_wildcards(pattern: &str) -> usize {
    pattern.chars().filter(|c| *c == WILDCARD).count()
}

/// The `X` of a `*X*` pattern, if the pattern has that shape
fn substring_middle(pattern: &str) -> Option<&str> {
    pattern
        .strip_prefix(WILDCARD)
        .and_then(|rest| rest.strip_suffix(WILDCARD))
}
