// Permuterm Type Definitions
// Core types for postings, query classification and search results

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Document identifier assigned by the ingestion layer
pub type DocId = u32;

/// Interned word identifier (index into the word table)
pub type WordId = u32;

/// A single occurrence of a word: document plus 1-based token position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    /// Document the word occurs in
    pub doc_id: DocId,

    /// 1-based token position within the document
    pub position: usize,
}

impl Posting {
    /// Create a posting from an already 1-based position
    pub fn new(doc_id: DocId, position: usize) -> Self {
        Self { doc_id, position }
    }
}

impl fmt::Display for Posting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.doc_id, self.position)
    }
}

/// Set of occurrences recorded for one word
///
/// Backed by an ordered set: duplicates collapse and iteration is always
/// in `(doc_id, position)` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    entries: BTreeSet<Posting>,
}

impl PostingList {
    /// Create an empty posting list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a posting, returning `false` if it was already present
    pub fn insert(&mut self, posting: Posting) -> bool {
        self.entries.insert(posting)
    }

    /// Check whether a posting is recorded
    pub fn contains(&self, posting: &Posting) -> bool {
        self.entries.contains(posting)
    }

    /// Number of distinct occurrences (the term frequency)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list holds no occurrences
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate occurrences in `(doc_id, position)` order
    pub fn iter(&self) -> impl Iterator<Item = &Posting> + '_ {
        self.entries.iter()
    }

    /// Distinct documents the word occurs in, ascending
    pub fn documents(&self) -> Vec<DocId> {
        let mut docs: Vec<DocId> = self.entries.iter().map(|p| p.doc_id).collect();
        docs.dedup();
        docs
    }

    /// Positions grouped per document, both ascending
    pub fn by_document(&self) -> Vec<(DocId, Vec<usize>)> {
        let mut grouped: Vec<(DocId, Vec<usize>)> = Vec::new();
        for posting in &self.entries {
            match grouped.last_mut() {
                Some((doc, positions)) if *doc == posting.doc_id => {
                    positions.push(posting.position)
                }
                _ => grouped.push((posting.doc_id, vec![posting.position])),
            }
        }
        grouped
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = &'a Posting;
    type IntoIter = std::collections::btree_set::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Posting> for PostingList {
    fn from_iter<I: IntoIterator<Item = Posting>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Renders on one line as `doc1:1,3; doc2:5;`, one `docN:...;` group per
/// document separated by a space
impl fmt::Display for PostingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (doc_id, positions)) in self.by_document().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "doc{}:", doc_id)?;
            for (j, position) in positions.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", position)?;
            }
            write!(f, ";")?;
        }
        Ok(())
    }
}

/// Shape of a wildcard query after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// No wildcard: direct posting lookup
    /// Example: "apple"
    Exact,

    /// `*X*`: linear scan for words containing X
    Substring,

    /// `*X`: words ending in X
    Suffix,

    /// `X*`: words starting with X
    Prefix,

    /// `A*B`: words starting with A and ending with B
    Infix,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Exact => write!(f, "Exact"),
            QueryKind::Substring => write!(f, "Substring"),
            QueryKind::Suffix => write!(f, "Suffix"),
            QueryKind::Prefix => write!(f, "Prefix"),
            QueryKind::Infix => write!(f, "Infix"),
        }
    }
}

/// A classified query and the lookup key it was rewritten to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedQuery {
    /// Detected query shape
    pub kind: QueryKind,

    /// Lookup key:
    /// - Exact: the literal word
    /// - Substring: the middle part to scan for
    /// - Suffix/Prefix/Infix: the rotated trie prefix
    pub key: String,
}

impl TranslatedQuery {
    /// Whether this query is answered by a trie prefix lookup
    pub fn uses_trie(&self) -> bool {
        matches!(
            self.kind,
            QueryKind::Suffix | QueryKind::Prefix | QueryKind::Infix
        )
    }
}

/// Why a pattern was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// More than two `*`
    TooManyWildcards(usize),

    /// Two `*` not in the leading + trailing arrangement
    MisplacedWildcards,

    /// The boundary marker may not appear in a pattern
    ReservedBoundary(char),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::TooManyWildcards(count) => {
                write!(f, "{} wildcards, at most two allowed", count)
            }
            InvalidReason::MisplacedWildcards => {
                write!(f, "two wildcards must lead and trail the term (*term*)")
            }
            InvalidReason::ReservedBoundary(ch) => {
                write!(f, "'{}' is reserved as the boundary marker", ch)
            }
        }
    }
}

/// Pattern translation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: InvalidReason,
    },
}

impl PatternError {
    pub(crate) fn invalid(pattern: &str, reason: InvalidReason) -> Self {
        PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        }
    }

    /// The rejection reason
    pub fn reason(&self) -> InvalidReason {
        match self {
            PatternError::InvalidPattern { reason, .. } => *reason,
        }
    }
}

/// Document loading errors
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8 text", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("Tokenizer pattern failed to compile: {0}")]
    Tokenizer(#[from] regex::Error),
}

/// A matched word with its full posting set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The indexed word
    pub word: String,

    /// Every recorded occurrence of the word
    pub postings: PostingList,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(word: String, postings: PostingList) -> Self {
        Self { word, postings }
    }
}

/// One line of the posting report: a term, its frequency and occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub word: String,
    pub postings: PostingList,
}

impl TermEntry {
    /// Number of recorded occurrences
    pub fn term_frequency(&self) -> usize {
        self.postings.len()
    }
}

/// Renders as `<word: tf; doc1:1,3; doc2:5;>`, flattened to a single line
impl fmt::Display for TermEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}: {}; {}>",
            self.word,
            self.term_frequency(),
            self.postings
        )
    }
}

/// Size counters for an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Distinct indexed words
    pub words: usize,

    /// Distinct (word, document, position) occurrences
    pub postings: usize,

    /// Trie nodes, root included
    pub trie_nodes: usize,

    /// Terminal trie nodes, one per stored rotation
    pub rotations: usize,
}
