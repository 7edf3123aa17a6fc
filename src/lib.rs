//! # Permuterm: Wildcard Term Search
//!
//! A permuterm index over tokenized documents. Every indexed word is stored
//! in a character trie under each cyclic rotation of `word$`, so a wildcard
//! query becomes a single prefix walk.
//!
//! ## Query Shapes
//!
//! | Pattern | Kind      | Lookup                              |
//! |---------|-----------|-------------------------------------|
//! | `apple` | Exact     | direct posting lookup               |
//! | `app*`  | Prefix    | trie prefix `$app`                  |
//! | `*ple`  | Suffix    | trie prefix `ple$`                  |
//! | `a*le`  | Infix     | trie prefix `le$a`                  |
//! | `*ppl*` | Substring | scan of every word for `ppl`        |
//!
//! Any other arrangement of `*` is rejected with
//! [`PatternError::InvalidPattern`].
//!
//! ## Example Usage
//!
//! ```
//! use permuterm::PermutermIndex;
//!
//! let mut index = PermutermIndex::new();
//! index.insert("apple", 1, 0);
//! index.insert("apple", 2, 5);
//! index.insert("pineapple", 2, 6);
//!
//! let results = index.search("*ppl*")?;
//! assert_eq!(results.len(), 2);
//!
//! let apple = &index.search("apple")?[0];
//! assert_eq!(apple.postings.len(), 2);
//! # Ok::<(), permuterm::PatternError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Query Translator** ([`pattern`]) - classifies patterns and rewrites them to rotated prefixes
//! - **Word Table** ([`vocab`]) - interns words; the word-existence set
//! - **Rotation Trie** ([`trie`]) - arena trie with per-node word sets
//! - **Posting Store** ([`postings`]) - occurrences per word
//! - **PermutermIndex** ([`index`]) - main entry point combining all components
//! - **SharedIndex** ([`shared`]) - lock-guarded handle for interleaved build and query
//! - **Corpus** ([`corpus`]) - plain-text ingestion

pub mod corpus;
pub mod index;
pub mod pattern;
pub mod postings;
pub mod shared;
pub mod trie;
pub mod types;
pub mod vocab;

// Re-export main types and functions for convenience
pub use corpus::{Corpus, Document, Tokenizer};
pub use index::PermutermIndex;
pub use pattern::{pattern_to_regex, rotations, translate_query, BOUNDARY, WILDCARD};
pub use postings::PostingStore;
pub use shared::SharedIndex;
pub use trie::{RotationTrie, TrieNode};
pub use types::{
    CorpusError, DocId, IndexStats, InvalidReason, PatternError, Posting, PostingList, QueryKind,
    SearchResult, TermEntry, TranslatedQuery, WordId,
};
pub use vocab::WordTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
