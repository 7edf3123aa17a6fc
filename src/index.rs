// Permuterm Index
// Composes the word table, posting store and rotation trie behind insert/search

use crate::pattern::{rotations, translate_query, BOUNDARY};
use crate::postings::PostingStore;
use crate::trie::RotationTrie;
use crate::types::{
    DocId, IndexStats, PatternError, Posting, PostingList, QueryKind, SearchResult, TermEntry,
    WordId,
};
use crate::vocab::WordTable;
use tracing::{debug, info, warn};

/// Wildcard-searchable index over `(word, document, position)` occurrences
///
/// Lifecycle is explicit: construct, insert every token, then search. The
/// index holds no interior mutability, so once built it can be shared
/// behind an `Arc` and searched from any number of threads.
///
/// # Example
/// ```
/// # use permuterm::PermutermIndex;
/// let mut index = PermutermIndex::new();
/// index.insert("apple", 3, 0);
///
/// let results = index.search("app*").unwrap();
/// assert_eq!(results[0].word, "apple");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermutermIndex {
    /// Word-existence set and interner
    words: WordTable,

    /// Occurrences per word id
    postings: PostingStore,

    /// Every rotation of every word
    trie: RotationTrie,
}

impl PermutermIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one token occurrence
    ///
    /// `position` is the 0-based token offset within the document; it is
    /// stored 1-based. Rotations are added to the trie the first time a
    /// word is seen. Words that are empty or contain the boundary marker
    /// cannot be rotated and are skipped without touching the index.
    pub fn insert(&mut self, word: &str, doc_id: DocId, position: usize) {
        let Some(id) = self.index_word(word) else {
            return;
        };
        self.postings
            .add(id, Posting::new(doc_id, position.saturating_add(1)));
    }

    /// Find every word matching a wildcard pattern
    ///
    /// # Arguments
    /// * `pattern` - A word, optionally with `*` wildcards (see
    ///   [`translate_query`] for the accepted shapes)
    ///
    /// # Returns
    /// One result per matching word with its full posting set, sorted by
    /// word. An empty vector when nothing matches.
    pub fn search(&self, pattern: &str) -> Result<Vec<SearchResult>, PatternError> {
        let results = self
            .matching_ids(pattern)?
            .into_iter()
            .filter_map(|id| {
                let word = self.words.get_word(id)?;
                let postings = self.postings.get(id)?;
                Some(SearchResult::new(word.to_string(), postings.clone()))
            })
            .collect();

        Ok(results)
    }

    /// Search with a limit on the number of results
    pub fn search_limit(
        &self,
        pattern: &str,
        limit: usize,
    ) -> Result<Vec<SearchResult>, PatternError> {
        let mut results = self.search(pattern)?;
        results.truncate(limit);
        Ok(results)
    }

    /// Words matching a wildcard pattern, sorted, without their postings
    pub fn matching_words(&self, pattern: &str) -> Result<Vec<&str>, PatternError> {
        Ok(self
            .matching_ids(pattern)?
            .into_iter()
            .filter_map(|id| self.words.get_word(id))
            .collect())
    }

    /// Posting list of an indexed word
    pub fn postings(&self, word: &str) -> Option<&PostingList> {
        self.words
            .get_id(word)
            .and_then(|id| self.postings.get(id))
    }

    /// Check whether a word is indexed
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Indexed words in first-seen order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|(_, word)| word)
    }

    /// Number of distinct indexed words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The underlying rotation trie
    pub fn trie(&self) -> &RotationTrie {
        &self.trie
    }

    /// Size counters
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            words: self.words.len(),
            postings: self.postings.total_postings(),
            trie_nodes: self.trie.node_count(),
            rotations: self.trie.rotation_count(),
        }
    }

    /// Every term with its occurrences, sorted by term
    pub fn posting_report(&self) -> Vec<TermEntry> {
        let mut report: Vec<TermEntry> = self
            .words
            .iter()
            .filter_map(|(id, word)| {
                self.postings.get(id).map(|postings| TermEntry {
                    word: word.to_string(),
                    postings: postings.clone(),
                })
            })
            .collect();
        report.sort_by(|a, b| a.word.cmp(&b.word));
        report
    }

    /// Fold a separately built index into this one
    ///
    /// Used to combine shards built in parallel. Postings are taken as
    /// already stored (1-based) and merged with set semantics.
    pub fn merge(&mut self, other: PermutermIndex) {
        let before = self.words.len();

        for (other_id, word) in other.words.iter() {
            let Some(list) = other.postings.get(other_id) else {
                continue;
            };
            if let Some(id) = self.index_word(word) {
                for posting in list {
                    self.postings.add(id, *posting);
                }
            }
        }

        info!(
            merged_words = other.words.len(),
            new_words = self.words.len() - before,
            "Merged index shard"
        );
    }

    /// Intern a word and store its rotations on first sight
    fn index_word(&mut self, word: &str) -> Option<WordId> {
        if word.is_empty() || word.contains(BOUNDARY) {
            warn!(word, "Skipping word that cannot be rotated");
            return None;
        }

        let (id, added) = self.words.intern(word);
        if added {
            for rotated in rotations(word) {
                self.trie.insert_path(&rotated, id);
            }
            debug!(word, id, "Indexed new word");
        }
        Some(id)
    }

    /// Ids of the words matching `pattern`, sorted by word
    fn matching_ids(&self, pattern: &str) -> Result<Vec<WordId>, PatternError> {
        let query = translate_query(pattern)?;
        debug!(pattern, kind = %query.kind, key = %query.key, "Translated query");

        let mut ids: Vec<WordId> = match query.kind {
            QueryKind::Exact => self.words.get_id(&query.key).into_iter().collect(),
            QueryKind::Substring => self
                .words
                .iter()
                .filter(|(_, word)| word.contains(query.key.as_str()))
                .map(|(id, _)| id)
                .collect(),
            QueryKind::Suffix | QueryKind::Prefix | QueryKind::Infix => self
                .trie
                .lookup_prefix(&query.key)
                .map(|ids| ids.iter().copied().collect())
                .unwrap_or_default(),
        };

        ids.sort_by(|a, b| self.words.get_word(*a).cmp(&self.words.get_word(*b)));
        Ok(ids)
    }
}
