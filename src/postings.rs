// Permuterm Posting Store
// Occurrence sets for every indexed word, addressed by word id

use crate::types::{Posting, PostingList, WordId};

/// Maps each interned word to its [`PostingList`]
///
/// Indexed by [`WordId`], which the word table hands out densely, so a
/// word is present here exactly when it is present in the table.
#[derive(Debug, Clone, Default)]
pub struct PostingStore {
    lists: Vec<PostingList>,
}

impl PostingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence, returning `false` if it was already present
    pub fn add(&mut self, word: WordId, posting: Posting) -> bool {
        let idx = word as usize;
        if idx >= self.lists.len() {
            self.lists.resize_with(idx + 1, PostingList::new);
        }
        self.lists[idx].insert(posting)
    }

    /// Posting list for a word
    pub fn get(&self, word: WordId) -> Option<&PostingList> {
        self.lists.get(word as usize)
    }

    /// Number of words with a posting list
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if no word has been recorded
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total distinct occurrences across all words
    pub fn total_postings(&self) -> usize {
        self.lists.iter().map(PostingList::len).sum()
    }
}
