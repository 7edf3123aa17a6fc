// Permuterm Shared Index
// Lock-guarded handle for callers that interleave inserts and searches

use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::PermutermIndex;
use crate::types::{DocId, IndexStats, PatternError, SearchResult};

/// Cloneable, thread-safe handle to a [`PermutermIndex`]
///
/// Inserts take the write lock, searches the read lock. When the build
/// phase is over, prefer [`SharedIndex::into_inner`] (or a plain
/// `Arc<PermutermIndex>`) so readers need no lock at all.
#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    inner: Arc<RwLock<PermutermIndex>>,
}

impl SharedIndex {
    /// Create a handle around an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one token occurrence (see [`PermutermIndex::insert`])
    pub fn insert(&self, word: &str, doc_id: DocId, position: usize) {
        self.inner.write().insert(word, doc_id, position);
    }

    /// Record a batch of `(word, position)` tokens for one document
    ///
    /// The write lock is held once for the whole batch.
    pub fn insert_document<'a, I>(&self, doc_id: DocId, tokens: I)
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut index = self.inner.write();
        for (position, word) in tokens {
            index.insert(word, doc_id, position);
        }
    }

    /// Search under the read lock (see [`PermutermIndex::search`])
    pub fn search(&self, pattern: &str) -> Result<Vec<SearchResult>, PatternError> {
        self.inner.read().search(pattern)
    }

    /// Size counters
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Clone the current state into an independent, lock-free index
    pub fn snapshot(&self) -> PermutermIndex {
        self.inner.read().clone()
    }

    /// Take the index out if this is the last handle
    ///
    /// Returns the handle unchanged when other clones are still alive.
    pub fn into_inner(self) -> Result<PermutermIndex, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }
}

impl From<PermutermIndex> for SharedIndex {
    fn from(index: PermutermIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }
}
