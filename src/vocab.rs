// Permuterm Word Table
// Interns indexed words to compact ids; doubles as the word-existence set

use crate::types::WordId;
use rustc_hash::FxHashMap;

/// Interner mapping each distinct indexed word to a [`WordId`]
///
/// Ids are dense and assigned in first-seen order, so they can index
/// parallel vectors (see `PostingStore`).
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    /// Word → id mapping
    word_to_id: FxHashMap<String, WordId>,

    /// Id → word mapping (for decoding)
    id_to_word: Vec<String>,
}

impl WordTable {
    /// Create an empty word table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a word, returning its id and whether it was newly added
    ///
    /// Panics once ids would no longer fit in a [`WordId`].
    pub fn intern(&mut self, word: &str) -> (WordId, bool) {
        if let Some(&id) = self.word_to_id.get(word) {
            return (id, false);
        }

        let id = word_id(self.id_to_word.len());
        self.word_to_id.insert(word.to_string(), id);
        self.id_to_word.push(word.to_string());
        (id, true)
    }

    /// Get the id of an indexed word
    pub fn get_id(&self, word: &str) -> Option<WordId> {
        self.word_to_id.get(word).copied()
    }

    /// Get the word for an id
    pub fn get_word(&self, id: WordId) -> Option<&str> {
        self.id_to_word.get(id as usize).map(|s| s.as_str())
    }

    /// Check whether a word is indexed
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Iterate `(id, word)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.id_to_word
            .iter()
            .enumerate()
            .map(|(slot, word)| (word_id(slot), word.as_str()))
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    /// Check if no word has been interned
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }
}

/// Id for the word stored at slot `slot`
///
/// # Panics
/// If more than `u32::MAX + 1` distinct words are interned; ids would
/// otherwise alias.
fn word_id(slot: usize) -> WordId {
    WordId::try_from(slot).expect("word table exceeds u32::MAX words")
}
