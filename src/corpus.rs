// Permuterm Corpus Loader
// Plain-text ingestion: tokenizes documents and feeds their words to an index

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::info;

use crate::index::PermutermIndex;
use crate::types::{CorpusError, DocId};

/// A run of alphabetic characters
const WORD_PATTERN: &str = r"\p{Alphabetic}+";

/// Splits text into normalized (lowercase, alphabetic-only) words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_re: Regex,
}

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Result<Self, CorpusError> {
        Ok(Self {
            word_re: Regex::new(WORD_PATTERN)?,
        })
    }

    /// Normalized words of `text`, in order of appearance
    ///
    /// # Example
    /// ```
    /// # use permuterm::corpus::Tokenizer;
    /// let tokenizer = Tokenizer::new().unwrap();
    /// assert_eq!(tokenizer.tokenize("Hello, World 42!"), vec!["hello", "world"]);
    /// ```
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// A document fed into the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Assigned id, starting at 1
    pub id: DocId,

    /// Display name (usually the file name)
    pub name: String,

    /// Number of tokens indexed from the document
    pub tokens: usize,
}

/// Registry of loaded documents
///
/// Assigns document ids in load order and pushes every token of each
/// document into a [`PermutermIndex`] with its 0-based offset.
#[derive(Debug, Clone)]
pub struct Corpus {
    tokenizer: Tokenizer,
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Result<Self, CorpusError> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            documents: Vec::new(),
        })
    }

    /// Tokenize `text` and index it as a new document
    pub fn add_text(&mut self, name: &str, text: &str, index: &mut PermutermIndex) -> DocId {
        let id = self.documents.len() as DocId + 1;
        let tokens = self.tokenizer.tokenize(text);

        for (position, word) in tokens.iter().enumerate() {
            index.insert(word, id, position);
        }

        info!(doc_id = id, name, tokens = tokens.len(), "Loaded document");
        self.documents.push(Document {
            id,
            name: name.to_string(),
            tokens: tokens.len(),
        });
        id
    }

    /// Read a UTF-8 text file and index it as a new document
    pub fn add_file(
        &mut self,
        path: &Path,
        index: &mut PermutermIndex,
    ) -> Result<DocId, CorpusError> {
        let bytes = fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| CorpusError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(self.add_text(&name, &text, index))
    }

    /// Loaded documents in id order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document by id
    pub fn document(&self, id: DocId) -> Option<&Document> {
        let idx = (id as usize).checked_sub(1)?;
        self.documents.get(idx)
    }

    /// The tokenizer used for every document
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
