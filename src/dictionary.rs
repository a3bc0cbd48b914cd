//! `dictionary` — the word and prefix sets the search engine consults.
//!
//! Every non-empty prefix of every word is materialized into a flat `HashSet`.
//! That costs memory proportional to the sum of word lengths, but it turns the
//! pruning check in the solver into a single hash lookup.
//!
//! No normalization happens here: words are stored exactly as supplied.

use std::collections::HashSet;

use crate::word_list::WordList;

/// Immutable lookup structure built once from a word list.
///
/// Invariant: every member of `words` is also a member of `prefixes`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl DictionaryIndex {
    /// Build the index from any sequence of words.
    ///
    /// Each word is inserted into the word set, and each of its non-empty
    /// prefixes (the word itself included) into the prefix set. An empty
    /// string lands in the word set but contributes no prefix.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = DictionaryIndex::default();
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    /// Convenience wrapper over [`DictionaryIndex::build`] for a loaded [`WordList`].
    #[must_use]
    pub fn from_word_list(word_list: &WordList) -> Self {
        Self::build(word_list.iter())
    }

    fn insert(&mut self, word: &str) {
        // char boundaries, so multi-byte letters never split
        for (i, c) in word.char_indices() {
            let end = i + c.len_utf8();
            if !self.prefixes.contains(&word[..end]) {
                self.prefixes.insert(word[..end].to_string());
            }
        }
        self.words.insert(word.to_string());
    }

    /// Exact membership in the word set.
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Exact membership in the prefix set.
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct prefixes (words included).
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
