//! Deduplicating sink for found words.
//!
//! A word can be reachable along several distinct paths; it is recorded once.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ResultCollector {
    found: HashSet<String>,
}

impl ResultCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`, returning `true` if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        // skip the allocation on repeat finds
        if self.found.contains(word) {
            return false;
        }
        self.found.insert(word.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Finalize into a sequence. Order is unspecified.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.found.into_iter().collect()
    }
}
