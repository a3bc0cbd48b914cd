//! `word_list` — Module to load the dictionary word list for the Boggle solver
//!
//! This module reads a word list either from a file or from an in-memory string (the latter
//! is what WebAssembly builds use, since direct file I/O isn't allowed there).
//!
//! The parsing logic:
//! - One word per line.
//! - Trailing whitespace (including a `\r` from CRLF files) is stripped.
//! - Empty lines are skipped.
//! - Optionally, words are ASCII-lowercased.
//!
//! No other validation happens: duplicates, punctuation and mixed case are passed through
//! untouched, because the dictionary index treats its input as a plain set of strings.

use crate::errors::WordListError;

/// A loaded word list, in file order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Example: `["feal", "alk", "tea", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Arguments
    /// * `contents`  — The raw file contents, one word per line.
    /// * `lowercase` — Lowercase every word (ASCII only).
    #[must_use]
    pub fn parse_from_str(contents: &str, lowercase: bool) -> WordList {
        let words = contents
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if lowercase {
                    line.to_ascii_lowercase()
                } else {
                    line.to_string()
                }
            })
            .collect();

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Io`] if the file cannot be read as UTF-8 text.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        lowercase: bool,
    ) -> Result<WordList, WordListError> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|source| WordListError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;

        let word_list = Self::parse_from_str(&data, lowercase);
        log::debug!("read {} words from {}", word_list.len(), path_ref.display());
        Ok(word_list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let word_list = WordList::parse_from_str("cat\ndog\nbird", false);
        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_strips_trailing_whitespace() {
        let word_list = WordList::parse_from_str("cat\r\ndog  \nbird\t\n", false);
        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_keeps_leading_whitespace() {
        let word_list = WordList::parse_from_str("  cat\n", false);
        assert_eq!(word_list.words, vec!["  cat"]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let word_list = WordList::parse_from_str("cat\n\n\ndog\n   \n", false);
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let word_list = WordList::parse_from_str("dog\ncat\ndog", false);
        assert_eq!(word_list.words, vec!["dog", "cat", "dog"]);
    }

    #[test]
    fn test_parse_lowercase() {
        let word_list = WordList::parse_from_str("CAT\nDog\nbird", true);
        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);

        let untouched = WordList::parse_from_str("CAT", false);
        assert_eq!(untouched.words, vec!["CAT"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let word_list = WordList::parse_from_str("", false);
        assert!(word_list.is_empty());
        assert_eq!(word_list.len(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("definitely/not/here.txt", false).unwrap_err();
        assert_eq!(err.code(), "W001");
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
