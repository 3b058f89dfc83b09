//! `dictionary` — load and normalize the word source for wordsense
//!
//! A dictionary is read either from a file or from an in-memory string (the
//! latter is what the WebAssembly build uses, since browsers can't read
//! arbitrary paths).
//!
//! The parsing logic:
//! - Each line of the input is one word.
//! - Lines are trimmed; blank lines are skipped.
//! - Every word is normalized with [`normalize`] (lower-case plus the fixed
//!   diacritic substitutions), exactly as queries are.
//! - Order and duplicates are preserved. Pattern queries report matches in
//!   dictionary order, repeats included.
//!
//! A loaded [`Dictionary`] is read-only. Queries work on a [`DictionaryView`],
//! which borrows the words and adds a deduplicated lookup set.

use std::collections::HashSet;

use crate::errors::DictionaryError;
use crate::word_char::normalize;

/// Ordered, normalized word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Normalized words in source order, duplicates kept.
    /// Example: `["hallo", "welt", "aepfel", ...]`
    pub words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from already-split words, normalizing each.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary { words: words.into_iter().map(|w| normalize(w.as_ref())).collect() }
    }

    /// Parse a line-oriented word source held in memory.
    ///
    /// WASM-safe: no filesystem access.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        Self::parse_from_str_filtered(contents, |_| true)
    }

    /// Like [`Dictionary::parse_from_str`], but keep only normalized words for
    /// which `keep` returns true.
    ///
    /// The CLI uses this to hold on to words of the query's length only.
    pub fn parse_from_str_filtered<F>(contents: &str, keep: F) -> Dictionary
    where
        F: Fn(&str) -> bool,
    {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(normalize)
            .filter(|word| keep(word.as_str()))
            .collect();

        Dictionary { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::SourceUnavailable`] if the file cannot be
    /// read as UTF-8 text.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        Self::load_from_path_filtered(path, |_| true)
    }

    /// Native-only: read from a file path, keeping only words accepted by `keep`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::SourceUnavailable`] if the file cannot be
    /// read as UTF-8 text.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path_filtered<P, F>(path: P, keep: F) -> Result<Dictionary, DictionaryError>
    where
        P: AsRef<std::path::Path>,
        F: Fn(&str) -> bool,
    {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| {
            DictionaryError::SourceUnavailable { path: path_ref.display().to_string(), source }
        })?;

        Ok(Self::parse_from_str_filtered(&data, keep))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Borrowed view over every word.
    #[must_use]
    pub fn view(&self) -> DictionaryView<'_> {
        DictionaryView::new(self.words.iter().map(String::as_str).collect())
    }
}

/// The two views a query needs: the ordered sequence (duplicates preserved)
/// and a set (duplicates collapsed) for membership tests.
#[derive(Debug, Clone, Default)]
pub struct DictionaryView<'a> {
    words: Vec<&'a str>,
    lookup: HashSet<&'a str>,
}

impl<'a> DictionaryView<'a> {
    #[must_use]
    pub fn new(words: Vec<&'a str>) -> Self {
        let lookup = words.iter().copied().collect();
        DictionaryView { words, lookup }
    }

    /// Ordered words, duplicates included.
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Number of words in the ordered view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.lookup.len()
    }

    /// A new view holding only the words accepted by `keep`, order preserved.
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> DictionaryView<'a>
    where
        F: FnMut(&str) -> bool,
    {
        DictionaryView::new(self.words.iter().copied().filter(|w| keep(*w)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dictionary = Dictionary::parse_from_str("helm\nlehm\nmehl\n");
        assert_eq!(dictionary.words, vec!["helm", "lehm", "mehl"]);
    }

    #[test]
    fn test_parse_normalizes() {
        let dictionary = Dictionary::parse_from_str("Hallo\nWelt\nÄpfel\nÖl\nÜber\n");
        assert_eq!(dictionary.words, vec!["hallo", "welt", "aepfel", "oel", "ueber"]);
    }

    #[test]
    fn test_parse_filtered() {
        let dictionary = Dictionary::parse_from_str_filtered("test\nword\nhello\nworld\n", |w| w.chars().count() == 4);
        assert_eq!(dictionary.words, vec!["test", "word"]);
    }

    #[test]
    fn test_filter_sees_normalized_words() {
        // "Öl" is 3 characters long after normalization
        let dictionary = Dictionary::parse_from_str_filtered("Öl\nab\n", |w| w.chars().count() == 3);
        assert_eq!(dictionary.words, vec!["oel"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Dictionary::parse_from_str("").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let dictionary = Dictionary::parse_from_str("hello\nhello\nworld\n");
        assert_eq!(dictionary.words, vec!["hello", "hello", "world"]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let dictionary = Dictionary::parse_from_str("  cat \r\n\n\ndog\r\n   \n");
        assert_eq!(dictionary.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_from_words_normalizes() {
        let dictionary = Dictionary::from_words(["Mehl", "STRASSE", "Straße"]);
        assert_eq!(dictionary.words, vec!["mehl", "strasse", "strasse"]);
    }

    #[test]
    fn test_view_collapses_duplicates_in_lookup() {
        let dictionary = Dictionary::from_words(["hello", "hello", "world"]);
        let view = dictionary.view();
        assert_eq!(view.len(), 3);
        assert_eq!(view.distinct_len(), 2);
        assert!(view.contains("hello"));
        assert!(!view.contains("hallo"));
    }

    #[test]
    fn test_view_retain_preserves_order() {
        let dictionary = Dictionary::from_words(["test", "other", "best", "test"]);
        let view = dictionary.view().retain(|w| w.len() == 4);
        assert_eq!(view.words(), &["test", "best", "test"]);
        assert!(!view.contains("other"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load_from_path("/definitely/not/here/wordlist.txt").unwrap_err();
        assert_eq!(err.code(), "D001");
        assert!(err.to_string().contains("/definitely/not/here/wordlist.txt"));
    }
}
