//! Dictionary of playable words
//!
//! Normalizes raw word-list entries and answers length queries.

use super::DICTIONARY;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// A deduplicated set of lowercase words of mixed lengths
///
/// Entries are trimmed and lowercased; blank lines and entries containing
/// anything other than the letters `a`-`z` are skipped.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["Crane", "slate ", "crane", "", "it's"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.words_of_length(5).contains("crane"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| Word::new(line).ok())
            .map(|word| word.text().to_string())
            .collect();

        Self { words }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lines(DICTIONARY.iter().copied())
    }

    /// All words of exactly `length` letters
    ///
    /// Returns an empty set when nothing matches.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> FxHashSet<String> {
        self.words
            .iter()
            .filter(|word| word.len() == length)
            .cloned()
            .collect()
    }

    /// Number of words per length, in ascending length order
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in &self.words {
            *histogram.entry(word.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
