//! Cumulative per-letter knowledge
//!
//! Tracks the most informative classification seen for each letter `a`-`z`
//! across all guesses of a game.

use super::{LetterResult, MatchKind};

const ALPHABET_SIZE: usize = 26;

/// Best-known classification of every letter of the alphabet
///
/// Starts with every letter `Unknown`. Merging never downgrades a letter:
/// once a letter is known to be in its correct position somewhere, a later
/// `Absent` for that letter (a surplus duplicate) leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterKnowledge {
    letters: [MatchKind; ALPHABET_SIZE],
}

impl Default for LetterKnowledge {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterKnowledge {
    /// Knowledge with every letter `Unknown`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [MatchKind::Unknown; ALPHABET_SIZE],
        }
    }

    /// Merge one guess's results
    ///
    /// Each letter is updated only if the new classification is strictly more
    /// informative than the current one. Characters outside `a`-`z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterKnowledge, LetterResult, MatchKind};
    ///
    /// let mut knowledge = LetterKnowledge::new();
    /// knowledge.merge(&[LetterResult::new('x', MatchKind::CorrectPosition)]);
    /// knowledge.merge(&[LetterResult::new('x', MatchKind::Absent)]);
    ///
    /// assert_eq!(knowledge.get('x'), MatchKind::CorrectPosition);
    /// ```
    pub fn merge(&mut self, results: &[LetterResult]) {
        for result in results {
            if let Some(index) = letter_index(result.letter) {
                let current = &mut self.letters[index];
                if result.kind > *current {
                    *current = result.kind;
                }
            }
        }
    }

    /// Current classification of a letter
    ///
    /// Uppercase letters are folded to lowercase; anything else is `Unknown`.
    #[must_use]
    pub fn get(&self, letter: char) -> MatchKind {
        letter_index(letter).map_or(MatchKind::Unknown, |index| self.letters[index])
    }

    /// Iterate over `(letter, kind)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, MatchKind)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.letters.iter().copied())
    }
}

fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| usize::from(lower as u8 - b'a'))
}
