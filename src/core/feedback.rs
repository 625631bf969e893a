//! Per-letter feedback for a guess
//!
//! Each letter of a guess is classified against the answer as:
//! - `CorrectPosition`: same letter at the same position (green)
//! - `PresentElsewhere`: letter occurs in an unmatched position of the answer (yellow)
//! - `Absent`: no unmatched occurrence left (gray)
//!
//! Duplicate letters are credited exact matches first, then left to right,
//! so a guess never receives more non-absent marks for a letter than the
//! answer contains.

use super::Word;
use crate::error::GameError;
use rustc_hash::FxHashMap;

/// Classification of a letter relative to the answer
///
/// Variants are declared in increasing order of informativeness, so the
/// derived `Ord` ranks `CorrectPosition` > `PresentElsewhere` > `Absent` > `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MatchKind {
    /// Not guessed yet
    #[default]
    Unknown,
    /// Not in the answer, or every occurrence is already accounted for
    Absent,
    /// In the answer, but at another position
    PresentElsewhere,
    /// In the answer at this position
    CorrectPosition,
}

impl MatchKind {
    /// Emoji square used for shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::CorrectPosition => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent | Self::Unknown => '⬜',
        }
    }
}

/// A single classified letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterResult {
    pub letter: char,
    pub kind: MatchKind,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: char, kind: MatchKind) -> Self {
        Self { letter, kind }
    }
}

/// Classify every letter of `guess` against `answer`
///
/// # Algorithm
/// 1. First pass: mark exact position matches and remove them from a fresh
///    copy of the answer's letter counts. Everything else starts `Absent`.
/// 2. Second pass, left to right over the non-matching positions: if the
///    letter still has a remaining count, mark it `PresentElsewhere` and
///    consume one.
///
/// # Errors
/// Returns [`GameError::LengthMismatch`] if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{classify, MatchKind, Word};
///
/// let answer = Word::new("abcab").unwrap();
/// let guess = Word::new("aabbb").unwrap();
/// let kinds: Vec<MatchKind> = classify(&answer, &guess)
///     .unwrap()
///     .into_iter()
///     .map(|r| r.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     vec![
///         MatchKind::CorrectPosition,
///         MatchKind::PresentElsewhere,
///         MatchKind::PresentElsewhere,
///         MatchKind::Absent,
///         MatchKind::CorrectPosition,
///     ]
/// );
/// ```
pub fn classify(answer: &Word, guess: &Word) -> Result<Vec<LetterResult>, GameError> {
    classify_with_counts(answer, &answer.char_counts(), guess)
}

/// Classify using a precomputed letter-count table for `answer`
///
/// The table is copied; the caller's counts are never modified.
fn classify_with_counts(
    answer: &Word,
    answer_counts: &FxHashMap<u8, usize>,
    guess: &Word,
) -> Result<Vec<LetterResult>, GameError> {
    if answer.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            answer: answer.text().to_string(),
            guess: guess.text().to_string(),
        });
    }

    let mut kinds = vec![MatchKind::Absent; guess.len()];
    let mut answer_available = answer_counts.clone();

    // First pass: exact position matches
    for (kind, (&letter, &expected)) in kinds
        .iter_mut()
        .zip(guess.chars().iter().zip(answer.chars()))
    {
        if letter == expected {
            *kind = MatchKind::CorrectPosition;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: remaining occurrences, left to right
    for (kind, &letter) in kinds.iter_mut().zip(guess.chars()) {
        if *kind == MatchKind::Absent
            && let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            *kind = MatchKind::PresentElsewhere;
            *count -= 1;
        }
    }

    Ok(guess
        .chars()
        .iter()
        .zip(kinds)
        .map(|(&letter, kind)| LetterResult::new(char::from(letter), kind))
        .collect())
}

/// The outcome of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    letters: Vec<LetterResult>,
}

impl GuessRecord {
    /// Classify `guess` against `answer` and record the result
    ///
    /// # Errors
    /// Returns [`GameError::LengthMismatch`] if the words differ in length.
    pub fn evaluate(answer: &Word, guess: Word) -> Result<Self, GameError> {
        Self::evaluate_with_counts(answer, &answer.char_counts(), guess)
    }

    pub(crate) fn evaluate_with_counts(
        answer: &Word,
        answer_counts: &FxHashMap<u8, usize>,
        guess: Word,
    ) -> Result<Self, GameError> {
        let letters = classify_with_counts(answer, answer_counts, &guess)?;
        Ok(Self {
            word: guess,
            letters,
        })
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-position results, in guess order
    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.letters
    }

    /// True when every letter is in its correct position
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|r| r.kind == MatchKind::CorrectPosition)
    }

    /// Number of letters with the given classification
    #[must_use]
    pub fn count(&self, kind: MatchKind) -> usize {
        self.letters.iter().filter(|r| r.kind == kind).count()
    }

    /// Convert to an emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|r| r.kind.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::MatchKind::{Absent, CorrectPosition, PresentElsewhere};

    fn kinds(answer: &str, guess: &str) -> Vec<MatchKind> {
        let answer = Word::new(answer).unwrap();
        let guess = Word::new(guess).unwrap();
        classify(&answer, &guess)
            .unwrap()
            .into_iter()
            .map(|r| r.kind)
            .collect()
    }

    const PAIRS: &[(&str, &str)] = &[
        ("abcab", "aabbb"),
        ("erase", "speed"),
        ("floor", "robot"),
        ("slate", "crane"),
        ("abba", "babb"),
        ("mesas", "sassy"),
        ("abcb", "bcce"),
        ("eerie", "eeeee"),
        ("geese", "eager"),
        ("llama", "hello"),
        ("abcde", "bbzzz"),
    ];

    #[test]
    fn classify_duplicate_letters_left_to_right() {
        assert_eq!(
            kinds("abcab", "aabbb"),
            vec![
                CorrectPosition,
                PresentElsewhere,
                PresentElsewhere,
                Absent,
                CorrectPosition
            ]
        );
    }

    #[test]
    fn classify_later_green_leaves_earlier_duplicate_absent() {
        // The only B is taken by the green at position 1
        assert_eq!(
            kinds("abcde", "bbzzz"),
            vec![Absent, CorrectPosition, Absent, Absent, Absent]
        );
    }

    #[test]
    fn classify_long_repeated_letters() {
        let word = Word::new("a".repeat(300)).unwrap();
        let results = classify(&word, &word).unwrap();
        assert_eq!(results.len(), 300);
        assert!(results.iter().all(|r| r.kind == CorrectPosition));
    }

    #[test]
    fn classify_all_absent() {
        assert_eq!(kinds("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn classify_all_correct() {
        assert_eq!(kinds("crane", "crane"), vec![CorrectPosition; 5]);
    }

    #[test]
    fn classify_duplicates_in_guess_and_answer() {
        // ERASE has two E's, so both E's in SPEED are yellow
        assert_eq!(
            kinds("erase", "speed"),
            vec![PresentElsewhere, Absent, PresentElsewhere, PresentElsewhere, Absent]
        );
    }

    #[test]
    fn classify_green_takes_priority_over_earlier_yellow() {
        // Second O of ROBOT is green; first O still gets FLOOR's other O
        assert_eq!(
            kinds("floor", "robot"),
            vec![PresentElsewhere, PresentElsewhere, Absent, CorrectPosition, Absent]
        );

        // ABBA vs BABB: the green B consumes one B, the first B the other
        assert_eq!(
            kinds("abba", "babb"),
            vec![PresentElsewhere, PresentElsewhere, CorrectPosition, Absent]
        );
    }

    #[test]
    fn classify_surplus_duplicates_are_absent() {
        assert_eq!(
            kinds("mesas", "sassy"),
            vec![PresentElsewhere, PresentElsewhere, CorrectPosition, Absent, Absent]
        );
        assert_eq!(
            kinds("eerie", "eeeee"),
            vec![CorrectPosition, CorrectPosition, Absent, Absent, CorrectPosition]
        );
    }

    #[test]
    fn classify_keeps_guess_letters() {
        let answer = Word::new("slate").unwrap();
        let guess = Word::new("crane").unwrap();
        let letters: String = classify(&answer, &guess)
            .unwrap()
            .iter()
            .map(|r| r.letter)
            .collect();
        assert_eq!(letters, "crane");
    }

    #[test]
    fn classify_rejects_length_mismatch() {
        let answer = Word::new("goal").unwrap();
        let guess = Word::new("guess").unwrap();
        assert!(matches!(
            classify(&answer, &guess),
            Err(GameError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn correct_count_matches_equal_positions() {
        for &(answer, guess) in PAIRS {
            let equal = answer
                .bytes()
                .zip(guess.bytes())
                .filter(|(a, g)| a == g)
                .count();
            let correct = kinds(answer, guess)
                .into_iter()
                .filter(|&k| k == CorrectPosition)
                .count();
            assert_eq!(correct, equal, "{answer} vs {guess}");
        }
    }

    #[test]
    fn marks_per_letter_never_exceed_answer_count() {
        for &(answer, guess) in PAIRS {
            let answer_word = Word::new(answer).unwrap();
            let counts = answer_word.char_counts();
            let results = classify(&answer_word, &Word::new(guess).unwrap()).unwrap();

            for letter in guess.bytes() {
                let marked = results
                    .iter()
                    .filter(|r| r.letter == char::from(letter) && r.kind != Absent)
                    .count();
                let available = counts.get(&letter).copied().unwrap_or(0);
                assert!(marked <= available, "{answer} vs {guess}: '{}'", char::from(letter));
            }
        }
    }

    #[test]
    fn match_kind_informativeness_order() {
        assert!(CorrectPosition > PresentElsewhere);
        assert!(PresentElsewhere > Absent);
        assert!(Absent > MatchKind::Unknown);
        assert_eq!(MatchKind::default(), MatchKind::Unknown);
    }

    #[test]
    fn guess_record_summary() {
        let answer = Word::new("slate").unwrap();
        let record = GuessRecord::evaluate(&answer, Word::new("stale").unwrap()).unwrap();

        assert_eq!(record.word().text(), "stale");
        assert!(!record.is_correct());
        assert_eq!(record.count(CorrectPosition), 3);
        assert_eq!(record.count(PresentElsewhere), 2);
        assert_eq!(record.to_emoji(), "🟩🟨🟩🟨🟩");
    }

    #[test]
    fn guess_record_correct() {
        let answer = Word::new("slate").unwrap();
        let record = GuessRecord::evaluate(&answer, answer.clone()).unwrap();
        assert!(record.is_correct());
        assert_eq!(record.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
