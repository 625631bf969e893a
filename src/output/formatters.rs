//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterKnowledge, MatchKind};
use crate::game::MIN_PLAYABLE_WORDS;
use crate::wordlists::Dictionary;
use colored::{Color, ColoredString, Colorize};

/// Terminal color for a classification
#[must_use]
pub const fn match_color(kind: MatchKind) -> Color {
    match kind {
        MatchKind::CorrectPosition => Color::Green,
        MatchKind::PresentElsewhere => Color::Yellow,
        MatchKind::Absent => Color::BrightBlack,
        MatchKind::Unknown => Color::White,
    }
}

/// A single uppercase letter colored by its classification
#[must_use]
pub fn colorize_letter(letter: char, kind: MatchKind) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match kind {
        MatchKind::Unknown => text.color(match_color(kind)),
        _ => text.color(match_color(kind)).bold(),
    }
}

/// Render a guess as spaced, colored uppercase letters, e.g. "C R A N E"
#[must_use]
pub fn format_guess(record: &GuessRecord) -> String {
    record
        .letters()
        .iter()
        .map(|r| colorize_letter(r.letter, r.kind).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the alphabet with everything known so far
///
/// Letters known to be absent are left out; unknown letters are plain.
#[must_use]
pub fn format_knowledge(knowledge: &LetterKnowledge) -> String {
    knowledge
        .iter()
        .filter(|&(_, kind)| kind != MatchKind::Absent)
        .map(|(letter, kind)| colorize_letter(letter, kind).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Word sizes with enough words for a game, e.g. "3, 4, 5"
#[must_use]
pub fn format_word_sizes(dictionary: &Dictionary) -> String {
    dictionary
        .length_histogram()
        .into_iter()
        .filter(|&(_, count)| count >= MIN_PLAYABLE_WORDS)
        .map(|(length, _)| length.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder row for a turn not yet played
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    vec!["_"; word_length].join(" ")
}
