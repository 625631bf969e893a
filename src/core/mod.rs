//! Core domain types for the game
//!
//! Words, per-letter feedback and cumulative letter knowledge.
//! Everything here is pure and independent of terminal I/O.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{GuessRecord, LetterResult, MatchKind, classify};
pub use knowledge::LetterKnowledge;
pub use word::{Word, WordError};
