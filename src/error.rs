//! Game error types
//!
//! One enum covers dictionary setup, feedback classification and per-turn
//! guess validation. Callers decide what to retry with [`GameError::is_recoverable`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up or playing a game
#[derive(Debug, Error)]
pub enum GameError {
    /// Fewer than two dictionary words have the requested length
    #[error("There are only {available} words of length {length}; try a different word size")]
    InvalidWordSize { length: usize, available: usize },

    /// The word list could not be read
    #[error("Cannot read word list {}: {source}", path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Answer and guess handed to the feedback engine differ in length
    #[error("Answer '{answer}' and guess '{guess}' have different lengths")]
    LengthMismatch { answer: String, guess: String },

    /// Guess does not have the configured word length
    #[error("Enter a word of valid length ({expected} letters, got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// Guess is not in the valid-word set
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),

    /// Guess was already submitted this session
    #[error("'{0}' was already guessed; enter a new word")]
    DuplicateGuess(String),

    /// A guess was submitted after the game was won or lost
    #[error("The game is already over")]
    SessionTerminated,
}

impl GameError {
    /// Whether the player can simply be prompted again
    ///
    /// True for per-turn validation failures and for an unusable word size.
    /// Everything else is fatal to the current session.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidWordSize { .. }
                | Self::InvalidLength { .. }
                | Self::NotInDictionary(_)
                | Self::DuplicateGuess(_)
        )
    }
}
