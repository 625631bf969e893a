//! Wordle Game
//!
//! A word-guessing game engine with duplicate-aware letter feedback, a
//! line-based CLI and a terminal UI.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GuessRecord, MatchKind, Word};
//!
//! let answer = Word::new("slate").unwrap();
//! let record = GuessRecord::evaluate(&answer, Word::new("stale").unwrap()).unwrap();
//!
//! assert_eq!(record.letters()[0].kind, MatchKind::CorrectPosition);
//! assert_eq!(record.to_emoji(), "🟩🟨🟩🟨🟩");
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;

pub use error::GameError;
