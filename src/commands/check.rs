//! Feedback check command
//!
//! Classifies a single guess against a given answer without starting a game.

use crate::core::{GuessRecord, Word};
use crate::output::print_check_result;
use anyhow::{Context, Result};
use std::io;

/// Classify `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not made of letters, or if their lengths differ.
pub fn check_words(answer: &str, guess: &str) -> Result<GuessRecord> {
    let answer_word = Word::new(answer).with_context(|| format!("Invalid answer '{answer}'"))?;
    let guess_word = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    Ok(GuessRecord::evaluate(&answer_word, guess_word)?)
}

/// Run the check command and print the colored result
///
/// # Errors
///
/// Returns an error if the words are invalid or output cannot be written.
pub fn run_check(answer: &str, guess: &str) -> Result<()> {
    let record = check_words(answer, guess)?;
    print_check_result(&mut io::stdout(), &answer.trim().to_lowercase(), &record)?;
    Ok(())
}
