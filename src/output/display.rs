//! Display functions for game progress and results

use super::formatters::{empty_row, format_guess, format_knowledge};
use crate::core::GuessRecord;
use crate::error::GameError;
use crate::game::GameSession;
use colored::Colorize;
use std::io::{self, Write};

/// Print the board: every guess so far, placeholder rows, then the alphabet
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    for record in session.guesses() {
        writeln!(out, "  {}", format_guess(record))?;
    }
    for _ in 0..session.remaining_turns() {
        writeln!(out, "  {}", empty_row(session.word_length()).bright_black())?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", format_knowledge(session.knowledge()))?;
    Ok(())
}

/// Announce a freshly set-up game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_setup_summary<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "There are {} words of length {}",
        session.valid_word_count().to_string().bright_cyan().bold(),
        session.word_length()
    )?;
    writeln!(
        out,
        "You have {} guesses.",
        session.config().max_turns.to_string().bright_cyan()
    )
}

/// Show why a guess or word size was rejected
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, error: &GameError) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ {error}").red())
}

/// Print the end-of-game banner and guess history
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;

    let turns = session.guesses().len();
    if session.guesses().last().is_some_and(GuessRecord::is_correct) {
        writeln!(out, "{}", "  🎉 You win! 🎉".bright_green().bold())?;
        writeln!(
            out,
            "  Solved in {} {}",
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        )?;
    } else if let Some(answer) = session.revealed_answer() {
        writeln!(
            out,
            "  {} {}",
            "It was".red().bold(),
            answer.to_uppercase().bright_yellow().bold()
        )?;
    }

    writeln!(out, "\n  Guess history:")?;
    for (i, record) in session.guesses().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word().text().to_uppercase().bright_white().bold(),
            record.to_emoji()
        )?;
    }

    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Print the result of classifying one guess against an answer
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_check_result<W: Write>(
    out: &mut W,
    answer: &str,
    record: &GuessRecord,
) -> io::Result<()> {
    writeln!(
        out,
        "Answer: {}",
        answer.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "Guess:  {}", format_guess(record))?;
    writeln!(out, "        {}", record.to_emoji())
}
