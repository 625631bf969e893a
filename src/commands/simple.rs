//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use super::PlayOptions;
use crate::game::GameSession;
use crate::output::formatters::format_word_sizes;
use crate::output::{print_board, print_game_over, print_rejection, print_setup_summary};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Typed instead of a guess to leave the game
pub const QUIT_COMMAND: &str = ":quit";

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(dictionary: &Dictionary, options: &PlayOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Wordle - Simple Mode                      ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden word. After each guess the letters are colored:\n")?;
    writeln!(out, "  - {} correct letter, correct position", "green".green().bold())?;
    writeln!(out, "  - {} letter is elsewhere in the word", "yellow".yellow().bold())?;
    writeln!(out, "  - {} letter is not in the word\n", "gray".bright_black().bold())?;
    writeln!(out, "Type '{QUIT_COMMAND}' to exit\n")?;

    play_simple(&mut input, &mut out, dictionary, options)
}

/// Play games until the player declines another or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_simple<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    dictionary: &Dictionary,
    options: &PlayOptions,
) -> Result<()> {
    let mut rng = options.rng();

    loop {
        let Some(mut session) = start_session(input, out, dictionary, options, &mut rng)? else {
            break;
        };

        print_setup_summary(out, &session)?;
        writeln!(out)?;

        if play_round(input, out, &mut session)? == RoundEnd::Quit {
            break;
        }

        print_game_over(out, &session)?;
        match prompt(input, out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => break,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one game to completion, or until the player quits
///
/// # Errors
///
/// Returns an error if I/O fails or the session rejects a guess for a
/// reason the player cannot fix.
pub fn play_round<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    session: &mut GameSession,
) -> Result<RoundEnd> {
    while !session.is_over() {
        print_board(out, session)?;

        let label = format!("Guess ({} left)", session.remaining_turns());
        let Some(guess) = prompt(input, out, &label)? else {
            return Ok(RoundEnd::Quit);
        };
        if guess.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(RoundEnd::Quit);
        }

        match session.submit_guess(&guess) {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => print_rejection(out, &e)?,
            Err(e) => return Err(e.into()),
        }
        writeln!(out)?;
    }

    print_board(out, session)?;
    Ok(RoundEnd::Finished)
}

/// Set up a session, asking for a word size until a playable one is given
///
/// Returns `None` when input ends or the player quits.
fn start_session<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    out: &mut W,
    dictionary: &Dictionary,
    options: &PlayOptions,
    rng: &mut G,
) -> Result<Option<GameSession>> {
    let mut requested = options.word_length;

    loop {
        let length = if let Some(length) = requested.take() {
            length
        } else {
            let Some(line) = prompt(input, out, "What word size")? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case(QUIT_COMMAND) {
                return Ok(None);
            }
            if let Ok(length) = line.parse::<usize>() {
                length
            } else {
                print_size_hint(out, dictionary)?;
                continue;
            }
        };

        match GameSession::new(options.config(length), dictionary, rng) {
            Ok(session) => return Ok(Some(session)),
            Err(e) if e.is_recoverable() => {
                print_rejection(out, &e)?;
                print_size_hint(out, dictionary)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_size_hint<W: Write>(out: &mut W, dictionary: &Dictionary) -> io::Result<()> {
    writeln!(out, "Try a different word size")?;
    writeln!(out, "Available word sizes: {}", format_word_sizes(dictionary))
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
