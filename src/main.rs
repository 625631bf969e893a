//! Wordle Game - CLI
//!
//! Guess the hidden word in a TUI or simple line mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{PlayOptions, run_check, run_simple},
    game::DEFAULT_MAX_TURNS,
    interactive::{App, run_tui},
    wordlists::loader::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Word-guessing game with colored letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to play; asked for interactively when omitted
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    turns: usize,

    /// Seed for a reproducible answer
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show the feedback for one guess against an answer
    Check {
        /// The hidden word
        answer: String,

        /// The guessed word
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = PlayOptions {
        word_length: cli.length,
        max_turns: cli.turns,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let dictionary = WordListSource::from_arg(&cli.wordlist).load()?;
            run_tui(App::new(&dictionary, options))
        }
        Commands::Simple => {
            let dictionary = WordListSource::from_arg(&cli.wordlist).load()?;
            run_simple(&dictionary, &options)
        }
        Commands::Check { answer, guess } => run_check(&answer, &guess),
    }
}
