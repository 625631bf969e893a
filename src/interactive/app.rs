//! TUI application state and logic

use crate::commands::PlayOptions;
use crate::game::{GameSession, GameState};
use crate::output::formatters::format_word_sizes;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the panel
const MAX_MESSAGES: usize = 5;

/// Longest word size the input box accepts, in digits
const MAX_SIZE_DIGITS: usize = 2;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub options: PlayOptions,
    rng: StdRng,
    pub session: Option<GameSession>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    WordSize,
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, options: PlayOptions) -> Self {
        let mut app = Self {
            dictionary,
            options,
            rng: options.rng(),
            session: None,
            input_mode: InputMode::WordSize,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Welcome! {} words loaded. Esc quits at any time.",
                    dictionary.len()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        };
        app.new_game();
        app
    }

    /// Start over, reusing the configured word length if there is one
    pub fn new_game(&mut self) {
        self.session = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::WordSize;

        if let Some(length) = self.options.word_length {
            self.start_game(length);
        } else {
            self.add_message("What word size?", MessageStyle::Info);
        }
    }

    /// Handle a word size typed into the input box
    pub fn handle_word_size(&mut self, input: &str) {
        self.input_buffer.clear();
        match input.trim().parse::<usize>() {
            Ok(length) => self.start_game(length),
            Err(_) => {
                self.add_message("Try a different word size", MessageStyle::Error);
                self.add_size_hint();
            }
        }
    }

    fn start_game(&mut self, length: usize) {
        match GameSession::new(self.options.config(length), self.dictionary, &mut self.rng) {
            Ok(session) => {
                let text = format!(
                    "There are {} words of length {length}. You have {} guesses.",
                    session.valid_word_count(),
                    session.config().max_turns
                );
                self.session = Some(session);
                self.input_mode = InputMode::Guess;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => {
                self.input_mode = InputMode::WordSize;
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.add_size_hint();
            }
        }
    }

    fn add_size_hint(&mut self) {
        let text = format!("Available word sizes: {}", format_word_sizes(self.dictionary));
        self.add_message(&text, MessageStyle::Info);
    }

    /// Submit the input box as a guess
    pub fn handle_guess(&mut self, input: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.submit_guess(input).map(|_| ()) {
            Ok(()) => {
                self.input_buffer.clear();
                if session.is_over() {
                    self.finish_game();
                }
            }
            Err(e) => {
                if !e.is_recoverable() {
                    self.input_mode = InputMode::GameOver;
                }
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        self.stats.total_games += 1;
        let (text, style) = if session.state() == GameState::Won {
            self.stats.games_won += 1;
            let turns = session.guesses().len();
            (
                format!(
                    "🎉 You win! Solved in {turns} {}",
                    if turns == 1 { "guess" } else { "guesses" }
                ),
                MessageStyle::Success,
            )
        } else {
            (
                format!(
                    "It was {}",
                    session.revealed_answer().unwrap_or_default().to_uppercase()
                ),
                MessageStyle::Error,
            )
        };

        self.input_mode = InputMode::GameOver;
        self.add_message(&text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::WordSize => match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < MAX_SIZE_DIGITS {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_word_size(&input);
                }
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    let limit = self.session.as_ref().map_or(0, GameSession::word_length);
                    if self.input_buffer.len() < limit {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_guess(&input);
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored before an
/// event-loop error is returned.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
