//! TUI rendering with ratatui
//!
//! Guess grid, keyboard panel and status for the game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GuessRecord, LetterKnowledge, MatchKind};
use crate::game::GameSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard rows shown in the letter panel
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a letter tile
fn kind_style(kind: MatchKind) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match kind {
        MatchKind::CorrectPosition => base.fg(Color::Black).bg(Color::Green),
        MatchKind::PresentElsewhere => base.fg(Color::Black).bg(Color::Yellow),
        MatchKind::Absent => base.fg(Color::White).bg(Color::DarkGray),
        MatchKind::Unknown => Style::default().fg(Color::White),
    }
}

fn guess_line(record: &GuessRecord) -> Line<'static> {
    let spans: Vec<Span> = record
        .letters()
        .iter()
        .flat_map(|r| {
            [
                Span::styled(
                    format!(" {} ", r.letter.to_ascii_uppercase()),
                    kind_style(r.kind),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn board_lines(session: &GameSession, pending: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = session.guesses().iter().map(guess_line).collect();

    let placeholder = Style::default().fg(Color::DarkGray);
    for turn in 0..session.remaining_turns() {
        // The first open row echoes what is being typed
        let typed: Vec<char> = if turn == 0 && !session.is_over() {
            pending.chars().collect()
        } else {
            Vec::new()
        };
        let spans: Vec<Span> = (0..session.word_length())
            .flat_map(|i| {
                let tile = typed.get(i).map_or_else(
                    || Span::styled(" _ ", placeholder),
                    |c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            kind_style(MatchKind::Unknown),
                        )
                    },
                );
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let content = app.session.as_ref().map_or_else(
        || vec![Line::from("Choose a word size to begin")],
        |session| board_lines(session, &app.input_buffer),
    );

    let board = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn keyboard_lines(knowledge: &LetterKnowledge) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(
                            c.to_ascii_uppercase().to_string(),
                            kind_style(knowledge.get(c)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let knowledge = app
        .session
        .as_ref()
        .map(|s| *s.knowledge())
        .unwrap_or_default();

    let keyboard = Paragraph::new(keyboard_lines(&knowledge))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WordSize => (
            " What word size? | Enter to confirm ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Guess => (
            " Enter your guess ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn status_text(app: &App) -> [String; 3] {
    let game = app.session.as_ref().map_or_else(
        || "No game".to_string(),
        |s| {
            format!(
                "Turns left: {} | Length: {}",
                s.remaining_turns(),
                s.word_length()
            )
        },
    );
    let stats = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let help = match app.input_mode {
        InputMode::GameOver => "n: New Game | q: Quit",
        InputMode::WordSize | InputMode::Guess => "Enter: Submit | Esc: Quit",
    };
    [game, stats, help.to_string()]
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let [game, stats, help] = status_text(app);
    f.render_widget(Paragraph::new(game).alignment(Alignment::Center), chunks[0]);
    f.render_widget(Paragraph::new(stats).alignment(Alignment::Center), chunks[1]);
    f.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
