//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and a statistics status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, alphabet::KEYBOARD_ROWS};
use crate::storage::{StatsStore, WordListStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordListStore, S: StatsStore>(f: &mut Frame, app: &App<'_, W, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(15), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("КВОРДЛ - угадай слово")
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

/// Background colour for a scored tile or key
const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

fn tile(letter: Option<char>, status: Option<LetterStatus>) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |c| format!(" {} ", c.to_uppercase()));
    let style = match status {
        Some(s) => Style::default()
            .fg(Color::Black)
            .bg(status_color(s))
            .add_modifier(Modifier::BOLD),
        None if letter.is_some() => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(text, style)
}

fn render_board<W: WordListStore, S: StatsStore>(f: &mut Frame, app: &App<'_, W, S>, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for row in 0..session.max_attempts() {
        let mut spans = Vec::with_capacity(10);
        if let Some((guess, feedback)) = session.attempts().get(row) {
            for (&c, &s) in guess.chars().iter().zip(feedback.statuses()) {
                spans.push(tile(Some(c), Some(s)));
                spans.push(Span::raw(" "));
            }
        } else if row == session.current_row() && !session.is_over() {
            for i in 0..crate::core::WORD_LENGTH {
                spans.push(tile(session.row_letters().get(i).copied(), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..crate::core::WORD_LENGTH {
                spans.push(tile(None, None));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<W: WordListStore, S: StatsStore>(
    f: &mut Frame,
    app: &App<'_, W, S>,
    area: Rect,
) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = keyboard.get(c).map_or_else(
                        || Style::default().fg(Color::White),
                        |s| Style::default().fg(Color::Black).bg(status_color(s)),
                    );
                    Span::styled(format!(" {} ", c.to_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages<W: WordListStore, S: StatsStore>(
    f: &mut Frame,
    app: &App<'_, W, S>,
    area: Rect,
) {
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

    let (title, color) = match app.input_mode {
        InputMode::Playing => (" Messages ", Color::White),
        InputMode::GameOver => (" Game over | Enter: New Game | Esc: Quit ", Color::Green),
    };

    let messages_list = List::new(messages).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(color)),
    );

    f.render_widget(messages_list, area);
}

fn render_status<W: WordListStore, S: StatsStore>(f: &mut Frame, app: &App<'_, W, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.1}% | Avg: {:.1}",
        stats.total_games, stats.win_rate, stats.average_attempts
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Backspace: Delete | Ctrl+N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
