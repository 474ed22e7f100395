//! TUI application state and logic

use crate::core::alphabet;
use crate::error::GameError;
use crate::game::{Engine, Outcome, Session, StatsSnapshot, Turn};
use crate::storage::{StatsStore, WordListStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'e, W: WordListStore, S: StatsStore> {
    pub engine: &'e Engine<W, S>,
    pub session: Session,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
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

impl<'e, W: WordListStore, S: StatsStore> App<'e, W, S> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no target word can be drawn.
    pub fn new(engine: &'e Engine<W, S>, mut rng: StdRng) -> Result<Self> {
        let session = engine.new_session(&mut rng)?;

        let mut app = Self {
            engine,
            session,
            messages: Vec::new(),
            input_mode: InputMode::Playing,
            should_quit: false,
            rng,
        };
        app.add_message(
            "Guess the five-letter word in six tries. Type in Russian.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        match self.engine.new_session(&mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if !alphabet::is_letter(alphabet::to_lower(c)) {
            self.add_message("Switch to the Russian keyboard layout", MessageStyle::Error);
            return;
        }
        self.session.input_letter(c);
    }

    pub fn delete_letter(&mut self) {
        self.session.delete_letter();
    }

    pub fn submit(&mut self) {
        match self.engine.submit(&mut self.session) {
            Ok(Turn::Evaluated(report)) => {
                if let Some(outcome) = &report.outcome {
                    self.finish(outcome);
                }
                if let Some(err) = &report.stats_error {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
            Ok(_) => {}
            Err(GameError::IncompleteRow { .. }) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(GameError::NotInDictionary(word)) => {
                self.add_message(
                    &format!("'{}' is not in the dictionary", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        self.input_mode = InputMode::GameOver;
        match outcome {
            Outcome::Won { attempts } => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost { target } => {
                self.add_message(
                    &format!("The word was {}", target.text().to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
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

    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.engine.snapshot()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | 'й') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n' | 'т') => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.delete_letter(),
                KeyCode::Enter => self.submit(),
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
/// during rendering or event handling.
pub fn run_tui<W: WordListStore, S: StatsStore>(app: App<'_, W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, S>(terminal: &mut Terminal<B>, mut app: App<'_, W, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordListStore,
    S: StatsStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
