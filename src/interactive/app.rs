//! TUI application state and logic

use crate::game::{Event, GameState, Ignored, Outcome, Statistics, Store};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub store: Store,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Dispatch(Event),
    Quit,
}

/// Translate a key press into an action for the current state
///
/// Letters, Backspace and Enter drive the board. While an error is shown,
/// Enter or Esc dismisses it. After the game ends, Enter or `n` starts a new
/// one and Esc or `q` quits. Ctrl-C always quits; Ctrl-N always resets.
#[must_use]
pub fn map_key(state: &GameState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::Dispatch(Event::Reset)),
            _ => None,
        };
    }

    if state.is_over() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(Action::Dispatch(Event::Reset)),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc if state.has_error() => {
            Some(Action::Dispatch(Event::AcknowledgeError))
        }
        KeyCode::Char(c) => Event::letter(c).map(Action::Dispatch),
        KeyCode::Backspace => Some(Action::Dispatch(Event::Backspace)),
        KeyCode::Enter => Some(Action::Dispatch(Event::Submit)),
        _ => None,
    }
}

impl App {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            messages: vec![
                Message {
                    text: "Guess the five-letter word!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters, Enter to submit, Backspace to delete.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        self.store.state()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match map_key(self.state(), key) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Dispatch(event)) => self.apply(event),
            None => {}
        }
    }

    /// Dispatch an event and report what happened in the message panel
    pub fn apply(&mut self, event: Event) {
        let outcome = self.store.dispatch(event);
        self.stats.record(&outcome, self.store.state());

        match outcome {
            Outcome::Won => {
                let guesses = self.state().active_row;
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "😅 PHEW! Got it on the last row! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game or q to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                let text = format!("Out of guesses. The word was {}.", self.state().secret);
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter for a new game or q to quit.", MessageStyle::Info);
            }
            Outcome::Rejected(error) => {
                self.add_message(&error.to_string(), MessageStyle::Error);
            }
            Outcome::Ignored(Ignored::RowIncomplete) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Outcome::Applied if event == Event::Reset => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Outcome::Applied | Outcome::Ignored(_) => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let TermEvent::Key(key) = event::read()? {
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

    tracing::info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "Leaving TUI"
    );
    Ok(())
}
