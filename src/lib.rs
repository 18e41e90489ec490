//! Wordle Game
//!
//! A five-letter word game engine built around a pure reducer: every player
//! event turns one immutable [`game::GameState`] into the next. Scoring and
//! keyboard hints come in a classic literal mode and a duplicate-aware mode.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::game::{Event, Outcome, Rules, Store};
//! use wordle_game::wordlists::loader::embedded_dictionary;
//!
//! let dictionary = embedded_dictionary().unwrap();
//! let mut store = Store::new(dictionary, Rules::default(), Some(42));
//!
//! let outcome = store.enter_guess("crane");
//! println!("{outcome:?}, {} guesses left", store.state().guesses_left());
//!
//! if matches!(outcome, Outcome::Rejected(_)) {
//!     store.dispatch(Event::AcknowledgeError);
//! }
//! ```

// Letters, words, scoring and keyboard hints
pub mod core;

// Game state, events and the reducer
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
