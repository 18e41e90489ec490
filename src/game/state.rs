//! Session state
//!
//! A [`GameState`] is a plain value. The reducer never mutates one in place;
//! every event produces a new state.

use super::GameError;
use crate::core::{Cell, KeyboardStatus, Letter, WORD_LEN, Word};

/// Number of guesses per game
pub const MAX_ROWS: usize = 5;

/// Board columns per guess
pub const BOARD_WIDTH: usize = WORD_LEN;

/// One row of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guess {
    /// Letters typed so far (0..=BOARD_WIDTH)
    pub cursor: usize,
    pub cells: [Cell; BOARD_WIDTH],
}

impl Guess {
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.cursor >= BOARD_WIDTH
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Letters held by the row, in order, if every cell has one
    #[must_use]
    pub fn letters(&self) -> Option<[Letter; BOARD_WIDTH]> {
        let letters: Vec<Letter> = self
            .cells
            .iter()
            .map(|c| c.letter())
            .collect::<Option<_>>()?;
        letters.try_into().ok()
    }

    /// Text typed into the row so far, uppercase
    #[must_use]
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(|c| c.letter())
            .map(Letter::as_char)
            .collect()
    }
}

/// Complete snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub secret: Word,
    /// Row accepting input; `MAX_ROWS` once the board is used up
    pub active_row: usize,
    pub rows: [Guess; MAX_ROWS],
    pub won: bool,
    pub lost: bool,
    pub keyboard: KeyboardStatus,
    pub last_error: Option<GameError>,
}

impl GameState {
    /// Fresh game for the given secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            active_row: 0,
            rows: [Guess::default(); MAX_ROWS],
            won: false,
            lost: false,
            keyboard: KeyboardStatus::new(),
            last_error: None,
        }
    }

    /// True once the game is won or lost
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.lost
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// Row currently being typed, if the board still has room
    #[must_use]
    pub fn active_guess(&self) -> Option<&Guess> {
        self.rows.get(self.active_row)
    }

    /// Rows that have been submitted and scored
    #[must_use]
    pub fn submitted(&self) -> &[Guess] {
        &self.rows[..self.active_row.min(MAX_ROWS)]
    }

    /// Guesses left, counting the active row
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        MAX_ROWS.saturating_sub(self.active_row)
    }
}
