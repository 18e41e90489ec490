//! Player events and transition outcomes

use super::GameError;
use crate::core::Letter;
use std::fmt;

/// Everything a front-end can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Start a new game with a freshly drawn secret
    Reset,
    /// Dismiss the current error
    AcknowledgeError,
    /// Type a letter into the active row
    InputLetter(Letter),
    /// Delete the last typed letter
    Backspace,
    /// Submit the active row as a guess
    Submit,
}

impl Event {
    /// Event for a typed character, if it is a letter
    #[must_use]
    pub const fn letter(ch: char) -> Option<Self> {
        match Letter::new(ch) {
            Some(letter) => Some(Self::InputLetter(letter)),
            None => None,
        }
    }
}

/// Which guard turned an event into a no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// The game is already won or lost
    GameOver,
    /// Every row has been used
    NoActiveRow,
    /// The active row already holds five letters
    RowFull,
    /// Nothing to delete
    RowEmpty,
    /// Submit with fewer than five letters
    RowIncomplete,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is over"),
            Self::NoActiveRow => write!(f, "No guesses left"),
            Self::RowFull => write!(f, "Row is full"),
            Self::RowEmpty => write!(f, "Row is empty"),
            Self::RowIncomplete => write!(f, "Not enough letters"),
        }
    }
}

/// What a single event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; the game continues
    Applied,
    /// The submitted guess matched the secret
    Won,
    /// The last row was used without a match
    Lost,
    /// The guess was refused and recorded as `last_error`
    Rejected(GameError),
    /// A guard fired; the state is unchanged
    Ignored(Ignored),
}

impl Outcome {
    /// True if the event left the state exactly as it was
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
