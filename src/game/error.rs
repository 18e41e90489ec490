//! Recoverable game errors

use std::fmt;

/// Error surfaced to the player through `GameState::last_error`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameError {
    /// The submitted row is not in the dictionary (holds the uppercase text)
    NotAWord(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord(word) => write!(f, "{word} not found in word list."),
        }
    }
}

impl std::error::Error for GameError {}
