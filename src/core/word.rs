//! Five-letter game word
//!
//! Words are stored uppercase, the way they appear on the board. Dictionary
//! files are lowercase; construction normalizes either way.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in a word, and columns on the board
pub const WORD_LEN: usize = 5;

/// A five-letter word made of uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: [Letter; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from text, case-insensitively
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        if bytes.len() != WORD_LEN {
            return Err(WordError::InvalidLength(bytes.len()));
        }

        let letters = bytes
            .iter()
            .map(|&byte| Letter::from_byte(byte).ok_or(WordError::InvalidCharacters))
            .collect::<Result<Vec<_>, _>>()?;

        // Length checked above
        let letters: [Letter; WORD_LEN] = letters
            .try_into()
            .map_err(|v: Vec<Letter>| WordError::InvalidLength(v.len()))?;

        Ok(Self { letters })
    }

    /// Build a word from already-validated letters
    #[inline]
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LEN]) -> Self {
        Self { letters }
    }

    /// Uppercase text of the word
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    /// Letters in board order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LEN] {
        &self.letters
    }

    /// Letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Count of each letter in the word
    ///
    /// Used by duplicate-aware scoring.
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
