//! Board cells and per-letter hint status

use super::Letter;

/// One letter slot on the board
///
/// `Pending` cells only ever appear in the row being typed. Scored rows hold
/// `Correct`, `Partial` or `Incorrect` and unreached rows stay `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Pending(Letter),
    Correct(Letter),
    Partial(Letter),
    Incorrect(Letter),
}

impl Cell {
    /// Letter held by the cell, if any
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Self::Empty => None,
            Self::Pending(l) | Self::Correct(l) | Self::Partial(l) | Self::Incorrect(l) => Some(l),
        }
    }

    /// Scoring result carried by a finalized cell
    ///
    /// Returns `None` for `Empty` and `Pending`.
    #[must_use]
    pub const fn status(self) -> Option<LetterStatus> {
        match self {
            Self::Correct(_) => Some(LetterStatus::Correct),
            Self::Partial(_) => Some(LetterStatus::Partial),
            Self::Incorrect(_) => Some(LetterStatus::Incorrect),
            Self::Empty | Self::Pending(_) => None,
        }
    }

    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct(_) | Self::Partial(_) | Self::Incorrect(_))
    }
}

/// Best-known information about a letter, as shown on the keyboard
///
/// Variants are declared in priority order, so `Ord` ranks
/// `Correct > Partial > Incorrect > Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Incorrect,
    Partial,
    Correct,
}
