//! Core domain types for the game
//!
//! Letters, words, board cells, and the two pure feedback functions: letter
//! scoring and keyboard aggregation. Nothing here knows about sessions or I/O.

mod cell;
mod keyboard;
mod letter;
mod scoring;
mod word;

pub use cell::{Cell, LetterStatus};
pub use keyboard::{KEYBOARD_ROWS, KeyboardRule, KeyboardStatus, aggregate};
pub use letter::{ALPHABET_LEN, Letter};
pub use scoring::{ScoringRule, is_solved, score};
pub use word::{WORD_LEN, Word, WordError};
