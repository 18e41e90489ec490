//! Letter scoring for a completed guess
//!
//! Turns a guess into per-position feedback against the secret word:
//! - Correct = letter in the right position
//! - Partial = letter in the word, wrong position
//! - Incorrect = letter not in the word

use super::{Cell, WORD_LEN, Word};

/// How partial matches are counted when a guess repeats letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Per-position containment check.
    ///
    /// Every non-matching letter that appears anywhere in the secret is
    /// `Partial`, so a repeated guess letter can be credited more than once
    /// (secret ALLOY, guess LLAMA marks both A's partial).
    #[default]
    Literal,
    /// Duplicate-aware scoring.
    ///
    /// Exact matches consume secret letters first, then partials are handed
    /// out left to right from whatever remains.
    Strict,
}

/// Score `guess` against `secret` under the given rule
///
/// # Examples
/// ```
/// use wordle_game::core::{Cell, ScoringRule, Word, score};
///
/// let secret = Word::new("apple").unwrap();
/// let cells = score(&secret, &secret, ScoringRule::Literal);
/// assert!(cells.iter().all(|c| matches!(c, Cell::Correct(_))));
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word, rule: ScoringRule) -> [Cell; WORD_LEN] {
    match rule {
        ScoringRule::Literal => score_literal(secret, guess),
        ScoringRule::Strict => score_strict(secret, guess),
    }
}

fn score_literal(secret: &Word, guess: &Word) -> [Cell; WORD_LEN] {
    let mut cells = [Cell::Empty; WORD_LEN];

    for (i, (&letter, cell)) in guess.letters().iter().zip(cells.iter_mut()).enumerate() {
        *cell = if secret.letter_at(i) == letter {
            Cell::Correct(letter)
        } else if secret.has_letter(letter) {
            Cell::Partial(letter)
        } else {
            Cell::Incorrect(letter)
        };
    }

    cells
}

fn score_strict(secret: &Word, guess: &Word) -> [Cell; WORD_LEN] {
    let mut cells = [Cell::Empty; WORD_LEN];
    let mut available = secret.letter_counts();

    // First pass: exact matches, removed from the available pool
    for (i, &letter) in guess.letters().iter().enumerate() {
        if secret.letter_at(i) == letter {
            cells[i] = Cell::Correct(letter);
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: partials from what is left, everything else incorrect
    for (i, &letter) in guess.letters().iter().enumerate() {
        if cells[i].is_scored() {
            continue;
        }
        cells[i] = match available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Cell::Partial(letter)
            }
            _ => Cell::Incorrect(letter),
        };
    }

    cells
}

/// True when every cell is an exact match
#[must_use]
pub fn is_solved(cells: &[Cell]) -> bool {
    cells.iter().all(|c| matches!(c, Cell::Correct(_)))
}
