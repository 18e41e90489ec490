//! Keyboard hint aggregation
//!
//! The on-screen keyboard shows, per letter, the best information gathered
//! from submitted guesses. [`aggregate`] folds one scored row into it.

use super::{ALPHABET_LEN, Cell, Letter, LetterStatus};

/// QWERTY rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// How a scored cell updates an existing keyboard entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardRule {
    /// Every scored cell overwrites its letter, left to right.
    ///
    /// A later cell wins over an earlier one in the same guess, and a new
    /// guess can downgrade a letter that was `Correct` before.
    #[default]
    Overwrite,
    /// Keep the higher-priority status; entries never downgrade.
    Priority,
}

/// Per-letter status for all 26 letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardStatus {
    keys: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardStatus {
    /// Keyboard with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> LetterStatus {
        self.keys[letter.index()]
    }

    #[inline]
    pub const fn set(&mut self, letter: Letter, status: LetterStatus) {
        self.keys[letter.index()] = status;
    }

    /// Letters with their status, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, LetterStatus)> + '_ {
        Letter::all().zip(self.keys.iter().copied())
    }

    /// Keyboard laid out in QWERTY rows for rendering
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(Letter, LetterStatus)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| {
                row.chars()
                    .filter_map(Letter::new)
                    .map(|letter| (letter, self.get(letter)))
                    .collect()
            })
            .collect()
    }

    /// True while nothing has been learned about any letter
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.keys.iter().all(|&s| s == LetterStatus::Unknown)
    }
}

/// Merge a scored row into the keyboard, returning the updated keyboard
///
/// Cells without a scoring result (`Empty`, `Pending`) are skipped.
///
/// # Examples
/// ```
/// use wordle_game::core::{Cell, KeyboardRule, KeyboardStatus, Letter, LetterStatus, aggregate};
///
/// let e = Letter::new('e').unwrap();
/// let keyboard = aggregate(
///     &KeyboardStatus::new(),
///     &[Cell::Correct(e), Cell::Incorrect(e)],
///     KeyboardRule::Priority,
/// );
/// assert_eq!(keyboard.get(e), LetterStatus::Correct);
/// ```
#[must_use]
pub fn aggregate(current: &KeyboardStatus, cells: &[Cell], rule: KeyboardRule) -> KeyboardStatus {
    let mut updated = *current;

    for cell in cells {
        let (Some(letter), Some(status)) = (cell.letter(), cell.status()) else {
            continue;
        };
        match rule {
            KeyboardRule::Overwrite => updated.set(letter, status),
            KeyboardRule::Priority => {
                if status > updated.get(letter) {
                    updated.set(letter, status);
                }
            }
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn new_keyboard_is_unknown() {
        let keyboard = KeyboardStatus::new();
        assert!(keyboard.is_blank());
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn rows_follow_qwerty_layout() {
        let rows = KeyboardStatus::new().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
        assert_eq!(rows[0][0].0, letter('Q'));
        assert_eq!(rows[2][6].0, letter('M'));
    }

    #[test]
    fn overwrite_last_cell_wins_within_guess() {
        let e = letter('E');
        let cells = [Cell::Correct(e), Cell::Incorrect(e)];
        let keyboard = aggregate(&KeyboardStatus::new(), &cells, KeyboardRule::Overwrite);
        assert_eq!(keyboard.get(e), LetterStatus::Incorrect);
    }

    #[test]
    fn overwrite_can_downgrade_across_guesses() {
        let a = letter('A');
        let first = aggregate(
            &KeyboardStatus::new(),
            &[Cell::Correct(a)],
            KeyboardRule::Overwrite,
        );
        let second = aggregate(&first, &[Cell::Partial(a)], KeyboardRule::Overwrite);
        assert_eq!(second.get(a), LetterStatus::Partial);
    }

    #[test]
    fn priority_never_downgrades() {
        let e = letter('E');
        let cells = [Cell::Correct(e), Cell::Incorrect(e), Cell::Partial(e)];
        let keyboard = aggregate(&KeyboardStatus::new(), &cells, KeyboardRule::Priority);
        assert_eq!(keyboard.get(e), LetterStatus::Correct);

        let again = aggregate(&keyboard, &[Cell::Incorrect(e)], KeyboardRule::Priority);
        assert_eq!(again.get(e), LetterStatus::Correct);
    }

    #[test]
    fn unscored_cells_are_skipped() {
        let x = letter('X');
        let cells = [Cell::Empty, Cell::Pending(x)];
        for rule in [KeyboardRule::Overwrite, KeyboardRule::Priority] {
            assert!(aggregate(&KeyboardStatus::new(), &cells, rule).is_blank());
        }
    }

    #[test]
    fn aggregate_leaves_input_untouched() {
        let z = letter('Z');
        let before = KeyboardStatus::new();
        let after = aggregate(&before, &[Cell::Incorrect(z)], KeyboardRule::Overwrite);
        assert!(before.is_blank());
        assert_eq!(after.get(z), LetterStatus::Incorrect);
        assert_eq!(after.get(letter('A')), LetterStatus::Unknown);
    }
}
