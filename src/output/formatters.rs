//! Formatting utilities for terminal output

use crate::core::{Cell, LetterStatus};
use colored::{ColoredString, Colorize};

/// Emoji square for a cell
#[must_use]
pub const fn cell_emoji(cell: Cell) -> char {
    match cell {
        Cell::Correct(_) => '🟩',
        Cell::Partial(_) => '🟨',
        Cell::Incorrect(_) => '⬛',
        Cell::Empty | Cell::Pending(_) => '⬜',
    }
}

/// Format a row of cells as an emoji string
#[must_use]
pub fn cells_to_emoji(cells: &[Cell]) -> String {
    cells.iter().map(|&c| cell_emoji(c)).collect()
}

/// Colored tile for a cell, e.g. ` A ` on green
#[must_use]
pub fn cell_tile(cell: Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter().map_or(' ', |l| l.as_char()));
    match cell {
        Cell::Correct(_) => text.black().on_green().bold(),
        Cell::Partial(_) => text.black().on_yellow().bold(),
        Cell::Incorrect(_) => text.white().on_bright_black().bold(),
        Cell::Pending(_) => text.bright_white().bold(),
        Cell::Empty => text.on_black(),
    }
}

/// Colored keyboard key for a letter status
#[must_use]
pub fn key_label(letter: char, status: LetterStatus) -> ColoredString {
    let text = letter.to_string();
    match status {
        LetterStatus::Correct => text.green().bold(),
        LetterStatus::Partial => text.yellow().bold(),
        LetterStatus::Incorrect => text.bright_black(),
        LetterStatus::Unknown => text.white(),
    }
}
