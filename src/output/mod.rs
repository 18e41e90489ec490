//! Terminal output formatting
//!
//! Display utilities for the line-mode front-end and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_score, print_statistics};
