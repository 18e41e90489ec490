//! Display functions for game state

use super::formatters::{cell_tile, cells_to_emoji, key_label};
use crate::core::{Cell, KeyboardStatus, Word};
use crate::game::{GameState, Statistics};
use colored::Colorize;

/// Print the board, one row per line
pub fn print_board(state: &GameState) {
    for guess in &state.rows {
        let tiles: Vec<String> = guess.cells.iter().map(|&c| cell_tile(c).to_string()).collect();
        println!("  {}", tiles.join(" "));
    }
}

/// Print the keyboard in QWERTY rows, indented like a real keyboard
pub fn print_keyboard(keyboard: &KeyboardStatus) {
    println!();
    for (indent, row) in keyboard.rows().iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&(letter, status)| key_label(letter.as_char(), status).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(state: &GameState) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    if state.won {
        let guesses = state.active_row;
        println!(
            "  {} Solved in {} {}",
            "You win! : )".bright_green().bold(),
            guesses.to_string().bright_cyan().bold(),
            if guesses == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!("  {}", "You lose. : (".red().bold());
    }
    println!(
        "  The word was \"{}\"",
        state.secret.to_string().bright_yellow().bold()
    );

    println!("\n  Guess history:");
    for guess in state.submitted() {
        println!("    {} {}", guess.text(), cells_to_emoji(&guess.cells));
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print feedback for a single guess against a secret
pub fn print_score(secret: &Word, guess: &Word, cells: &[Cell]) {
    println!("\nSecret: {}", secret.to_string().bright_yellow().bold());
    println!("Guess:  {guess}\n");
    let tiles: Vec<String> = cells.iter().map(|&c| cell_tile(c).to_string()).collect();
    println!("  {}", tiles.join(" "));
    println!("  {}", cells_to_emoji(cells));
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = "█".repeat(count);
        println!("  {guesses}: {} {count}", bar.green());
    }
}
