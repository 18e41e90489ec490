//! Simple line-mode game
//!
//! Text-based play without the TUI: one guess per line.

use crate::game::{Event, Ignored, Outcome, Statistics, Store};
use crate::output::{print_board, print_game_over, print_keyboard, print_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    /// Keep reading guesses
    Continue,
    /// The current game just ended
    GameOver,
    /// Leave line mode
    Quit,
}

/// Apply one line of input to the store
///
/// `:new` resets, `:quit` exits, anything else is entered as a guess.
pub fn handle_line(store: &mut Store, stats: &mut Statistics, line: &str) -> LineAction {
    match line.trim().to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => return LineAction::Quit,
        ":new" | ":n" => {
            store.dispatch(Event::Reset);
            println!("\n🔄 New game started!\n");
            return LineAction::Continue;
        }
        "" => return LineAction::Continue,
        _ => {}
    }

    let outcome = store.enter_guess(line.trim());
    stats.record(&outcome, store.state());

    match outcome {
        Outcome::Won | Outcome::Lost => LineAction::GameOver,
        Outcome::Rejected(error) => {
            println!("❌ {error}");
            store.dispatch(Event::AcknowledgeError);
            LineAction::Continue
        }
        Outcome::Ignored(Ignored::RowIncomplete) => {
            println!("❌ Not enough letters");
            LineAction::Continue
        }
        Outcome::Ignored(Ignored::RowFull) => {
            println!("❌ Too many letters");
            LineAction::Continue
        }
        Outcome::Ignored(Ignored::GameOver | Ignored::NoActiveRow) => LineAction::GameOver,
        Outcome::Applied | Outcome::Ignored(Ignored::RowEmpty) => LineAction::Continue,
    }
}

/// Run the line-mode game loop on stdin
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple(store: &mut Store) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║         Wordle - Line Mode               ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type a five-letter guess and press Enter.");
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    let mut lines = io::stdin().lock().lines();
    let mut stats = Statistics::default();

    loop {
        print_board(store.state());
        print_keyboard(&store.state().keyboard);

        let label = format!("Guess {}", store.state().active_row + 1);
        let Some(line) = prompt(&mut lines, &label)? else {
            break;
        };

        match handle_line(store, &mut stats, &line) {
            LineAction::Continue => {}
            LineAction::Quit => break,
            LineAction::GameOver => {
                print_board(store.state());
                print_game_over(store.state());
                print_statistics(&stats);

                let again = prompt(&mut lines, "Play again? (yes/no)")?.unwrap_or_default();
                if matches!(again.to_lowercase().as_str(), "yes" | "y") {
                    store.dispatch(Event::Reset);
                    println!("\n🔄 New game started!\n");
                } else {
                    break;
                }
            }
        }
    }

    println!("\n👋 {}\n", "Thanks for playing!".bright_white());
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<I>(lines: &mut I, label: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{label}: ");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.map(|l| l.trim().to_string()))
}
