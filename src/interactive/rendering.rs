//! TUI rendering with ratatui
//!
//! Board, keyboard and session panels for interactive play.

use super::app::{App, MessageStyle};
use crate::core::{Cell, LetterStatus};
use crate::game::{GameState, Guess, MAX_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Board rows with a blank line between each, plus borders
const BOARD_HEIGHT: u16 = 11;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Progress and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, app.state(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_banner(f, app.state(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, state: &GameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Min(5),               // Keyboard
        ])
        .split(area);

    render_board(f, state, chunks[0]);
    render_keyboard(f, state, chunks[1]);
}

fn cell_style(cell: Cell) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Pending(_) => base.fg(Color::White),
        Cell::Correct(_) => base.fg(Color::Black).bg(Color::Green),
        Cell::Partial(_) => base.fg(Color::Black).bg(Color::Yellow),
        Cell::Incorrect(_) => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Unknown => Style::default().fg(Color::White),
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Partial => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Incorrect => Style::default().fg(Color::DarkGray),
    }
}

fn board_line(guess: &Guess, active: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(guess.cells.len() * 2);
    for (i, &cell) in guess.cells.iter().enumerate() {
        let symbol = match cell.letter() {
            Some(letter) => format!(" {letter} "),
            None if active && i == guess.cursor => " _ ".to_string(),
            None => " · ".to_string(),
        };
        spans.push(Span::styled(symbol, cell_style(cell)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ROWS * 2);
    for (row, guess) in state.rows.iter().enumerate() {
        let active = !state.is_over() && row == state.active_row;
        lines.push(board_line(guess, active));
        lines.push(Line::default());
    }
    lines.pop();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let lines: Vec<Line> = state
        .keyboard
        .rows()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .flat_map(|(letter, status)| {
                    [
                        Span::styled(format!(" {letter} "), key_style(status)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses used
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_progress(f, app.state(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, state: &GameState, area: Rect) {
    let used = state.active_row.min(MAX_ROWS);
    let percent = u16::try_from(used * 100 / MAX_ROWS).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ROWS}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Error, win and loss banners; the typing hint otherwise
fn render_banner(f: &mut Frame, state: &GameState, area: Rect) {
    let (title, content, color) = if let Some(error) = &state.last_error {
        (
            " Not in word list | Esc or Enter to dismiss ",
            error.to_string(),
            Color::Red,
        )
    } else if state.won {
        (
            " 🎉 You win! : ) | Enter for new game, q to quit ",
            format!("The word was {}", state.secret),
            Color::Green,
        )
    } else if state.lost {
        (
            " You lose. : ( | Enter for new game, q to quit ",
            format!("The word was {}", state.secret),
            Color::Red,
        )
    } else {
        (
            " Type your guess ",
            state.active_guess().map(Guess::text).unwrap_or_default(),
            Color::Yellow,
        )
    };

    let banner = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(banner, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let rules = app.store.rules();
    let rules_text = format!("{:?} / {:?}", rules.scoring, rules.keyboard);
    let mode = Paragraph::new(rules_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.state().is_over() {
        "Enter/Ctrl-N: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
