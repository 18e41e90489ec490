//! Wordle - CLI
//!
//! Play in a TUI (default) or line by line, or score a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    core::{KeyboardRule, ScoringRule},
    game::{Rules, Store},
    logging::{self, LogTarget},
    output::print_score,
    wordlists::{Dictionary, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in five tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, built-in list) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How repeated letters in a guess are scored
    #[arg(long, global = true, value_enum, default_value_t = ScoringArg::Literal)]
    scoring: ScoringArg,

    /// How keyboard hints merge across guesses
    #[arg(long, global = true, value_enum, default_value_t = KeyboardArg::Overwrite)]
    keyboard: KeyboardArg,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a given secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScoringArg {
    /// Containment check; repeated letters can all be marked present
    Literal,
    /// Each secret letter is credited at most once
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeyboardArg {
    /// Later cells overwrite earlier ones
    Overwrite,
    /// Keys never downgrade
    Priority,
}

impl From<ScoringArg> for ScoringRule {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Literal => Self::Literal,
            ScoringArg::Strict => Self::Strict,
        }
    }
}

impl From<KeyboardArg> for KeyboardRule {
    fn from(arg: KeyboardArg) -> Self {
        match arg {
            KeyboardArg::Overwrite => Self::Overwrite,
            KeyboardArg::Priority => Self::Priority,
        }
    }
}

impl Cli {
    fn rules(&self) -> Rules {
        Rules {
            scoring: self.scoring.into(),
            keyboard: self.keyboard.into(),
        }
    }

    fn log_target(&self, command: &Commands) -> LogTarget<'_> {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path),
            (None, Commands::Play) => LogTarget::Off,
            (None, _) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let _guard = logging::init(cli.log_target(&command))?;

    let dictionary = loader::load(&cli.wordlist)?;
    tracing::info!(
        words = dictionary.len(),
        secrets = dictionary.secret_pool().len(),
        wordlist = %cli.wordlist,
        "Dictionary loaded"
    );

    let rules = cli.rules();

    match command {
        Commands::Play => run_play_command(dictionary, rules, cli.seed),
        Commands::Simple => run_simple_command(dictionary, rules, cli.seed),
        Commands::Score { secret, guess } => {
            run_score_command(&secret, &guess, rules.scoring, &dictionary)
        }
    }
}

fn run_play_command(dictionary: Dictionary, rules: Rules, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(Store::new(dictionary, rules, seed));
    run_tui(app)
}

fn run_simple_command(dictionary: Dictionary, rules: Rules, seed: Option<u64>) -> Result<()> {
    let mut store = Store::new(dictionary, rules, seed);
    run_simple(&mut store)
}

fn run_score_command(
    secret: &str,
    guess: &str,
    rule: ScoringRule,
    dictionary: &Dictionary,
) -> Result<()> {
    let result = score_words(secret, guess, rule, dictionary)?;

    print_score(&result.secret, &result.guess, &result.cells);
    if !result.guess_in_dictionary {
        println!("\n  Note: {} is not in the word list", result.guess);
    }
    Ok(())
}
