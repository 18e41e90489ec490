//! Session store
//!
//! Owns the single current [`GameState`] and replaces it after every event.
//! Front-ends dispatch events here and read the state back for rendering.

use super::{Event, GameState, Outcome, Reducer, Rules, Transition};
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct Store {
    dictionary: Dictionary,
    rules: Rules,
    rng: StdRng,
    state: GameState,
}

impl Store {
    /// Create a store and start the first game
    ///
    /// With a `seed`, secret selection is reproducible across runs.
    #[must_use]
    pub fn new(dictionary: Dictionary, rules: Rules, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let state = Reducer::new(&dictionary, rules).initial(&mut rng);
        tracing::info!(?rules, seeded = seed.is_some(), "New game started");

        Self {
            dictionary,
            rules,
            rng,
            state,
        }
    }

    /// Create a store around an existing state
    #[must_use]
    pub fn with_state(dictionary: Dictionary, rules: Rules, seed: u64, state: GameState) -> Self {
        Self {
            dictionary,
            rules,
            rng: StdRng::seed_from_u64(seed),
            state,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Apply an event, replacing the current state
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        tracing::trace!(?event, "dispatch");

        let Transition { state, outcome } =
            Reducer::new(&self.dictionary, self.rules).step(&self.state, event, &mut self.rng);

        match &outcome {
            Outcome::Won => {
                tracing::info!(guesses = state.active_row, secret = %state.secret, "Game won");
            }
            Outcome::Lost => tracing::info!(secret = %state.secret, "Game lost"),
            Outcome::Rejected(error) => tracing::debug!(%error, "Guess rejected"),
            Outcome::Ignored(reason) => tracing::trace!(?event, %reason, "Event ignored"),
            Outcome::Applied if event == Event::Reset => tracing::info!("New game started"),
            Outcome::Applied => {}
        }

        self.state = state;
        outcome
    }

    /// Clear the active row, type `text` into it and submit
    ///
    /// Characters that are not letters are skipped. Stops early if the game
    /// ends or an event is ignored before the submit.
    pub fn enter_guess(&mut self, text: &str) -> Outcome {
        while self.state.active_guess().is_some_and(|g| !g.is_empty()) {
            if self.dispatch(Event::Backspace).is_ignored() {
                break;
            }
        }

        for event in text.chars().filter_map(Event::letter) {
            if let outcome @ Outcome::Ignored(_) = self.dispatch(event) {
                return outcome;
            }
        }

        self.dispatch(Event::Submit)
    }
}
