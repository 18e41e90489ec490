//! In-memory play statistics for the current process

use super::{GameState, MAX_ROWS, Outcome};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    /// Count a finished game, if `outcome` finished one
    pub fn record(&mut self, outcome: &Outcome, state: &GameState) {
        match outcome {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(state.active_row) {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.total_games += 1,
            _ => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
