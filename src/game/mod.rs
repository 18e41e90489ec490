//! Game session: state, events and the reducer that connects them
//!
//! The reducer is a pure function of `(state, event)`; the [`Store`] is the
//! only place a current state is kept.

mod error;
mod event;
mod reducer;
mod rules;
mod state;
mod stats;
mod store;

pub use error::GameError;
pub use event::{Event, Ignored, Outcome};
pub use reducer::{Reducer, Transition};
pub use rules::Rules;
pub use state::{BOARD_WIDTH, GameState, Guess, MAX_ROWS};
pub use stats::Statistics;
pub use store::Store;
