//! Game reducer
//!
//! `(state, event) -> state'`. Pure and total: every event yields a state,
//! and the only non-determinism is the random source handed in for `Reset`.

use super::{
    BOARD_WIDTH, Event, GameError, GameState, Guess, Ignored, MAX_ROWS, Outcome, Rules,
};
use crate::core::{Cell, Word, aggregate, is_solved, score};
use crate::wordlists::Dictionary;
use rand::Rng;

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: Outcome,
}

/// Applies events against a fixed dictionary and rule set
#[derive(Debug, Clone, Copy)]
pub struct Reducer<'a> {
    dictionary: &'a Dictionary,
    rules: Rules,
}

impl<'a> Reducer<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, rules: Rules) -> Self {
        Self { dictionary, rules }
    }

    /// Start state for a new game
    pub fn initial<R: Rng + ?Sized>(&self, rng: &mut R) -> GameState {
        GameState::new(self.dictionary.sample(rng))
    }

    /// Next state after `event`
    pub fn reduce<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        event: Event,
        rng: &mut R,
    ) -> GameState {
        self.step(state, event, rng).state
    }

    /// Next state after `event`, along with what the event did
    ///
    /// The returned state is always the one [`Reducer::reduce`] would give.
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: &GameState,
        event: Event,
        rng: &mut R,
    ) -> Transition {
        match event {
            Event::Reset => Transition {
                state: self.initial(rng),
                outcome: Outcome::Applied,
            },
            Event::AcknowledgeError => {
                let mut next = state.clone();
                next.last_error = None;
                Transition {
                    state: next,
                    outcome: Outcome::Applied,
                }
            }
            Event::InputLetter(letter) => edit_row(state, |guess| {
                if guess.is_full() {
                    return Err(Ignored::RowFull);
                }
                guess.cells[guess.cursor] = Cell::Pending(letter);
                guess.cursor += 1;
                Ok(())
            }),
            Event::Backspace => edit_row(state, |guess| {
                if guess.is_empty() {
                    return Err(Ignored::RowEmpty);
                }
                guess.cursor -= 1;
                guess.cells[guess.cursor] = Cell::Empty;
                Ok(())
            }),
            Event::Submit => self.submit(state),
        }
    }

    fn submit(&self, state: &GameState) -> Transition {
        let row = match active_row(state) {
            Ok(row) => row,
            Err(reason) => return ignored(state, reason),
        };

        let guess = &state.rows[row];
        let Some(letters) = guess.letters().filter(|_| guess.is_full()) else {
            return ignored(state, Ignored::RowIncomplete);
        };
        let word = Word::from_letters(letters);

        let mut next = state.clone();

        if !self.dictionary.contains_word(&word) {
            let error = GameError::NotAWord(word.text());
            next.last_error = Some(error.clone());
            return Transition {
                state: next,
                outcome: Outcome::Rejected(error),
            };
        }

        let cells = score(&state.secret, &word, self.rules.scoring);
        next.rows[row] = Guess {
            cursor: BOARD_WIDTH,
            cells,
        };
        next.keyboard = aggregate(&state.keyboard, &cells, self.rules.keyboard);
        next.won = is_solved(&cells);
        next.active_row += 1;
        if !next.won && next.active_row == MAX_ROWS {
            next.lost = true;
        }

        let outcome = if next.won {
            Outcome::Won
        } else if next.lost {
            Outcome::Lost
        } else {
            Outcome::Applied
        };
        Transition {
            state: next,
            outcome,
        }
    }
}

/// Apply `edit` to the active row, or report the guard that blocked it
fn edit_row<F>(state: &GameState, edit: F) -> Transition
where
    F: FnOnce(&mut Guess) -> Result<(), Ignored>,
{
    let row = match active_row(state) {
        Ok(row) => row,
        Err(reason) => return ignored(state, reason),
    };

    let mut guess = state.rows[row];
    if let Err(reason) = edit(&mut guess) {
        return ignored(state, reason);
    }

    let mut next = state.clone();
    next.rows[row] = guess;
    Transition {
        state: next,
        outcome: Outcome::Applied,
    }
}

/// Guard shared by letter, backspace and submit
fn active_row(state: &GameState) -> Result<usize, Ignored> {
    if state.is_over() {
        return Err(Ignored::GameOver);
    }
    if state.active_row >= MAX_ROWS {
        return Err(Ignored::NoActiveRow);
    }
    Ok(state.active_row)
}

fn ignored(state: &GameState, reason: Ignored) -> Transition {
    Transition {
        state: state.clone(),
        outcome: Outcome::Ignored(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyboardRule, Letter, LetterStatus, ScoringRule};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["apple", "alloy", "llama", "crane", "slate", "hello", "world", "allee"],
            2,
        )
        .unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn state_for(secret: &str) -> GameState {
        GameState::new(Word::new(secret).unwrap())
    }

    /// Type `word` and submit it
    fn play(reducer: &Reducer, state: &GameState, word: &str) -> Transition {
        let mut rng = rng();
        let mut current = state.clone();
        for ch in word.chars() {
            current = reducer.reduce(&current, Event::InputLetter(letter(ch)), &mut rng);
        }
        reducer.step(&current, Event::Submit, &mut rng)
    }

    #[test]
    fn input_letter_fills_active_row() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let state = state_for("apple");

        let next = reducer.reduce(&state, Event::InputLetter(letter('c')), &mut rng());
        assert_eq!(next.rows[0].cursor, 1);
        assert_eq!(next.rows[0].cells[0], Cell::Pending(letter('C')));
        // Input is a new value
        assert_eq!(state.rows[0].cursor, 0);
    }

    #[test]
    fn input_letter_ignored_when_row_full() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let mut state = state_for("apple");
        for ch in "CRANE".chars() {
            state = reducer.reduce(&state, Event::InputLetter(letter(ch)), &mut rng());
        }

        let transition = reducer.step(&state, Event::InputLetter(letter('X')), &mut rng());
        assert_eq!(transition.outcome, Outcome::Ignored(Ignored::RowFull));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn backspace_on_empty_row_is_noop() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let state = state_for("apple");

        let transition = reducer.step(&state, Event::Backspace, &mut rng());
        assert_eq!(transition.outcome, Outcome::Ignored(Ignored::RowEmpty));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn letter_then_backspace_restores_state() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let start = state_for("apple");
        let state = reducer.reduce(&start, Event::InputLetter(letter('a')), &mut rng());

        let typed = reducer.reduce(&state, Event::InputLetter(letter('q')), &mut rng());
        let back = reducer.reduce(&typed, Event::Backspace, &mut rng());
        assert_eq!(back, state);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let mut state = state_for("apple");
        for ch in "CRA".chars() {
            state = reducer.reduce(&state, Event::InputLetter(letter(ch)), &mut rng());
        }

        let transition = reducer.step(&state, Event::Submit, &mut rng());
        assert_eq!(transition.outcome, Outcome::Ignored(Ignored::RowIncomplete));
        assert_eq!(transition.state, state);
        assert!(transition.state.last_error.is_none());
    }

    #[test]
    fn submit_unknown_word_sets_error_and_keeps_letters() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let state = state_for("apple");

        let transition = play(&reducer, &state, "QQQQQ");
        let expected = GameError::NotAWord("QQQQQ".to_string());
        assert_eq!(transition.outcome, Outcome::Rejected(expected.clone()));

        let next = transition.state;
        assert_eq!(next.last_error, Some(expected));
        assert_eq!(next.active_row, 0);
        assert_eq!(next.rows[0].cursor, 5);
        assert!(next.rows[0].cells.iter().all(|c| matches!(c, Cell::Pending(_))));
        assert!(next.keyboard.is_blank());
    }

    #[test]
    fn error_does_not_block_editing() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let rejected = play(&reducer, &state_for("apple"), "QQQQQ").state;

        let edited = reducer.reduce(&rejected, Event::Backspace, &mut rng());
        assert_eq!(edited.rows[0].cursor, 4);
        assert!(edited.has_error());

        let cleared = reducer.reduce(&edited, Event::AcknowledgeError, &mut rng());
        assert!(!cleared.has_error());
        assert_eq!(cleared.rows, edited.rows);
    }

    #[test]
    fn acknowledge_without_error_changes_nothing() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let state = state_for("apple");
        assert_eq!(reducer.reduce(&state, Event::AcknowledgeError, &mut rng()), state);
    }

    #[test]
    fn valid_submit_scores_row_and_advances() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let transition = play(&reducer, &state_for("alloy"), "llama");

        assert_eq!(transition.outcome, Outcome::Applied);
        let next = transition.state;
        assert_eq!(next.active_row, 1);
        assert_eq!(
            next.rows[0].cells,
            [
                Cell::Partial(letter('L')),
                Cell::Correct(letter('L')),
                Cell::Partial(letter('A')),
                Cell::Incorrect(letter('M')),
                Cell::Partial(letter('A')),
            ]
        );
        assert_eq!(next.keyboard.get(letter('L')), LetterStatus::Correct);
        assert_eq!(next.keyboard.get(letter('A')), LetterStatus::Partial);
        assert_eq!(next.keyboard.get(letter('M')), LetterStatus::Incorrect);
        assert!(!next.won && !next.lost);
    }

    #[test]
    fn overwrite_keyboard_takes_last_cell() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        // ALLEE against APPLE: the final E is correct, the first partial
        let next = play(&reducer, &state_for("apple"), "allee").state;
        assert_eq!(next.keyboard.get(letter('E')), LetterStatus::Correct);
        // The L's are partial in both positions
        assert_eq!(next.keyboard.get(letter('L')), LetterStatus::Partial);
    }

    #[test]
    fn strict_rules_change_scoring() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::corrected());
        let next = play(&reducer, &state_for("alloy"), "llama").state;
        assert_eq!(next.rows[0].cells[4], Cell::Incorrect(letter('A')));
        // Earlier partial A survives the later incorrect A
        assert_eq!(next.keyboard.get(letter('A')), LetterStatus::Partial);
    }

    #[test]
    fn priority_keyboard_keeps_best_across_guesses() {
        let dictionary = dictionary();
        let rules = Rules {
            scoring: ScoringRule::Literal,
            keyboard: KeyboardRule::Priority,
        };
        let reducer = Reducer::new(&dictionary, rules);
        // HELLO against WORLD marks L partial, then correct at position 3
        let first = play(&reducer, &state_for("world"), "hello").state;
        assert_eq!(first.keyboard.get(letter('L')), LetterStatus::Correct);
        let second = play(&reducer, &first, "slate").state;
        assert_eq!(second.keyboard.get(letter('L')), LetterStatus::Correct);
    }

    #[test]
    fn winning_guess_ends_game() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let transition = play(&reducer, &state_for("crane"), "crane");

        assert_eq!(transition.outcome, Outcome::Won);
        let next = transition.state;
        assert!(next.won);
        assert!(!next.lost);
        assert_eq!(next.active_row, 1);

        let after = reducer.step(&next, Event::InputLetter(letter('a')), &mut rng());
        assert_eq!(after.outcome, Outcome::Ignored(Ignored::GameOver));
        assert_eq!(after.state, next);
    }

    #[test]
    fn last_row_miss_loses_same_transition() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let mut state = state_for("crane");

        for _ in 0..MAX_ROWS - 1 {
            let transition = play(&reducer, &state, "slate");
            assert_eq!(transition.outcome, Outcome::Applied);
            state = transition.state;
        }
        let transition = play(&reducer, &state, "hello");
        assert_eq!(transition.outcome, Outcome::Lost);
        assert!(transition.state.lost);
        assert!(!transition.state.won);
        assert_eq!(transition.state.active_row, MAX_ROWS);
    }

    #[test]
    fn winning_on_last_row_is_not_a_loss() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let mut state = state_for("crane");
        for _ in 0..MAX_ROWS - 1 {
            state = play(&reducer, &state, "slate").state;
        }
        let transition = play(&reducer, &state, "crane");
        assert_eq!(transition.outcome, Outcome::Won);
        assert!(transition.state.won);
        assert!(!transition.state.lost);
    }

    #[test]
    fn reset_starts_over_from_any_state() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let won = play(&reducer, &state_for("crane"), "crane").state;

        let fresh = reducer.reduce(&won, Event::Reset, &mut rng());
        assert_eq!(fresh, GameState::new(fresh.secret));
        assert!(dictionary.secret_pool().contains(&fresh.secret));
    }

    #[test]
    fn out_of_range_row_is_ignored() {
        let dictionary = dictionary();
        let reducer = Reducer::new(&dictionary, Rules::default());
        let mut state = state_for("crane");
        state.active_row = MAX_ROWS;

        for event in [Event::InputLetter(letter('a')), Event::Backspace, Event::Submit] {
            let transition = reducer.step(&state, event, &mut rng());
            assert_eq!(transition.outcome, Outcome::Ignored(Ignored::NoActiveRow));
            assert_eq!(transition.state, state);
        }
    }
}
