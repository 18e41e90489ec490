//! Score command
//!
//! Scores one guess against a given secret without starting a session.

use crate::core::{Cell, ScoringRule, WORD_LEN, Word, WordError, score};
use crate::wordlists::Dictionary;

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub cells: [Cell; WORD_LEN],
    /// Whether the game would accept the guess at all
    pub guess_in_dictionary: bool,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns a `WordError` if either argument is not a five-letter word.
pub fn score_words(
    secret: &str,
    guess: &str,
    rule: ScoringRule,
    dictionary: &Dictionary,
) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        cells: score(&secret, &guess, rule),
        guess_in_dictionary: dictionary.contains_word(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn dictionary() -> Dictionary {
        Dictionary::new(["alloy", "llama"], 1).unwrap()
    }

    #[test]
    fn score_words_literal() {
        let result = score_words("alloy", "llama", ScoringRule::Literal, &dictionary()).unwrap();
        assert!(result.guess_in_dictionary);
        assert_eq!(result.cells[4], Cell::Partial(Letter::new('A').unwrap()));
    }

    #[test]
    fn score_words_strict() {
        let result = score_words("alloy", "llama", ScoringRule::Strict, &dictionary()).unwrap();
        assert_eq!(result.cells[4], Cell::Incorrect(Letter::new('A').unwrap()));
    }

    #[test]
    fn unknown_guess_still_scored() {
        let result = score_words("alloy", "qqqqq", ScoringRule::Literal, &dictionary()).unwrap();
        assert!(!result.guess_in_dictionary);
    }

    #[test]
    fn invalid_words_rejected() {
        assert!(matches!(
            score_words("all", "llama", ScoringRule::Literal, &dictionary()),
            Err(WordError::InvalidLength(3))
        ));
        assert!(score_words("alloy", "ll4ma", ScoringRule::Literal, &dictionary()).is_err());
    }
}
