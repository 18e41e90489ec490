//! Valid-guess set and secret-word pool

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Secrets are drawn from this many leading entries of the word list
pub const SECRET_POOL_SIZE: usize = 300;

/// Error building a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No entry in the source was a valid five-letter word
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Immutable word dictionary
///
/// Holds every valid guess for O(1) membership checks, plus the ordered
/// pool secret words are drawn from. The pool is a prefix of the source
/// list, so common words come first in the data file.
#[derive(Debug, Clone)]
pub struct Dictionary {
    valid: FxHashSet<Word>,
    secrets: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries that are not five ASCII letters are skipped. Duplicates keep
    /// their first position. The secret pool is the first `secret_pool`
    /// valid entries (at least one).
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "slate", "bogus!"], 1).unwrap();
    /// assert!(dictionary.contains("SLATE"));
    /// assert!(!dictionary.contains("bogus!"));
    /// assert_eq!(dictionary.secret_pool().len(), 1);
    /// ```
    pub fn new<'a, I>(entries: I, secret_pool: usize) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut valid = FxHashSet::default();
        let mut ordered = Vec::new();

        for entry in entries {
            if let Ok(word) = Word::new(entry.trim())
                && valid.insert(word)
            {
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(DictionaryError::Empty);
        }

        ordered.truncate(secret_pool.max(1));

        Ok(Self {
            valid,
            secrets: ordered,
        })
    }

    /// Check whether `word` is a valid guess, case-insensitively
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.valid.contains(&w))
    }

    /// Check membership for an already-parsed word
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Draw a secret word uniformly from the secret pool
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Construction guarantees a non-empty pool
        self.secrets[rng.random_range(0..self.secrets.len())]
    }

    /// Words secrets are drawn from
    #[must_use]
    pub fn secret_pool(&self) -> &[Word] {
        &self.secrets
    }

    /// Number of valid guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(["crane", "slate", "irate", "grate", "crate"], 2).unwrap()
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dictionary = small();
        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("CRANE"));
        assert!(dictionary.contains("CrAnE"));
        assert!(!dictionary.contains("zzzzz"));
        assert!(!dictionary.contains("cranes"));
    }

    #[test]
    fn secret_pool_is_prefix() {
        let dictionary = small();
        let pool: Vec<String> = dictionary.secret_pool().iter().map(Word::text).collect();
        assert_eq!(pool, vec!["CRANE", "SLATE"]);
        assert_eq!(dictionary.len(), 5);
    }

    #[test]
    fn pool_larger_than_list_uses_everything() {
        let dictionary = Dictionary::new(["crane", "slate"], SECRET_POOL_SIZE).unwrap();
        assert_eq!(dictionary.secret_pool().len(), 2);
    }

    #[test]
    fn invalid_and_duplicate_entries_skipped() {
        let entries = ["crane", "toolong", "abc", "CRANE", " slate "];
        let dictionary = Dictionary::new(entries, 10).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.secret_pool().len(), 2);
    }

    #[test]
    fn empty_source_is_an_error() {
        assert_eq!(
            Dictionary::new(["", "abc"], 10).unwrap_err(),
            DictionaryError::Empty
        );
    }

    #[test]
    fn sample_draws_from_pool() {
        let dictionary = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = dictionary.sample(&mut rng);
            assert!(dictionary.secret_pool().contains(&word));
        }
    }

    #[test]
    fn sample_is_deterministic_for_seed() {
        let dictionary = small();
        let a = dictionary.sample(&mut StdRng::seed_from_u64(42));
        let b = dictionary.sample(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_pool_still_has_one_secret() {
        let dictionary = Dictionary::new(["crane", "slate"], 0).unwrap();
        assert_eq!(dictionary.secret_pool().len(), 1);
    }
}
