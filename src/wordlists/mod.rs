//! Word lists and the game dictionary
//!
//! Provides the embedded word list compiled into the binary and the
//! [`Dictionary`] used for secret selection and guess validation.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError, SECRET_POOL_SIZE};
pub use embedded::{WORDS, WORDS_COUNT};
