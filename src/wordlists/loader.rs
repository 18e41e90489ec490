//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from the embedded list or from a newline-delimited file.

use super::{Dictionary, SECRET_POOL_SIZE, WORDS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read raw entries from a file, one per line
///
/// Blank lines are dropped; validation happens when the dictionary is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_entries<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Dictionary from the word list compiled into the binary
///
/// # Errors
///
/// Fails only if the embedded list has no valid entries.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::embedded_dictionary;
///
/// let dictionary = embedded_dictionary().unwrap();
/// assert!(dictionary.contains("crane"));
/// ```
pub fn embedded_dictionary() -> Result<Dictionary> {
    Ok(Dictionary::new(WORDS.iter().copied(), SECRET_POOL_SIZE)?)
}

/// Dictionary from a word-list file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let entries =
        read_entries(path).with_context(|| format!("reading word list {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded word list");

    Dictionary::new(entries.iter().map(String::as_str), SECRET_POOL_SIZE)
        .with_context(|| format!("building dictionary from {}", path.display()))
}

/// Resolve a `--wordlist` argument: `all` for the embedded list, otherwise a path
///
/// # Errors
///
/// Propagates file and dictionary errors from [`load_from_file`].
pub fn load(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "all" => embedded_dictionary(),
        path => load_from_file(path),
    }
}
