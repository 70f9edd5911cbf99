//! Word list loading utilities
//!
//! Provides functions to read word lists from files or convert the embedded
//! constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are ignored; invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_gain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(content.lines()))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_gain::wordlists::loader::words_from_slice;
/// use wordle_gain::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("Skipping '{line}': {e}");
                None
            }
        })
        .collect()
}
