//! The dictionary: every word the solver may guess or consider as a solution
//!
//! A [`Dictionary`] is built once and then only read. The built-in list is
//! compiled into the binary and shared process-wide through
//! [`Dictionary::embedded`].

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

static EMBEDDED: LazyLock<Dictionary> = LazyLock::new(|| Dictionary {
    words: dedup(loader::words_from_slice(WORDS)),
});

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid words")]
    Empty,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ordered list of unique words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of any duplicate
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let words = dedup(words);
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// Build a dictionary from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns [`DictionaryError::Empty`] if nothing valid remains.
    pub fn from_strs(words: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_slice(words))
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// # Errors
    /// Returns [`DictionaryError::Io`] if the file cannot be read and
    /// [`DictionaryError::Empty`] if it holds no valid words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::new(words)?;
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// The built-in dictionary, initialized on first use
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Index of `word` in dictionary order
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| {
            let fresh = seen.insert(word.clone());
            if !fresh {
                log::warn!("Skipping duplicate word '{word}'");
            }
            fresh
        })
        .collect()
}
