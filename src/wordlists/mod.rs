//! Word lists for the game
//!
//! Provides the `WordList` secret pool, a file loader, and an embedded default
//! list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for word lists that cannot be used
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list contains no usable words")]
    Empty,
}

/// Non-empty, immutable, ordered pool of secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }
}
