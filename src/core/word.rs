//! Word representation
//!
//! A Word is a single normalized (trimmed, lowercase, non-blank) entry of a word list.

use std::fmt;
use thiserror::Error;

/// A normalized word usable as a secret answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is blank")]
    Blank,
    #[error("word contains whitespace: {0:?}")]
    InnerWhitespace(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - The word contains whitespace between letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("  CRANE ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Blank);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::InnerWhitespace(text));
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (characters, not bytes)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; a `Word` is never blank
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("  CrAnE\t").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_blank() {
        assert_eq!(Word::new(""), Err(WordError::Blank));
        assert_eq!(Word::new(" \t "), Err(WordError::Blank));
    }

    #[test]
    fn word_creation_inner_whitespace() {
        assert!(matches!(
            Word::new("ice cream"),
            Err(WordError::InnerWhitespace(_))
        ));
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("ÉCOLE").unwrap();
        assert_eq!(word.text(), "école");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_any_length_allowed() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("elephant").unwrap().len(), 8);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
