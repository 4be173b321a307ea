//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a word list from a file
///
/// Entries are newline-separated. Each entry is trimmed and lowercased; blank
/// lines and entries containing inner whitespace are skipped.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, and
/// `WordListError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = from_lines(content.lines())?;
    info!(path = %path.display(), count = list.len(), "loaded word list");
    Ok(list)
}

/// Convert an embedded string slice to a word list
///
/// # Errors
///
/// Returns `WordListError::Empty` if the slice holds no usable words.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn from_slice(slice: &[&str]) -> Result<WordList, WordListError> {
    from_lines(slice.iter().copied())
}

fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<WordList, WordListError> {
    let words = lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!(%err, "skipping word list entry");
                None
            }
        })
        .collect();

    WordList::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_word_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn from_slice_converts_words() {
        let words = from_slice(&["crane", "slate", "irate"]).unwrap();

        let texts: Vec<&str> = words.as_slice().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn from_slice_lowercases_and_skips_blank() {
        let words = from_slice(&["CRANE", "", "   ", " Slate "]).unwrap();

        let texts: Vec<&str> = words.as_slice().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn from_slice_empty() {
        assert!(matches!(from_slice(&[]), Err(WordListError::Empty)));
        assert!(matches!(from_slice(&["", " "]), Err(WordListError::Empty)));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = temp_word_file("reads_lines", "Crane\n\nslate\r\nIRATE\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.as_slice().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_file_only_blank_lines() {
        let path = temp_word_file("blank_lines", "\n\n   \n");
        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("/nonexistent/wordle_game/words.txt");

        match result {
            Err(WordListError::Io { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/wordle_game/words.txt"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
