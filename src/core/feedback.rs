//! Guess evaluation and per-letter feedback
//!
//! Feedback for a guess is a sequence of letter classifications:
//! - Exact = letter in the correct position
//! - Present = letter in the word, wrong position, not claimed by another match
//! - Absent = letter not in the word, or every occurrence already claimed

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Exact,
    Present,
    Absent,
}

/// One guessed letter together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

/// Per-letter feedback for a whole guess, aligned with the guess positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult(Vec<LetterFeedback>);

/// Whether the guess was the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Miss,
}

/// Outcome of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub result: GuessResult,
    pub verdict: Verdict,
}

impl Evaluation {
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdict == Verdict::Win
    }
}

/// Error type for guesses that cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("invalid guess length: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl GuessResult {
    /// Iterate over the per-letter feedback, left to right
    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The classifications alone, in guess order
    #[must_use]
    pub fn statuses(&self) -> Vec<LetterStatus> {
        self.0.iter().map(|feedback| feedback.status).collect()
    }

    /// Count the letters classified as `status`
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|feedback| feedback.status == status).count()
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.0
            .iter()
            .all(|feedback| feedback.status == LetterStatus::Exact)
    }

    /// Convert the feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|feedback| match feedback.status {
                LetterStatus::Exact => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a GuessResult {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Evaluate `guess` against `secret`
///
/// This implements Wordle's feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches and remove them from the available pool
/// 2. Second pass: Left to right, mark present letters while the pool still
///    holds an unclaimed occurrence, consuming one occurrence per match
///
/// The verdict is plain string equality and does not depend on the classification.
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` if the guess and the secret have
/// a different number of letters.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, Verdict, evaluate};
///
/// let evaluation = evaluate("aaaaa", "abcba").unwrap();
/// assert_eq!(
///     evaluation.result.statuses(),
///     [Exact, Absent, Absent, Absent, Exact]
/// );
/// assert_eq!(evaluation.verdict, Verdict::Miss);
/// ```
pub fn evaluate(guess: &str, secret: &str) -> Result<Evaluation, EvaluationError> {
    let guess_letters: Vec<char> = guess.chars().collect();
    let secret_letters: Vec<char> = secret.chars().collect();

    if guess_letters.len() != secret_letters.len() {
        return Err(EvaluationError::LengthMismatch {
            expected: secret_letters.len(),
            actual: guess_letters.len(),
        });
    }

    let mut statuses: Vec<Option<LetterStatus>> = vec![None; guess_letters.len()];
    let mut secret_available = letter_counts(&secret_letters);

    // First pass: exact position matches
    for (i, (&letter, &target)) in guess_letters.iter().zip(&secret_letters).enumerate() {
        if letter == target {
            statuses[i] = Some(LetterStatus::Exact);
            if let Some(count) = secret_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: earlier positions claim remaining occurrences first
    for (status, &letter) in statuses.iter_mut().zip(&guess_letters) {
        if status.is_some() {
            continue;
        }

        *status = match secret_available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Some(LetterStatus::Present)
            }
            _ => Some(LetterStatus::Absent),
        };
    }

    let result = GuessResult(
        guess_letters
            .into_iter()
            .zip(statuses)
            .map(|(letter, status)| LetterFeedback {
                letter,
                status: status.unwrap_or(LetterStatus::Absent),
            })
            .collect(),
    );

    let verdict = if guess == secret {
        Verdict::Win
    } else {
        Verdict::Miss
    };

    Ok(Evaluation { result, verdict })
}

/// Tally how many times each letter occurs
fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Exact, Present};
    use super::*;

    fn statuses(guess: &str, secret: &str) -> Vec<LetterStatus> {
        evaluate(guess, secret).unwrap().result.statuses()
    }

    #[test]
    fn evaluate_all_absent() {
        let evaluation = evaluate("abcde", "fghij").unwrap();

        assert_eq!(evaluation.result.count(Absent), 5);
        assert_eq!(evaluation.verdict, Verdict::Miss);
    }

    #[test]
    fn evaluate_all_exact_is_win() {
        let evaluation = evaluate("crane", "crane").unwrap();

        assert!(evaluation.result.is_all_exact());
        assert!(evaluation.is_win());
        assert_eq!(evaluation.result.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn evaluate_keeps_guess_letters_in_order() {
        let evaluation = evaluate("slate", "crane").unwrap();
        let letters: String = evaluation.result.iter().map(|f| f.letter).collect();

        assert_eq!(letters, "slate");
        assert_eq!(evaluation.result.len(), 5);
    }

    #[test]
    fn evaluate_real_wordle_example() {
        // CRANE vs SLATE: A and E exact, nothing else shared
        assert_eq!(
            statuses("crane", "slate"),
            [Absent, Absent, Exact, Absent, Exact]
        );
    }

    #[test]
    fn evaluate_exact_matches_claim_before_present() {
        // Both outer a's are exact; the secret has no a left for the middle ones
        assert_eq!(
            statuses("aaaaa", "abcba"),
            [Exact, Absent, Absent, Absent, Exact]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_both_present() {
        // SPEED vs ERASE: ERASE has two e's, so both guessed e's are present
        assert_eq!(
            statuses("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_exact_and_present() {
        // ROBOT vs FLOOR: second o is exact, first o claims the other o
        assert_eq!(
            statuses("robot", "floor"),
            [Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn evaluate_earlier_position_claims_first() {
        // Only one e in the secret: the leftmost misplaced e gets it
        assert_eq!(
            statuses("eerie", "alert"),
            [Present, Absent, Present, Absent, Absent]
        );
        assert_eq!(
            statuses("geese", "those"),
            [Absent, Absent, Absent, Exact, Exact]
        );
    }

    #[test]
    fn evaluate_length_mismatch() {
        assert_eq!(
            evaluate("cranes", "crane"),
            Err(EvaluationError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            evaluate("", "crane"),
            Err(EvaluationError::LengthMismatch {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn evaluate_length_counts_characters() {
        let evaluation = evaluate("école", "école").unwrap();
        assert!(evaluation.is_win());
    }

    #[test]
    fn evaluate_is_idempotent() {
        let secret = String::from("abcba");
        let first = evaluate("aabbc", &secret).unwrap();
        let second = evaluate("aabbc", &secret).unwrap();

        assert_eq!(first, second);
        assert_eq!(secret, "abcba");
    }

    #[test]
    fn letter_counts_duplicates() {
        let counts = letter_counts(&['s', 'p', 'e', 'e', 'd']);
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }
}
