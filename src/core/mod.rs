//! Core domain types for the game
//!
//! This module contains the words and the guess evaluator. Everything here is
//! pure: no I/O, no randomness, no terminal styling.

mod feedback;
mod word;

pub use feedback::{
    Evaluation, EvaluationError, GuessResult, LetterFeedback, LetterStatus, Verdict, evaluate,
};
pub use word::{Word, WordError};
