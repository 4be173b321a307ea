//! Wordle Game
//!
//! A terminal word-guessing game: guess the secret word, get per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, evaluate};
//!
//! let evaluation = evaluate("robot", "floor").unwrap();
//! assert!(!evaluation.is_win());
//! assert_eq!(evaluation.result.count(LetterStatus::Exact), 1);
//! assert_eq!(evaluation.result.count(LetterStatus::Present), 2);
//! ```

// Core domain types and guess evaluation
pub mod core;

// Word lists
pub mod wordlists;

// Session state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
