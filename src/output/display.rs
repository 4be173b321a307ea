//! Display functions for game events
//!
//! Everything is written to a caller-supplied writer so the game can run
//! against stdout or an in-memory buffer.

use super::formatters::colorize_result;
use crate::core::{EvaluationError, GuessResult, Word};
use colored::Colorize;
use std::io::{self, Write};

/// Prompt shown before reading each line of input
pub const PROMPT: &str = "Enter your guess: ";

/// Print the startup banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_banner(out: &mut impl Write, debug: bool) -> io::Result<()> {
    if debug {
        writeln!(out, "{}", "[DEBUG MODE ENABLED]".red())?;
    }
    writeln!(
        out,
        "Guess the word. Type '{}' for a new word or '{}' to exit.",
        "new".cyan(),
        "quit".cyan()
    )
}

/// Print the input prompt without a trailing newline
///
/// # Errors
///
/// Returns an error if writing to or flushing `out` fails.
pub fn print_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

/// Reveal the secret word (debug mode only)
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_secret(out: &mut impl Write, secret: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{} {}\n",
        "WINNING WORD:".red(),
        secret.text().bright_green()
    )
}

/// Print the colored feedback for a wrong guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_guess_result(out: &mut impl Write, result: &GuessResult) -> io::Result<()> {
    writeln!(out, "{}", colorize_result(result))
}

/// Print the win message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_win(out: &mut impl Write, answer: &Word) -> io::Result<()> {
    writeln!(
        out,
        "{} {}{}",
        "Good Job! The word was".green(),
        answer.text().cyan(),
        ".".green()
    )?;
    writeln!(out, "{}", "Generating new word...".green())
}

/// Print why a guess was not evaluated
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection(out: &mut impl Write, error: &EvaluationError) -> io::Result<()> {
    match error {
        EvaluationError::LengthMismatch { expected, actual } => writeln!(
            out,
            "{} The word has {expected} letters, your guess has {actual}.",
            "Invalid guess length.".yellow()
        ),
    }
}

/// Print the rejection for a line that is not text
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_invalid_input(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} not valid UTF-8 text.", "Invalid input:".yellow())
}

/// Print the quit message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Quitting Wordle...")
}
