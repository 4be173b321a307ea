//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus};
use colored::{Color, Colorize};

/// Terminal color for a letter classification
#[must_use]
pub const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Exact => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::Red,
    }
}

/// Format a guess result as colored letters
#[must_use]
pub fn colorize_result(result: &GuessResult) -> String {
    result
        .iter()
        .map(|feedback| {
            feedback
                .letter
                .to_string()
                .color(status_color(feedback.status))
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors() {
        assert_eq!(status_color(LetterStatus::Exact), Color::Green);
        assert_eq!(status_color(LetterStatus::Present), Color::Yellow);
        assert_eq!(status_color(LetterStatus::Absent), Color::Red);
    }

    #[test]
    fn colorize_result_keeps_letters() {
        colored::control::set_override(false);

        let evaluation = crate::core::evaluate("robot", "floor").unwrap();
        assert_eq!(colorize_result(&evaluation.result), "robot");
    }
}
