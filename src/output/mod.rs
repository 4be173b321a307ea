//! Terminal output formatting
//!
//! Maps letter classifications to colors and prints game messages.

pub mod display;
pub mod formatters;

pub use display::{
    PROMPT, print_banner, print_farewell, print_guess_result, print_invalid_input, print_prompt,
    print_rejection, print_secret, print_win,
};
