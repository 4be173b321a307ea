//! Game session
//!
//! The session owns the secret word and turns each line of player input into
//! an `Outcome`: a command, a guess evaluation, or a rejection. It performs no
//! terminal I/O itself.

mod command;
mod controller;

pub use command::Command;
pub use controller::{Outcome, Session, SessionConfig, SessionState};
