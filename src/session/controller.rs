//! Game session state and input dispatch

use super::command::Command;
use crate::core::{EvaluationError, GuessResult, Word, evaluate};
use crate::wordlists::WordList;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

/// Whether the session keeps accepting input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminated,
}

/// Session options fixed at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Reveal the secret word after every selection
    pub debug: bool,
}

/// What handling one input line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Quit command or end of input; the session is now terminated
    Quit,
    /// New word command; a fresh secret was selected
    NewWord,
    /// Wrong guess
    Miss(GuessResult),
    /// Correct guess; a fresh secret was already selected
    Won { result: GuessResult, answer: Word },
    /// The guess could not be evaluated; the session continues
    Rejected(EvaluationError),
}

impl Outcome {
    /// Check if a new secret word was selected while handling the input
    #[must_use]
    pub fn selected_new_word(&self) -> bool {
        matches!(self, Self::NewWord | Self::Won { .. })
    }

    /// Check if the input was evaluated as a guess
    #[must_use]
    pub fn evaluated_guess(&self) -> bool {
        matches!(self, Self::Miss(_) | Self::Won { .. })
    }
}

/// Interactive game session
///
/// Owns the word pool, the current secret word and the random source used to
/// draw new secrets.
pub struct Session<R = StdRng> {
    words: WordList,
    secret: Word,
    state: SessionState,
    config: SessionConfig,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Start a session and select the first secret word
    ///
    /// A `WordList` is never empty, so the first selection always succeeds.
    #[must_use]
    pub fn initialize(words: WordList, config: SessionConfig, mut rng: R) -> Self {
        let secret = words.choose(&mut rng).clone();
        info!(words = words.len(), debug = config.debug, "session started");
        trace!(secret = %secret, "selected secret word");

        Self {
            words,
            secret,
            state: SessionState::Active,
            config,
            rng,
        }
    }

    /// Replace the secret word with a fresh uniform draw
    pub fn select_new_word(&mut self) -> &Word {
        self.secret = self.words.choose(&mut self.rng).clone();
        debug!("selected new secret word");
        trace!(secret = %self.secret, "selected secret word");
        &self.secret
    }

    /// Handle one line of player input
    ///
    /// The line is trimmed and lowercased. Command keywords are executed;
    /// anything else is evaluated as a guess.
    pub fn process_input_line(&mut self, line: &str) -> Outcome {
        let input = line.trim().to_lowercase();

        if let Some(command) = Command::lookup(&input) {
            debug!(command = command.keyword(), "dispatching command");
            return match command {
                Command::Quit => self.quit(),
                Command::NewWord => {
                    self.select_new_word();
                    Outcome::NewWord
                }
            };
        }

        match evaluate(&input, self.secret.text()) {
            Ok(evaluation) if evaluation.is_win() => {
                let answer = self.secret.clone();
                debug!(feedback = %evaluation.result.to_emoji(), "guess solved the word");
                self.select_new_word();
                Outcome::Won {
                    result: evaluation.result,
                    answer,
                }
            }
            Ok(evaluation) => {
                debug!(feedback = %evaluation.result.to_emoji(), "guess evaluated");
                Outcome::Miss(evaluation.result)
            }
            Err(err) => {
                debug!(%err, "guess rejected");
                Outcome::Rejected(err)
            }
        }
    }

    /// Terminate the session
    pub fn quit(&mut self) -> Outcome {
        self.state = SessionState::Terminated;
        info!("session terminated");
        Outcome::Quit
    }
}

impl<R> Session<R> {
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }
}
