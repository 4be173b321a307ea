//! Player command keywords

/// Actions the player can request instead of guessing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewWord,
}

const COMMANDS: &[(&str, Command)] = &[("quit", Command::Quit), ("new", Command::NewWord)];

impl Command {
    /// Look up a command by keyword
    ///
    /// Matching is exact after trimming surrounding whitespace and ignoring case.
    /// Returns `None` for anything else, which the session treats as a guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::session::Command;
    ///
    /// assert_eq!(Command::lookup("  QUIT "), Some(Command::Quit));
    /// assert_eq!(Command::lookup("newt"), None);
    /// ```
    #[must_use]
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        COMMANDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(input))
            .map(|&(_, command)| command)
    }

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::NewWord => "new",
        }
    }
}
