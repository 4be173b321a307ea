//! Wordle Game - CLI
//!
//! Terminal word-guessing game with colored per-letter feedback.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::run_play,
    session::{Session, SessionConfig},
    wordlists::{
        WORDS, WordList,
        loader::{from_slice, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret word with per-letter feedback",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'embedded' (default, built-in list) or path to a file
    #[arg(short = 'w', long, default_value = "embedded")]
    wordlist: String,

    /// Reveal the secret word every time a new one is selected
    #[arg(short, long)]
    debug: bool,

    /// Seed the random word selection for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Load the word list based on the -w flag
fn load_wordlist(source: &str) -> Result<WordList> {
    match source {
        "embedded" => from_slice(WORDS).context("embedded word list is empty"),
        path => load_from_file(path).with_context(|| format!("failed to load word list from {path}")),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let words = load_wordlist(&cli.wordlist)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = SessionConfig { debug: cli.debug };
    let mut session = Session::initialize(words, config, rng);

    run_play(&mut session, io::stdin().lock(), io::stdout().lock())
}
