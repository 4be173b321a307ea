//! Interactive play mode
//!
//! Line-based game loop: read a line, hand it to the session, render the outcome.

use crate::output::{
    print_banner, print_farewell, print_guess_result, print_invalid_input, print_prompt,
    print_rejection, print_secret, print_win,
};
use crate::session::{Outcome, Session};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Run the game until the player quits or input ends
///
/// End of input is treated as an implicit quit. A line that is not valid UTF-8
/// or a guess that cannot be evaluated is rejected with a message and the loop
/// continues.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, I, W>(session: &mut Session<R>, mut input: I, mut output: W) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let debug = session.config().debug;

    print_banner(&mut output, debug)?;
    if debug {
        print_secret(&mut output, session.secret())?;
    }

    while session.is_active() {
        print_prompt(&mut output)?;

        let Some(bytes) = read_line(&mut input)? else {
            info!("end of input");
            // Finish the prompt line before the farewell
            writeln!(output)?;
            session.quit();
            print_farewell(&mut output)?;
            break;
        };

        let Ok(line) = String::from_utf8(bytes) else {
            debug!("input is not valid UTF-8");
            print_invalid_input(&mut output)?;
            continue;
        };

        let outcome = session.process_input_line(&line);
        match &outcome {
            Outcome::Quit => print_farewell(&mut output)?,
            Outcome::NewWord => {}
            Outcome::Miss(result) => print_guess_result(&mut output, result)?,
            Outcome::Won { answer, .. } => print_win(&mut output, answer)?,
            Outcome::Rejected(err) => print_rejection(&mut output, err)?,
        }

        if debug && outcome.selected_new_word() {
            print_secret(&mut output, session.secret())?;
        }
    }

    output.flush().context("failed to flush output")
}

/// Read one raw line, or `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .context("failed to read player input")?;

    Ok((read > 0).then_some(line))
}
