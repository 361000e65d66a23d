use crate::lifespan::parse_birthdate;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use time::Date;

static PROMPT: &str = "Enter your birthdate (YYYY-MM-DD): ";

#[derive(Debug, Error)]
pub(crate) enum PromptError {
    #[error("birthdate entry was cancelled")]
    InterruptedByUser,
    #[error("failed to read birthdate")]
    Io(#[from] io::Error),
}

/// Ask for a birthdate on `output` until a valid one is read from `input`.
///
/// Whitespace around the typed entry is ignored.  End of input (Ctrl-D)
/// counts as the user cancelling.
pub(crate) fn ask_birthdate<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    today: Date,
) -> Result<Date, PromptError> {
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InterruptedByUser);
        }
        let entry = line.trim();
        match parse_birthdate(entry, today) {
            Ok(date) => return Ok(date),
            Err(e) => {
                tracing::debug!(input = entry, error = %e, "Rejected birthdate");
                writeln!(output, "Error: {e}")?;
            }
        }
    }
}
