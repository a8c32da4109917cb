//! Terminal prompts for values required before a delete

use std::io::{self, BufRead, Write};

use linkwatch_core::error::Result;

/// Use `given` if present, otherwise ask on stderr and read one line from stdin.
///
/// End of input reads as an empty answer.
pub fn value_or_prompt(given: Option<&str>, question: &str) -> Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }

    let mut stderr = io::stderr();
    write!(stderr, "{}: ", question)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
