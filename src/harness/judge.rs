//! Judge style driver: reads a count `n` followed by `n` integers and prints them sorted.

use std::io::{self, BufRead, Read, Write};

use thiserror::Error;

use crate::probe::TracingProbe;
use crate::unstable::rust_introsort;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("input is missing the element count")]
    MissingCount,
    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },
    #[error("expected {expected} values, found {found}")]
    MissingValues { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses the count and the values that follow it. Tokens after the announced values are
/// ignored.
pub fn read_input(mut input: impl BufRead) -> Result<Vec<i32>, JudgeError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut tokens = text.split_ascii_whitespace().enumerate();

    let (_, count_token) = tokens.next().ok_or(JudgeError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| JudgeError::InvalidToken {
            position: 0,
            token: count_token.to_owned(),
        })?;

    // The count is untrusted, don't let it drive the allocation alone.
    let mut values = Vec::with_capacity(count.min(text.len() / 2 + 1));
    for (position, token) in tokens.take(count) {
        let value = token.parse().map_err(|_| JudgeError::InvalidToken {
            position,
            token: token.to_owned(),
        })?;
        values.push(value);
    }

    if values.len() != count {
        return Err(JudgeError::MissingValues {
            expected: count,
            found: values.len(),
        });
    }

    Ok(values)
}

/// Writes `values` separated by single spaces and terminated by a newline.
pub fn write_output(mut output: impl Write, values: &[i32]) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i != 0 {
            output.write_all(b" ")?;
        }
        write!(output, "{value}")?;
    }
    output.write_all(b"\n")?;

    output.flush()
}

/// Sorts the input with introsort, engine decisions are visible at `trace` log level.
pub fn run(input: impl BufRead, output: impl Write) -> Result<(), JudgeError> {
    let mut values = read_input(input)?;
    rust_introsort::sort_probed(&mut values, &mut TracingProbe);
    write_output(output, &values)?;

    Ok(())
}
