//! Quantity prompt parsing.
//!
//! The parser only insists on a value above zero. The session applies the
//! upper bound afterwards and drops the whole order line when it is exceeded.
//!
//! Surrounding whitespace is ignored, so `" 5 "` reads as 5. Input bytes that
//! are not valid UTF-8 are decoded lossily and then fail to parse like any
//! other text.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::constants::{NOT_A_NUMBER_MESSAGE, NOT_POSITIVE_MESSAGE};

/// Why a quantity line was not accepted by the parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },
    #[error("{value} is not greater than zero")]
    NotPositive { value: i32 },
}

impl QuantityError {
    /// Message shown to the diner before the next read attempt.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NotANumber { .. } => NOT_A_NUMBER_MESSAGE,
            Self::NotPositive { .. } => NOT_POSITIVE_MESSAGE,
        }
    }
}

/// Parse one line as a positive 32-bit integer.
///
/// # Errors
///
/// Returns [`QuantityError::NotANumber`] for malformed or out-of-range text and
/// [`QuantityError::NotPositive`] for zero or negative values.
pub fn parse_quantity(line: &str) -> Result<i32, QuantityError> {
    let trimmed = line.trim();
    let value: i32 = trimmed.parse().map_err(|_| QuantityError::NotANumber {
        input: trimmed.to_string(),
    })?;
    if value > 0 {
        Ok(value)
    } else {
        Err(QuantityError::NotPositive { value })
    }
}

/// Read one line, decoding invalid UTF-8 with replacement characters.
///
/// Returns `Ok(None)` once the input is exhausted.
pub(crate) fn read_input_line<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Read lines until one parses as a positive integer.
///
/// Returns `Ok(None)` when the input is exhausted before a valid value arrives.
///
/// # Errors
///
/// Returns an error if reading the input or writing a message fails.
pub fn read_quantity<R, W>(input: &mut R, output: &mut W) -> io::Result<Option<i32>>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        let Some(line) = read_input_line(input, &mut buf)? else {
            return Ok(None);
        };
        match parse_quantity(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!("rejected quantity input: {err}");
                writeln!(output, "{}", err.user_message())?;
            }
        }
    }
}
