//! Interpretation of the seconds argument.

use std::ffi::OsStr;
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::debug;

/// Why an argument failed to parse as a whole number of seconds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSecondsError {
    /// The argument was not an optionally signed base-10 integer.
    #[error("not a base-10 integer: {0:?}")]
    NotANumber(String),

    /// The argument was a well-formed integer outside the `i64` range.
    #[error("seconds out of range: {0:?}")]
    OutOfRange(String),
}

/// Parse a command-line argument as a whole number of seconds.
///
/// Accepts optionally signed base-10 integers and nothing else: no
/// whitespace, no fractions, no unit suffixes. Out-of-range numerals are
/// errors rather than clamped values.
pub fn parse_seconds(raw: &str) -> Result<i64, ParseSecondsError> {
    raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseSecondsError::OutOfRange(raw.to_string())
        }
        _ => ParseSecondsError::NotANumber(raw.to_string()),
    })
}

/// Decide the wait from the first positional argument.
///
/// This is the whole error-handling policy of the program: missing,
/// undecodable, or unparseable input degrades to a zero wait instead of
/// surfacing a failure. Well-formed negatives pass through unchanged; the
/// wait layer treats them as nothing to do.
///
/// The argument arrives as an [`OsStr`] because argv is not guaranteed to
/// be UTF-8; bytes that do not decode are treated like any other
/// unparseable input.
pub fn seconds_or_zero(arg: Option<&OsStr>) -> i64 {
    let raw = match arg {
        Some(raw) => raw,
        None => {
            debug!("No seconds argument; waiting zero");
            return 0;
        }
    };

    match raw.to_str().map(parse_seconds) {
        Some(Ok(seconds)) => seconds,
        Some(Err(err)) => {
            debug!("{}; waiting zero", err);
            0
        }
        None => {
            debug!("Argument is not valid UTF-8; waiting zero");
            0
        }
    }
}
