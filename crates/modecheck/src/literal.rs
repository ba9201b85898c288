//! Integer literal parsing.
//!
//! Firmware sources spell the same speed value as `100`, `0x64`, `0o144`,
//! or `0b1100100` depending on the author's mood; all four must compare
//! equal. The grammar here matches Python's `int(text, 0)`, which is what
//! the checks were originally written against: an optional sign, then a
//! standard `0x`/`0o`/`0b` radix prefix or plain decimal.

use crate::error::ModeCheckError;

/// Parse an integer literal in any of the standard prefixed bases.
///
/// # Errors
///
/// Returns [`ModeCheckError::Parse`] carrying the offending token when the
/// text is not a valid literal in any accepted base.
pub fn parse_int(token: &str) -> Result<i64, ModeCheckError> {
    let raw = token.trim();

    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let parsed = if let Some(digits) = strip_radix_prefix(body, "0x", "0X") {
        i64::from_str_radix(digits, 16)
    } else if let Some(digits) = strip_radix_prefix(body, "0o", "0O") {
        i64::from_str_radix(digits, 8)
    } else if let Some(digits) = strip_radix_prefix(body, "0b", "0B") {
        i64::from_str_radix(digits, 2)
    } else {
        body.parse::<i64>()
    };

    match parsed {
        Ok(value) if negative => Ok(-value),
        Ok(value) => Ok(value),
        Err(err) => Err(ModeCheckError::Parse {
            token: raw.to_string(),
            reason: err.to_string(),
        }),
    }
}

fn strip_radix_prefix<'a>(body: &'a str, lower: &str, upper: &str) -> Option<&'a str> {
    body.strip_prefix(lower).or_else(|| body.strip_prefix(upper))
}
