//! Bit-position parsing and fixed-width hex formatting.
//!
//! Turns a line of whitespace-separated positions (0-127) into the 128-bit
//! mask with exactly those bits set, rendered as 32 uppercase hex digits.

use thiserror::Error;

/// Width of the mask in bits. Valid positions are `0..MASK_BITS`.
pub const MASK_BITS: u32 = 128;

/// Errors produced while turning a line of text into a bitmask.
///
/// Malformed tokens and out-of-range positions are reported separately so
/// callers can tell "you typed garbage" apart from "you typed 200".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmaskError {
    /// A whitespace-separated token could not be parsed as an integer.
    #[error("invalid token {0:?}: expected an integer")]
    MalformedToken(String),

    /// A position parsed as an integer but falls outside [0, 127].
    #[error("All positions must be between 0 and 127")]
    PositionOutOfRange(i128),
}

/// Parses a line of whitespace-separated bit positions.
///
/// Tokenizes first, parses every token, then range-checks the whole set;
/// a single bad token fails the entire call with no partial result.
/// An empty or whitespace-only line is a valid empty position set.
pub fn parse_positions(input: &str) -> Result<Vec<u8>, BitmaskError> {
    let values = input
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<Vec<i128>, BitmaskError>>()?;

    if let Some(&bad) = values.iter().find(|&&v| !(0..MASK_BITS as i128).contains(&v)) {
        return Err(BitmaskError::PositionOutOfRange(bad));
    }

    Ok(values.into_iter().map(|v| v as u8).collect())
}

/// Parses one token as an integer.
///
/// A well-formed numeral too large even for i128 is still an integer, not a
/// malformed token; it saturates so the range check rejects it like any
/// other out-of-range value.
fn parse_token(token: &str) -> Result<i128, BitmaskError> {
    token.parse::<i128>().or_else(|_| {
        if is_integer_literal(token) {
            Ok(if token.starts_with('-') {
                i128::MIN
            } else {
                i128::MAX
            })
        } else {
            Err(BitmaskError::MalformedToken(token.to_string()))
        }
    })
}

/// True for an optional sign followed by one or more ASCII digits.
fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Builds the mask with the given bit positions set.
///
/// Duplicate positions are idempotent and order does not matter; the result
/// is just the bitwise union of `1 << p`.
pub fn mask_from_positions(positions: &[u8]) -> u128 {
    positions
        .iter()
        .fold(0u128, |mask, &p| mask | (1u128 << p))
}

/// Formats a mask as exactly 32 zero-padded uppercase hex digits.
///
/// The caller decides whether to display a `0x` prefix.
pub fn format_mask(mask: u128) -> String {
    format!("{:032X}", mask)
}

/// Parses positions, builds the mask, and formats it in one step.
pub fn encode(input: &str) -> Result<String, BitmaskError> {
    let positions = parse_positions(input)?;
    Ok(format_mask(mask_from_positions(&positions)))
}
