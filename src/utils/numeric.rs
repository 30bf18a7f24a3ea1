//! Positive-integer parsing
//!
//! Accepts base-10 text for values in `(0, i32::MAX]`.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

/// Why a string was rejected as a positive integer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositiveIntError {
    #[error("value is empty")]
    Empty,
    #[error("not a base-10 number")]
    NotANumber,
    #[error("value is not greater than zero")]
    NotPositive,
    #[error("value exceeds {}", i32::MAX)]
    OutOfRange,
}

/// An `i32` that is always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInt(i32);

impl PositiveInt {
    pub fn get(self) -> i32 {
        self.0
    }

    /// Value as a loop bound
    pub fn as_usize(self) -> usize {
        // Positive i32 always fits
        self.0 as usize
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PositiveInt {
    type Err = PositiveIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_positive_int(s)
    }
}

/// Parse `text` as a strictly positive base-10 integer
///
/// An optional leading `+` is allowed. Whitespace is not.
pub fn parse_positive_int(text: &str) -> Result<PositiveInt, PositiveIntError> {
    if text.is_empty() {
        return Err(PositiveIntError::Empty);
    }

    let value = text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => PositiveIntError::OutOfRange,
        IntErrorKind::NegOverflow => PositiveIntError::NotPositive,
        _ => PositiveIntError::NotANumber,
    })?;

    if value <= 0 {
        return Err(PositiveIntError::NotPositive);
    }

    i32::try_from(value)
        .map(PositiveInt)
        .map_err(|_| PositiveIntError::OutOfRange)
}
