//! Error types produced by parsing, division and narrowing conversions.
//!
//! Each failure is its own (often zero-sized) struct implementing [`Error`](std::error::Error),
//! and operations which can fail in more than one way return an enum of those structs, so callers
//! can match on exactly the failures that are possible.

use derive_more::{Display, Error, From, IsVariant};

/// The input contained no digits.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("cannot parse integer from empty string")]
pub struct EmptyInputError;

/// A character which isn't a valid digit for the radix in use was found.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("invalid digit {digit:?} at byte {index} for radix {radix}")]
pub struct InvalidDigitError {
    pub digit: char,
    pub index: usize,
    pub radix: u32,
}

/// The requested radix is outside of `2..=36`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("radix {radix} is not in the range 2..=36")]
pub struct InvalidRadixError {
    pub radix: u32,
}

/// A value doesn't fit in the target type.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("integer value out of range for the target type")]
pub struct OutOfRangeError;

/// The divisor of a division or remainder was zero.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("attempt to divide by zero")]
pub struct DivideByZeroError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ParseIntError {
    Empty(EmptyInputError),
    InvalidDigit(InvalidDigitError),
    InvalidRadix(InvalidRadixError),
    OutOfRange(OutOfRangeError),
}
