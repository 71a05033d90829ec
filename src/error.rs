//! Error type shared by every fallible natural-number operation.
//!
//! All variants describe a broken caller contract. None of them is
//! transient, so nothing in the crate retries; errors are returned to the
//! immediate caller through `Result` and left for it to handle.

use crate::digit::Digit;

use thiserror::Error;

/// Errors produced by natural-number arithmetic and conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NaturalError {
    /// A scalar division was requested with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A digit division was given an incoming remainder that is not
    /// smaller than the divisor, so the quotient would not fit a digit.
    #[error("incoming remainder {remainder} is not smaller than divisor {divisor}")]
    RemainderTooLarge { remainder: Digit, divisor: Digit },

    /// An unsigned subtraction would have produced a negative result.
    #[error("subtraction underflow: minuend is smaller than subtrahend")]
    Underflow,

    /// A conversion base outside `2..=16` was requested.
    #[error("invalid base {0}: expected a value in 2..=16")]
    InvalidBase(u32),

    /// A whole-string parse stopped before the end of its input.
    ///
    /// `consumed` is the number of bytes that formed a valid prefix.
    #[error("malformed numeral: only {consumed} leading bytes are valid")]
    MalformedInput { consumed: usize },

    /// The value does not fit into the requested native integer type.
    #[error("value does not fit into the target integer type")]
    Overflow,
}
