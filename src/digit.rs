//! Digit definition
//!
//! A natural number is stored as a sequence of machine-word digits. The
//! digit width is fixed at compile time: 64-bit digits on 64-bit targets,
//! 32-bit digits everywhere else, or 32-bit digits on every target when the
//! `digit32` feature is enabled.
//!
//! Each digit type is paired with an unsigned type of twice its width so
//! that a single widening operation covers every carry, borrow and partial
//! product the kernels produce.

#[cfg(all(target_pointer_width = "64", not(feature = "digit32")))]
mod width {
    pub type Digit = u64;
    pub type DoubleDigit = u128;
}

#[cfg(any(not(target_pointer_width = "64"), feature = "digit32"))]
mod width {
    pub type Digit = u32;
    pub type DoubleDigit = u64;
}

/// A single base-`2^DIGIT_BITS` digit of a natural number.
pub type Digit = width::Digit;

/// Unsigned integer wide enough to hold the product of two digits plus a
/// digit.
pub type DoubleDigit = width::DoubleDigit;

/// Width `W` of a digit in bits. The internal radix is `B = 2^W`.
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Mask selecting the low digit of a `DoubleDigit`.
pub const DIGIT_MASK: Digit = Digit::MAX;

/// Returns the binary logarithm of a digit.
///
/// The result is the `n` for which `2^n <= d < 2^(n+1)`, or `None` when
/// `d == 0`.
#[inline(always)]
pub fn bit_length(d: Digit) -> Option<u32> {
    d.checked_ilog2()
}

/// Splits a double-width value into its `(high, low)` digits.
#[inline(always)]
pub(crate) fn split(t: DoubleDigit) -> (Digit, Digit) {
    ((t >> DIGIT_BITS) as Digit, (t & DIGIT_MASK as DoubleDigit) as Digit)
}

/// Joins a `(high, low)` digit pair into one double-width value.
#[inline(always)]
pub(crate) fn join(hi: Digit, lo: Digit) -> DoubleDigit {
    ((hi as DoubleDigit) << DIGIT_BITS) | lo as DoubleDigit
}
