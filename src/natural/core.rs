//! Natural number representation
//!
//! A natural number `x` of the form
//!
//! `x = x[n-1]*B^(n-1) + x[n-2]*B^(n-2) + ... + x[1]*B + x[0]`
//!
//! with `0 <= x[i] < B` is stored as a vector of `n` digits, least
//! significant first.
//!
//! A number is normalized when the vector has no most-significant zero
//! digit. Zero is the empty vector. Arithmetic may build denormalized
//! intermediates internally, but every value handed back to a caller is
//! normalized.

use crate::digit::{DIGIT_BITS, Digit};

/// Smallest capacity allocated for a fresh digit buffer, before the extra
/// carry digit.
const MIN_CAPACITY: usize = 4;

/// Arbitrary-precision unsigned integer.
///
/// `Natural` owns its digit buffer. Operations ending in `_into` consume
/// `self` as a destination buffer, reuse its storage when it is large
/// enough, and return the value that now owns the result. The consumed
/// buffer cannot be observed again, so there is no aliasing between the
/// destination and the operands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural {
    pub(crate) digits: Vec<Digit>,
}

impl Natural {
    /// Returns the value zero without allocating.
    pub const fn new() -> Self {
        Natural { digits: Vec::new() }
    }

    /// Builds a natural number from a 64-bit unsigned integer.
    pub fn from_u64(value: u64) -> Self {
        Natural::new().set_u64_into(value)
    }

    /// Buffer-reusing form of [`Natural::from_u64`].
    pub fn set_u64_into(self, value: u64) -> Self {
        if value == 0 {
            return self.ensure_capacity(0);
        }

        // single-digit values
        if value as Digit as u64 == value {
            let mut z = self.ensure_capacity(1);
            z.digits[0] = value as Digit;
            return z;
        }

        let n = (u64::BITS - value.leading_zeros()).div_ceil(DIGIT_BITS) as usize;
        let mut z = self.ensure_capacity(n);
        let mut rest = value;

        for d in z.digits.iter_mut() {
            *d = rest as Digit;
            rest = rest.checked_shr(DIGIT_BITS).unwrap_or(0);
        }

        z
    }

    /// Builds a natural number from little-endian digits, normalizing them.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Natural { digits }.normalize()
    }

    /// Returns the little-endian digits of the value.
    ///
    /// The slice is normalized: it never ends in a zero digit.
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Consumes the value and returns its digit buffer.
    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }

    /// Number of digits in the normalized representation.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` for the empty digit sequence, the only encoding of 0.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `true` when the value has no digits; same as [`is_zero`](Self::is_zero).
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.digits.capacity()
    }

    /// Strips most-significant zero digits. Idempotent.
    pub(crate) fn normalize(mut self) -> Self {
        self.trim();
        self
    }

    /// In-place form of [`Natural::normalize`].
    pub(crate) fn trim(&mut self) {
        let n = self
            .digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(0, |i| i + 1);

        self.digits.truncate(n);
    }

    /// Returns a buffer of exactly `len` zero digits.
    ///
    /// The current storage is kept when its capacity leaves room for `len`
    /// digits plus one carry digit, or when `len == 0`. Otherwise a fresh buffer of
    /// `max(len, MIN_CAPACITY) + 1` digits is allocated and the old one is
    /// dropped.
    pub(crate) fn ensure_capacity(mut self, len: usize) -> Self {
        if len == 0 || self.digits.capacity() > len {
            self.digits.clear();
            self.digits.resize(len, 0);
            return self;
        }

        let mut digits = Vec::with_capacity(len.max(MIN_CAPACITY) + 1);
        digits.resize(len, 0);

        Natural { digits }
    }

    /// Copies `x` into `self`, reusing its storage when possible.
    pub fn set_into(self, x: &Natural) -> Self {
        let mut z = self.ensure_capacity(x.len());
        z.digits.copy_from_slice(&x.digits);
        z
    }

    /// Appends `d` as the new most significant digit when it is nonzero.
    pub(crate) fn push_carry(&mut self, d: Digit) {
        if d != 0 {
            self.digits.push(d);
        }
    }
}
