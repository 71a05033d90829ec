//! Binary logarithm of a natural number.

use crate::digit::{self, DIGIT_BITS};
use crate::natural::Natural;

impl Natural {
    /// Returns the binary logarithm of the value.
    ///
    /// The result is the `n` for which `2^n <= self < 2^(n+1)`, i.e. the
    /// index of the highest set bit. Zero has no bit length and yields
    /// `None`.
    pub fn bit_length(&self) -> Option<usize> {
        let (&top, rest) = self.digits.split_last()?;

        digit::bit_length(top).map(|b| rest.len() * DIGIT_BITS as usize + b as usize)
    }
}
