//! Conversions between `Natural` and `u128`.

use crate::NaturalError;
use crate::digit::{DIGIT_BITS, Digit};
use crate::natural::Natural;

/// Folds the digits of `value` into a `u128`, most significant first.
///
/// All narrower conversions go through this one.
pub(super) fn to_u128(value: &Natural) -> Result<u128, NaturalError> {
    if value.bit_length().is_some_and(|n| n >= u128::BITS as usize) {
        return Err(NaturalError::Overflow);
    }

    Ok(value
        .digits
        .iter()
        .rev()
        .fold(0u128, |acc, &d| (acc << DIGIT_BITS) | d as u128))
}

impl From<u128> for Natural {
    /// Splits `value` into digits, least significant first.
    fn from(value: u128) -> Self {
        let n = (u128::BITS - value.leading_zeros()).div_ceil(DIGIT_BITS) as usize;
        let mut z = Natural::new().ensure_capacity(n);
        let mut rest = value;

        for d in z.digits.iter_mut() {
            *d = rest as Digit;
            rest >>= DIGIT_BITS;
        }

        z
    }
}

impl TryFrom<&Natural> for u128 {
    type Error = NaturalError;

    fn try_from(value: &Natural) -> Result<Self, Self::Error> {
        to_u128(value)
    }
}
