//! Conversions between `Natural` and `usize`.
//!
//! `usize` is at most 64 bits wide on every supported target, so both
//! directions go through the `u64` conversions.

use crate::NaturalError;
use crate::natural::Natural;

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        Natural::from_u64(value as u64)
    }
}

impl TryFrom<&Natural> for usize {
    type Error = NaturalError;

    fn try_from(value: &Natural) -> Result<Self, Self::Error> {
        let wide = u64::try_from(value)?;

        usize::try_from(wide).map_err(|_| NaturalError::Overflow)
    }
}
