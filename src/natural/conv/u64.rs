//! Conversions between `Natural` and integers of at most 64 bits.

use super::u128::to_u128;
use crate::NaturalError;
use crate::natural::Natural;

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Natural::from_u64(value)
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Natural::from_u64(value.into())
    }
}

impl From<u16> for Natural {
    fn from(value: u16) -> Self {
        Natural::from_u64(value.into())
    }
}

impl From<u8> for Natural {
    fn from(value: u8) -> Self {
        Natural::from_u64(value.into())
    }
}

/// Succeeds only when the value is below `2^64`.
impl TryFrom<&Natural> for u64 {
    type Error = NaturalError;

    fn try_from(value: &Natural) -> Result<Self, Self::Error> {
        u64::try_from(to_u128(value)?).map_err(|_| NaturalError::Overflow)
    }
}
