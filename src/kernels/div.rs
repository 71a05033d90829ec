//! Division of a digit vector by a single digit.
//!
//! Digits are consumed from the most significant end. The incoming partial
//! remainder `r` lets a caller divide a long number segment by segment:
//! the remainder returned for the upper segment is passed as `r` for the
//! next lower one. The top-level call passes `r = 0`.

use crate::NaturalError;
use crate::digit::{Digit, DoubleDigit, join};

/// Rejects a zero divisor and an incoming remainder that would push a
/// quotient digit past `B - 1`.
fn check_divisor(r: Digit, y: Digit) -> Result<(), NaturalError> {
    if y == 0 {
        return Err(NaturalError::DivisionByZero);
    }
    if r >= y {
        return Err(NaturalError::RemainderTooLarge {
            remainder: r,
            divisor: y,
        });
    }

    Ok(())
}

#[inline(always)]
fn div_digit(r: Digit, a: Digit, y: Digit) -> (Digit, Digit) {
    let t = join(r, a);
    let y = y as DoubleDigit;

    ((t / y) as Digit, (t % y) as Digit)
}

/// Computes `z = (r * B^n + x) / y` for `n = z.len()` and returns the
/// remainder.
///
/// # Errors
/// - [`NaturalError::DivisionByZero`] when `y == 0`
/// - [`NaturalError::RemainderTooLarge`] when `r >= y`
///
/// Nothing is written to `z` in either case.
///
/// # Panics
/// Panics if `x` is shorter than `z`.
pub fn div_wvw(
    z: &mut [Digit],
    r: Digit,
    x: &[Digit],
    y: Digit,
) -> Result<Digit, NaturalError> {
    assert!(x.len() >= z.len(), "source is shorter than destination");

    check_divisor(r, y)?;

    let mut rem = r;

    for (o, &a) in z.iter_mut().zip(x.iter()).rev() {
        (*o, rem) = div_digit(rem, a, y);
    }

    Ok(rem)
}

/// In-place form of [`div_wvw`]: `z = (r * B^n + z) / y`.
///
/// # Errors
/// Same as [`div_wvw`].
pub fn div_wvw_assign(z: &mut [Digit], r: Digit, y: Digit) -> Result<Digit, NaturalError> {
    check_divisor(r, y)?;

    let mut rem = r;

    for o in z.iter_mut().rev() {
        (*o, rem) = div_digit(rem, *o, y);
    }

    Ok(rem)
}
