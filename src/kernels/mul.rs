//! Multiplication of a digit vector by a single digit.

use crate::digit::{Digit, DoubleDigit, split};

#[inline(always)]
fn mul_add_digit(a: Digit, y: Digit, carry: Digit) -> (Digit, Digit) {
    // (B-1)^2 + (B-1) < B^2, so the double digit never overflows.
    split(a as DoubleDigit * y as DoubleDigit + carry as DoubleDigit)
}

/// Computes `z = x * y` over `z.len()` digits and returns the carry out.
///
/// The returned carry is the digit that belongs at position `z.len()`; it
/// may take any value in `[0, B)`.
///
/// # Panics
/// Panics if `x` is shorter than `z`.
pub fn mul_vw(z: &mut [Digit], x: &[Digit], y: Digit) -> Digit {
    assert!(x.len() >= z.len(), "source is shorter than destination");

    let mut carry: Digit = 0;

    for (o, &a) in z.iter_mut().zip(x.iter()) {
        (carry, *o) = mul_add_digit(a, y, carry);
    }

    carry
}

/// In-place form of [`mul_vw`]: `z *= y`.
pub fn mul_vw_assign(z: &mut [Digit], y: Digit) -> Digit {
    let mut carry: Digit = 0;

    for o in z.iter_mut() {
        (carry, *o) = mul_add_digit(*o, y, carry);
    }

    carry
}
