//! Subtraction kernels with borrow propagation.
//!
//! The difference of each digit position is taken in double width with
//! wrapping arithmetic. When the position underflows, every bit above the
//! low digit is set, so bit `DIGIT_BITS` of the wide result is the borrow.

use crate::digit::{DIGIT_BITS, Digit, DoubleDigit};

#[inline(always)]
fn sub_digit(a: Digit, b: Digit, borrow: Digit) -> (Digit, Digit) {
    let diff = (a as DoubleDigit)
        .wrapping_sub(b as DoubleDigit)
        .wrapping_sub(borrow as DoubleDigit);

    (diff as Digit, ((diff >> DIGIT_BITS) & 1) as Digit)
}

/// Computes `z = x - y` over `z.len()` digits and returns the borrow out.
///
/// A returned borrow of 1 after covering the full operands means `x < y`.
///
/// # Panics
/// Panics if `x` or `y` is shorter than `z`.
pub fn sub_vv(z: &mut [Digit], x: &[Digit], y: &[Digit]) -> Digit {
    assert!(x.len() >= z.len() && y.len() >= z.len(), "source is shorter than destination");

    let mut borrow: Digit = 0;

    for (o, (&a, &b)) in z.iter_mut().zip(x.iter().zip(y.iter())) {
        (*o, borrow) = sub_digit(a, b, borrow);
    }

    borrow
}

/// In-place form of [`sub_vv`]: `z -= y` over `z.len()` digits.
///
/// # Panics
/// Panics if `y` is shorter than `z`.
pub fn sub_vv_assign(z: &mut [Digit], y: &[Digit]) -> Digit {
    assert!(y.len() >= z.len(), "source is shorter than destination");

    let mut borrow: Digit = 0;

    for (o, &b) in z.iter_mut().zip(y.iter()) {
        (*o, borrow) = sub_digit(*o, b, borrow);
    }

    borrow
}

/// Computes `z = x - b` over `z.len()` digits and returns the borrow out.
///
/// # Panics
/// Panics if `x` is shorter than `z`.
pub fn sub_vw(z: &mut [Digit], x: &[Digit], b: Digit) -> Digit {
    assert!(x.len() >= z.len(), "source is shorter than destination");

    let mut borrow = b;

    for (o, &a) in z.iter_mut().zip(x.iter()) {
        (*o, borrow) = sub_digit(a, 0, borrow);
    }

    borrow
}

/// In-place form of [`sub_vw`]: `z -= b`.
pub fn sub_vw_assign(z: &mut [Digit], b: Digit) -> Digit {
    let mut borrow = b;

    for o in z.iter_mut() {
        if borrow == 0 {
            break;
        }

        (*o, borrow) = sub_digit(*o, 0, borrow);
    }

    borrow
}
