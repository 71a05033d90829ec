//! Addition kernels with carry propagation.

use crate::digit::{Digit, DoubleDigit, split};

/// Computes `z = x + y` over `z.len()` digits and returns the carry out.
///
/// The carry starts at zero and the returned value is always 0 or 1.
///
/// # Panics
/// Panics if `x` or `y` is shorter than `z`.
pub fn add_vv(z: &mut [Digit], x: &[Digit], y: &[Digit]) -> Digit {
    assert!(x.len() >= z.len() && y.len() >= z.len(), "source is shorter than destination");

    let mut carry: Digit = 0;

    for (o, (&a, &b)) in z.iter_mut().zip(x.iter().zip(y.iter())) {
        let sum = a as DoubleDigit + b as DoubleDigit + carry as DoubleDigit;
        (carry, *o) = split(sum);
    }

    carry
}

/// Computes `z = x + c` over `z.len()` digits and returns the carry out.
///
/// Used to run a pending carry across the tail of the longer operand. An
/// empty slice returns `c` unchanged.
///
/// # Panics
/// Panics if `x` is shorter than `z`.
pub fn add_vw(z: &mut [Digit], x: &[Digit], c: Digit) -> Digit {
    assert!(x.len() >= z.len(), "source is shorter than destination");

    let mut carry = c;

    for (o, &a) in z.iter_mut().zip(x.iter()) {
        (carry, *o) = split(a as DoubleDigit + carry as DoubleDigit);
    }

    carry
}

/// In-place form of [`add_vv`]: `z += y` over `z.len()` digits.
///
/// # Panics
/// Panics if `y` is shorter than `z`.
pub fn add_vv_assign(z: &mut [Digit], y: &[Digit]) -> Digit {
    assert!(y.len() >= z.len(), "source is shorter than destination");

    let mut carry: Digit = 0;

    for (o, &b) in z.iter_mut().zip(y.iter()) {
        (carry, *o) = split(*o as DoubleDigit + b as DoubleDigit + carry as DoubleDigit);
    }

    carry
}

/// In-place form of [`add_vw`]: `z += c`.
///
/// Stops as soon as the carry is absorbed.
pub fn add_vw_assign(z: &mut [Digit], c: Digit) -> Digit {
    let mut carry = c;

    for o in z.iter_mut() {
        if carry == 0 {
            break;
        }

        (carry, *o) = split(*o as DoubleDigit + carry as DoubleDigit);
    }

    carry
}
