//! Arithmetic on natural numbers
//!
//! Addition, subtraction, comparison, and multiplication and division by a
//! single digit. Each operation comes in two forms:
//! - a buffer-reusing `*_into(self, ...)` form that consumes `self` as the
//!   destination and returns the buffer now owning the result
//! - a convenience form on `&self` that allocates a fresh result
//!
//! Full multi-digit multiplication and division are not provided.

use crate::NaturalError;
use crate::digit::Digit;
use crate::kernels::{
    add_vv, add_vw, add_vw_assign, div_wvw, mul_vw, mul_vw_assign, sub_vv, sub_vw,
};
use crate::natural::Natural;

use std::cmp::Ordering;
use std::ops::{Add, Mul};

impl Natural {
    /// Computes `x + y` into `self`.
    ///
    /// The result has `max(x.len(), y.len())` digits, or one more when a
    /// carry survives the most significant digit.
    pub fn add_into(self, x: &Natural, y: &Natural) -> Natural {
        let (x, y) = if x.len() < y.len() { (y, x) } else { (x, y) };
        let m = x.len();
        let n = y.len();

        if m == 0 {
            // n == 0 because m >= n; result is 0
            return self.ensure_capacity(0);
        }
        if n == 0 {
            return self.set_into(x);
        }

        let mut z = self.ensure_capacity(m);
        let mut c = add_vv(&mut z.digits[..n], &x.digits[..n], &y.digits);

        if m > n {
            c = add_vw(&mut z.digits[n..], &x.digits[n..], c);
        }

        z.push_carry(c);
        z
    }

    /// Computes `x - y` into `self`.
    ///
    /// # Errors
    /// Returns [`NaturalError::Underflow`] when `x < y`. The destination
    /// buffer is dropped in that case.
    pub fn sub_into(self, x: &Natural, y: &Natural) -> Result<Natural, NaturalError> {
        let m = x.len();
        let n = y.len();

        if m < n {
            return Err(NaturalError::Underflow);
        }
        if n == 0 {
            return Ok(self.set_into(x));
        }

        let mut z = self.ensure_capacity(m);
        let mut b = sub_vv(&mut z.digits[..n], &x.digits[..n], &y.digits);

        if m > n {
            b = sub_vw(&mut z.digits[n..], &x.digits[n..], b);
        }
        if b != 0 {
            return Err(NaturalError::Underflow);
        }

        Ok(z.normalize())
    }

    /// Returns `self - y`.
    ///
    /// # Errors
    /// Returns [`NaturalError::Underflow`] when `self < y`.
    pub fn checked_sub(&self, y: &Natural) -> Result<Natural, NaturalError> {
        Natural::new().sub_into(self, y)
    }

    /// Compares two natural numbers.
    ///
    /// Normalized values with fewer digits are smaller; equal lengths are
    /// decided by the most significant differing digit.
    pub fn compare(&self, y: &Natural) -> Ordering {
        self.len()
            .cmp(&y.len())
            .then_with(|| self.digits.iter().rev().cmp(y.digits.iter().rev()))
    }

    /// Computes `x * y` into `self` for a single digit `y`.
    pub fn mul_digit_into(self, x: &Natural, y: Digit) -> Natural {
        if x.is_zero() || y == 0 {
            return self.ensure_capacity(0);
        }
        if y == 1 {
            return self.set_into(x);
        }

        let mut z = self.ensure_capacity(x.len());
        let c = mul_vw(&mut z.digits, &x.digits, y);

        z.push_carry(c);
        z
    }

    /// Returns `self * y` for a single digit `y`.
    pub fn mul_digit(&self, y: Digit) -> Natural {
        Natural::new().mul_digit_into(self, y)
    }

    /// Computes `x * y + a` into `self` in a single pass.
    pub fn mul_add_digit_into(self, x: &Natural, y: Digit, a: Digit) -> Natural {
        let mut z = self.set_into(x);
        z.mul_add_digit_assign(y, a);
        z
    }

    /// Replaces `self` with `self * y + a`.
    ///
    /// `x * y + a < B^(n+1)` for any `n`-digit `x`, so the top digit
    /// `c + c2` below cannot overflow.
    pub(crate) fn mul_add_digit_assign(&mut self, y: Digit, a: Digit) {
        let c = mul_vw_assign(&mut self.digits, y);
        let c2 = add_vw_assign(&mut self.digits, a);

        self.push_carry(c + c2);
        self.trim();
    }

    /// Divides `x` by a single digit `y` into `self`.
    ///
    /// Returns the quotient `q = (x - r) / y` and the remainder `r`, with
    /// `0 <= r < y`.
    ///
    /// # Errors
    /// Returns [`NaturalError::DivisionByZero`] when `y == 0`.
    pub fn div_rem_digit_into(
        self,
        x: &Natural,
        y: Digit,
    ) -> Result<(Natural, Digit), NaturalError> {
        if y == 0 {
            return Err(NaturalError::DivisionByZero);
        }
        if y == 1 {
            return Ok((self.set_into(x), 0));
        }
        if x.is_zero() {
            return Ok((self.ensure_capacity(0), 0));
        }

        let mut z = self.ensure_capacity(x.len());
        let r = div_wvw(&mut z.digits, 0, &x.digits, y)?;

        Ok((z.normalize(), r))
    }

    /// Returns `(self / y, self % y)` for a single digit `y`.
    ///
    /// # Errors
    /// Returns [`NaturalError::DivisionByZero`] when `y == 0`.
    pub fn div_rem_digit(&self, y: Digit) -> Result<(Natural, Digit), NaturalError> {
        Natural::new().div_rem_digit_into(self, y)
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Self::Output {
        Natural::new().add_into(self, rhs)
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Self::Output {
        &self + &rhs
    }
}

/// Multiplication by a single digit.
impl Mul<Digit> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Digit) -> Self::Output {
        self.mul_digit(rhs)
    }
}
