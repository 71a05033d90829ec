//! Conversions between `Natural` and native unsigned integers.
//!
//! Widening into a `Natural` always succeeds. Narrowing back fails with
//! `NaturalError::Overflow` instead of truncating.
//!
//! The conversions are split by integer width, like the digit kernels are
//! split by operation, to keep each file small.

mod u128;
mod u64;
mod usize;
