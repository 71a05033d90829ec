//! Arbitrary-precision natural number arithmetic
//!
//! This crate provides unsigned integers of unbounded size and the
//! operations that a signed integer or rational type is built on.
//!
//! The focus is on **explicit carry and borrow bookkeeping, predictable
//! ownership, and typed errors**, rather than on a large arithmetic API.
//!
//! # Module overview
//!
//! - `digit`  
//!   The digit type and its compile-time width. Digits are native machine
//!   words (`u64` on 64-bit targets, `u32` otherwise or with the `digit32`
//!   feature), paired with a double-width type for carries and partial
//!   products.
//!
//! - `kernels`  
//!   Allocation-free primitives on raw digit slices: add with carry,
//!   subtract with borrow, multiply by a digit, divide by a digit with
//!   remainder. All algorithmic correctness rests here.
//!
//! - `natural`  
//!   The normalized `Natural` type, arithmetic built on the kernels, the
//!   binary logarithm, and conversion to and from text in bases 2 to 16.
//!
//! # Ownership of result buffers
//!
//! Every arithmetic operation has a `*_into(self, ...)` form that takes the
//! destination by value. Its storage is reused when it is large enough and
//! replaced otherwise; in both cases the returned `Natural` is the only
//! valid owner of the result.
//!
//! ```
//! use natural::Natural;
//!
//! let x = Natural::from_u64(40);
//! let y = Natural::from_u64(2);
//!
//! let buf = Natural::new();
//! let sum = buf.add_into(&x, &y);
//! assert_eq!(sum.to_string(), "42");
//! ```
//!
//! # Errors
//!
//! Contract violations (division by zero, subtraction underflow, invalid
//! base) are reported through [`NaturalError`] rather than panics.
//!
//! # Design goals
//!
//! - No allocations in the kernels
//! - Normalized values only at the API boundary
//! - Compile-time digit width
//! - No multi-digit multiplication or division

mod error;

pub mod digit;
pub mod kernels;
pub mod natural;

pub use digit::{DIGIT_BITS, Digit};
pub use error::NaturalError;
pub use natural::{Natural, Parsed};
