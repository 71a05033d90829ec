//! Arbitrary-precision natural numbers
//!
//! This module defines `Natural`, an unsigned integer of unbounded size
//! built on the digit kernels.
//!
//! `Natural` is the magnitude type a signed integer layer (sign plus
//! magnitude) and a rational layer (pairs of integers) would delegate to.
//! It deliberately stops short of a full big-integer library: the only
//! multiplication and division provided take a single-digit operand.
//!
//! Submodules:
//! - `core`: representation, normalization and buffer management
//! - `ops`: addition, subtraction, comparison, scalar multiply and divide
//! - `bits`: binary logarithm
//! - `radix`: text conversion in bases 2 to 16
//! - `conv`: conversions to and from native unsigned integers

mod bits;
mod conv;
mod core;
mod ops;
mod radix;

pub use self::core::Natural;
pub use self::radix::Parsed;
