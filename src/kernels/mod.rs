//! Digit vector kernels
//!
//! Allocation-free primitives on raw digit slices. Every higher-level
//! operation on `Natural` is expressed in terms of these functions, and all
//! carry and borrow bookkeeping lives here.
//!
//! Conventions shared by every kernel:
//! - slices are little-endian: index 0 holds the least significant digit
//! - the destination slice length is the operand length `n`; source slices
//!   must be at least that long, and a shorter source panics rather than
//!   leaving stale destination digits
//! - no kernel allocates, resizes or normalizes its output
//!
//! Rust does not allow a `&mut` destination to alias a `&` source, so each
//! kernel that is commonly run in place has an `_assign` companion with the
//! same semantics and `x == z`.

mod add;
mod div;
mod mul;
mod sub;

pub use add::{add_vv, add_vv_assign, add_vw, add_vw_assign};
pub use div::{div_wvw, div_wvw_assign};
pub use mul::{mul_vw, mul_vw_assign};
pub use sub::{sub_vv, sub_vv_assign, sub_vw, sub_vw_assign};
