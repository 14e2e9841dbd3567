//! Growable integers stored in a vector of limbs.
//!
//! # Purpose
//! [`BigUint`] is an unbounded unsigned magnitude and [`BigInt`] pairs one with a [`Sign`]. Both
//! keep their limbs normalized after every operation: there are never high-order zero limbs and
//! zero is stored as a single zero limb, so every value has exactly one representation and the
//! derived equality and hashing are correct.
//!
//! # Method
//! Arithmetic is delegated to the limb algorithms in [`algo`](crate::algo), with each output
//! buffer sized so that nothing is lost: one extra limb for a carry, the sum of the operand
//! lengths for a product. Compound assignment computes the result into a new buffer before
//! replacing the left hand side.
//!
//! Bitwise operators on [`BigInt`] act as if negative values were stored in two's complement with
//! an infinite run of leading ones, matching the native signed integers.

mod big_int;
mod big_uint;
#[cfg(feature = "fixed")]
mod bridge;
mod cmp;
mod convert;
mod fmt;
mod ops;
mod sign;
mod tests;

pub use big_int::*;
pub use big_uint::*;
pub use sign::*;
