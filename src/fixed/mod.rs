//! Fixed-width integers stored as an array of limbs, with two's complement semantics.
//!
//! [`FixedInt`] is parameterized by its number of limbs and its signedness, and behaves like the
//! native integer types do in release builds: every operation wraps modulo `2^BITS`. Aliases are
//! provided for the common widths, such as [`I128`] and [`U256`].
//!
//! Besides the inherent methods, the type implements all arithmetic, bitwise and shift operators
//! (including their compound assignment forms) against itself and against every native integer
//! type, along with the formatting traits and conversions to and from native integers.

mod cmp;
mod convert;
mod fixed_int;
mod fmt;
mod ops;

pub use fixed_int::*;
