//! Limb-level algorithms shared by every integer type in this crate.
//!
//! # Purpose
//! The functions here operate on raw limb sequences, least-significant limb first, and know
//! nothing about signs. Sign handling, sign extension and output sizing are the job of the types
//! built on top of them, [`FixedInt`](crate::fixed::FixedInt) for fixed-width two's complement
//! values and [`BigInt`](crate::dynamic::BigInt) for growable ones.
//!
//! # Method
//! Every input is a [`LimbSeq`], which returns 0 when indexed past its length. This lets operands
//! of different lengths, or of different backing stores, be combined without special casing:
//! outputs are plain `&mut [Limb]` slices whose length decides how many limbs are computed, so the
//! same routine wraps for an array and grows for a vector that was sized one limb larger.
//!
//! Outputs are always separate buffers from inputs. The borrow checker forbids passing the same
//! buffer as both, which is what makes `x op= x` safe in the types above.

mod arith;
mod bitwise;
mod div;
mod limbs;
mod radix;
mod shift;
mod tests;

pub use arith::*;
pub use bitwise::*;
pub use div::*;
pub use limbs::*;
pub use radix::*;
pub use shift::*;

#[cfg(any(feature = "fixed", feature = "dynamic"))]
pub(crate) use radix::from_radix_at;

/// A single digit of an arbitrary precision integer.
pub type Limb = u32;

/// An integer wide enough to hold the product of two [`Limb`]s plus a carry.
pub type DoubleLimb = u64;

/// The number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;
