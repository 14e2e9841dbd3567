//! This crate is my attempt at writing arbitrary-precision integers from the limbs up.
//!
//! # Purpose
//! This crate is a project that I'm working on as a learning experience, with no expectation for it
//! to be used in production. Big integer arithmetic is one of those things that looks simple until
//! you try to write division, so writing it myself helps me to understand (and appreciate) crates
//! like `num-bigint` properly.
//!
//! # Method
//! Everything is built on top of [`algo`], a set of plain functions over limb sequences: ripple
//! carry addition and subtraction, schoolbook multiplication, Knuth's long division, shifts,
//! bitwise logic and radix conversion. They work on anything implementing
//! [`LimbSeq`](algo::LimbSeq), so the same code serves two kinds of integer:
//!
//! - [`fixed::FixedInt`] is a `Copy` array of limbs with two's complement semantics, wrapping on
//!   overflow like the native integers. There are aliases for the common widths, from
//!   [`I128`](fixed::I128) up to [`U1024`](fixed::U1024).
//! - [`dynamic::BigUint`] and [`dynamic::BigInt`] grow as needed and keep their limbs normalized,
//!   so they never overflow.
//!
//! All of them implement the full set of arithmetic, bitwise and shift operators (owned, borrowed,
//! compound-assignment and mixed with native integers), comparisons, parsing and formatting.
//!
//! # Error Handling
//! Like the native integers, the operators panic on division by zero rather than forcing a
//! [`Result`] on every use of `/`. Each such operation has a non-panicking alternative, e.g.
//! [`try_div_rem`](dynamic::BigInt::try_div_rem) or [`checked_div`](dynamic::BigInt::checked_div).
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). See [`error`].
//!
//! # Features
//! - `fixed` (default): [`fixed::FixedInt`] and its aliases.
//! - `dynamic` (default): [`dynamic::BigUint`], [`dynamic::BigInt`] and [`dynamic::Sign`].
//! - `num-traits`: implementations of the `num-traits` numeric traits.
//! - `serde`: serialization as decimal strings.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Everything else is optional.
//!
//! # Potential Future Additions
//! - Karatsuba multiplication for large operands.
//! - Divide and conquer radix conversion.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algo;
pub mod error;
#[cfg(feature = "fixed")]
pub mod fixed;
#[cfg(feature = "dynamic")]
pub mod dynamic;

mod interop;
pub(crate) mod util;
