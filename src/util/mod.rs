#![warn(missing_docs)]

#[cfg(any(feature = "fixed", feature = "dynamic"))]
pub mod ops;
pub mod panic;
#[cfg(any(feature = "fixed", feature = "dynamic"))]
pub mod result;
