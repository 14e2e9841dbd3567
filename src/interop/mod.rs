//! Implementations of traits from other crates, each behind a feature of the same name as the
//! crate.
//!
//! - `num-traits`: the numeric traits (`Zero`, `Num`, `Signed`, the primitive conversions and so
//!   on), so that generic numeric code can accept these integers.
//! - `serde`: serialization as a decimal string. Deserialization also accepts native integers from
//!   self-describing formats, so a JSON `42` and `"42"` are equivalent.

#[cfg(feature = "num-traits")]
mod num;
#[cfg(feature = "serde")]
mod serial;
