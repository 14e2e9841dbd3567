use std::cmp::Ordering;
use std::str::FromStr;

use crate::algo::{self, LIMB_BITS, Limb};
use crate::error::{DivideByZeroError, OutOfRangeError, ParseIntError};
use crate::util::result::ResultExtension;

/// An unsigned integer of unbounded size, stored as a normalized vector of 32-bit limbs, least
/// significant first.
///
/// The limbs never contain a high-order zero limb, and zero is a single zero limb, so two equal
/// values always have identical storage. Subtraction which would produce a negative result panics
/// like it does for the native unsigned types, see [`checked_sub`](BigUint::checked_sub).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of limbs in the left operand.
/// - `m`: The number of limbs in the right operand.
///
/// | Method | Complexity |
/// |-|-|
/// | `add`, `sub` | `O(max(n, m))` |
/// | `and`, `or`, `xor` | `O(max(n, m))` |
/// | `shl`, `shr` | `O(n)` |
/// | `mul` | `O(n * m)` |
/// | `div`, `rem` | `O(n * m)` |
/// | `cmp` | `O(n)` |
/// | `to_string` | `O(n^2)` |
///
/// # Examples
/// ```
/// # use standard_bigint::dynamic::BigUint;
/// let x = BigUint::from(u64::MAX) + 1_u8;
/// assert_eq!(x.as_limbs(), [0, 0, 1]);
/// assert_eq!(x.to_string(), "18446744073709551616");
/// assert_eq!(x.bits(), 65);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    pub(crate) limbs: Vec<Limb>,
}

impl BigUint {
    pub fn zero() -> BigUint {
        BigUint { limbs: vec![0] }
    }

    pub fn one() -> BigUint {
        BigUint { limbs: vec![1] }
    }

    /// Creates a value from limbs in least significant first order, normalizing them.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigUint;
    /// let x = BigUint::from_limbs(vec![5, 0, 0]);
    /// assert_eq!(x.as_limbs(), [5]);
    /// assert_eq!(BigUint::from_limbs(vec![]), BigUint::zero());
    /// ```
    pub fn from_limbs(mut limbs: Vec<Limb>) -> BigUint {
        algo::normalize(&mut limbs);
        BigUint { limbs }
    }

    pub fn from_slice(limbs: &[Limb]) -> BigUint {
        BigUint::from_limbs(limbs[..algo::actual_size(limbs)].to_vec())
    }

    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    pub fn is_one(&self) -> bool {
        self.limbs == [1]
    }

    /// Returns the number of significant limbs, which is 0 for zero.
    pub fn actual_size(&self) -> usize {
        algo::actual_size(&self.limbs)
    }

    /// Returns the number of bits needed to represent the value, which is 0 for zero.
    pub fn bits(&self) -> u64 {
        algo::bit_len(&self.limbs)
    }

    pub fn count_ones(&self) -> u64 {
        algo::count_ones(&self.limbs)
    }

    /// Returns the number of trailing zero bits, or [`None`] for zero.
    pub fn trailing_zeros(&self) -> Option<u64> {
        algo::trailing_zeros(&self.limbs)
    }

    pub fn bit(&self, bit: u64) -> bool {
        algo::test_bit(&self.limbs, bit)
    }

    /// Raises the value to the power of `exp` by repeated squaring.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigUint;
    /// assert_eq!(BigUint::from(3_u8).pow(40).to_string(), "12157665459056928801");
    /// assert_eq!(BigUint::zero().pow(0), BigUint::one());
    /// ```
    pub fn pow(&self, mut exp: u32) -> BigUint {
        let mut base = self.clone();
        let mut acc = BigUint::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.product(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.product(&base);
            }
        }
        acc
    }

    /// Returns `self - rhs`, or [`None`] if the result would be negative.
    pub fn checked_sub(&self, rhs: &BigUint) -> Option<BigUint> {
        if algo::cmp(&self.limbs, &rhs.limbs) == Ordering::Less {
            return None;
        }

        let mut out = vec![0; self.limbs.len()];
        algo::sub_into(&mut out, &self.limbs, &rhs.limbs);
        Some(BigUint::from_limbs(out))
    }

    /// Divides by `rhs`, returning the quotient and remainder.
    ///
    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_div_rem(&self, rhs: &BigUint) -> Result<(BigUint, BigUint), DivideByZeroError> {
        let (quot, rem) = algo::div_rem(&self.limbs, &rhs.limbs)?;
        Ok((BigUint::from_limbs(quot), BigUint::from_limbs(rem)))
    }

    /// # Panics
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub fn div_rem(&self, rhs: &BigUint) -> (BigUint, BigUint) {
        self.try_div_rem(rhs).throw()
    }

    pub fn checked_div(&self, rhs: &BigUint) -> Option<BigUint> {
        self.try_div_rem(rhs).ok().map(|(quot, _)| quot)
    }

    pub fn checked_rem(&self, rhs: &BigUint) -> Option<BigUint> {
        self.try_div_rem(rhs).ok().map(|(_, rem)| rem)
    }

    /// # Panics
    /// Panics if `radix` is not within `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        algo::to_radix(&self.limbs, radix, false)
    }

    /// Parses digits in the given radix, with an optional `+` sign. A `-` sign is only accepted
    /// when the value is zero.
    ///
    /// # Errors
    /// Returns a [`ParseIntError`] if the text is malformed or negative.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigUint;
    /// let x = BigUint::from_str_radix("ffff_ffff_ffff_ffff_ffff", 16).unwrap();
    /// assert_eq!(x.as_limbs(), [u32::MAX, u32::MAX, 0xffff]);
    /// assert!(BigUint::from_str_radix("-1", 10).unwrap_err().is_out_of_range());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigUint, ParseIntError> {
        let (negative, digits) = algo::split_sign(text);
        let magnitude = algo::from_radix_at(digits, radix, text.len() - digits.len())?;
        Ok(BigUint::from_signed_limbs(negative, magnitude)?)
    }

    fn from_signed_limbs(negative: bool, limbs: Vec<Limb>) -> Result<BigUint, OutOfRangeError> {
        let value = BigUint::from_limbs(limbs);
        if negative && !value.is_zero() { Err(OutOfRangeError) } else { Ok(value) }
    }

    /// Returns the value as a [`u128`] if it fits.
    pub(crate) fn to_u128_checked(&self) -> Option<u128> {
        if self.limbs.len() > 4 {
            return None;
        }
        Some(self.limbs.iter().rev().fold(0, |acc, &limb| acc << LIMB_BITS | limb as u128))
    }

    pub(crate) fn sum(&self, rhs: &BigUint) -> BigUint {
        let mut out = vec![0; self.limbs.len().max(rhs.limbs.len()) + 1];
        algo::add_into(&mut out, &self.limbs, &rhs.limbs);
        BigUint::from_limbs(out)
    }

    #[track_caller]
    pub(crate) fn difference(&self, rhs: &BigUint) -> BigUint {
        match self.checked_sub(rhs) {
            Some(diff) => diff,
            None => panic!("attempt to subtract with overflow"),
        }
    }

    pub(crate) fn product(&self, rhs: &BigUint) -> BigUint {
        if self.is_zero() || rhs.is_zero() {
            return BigUint::zero();
        }

        let mut out = vec![0; self.limbs.len() + rhs.limbs.len()];
        algo::mul_into(&mut out, &self.limbs, &rhs.limbs);
        BigUint::from_limbs(out)
    }

    #[track_caller]
    pub(crate) fn quotient(&self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).0
    }

    #[track_caller]
    pub(crate) fn remainder(&self, rhs: &BigUint) -> BigUint {
        self.div_rem(rhs).1
    }

    pub(crate) fn bit_and(&self, rhs: &BigUint) -> BigUint {
        let mut out = vec![0; self.limbs.len().min(rhs.limbs.len())];
        algo::and_into(&mut out, &self.limbs, &rhs.limbs);
        BigUint::from_limbs(out)
    }

    pub(crate) fn bit_or(&self, rhs: &BigUint) -> BigUint {
        let mut out = vec![0; self.limbs.len().max(rhs.limbs.len())];
        algo::or_into(&mut out, &self.limbs, &rhs.limbs);
        BigUint::from_limbs(out)
    }

    pub(crate) fn bit_xor(&self, rhs: &BigUint) -> BigUint {
        let mut out = vec![0; self.limbs.len().max(rhs.limbs.len())];
        algo::xor_into(&mut out, &self.limbs, &rhs.limbs);
        BigUint::from_limbs(out)
    }

    pub(crate) fn shift_left(&self, bits: usize) -> BigUint {
        if self.is_zero() {
            return BigUint::zero();
        }

        let mut out = vec![0; self.limbs.len() + bits / LIMB_BITS as usize + 1];
        algo::shl_into(&mut out, &self.limbs, bits);
        BigUint::from_limbs(out)
    }

    pub(crate) fn shift_right(&self, bits: usize) -> BigUint {
        let len = self.limbs.len().saturating_sub(bits / LIMB_BITS as usize);
        if len == 0 {
            return BigUint::zero();
        }

        let mut out = vec![0; len];
        algo::shr_into(&mut out, &self.limbs, bits);
        BigUint::from_limbs(out)
    }
}

impl Default for BigUint {
    fn default() -> BigUint {
        BigUint::zero()
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &BigUint) -> Ordering {
        algo::cmp(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigUint {
    type Err = ParseIntError;

    /// Parses a literal such as `123`, `0xFF` or `0b1010_1010`, see
    /// [`split_literal`](algo::split_literal).
    fn from_str(text: &str) -> Result<BigUint, ParseIntError> {
        let literal = algo::split_literal(text);
        let magnitude = algo::from_radix_at(literal.digits, literal.radix, literal.offset)?;
        Ok(BigUint::from_signed_limbs(literal.negative, magnitude)?)
    }
}
