use std::cmp::Ordering;
use std::str::FromStr;

use super::{BigUint, Sign};
use crate::algo::{self, LIMB_BITS, Limb};
use crate::error::{DivideByZeroError, ParseIntError};
use crate::util::result::ResultExtension;

/// A signed integer of unbounded size, stored as a [`Sign`] and a [`BigUint`] magnitude.
///
/// The sign is [`Sign::NoSign`] exactly when the magnitude is zero, so there is no negative zero.
/// Division truncates toward zero and the remainder takes the sign of the dividend, as with the
/// native signed types. Right shifts round toward negative infinity, and the bitwise operators
/// treat negative values as two's complement with infinitely many leading ones.
///
/// # Examples
/// ```
/// # use standard_bigint::dynamic::BigInt;
/// let x = BigInt::from(-51);
/// assert_eq!(&x % 13, -12);
/// assert_eq!(&x / 13, -3);
/// assert_eq!(&x >> 2, -13);
/// assert_eq!(x & 0xff, 0xcd);
///
/// let big: BigInt = "-0x1_0000_0000_0000_0000".parse().unwrap();
/// assert_eq!(big.to_string(), "-18446744073709551616");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    magnitude: BigUint,
}

impl BigInt {
    pub fn zero() -> BigInt {
        BigInt { sign: Sign::NoSign, magnitude: BigUint::zero() }
    }

    pub fn one() -> BigInt {
        BigInt { sign: Sign::Plus, magnitude: BigUint::one() }
    }

    /// Creates a value from a sign and magnitude. A zero magnitude always produces zero, and a
    /// nonzero magnitude with [`Sign::NoSign`] is taken to be positive.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::{BigInt, BigUint, Sign};
    /// let x = BigInt::from_parts(Sign::Minus, BigUint::from(7_u8));
    /// assert_eq!(x, -7);
    ///
    /// let zero = BigInt::from_parts(Sign::Minus, BigUint::zero());
    /// assert_eq!(zero.sign(), Sign::NoSign);
    /// ```
    pub fn from_parts(sign: Sign, magnitude: BigUint) -> BigInt {
        let sign = match sign {
            _ if magnitude.is_zero() => Sign::NoSign,
            Sign::NoSign => Sign::Plus,
            sign => sign,
        };
        BigInt { sign, magnitude }
    }

    pub fn from_limbs(sign: Sign, limbs: Vec<Limb>) -> BigInt {
        BigInt::from_parts(sign, BigUint::from_limbs(limbs))
    }

    pub fn into_parts(self) -> (Sign, BigUint) {
        (self.sign, self.magnitude)
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> BigInt {
        match self.sign {
            Sign::Minus => -BigInt::one(),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_parts(Sign::Plus, self.magnitude.clone())
    }

    /// Returns the number of significant limbs in the magnitude.
    pub fn actual_size(&self) -> usize {
        self.magnitude.actual_size()
    }

    /// Returns the number of bits in the magnitude, which is 0 for zero.
    pub fn bits(&self) -> u64 {
        self.magnitude.bits()
    }

    /// Returns the number of trailing zero bits, or [`None`] for zero. Negation doesn't change the
    /// result.
    pub fn trailing_zeros(&self) -> Option<u64> {
        self.magnitude.trailing_zeros()
    }

    /// Returns the bit at position `bit` of the two's complement representation.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigInt;
    /// let x = BigInt::from(-4);
    /// assert!(!x.bit(0));
    /// assert!(x.bit(2));
    /// assert!(x.bit(1000));
    /// ```
    pub fn bit(&self, bit: u64) -> bool {
        if !self.is_negative() {
            return self.magnitude.bit(bit);
        }

        // Below the lowest set bit of the magnitude, -x has zeros. The lowest set bit is shared,
        // and every bit above it is inverted.
        match self.magnitude.trailing_zeros() {
            Some(lowest) if bit < lowest => false,
            Some(lowest) if bit == lowest => true,
            _ => !self.magnitude.bit(bit),
        }
    }

    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigInt;
    /// assert_eq!(BigInt::from(-2).pow(63), i64::MIN);
    /// assert_eq!(BigInt::from(-2).pow(64), BigInt::from(1_u128 << 64));
    /// ```
    pub fn pow(&self, exp: u32) -> BigInt {
        let sign = if self.is_negative() && exp % 2 == 1 { Sign::Minus } else { Sign::Plus };
        BigInt::from_parts(sign, self.magnitude.pow(exp))
    }

    /// Divides by `rhs`, returning the quotient truncated toward zero and a remainder with the
    /// sign of `self`.
    ///
    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    pub fn try_div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), DivideByZeroError> {
        let (quot, rem) = self.magnitude.try_div_rem(&rhs.magnitude)?;
        Ok((
            BigInt::from_parts(self.sign * rhs.sign, quot),
            BigInt::from_parts(self.sign, rem),
        ))
    }

    /// # Panics
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        self.try_div_rem(rhs).throw()
    }

    pub fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        self.try_div_rem(rhs).ok().map(|(quot, _)| quot)
    }

    pub fn checked_rem(&self, rhs: &BigInt) -> Option<BigInt> {
        self.try_div_rem(rhs).ok().map(|(_, rem)| rem)
    }

    /// Formats the value in the given radix, with a leading `-` for negative values.
    ///
    /// # Panics
    /// Panics if `radix` is not within `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = self.magnitude.to_str_radix(radix);
        if self.is_negative() { format!("-{}", digits) } else { digits }
    }

    /// Parses a value with an optional sign from digits in the given radix. No radix prefix is
    /// accepted.
    ///
    /// # Errors
    /// Returns a [`ParseIntError`] if the text is malformed.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigInt;
    /// assert_eq!(BigInt::from_str_radix("-zz", 36), Ok(BigInt::from(-1295)));
    /// assert!(BigInt::from_str_radix("", 10).unwrap_err().is_empty());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<BigInt, ParseIntError> {
        let (negative, digits) = algo::split_sign(text);
        let magnitude = algo::from_radix_at(digits, radix, text.len() - digits.len())?;
        Ok(BigInt::from_limbs(if negative { Sign::Minus } else { Sign::Plus }, magnitude))
    }

    /// Returns the value as an [`i128`] if it fits.
    pub(crate) fn to_i128_checked(&self) -> Option<i128> {
        let magnitude = self.magnitude.to_u128_checked()?;
        if !self.is_negative() {
            i128::try_from(magnitude).ok()
        } else if magnitude > 1 << 127 {
            None
        } else {
            Some((magnitude as i128).wrapping_neg())
        }
    }

    /// Returns the value as a [`u128`] if it is non-negative and fits.
    pub(crate) fn to_u128_checked(&self) -> Option<u128> {
        if self.is_negative() { None } else { self.magnitude.to_u128_checked() }
    }

    /// Returns the low `len` limbs of the two's complement representation.
    fn to_twos_complement(&self, len: usize) -> Vec<Limb> {
        let mut limbs = self.magnitude.limbs.clone();
        limbs.resize(len, 0);
        if self.is_negative() {
            algo::negate_in_place(&mut limbs);
        }
        limbs
    }

    /// Reads a two's complement sequence whose top bit is the sign bit.
    fn from_twos_complement(mut limbs: Vec<Limb>) -> BigInt {
        let negative = limbs.last().is_some_and(|&top| top >> (LIMB_BITS - 1) == 1);
        if negative {
            algo::negate_in_place(&mut limbs);
            BigInt::from_limbs(Sign::Minus, limbs)
        } else {
            BigInt::from_limbs(Sign::Plus, limbs)
        }
    }

    /// Applies a limb-wise operation to both operands in two's complement, with one limb more than
    /// the longer magnitude so that the top limb holds nothing but sign bits.
    fn bitwise<F>(&self, rhs: &BigInt, op: F) -> BigInt
    where
        F: Fn(&mut [Limb], &[Limb], &[Limb]),
    {
        let len = self.magnitude.limbs.len().max(rhs.magnitude.limbs.len()) + 1;
        let (lhs, rhs) = (self.to_twos_complement(len), rhs.to_twos_complement(len));
        let mut out = vec![0; len];
        op(out.as_mut_slice(), lhs.as_slice(), rhs.as_slice());
        BigInt::from_twos_complement(out)
    }

    pub(crate) fn sum(&self, rhs: &BigInt) -> BigInt {
        match (self.sign, rhs.sign) {
            (_, Sign::NoSign) => self.clone(),
            (Sign::NoSign, _) => rhs.clone(),
            (lhs_sign, rhs_sign) if lhs_sign == rhs_sign => {
                BigInt::from_parts(lhs_sign, self.magnitude.sum(&rhs.magnitude))
            },
            (lhs_sign, rhs_sign) => match self.magnitude.cmp(&rhs.magnitude) {
                Ordering::Less => {
                    BigInt::from_parts(rhs_sign, rhs.magnitude.difference(&self.magnitude))
                },
                Ordering::Greater => {
                    BigInt::from_parts(lhs_sign, self.magnitude.difference(&rhs.magnitude))
                },
                Ordering::Equal => BigInt::zero(),
            },
        }
    }

    pub(crate) fn difference(&self, rhs: &BigInt) -> BigInt {
        self.sum(&rhs.negated())
    }

    pub(crate) fn product(&self, rhs: &BigInt) -> BigInt {
        BigInt::from_parts(self.sign * rhs.sign, self.magnitude.product(&rhs.magnitude))
    }

    #[track_caller]
    pub(crate) fn quotient(&self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).0
    }

    #[track_caller]
    pub(crate) fn remainder(&self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).1
    }

    pub(crate) fn bit_and(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, algo::and_into::<[Limb], [Limb]>)
    }

    pub(crate) fn bit_or(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, algo::or_into::<[Limb], [Limb]>)
    }

    pub(crate) fn bit_xor(&self, rhs: &BigInt) -> BigInt {
        self.bitwise(rhs, algo::xor_into::<[Limb], [Limb]>)
    }

    /// Returns `!self`, which is `-self - 1`.
    pub(crate) fn bit_not(&self) -> BigInt {
        if self.is_negative() {
            BigInt::from_parts(Sign::Plus, self.magnitude.difference(&BigUint::one()))
        } else {
            BigInt::from_parts(Sign::Minus, self.magnitude.sum(&BigUint::one()))
        }
    }

    pub(crate) fn negated(&self) -> BigInt {
        BigInt { sign: -self.sign, magnitude: self.magnitude.clone() }
    }

    pub(crate) fn shift_left(&self, bits: usize) -> BigInt {
        BigInt::from_parts(self.sign, self.magnitude.shift_left(bits))
    }

    /// Shifts right, rounding toward negative infinity.
    pub(crate) fn shift_right(&self, bits: usize) -> BigInt {
        if !self.is_negative() {
            return BigInt::from_parts(self.sign, self.magnitude.shift_right(bits));
        }

        // -x >> k == -(((x - 1) >> k) + 1)
        let magnitude = self.magnitude.difference(&BigUint::one()).shift_right(bits);
        BigInt::from_parts(Sign::Minus, magnitude.sum(&BigUint::one()))
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Minus => other.magnitude.cmp(&self.magnitude),
                Sign::NoSign => Ordering::Equal,
                Sign::Plus => self.magnitude.cmp(&other.magnitude),
            },
            ordering => ordering,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigInt {
    type Err = ParseIntError;

    /// Parses a literal such as `-123`, `0xFF` or `0b1010_1010`, see
    /// [`split_literal`](algo::split_literal).
    fn from_str(text: &str) -> Result<BigInt, ParseIntError> {
        let literal = algo::split_literal(text);
        let magnitude = algo::from_radix_at(literal.digits, literal.radix, literal.offset)?;
        let sign = if literal.negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_limbs(sign, magnitude))
    }
}
