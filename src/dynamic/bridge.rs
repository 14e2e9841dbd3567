//! Conversions between the fixed-width and growable integers.

use super::{BigInt, BigUint, Sign};
use crate::error::OutOfRangeError;
use crate::fixed::FixedInt;

impl<const LIMBS: usize, const SIGNED: bool> From<FixedInt<LIMBS, SIGNED>> for BigInt {
    fn from(value: FixedInt<LIMBS, SIGNED>) -> BigInt {
        let sign = if value.is_negative() { Sign::Minus } else { Sign::Plus };
        BigInt::from_parts(sign, BigUint::from_slice(&value.unsigned_abs().limbs))
    }
}

impl<const LIMBS: usize> From<FixedInt<LIMBS, false>> for BigUint {
    fn from(value: FixedInt<LIMBS, false>) -> BigUint {
        BigUint::from_slice(&value.limbs)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> TryFrom<&BigInt> for FixedInt<LIMBS, SIGNED> {
    type Error = OutOfRangeError;

    /// Converts exactly, failing if the value is outside of the range of the target type.
    fn try_from(value: &BigInt) -> Result<Self, OutOfRangeError> {
        FixedInt::from_magnitude(value.is_negative(), value.magnitude().as_limbs())
    }
}

impl<const LIMBS: usize, const SIGNED: bool> TryFrom<BigInt> for FixedInt<LIMBS, SIGNED> {
    type Error = OutOfRangeError;

    fn try_from(value: BigInt) -> Result<Self, OutOfRangeError> {
        FixedInt::try_from(&value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> TryFrom<&BigUint> for FixedInt<LIMBS, SIGNED> {
    type Error = OutOfRangeError;

    fn try_from(value: &BigUint) -> Result<Self, OutOfRangeError> {
        FixedInt::from_magnitude(false, value.as_limbs())
    }
}

impl<const LIMBS: usize, const SIGNED: bool> TryFrom<BigUint> for FixedInt<LIMBS, SIGNED> {
    type Error = OutOfRangeError;

    fn try_from(value: BigUint) -> Result<Self, OutOfRangeError> {
        FixedInt::try_from(&value)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> FixedInt<LIMBS, SIGNED> {
    /// Converts the value modulo `2^BITS`, the same way as an `as` cast between native integers.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::dynamic::BigInt;
    /// # use standard_bigint::fixed::{I128, U128};
    /// let x = BigInt::from(u128::MAX) + 2;
    /// assert_eq!(U128::from_big_wrapping(&x), U128::ONE);
    /// assert_eq!(I128::from_big_wrapping(&BigInt::from(-3)), I128::from(-3));
    /// assert!(I128::try_from(&x).is_err());
    /// ```
    pub fn from_big_wrapping(value: &BigInt) -> Self {
        let low = Self::from_slice_wrapping(value.magnitude().as_limbs());
        if value.is_negative() { low.wrapping_neg() } else { low }
    }
}
