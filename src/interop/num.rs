use ::num_traits::{CheckedDiv, CheckedRem, FromPrimitive, Num, One, Pow, ToPrimitive, Zero};

use crate::error::ParseIntError;

#[cfg(feature = "dynamic")]
mod big {
    use ::num_traits::{Signed, Unsigned};

    use super::*;
    use crate::dynamic::{BigInt, BigUint};

    macro_rules! big_num {
        ($($Big:ident),*) => { $(
            impl Zero for $Big {
                fn zero() -> $Big {
                    $Big::zero()
                }

                fn is_zero(&self) -> bool {
                    $Big::is_zero(self)
                }
            }

            impl One for $Big {
                fn one() -> $Big {
                    $Big::one()
                }
            }

            impl Num for $Big {
                type FromStrRadixErr = ParseIntError;

                fn from_str_radix(text: &str, radix: u32) -> Result<$Big, ParseIntError> {
                    $Big::from_str_radix(text, radix)
                }
            }

            impl Pow<u32> for $Big {
                type Output = $Big;

                fn pow(self, exp: u32) -> $Big {
                    $Big::pow(&self, exp)
                }
            }

            impl Pow<u32> for &$Big {
                type Output = $Big;

                fn pow(self, exp: u32) -> $Big {
                    $Big::pow(self, exp)
                }
            }

            impl CheckedDiv for $Big {
                fn checked_div(&self, rhs: &$Big) -> Option<$Big> {
                    $Big::checked_div(self, rhs)
                }
            }

            impl CheckedRem for $Big {
                fn checked_rem(&self, rhs: &$Big) -> Option<$Big> {
                    $Big::checked_rem(self, rhs)
                }
            }

            impl ToPrimitive for $Big {
                fn to_i64(&self) -> Option<i64> {
                    i64::try_from(self).ok()
                }

                fn to_u64(&self) -> Option<u64> {
                    u64::try_from(self).ok()
                }

                fn to_i128(&self) -> Option<i128> {
                    i128::try_from(self).ok()
                }

                fn to_u128(&self) -> Option<u128> {
                    u128::try_from(self).ok()
                }
            }
        )* };
    }

    big_num!(BigUint, BigInt);

    impl Unsigned for BigUint {}

    impl Signed for BigInt {
        fn abs(&self) -> BigInt {
            BigInt::abs(self)
        }

        fn abs_sub(&self, other: &BigInt) -> BigInt {
            if self <= other { BigInt::zero() } else { self - other }
        }

        fn signum(&self) -> BigInt {
            BigInt::signum(self)
        }

        fn is_positive(&self) -> bool {
            BigInt::is_positive(self)
        }

        fn is_negative(&self) -> bool {
            BigInt::is_negative(self)
        }
    }

    impl FromPrimitive for BigUint {
        fn from_i64(value: i64) -> Option<BigUint> {
            u64::try_from(value).ok().map(BigUint::from)
        }

        fn from_u64(value: u64) -> Option<BigUint> {
            Some(BigUint::from(value))
        }

        fn from_i128(value: i128) -> Option<BigUint> {
            u128::try_from(value).ok().map(BigUint::from)
        }

        fn from_u128(value: u128) -> Option<BigUint> {
            Some(BigUint::from(value))
        }
    }

    impl FromPrimitive for BigInt {
        fn from_i64(value: i64) -> Option<BigInt> {
            Some(BigInt::from(value))
        }

        fn from_u64(value: u64) -> Option<BigInt> {
            Some(BigInt::from(value))
        }

        fn from_i128(value: i128) -> Option<BigInt> {
            Some(BigInt::from(value))
        }

        fn from_u128(value: u128) -> Option<BigInt> {
            Some(BigInt::from(value))
        }
    }
}

#[cfg(feature = "fixed")]
mod fixed {
    use ::num_traits::{Bounded, Signed, Unsigned};

    use super::*;
    use crate::fixed::{FixedInt, U128};

    impl<const LIMBS: usize, const SIGNED: bool> FixedInt<LIMBS, SIGNED> {
        /// Converts a native value exactly, unlike `From` which wraps.
        fn from_i128_checked(value: i128) -> Option<Self> {
            let magnitude = U128::from_u128(value.unsigned_abs());
            FixedInt::from_magnitude(value < 0, magnitude.as_limbs()).ok()
        }

        fn from_u128_checked(value: u128) -> Option<Self> {
            FixedInt::from_magnitude(false, U128::from_u128(value).as_limbs()).ok()
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Zero for FixedInt<LIMBS, SIGNED> {
        fn zero() -> Self {
            Self::ZERO
        }

        fn is_zero(&self) -> bool {
            FixedInt::is_zero(self)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> One for FixedInt<LIMBS, SIGNED> {
        fn one() -> Self {
            Self::ONE
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Num for FixedInt<LIMBS, SIGNED> {
        type FromStrRadixErr = ParseIntError;

        fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
            FixedInt::from_str_radix(text, radix)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Bounded for FixedInt<LIMBS, SIGNED> {
        fn min_value() -> Self {
            Self::MIN
        }

        fn max_value() -> Self {
            Self::MAX
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Pow<u32> for FixedInt<LIMBS, SIGNED> {
        type Output = Self;

        fn pow(self, exp: u32) -> Self {
            FixedInt::pow(self, exp)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> CheckedDiv for FixedInt<LIMBS, SIGNED> {
        fn checked_div(&self, rhs: &Self) -> Option<Self> {
            FixedInt::checked_div(*self, *rhs)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> CheckedRem for FixedInt<LIMBS, SIGNED> {
        fn checked_rem(&self, rhs: &Self) -> Option<Self> {
            FixedInt::checked_rem(*self, *rhs)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> ToPrimitive for FixedInt<LIMBS, SIGNED> {
        fn to_i64(&self) -> Option<i64> {
            i64::try_from(*self).ok()
        }

        fn to_u64(&self) -> Option<u64> {
            u64::try_from(*self).ok()
        }

        fn to_i128(&self) -> Option<i128> {
            i128::try_from(*self).ok()
        }

        fn to_u128(&self) -> Option<u128> {
            u128::try_from(*self).ok()
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> FromPrimitive for FixedInt<LIMBS, SIGNED> {
        fn from_i64(value: i64) -> Option<Self> {
            Self::from_i128_checked(value as i128)
        }

        fn from_u64(value: u64) -> Option<Self> {
            Self::from_u128_checked(value as u128)
        }

        fn from_i128(value: i128) -> Option<Self> {
            Self::from_i128_checked(value)
        }

        fn from_u128(value: u128) -> Option<Self> {
            Self::from_u128_checked(value)
        }
    }

    impl<const LIMBS: usize> Unsigned for FixedInt<LIMBS, false> {}

    impl<const LIMBS: usize> Signed for FixedInt<LIMBS, true> {
        fn abs(&self) -> Self {
            FixedInt::abs(*self)
        }

        fn abs_sub(&self, other: &Self) -> Self {
            if self <= other { Self::ZERO } else { *self - *other }
        }

        fn signum(&self) -> Self {
            FixedInt::signum(self)
        }

        fn is_positive(&self) -> bool {
            FixedInt::is_positive(self)
        }

        fn is_negative(&self) -> bool {
            FixedInt::is_negative(self)
        }
    }
}
