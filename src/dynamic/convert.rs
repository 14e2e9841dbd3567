use super::{BigInt, BigUint, Sign};
use crate::algo::Limb;
use crate::error::OutOfRangeError;
use crate::util::ops::for_each_native;

impl BigUint {
    fn from_wide(value: u128) -> BigUint {
        BigUint::from_limbs(vec![
            value as Limb,
            (value >> 32) as Limb,
            (value >> 64) as Limb,
            (value >> 96) as Limb,
        ])
    }
}

for_each_native!(unsigned Prim => {
    impl From<Prim> for BigUint {
        fn from(value: Prim) -> BigUint {
            BigUint::from_wide(value as u128)
        }
    }

    impl From<Prim> for BigInt {
        fn from(value: Prim) -> BigInt {
            BigInt::from_parts(Sign::Plus, BigUint::from(value))
        }
    }
});

for_each_native!(signed Prim => {
    impl From<Prim> for BigInt {
        fn from(value: Prim) -> BigInt {
            let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
            BigInt::from_parts(sign, BigUint::from_wide(value.unsigned_abs() as u128))
        }
    }
});

for_each_native!(Prim => {
    impl TryFrom<&BigUint> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: &BigUint) -> Result<Prim, OutOfRangeError> {
            value
                .to_u128_checked()
                .and_then(|value| Prim::try_from(value).ok())
                .ok_or(OutOfRangeError)
        }
    }

    impl TryFrom<BigUint> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: BigUint) -> Result<Prim, OutOfRangeError> {
            Prim::try_from(&value)
        }
    }

    impl TryFrom<&BigInt> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: &BigInt) -> Result<Prim, OutOfRangeError> {
            value
                .to_i128_checked()
                .and_then(|value| Prim::try_from(value).ok())
                .or_else(|| value.to_u128_checked().and_then(|value| Prim::try_from(value).ok()))
                .ok_or(OutOfRangeError)
        }
    }

    impl TryFrom<BigInt> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: BigInt) -> Result<Prim, OutOfRangeError> {
            Prim::try_from(&value)
        }
    }
});

impl From<BigUint> for BigInt {
    fn from(value: BigUint) -> BigInt {
        BigInt::from_parts(Sign::Plus, value)
    }
}

impl From<&BigUint> for BigInt {
    fn from(value: &BigUint) -> BigInt {
        BigInt::from_parts(Sign::Plus, value.clone())
    }
}

impl TryFrom<BigInt> for BigUint {
    type Error = OutOfRangeError;

    /// Takes the magnitude of a non-negative value.
    fn try_from(value: BigInt) -> Result<BigUint, OutOfRangeError> {
        match value.into_parts() {
            (Sign::Minus, _) => Err(OutOfRangeError),
            (_, magnitude) => Ok(magnitude),
        }
    }
}

impl TryFrom<&BigInt> for BigUint {
    type Error = OutOfRangeError;

    fn try_from(value: &BigInt) -> Result<BigUint, OutOfRangeError> {
        if value.is_negative() { Err(OutOfRangeError) } else { Ok(value.magnitude().clone()) }
    }
}
