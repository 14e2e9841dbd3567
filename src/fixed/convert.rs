use super::FixedInt;
use crate::error::OutOfRangeError;
use crate::util::ops::for_each_native;

for_each_native!(signed Prim => {
    impl<const LIMBS: usize, const SIGNED: bool> From<Prim> for FixedInt<LIMBS, SIGNED> {
        /// Sign-extends `value`, wrapping if the width is too small to hold it.
        fn from(value: Prim) -> Self {
            Self::from_i128(value as i128)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> TryFrom<FixedInt<LIMBS, SIGNED>> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: FixedInt<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
            value
                .to_i128_checked()
                .and_then(|value| Prim::try_from(value).ok())
                .ok_or(OutOfRangeError)
        }
    }
});

for_each_native!(unsigned Prim => {
    impl<const LIMBS: usize, const SIGNED: bool> From<Prim> for FixedInt<LIMBS, SIGNED> {
        /// Zero-extends `value`, wrapping if the width is too small to hold it.
        fn from(value: Prim) -> Self {
            Self::from_u128(value as u128)
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> TryFrom<FixedInt<LIMBS, SIGNED>> for Prim {
        type Error = OutOfRangeError;

        fn try_from(value: FixedInt<LIMBS, SIGNED>) -> Result<Self, Self::Error> {
            value
                .to_u128_checked()
                .and_then(|value| Prim::try_from(value).ok())
                .ok_or(OutOfRangeError)
        }
    }
});
