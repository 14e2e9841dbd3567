use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

use ::serde::de::{self, Deserializer, Visitor};
use ::serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseIntError;

/// Accepts either a string in any of the forms [`FromStr`] understands or a native integer.
struct IntVisitor<T>(PhantomData<T>);

impl<T> IntVisitor<T>
where
    T: FromStr<Err = ParseIntError>,
{
    fn parse<E: de::Error>(value: impl Display) -> Result<T, E> {
        value.to_string().parse().map_err(E::custom)
    }
}

impl<'de, T> Visitor<'de> for IntVisitor<T>
where
    T: FromStr<Err = ParseIntError>,
{
    type Value = T;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
        Self::parse(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
        Self::parse(value)
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<T, E> {
        Self::parse(value)
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<T, E> {
        Self::parse(value)
    }
}

fn deserialize_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = ParseIntError>,
{
    deserializer.deserialize_any(IntVisitor(PhantomData))
}

#[cfg(feature = "dynamic")]
mod big {
    use super::*;
    use crate::dynamic::{BigInt, BigUint};

    macro_rules! big_serde {
        ($($Big:ident),*) => { $(
            impl Serialize for $Big {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $Big {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<$Big, D::Error> {
                    deserialize_int(deserializer)
                }
            }
        )* };
    }

    big_serde!(BigUint, BigInt);
}

#[cfg(feature = "fixed")]
mod fixed {
    use super::*;
    use crate::fixed::FixedInt;

    impl<const LIMBS: usize, const SIGNED: bool> Serialize for FixedInt<LIMBS, SIGNED> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, const LIMBS: usize, const SIGNED: bool> Deserialize<'de> for FixedInt<LIMBS, SIGNED> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserialize_int(deserializer)
        }
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "dynamic")]
    #[test]
    fn test_big_serde() {
        use crate::dynamic::{BigInt, BigUint};

        let x = BigInt::from(-123);
        assert_eq!(serde_json::to_string(&x).unwrap(), r#""-123""#);
        assert_eq!(serde_json::from_str::<BigInt>(r#""-123""#).unwrap(), x);
        assert_eq!(serde_json::from_str::<BigInt>("-7").unwrap(), -7, "Numbers should be accepted.");
        assert_eq!(serde_json::from_str::<BigUint>(r#""0xff""#).unwrap(), 255_u8);
        assert!(serde_json::from_str::<BigUint>("-1").is_err(), "BigUint should reject negatives.");
        assert!(serde_json::from_str::<BigInt>(r#""12a""#).is_err());
        assert!(serde_json::from_str::<BigInt>("1.5").is_err());

        let big = BigInt::one() << 200_u32;
        let json = serde_json::to_string(&vec![big.clone(), -big.clone()]).unwrap();
        assert_eq!(serde_json::from_str::<Vec<BigInt>>(&json).unwrap(), [big.clone(), -big]);
    }

    #[cfg(feature = "fixed")]
    #[test]
    fn test_fixed_serde() {
        use crate::fixed::{I256, U128};

        assert_eq!(serde_json::to_string(&I256::MIN).unwrap(), format!("\"{}\"", I256::MIN));
        assert_eq!(serde_json::from_str::<U128>("42").unwrap(), 42_u8);
        assert!(
            serde_json::from_str::<U128>("-1").is_err(),
            "Values outside of the range should be rejected."
        );
    }
}
