use std::cmp::Ordering;

use super::{BigInt, BigUint};
use crate::util::ops::for_each_native;

impl BigUint {
    fn cmp_i128(&self, other: i128) -> Ordering {
        match u128::try_from(other) {
            Ok(other) => self.cmp_u128(other),
            Err(_) => Ordering::Greater,
        }
    }

    fn cmp_u128(&self, other: u128) -> Ordering {
        match self.to_u128_checked() {
            Some(value) => value.cmp(&other),
            None => Ordering::Greater,
        }
    }
}

impl BigInt {
    fn cmp_i128(&self, other: i128) -> Ordering {
        match self.to_i128_checked() {
            Some(value) => value.cmp(&other),
            None if self.is_negative() => Ordering::Less,
            None => Ordering::Greater,
        }
    }

    fn cmp_u128(&self, other: u128) -> Ordering {
        if self.is_negative() {
            return Ordering::Less;
        }
        self.magnitude().cmp_u128(other)
    }
}

macro_rules! native_cmp {
    ($Big:ident, $kind:ident, $cmp:ident, $wide:ty) => {
        for_each_native!($kind Prim => {
            impl PartialEq<Prim> for $Big {
                fn eq(&self, other: &Prim) -> bool {
                    self.$cmp(*other as $wide) == Ordering::Equal
                }
            }

            impl PartialOrd<Prim> for $Big {
                fn partial_cmp(&self, other: &Prim) -> Option<Ordering> {
                    Some(self.$cmp(*other as $wide))
                }
            }

            impl PartialEq<$Big> for Prim {
                fn eq(&self, other: &$Big) -> bool {
                    other.$cmp(*self as $wide) == Ordering::Equal
                }
            }

            impl PartialOrd<$Big> for Prim {
                fn partial_cmp(&self, other: &$Big) -> Option<Ordering> {
                    Some(other.$cmp(*self as $wide).reverse())
                }
            }
        });
    };
}

native_cmp!(BigUint, signed, cmp_i128, i128);
native_cmp!(BigUint, unsigned, cmp_u128, u128);
native_cmp!(BigInt, signed, cmp_i128, i128);
native_cmp!(BigInt, unsigned, cmp_u128, u128);
