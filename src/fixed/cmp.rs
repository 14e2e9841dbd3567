use std::cmp::Ordering;

use super::FixedInt;
use crate::algo;
use crate::util::ops::for_each_native;

impl<const LIMBS: usize, const SIGNED: bool> Ord for FixedInt<LIMBS, SIGNED> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // With equal signs, two's complement patterns order the same way as their values.
            _ => algo::cmp(&self.limbs, &other.limbs),
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> PartialOrd for FixedInt<LIMBS, SIGNED> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize, const SIGNED: bool> FixedInt<LIMBS, SIGNED> {
    /// Compares against a native value by its mathematical value, without any wrapping.
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
        match self.to_u128_checked() {
            Some(value) => value.cmp(&other),
            None => Ordering::Greater,
        }
    }
}

macro_rules! native_cmp {
    ($kind:ident, $cmp:ident, $wide:ty) => {
        for_each_native!($kind Prim => {
            impl<const LIMBS: usize, const SIGNED: bool> PartialEq<Prim> for FixedInt<LIMBS, SIGNED> {
                fn eq(&self, other: &Prim) -> bool {
                    self.$cmp(*other as $wide) == Ordering::Equal
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> PartialOrd<Prim> for FixedInt<LIMBS, SIGNED> {
                fn partial_cmp(&self, other: &Prim) -> Option<Ordering> {
                    Some(self.$cmp(*other as $wide))
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> PartialEq<FixedInt<LIMBS, SIGNED>> for Prim {
                fn eq(&self, other: &FixedInt<LIMBS, SIGNED>) -> bool {
                    other.$cmp(*self as $wide) == Ordering::Equal
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> PartialOrd<FixedInt<LIMBS, SIGNED>> for Prim {
                fn partial_cmp(&self, other: &FixedInt<LIMBS, SIGNED>) -> Option<Ordering> {
                    Some(other.$cmp(*self as $wide).reverse())
                }
            }
        });
    };
}

native_cmp!(signed, cmp_i128, i128);
native_cmp!(unsigned, cmp_u128, u128);
