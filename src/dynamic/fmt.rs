use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};

use super::{BigInt, BigUint};
use crate::algo;

// Unlike the fixed-width integers there's no bit pattern to fall back on, so negative values print
// as a `-` followed by the magnitude in every radix.
macro_rules! dynamic_fmt {
    ($($Trait:ident => $radix:literal, $upper:literal, $prefix:literal;)*) => { $(
        impl $Trait for BigUint {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, &algo::to_radix(&self.limbs, $radix, $upper))
            }
        }

        impl $Trait for BigInt {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let digits = algo::to_radix(&self.magnitude().limbs, $radix, $upper);
                f.pad_integral(!self.is_negative(), $prefix, &digits)
            }
        }
    )* };
}

dynamic_fmt! {
    Display => 10, false, "";
    LowerHex => 16, false, "0x";
    UpperHex => 16, true, "0x";
    Octal => 8, false, "0o";
    Binary => 2, false, "0b";
}

impl Debug for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
