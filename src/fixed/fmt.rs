use std::fmt::{self, Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex};

use super::FixedInt;
use crate::algo;

impl<const LIMBS: usize, const SIGNED: bool> Display for FixedInt<LIMBS, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = algo::to_radix(&self.unsigned_abs().limbs, 10, false);
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Debug for FixedInt<LIMBS, SIGNED> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// Like the native integers, the power-of-two radices print the two's complement bit pattern.
macro_rules! fixed_radix_fmt {
    ($($Trait:ident => $radix:literal, $upper:literal, $prefix:literal;)*) => { $(
        impl<const LIMBS: usize, const SIGNED: bool> $Trait for FixedInt<LIMBS, SIGNED> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.pad_integral(true, $prefix, &algo::to_radix(&self.limbs, $radix, $upper))
            }
        }
    )* };
}

fixed_radix_fmt! {
    LowerHex => 16, false, "0x";
    UpperHex => 16, true, "0x";
    Octal => 8, false, "0o";
    Binary => 2, false, "0b";
}
