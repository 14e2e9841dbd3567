use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign};

use super::FixedInt;
use crate::util::ops::{for_each_native, shift_amount};

impl<const LIMBS: usize, const SIGNED: bool> FixedInt<LIMBS, SIGNED> {
    #[track_caller]
    fn div_trunc(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }

    #[track_caller]
    fn rem_trunc(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

// Every binary operator is implemented for all owned/borrowed combinations, for compound
// assignment, and against every native integer on either side. The value is Copy, so each form
// computes a fresh result from copies of its operands.
macro_rules! fixed_binop {
    ($($Trait:ident::$method:ident, $Assign:ident::$assign:ident => $imp:ident;)*) => { $(
        impl<const LIMBS: usize, const SIGNED: bool> $Trait for FixedInt<LIMBS, SIGNED> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                self.$imp(rhs)
            }
        }

        impl<const LIMBS: usize, const SIGNED: bool> $Trait<&FixedInt<LIMBS, SIGNED>>
            for FixedInt<LIMBS, SIGNED>
        {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: &Self) -> Self {
                self.$imp(*rhs)
            }
        }

        impl<const LIMBS: usize, const SIGNED: bool> $Trait<FixedInt<LIMBS, SIGNED>>
            for &FixedInt<LIMBS, SIGNED>
        {
            type Output = FixedInt<LIMBS, SIGNED>;

            #[track_caller]
            fn $method(self, rhs: FixedInt<LIMBS, SIGNED>) -> FixedInt<LIMBS, SIGNED> {
                (*self).$imp(rhs)
            }
        }

        impl<const LIMBS: usize, const SIGNED: bool> $Trait<&FixedInt<LIMBS, SIGNED>>
            for &FixedInt<LIMBS, SIGNED>
        {
            type Output = FixedInt<LIMBS, SIGNED>;

            #[track_caller]
            fn $method(self, rhs: &FixedInt<LIMBS, SIGNED>) -> FixedInt<LIMBS, SIGNED> {
                (*self).$imp(*rhs)
            }
        }

        impl<const LIMBS: usize, const SIGNED: bool> $Assign for FixedInt<LIMBS, SIGNED> {
            #[track_caller]
            fn $assign(&mut self, rhs: Self) {
                *self = self.$imp(rhs);
            }
        }

        impl<const LIMBS: usize, const SIGNED: bool> $Assign<&FixedInt<LIMBS, SIGNED>>
            for FixedInt<LIMBS, SIGNED>
        {
            #[track_caller]
            fn $assign(&mut self, rhs: &Self) {
                *self = self.$imp(*rhs);
            }
        }

        for_each_native!(Prim => {
            impl<const LIMBS: usize, const SIGNED: bool> $Trait<Prim> for FixedInt<LIMBS, SIGNED> {
                type Output = Self;

                #[track_caller]
                fn $method(self, rhs: Prim) -> Self {
                    self.$imp(Self::from(rhs))
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> $Trait<Prim> for &FixedInt<LIMBS, SIGNED> {
                type Output = FixedInt<LIMBS, SIGNED>;

                #[track_caller]
                fn $method(self, rhs: Prim) -> FixedInt<LIMBS, SIGNED> {
                    (*self).$imp(FixedInt::from(rhs))
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> $Trait<FixedInt<LIMBS, SIGNED>> for Prim {
                type Output = FixedInt<LIMBS, SIGNED>;

                #[track_caller]
                fn $method(self, rhs: FixedInt<LIMBS, SIGNED>) -> FixedInt<LIMBS, SIGNED> {
                    FixedInt::from(self).$imp(rhs)
                }
            }

            impl<const LIMBS: usize, const SIGNED: bool> $Assign<Prim> for FixedInt<LIMBS, SIGNED> {
                #[track_caller]
                fn $assign(&mut self, rhs: Prim) {
                    *self = self.$imp(Self::from(rhs));
                }
            }
        });
    )* };
}

fixed_binop! {
    Add::add, AddAssign::add_assign => wrapping_add;
    Sub::sub, SubAssign::sub_assign => wrapping_sub;
    Mul::mul, MulAssign::mul_assign => wrapping_mul;
    Div::div, DivAssign::div_assign => div_trunc;
    Rem::rem, RemAssign::rem_assign => rem_trunc;
    BitAnd::bitand, BitAndAssign::bitand_assign => bit_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bit_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor;
}

for_each_native!(Prim => {
    impl<const LIMBS: usize, const SIGNED: bool> Shl<Prim> for FixedInt<LIMBS, SIGNED> {
        type Output = Self;

        #[track_caller]
        fn shl(self, rhs: Prim) -> Self {
            self.shift_left(shift_amount(rhs))
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Shl<Prim> for &FixedInt<LIMBS, SIGNED> {
        type Output = FixedInt<LIMBS, SIGNED>;

        #[track_caller]
        fn shl(self, rhs: Prim) -> FixedInt<LIMBS, SIGNED> {
            self.shift_left(shift_amount(rhs))
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> ShlAssign<Prim> for FixedInt<LIMBS, SIGNED> {
        #[track_caller]
        fn shl_assign(&mut self, rhs: Prim) {
            *self = self.shift_left(shift_amount(rhs));
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Shr<Prim> for FixedInt<LIMBS, SIGNED> {
        type Output = Self;

        #[track_caller]
        fn shr(self, rhs: Prim) -> Self {
            self.shift_right(shift_amount(rhs))
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> Shr<Prim> for &FixedInt<LIMBS, SIGNED> {
        type Output = FixedInt<LIMBS, SIGNED>;

        #[track_caller]
        fn shr(self, rhs: Prim) -> FixedInt<LIMBS, SIGNED> {
            self.shift_right(shift_amount(rhs))
        }
    }

    impl<const LIMBS: usize, const SIGNED: bool> ShrAssign<Prim> for FixedInt<LIMBS, SIGNED> {
        #[track_caller]
        fn shr_assign(&mut self, rhs: Prim) {
            *self = self.shift_right(shift_amount(rhs));
        }
    }
});

impl<const LIMBS: usize, const SIGNED: bool> Neg for FixedInt<LIMBS, SIGNED> {
    type Output = Self;

    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Neg for &FixedInt<LIMBS, SIGNED> {
    type Output = FixedInt<LIMBS, SIGNED>;

    fn neg(self) -> FixedInt<LIMBS, SIGNED> {
        self.wrapping_neg()
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Not for FixedInt<LIMBS, SIGNED> {
    type Output = Self;

    fn not(self) -> Self {
        self.bit_not()
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Not for &FixedInt<LIMBS, SIGNED> {
    type Output = FixedInt<LIMBS, SIGNED>;

    fn not(self) -> FixedInt<LIMBS, SIGNED> {
        self.bit_not()
    }
}
