use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign};

use super::{BigInt, BigUint};
use crate::util::ops::{for_each_native, shift_amount};

// Every form borrows both operands and builds the result in a new buffer, so compound assignment
// never reads from storage it is writing to.
macro_rules! dynamic_binop {
    ($Big:ident; $($Trait:ident::$method:ident, $Assign:ident::$assign:ident => $imp:ident;)*) => { $(
        impl $Trait for $Big {
            type Output = $Big;

            #[track_caller]
            fn $method(self, rhs: $Big) -> $Big {
                self.$imp(&rhs)
            }
        }

        impl $Trait<&$Big> for $Big {
            type Output = $Big;

            #[track_caller]
            fn $method(self, rhs: &$Big) -> $Big {
                self.$imp(rhs)
            }
        }

        impl $Trait<$Big> for &$Big {
            type Output = $Big;

            #[track_caller]
            fn $method(self, rhs: $Big) -> $Big {
                self.$imp(&rhs)
            }
        }

        impl $Trait<&$Big> for &$Big {
            type Output = $Big;

            #[track_caller]
            fn $method(self, rhs: &$Big) -> $Big {
                self.$imp(rhs)
            }
        }

        impl $Assign for $Big {
            #[track_caller]
            fn $assign(&mut self, rhs: $Big) {
                *self = self.$imp(&rhs);
            }
        }

        impl $Assign<&$Big> for $Big {
            #[track_caller]
            fn $assign(&mut self, rhs: &$Big) {
                *self = self.$imp(rhs);
            }
        }
    )* };
}

// Native operands are converted exactly with `From` before the operation.
macro_rules! dynamic_native_binop {
    ($Big:ident, $kind:ident; $($Trait:ident::$method:ident, $Assign:ident::$assign:ident => $imp:ident;)*) => { $(
        for_each_native!($kind Prim => {
            impl $Trait<Prim> for $Big {
                type Output = $Big;

                #[track_caller]
                fn $method(self, rhs: Prim) -> $Big {
                    self.$imp(&$Big::from(rhs))
                }
            }

            impl $Trait<Prim> for &$Big {
                type Output = $Big;

                #[track_caller]
                fn $method(self, rhs: Prim) -> $Big {
                    self.$imp(&$Big::from(rhs))
                }
            }

            impl $Trait<$Big> for Prim {
                type Output = $Big;

                #[track_caller]
                fn $method(self, rhs: $Big) -> $Big {
                    $Big::from(self).$imp(&rhs)
                }
            }

            impl $Trait<&$Big> for Prim {
                type Output = $Big;

                #[track_caller]
                fn $method(self, rhs: &$Big) -> $Big {
                    $Big::from(self).$imp(rhs)
                }
            }

            impl $Assign<Prim> for $Big {
                #[track_caller]
                fn $assign(&mut self, rhs: Prim) {
                    *self = self.$imp(&$Big::from(rhs));
                }
            }
        });
    )* };
}

macro_rules! dynamic_shift {
    ($($Big:ident),*) => { $(
        for_each_native!(Prim => {
            impl Shl<Prim> for $Big {
                type Output = $Big;

                #[track_caller]
                fn shl(self, rhs: Prim) -> $Big {
                    self.shift_left(shift_amount(rhs))
                }
            }

            impl Shl<Prim> for &$Big {
                type Output = $Big;

                #[track_caller]
                fn shl(self, rhs: Prim) -> $Big {
                    self.shift_left(shift_amount(rhs))
                }
            }

            impl ShlAssign<Prim> for $Big {
                #[track_caller]
                fn shl_assign(&mut self, rhs: Prim) {
                    *self = self.shift_left(shift_amount(rhs));
                }
            }

            impl Shr<Prim> for $Big {
                type Output = $Big;

                #[track_caller]
                fn shr(self, rhs: Prim) -> $Big {
                    self.shift_right(shift_amount(rhs))
                }
            }

            impl Shr<Prim> for &$Big {
                type Output = $Big;

                #[track_caller]
                fn shr(self, rhs: Prim) -> $Big {
                    self.shift_right(shift_amount(rhs))
                }
            }

            impl ShrAssign<Prim> for $Big {
                #[track_caller]
                fn shr_assign(&mut self, rhs: Prim) {
                    *self = self.shift_right(shift_amount(rhs));
                }
            }
        });
    )* };
}

macro_rules! dynamic_fold {
    ($($Big:ident),*) => { $(
        impl Sum for $Big {
            fn sum<I: Iterator<Item = $Big>>(iter: I) -> $Big {
                iter.fold($Big::zero(), |acc, item| acc.sum(&item))
            }
        }

        impl<'a> Sum<&'a $Big> for $Big {
            fn sum<I: Iterator<Item = &'a $Big>>(iter: I) -> $Big {
                iter.fold($Big::zero(), |acc, item| acc.sum(item))
            }
        }

        impl Product for $Big {
            fn product<I: Iterator<Item = $Big>>(iter: I) -> $Big {
                iter.fold($Big::one(), |acc, item| acc.product(&item))
            }
        }

        impl<'a> Product<&'a $Big> for $Big {
            fn product<I: Iterator<Item = &'a $Big>>(iter: I) -> $Big {
                iter.fold($Big::one(), |acc, item| acc.product(item))
            }
        }
    )* };
}

dynamic_binop! { BigUint;
    Add::add, AddAssign::add_assign => sum;
    Sub::sub, SubAssign::sub_assign => difference;
    Mul::mul, MulAssign::mul_assign => product;
    Div::div, DivAssign::div_assign => quotient;
    Rem::rem, RemAssign::rem_assign => remainder;
    BitAnd::bitand, BitAndAssign::bitand_assign => bit_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bit_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor;
}

dynamic_binop! { BigInt;
    Add::add, AddAssign::add_assign => sum;
    Sub::sub, SubAssign::sub_assign => difference;
    Mul::mul, MulAssign::mul_assign => product;
    Div::div, DivAssign::div_assign => quotient;
    Rem::rem, RemAssign::rem_assign => remainder;
    BitAnd::bitand, BitAndAssign::bitand_assign => bit_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bit_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor;
}

// BigUint only converts from the unsigned natives, so only those mix with it in arithmetic.
dynamic_native_binop! { BigUint, unsigned;
    Add::add, AddAssign::add_assign => sum;
    Sub::sub, SubAssign::sub_assign => difference;
    Mul::mul, MulAssign::mul_assign => product;
    Div::div, DivAssign::div_assign => quotient;
    Rem::rem, RemAssign::rem_assign => remainder;
    BitAnd::bitand, BitAndAssign::bitand_assign => bit_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bit_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor;
}

dynamic_native_binop! { BigInt, all;
    Add::add, AddAssign::add_assign => sum;
    Sub::sub, SubAssign::sub_assign => difference;
    Mul::mul, MulAssign::mul_assign => product;
    Div::div, DivAssign::div_assign => quotient;
    Rem::rem, RemAssign::rem_assign => remainder;
    BitAnd::bitand, BitAndAssign::bitand_assign => bit_and;
    BitOr::bitor, BitOrAssign::bitor_assign => bit_or;
    BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor;
}

dynamic_shift!(BigUint, BigInt);
dynamic_fold!(BigUint, BigInt);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let (sign, magnitude) = self.into_parts();
        BigInt::from_parts(-sign, magnitude)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.bit_not()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        self.bit_not()
    }
}
