use std::str::FromStr;

use crate::algo::{self, LIMB_BITS, Limb};
use crate::error::{DivideByZeroError, OutOfRangeError, ParseIntError};
use crate::util::result::ResultExtension;

/// A fixed-width integer of `LIMBS` 32-bit limbs, least significant first. When `SIGNED` is true,
/// the top bit of the last limb is the sign bit of a two's complement value.
///
/// All arithmetic wraps on overflow, exactly as the native integer types do with the `wrapping_*`
/// methods. Division truncates toward zero and the remainder takes the sign of the dividend. The
/// only operations which panic are division and remainder by zero, see
/// [`try_div_rem`](FixedInt::try_div_rem) for a non-panicking alternative.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of limbs, `LIMBS`.
///
/// | Method | Complexity |
/// |-|-|
/// | `add`, `sub`, `neg` | `O(n)` |
/// | `and`, `or`, `xor`, `not` | `O(n)` |
/// | `shl`, `shr` | `O(n)` |
/// | `mul` | `O(n^2)` |
/// | `div`, `rem` | `O(n^2)` |
/// | `cmp` | `O(n)` |
/// | `to_string` | `O(n^2)` |
///
/// # Examples
/// ```
/// # use standard_bigint::fixed::{I128, U128};
/// let x = I128::from(-51);
/// assert_eq!(x % 13, -12);
/// assert_eq!(x / 13, -3);
///
/// assert_eq!(U128::MAX + 1_u8, 0);
/// assert_eq!(I128::MIN.to_string(), "-170141183460469231731687303715884105728");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedInt<const LIMBS: usize, const SIGNED: bool> {
    pub(crate) limbs: [Limb; LIMBS],
}

pub type I64 = FixedInt<2, true>;
pub type U64 = FixedInt<2, false>;
pub type I128 = FixedInt<4, true>;
pub type U128 = FixedInt<4, false>;
pub type I256 = FixedInt<8, true>;
pub type U256 = FixedInt<8, false>;
pub type I512 = FixedInt<16, true>;
pub type U512 = FixedInt<16, false>;
pub type I1024 = FixedInt<32, true>;
pub type U1024 = FixedInt<32, false>;

impl<const LIMBS: usize, const SIGNED: bool> FixedInt<LIMBS, SIGNED> {
    /// The width of the integer in bits.
    pub const BITS: u32 = LIMBS as u32 * LIMB_BITS;

    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    pub const ONE: Self = Self::from_u128(1);

    /// The largest representable value, `2^(BITS - 1) - 1` when signed and `2^BITS - 1`
    /// otherwise.
    pub const MAX: Self = {
        let mut limbs = [Limb::MAX; LIMBS];
        if SIGNED {
            limbs[LIMBS - 1] = Limb::MAX >> 1;
        }
        Self { limbs }
    };

    /// The smallest representable value, `-2^(BITS - 1)` when signed and 0 otherwise.
    pub const MIN: Self = {
        let mut limbs = [0; LIMBS];
        if SIGNED {
            limbs[LIMBS - 1] = 1 << (LIMB_BITS - 1);
        }
        Self { limbs }
    };

    /// Creates a value directly from its limbs, least significant first.
    pub const fn from_limbs(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Returns the limbs of the value, least significant first. Negative values are returned in
    /// two's complement.
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.limbs
    }

    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Creates a value from the low bits of `value`, wrapping if it doesn't fit.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::{I64, U256};
    /// const BIG: U256 = U256::from_u128(u128::MAX);
    /// assert_eq!(BIG.to_limbs()[..5], [u32::MAX, u32::MAX, u32::MAX, u32::MAX, 0]);
    /// assert_eq!(I64::from_u128(u128::MAX), -1);
    /// ```
    pub const fn from_u128(value: u128) -> Self {
        let mut limbs = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS && i < 4 {
            limbs[i] = (value >> (i as u32 * LIMB_BITS)) as Limb;
            i += 1;
        }
        Self { limbs }
    }

    /// Creates a value from `value`, sign-extending it to the full width, or wrapping if it
    /// doesn't fit.
    pub const fn from_i128(value: i128) -> Self {
        let fill = if value < 0 { Limb::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        let mut i = 0;
        while i < LIMBS && i < 4 {
            limbs[i] = (value >> (i as u32 * LIMB_BITS)) as Limb;
            i += 1;
        }
        Self { limbs }
    }

    /// Creates a value from the low `LIMBS` limbs of `limbs`, zero-extending if there are fewer.
    pub(crate) fn from_slice_wrapping(limbs: &[Limb]) -> Self {
        let mut value = Self::ZERO;
        let len = limbs.len().min(LIMBS);
        value.limbs[..len].copy_from_slice(&limbs[..len]);
        value
    }

    pub fn is_zero(&self) -> bool {
        algo::is_zero(&self.limbs)
    }

    /// Returns true if the value is negative, which is never the case for unsigned widths.
    pub const fn is_negative(&self) -> bool {
        SIGNED && LIMBS > 0 && self.limbs[LIMBS - 1] >> (LIMB_BITS - 1) == 1
    }

    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> Self {
        if self.is_negative() {
            Self::ONE.wrapping_neg()
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Returns the number of limbs, excluding high-order zero limbs. Negative values always have
    /// an actual size of `LIMBS`.
    pub fn actual_size(&self) -> usize {
        algo::actual_size(&self.limbs)
    }

    pub fn count_ones(&self) -> u32 {
        algo::count_ones(&self.limbs) as u32
    }

    pub fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bits()
    }

    /// Returns the position of the highest set bit plus one, which is 0 for zero and
    /// [`BITS`](Self::BITS) for every negative value.
    pub fn bits(&self) -> u32 {
        algo::bit_len(&self.limbs) as u32
    }

    /// Returns the number of trailing zero bits, which is [`BITS`](Self::BITS) for zero.
    pub fn trailing_zeros(&self) -> u32 {
        algo::trailing_zeros(&self.limbs).map_or(Self::BITS, |zeros| zeros as u32)
    }

    /// Returns the bit at position `bit` of the two's complement representation.
    pub fn bit(&self, bit: u32) -> bool {
        algo::test_bit(&self.limbs, bit as u64)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::add_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::sub_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    /// Multiplies two values, keeping the low `BITS` bits of the product. The two's complement
    /// encoding means that the same truncated product is correct for signed values.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::mul_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    /// Returns `-self`, wrapping for [`MIN`](Self::MIN) and for every nonzero unsigned value.
    pub fn wrapping_neg(self) -> Self {
        Self { limbs: algo::negate(&self.limbs) }
    }

    /// Returns the absolute value, wrapping [`MIN`](Self::MIN) to itself.
    pub fn abs(self) -> Self {
        if self.is_negative() { self.wrapping_neg() } else { self }
    }

    /// Returns the absolute value as an unsigned integer of the same width, which can't overflow.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::{I128, U128};
    /// assert_eq!(I128::MIN.unsigned_abs(), U128::ONE << 127);
    /// ```
    pub fn unsigned_abs(self) -> FixedInt<LIMBS, false> {
        let limbs = if self.is_negative() { algo::negate(&self.limbs) } else { self.limbs };
        FixedInt { limbs }
    }

    /// Raises the value to the power `exp` by repeated squaring, wrapping on overflow.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::{I128, U128};
    /// assert_eq!(U128::from(3_u8).pow(40), 12157665459056928801_u128);
    /// assert_eq!(I128::from(-2).pow(127), I128::MIN);
    /// assert_eq!(U128::from(2_u8).pow(128), 0);
    /// ```
    pub fn pow(self, mut exp: u32) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.wrapping_mul(base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.wrapping_mul(base);
            }
        }
        acc
    }

    /// Shifts left by `bits`, producing zero once every bit has been shifted out.
    pub(crate) fn shift_left(self, bits: usize) -> Self {
        let mut out = Self::ZERO;
        algo::shl_into(&mut out.limbs, &self.limbs, bits);
        out
    }

    /// Shifts right by `bits`. Negative values shift arithmetically, filling with ones, which is
    /// done by shifting the complement logically and complementing the result.
    pub(crate) fn shift_right(self, bits: usize) -> Self {
        let mut out = Self::ZERO;
        if self.is_negative() {
            algo::shr_into(&mut out.limbs, &algo::bit_not(&self.limbs), bits);
            algo::bit_not_in_place(&mut out.limbs);
        } else {
            algo::shr_into(&mut out.limbs, &self.limbs, bits);
        }
        out
    }

    pub(crate) fn bit_and(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::and_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    pub(crate) fn bit_or(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::or_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    pub(crate) fn bit_xor(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        algo::xor_into(&mut out.limbs, &self.limbs, &rhs.limbs);
        out
    }

    pub(crate) fn bit_not(self) -> Self {
        Self { limbs: algo::bit_not(&self.limbs) }
    }

    /// Divides `self` by `rhs`, returning the quotient truncated toward zero and the remainder
    /// with the sign of `self`. Signed `MIN / -1` wraps to `MIN` with a remainder of 0.
    ///
    /// # Errors
    /// Returns [`DivideByZeroError`] if `rhs` is zero.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::I256;
    /// let (quot, rem) = I256::from(-51).try_div_rem(I256::from(13)).unwrap();
    /// assert_eq!((quot, rem), (I256::from(-3), I256::from(-12)));
    /// assert!(I256::ONE.try_div_rem(I256::ZERO).is_err());
    /// ```
    pub fn try_div_rem(self, rhs: Self) -> Result<(Self, Self), DivideByZeroError> {
        let (quot, rem) =
            algo::div_rem(&self.unsigned_abs().limbs, &rhs.unsigned_abs().limbs)?;

        let mut quot = Self::from_slice_wrapping(&quot);
        let mut rem = Self::from_slice_wrapping(&rem);
        if self.is_negative() != rhs.is_negative() {
            quot = quot.wrapping_neg();
        }
        if self.is_negative() {
            rem = rem.wrapping_neg();
        }

        Ok((quot, rem))
    }

    /// As [`try_div_rem`](Self::try_div_rem), but panics on division by zero like the native
    /// integer types.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[track_caller]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        self.try_div_rem(rhs).throw()
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div_rem(rhs).ok().map(|(quot, _)| quot)
    }

    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.try_div_rem(rhs).ok().map(|(_, rem)| rem)
    }

    /// Converts to a different width or signedness. Widening sign-extends values which are
    /// negative in the source type and zero-extends all others; narrowing keeps the low limbs.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::{I128, I256, U128};
    /// assert_eq!(I128::from(-7).cast::<8, true>(), I256::from(-7));
    /// assert_eq!(I128::from(-1).cast::<4, false>(), U128::MAX);
    /// assert_eq!(U128::MAX.cast::<8, true>(), I256::from(u128::MAX));
    /// ```
    pub fn cast<const M: usize, const S: bool>(self) -> FixedInt<M, S> {
        let fill = if self.is_negative() { Limb::MAX } else { 0 };
        let mut limbs = [fill; M];
        let len = LIMBS.min(M);
        limbs[..len].copy_from_slice(&self.limbs[..len]);
        FixedInt { limbs }
    }

    /// Formats the value in the given radix, with a leading `-` for negative values.
    ///
    /// # Panics
    /// Panics if `radix` is not within `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = algo::to_radix(&self.unsigned_abs().limbs, radix, false);
        if self.is_negative() { format!("-{}", digits) } else { digits }
    }

    /// Parses a value with an optional sign from digits in the given radix. No radix prefix is
    /// accepted.
    ///
    /// # Errors
    /// Returns a [`ParseIntError`] if the text is malformed or the value doesn't fit.
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::fixed::{I128, U128};
    /// assert_eq!(I128::from_str_radix("-zz", 36), Ok(I128::from(-1295)));
    /// assert!(U128::from_str_radix("-1", 10).unwrap_err().is_out_of_range());
    /// ```
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
        let (negative, digits) = algo::split_sign(text);
        let magnitude = algo::from_radix_at(digits, radix, text.len() - digits.len())?;
        Ok(Self::from_magnitude(negative, &magnitude)?)
    }

    /// Creates a value from a sign and magnitude, failing if it is outside of
    /// [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    pub(crate) fn from_magnitude(negative: bool, magnitude: &[Limb]) -> Result<Self, OutOfRangeError> {
        if algo::actual_size(magnitude) > LIMBS {
            return Err(OutOfRangeError);
        }

        let value = Self::from_slice_wrapping(magnitude);
        if value.is_zero() {
            Ok(value)
        } else if !negative {
            if value.is_negative() { Err(OutOfRangeError) } else { Ok(value) }
        } else if SIGNED {
            // Every magnitude up to 2^(BITS - 1) negates to a negative value, larger ones don't.
            let value = value.wrapping_neg();
            if value.is_negative() { Ok(value) } else { Err(OutOfRangeError) }
        } else {
            Err(OutOfRangeError)
        }
    }

    /// Returns the value as a [`u128`] if it is non-negative and fits.
    pub(crate) fn to_u128_checked(self) -> Option<u128> {
        if self.is_negative() || self.actual_size() > 4 {
            return None;
        }
        Some((0..4).fold(0, |acc, i| acc | (algo::get(&self.limbs, i) as u128) << (i * 32)))
    }

    /// Returns the value as an [`i128`] if it fits.
    pub(crate) fn to_i128_checked(self) -> Option<i128> {
        if !self.is_negative() {
            return self.to_u128_checked().and_then(|value| i128::try_from(value).ok());
        }

        let magnitude = self.unsigned_abs().to_u128_checked()?;
        if magnitude > 1 << 127 {
            None
        } else {
            Some((magnitude as i128).wrapping_neg())
        }
    }
}

impl<const LIMBS: usize, const SIGNED: bool> Default for FixedInt<LIMBS, SIGNED> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize, const SIGNED: bool> FromStr for FixedInt<LIMBS, SIGNED> {
    type Err = ParseIntError;

    /// Parses a literal such as `-123`, `0xFF` or `0b1010_1010`, see
    /// [`split_literal`](algo::split_literal).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let literal = algo::split_literal(text);
        let magnitude = algo::from_radix_at(literal.digits, literal.radix, literal.offset)?;
        Ok(Self::from_magnitude(literal.negative, &magnitude)?)
    }
}
