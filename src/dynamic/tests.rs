#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use num_bigint::{BigInt as RefInt, BigUint as RefUint};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::error::{InvalidDigitError, OutOfRangeError, ParseIntError};
use crate::util::panic::assert_panics;

fn reference(value: &BigInt) -> RefInt {
    value.to_string().parse().unwrap()
}

fn reference_uint(value: &BigUint) -> RefUint {
    value.to_string().parse().unwrap()
}

fn random_big(prng: &mut ChaCha20Rng) -> BigInt {
    // Vary the length so that operands of different sizes meet.
    let len = prng.gen_range(1..=6);
    let limbs = (0..len).map(|_| prng.next_u32()).collect();
    let sign = if prng.gen_range(0..2) == 0 { Sign::Plus } else { Sign::Minus };
    BigInt::from_limbs(sign, limbs)
}

#[test]
fn test_normalization() {
    assert_eq!(BigUint::from_limbs(vec![1, 0, 0]).as_limbs(), [1]);
    assert_eq!(BigUint::from_limbs(vec![0, 0]).as_limbs(), [0], "Zero should be a single limb.");
    assert_eq!(BigUint::from_limbs(vec![]).as_limbs(), [0], "Empty input should become zero.");
    assert_eq!(BigUint::default(), BigUint::zero());

    let x = BigUint::from(1_u64 << 32);
    assert_eq!((&x - &x).as_limbs(), [0], "x - x should leave a single zero limb.");
    assert_eq!((&x >> 40_u32).as_limbs(), [0]);
    assert_eq!(x.actual_size(), 2);
    assert_eq!(BigUint::zero().actual_size(), 0);

    let zero = BigInt::from(5) - 5_i32;
    assert_eq!(zero.sign(), Sign::NoSign, "Zero should have no sign.");
    assert_eq!(zero, BigInt::zero());
    assert_eq!(-BigInt::zero(), BigInt::zero(), "There should be no negative zero.");
}

#[test]
fn test_parts() {
    let x = BigInt::from_parts(Sign::Minus, BigUint::from(42_u8));
    assert_eq!(x, -42);
    assert_eq!(x.sign(), Sign::Minus);
    assert_eq!(x.magnitude(), &BigUint::from(42_u8));

    let (sign, magnitude) = x.into_parts();
    assert_eq!((sign, magnitude), (Sign::Minus, BigUint::from(42_u8)));

    assert_eq!(BigInt::from_parts(Sign::NoSign, BigUint::from(3_u8)), 3);
    assert_eq!(BigInt::from_parts(Sign::Plus, BigUint::zero()).sign(), Sign::NoSign);
    assert_eq!(-Sign::Minus, Sign::Plus);
    assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
    assert_eq!(Sign::Plus * Sign::NoSign, Sign::NoSign);
}

#[test]
fn test_arithmetic() {
    let x = BigUint::from(u64::MAX) + 1_u8;
    assert_eq!(x.as_limbs(), [0, 0, 1], "The final carry should extend the sequence.");
    assert_eq!((&x - 1_u8).as_limbs(), [u32::MAX, u32::MAX], "The borrow should ripple.");

    assert_eq!(BigInt::from(5) - 7, -2);
    assert_eq!(BigInt::from(-5) + 7, 2);
    assert_eq!(BigInt::from(-5) - 7, -12);
    assert_eq!(7 - BigInt::from(-5), 12, "Natives should work on the left hand side.");
    assert_eq!(BigInt::from(-5) * -7, 35);
    assert_eq!(BigInt::from(-5) * 0, 0);

    let big = BigInt::from(u128::MAX);
    assert_eq!((&big * &big).to_string(), (RefInt::from(u128::MAX).pow(2)).to_string());
    assert_eq!(&big + 1 - &big, 1);
}

#[test]
fn test_unsigned_underflow() {
    assert_eq!(BigUint::from(1_u8).checked_sub(&BigUint::from(2_u8)), None);
    assert_eq!(BigUint::from(2_u8).checked_sub(&BigUint::from(2_u8)), Some(BigUint::zero()));
    assert_panics!({
        let _ = BigUint::from(1_u8) - BigUint::from(2_u8);
    }, contains "attempt to subtract with overflow");
    assert_panics!({
        let mut x = BigUint::zero();
        x -= 1_u8;
    });
}

#[test]
fn test_bitwise_chains() {
    let mut x = BigInt::from(0xffff_ffff_u32);
    x &= 0x80ff_000f_u32;
    assert_eq!(x, 0x80ff_000f_u32);
    x &= 0x0000_ffff_u32;
    assert_eq!(x, 0x0000_000f_u32);

    let wide: BigInt = "0xfedcba9876543210fedcba9876543210f".parse().unwrap();
    assert_eq!(wide.bits(), 132);
    let narrow = BigInt::from(0x1234_5678_u32) & &wide;
    assert_eq!(narrow, 0x1234_5678_u32 & 0x6543_210f, "The high limbs should be cleared.");
    assert_eq!(narrow.actual_size(), 1);
    assert_eq!(BigInt::from(-1) & &wide, wide, "-1 should act as all ones.");

    assert_eq!(BigUint::from(0xfa_u8) ^ 0x47_u8, 0xbd_u8);
    assert_eq!(BigUint::from(0xf0_u8) | BigUint::from(1_u64 << 40), (1_u64 << 40) | 0xf0);

    let values = [0, 1, -1, 12345, -12345, i64::MIN, i64::MAX, -4294967296];
    for a in values {
        assert_eq!(!BigInt::from(a), !a, "!{}", a);
        for b in values {
            let big = BigInt::from(a);
            assert_eq!(&big & b, a & b, "{} & {}", a, b);
            assert_eq!(&big | b, a | b, "{} | {}", a, b);
            assert_eq!(&big ^ b, a ^ b, "{} ^ {}", a, b);
        }
    }
}

#[test]
fn test_bitwise_identity() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);

    for _ in 0..50 {
        let a = random_big(&mut prng);
        let b = random_big(&mut prng);
        assert_eq!((&a & &b) | (&a & !&b), a, "(a & b) | (a & !b) should be a.");
        assert_eq!(!!a.clone(), a);
    }
}

#[test]
fn test_division() {
    let mut x = BigInt::from(12345);
    x %= BigInt::from(678);
    assert_eq!(x, 141);
    x %= 47;
    assert_eq!(x, 0, "141 is a multiple of 47.");

    assert_eq!(BigInt::from(-51) % 13, -12, "The remainder should take the sign of the dividend.");
    assert_eq!(BigInt::from(51) % -13, 12);
    assert_eq!(BigInt::from(-51) / 13, -3, "Division should truncate toward zero.");
    assert_eq!(BigInt::from(-51) / -13, 3);

    let x = (BigUint::one() << 128_u32) + 1_u8;
    let y = (BigUint::one() << 32_u32) + 1_u8;
    assert_eq!(&x % &y, 2_u8);
    assert_eq!((&x / &y).to_string(), "79228162495817593524129366015");

    assert_eq!(BigInt::one().checked_div(&BigInt::zero()), None);
    assert_eq!(BigInt::one().checked_rem(&BigInt::zero()), None);
    assert!(BigUint::one().try_div_rem(&BigUint::zero()).is_err());
    assert_panics!({
        let _ = BigInt::one() / BigInt::zero();
    }, contains "attempt to divide by zero");
    assert_panics!({
        let mut x = BigUint::from(7_u8);
        x %= 0_u8;
    });
}

#[test]
fn test_self_assignment() {
    let mut x = BigInt::from(-987654321);
    x -= x.clone();
    assert_eq!(x, 0, "x -= x should be zero.");

    let mut x = BigInt::from(123456789);
    x %= x.clone();
    assert_eq!(x, 0, "x %= x should be zero.");

    let mut x = BigUint::from(u64::MAX);
    x -= x.clone();
    assert!(x.is_zero());

    // Squaring, alternated with multiplying by the negation, exercises the sign handling.
    let mut x = BigInt::from(2);
    let steps = [
        (false, "4"),
        (false, "16"),
        (false, "256"),
        (true, "-65536"),
        (false, "4294967296"),
        (true, "-18446744073709551616"),
        (false, "340282366920938463463374607431768211456"),
    ];
    for (negate, expected) in steps {
        let rhs = if negate { -&x } else { x.clone() };
        x *= rhs;
        assert_eq!(x.to_string(), expected, "Repeated self-multiplication should reach {}.", expected);
    }
}

#[test]
fn test_shifts() {
    let x = BigInt::one() << 100_u32;
    assert_eq!(x, "0x10000000000000000000000000".parse::<BigInt>().unwrap());
    assert_eq!(x.bits(), 101);

    let mut y = BigInt::from(0xdead_beef_u32);
    y <<= 77;
    y >>= 77;
    assert_eq!(y, 0xdead_beef_u32, "(x << k) >> k should be x.");

    assert_eq!(BigInt::from(-51) >> 2, -13, "Right shift should round toward negative infinity.");
    assert_eq!(BigInt::from(-1) >> 100, -1);
    assert_eq!(BigInt::from(-(1_i64 << 40)) >> 40, -1);
    assert_eq!(BigInt::from(-5) << 1, -10);
    assert_eq!(BigUint::from(u128::MAX) >> 1000, 0_u8);
    assert_eq!(BigUint::zero() << 1000, 0_u8);

    assert_panics!({
        let _ = BigInt::one() << -1;
    }, contains "negative");
}

#[test]
fn test_parse() {
    assert_eq!("123".parse::<BigInt>(), Ok(BigInt::from(123)));
    assert_eq!("-0x1F".parse::<BigInt>(), Ok(BigInt::from(-31)));
    assert_eq!("+0o17".parse::<BigInt>(), Ok(BigInt::from(15)));
    assert_eq!("0b1010_1010".parse::<BigUint>(), Ok(BigUint::from(170_u8)));
    assert_eq!("1'000'000".parse::<BigInt>(), Ok(BigInt::from(1_000_000)));
    assert_eq!("-0".parse::<BigUint>(), Ok(BigUint::zero()), "Negative zero should parse.");
    assert_eq!(BigInt::from_str_radix("zz", 36), Ok(BigInt::from(1295)));

    assert!("".parse::<BigInt>().unwrap_err().is_empty());
    assert!("-".parse::<BigInt>().unwrap_err().is_empty());
    assert!("0x".parse::<BigInt>().unwrap_err().is_empty());
    assert!("-5".parse::<BigUint>().unwrap_err().is_out_of_range());
    assert!(BigInt::from_str_radix("1", 37).unwrap_err().is_invalid_radix());
    assert_eq!(
        "12a".parse::<BigInt>(),
        Err(ParseIntError::InvalidDigit(InvalidDigitError { digit: 'a', index: 2, radix: 10 })),
        "The error should point at the offending digit."
    );
    assert_eq!(
        "_1".parse::<BigInt>(),
        Err(ParseIntError::InvalidDigit(InvalidDigitError { digit: '_', index: 0, radix: 10 })),
        "A separator shouldn't be accepted before the first digit."
    );
}

#[test]
fn test_string_round_trip() {
    let mut prng = ChaCha20Rng::seed_from_u64(2);

    for _ in 0..50 {
        let x = random_big(&mut prng);
        assert_eq!(x.to_string().parse::<BigInt>(), Ok(x.clone()));
        assert_eq!(BigInt::from_str_radix(&x.to_str_radix(36), 36), Ok(x.clone()));
    }
}

#[test]
fn test_formatting() {
    assert_eq!(format!("{}", BigInt::from(-255)), "-255");
    assert_eq!(format!("{:x}", BigInt::from(-255)), "-ff", "Negative hex should be signed.");
    assert_eq!(format!("{:#x}", BigInt::from(-255)), "-0xff");
    assert_eq!(format!("{:X}", BigUint::from(255_u8)), "FF");
    assert_eq!(format!("{:o}", BigInt::from(8)), "10");
    assert_eq!(format!("{:#b}", BigUint::from(5_u8)), "0b101");
    assert_eq!(format!("{:+}", BigInt::from(5)), "+5");
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:06}", BigInt::from(-42)), "-00042");
    assert_eq!(format!("{:?}", BigUint::from(u64::MAX) + 1_u8), "18446744073709551616");
    assert_eq!(BigInt::zero().to_string(), "0");
}

#[test]
fn test_native_comparison() {
    assert!(BigInt::from(-5) < 0);
    assert!(0 > BigInt::from(-5));
    assert!(BigInt::from(u128::MAX) > i128::MAX);
    assert!(BigInt::from(i128::MIN) - 1 < i128::MIN);
    assert_eq!(BigInt::from(u128::MAX), u128::MAX);
    assert!(BigInt::from(-1) < 0_u8, "Negative values should be below every unsigned value.");
    assert!(BigUint::from(5_u8) > -1);
    assert_eq!(BigUint::from(5_u8), 5_u32);
    assert!(BigUint::from(u128::MAX) + 1_u8 > u128::MAX);
    assert!(BigInt::from(-7) < BigInt::from(-6));
    assert!(BigInt::from(-7) < BigInt::zero());
}

#[test]
fn test_native_conversion() {
    assert_eq!(i8::try_from(&BigInt::from(-128)), Ok(-128));
    assert_eq!(i8::try_from(&BigInt::from(128)), Err(OutOfRangeError));
    assert_eq!(u128::try_from(BigInt::from(u128::MAX)), Ok(u128::MAX));
    assert_eq!(i128::try_from(BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(u8::try_from(&BigInt::from(-1)), Err(OutOfRangeError));
    assert_eq!(u32::try_from(BigUint::from(u64::MAX)), Err(OutOfRangeError));
    assert_eq!(u64::try_from(BigUint::from(u64::MAX)), Ok(u64::MAX));
    assert_eq!(u128::try_from(BigUint::from(u128::MAX) + 1_u8), Err(OutOfRangeError));

    assert_eq!(BigUint::try_from(BigInt::from(-1)), Err(OutOfRangeError));
    assert_eq!(BigUint::try_from(&BigInt::from(9)), Ok(BigUint::from(9_u8)));
    assert_eq!(BigInt::from(BigUint::from(7_u8)), 7);
}

#[cfg(feature = "fixed")]
#[test]
fn test_fixed_conversion() {
    use crate::fixed::{I256, U128};

    let half = BigInt::one() << 255;
    assert_eq!(BigInt::from(I256::MIN), -&half);
    assert_eq!(BigInt::from(I256::MAX), &half - 1);
    assert_eq!(I256::try_from(&-&half), Ok(I256::MIN));
    assert_eq!(I256::try_from(&half), Err(OutOfRangeError), "2^255 shouldn't fit in I256.");
    assert_eq!(U128::try_from(BigInt::from(-1)), Err(OutOfRangeError));
    assert_eq!(BigUint::from(U128::MAX), u128::MAX);
    assert_eq!(U128::try_from(BigUint::from(u128::MAX)), Ok(U128::MAX));

    assert_eq!(I256::from_big_wrapping(&half), I256::MIN, "2^255 should wrap to MIN.");
    assert_eq!(U128::from_big_wrapping(&BigInt::from(-1)), U128::MAX);
}

#[test]
fn test_queries() {
    let x = BigUint::from(0b1011_0000_u8);
    assert_eq!(x.bits(), 8);
    assert_eq!(x.count_ones(), 3);
    assert_eq!(x.trailing_zeros(), Some(4));
    assert!(x.bit(7));
    assert!(!x.bit(100));
    assert_eq!(BigUint::zero().trailing_zeros(), None);
    assert!(BigUint::one().is_one());

    let y = BigInt::from(-12);
    assert_eq!(y.signum(), -1);
    assert_eq!(BigInt::zero().signum(), 0);
    assert_eq!(y.abs(), 12);
    assert!(y.is_negative() && !y.is_positive());
    assert_eq!(y.trailing_zeros(), Some(2));
    for bit in 0..70 {
        assert_eq!(y.bit(bit), bit < 64 && (-12_i64 >> bit) & 1 == 1 || bit >= 64, "bit {}", bit);
    }

    assert_eq!(BigInt::from(-3).pow(3), -27);
    assert_eq!(BigInt::from(-3).pow(4), 81);
    assert_eq!(BigInt::zero().pow(0), 1);
    assert_eq!(BigUint::from(3_u8).pow(40).to_string(), "12157665459056928801");
}

#[test]
fn test_sum_product() {
    let factorial: BigUint = (1..=30_u32).map(BigUint::from).product();
    assert_eq!(factorial.to_string(), "265252859812191058636308480000000");

    let values: Vec<BigInt> = (1..=100_i32).map(BigInt::from).collect();
    assert_eq!(values.iter().sum::<BigInt>(), 5050);
    assert_eq!(Vec::<BigInt>::new().into_iter().product::<BigInt>(), 1);
}

#[test]
fn test_hash() {
    let state = RandomState::new();
    assert_eq!(
        state.hash_one(BigInt::from(-12345)),
        state.hash_one("-12345".parse::<BigInt>().unwrap()),
        "Equal values should produce the same hash."
    );
    assert_eq!(
        state.hash_one(BigUint::from_limbs(vec![9, 0, 0])),
        state.hash_one(BigUint::from(9_u8)),
        "Normalization should make storage canonical."
    );
}

#[test]
fn test_against_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..200 {
        let a = random_big(&mut prng);
        let b = random_big(&mut prng);
        let (ra, rb) = (reference(&a), reference(&b));

        assert_eq!(reference(&(&a + &b)), &ra + &rb, "{} + {}", a, b);
        assert_eq!(reference(&(&a - &b)), &ra - &rb, "{} - {}", a, b);
        assert_eq!(reference(&(&a * &b)), &ra * &rb, "{} * {}", a, b);
        assert_eq!(reference(&(&a & &b)), &ra & &rb, "{} & {}", a, b);
        assert_eq!(reference(&(&a | &b)), &ra | &rb, "{} | {}", a, b);
        assert_eq!(reference(&(&a ^ &b)), &ra ^ &rb, "{} ^ {}", a, b);
        assert_eq!(reference(&!&a), !&ra, "!{}", a);
        assert_eq!(a.cmp(&b), ra.cmp(&rb), "cmp({}, {})", a, b);

        if !b.is_zero() {
            assert_eq!(reference(&(&a / &b)), &ra / &rb, "{} / {}", a, b);
            assert_eq!(reference(&(&a % &b)), &ra % &rb, "{} % {}", a, b);
        }

        let k = prng.gen_range(0..300_usize);
        assert_eq!(reference(&(&a << k)), &ra << k, "{} << {}", a, k);
        assert_eq!(reference(&(&a >> k)), &ra >> k, "{} >> {}", a, k);

        let (ua, ub) = (a.magnitude(), b.magnitude());
        let (rua, rub) = (reference_uint(ua), reference_uint(ub));
        assert_eq!(reference_uint(&(ua + ub)), &rua + &rub, "{} + {}", ua, ub);
        assert_eq!(reference_uint(&(ua * ub)), &rua * &rub, "{} * {}", ua, ub);
        if ua >= ub {
            assert_eq!(reference_uint(&(ua - ub)), &rua - &rub, "{} - {}", ua, ub);
        }
    }
}
