#![cfg(test)]

use std::cmp::Ordering;

use num_bigint::{BigUint as RefUint, RandomBits};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::error::{DivideByZeroError, EmptyInputError, InvalidDigitError, InvalidRadixError};

fn reference(limbs: &[Limb]) -> RefUint {
    RefUint::from_slice(limbs)
}

fn random_limbs(prng: &mut ChaCha20Rng, bits: u64) -> Vec<Limb> {
    let value: RefUint = prng.sample(RandomBits::new(bits));
    let mut limbs = value.to_u32_digits();
    normalize(&mut limbs);
    limbs
}

#[test]
fn test_out_of_range_access() {
    let arr = [1_u32, 2, 3];
    let vec = vec![1_u32, 2, 3];

    assert_eq!(get(&arr, 2), 3, "In range indices should read the stored limb.");
    assert_eq!(get(&arr, 3), 0, "Indices past the array should read as 0.");
    assert_eq!(get(&vec, usize::MAX), 0, "Indices past the vector should read as 0.");
    assert_eq!(get(&arr[..0], 0), 0, "An empty slice should read as 0 everywhere.");
}

#[test]
fn test_size_and_zero() {
    assert!(is_zero(&[0_u32; 4]));
    assert!(is_zero(&Vec::<Limb>::new()), "An empty sequence should count as zero.");
    assert!(!is_zero(&[0_u32, 0, 1]));

    assert_eq!(actual_size(&[0_u32, 1, 0, 0]), 2);
    assert_eq!(actual_size(&[0_u32; 3]), 0);
    assert_eq!(bit_len(&[0_u32, 1]), 33);
    assert_eq!(bit_len(&[0_u32; 2]), 0);
}

#[test]
fn test_not_and_negate() {
    assert_eq!(bit_not(&[0_u32, u32::MAX]), [u32::MAX, 0]);
    assert_eq!(bit_not(&vec![0xF0F0_F0F0_u32]), vec![0x0F0F_0F0F]);

    assert_eq!(
        negate(&[0_u32, 1]),
        [0, u32::MAX],
        "Negation should carry through a zero low limb."
    );
    assert_eq!(negate(&[u32::MAX; 2]), [1, 0]);
    assert_eq!(negate(&negate(&[5_u32, 7, 9])), [5, 7, 9], "Negation should be an involution.");

    let mut limbs = [0_u32; 2];
    assert!(decrement(&mut limbs), "Decrementing zero should borrow off the top.");
    assert_eq!(limbs, [u32::MAX; 2]);
    assert!(increment(&mut limbs), "Incrementing all ones should carry off the top.");
    assert_eq!(limbs, [0; 2]);
}

#[test]
fn test_normalize() {
    let mut limbs = vec![1, 2, 0, 0];
    normalize(&mut limbs);
    assert_eq!(limbs, [1, 2]);

    let mut limbs = Vec::new();
    normalize(&mut limbs);
    assert_eq!(limbs, [0], "An empty sequence should normalize to a single zero limb.");
}

#[test]
fn test_mixed_length_arithmetic() {
    let mut out = [0; 3];
    let carry = add_into(&mut out, &[u32::MAX, u32::MAX], &[1_u32]);
    assert_eq!(out, [0, 0, 1], "Carries should ripple into limbs past both operands.");
    assert!(!carry);

    let mut out = [0; 2];
    let borrow = sub_into(&mut out, &[0_u32, 1], &[1_u32]);
    assert_eq!(out, [u32::MAX, 0]);
    assert!(!borrow);

    let borrow = sub_into(&mut out, &[1_u32], &[2_u32]);
    assert_eq!(out, [u32::MAX; 2], "Underflow should wrap over the width of the output.");
    assert!(borrow);

    assert_eq!(cmp(&[1_u32, 0, 0], &[1_u32]), Ordering::Equal);
    assert_eq!(cmp(&[0_u32, 1], &[u32::MAX]), Ordering::Greater);
    assert_eq!(cmp(&[3_u32, 1], &[4_u32, 1]), Ordering::Less);
}

#[test]
fn test_truncated_multiply() {
    let mut full = [0; 4];
    mul_into(&mut full, &[u32::MAX, u32::MAX], &[u32::MAX, u32::MAX]);
    assert_eq!(full, [1, 0, u32::MAX - 1, u32::MAX]);

    let mut low = [0; 2];
    mul_into(&mut low, &[u32::MAX, u32::MAX], &[u32::MAX, u32::MAX]);
    assert_eq!(low, [1, 0], "A short output should keep the low limbs of the product.");
}

#[test]
fn test_shifts() {
    let mut out = [0; 4];
    shl_into(&mut out, &[1_u32], 100);
    assert_eq!(out, [0, 0, 0, 1 << 4]);

    let mut back = [0; 1];
    shr_into(&mut back, &out, 100);
    assert_eq!(back, [1]);

    let mut out = [0; 2];
    shl_into(&mut out, &[0xDEAD_BEEF_u32, 0x1234], 64);
    assert_eq!(out, [0, 0], "Shifting past the output should leave only zeros.");

    shr_into(&mut out, &[0xDEAD_BEEF_u32, 0x1234], usize::MAX);
    assert_eq!(out, [0, 0], "Huge shift amounts shouldn't overflow.");
}

#[test]
fn test_bitwise_mixed_lengths() {
    let long = [0xFFFF_FFFF_u32, 0x1234_5678, 0xF];
    let short = [0x80FF_000F_u32];

    let mut out = [0; 3];
    and_into(&mut out, &long, &short);
    assert_eq!(out, [0x80FF_000F, 0, 0], "AND should zero the limbs missing from one side.");

    or_into(&mut out, &long, &short);
    assert_eq!(out, long);

    xor_into(&mut out, &[0xFA_u32], &[0x47_u32]);
    assert_eq!(out, [0xBD, 0, 0]);
}

#[test]
fn test_radix_round_trip() {
    let limbs = from_radix("340282366920938463463374607431768211456", 10).unwrap();
    assert_eq!(limbs, [0, 0, 0, 0, 1]);
    assert_eq!(to_radix(&limbs, 10, false), "340282366920938463463374607431768211456");
    assert_eq!(to_radix(&limbs, 16, false), "100000000000000000000000000000000");
    assert_eq!(to_radix(&limbs, 36, true), "F5LXX1ZZ5PNORYNQGLHZMSP34");

    assert_eq!(to_radix(&[1_000_000_000_u32], 10, false), "1000000000");
    assert_eq!(to_radix(&[0o777_u32], 8, false), "777");
}

#[test]
fn test_parse_errors() {
    assert_eq!(from_radix("", 10), Err(EmptyInputError.into()));
    assert_eq!(
        from_radix("_1", 10),
        Err(InvalidDigitError { digit: '_', index: 0, radix: 10 }.into()),
        "A separator before any digit should be rejected."
    );
    assert_eq!(
        from_radix("12z4", 16),
        Err(InvalidDigitError { digit: 'z', index: 2, radix: 16 }.into())
    );
    assert_eq!(from_radix("10", 37), Err(InvalidRadixError { radix: 37 }.into()));
    assert_eq!(from_radix("1'000'000", 10).unwrap(), [1_000_000]);
}

#[test]
fn test_literal_prefixes() {
    let cases = [
        ("0x1f", false, 16, "1f"),
        ("-0B101", true, 2, "101"),
        ("+0o17", false, 8, "17"),
        ("0", false, 10, "0"),
        ("-", true, 10, ""),
    ];

    for (text, negative, radix, digits) in cases {
        let literal = split_literal(text);
        assert_eq!(
            (literal.negative, literal.radix, literal.digits),
            (negative, radix, digits),
            "Literal {:?} should split correctly.",
            text
        );
    }
}

#[test]
fn test_div_rem_against_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0);

    for _ in 0..200 {
        let a_bits = prng.gen_range(1..=512);
        let b_bits = prng.gen_range(1..=320);
        let a = random_limbs(&mut prng, a_bits);
        let b = random_limbs(&mut prng, b_bits);
        if is_zero(&b) {
            continue;
        }

        let (quot, rem) = div_rem(&a, &b).unwrap();
        let (ra, rb) = (reference(&a), reference(&b));
        assert_eq!(reference(&quot), &ra / &rb, "Quotient should match for {:?} / {:?}.", a, b);
        assert_eq!(reference(&rem), &ra % &rb, "Remainder should match for {:?} % {:?}.", a, b);
    }
}

#[test]
fn test_div_rem_correction_paths() {
    // A divisor with a maximal second limb forces the quotient estimate to be corrected.
    let a = [0_u32, 0, 0x8000_0000, 0x7FFF_FFFF];
    let b = [u32::MAX, 0x8000_0000];
    let (quot, rem) = div_rem(&a, &b).unwrap();
    assert_eq!(reference(&quot), reference(&a) / reference(&b));
    assert_eq!(reference(&rem), reference(&a) % reference(&b));

    let (quot, rem) = div_rem(&[5_u32], &[7_u32, 1]).unwrap();
    assert_eq!((quot, rem), (vec![0], vec![5]), "A smaller dividend should be the remainder.");

    assert_eq!(div_rem(&[5_u32], &Vec::<Limb>::new()), Err(DivideByZeroError));
}

#[test]
fn test_mul_against_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(1);

    for _ in 0..100 {
        let a = random_limbs(&mut prng, 300);
        let b = random_limbs(&mut prng, 200);
        let mut out = vec![0; a.len() + b.len()];
        mul_into(&mut out, &a, &b);
        assert_eq!(reference(&out), reference(&a) * reference(&b));
    }
}
