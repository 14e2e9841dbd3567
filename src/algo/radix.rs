use super::{DoubleLimb, LIMB_BITS, Limb, LimbSeq, actual_size, bit_len, div_rem_limb, is_zero,
    mul_small_add, normalize};
use crate::error::{EmptyInputError, InvalidDigitError, InvalidRadixError, ParseIntError};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// An integer literal split into its sign, radix and digits. Produced by [`split_literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    pub negative: bool,
    pub radix: u32,
    pub digits: &'a str,
    /// The byte offset of `digits` within the original text, used for error positions.
    pub offset: usize,
}

/// Returns an error unless `radix` is within `2..=36`.
pub fn check_radix(radix: u32) -> Result<(), InvalidRadixError> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(InvalidRadixError { radix })
    }
}

/// Returns the largest power of `radix` that fits in a [`Limb`], along with its exponent.
fn chunk_params(radix: u32) -> (Limb, u32) {
    let mut base = radix;
    let mut len = 1;
    while let Some(next) = base.checked_mul(radix) {
        base = next;
        len += 1;
    }
    (base, len)
}

/// Splits a leading `-` or `+` from `text`.
pub fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Splits an integer literal into its parts. A sign may be followed by a `0x`, `0o` or `0b` radix
/// prefix (in either case); without a prefix the literal is decimal. The digits themselves aren't
/// validated here.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let literal = algo::split_literal("-0xFF");
/// assert!(literal.negative);
/// assert_eq!(literal.radix, 16);
/// assert_eq!(literal.digits, "FF");
/// assert_eq!(literal.offset, 3);
/// ```
pub fn split_literal(text: &str) -> Literal<'_> {
    let (negative, rest) = split_sign(text);
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };

    Literal {
        negative,
        radix,
        digits,
        offset: text.len() - digits.len(),
    }
}

/// Parses unsigned digits in the given radix into a normalized limb vector.
///
/// Once a digit has been seen, `_` and `'` are accepted as digit separators and ignored.
///
/// # Errors
/// Returns [`ParseIntError::InvalidRadix`] for a radix outside of `2..=36`,
/// [`ParseIntError::Empty`] if there are no digits and [`ParseIntError::InvalidDigit`] for any
/// other character.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// assert_eq!(algo::from_radix("1_0000_0000", 16).unwrap(), [0, 1]);
/// assert!(algo::from_radix("12a", 10).unwrap_err().is_invalid_digit());
/// ```
pub fn from_radix(digits: &str, radix: u32) -> Result<Vec<Limb>, ParseIntError> {
    from_radix_at(digits, radix, 0)
}

/// As [`from_radix`], reporting digit positions relative to `offset`.
pub(crate) fn from_radix_at(
    digits: &str,
    radix: u32,
    offset: usize,
) -> Result<Vec<Limb>, ParseIntError> {
    check_radix(radix)?;

    let (chunk_base, chunk_len) = chunk_params(radix);
    let mut limbs = vec![0];
    let mut chunk: Limb = 0;
    let mut count = 0;
    let mut seen_digit = false;

    for (index, ch) in digits.char_indices() {
        if seen_digit && matches!(ch, '_' | '\'') {
            continue;
        }

        let digit = ch.to_digit(radix).ok_or(InvalidDigitError {
            digit: ch,
            index: offset + index,
            radix,
        })?;
        seen_digit = true;

        chunk = chunk * radix + digit;
        count += 1;
        if count == chunk_len {
            mul_small_add(&mut limbs, chunk_base, chunk);
            chunk = 0;
            count = 0;
        }
    }

    if !seen_digit {
        return Err(EmptyInputError.into());
    }
    if count > 0 {
        mul_small_add(&mut limbs, radix.pow(count), chunk);
    }

    normalize(&mut limbs);
    Ok(limbs)
}

/// Formats a magnitude in the given radix, without any prefix or sign. Zero is formatted as `"0"`.
///
/// # Panics
/// Panics if `radix` is not within `2..=36`.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// assert_eq!(algo::to_radix(&[0, 1_u32], 10, false), "4294967296");
/// assert_eq!(algo::to_radix(&[0xBEEF_u32], 16, true), "BEEF");
/// assert_eq!(algo::to_radix(&[0_u32; 3], 2, false), "0");
/// ```
pub fn to_radix<S: LimbSeq + ?Sized>(seq: &S, radix: u32, uppercase: bool) -> String {
    assert!((2..=36).contains(&radix), "radix {} is not in the range 2..=36", radix);

    let size = actual_size(seq);
    if size == 0 {
        return String::from("0");
    }

    // Digit values, least significant first.
    let mut digits: Vec<u32> = Vec::new();

    if radix.is_power_of_two() {
        let bits = radix.trailing_zeros() as u64;
        let mask = radix as DoubleLimb - 1;
        let total = bit_len(seq);

        let mut pos = 0;
        while pos < total {
            let index = (pos / LIMB_BITS as u64) as usize;
            let window = seq.limb(index) as DoubleLimb
                | (seq.limb(index + 1) as DoubleLimb) << LIMB_BITS;
            digits.push(((window >> (pos % LIMB_BITS as u64)) & mask) as u32);
            pos += bits;
        }
    } else {
        let (chunk_base, chunk_len) = chunk_params(radix);
        let mut work = seq.as_limbs()[..size].to_vec();

        loop {
            let mut rem = div_rem_limb(&mut work, chunk_base);
            let last = is_zero(&work);

            for _ in 0..chunk_len {
                if last && rem == 0 {
                    break;
                }
                digits.push(rem % radix);
                rem /= radix;
            }

            if last {
                break;
            }
            work.truncate(actual_size(&work));
        }
    }

    digits
        .iter()
        .rev()
        .map(|&digit| {
            let ch = DIGITS[digit as usize];
            let ch = if uppercase { ch.to_ascii_uppercase() } else { ch };
            ch as char
        })
        .collect()
}
