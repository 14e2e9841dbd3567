use std::cmp::Ordering;

use super::{DoubleLimb, LIMB_BITS, Limb, LimbSeq, actual_size};

/// Writes `a + b` into `out`, rippling the carry from the least significant limb upward across all
/// of `out`. Returns true if a carry remains past the last limb of `out`.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut out = [0; 2];
/// let carry = algo::add_into(&mut out, &[u32::MAX], &[1_u32]);
/// assert_eq!((out, carry), ([0, 1], false));
///
/// let mut out = [0; 1];
/// assert!(algo::add_into(&mut out, &[u32::MAX], &[1_u32]));
/// ```
pub fn add_into<A, B>(out: &mut [Limb], a: &A, b: &B) -> bool
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    let mut carry = false;
    for (index, slot) in out.iter_mut().enumerate() {
        let (sum, first) = a.limb(index).overflowing_add(b.limb(index));
        let (sum, second) = sum.overflowing_add(carry as Limb);
        *slot = sum;
        carry = first | second;
    }
    carry
}

/// Writes `a - b` into `out`, rippling the borrow upward across all of `out`. Returns true if a
/// borrow remains past the last limb, meaning that `b > a` over the width of `out`.
pub fn sub_into<A, B>(out: &mut [Limb], a: &A, b: &B) -> bool
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    let mut borrow = false;
    for (index, slot) in out.iter_mut().enumerate() {
        let (diff, first) = a.limb(index).overflowing_sub(b.limb(index));
        let (diff, second) = diff.overflowing_sub(borrow as Limb);
        *slot = diff;
        borrow = first | second;
    }
    borrow
}

/// Compares two sequences as unsigned magnitudes. High-order zero limbs are ignored, so sequences
/// of different lengths compare by value.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// # use std::cmp::Ordering;
/// assert_eq!(algo::cmp(&[1_u32, 2, 0, 0], &[9_u32, 1]), Ordering::Greater);
/// assert_eq!(algo::cmp(&[7_u32, 0], &[7_u32]), Ordering::Equal);
/// ```
pub fn cmp<A, B>(a: &A, b: &B) -> Ordering
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    let a = &a.as_limbs()[..actual_size(a)];
    let b = &b.as_limbs()[..actual_size(b)];

    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Writes the schoolbook product `a * b` into `out`, truncated to `out.len()` limbs. Each partial
/// product is accumulated in a [`DoubleLimb`] with the carry passed to the next limb up.
///
/// The full product needs at most `actual_size(a) + actual_size(b)` limbs; a shorter `out` yields
/// the product modulo `2^(32 * out.len())`.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut out = [0; 2];
/// algo::mul_into(&mut out, &[u32::MAX], &[u32::MAX]);
/// assert_eq!(out, [1, u32::MAX - 1]);
/// ```
pub fn mul_into<A, B>(out: &mut [Limb], a: &A, b: &B)
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    out.fill(0);

    let a = &a.as_limbs()[..actual_size(a)];
    let b = &b.as_limbs()[..actual_size(b)];

    for (i, &x) in a.iter().enumerate() {
        if i >= out.len() {
            break;
        }
        if x == 0 {
            continue;
        }

        let mut carry: DoubleLimb = 0;
        let mut k = i;
        for &y in b {
            if k >= out.len() {
                break;
            }
            let t = out[k] as DoubleLimb + x as DoubleLimb * y as DoubleLimb + carry;
            out[k] = t as Limb;
            carry = t >> LIMB_BITS;
            k += 1;
        }

        while carry != 0 && k < out.len() {
            let t = out[k] as DoubleLimb + carry;
            out[k] = t as Limb;
            carry = t >> LIMB_BITS;
            k += 1;
        }
    }
}

/// Multiplies a growable sequence by `mul` and adds `add`, in place, extending it by a limb if
/// the result requires it.
pub fn mul_small_add(seq: &mut Vec<Limb>, mul: Limb, add: Limb) {
    let mut carry = add as DoubleLimb;
    for limb in seq.iter_mut() {
        let t = *limb as DoubleLimb * mul as DoubleLimb + carry;
        *limb = t as Limb;
        carry = t >> LIMB_BITS;
    }
    if carry != 0 {
        seq.push(carry as Limb);
    }
}
