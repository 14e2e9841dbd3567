use super::{LIMB_BITS, Limb, LimbSeq};

/// Splits a bit count into a whole-limb offset and the remaining sub-limb shift.
const fn split_shift(bits: usize) -> (usize, u32) {
    (bits / LIMB_BITS as usize, (bits % LIMB_BITS as usize) as u32)
}

/// Writes `a << bits` into `out`, dropping any bits shifted past the end of `out`.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut out = [0; 3];
/// algo::shl_into(&mut out, &[0x8000_0001_u32], 36);
/// assert_eq!(out, [0, 0x10, 0x8]);
/// ```
pub fn shl_into<A: LimbSeq + ?Sized>(out: &mut [Limb], a: &A, bits: usize) {
    let (limb_shift, bit_shift) = split_shift(bits);

    for (index, slot) in out.iter_mut().enumerate() {
        *slot = match index.checked_sub(limb_shift) {
            None => 0,
            Some(src) if bit_shift == 0 => a.limb(src),
            Some(0) => a.limb(0) << bit_shift,
            Some(src) => (a.limb(src) << bit_shift) | (a.limb(src - 1) >> (LIMB_BITS - bit_shift)),
        };
    }
}

/// Writes `a >> bits` into `out` as a logical shift: bits entering from above are 0.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut out = [0; 2];
/// algo::shr_into(&mut out, &[0, 0x10, 0x8], 36);
/// assert_eq!(out, [0x8000_0001, 0]);
/// ```
pub fn shr_into<A: LimbSeq + ?Sized>(out: &mut [Limb], a: &A, bits: usize) {
    let (limb_shift, bit_shift) = split_shift(bits);

    for (index, slot) in out.iter_mut().enumerate() {
        let src = index.saturating_add(limb_shift);
        let low = a.limb(src) >> bit_shift;
        *slot = if bit_shift == 0 {
            low
        } else {
            low | (a.limb(src.saturating_add(1)) << (LIMB_BITS - bit_shift))
        };
    }
}
