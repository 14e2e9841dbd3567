use super::Limb;

/// An indexable sequence of limbs, least-significant first, with a defined length and an implicit
/// value of 0 for every index past that length.
///
/// This is implemented for fixed-size arrays, slices and vectors, allowing the algorithms in this
/// module to accept any of them.
pub trait LimbSeq {
    /// Returns the stored limbs as a slice.
    fn as_limbs(&self) -> &[Limb];

    /// Returns the stored limbs as a mutable slice.
    fn as_limbs_mut(&mut self) -> &mut [Limb];

    /// Returns the number of stored limbs, including any high-order zeros.
    fn limb_len(&self) -> usize {
        self.as_limbs().len()
    }

    /// Returns the limb at `index`, or 0 if `index` is beyond the stored length. The value is
    /// never sign-extended.
    fn limb(&self, index: usize) -> Limb {
        self.as_limbs().get(index).copied().unwrap_or(0)
    }
}

impl LimbSeq for [Limb] {
    fn as_limbs(&self) -> &[Limb] {
        self
    }

    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

impl<const N: usize> LimbSeq for [Limb; N] {
    fn as_limbs(&self) -> &[Limb] {
        self
    }

    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

impl LimbSeq for Vec<Limb> {
    fn as_limbs(&self) -> &[Limb] {
        self
    }

    fn as_limbs_mut(&mut self) -> &mut [Limb] {
        self
    }
}

/// Returns the limb at `index`, or 0 if `index` is out of range.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// assert_eq!(algo::get(&[1_u32, 2], 1), 2);
/// assert_eq!(algo::get(&[1_u32, 2], 7), 0);
/// ```
pub fn get<S: LimbSeq + ?Sized>(seq: &S, index: usize) -> Limb {
    seq.limb(index)
}

/// Returns true if every limb is 0. An empty sequence is zero.
pub fn is_zero<S: LimbSeq + ?Sized>(seq: &S) -> bool {
    seq.as_limbs().iter().all(|&limb| limb == 0)
}

/// Returns the number of limbs once all high-order zero limbs are excluded, which is 0 for a zero
/// value.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// assert_eq!(algo::actual_size(&[5_u32, 0, 7, 0, 0]), 3);
/// assert_eq!(algo::actual_size(&[0_u32; 4]), 0);
/// ```
pub fn actual_size<S: LimbSeq + ?Sized>(seq: &S) -> usize {
    seq.as_limbs()
        .iter()
        .rposition(|&limb| limb != 0)
        .map_or(0, |index| index + 1)
}

/// Returns a copy of `seq` with every limb complemented.
pub fn bit_not<S: LimbSeq + Clone>(seq: &S) -> S {
    let mut out = seq.clone();
    bit_not_in_place(out.as_limbs_mut());
    out
}

/// Complements every limb of `seq`.
pub fn bit_not_in_place(seq: &mut [Limb]) {
    for limb in seq.iter_mut() {
        *limb = !*limb;
    }
}

/// Returns the two's complement negation of `seq` over its own length.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// assert_eq!(algo::negate(&[1_u32, 0]), [u32::MAX, u32::MAX]);
/// assert_eq!(algo::negate(&[0_u32, 0]), [0, 0]);
/// ```
pub fn negate<S: LimbSeq + Clone>(seq: &S) -> S {
    let mut out = seq.clone();
    negate_in_place(out.as_limbs_mut());
    out
}

/// Negates `seq` in place as a two's complement value over its own length.
pub fn negate_in_place(seq: &mut [Limb]) {
    bit_not_in_place(seq);
    increment(seq);
}

/// Adds 1 to `seq` in place, returning true if the carry ran off the top.
pub fn increment(seq: &mut [Limb]) -> bool {
    for limb in seq.iter_mut() {
        let (sum, carry) = limb.overflowing_add(1);
        *limb = sum;
        if !carry {
            return false;
        }
    }
    true
}

/// Subtracts 1 from `seq` in place, returning true if the borrow ran off the top.
pub fn decrement(seq: &mut [Limb]) -> bool {
    for limb in seq.iter_mut() {
        let (diff, borrow) = limb.overflowing_sub(1);
        *limb = diff;
        if !borrow {
            return false;
        }
    }
    true
}

/// Strips high-order zero limbs from `seq`, leaving `[0]` for a zero value.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut limbs = vec![3, 0, 0];
/// algo::normalize(&mut limbs);
/// assert_eq!(limbs, [3]);
///
/// let mut limbs = vec![0, 0];
/// algo::normalize(&mut limbs);
/// assert_eq!(limbs, [0]);
/// ```
pub fn normalize(seq: &mut Vec<Limb>) {
    seq.truncate(actual_size(seq));
    if seq.is_empty() {
        seq.push(0);
    }
}

/// Returns the number of significant bits in `seq`, 0 for a zero value.
pub fn bit_len<S: LimbSeq + ?Sized>(seq: &S) -> u64 {
    match actual_size(seq) {
        0 => 0,
        size => {
            let top = seq.limb(size - 1);
            size as u64 * Limb::BITS as u64 - top.leading_zeros() as u64
        }
    }
}

/// Returns the bit at position `bit`, counting from the least significant.
pub fn test_bit<S: LimbSeq + ?Sized>(seq: &S, bit: u64) -> bool {
    let Ok(index) = usize::try_from(bit / Limb::BITS as u64) else {
        return false;
    };
    seq.limb(index) >> (bit % Limb::BITS as u64) & 1 == 1
}

/// Returns the number of set bits in `seq`.
pub fn count_ones<S: LimbSeq + ?Sized>(seq: &S) -> u64 {
    seq.as_limbs().iter().map(|limb| limb.count_ones() as u64).sum()
}

/// Returns the number of trailing zero bits, or [`None`] if `seq` is zero.
pub fn trailing_zeros<S: LimbSeq + ?Sized>(seq: &S) -> Option<u64> {
    let limbs = seq.as_limbs();
    let index = limbs.iter().position(|&limb| limb != 0)?;
    Some(index as u64 * Limb::BITS as u64 + limbs[index].trailing_zeros() as u64)
}
