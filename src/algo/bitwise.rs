use super::{Limb, LimbSeq};

fn zip_into<A, B>(out: &mut [Limb], a: &A, b: &B, op: impl Fn(Limb, Limb) -> Limb)
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    for (index, slot) in out.iter_mut().enumerate() {
        *slot = op(a.limb(index), b.limb(index));
    }
}

/// Writes the limb-wise AND of `a` and `b` into `out`.
pub fn and_into<A, B>(out: &mut [Limb], a: &A, b: &B)
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    zip_into(out, a, b, |x, y| x & y);
}

/// Writes the limb-wise OR of `a` and `b` into `out`.
pub fn or_into<A, B>(out: &mut [Limb], a: &A, b: &B)
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    zip_into(out, a, b, |x, y| x | y);
}

/// Writes the limb-wise XOR of `a` and `b` into `out`.
pub fn xor_into<A, B>(out: &mut [Limb], a: &A, b: &B)
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    zip_into(out, a, b, |x, y| x ^ y);
}
