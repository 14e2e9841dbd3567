use std::cmp::Ordering;

use super::{DoubleLimb, LIMB_BITS, Limb, LimbSeq, actual_size, cmp, normalize, shl_into, shr_into};
use crate::error::DivideByZeroError;

const BASE: DoubleLimb = 1 << LIMB_BITS;

/// Divides `seq` in place by a single limb, returning the remainder.
///
/// # Panics
/// Panics if `divisor` is 0.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let mut limbs = [0, 1];
/// assert_eq!(algo::div_rem_limb(&mut limbs, 3), 1);
/// assert_eq!(limbs, [0x5555_5555, 0]);
/// ```
pub fn div_rem_limb(seq: &mut [Limb], divisor: Limb) -> Limb {
    let divisor = divisor as DoubleLimb;
    let mut rem: DoubleLimb = 0;
    for limb in seq.iter_mut().rev() {
        let current = (rem << LIMB_BITS) | *limb as DoubleLimb;
        *limb = (current / divisor) as Limb;
        rem = current % divisor;
    }
    rem as Limb
}

/// Divides the magnitude `a` by the magnitude `b`, returning the normalized quotient and
/// remainder.
///
/// Single limb divisors are handled by [`div_rem_limb`]; longer ones use long division in base
/// `2^32`, where each quotient limb is estimated from the top two limbs of the running remainder,
/// corrected against the second divisor limb, and finally verified by the multiply-subtract step
/// (adding the divisor back in the rare case that the estimate was one too large). Both operands
/// are first shifted left so that the top divisor limb has its high bit set, which keeps the
/// estimate within two of the true limb.
///
/// # Errors
/// Returns [`DivideByZeroError`] if `b` is zero.
///
/// # Examples
/// ```
/// # use standard_bigint::algo;
/// let (quot, rem) = algo::div_rem(&[12345_u32], &[678_u32]).unwrap();
/// assert_eq!((quot, rem), (vec![18], vec![141]));
///
/// assert!(algo::div_rem(&[1_u32], &[0_u32, 0]).is_err());
/// ```
pub fn div_rem<A, B>(a: &A, b: &B) -> Result<(Vec<Limb>, Vec<Limb>), DivideByZeroError>
where
    A: LimbSeq + ?Sized,
    B: LimbSeq + ?Sized,
{
    let n = actual_size(b);
    if n == 0 {
        return Err(DivideByZeroError);
    }

    let m = actual_size(a);
    let a = &a.as_limbs()[..m];
    let b = &b.as_limbs()[..n];

    if cmp(a, b) == Ordering::Less {
        let mut rem = a.to_vec();
        normalize(&mut rem);
        return Ok((vec![0], rem));
    }

    if n == 1 {
        let mut quot = a.to_vec();
        let rem = div_rem_limb(&mut quot, b[0]);
        normalize(&mut quot);
        return Ok((quot, vec![rem]));
    }

    let shift = b[n - 1].leading_zeros() as usize;
    let mut v = vec![0; n];
    shl_into(&mut v, b, shift);
    let mut u = vec![0; m + 1];
    shl_into(&mut u, a, shift);

    let v_top = v[n - 1] as DoubleLimb;
    let v_next = v[n - 2] as DoubleLimb;
    let mut quot = vec![0; m - n + 1];

    for j in (0..=m - n).rev() {
        let numerator = ((u[j + n] as DoubleLimb) << LIMB_BITS) | u[j + n - 1] as DoubleLimb;
        let mut q_hat = numerator / v_top;
        let mut r_hat = numerator % v_top;

        while q_hat >= BASE
            || q_hat * v_next > ((r_hat << LIMB_BITS) | u[j + n - 2] as DoubleLimb)
        {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= BASE {
                break;
            }
        }

        // Subtract q_hat * v from the window u[j..=j + n].
        let mut carry: DoubleLimb = 0;
        let mut borrow = false;
        for i in 0..n {
            let product = q_hat * v[i] as DoubleLimb + carry;
            carry = product >> LIMB_BITS;
            let (diff, first) = u[i + j].overflowing_sub(product as Limb);
            let (diff, second) = diff.overflowing_sub(borrow as Limb);
            u[i + j] = diff;
            borrow = first | second;
        }
        let (diff, first) = u[j + n].overflowing_sub(carry as Limb);
        let (diff, second) = diff.overflowing_sub(borrow as Limb);
        u[j + n] = diff;

        if first | second {
            // The estimate was one too large, add a single v back into the window.
            q_hat -= 1;
            let mut carry = false;
            for i in 0..n {
                let (sum, first) = u[i + j].overflowing_add(v[i]);
                let (sum, second) = sum.overflowing_add(carry as Limb);
                u[i + j] = sum;
                carry = first | second;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        }

        quot[j] = q_hat as Limb;
    }

    let mut rem = vec![0; n];
    shr_into(&mut rem, &u[..n], shift);
    normalize(&mut rem);
    normalize(&mut quot);

    Ok((quot, rem))
}
