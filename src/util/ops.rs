//! Helpers shared by the operator implementations of every integer type.

/// Converts the right hand side of a shift into a bit count.
///
/// # Panics
/// Panics if `amount` is negative or doesn't fit in a [`usize`].
#[track_caller]
pub(crate) fn shift_amount<T>(amount: T) -> usize
where
    T: TryInto<usize> + Copy,
{
    match amount.try_into() {
        Ok(bits) => bits,
        Err(_) => panic!("attempt to shift by a negative or oversized amount"),
    }
}

/// Expands `$body` once per native integer type, binding the type to `$prim`. Prefixing the
/// binding with `signed` or `unsigned` restricts the expansion to that half of the types, and
/// `all` is the same as no prefix.
macro_rules! for_each_native {
    (signed $prim:ident => $body:tt) => {
        crate::util::ops::for_each_native!(@expand $prim $body; i8, i16, i32, i64, i128, isize);
    };
    (unsigned $prim:ident => $body:tt) => {
        crate::util::ops::for_each_native!(@expand $prim $body; u8, u16, u32, u64, u128, usize);
    };
    (all $prim:ident => $body:tt) => {
        crate::util::ops::for_each_native!($prim => $body);
    };
    ($prim:ident => $body:tt) => {
        crate::util::ops::for_each_native!(signed $prim => $body);
        crate::util::ops::for_each_native!(unsigned $prim => $body);
    };
    (@expand $prim:ident $body:tt; $($ty:ty),*) => {
        $( crate::util::ops::for_each_native!(@one $prim $ty $body); )*
    };
    (@one $prim:ident $ty:ty { $($body:tt)* }) => {
        const _: () = {
            type $prim = $ty;
            $($body)*
        };
    };
}

pub(crate) use for_each_native;
