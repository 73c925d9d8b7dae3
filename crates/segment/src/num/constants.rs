// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Associated-constant traits for the primitive integers.
//!
//! Generic segment arithmetic needs the additive identity, the unit step and
//! both extremes of a domain without any runtime type inspection. Each trait
//! exposes one of those as an associated constant, so `T::MAX` inside a
//! generic function resolves to the concrete width at compile time.

/// The additive identity of an integer domain, as a constant.
pub trait Zero {
    /// `0` in `Self`.
    const ZERO: Self;
}

/// The unit step of an integer domain, as a constant.
pub trait PlusOne {
    /// `1` in `Self`, the distance between neighbouring points.
    const PLUS_ONE: Self;
}

/// A trait for integer types with a smallest and a largest representable value.
///
/// # Examples
///
/// ```rust
/// # use segment::num::constants::Bounded;
/// assert_eq!(<i8 as Bounded>::MIN, -128);
/// assert_eq!(<u16 as Bounded>::MAX, 65535);
/// ```
pub trait Bounded {
    /// The smallest value of the domain.
    const MIN: Self;
    /// The largest value of the domain.
    const MAX: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_plus_one_for {
    ($t:ty) => {
        impl_const_for!(PlusOne, PLUS_ONE, 1, $t);
    };
}

macro_rules! impl_zero_for {
    ($t:ty) => {
        impl_const_for!(Zero, ZERO, 0, $t);
    };
}

macro_rules! impl_bounded_for {
    ($t:ty) => {
        impl Bounded for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
        }
    };
}

macro_rules! impl_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl_zero_for!($t);
            impl_plus_one_for!($t);
            impl_bounded_for!($t);
        )*
    };
}

impl_constants_for!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize
);

#[cfg(test)]
mod tests {
    use super::*;

    fn extremes<T: Bounded>() -> (T, T) {
        (T::MIN, T::MAX)
    }

    #[test]
    fn test_zero_and_plus_one() {
        assert_eq!(<i8 as Zero>::ZERO, 0);
        assert_eq!(<u64 as Zero>::ZERO, 0);
        assert_eq!(<i128 as PlusOne>::PLUS_ONE, 1);
        assert_eq!(<usize as PlusOne>::PLUS_ONE, 1);
    }

    #[test]
    fn test_bounded_signed() {
        assert_eq!(extremes::<i8>(), (i8::MIN, i8::MAX));
        assert_eq!(extremes::<i16>(), (i16::MIN, i16::MAX));
        assert_eq!(extremes::<i32>(), (i32::MIN, i32::MAX));
        assert_eq!(extremes::<i64>(), (i64::MIN, i64::MAX));
        assert_eq!(extremes::<i128>(), (i128::MIN, i128::MAX));
        assert_eq!(extremes::<isize>(), (isize::MIN, isize::MAX));
    }

    #[test]
    fn test_bounded_unsigned() {
        assert_eq!(extremes::<u8>(), (0, u8::MAX));
        assert_eq!(extremes::<u16>(), (0, u16::MAX));
        assert_eq!(extremes::<u32>(), (0, u32::MAX));
        assert_eq!(extremes::<u64>(), (0, u64::MAX));
        assert_eq!(extremes::<u128>(), (0, u128::MAX));
        assert_eq!(extremes::<usize>(), (0, usize::MAX));
    }
}
