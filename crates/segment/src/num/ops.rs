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

//! By-value checked and wrapping arithmetic for the primitive integers.
//!
//! These mirror the intrinsic `checked_*` and `wrapping_*` methods but are
//! reachable through trait bounds in generic code, without the reference
//! arguments `num_traits` uses for the same operations.

use core::ops::{Add, Sub};

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use segment::num::ops::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Adds `v`, or returns `None` when the sum leaves the domain.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use segment::num::ops::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(100), None);
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Subtracts `v`, or returns `None` when the difference leaves the domain.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support two's complement wrapping subtraction by value.
///
/// On signed types a distance larger than `MAX` wraps into the negative range,
/// which is how chunking detects spans that exceed the domain width.
///
/// # Examples
///
/// ```rust
/// # use segment::num::ops::WrappingSubVal;
/// assert_eq!(127i8.wrapping_sub_val(-128), -1);
/// assert_eq!(255u8.wrapping_sub_val(0), 255);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! impl_ops_for {
    ($($t:ty),* $(,)?) => {
        $(
            checked_impl_val!(CheckedAddVal, checked_add_val, $t, checked_add);
            checked_impl_val!(CheckedSubVal, checked_sub_val, $t, checked_sub);
            wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, $t, wrapping_sub);
        )*
    };
}

impl_ops_for!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize
);
