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

//! # Numeric Foundations
//!
//! Integer capabilities shared by the segment arithmetic.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `PlusOne`, `Bounded`)
//!   implemented for all core integer types.
//! - `ops`: By-value checked and wrapping arithmetic (`CheckedAddVal`,
//!   `CheckedSubVal`, `WrappingSubVal`).
//!
//! The [`Integer`] trait bundles both with `num_traits::PrimInt` and
//! [`Step`](crate::value::Step). It is the
//! bound carried by [`IntegerSegment`](crate::integer::IntegerSegment).

pub mod constants;
pub mod ops;

use crate::value::Step;
use constants::{Bounded, PlusOne, Zero};
use num_traits::PrimInt;
use ops::{CheckedAddVal, CheckedSubVal, WrappingSubVal};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A fixed-width primitive integer usable as a segment domain.
///
/// Implemented automatically for `i8..=i128`, `u8..=u128`, `isize` and `usize`.
pub trait Integer:
    PrimInt
    + Zero
    + PlusOne
    + Bounded
    + CheckedAddVal
    + CheckedSubVal
    + WrappingSubVal
    + Step
    + Hash
    + Debug
    + Display
    + Default
{
}

impl<T> Integer for T where
    T: PrimInt
        + Zero
        + PlusOne
        + Bounded
        + CheckedAddVal
        + CheckedSubVal
        + WrappingSubVal
        + Step
        + Hash
        + Debug
        + Display
        + Default
{
}
