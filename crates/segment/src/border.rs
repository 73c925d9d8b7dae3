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

//! Segment borders.
//!
//! A [`Border`] pairs a [`Bound`] kind with a [`Value`]. Unbound borders
//! always carry [`Value::Infinite`], whatever value they were built from.

use crate::value::Value;
use std::fmt::Display;

/// The kind of a segment border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    /// No constraint on this side; the segment extends to infinity.
    #[default]
    Unbound,
    /// The border value belongs to the segment.
    Included,
    /// The border value does not belong to the segment.
    Excluded,
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbound => write!(f, "Unbound"),
            Self::Included => write!(f, "Included"),
            Self::Excluded => write!(f, "Excluded"),
        }
    }
}

/// One side of a segment.
///
/// # Examples
///
/// ```rust
/// # use segment::border::{Border, Bound};
/// # use segment::value::Value;
/// let b = Border::new(Bound::Unbound, Value::finite(5));
/// assert!(b.is_unbound());
/// assert_eq!(*b.value(), Value::infinite());
/// assert_eq!(b.to_string(), "inf");
///
/// let b = Border::included(5);
/// assert!(b.is_bound(Bound::Included));
/// assert_eq!(b.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border<T> {
    bound: Bound,
    value: Value<T>,
}

impl<T> Border<T> {
    /// Creates a new border.
    ///
    /// An `Unbound` kind discards `value` and stores the infinite sentinel.
    #[inline]
    pub fn new(bound: Bound, value: Value<T>) -> Self {
        match bound {
            Bound::Unbound => Self::unbound(),
            _ => Self { bound, value },
        }
    }

    /// Creates an `Included` border at `value`.
    #[inline]
    pub const fn included(value: T) -> Self {
        Self {
            bound: Bound::Included,
            value: Value::Finite(value),
        }
    }

    /// Creates an `Excluded` border at `value`.
    #[inline]
    pub const fn excluded(value: T) -> Self {
        Self {
            bound: Bound::Excluded,
            value: Value::Finite(value),
        }
    }

    /// Creates an `Unbound` border.
    #[inline]
    pub const fn unbound() -> Self {
        Self {
            bound: Bound::Unbound,
            value: Value::Infinite,
        }
    }

    /// Returns the kind of this border.
    #[inline]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Returns the value of this border.
    #[inline]
    pub const fn value(&self) -> &Value<T> {
        &self.value
    }

    /// Returns `true` if this border has no constraint.
    #[inline]
    pub const fn is_unbound(&self) -> bool {
        matches!(self.bound, Bound::Unbound)
    }

    /// Returns `true` if this border admits its value.
    #[inline]
    pub const fn is_included(&self) -> bool {
        matches!(self.bound, Bound::Included)
    }

    /// Returns `true` if this border rejects its value.
    #[inline]
    pub const fn is_excluded(&self) -> bool {
        matches!(self.bound, Bound::Excluded)
    }

    /// Returns `true` if this border has the given kind.
    #[inline]
    pub fn is_bound(&self, bound: Bound) -> bool {
        self.bound == bound
    }

    /// Views this border as a standard library range bound.
    pub fn as_range_bound(&self) -> std::ops::Bound<&T> {
        match (self.bound, &self.value) {
            (Bound::Included, Value::Finite(v)) => std::ops::Bound::Included(v),
            (Bound::Excluded, Value::Finite(v)) => std::ops::Bound::Excluded(v),
            _ => std::ops::Bound::Unbounded,
        }
    }
}

impl<T> Default for Border<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> From<std::ops::Bound<T>> for Border<T> {
    fn from(bound: std::ops::Bound<T>) -> Self {
        match bound {
            std::ops::Bound::Included(v) => Self::included(v),
            std::ops::Bound::Excluded(v) => Self::excluded(v),
            std::ops::Bound::Unbounded => Self::unbound(),
        }
    }
}

impl<T> Display for Border<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unbound() {
            return write!(f, "inf");
        }
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_forces_infinite() {
        for v in [i64::MIN, -1, 0, 1, i64::MAX] {
            let b = Border::new(Bound::Unbound, Value::finite(v));
            assert!(b.is_unbound());
            assert_eq!(*b.value(), Value::infinite());
            assert_eq!(b, Border::unbound());
        }
        let b = Border::<u8>::new(Bound::Unbound, Value::infinite());
        assert_eq!(*b.value(), Value::infinite());
    }

    #[test]
    fn test_bound_kinds_keep_value() {
        let inc = Border::new(Bound::Included, Value::finite(3));
        assert_eq!(inc, Border::included(3));
        assert_eq!(*inc.value(), Value::finite(3));

        let exc = Border::new(Bound::Excluded, Value::finite(3));
        assert_eq!(exc, Border::excluded(3));
        assert_ne!(inc, exc);
    }

    #[test]
    fn test_predicates() {
        let inc = Border::included(1u32);
        assert!(inc.is_included() && !inc.is_excluded() && !inc.is_unbound());
        assert!(inc.is_bound(Bound::Included));
        assert!(!inc.is_bound(Bound::Excluded));

        let exc = Border::excluded(1u32);
        assert!(exc.is_excluded() && !exc.is_included() && !exc.is_unbound());
        assert_eq!(exc.bound(), Bound::Excluded);

        let unb = Border::<u32>::unbound();
        assert!(unb.is_unbound() && !unb.is_included() && !unb.is_excluded());
        assert!(unb.is_bound(Bound::Unbound));
    }

    #[test]
    fn test_display() {
        assert_eq!(Border::included(-7i16).to_string(), "-7");
        assert_eq!(Border::excluded(7i16).to_string(), "7");
        assert_eq!(Border::<i16>::unbound().to_string(), "inf");
        assert_eq!(Bound::Excluded.to_string(), "Excluded");
    }

    #[test]
    fn test_std_bound_conversions() {
        use std::ops::Bound as StdBound;

        assert_eq!(Border::included(2).as_range_bound(), StdBound::Included(&2));
        assert_eq!(Border::excluded(2).as_range_bound(), StdBound::Excluded(&2));
        assert_eq!(Border::<i32>::unbound().as_range_bound(), StdBound::Unbounded);

        assert_eq!(Border::from(StdBound::Included(4)), Border::included(4));
        assert_eq!(Border::from(StdBound::Excluded(4)), Border::excluded(4));
        assert_eq!(Border::<i32>::from(StdBound::Unbounded), Border::unbound());
    }

    #[test]
    fn test_default_is_unbound() {
        assert!(Border::<u8>::default().is_unbound());
        assert_eq!(Bound::default(), Bound::Unbound);
    }
}
