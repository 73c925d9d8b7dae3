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

//! The minimal two-border segment and the segment capability traits.
//!
//! Each capability is its own trait so that generic code can ask for exactly
//! what it uses: [`Bordered`] for border access, [`TryToSegment`] for border
//! kind conversion, [`IsEmptySegment`], [`IncludedSegment`], [`SizeSegment`],
//! [`SplitSegment`] and [`IterableSegment`].

use crate::{
    border::{Border, Bound},
    error::{SegmentError, SegmentTooBig},
};

/// Access to the two borders of a segment.
pub trait Bordered<T> {
    /// Returns the left border.
    fn from(&self) -> &Border<T>;
    /// Returns the right border.
    fn till(&self) -> &Border<T>;
}

/// A segment whose borders can be rewritten into other kinds.
pub trait TryToSegment<T>: Bordered<T> + Sized {
    /// Returns a segment holding the same points with the requested border
    /// kinds. Unbound borders stay unbound.
    ///
    /// # Errors
    ///
    /// Fails when a border would have to step past a domain extreme.
    fn try_to(&self, from: Bound, till: Bound) -> Result<Self, SegmentError>;
}

/// A segment that can tell whether it holds any point.
pub trait IsEmptySegment<T>: Bordered<T> {
    /// Returns `true` if the segment holds no points.
    fn is_empty(&self) -> bool;
}

/// A segment that can test point membership.
pub trait IncludedSegment<T>: Bordered<T> {
    /// Returns `true` if `point` lies inside the segment.
    fn includes(&self, point: &T) -> bool;
}

/// A segment with a countable number of points.
pub trait SizeSegment<T> {
    /// Returns the number of points.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTooBig`] when the count does not fit in `T`.
    fn size(&self) -> Result<T, SegmentTooBig>;
}

/// A segment that can be cut into consecutive chunks.
pub trait SplitSegment<T>: Bordered<T> + Sized {
    /// The lazy sequence of chunks.
    type Chunks: Iterator<Item = Self>;

    /// Splits the segment into chunks of `size` points, in ascending order.
    fn split(&self, size: T) -> Self::Chunks;
}

/// A segment whose points can be enumerated.
pub trait IterableSegment<T>: Bordered<T> {
    /// The lazy sequence of points.
    type Points: Iterator<Item = T>;

    /// Returns the points in ascending order.
    fn iter(&self) -> Self::Points;
}

/// A pair of borders over an arbitrary domain.
///
/// No relation between the borders is enforced: a `from` lying after `till`
/// describes an empty segment, not an invalid one.
///
/// # Examples
///
/// ```rust
/// # use segment::border::Border;
/// # use segment::segment::{Bordered, Segment};
/// let s = Segment::new(Border::included("a"), Border::unbound());
/// assert_eq!(*s.from(), Border::included("a"));
/// assert!(s.till().is_unbound());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment<T> {
    from: Border<T>,
    till: Border<T>,
}

impl<T> Segment<T> {
    /// Creates a new segment.
    #[inline]
    pub const fn new(from: Border<T>, till: Border<T>) -> Self {
        Self { from, till }
    }

    /// Splits the segment into its borders.
    #[inline]
    pub fn into_borders(self) -> (Border<T>, Border<T>) {
        (self.from, self.till)
    }
}

impl<T> Bordered<T> for Segment<T> {
    #[inline]
    fn from(&self) -> &Border<T> {
        &self.from
    }

    #[inline]
    fn till(&self) -> &Border<T> {
        &self.till
    }
}
