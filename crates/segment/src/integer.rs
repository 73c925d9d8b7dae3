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

//! Segments over fixed-width integer domains.
//!
//! [`IntegerSegment`] specializes [`OrderedSegment`] for the primitive
//! integers and adds the counting operations: [`size`](IntegerSegment::size),
//! [`split`](IntegerSegment::split) and [`iter`](IntegerSegment::iter).
//! All three first bring the segment into its canonical form `[start; finish]`,
//! where an unbound left side becomes `T::MIN` and an unbound right side
//! becomes `T::MAX`. A segment that cannot be canonicalized (an excluded
//! border sitting on the extreme that faces the interior, e.g. `(MAX; …`)
//! holds no points, so these operations report zero or yield nothing.
//!
//! The arithmetic never leaves the domain type, so spans close to the full
//! width of `T` are handled with checked and wrapping operations instead of
//! a wider integer.

use crate::{
    border::{Border, Bound},
    error::{SegmentError, SegmentTooBig},
    num::Integer,
    ordered::{OrderedSegment, fmt_borders},
    segment::{
        Bordered, IncludedSegment, IsEmptySegment, IterableSegment, Segment, SizeSegment,
        SplitSegment, TryToSegment,
    },
};
use std::{
    fmt::Display,
    iter::FusedIterator,
    ops::{Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};
use tracing::{debug, trace};

/// A segment over a primitive integer domain.
///
/// # Examples
///
/// ```rust
/// # use segment::border::Border;
/// # use segment::integer::IntegerSegment;
/// let s = IntegerSegment::new(Border::included(1), Border::excluded(10));
/// assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// assert_eq!(s.size(), Ok(9));
///
/// let chunks: Vec<String> = s.split(2).map(|c| c.to_string()).collect();
/// assert_eq!(chunks, ["[1;3)", "[3;5)", "[5;7)", "[7;9)", "[9;9]"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegerSegment<T> {
    inner: OrderedSegment<T>,
}

impl<T> IntegerSegment<T> {
    /// Creates a new segment.
    #[inline]
    pub const fn new(from: Border<T>, till: Border<T>) -> Self {
        Self {
            inner: OrderedSegment::new(from, till),
        }
    }

    /// Returns the segment as an [`OrderedSegment`].
    #[inline]
    pub const fn as_ordered(&self) -> &OrderedSegment<T> {
        &self.inner
    }

    /// Splits the segment into its borders.
    #[inline]
    pub fn into_borders(self) -> (Border<T>, Border<T>) {
        self.inner.into_borders()
    }
}

impl<T> IntegerSegment<T>
where
    T: Integer,
{
    /// Rewrites both borders into the requested kinds.
    ///
    /// See [`OrderedSegment::try_to`].
    ///
    /// # Errors
    ///
    /// [`SegmentError::NoNextValue`] when a border would have to move above
    /// `T::MAX`, [`SegmentError::NoPrevValue`] when it would have to move
    /// below `T::MIN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment::border::{Border, Bound};
    /// # use segment::integer::IntegerSegment;
    /// let s = IntegerSegment::new(Border::excluded(1i8), Border::included(2));
    /// assert_eq!(
    ///     s.try_to(Bound::Included, Bound::Excluded),
    ///     Ok(IntegerSegment::new(Border::included(2), Border::excluded(3)))
    /// );
    /// assert!(IntegerSegment::new(Border::included(1i8), Border::included(i8::MAX))
    ///     .try_to(Bound::Included, Bound::Excluded)
    ///     .is_err());
    /// ```
    pub fn try_to(&self, from: Bound, till: Bound) -> Result<Self, SegmentError> {
        self.inner.try_to(from, till).map(|inner| Self { inner })
    }

    /// Returns the canonical form `[start; finish]` with unbound sides
    /// replaced by `T::MIN` and `T::MAX`.
    ///
    /// # Errors
    ///
    /// Fails like [`try_to`](Self::try_to) with both targets `Included`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment::border::Border;
    /// # use segment::integer::IntegerSegment;
    /// let s = IntegerSegment::new(Border::unbound(), Border::excluded(5u8));
    /// assert_eq!(
    ///     s.canonicalize(),
    ///     Ok(IntegerSegment::new(Border::included(0), Border::included(4)))
    /// );
    /// ```
    pub fn canonicalize(&self) -> Result<Self, SegmentError> {
        let (start, finish) = self.canonical_bounds()?;
        Ok(Self::new(Border::included(start), Border::included(finish)))
    }

    fn canonical_bounds(&self) -> Result<(T, T), SegmentError> {
        let inc = self.inner.try_to(Bound::Included, Bound::Included)?;
        // After the conversion every bound side is Included; only unbound
        // sides still carry the sentinel.
        let start = inc.from().value().as_finite().copied().unwrap_or(T::MIN);
        let finish = inc.till().value().as_finite().copied().unwrap_or(T::MAX);
        Ok((start, finish))
    }

    /// Returns the number of integers in the segment.
    ///
    /// Empty segments, including ones that cannot be canonicalized, have
    /// size zero.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTooBig`] when the count is larger than `T::MAX`,
    /// e.g. for `[0; 255]` over `u8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment::border::Border;
    /// # use segment::integer::IntegerSegment;
    /// # use segment::error::SegmentTooBig;
    /// assert_eq!(IntegerSegment::new(Border::excluded(2), Border::included(4)).size(), Ok(2));
    /// assert_eq!(IntegerSegment::new(Border::included(2), Border::included(1)).size(), Ok(0));
    /// assert_eq!(
    ///     IntegerSegment::<u8>::new(Border::unbound(), Border::unbound()).size(),
    ///     Err(SegmentTooBig)
    /// );
    /// ```
    pub fn size(&self) -> Result<T, SegmentTooBig> {
        let (from, till) = match self.canonical_bounds() {
            Ok(bounds) => bounds,
            Err(error) => {
                trace!(segment = %self, %error, "canonicalization failed, size is zero");
                return Ok(T::ZERO);
            }
        };
        if till < from {
            return Ok(T::ZERO);
        }
        // On signed domains the difference alone may already exceed MAX.
        till.checked_sub_val(from)
            .and_then(|span| span.checked_add_val(T::PLUS_ONE))
            .ok_or_else(|| {
                debug!(segment = %self, "point count exceeds the domain maximum");
                SegmentTooBig
            })
    }

    /// Returns `true` if the segment holds no integers.
    ///
    /// A segment with an unbound side is never empty. A segment whose size
    /// overflows is not empty either.
    pub fn is_empty(&self) -> bool {
        if self.inner.from().is_unbound() || self.inner.till().is_unbound() {
            return false;
        }
        matches!(self.size(), Ok(size) if size == T::ZERO)
    }

    /// Returns `true` if `point` lies inside the segment.
    #[inline]
    pub fn includes(&self, point: &T) -> bool {
        self.inner.includes(point)
    }

    /// Splits the segment into consecutive chunks of `size` integers.
    ///
    /// Every chunk but the last is `[a; a + size)`. The last one is
    /// `[a; finish]` and may be shorter. Together the chunks hold exactly the
    /// points of `self`, in ascending order. A non-positive `size` or an
    /// empty segment yields no chunks.
    ///
    /// Chunks are computed on demand, one per call to `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment::border::Border;
    /// # use segment::integer::IntegerSegment;
    /// let s = IntegerSegment::new(Border::included(i64::MIN), Border::included(i64::MAX));
    /// let chunks: Vec<_> = s.split(i64::MAX).collect();
    /// assert_eq!(
    ///     chunks,
    ///     vec![
    ///         IntegerSegment::new(Border::included(i64::MIN), Border::excluded(-1)),
    ///         IntegerSegment::new(Border::included(-1), Border::excluded(i64::MAX - 1)),
    ///         IntegerSegment::new(Border::included(i64::MAX - 1), Border::included(i64::MAX)),
    ///     ]
    /// );
    /// ```
    pub fn split(&self, size: T) -> Split<T> {
        if size <= T::ZERO {
            trace!(segment = %self, %size, "non-positive chunk size, nothing to split");
            return Split::empty(size);
        }
        match self.canonical_bounds() {
            Ok((start, finish)) => Split::new(start, finish, size),
            Err(error) => {
                trace!(segment = %self, %error, "canonicalization failed, nothing to split");
                Split::empty(size)
            }
        }
    }

    /// Returns an iterator over every integer in the segment, ascending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment::border::Border;
    /// # use segment::integer::IntegerSegment;
    /// let s = IntegerSegment::new(Border::excluded(u8::MAX - 3), Border::unbound());
    /// assert_eq!(s.iter().collect::<Vec<_>>(), vec![253, 254, 255]);
    ///
    /// let none = IntegerSegment::new(Border::excluded(u8::MAX), Border::included(u8::MAX));
    /// assert_eq!(none.iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        match self.canonical_bounds() {
            Ok((start, finish)) => Iter::new(start, finish),
            Err(error) => {
                trace!(segment = %self, %error, "canonicalization failed, nothing to iterate");
                Iter::empty()
            }
        }
    }
}

/// An iterator over the chunks of an [`IntegerSegment`].
///
/// Created by [`IntegerSegment::split`].
#[derive(Debug, Clone)]
pub struct Split<T> {
    size: T,
    // (next chunk start, canonical finish); `None` once exhausted.
    cursor: Option<(T, T)>,
}

impl<T> Split<T>
where
    T: Integer,
{
    #[inline]
    fn new(start: T, finish: T, size: T) -> Self {
        debug_assert!(size > T::ZERO, "called `Split::new` with a non-positive chunk size");
        Self {
            size,
            cursor: (start <= finish).then_some((start, finish)),
        }
    }

    #[inline]
    fn empty(size: T) -> Self {
        Self { size, cursor: None }
    }
}

impl<T> Iterator for Split<T>
where
    T: Integer,
{
    type Item = IntegerSegment<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (current, finish) = self.cursor?;
        // Invariant: current <= finish. The true distance always fits the
        // unsigned width, but on signed domains a distance above MAX wraps
        // into the negatives. Such a distance is larger than `size`.
        let remaining = finish.wrapping_sub_val(current);
        let width = if remaining < T::ZERO {
            self.size
        } else {
            remaining.min(self.size)
        };
        let end = current + width;
        if width < self.size {
            self.cursor = None;
            return Some(IntegerSegment::new(
                Border::included(current),
                Border::included(end),
            ));
        }
        self.cursor = Some((end, finish));
        Some(IntegerSegment::new(
            Border::included(current),
            Border::excluded(end),
        ))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for Split<T> where T: Integer {}

/// Returns `back - front` for `front <= back` as an unsigned count.
///
/// On signed domains the difference may exceed `T::MAX`. The wrapped
/// difference still holds the distance modulo `2^bits`, so it is read back
/// through the unsigned width of `T`.
fn distance<T>(front: T, back: T) -> u128
where
    T: Integer,
{
    let wrapped = back.wrapping_sub_val(front);
    match wrapped.to_u128() {
        Some(d) => d,
        None => {
            let bits = size_of::<T>() * 8;
            let mask = u128::MAX >> (128 - bits);
            wrapped.to_i128().map_or(0, |d| d as u128 & mask)
        }
    }
}

/// An iterator over the integers of an [`IntegerSegment`].
///
/// Created by [`IntegerSegment::iter`].
#[derive(Debug, Clone)]
pub struct Iter<T> {
    // (front, back), both still to be yielded; `None` once exhausted.
    cursor: Option<(T, T)>,
}

impl<T> Iter<T>
where
    T: Integer,
{
    #[inline]
    fn new(start: T, finish: T) -> Self {
        Self {
            cursor: (start <= finish).then_some((start, finish)),
        }
    }

    #[inline]
    fn empty() -> Self {
        Self { cursor: None }
    }
}

impl<T> Iterator for Iter<T>
where
    T: Integer,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.cursor?;
        // Stop on equality instead of stepping past `back`, which may be MAX.
        self.cursor = (front < back).then(|| (front + T::PLUS_ONE, back));
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((front, back)) = self.cursor else {
            return (0, Some(0));
        };
        match distance(front, back)
            .checked_add(1)
            .and_then(|len| usize::try_from(len).ok())
        {
            Some(len) => (len, Some(len)),
            // More points than `usize` can count; the lower bound still holds.
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for Iter<T>
where
    T: Integer,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.cursor?;
        self.cursor = (front < back).then(|| (front, back - T::PLUS_ONE));
        Some(back)
    }
}

impl<T> FusedIterator for Iter<T> where T: Integer {}

impl<T> IntoIterator for IntegerSegment<T>
where
    T: Integer,
{
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &IntegerSegment<T>
where
    T: Integer,
{
    type Item = T;
    type IntoIter = Iter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Bordered<T> for IntegerSegment<T> {
    #[inline]
    fn from(&self) -> &Border<T> {
        self.inner.from()
    }

    #[inline]
    fn till(&self) -> &Border<T> {
        self.inner.till()
    }
}

impl<T> TryToSegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    #[inline]
    fn try_to(&self, from: Bound, till: Bound) -> Result<Self, SegmentError> {
        IntegerSegment::try_to(self, from, till)
    }
}

impl<T> IsEmptySegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    #[inline]
    fn is_empty(&self) -> bool {
        IntegerSegment::is_empty(self)
    }
}

impl<T> IncludedSegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    #[inline]
    fn includes(&self, point: &T) -> bool {
        IntegerSegment::includes(self, point)
    }
}

impl<T> SizeSegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    #[inline]
    fn size(&self) -> Result<T, SegmentTooBig> {
        IntegerSegment::size(self)
    }
}

impl<T> SplitSegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    type Chunks = Split<T>;

    #[inline]
    fn split(&self, size: T) -> Self::Chunks {
        IntegerSegment::split(self, size)
    }
}

impl<T> IterableSegment<T> for IntegerSegment<T>
where
    T: Integer,
{
    type Points = Iter<T>;

    #[inline]
    fn iter(&self) -> Self::Points {
        IntegerSegment::iter(self)
    }
}

impl<T> RangeBounds<T> for IntegerSegment<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        self.inner.start_bound()
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        self.inner.end_bound()
    }
}

impl<T> Display for IntegerSegment<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_borders(self.inner.from(), self.inner.till(), f)
    }
}

impl<T> From<OrderedSegment<T>> for IntegerSegment<T> {
    fn from(inner: OrderedSegment<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<IntegerSegment<T>> for OrderedSegment<T> {
    fn from(segment: IntegerSegment<T>) -> Self {
        segment.inner
    }
}

impl<T> From<Segment<T>> for IntegerSegment<T> {
    fn from(segment: Segment<T>) -> Self {
        let (from, till) = segment.into_borders();
        Self::new(from, till)
    }
}

impl<T> From<Range<T>> for IntegerSegment<T> {
    fn from(range: Range<T>) -> Self {
        Self::new(Border::included(range.start), Border::excluded(range.end))
    }
}

impl<T> From<RangeInclusive<T>> for IntegerSegment<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(Border::included(start), Border::included(end))
    }
}

impl<T> From<RangeFrom<T>> for IntegerSegment<T> {
    fn from(range: RangeFrom<T>) -> Self {
        Self::new(Border::included(range.start), Border::unbound())
    }
}

impl<T> From<RangeTo<T>> for IntegerSegment<T> {
    fn from(range: RangeTo<T>) -> Self {
        Self::new(Border::unbound(), Border::excluded(range.end))
    }
}

impl<T> From<RangeToInclusive<T>> for IntegerSegment<T> {
    fn from(range: RangeToInclusive<T>) -> Self {
        Self::new(Border::unbound(), Border::included(range.end))
    }
}

impl<T> From<RangeFull> for IntegerSegment<T> {
    fn from(_: RangeFull) -> Self {
        Self::new(Border::unbound(), Border::unbound())
    }
}
