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

//! Segments over totally ordered domains.
//!
//! An [`OrderedSegment`] adds emptiness and membership tests to the plain
//! two-border pair, together with [`OrderedSegment::try_to`], which rewrites
//! borders into another kind while keeping the same set of points.
//!
//! Conversion moves a border by one step of the domain. On the left side
//! "included" means `>=`, so going from `[1;…)` to the exclusive form steps
//! down to `(0;…)`. On the right side "included" means `<=`, so `[…;2]`
//! becomes `[…;3)`. Unbound borders are never converted.

use crate::{
    border::{Border, Bound},
    error::SegmentError,
    segment::{Bordered, IncludedSegment, IsEmptySegment, Segment, TryToSegment},
    value::Step,
};
use std::fmt::Display;
use std::ops::RangeBounds;
use tracing::trace;

/// Converts a left border into the requested kind.
///
/// # Errors
///
/// Returns [`SegmentError::NoNextValue`] when an excluded border sits at the
/// domain maximum and an included one is requested, and
/// [`SegmentError::NoPrevValue`] for an included border at the domain minimum
/// when an excluded one is requested.
///
/// # Examples
///
/// ```rust
/// # use segment::border::{Border, Bound};
/// # use segment::ordered::left_border_to;
/// assert_eq!(left_border_to(&Border::included(1), Bound::Excluded), Ok(Border::excluded(0)));
/// assert_eq!(left_border_to(&Border::excluded(1), Bound::Included), Ok(Border::included(2)));
/// assert!(left_border_to(&Border::excluded(u8::MAX), Bound::Included).is_err());
/// ```
pub fn left_border_to<T>(border: &Border<T>, to: Bound) -> Result<Border<T>, SegmentError>
where
    T: Step + Clone,
{
    if border.is_unbound() || border.is_bound(to) {
        return Ok(border.clone());
    }
    match to {
        Bound::Included => Ok(Border::new(Bound::Included, border.value().next()?)),
        Bound::Excluded => Ok(Border::new(Bound::Excluded, border.value().prev()?)),
        Bound::Unbound => Ok(border.clone()),
    }
}

/// Converts a right border into the requested kind.
///
/// # Errors
///
/// Returns [`SegmentError::NoPrevValue`] when an excluded border sits at the
/// domain minimum and an included one is requested, and
/// [`SegmentError::NoNextValue`] for an included border at the domain maximum
/// when an excluded one is requested.
///
/// # Examples
///
/// ```rust
/// # use segment::border::{Border, Bound};
/// # use segment::ordered::right_border_to;
/// assert_eq!(right_border_to(&Border::included(2), Bound::Excluded), Ok(Border::excluded(3)));
/// assert_eq!(right_border_to(&Border::excluded(2), Bound::Included), Ok(Border::included(1)));
/// assert!(right_border_to(&Border::excluded(i8::MIN), Bound::Included).is_err());
/// ```
pub fn right_border_to<T>(border: &Border<T>, to: Bound) -> Result<Border<T>, SegmentError>
where
    T: Step + Clone,
{
    if border.is_unbound() || border.is_bound(to) {
        return Ok(border.clone());
    }
    match to {
        Bound::Included => Ok(Border::new(Bound::Included, border.value().prev()?)),
        Bound::Excluded => Ok(Border::new(Bound::Excluded, border.value().next()?)),
        Bound::Unbound => Ok(border.clone()),
    }
}

/// A segment over a totally ordered, steppable domain.
///
/// # Examples
///
/// ```rust
/// # use segment::border::{Border, Bound};
/// # use segment::ordered::OrderedSegment;
/// let s = OrderedSegment::new(Border::excluded(0), Border::excluded(100));
/// assert_eq!(s.to_string(), "(0;100)");
///
/// let inc = s.try_to(Bound::Included, Bound::Included).unwrap();
/// assert_eq!(inc.to_string(), "[1;99]");
/// assert!(inc.includes(&1) && !inc.includes(&100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderedSegment<T> {
    from: Border<T>,
    till: Border<T>,
}

impl<T> OrderedSegment<T> {
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

impl<T> OrderedSegment<T>
where
    T: Step + Clone,
{
    /// Rewrites both borders into the requested kinds.
    ///
    /// Unbound borders stay unbound whatever kind is requested, and a bound
    /// border asked to become `Unbound` is left as it is. The result holds the
    /// same points as `self`.
    ///
    /// # Errors
    ///
    /// Fails when a border would have to step past a domain extreme; no
    /// partially converted segment is produced.
    pub fn try_to(&self, from: Bound, till: Bound) -> Result<Self, SegmentError> {
        let from = left_border_to(&self.from, from)?;
        let till = right_border_to(&self.till, till)?;
        Ok(Self::new(from, till))
    }
}

impl<T> OrderedSegment<T>
where
    T: Step + Clone + PartialOrd,
{
    /// Returns `true` if the segment holds no points.
    ///
    /// A segment with an unbound side is never empty.
    pub fn is_empty(&self) -> bool {
        if self.from.is_unbound() || self.till.is_unbound() {
            return false;
        }
        // Only an excluded border at the extreme facing the interior fails here,
        // and such a border admits nothing.
        let inc = match self.try_to(Bound::Included, Bound::Included) {
            Ok(inc) => inc,
            Err(error) => {
                trace!(%error, "canonicalization failed, segment is empty");
                return true;
            }
        };
        match (inc.from.value().as_finite(), inc.till.value().as_finite()) {
            (Some(from), Some(till)) => from > till,
            _ => false,
        }
    }

    /// Returns `true` if `point` lies inside the segment.
    pub fn includes(&self, point: &T) -> bool {
        if self.from.is_unbound() && self.till.is_unbound() {
            return true;
        }
        let Ok(inc) = self.try_to(Bound::Included, Bound::Included) else {
            return false;
        };
        let above_from = inc.from.value().as_finite().is_none_or(|from| from <= point);
        let below_till = inc.till.value().as_finite().is_none_or(|till| point <= till);
        above_from && below_till
    }
}

impl<T> Bordered<T> for OrderedSegment<T> {
    #[inline]
    fn from(&self) -> &Border<T> {
        &self.from
    }

    #[inline]
    fn till(&self) -> &Border<T> {
        &self.till
    }
}

impl<T> TryToSegment<T> for OrderedSegment<T>
where
    T: Step + Clone,
{
    #[inline]
    fn try_to(&self, from: Bound, till: Bound) -> Result<Self, SegmentError> {
        OrderedSegment::try_to(self, from, till)
    }
}

impl<T> IsEmptySegment<T> for OrderedSegment<T>
where
    T: Step + Clone + PartialOrd,
{
    #[inline]
    fn is_empty(&self) -> bool {
        OrderedSegment::is_empty(self)
    }
}

impl<T> IncludedSegment<T> for OrderedSegment<T>
where
    T: Step + Clone + PartialOrd,
{
    #[inline]
    fn includes(&self, point: &T) -> bool {
        OrderedSegment::includes(self, point)
    }
}

impl<T> From<Segment<T>> for OrderedSegment<T> {
    fn from(segment: Segment<T>) -> Self {
        let (from, till) = segment.into_borders();
        Self::new(from, till)
    }
}

impl<T> From<OrderedSegment<T>> for Segment<T> {
    fn from(segment: OrderedSegment<T>) -> Self {
        let (from, till) = segment.into_borders();
        Segment::new(from, till)
    }
}

impl<T> RangeBounds<T> for OrderedSegment<T> {
    fn start_bound(&self) -> std::ops::Bound<&T> {
        self.from.as_range_bound()
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        self.till.as_range_bound()
    }
}

/// Writes a segment as `[1;2)`, `(inf;2]` and so on.
pub(crate) fn fmt_borders<T>(
    from: &Border<T>,
    till: &Border<T>,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result
where
    T: Display,
{
    let open = if from.is_included() { '[' } else { '(' };
    let close = if till.is_included() { ']' } else { ')' };
    write!(f, "{open}{from};{till}{close}")
}

impl<T> Display for OrderedSegment<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_borders(&self.from, &self.till, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NoNextValue, NoPrevValue};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn seg(from: Border<IntegerType>, till: Border<IntegerType>) -> OrderedSegment<IntegerType> {
        OrderedSegment::new(from, till)
    }

    fn inc(v: IntegerType) -> Border<IntegerType> {
        Border::included(v)
    }

    fn exc(v: IntegerType) -> Border<IntegerType> {
        Border::excluded(v)
    }

    fn unb() -> Border<IntegerType> {
        Border::unbound()
    }

    const KINDS: [Bound; 3] = [Bound::Unbound, Bound::Included, Bound::Excluded];

    #[test]
    fn test_display() {
        assert_eq!(seg(inc(1), inc(1)).to_string(), "[1;1]");
        assert_eq!(seg(inc(1), inc(100)).to_string(), "[1;100]");
        assert_eq!(seg(exc(1), inc(100)).to_string(), "(1;100]");
        assert_eq!(seg(exc(1), exc(100)).to_string(), "(1;100)");
        assert_eq!(seg(inc(1), exc(100)).to_string(), "[1;100)");
        assert_eq!(seg(inc(1), unb()).to_string(), "[1;inf)");
        assert_eq!(seg(unb(), exc(100)).to_string(), "(inf;100)");
        assert_eq!(seg(unb(), unb()).to_string(), "(inf;inf)");
    }

    #[test]
    fn test_try_to_conversions() {
        assert_eq!(
            seg(inc(1), inc(100)).try_to(Bound::Excluded, Bound::Included),
            Ok(seg(exc(0), inc(100)))
        );
        assert_eq!(
            seg(exc(0), exc(100)).try_to(Bound::Included, Bound::Included),
            Ok(seg(inc(1), inc(99)))
        );
        assert_eq!(
            seg(exc(0), unb()).try_to(Bound::Included, Bound::Included),
            Ok(seg(inc(1), unb()))
        );
        assert_eq!(
            seg(unb(), unb()).try_to(Bound::Included, Bound::Included),
            Ok(seg(unb(), unb()))
        );
        assert_eq!(
            seg(inc(1), inc(100)).try_to(Bound::Included, Bound::Excluded),
            Ok(seg(inc(1), exc(101)))
        );
    }

    #[test]
    fn test_try_to_unbound_target_keeps_borders() {
        assert_eq!(
            seg(inc(1), inc(2)).try_to(Bound::Unbound, Bound::Unbound),
            Ok(seg(inc(1), inc(2)))
        );
    }

    #[test]
    fn test_try_to_fails_at_extremes() {
        assert_eq!(
            seg(inc(1), inc(IntegerType::MAX)).try_to(Bound::Included, Bound::Excluded),
            Err(SegmentError::NoNextValue(NoNextValue))
        );
        assert_eq!(
            seg(inc(IntegerType::MIN), inc(2)).try_to(Bound::Excluded, Bound::Included),
            Err(SegmentError::NoPrevValue(NoPrevValue))
        );
        assert!(
            seg(inc(IntegerType::MIN), inc(IntegerType::MAX))
                .try_to(Bound::Excluded, Bound::Excluded)
                .is_err()
        );
        assert_eq!(
            seg(exc(IntegerType::MAX), unb()).try_to(Bound::Included, Bound::Included),
            Err(SegmentError::NoNextValue(NoNextValue))
        );
        assert_eq!(
            seg(unb(), exc(IntegerType::MIN)).try_to(Bound::Included, Bound::Included),
            Err(SegmentError::NoPrevValue(NoPrevValue))
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(!seg(inc(1), inc(2)).is_empty());
        assert!(!seg(inc(1), exc(2)).is_empty());
        assert!(!seg(inc(1), unb()).is_empty());
        assert!(!seg(unb(), exc(2)).is_empty());
        assert!(!seg(unb(), unb()).is_empty());
        assert!(!seg(inc(1), inc(1)).is_empty());
        assert!(seg(inc(2), inc(1)).is_empty());
        assert!(seg(exc(2), inc(1)).is_empty());
        assert!(seg(inc(2), exc(1)).is_empty());
        assert!(seg(exc(1), exc(2)).is_empty());
        assert!(seg(exc(1), exc(1)).is_empty());
        assert!(seg(exc(IntegerType::MIN), exc(IntegerType::MIN)).is_empty());
        assert!(seg(exc(IntegerType::MAX), exc(IntegerType::MAX)).is_empty());
        assert!(seg(exc(IntegerType::MAX), inc(IntegerType::MAX)).is_empty());
        assert!(!seg(exc(IntegerType::MIN), exc(IntegerType::MAX)).is_empty());
    }

    #[test]
    fn test_includes() {
        let cases: [(OrderedSegment<IntegerType>, &[(IntegerType, bool)]); 9] = [
            (seg(inc(1), inc(2)), &[(0, false), (1, true), (2, true), (3, false)]),
            (seg(exc(1), inc(2)), &[(0, false), (1, false), (2, true), (3, false)]),
            (seg(inc(1), exc(2)), &[(0, false), (1, true), (2, false), (3, false)]),
            (seg(exc(1), exc(2)), &[(0, false), (1, false), (2, false), (3, false)]),
            (
                seg(exc(1), exc(3)),
                &[(0, false), (1, false), (2, true), (3, false), (4, false)],
            ),
            (
                seg(inc(1), unb()),
                &[(0, false), (1, true), (3, true), (IntegerType::MAX, true)],
            ),
            (
                seg(unb(), inc(1)),
                &[(IntegerType::MIN, true), (0, true), (1, true), (2, false)],
            ),
            (
                seg(unb(), unb()),
                &[(IntegerType::MIN, true), (0, true), (IntegerType::MAX, true)],
            ),
            (
                seg(exc(IntegerType::MAX), inc(1)),
                &[(IntegerType::MIN, false), (0, false), (1, false), (IntegerType::MAX, false)],
            ),
        ];
        for (s, points) in cases {
            for &(point, want) in points {
                assert_eq!(s.includes(&point), want, "{s} includes {point}");
            }
        }
    }

    #[test]
    fn test_includes_agrees_with_canonical_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let a: IntegerType = rng.random_range(-20..=20);
            let b: IntegerType = rng.random_range(-20..=20);
            for from_kind in KINDS {
                for till_kind in KINDS {
                    let s = seg(
                        Border::new(from_kind, a.into()),
                        Border::new(till_kind, b.into()),
                    );
                    let inc = s.try_to(Bound::Included, Bound::Included).unwrap();
                    let lo = inc.from().value().as_finite().copied().unwrap_or(IntegerType::MIN);
                    let hi = inc.till().value().as_finite().copied().unwrap_or(IntegerType::MAX);
                    let point: IntegerType = rng.random_range(-25..=25);
                    assert_eq!(s.includes(&point), lo <= point && point <= hi, "{s} at {point}");
                    assert_eq!(s.includes(&point), s.contains(&point), "{s} at {point}");
                }
            }
        }
    }

    #[test]
    fn test_try_to_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let a: IntegerType = rng.random_range(-50..=50);
            let b: IntegerType = rng.random_range(-50..=50);
            for from_kind in KINDS {
                for till_kind in KINDS {
                    let s = seg(
                        Border::new(from_kind, a.into()),
                        Border::new(till_kind, b.into()),
                    );
                    for target_from in KINDS {
                        for target_till in KINDS {
                            let once = s.try_to(target_from, target_till).unwrap();
                            let twice = once.try_to(target_from, target_till).unwrap();
                            assert_eq!(once, twice);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_through_excluded() {
        for a in [-3, 0, 5] {
            for b in [-3, 0, 5] {
                let s = seg(inc(a), exc(b));
                let direct = s.try_to(Bound::Included, Bound::Included).unwrap();
                let round = s
                    .try_to(Bound::Excluded, Bound::Excluded)
                    .and_then(|e| e.try_to(Bound::Included, Bound::Included))
                    .unwrap();
                assert_eq!(direct, round);
            }
        }
    }

    #[test]
    fn test_float_domain() {
        let s = OrderedSegment::new(Border::included(0.0f64), Border::excluded(1.0));
        assert!(!s.is_empty());
        assert!(s.includes(&0.0));
        assert!(s.includes(&0.5));
        assert!(!s.includes(&1.0));
        assert!(OrderedSegment::new(Border::excluded(1.0f64), Border::excluded(1.0)).is_empty());
        assert!(!OrderedSegment::new(Border::excluded(f64::MAX), Border::<f64>::unbound()).is_empty());
    }

    #[test]
    fn test_char_domain() {
        let s = OrderedSegment::new(Border::excluded('a'), Border::included('c'));
        assert_eq!(
            s.try_to(Bound::Included, Bound::Included),
            Ok(OrderedSegment::new(Border::included('b'), Border::included('c')))
        );
        assert!(s.includes(&'b'));
        assert!(!s.includes(&'a'));
        assert_eq!(s.to_string(), "(a;c]");
    }

    #[test]
    fn test_segment_conversions() {
        let generic = Segment::new(inc(1), exc(5));
        let ordered: OrderedSegment<IntegerType> = generic.into();
        assert_eq!(ordered, seg(inc(1), exc(5)));
        let back: Segment<IntegerType> = ordered.into();
        assert_eq!(back, generic);
    }

    #[test]
    fn test_range_bounds() {
        use std::ops::Bound as StdBound;
        let s = seg(exc(1), unb());
        assert_eq!(s.start_bound(), StdBound::Excluded(&1));
        assert_eq!(s.end_bound(), StdBound::Unbounded);
    }
}
