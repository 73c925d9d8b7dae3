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

//! Error types surfaced by values and segments.
//!
//! Stepping past a domain extreme yields [`NoNextValue`] or [`NoPrevValue`];
//! a point count that does not fit the domain type yields [`SegmentTooBig`].
//! Border conversions may fail with either stepping error, so they report the
//! umbrella [`SegmentError`].

/// The successor of a value does not exist (domain maximum or infinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoNextValue;

impl std::fmt::Display for NoNextValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "has no next value")
    }
}

impl std::error::Error for NoNextValue {}

/// The predecessor of a value does not exist (domain minimum or infinity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoPrevValue;

impl std::fmt::Display for NoPrevValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "has no prev value")
    }
}

impl std::error::Error for NoPrevValue {}

/// The number of points in a segment exceeds the largest value of its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentTooBig;

impl std::fmt::Display for SegmentTooBig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "segment is too big")
    }
}

impl std::error::Error for SegmentTooBig {}

/// The error type for segment operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentError {
    /// A border could not be moved up because its value has no successor.
    NoNextValue(NoNextValue),
    /// A border could not be moved down because its value has no predecessor.
    NoPrevValue(NoPrevValue),
    /// The size of the segment is not representable in its domain type.
    TooBig(SegmentTooBig),
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoNextValue(e) => write!(f, "Border conversion failed: {e}"),
            Self::NoPrevValue(e) => write!(f, "Border conversion failed: {e}"),
            Self::TooBig(e) => write!(f, "Size computation failed: {e}"),
        }
    }
}

impl std::error::Error for SegmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoNextValue(e) => Some(e),
            Self::NoPrevValue(e) => Some(e),
            Self::TooBig(e) => Some(e),
        }
    }
}

impl From<NoNextValue> for SegmentError {
    fn from(e: NoNextValue) -> Self {
        Self::NoNextValue(e)
    }
}

impl From<NoPrevValue> for SegmentError {
    fn from(e: NoPrevValue) -> Self {
        Self::NoPrevValue(e)
    }
}

impl From<SegmentTooBig> for SegmentError {
    fn from(e: SegmentTooBig) -> Self {
        Self::TooBig(e)
    }
}
