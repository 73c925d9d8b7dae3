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

//! # Segment
//!
//! Interval algebra over ordered domains. A segment is a pair of borders,
//! each either unbound or bound to a value that is included or excluded.
//!
//! ## Modules
//!
//! - `value`: Domain values with an `Infinite` sentinel and the `Step`
//!   trait for successor/predecessor navigation.
//! - `border`: Border kinds (`Unbound`, `Included`, `Excluded`) and the
//!   `Border<T>` type pairing a kind with a value.
//! - `segment`: The generic `Segment<T>`, the `Bordered` accessor trait and
//!   one trait per segment capability (`TryToSegment`, `SplitSegment`, ...).
//! - `ordered`: `OrderedSegment<T>` with border kind conversion, emptiness,
//!   membership and the `[a;b)` text form.
//! - `integer`: `IntegerSegment<T>` over the primitive integers with
//!   overflow-aware size, lazy splitting into chunks and lazy iteration.
//! - `num`: Associated constants and by-value checked arithmetic used by the
//!   integer operations.
//! - `error`: Error types for failed border conversions and oversized
//!   segments.
//!
//! ## Example
//!
//! ```rust
//! use segment::border::Border;
//! use segment::integer::IntegerSegment;
//!
//! let s = IntegerSegment::new(Border::included(1), Border::excluded(10));
//! assert_eq!(s.iter().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
//!
//! let chunks: Vec<String> = s.split(2).map(|c| c.to_string()).collect();
//! assert_eq!(chunks, ["[1;3)", "[3;5)", "[5;7)", "[7;9)", "[9;9]"]);
//! ```

pub mod border;
pub mod error;
pub mod integer;
pub mod num;
pub mod ordered;
pub mod segment;
pub mod value;
