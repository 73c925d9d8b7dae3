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

//! Domain values and the infinite sentinel.
//!
//! A [`Value`] is either a finite element of the domain or the unsigned
//! [`Value::Infinite`] sentinel carried by unbound borders. Finite values
//! step to their neighbours through the [`Step`] capability of the domain.
//! Stepping fails at the domain extremes instead of wrapping, and always
//! fails for the sentinel.

use crate::error::{NoNextValue, NoPrevValue};
use std::fmt::Display;

/// Successor and predecessor of a domain element.
///
/// Both return `None` at the corresponding extreme of the domain. Wherever
/// both are defined they are mutual inverses: `x.successor()?.predecessor() == Some(x)`.
pub trait Step: Sized {
    /// Returns the smallest element greater than `self`.
    fn successor(&self) -> Option<Self>;
    /// Returns the largest element smaller than `self`.
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_step_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_step_for_integer!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize
);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

impl Step for char {
    fn successor(&self) -> Option<Self> {
        let next = (*self as u32).checked_add(1)?;
        if next == SURROGATE_START {
            return char::from_u32(SURROGATE_END + 1);
        }
        char::from_u32(next)
    }

    fn predecessor(&self) -> Option<Self> {
        let prev = (*self as u32).checked_sub(1)?;
        if prev == SURROGATE_END {
            return char::from_u32(SURROGATE_START - 1);
        }
        char::from_u32(prev)
    }
}

macro_rules! impl_step_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                fn successor(&self) -> Option<Self> {
                    if !self.is_finite() {
                        return None;
                    }
                    let next = self.next_up();
                    next.is_finite().then_some(next)
                }

                fn predecessor(&self) -> Option<Self> {
                    if !self.is_finite() {
                        return None;
                    }
                    let prev = self.next_down();
                    prev.is_finite().then_some(prev)
                }
            }
        )*
    };
}

impl_step_for_float!(f32, f64);

/// A domain element or the infinite sentinel.
///
/// The sentinel has no sign: an unbound left border and an unbound right
/// border both carry the same `Infinite`.
///
/// # Examples
///
/// ```rust
/// # use segment::value::Value;
/// let v = Value::finite(41u8);
/// assert_eq!(v.next(), Ok(Value::finite(42)));
/// assert!(Value::finite(u8::MAX).next().is_err());
///
/// let inf = Value::<u8>::infinite();
/// assert_eq!(inf.to_string(), "inf");
/// assert_eq!(inf.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value<T> {
    /// An ordinary element of the domain.
    Finite(T),
    /// The sentinel carried by unbound borders.
    Infinite,
}

impl<T> Value<T> {
    /// Wraps a domain element.
    #[inline]
    pub const fn finite(value: T) -> Self {
        Self::Finite(value)
    }

    /// Returns the infinite sentinel.
    #[inline]
    pub const fn infinite() -> Self {
        Self::Infinite
    }

    /// Returns `true` for the infinite sentinel.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns `true` for an ordinary domain element.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns a reference to the wrapped element, or `None` for the sentinel.
    #[inline]
    pub const fn as_finite(&self) -> Option<&T> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Infinite => None,
        }
    }
}

impl<T> Value<T>
where
    T: Clone + Default,
{
    /// Returns the wrapped element.
    ///
    /// The sentinel reports the default of the domain (zero for integers);
    /// that value carries no meaning.
    #[inline]
    pub fn value(&self) -> T {
        match self {
            Self::Finite(v) => v.clone(),
            Self::Infinite => T::default(),
        }
    }
}

impl<T> Value<T>
where
    T: Step,
{
    /// Returns the successor of this value.
    ///
    /// # Errors
    ///
    /// Returns [`NoNextValue`] at the domain maximum and for the sentinel.
    pub fn next(&self) -> Result<Self, NoNextValue> {
        match self {
            Self::Finite(v) => v.successor().map(Self::Finite).ok_or(NoNextValue),
            Self::Infinite => Err(NoNextValue),
        }
    }

    /// Returns the predecessor of this value.
    ///
    /// # Errors
    ///
    /// Returns [`NoPrevValue`] at the domain minimum and for the sentinel.
    pub fn prev(&self) -> Result<Self, NoPrevValue> {
        match self {
            Self::Finite(v) => v.predecessor().map(Self::Finite).ok_or(NoPrevValue),
            Self::Infinite => Err(NoPrevValue),
        }
    }
}

impl<T> From<T> for Value<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Finite(value)
    }
}

impl<T> Display for Value<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Infinite => write!(f, "inf"),
        }
    }
}
