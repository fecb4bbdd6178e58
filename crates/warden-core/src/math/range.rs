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

use crate::hash::MultiplyAddHasher;
use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Bound, RangeBounds, RangeInclusive},
};

/// A range `from .. to` whose bounds are each either inclusive or exclusive.
///
/// This struct describes the admissible values of a check, e.g. `[1, 65535]` for
/// a port number or `[0, len)` for an index. Unlike the standard library range
/// types, both bounds can independently include or exclude their value, and the
/// type works with any `PartialOrd` value, including floating point numbers.
///
/// # Invariants
/// `from` must always be less than or equal to `to`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::math::range::Range;
///
/// let percent = Range::from_inclusive(0.0).to_inclusive(100.0);
/// assert!(percent.contains(&0.0));
/// assert!(percent.contains(&100.0));
/// assert!(!percent.contains(&100.5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "UncheckedRange<T>",
        bound(deserialize = "T: serde::Deserialize<'de> + PartialOrd")
    )
)]
pub struct Range<T> {
    from: T,
    to: T,
    from_inclusive: bool,
    to_inclusive: bool,
}

/// Wire form of a `Range`; validated through `Range::try_new` on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedRange<T> {
    from: T,
    to: T,
    from_inclusive: bool,
    to_inclusive: bool,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<UncheckedRange<T>> for Range<T>
where
    T: PartialOrd,
{
    type Error = &'static str;

    fn try_from(raw: UncheckedRange<T>) -> Result<Self, Self::Error> {
        Self::try_new(raw.from, raw.to, raw.from_inclusive, raw.to_inclusive)
            .ok_or("Invalid range: from must be less than or equal to to")
    }
}

/// The lower half of a `Range` under construction.
///
/// Returned by `Range::from_inclusive` and `Range::from_exclusive`; call one of
/// the `to_*` methods to finish the range.
///
/// # Examples
///
/// ```rust
/// # use warden_core::math::range::Range;
///
/// let r = Range::from_exclusive(0).to_exclusive(10);
/// assert!(!r.contains(&0));
/// assert!(r.contains(&9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a range start does nothing until completed with `to_inclusive` or `to_exclusive`"]
pub struct RangeStart<T> {
    from: T,
    from_inclusive: bool,
}

impl<T> RangeStart<T>
where
    T: PartialOrd,
{
    /// Completes the range with an inclusive upper bound.
    ///
    /// # Panics
    ///
    /// Panics if `to` is less than the lower bound.
    #[inline]
    pub fn to_inclusive(self, to: T) -> Range<T> {
        Range::new(self.from, to, self.from_inclusive, true)
    }

    /// Completes the range with an exclusive upper bound.
    ///
    /// # Panics
    ///
    /// Panics if `to` is less than the lower bound.
    #[inline]
    pub fn to_exclusive(self, to: T) -> Range<T> {
        Range::new(self.from, to, self.from_inclusive, false)
    }
}

/// The textual form of a range used in guard messages.
///
/// Renders as `"<from> (inclusive|exclusive) and <to> (inclusive|exclusive)"`.
/// Created by `Range::describe`.
pub struct RangeDescription<'a, T> {
    range: &'a Range<T>,
}

impl<T> Display for RangeDescription<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) and {} ({})",
            self.range.from,
            inclusivity(self.range.from_inclusive),
            self.range.to,
            inclusivity(self.range.to_inclusive)
        )
    }
}

#[inline(always)]
fn inclusivity(inclusive: bool) -> &'static str {
    if inclusive { "inclusive" } else { "exclusive" }
}

impl<T> Range<T>
where
    T: PartialOrd,
{
    /// Creates a new `Range`.
    ///
    /// # Panics
    ///
    /// Panics if `to < from` or if the bounds are not comparable (e.g. `NaN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// let r = Range::new(1, 5, true, false);
    /// assert!(r.contains(&1));
    /// assert!(!r.contains(&5));
    /// ```
    #[inline]
    pub fn new(from: T, to: T, from_inclusive: bool, to_inclusive: bool) -> Self {
        assert!(
            from <= to,
            "Invalid range: from must be less than or equal to to"
        );
        Self {
            from,
            to,
            from_inclusive,
            to_inclusive,
        }
    }

    /// Creates a new `Range` if the bounds are valid.
    ///
    /// Returns `None` if `to < from` or if the bounds are not comparable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// assert!(Range::try_new(0, 10, true, true).is_some());
    /// assert!(Range::try_new(10, 0, true, true).is_none());
    /// assert!(Range::try_new(0.0, f64::NAN, true, true).is_none());
    /// ```
    #[inline]
    pub fn try_new(from: T, to: T, from_inclusive: bool, to_inclusive: bool) -> Option<Self> {
        if from <= to {
            Some(Self {
                from,
                to,
                from_inclusive,
                to_inclusive,
            })
        } else {
            None
        }
    }

    /// Starts a range whose lower bound is part of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// let r = Range::from_inclusive(1).to_inclusive(3);
    /// assert_eq!(r.to_string(), "[1, 3]");
    /// ```
    #[inline]
    pub fn from_inclusive(from: T) -> RangeStart<T> {
        RangeStart {
            from,
            from_inclusive: true,
        }
    }

    /// Starts a range whose lower bound is not part of the range.
    #[inline]
    pub fn from_exclusive(from: T) -> RangeStart<T> {
        RangeStart {
            from,
            from_inclusive: false,
        }
    }

    /// Creates the range `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `to < from`.
    #[inline]
    pub fn inclusive_between(from: T, to: T) -> Self {
        Self::new(from, to, true, true)
    }

    /// Creates the range `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `to < from`.
    #[inline]
    pub fn exclusive_between(from: T, to: T) -> Self {
        Self::new(from, to, false, false)
    }

    /// Returns `true` if `value` lies within the range, honoring the
    /// inclusivity of both bounds.
    ///
    /// Values that are not comparable with the bounds (e.g. `NaN`) are never contained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// let r = Range::from_exclusive(0).to_inclusive(10);
    /// assert!(!r.contains(&0));
    /// assert!(r.contains(&1));
    /// assert!(r.contains(&10));
    /// assert!(!r.contains(&11));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        let above_lower = if self.from_inclusive {
            value >= &self.from
        } else {
            value > &self.from
        };
        let below_upper = if self.to_inclusive {
            value <= &self.to
        } else {
            value < &self.to
        };
        above_lower && below_upper
    }

    /// Returns `true` if no value can satisfy the range.
    ///
    /// This is only the case when both bounds are equal and at least one of
    /// them is exclusive. Ranges over discrete types such as `(0, 1)` are not
    /// considered empty, since their emptiness depends on the type's density.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// assert!(Range::from_inclusive(5).to_exclusive(5).is_empty());
    /// assert!(!Range::inclusive_between(5, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to && !(self.from_inclusive && self.to_inclusive)
    }
}

impl<T> Range<T> {
    /// Returns the lower bound of the range.
    #[inline]
    pub const fn start(&self) -> &T {
        &self.from
    }

    /// Returns the upper bound of the range.
    #[inline]
    pub const fn end(&self) -> &T {
        &self.to
    }

    /// Returns `true` if the lower bound is part of the range.
    #[inline]
    pub const fn is_from_inclusive(&self) -> bool {
        self.from_inclusive
    }

    /// Returns `true` if the upper bound is part of the range.
    #[inline]
    pub const fn is_to_inclusive(&self) -> bool {
        self.to_inclusive
    }

    /// Returns a displayable description of the range, used in guard messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// let r = Range::from_inclusive(0).to_exclusive(10);
    /// assert_eq!(r.describe().to_string(), "0 (inclusive) and 10 (exclusive)");
    /// ```
    #[inline]
    pub fn describe(&self) -> RangeDescription<'_, T> {
        RangeDescription { range: self }
    }
}

impl Range<usize> {
    /// Creates the range of valid indices `[0, len)` for a collection of length `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::math::range::Range;
    ///
    /// let items = [10, 20, 30];
    /// let indices = Range::for_len(items.len());
    /// assert!(indices.contains(&2));
    /// assert!(!indices.contains(&3));
    /// ```
    #[inline]
    pub fn for_len(len: usize) -> Self {
        Self {
            from: 0,
            to: len,
            from_inclusive: true,
            to_inclusive: false,
        }
    }
}

impl<T> Range<T>
where
    T: Hash,
{
    /// Returns the multiply-add hash code of the range.
    ///
    /// The hash folds the bounds together with their inclusivity flags, so
    /// `[0, 10)` and `[0, 10]` hash differently.
    #[inline]
    pub fn hash_code(&self) -> i32 {
        MultiplyAddHasher::new()
            .combine(&self.from)
            .combine(&self.from_inclusive)
            .combine(&self.to)
            .combine(&self.to_inclusive)
            .finish()
    }
}

impl<T> Hash for Range<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<T> Debug for Range<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("from_inclusive", &self.from_inclusive)
            .field("to_inclusive", &self.to_inclusive)
            .finish()
    }
}

impl<T> Display for Range<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.from_inclusive { '[' } else { '(' };
        let close = if self.to_inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.from, self.to, close)
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        if self.from_inclusive {
            Bound::Included(&self.from)
        } else {
            Bound::Excluded(&self.from)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.to_inclusive {
            Bound::Included(&self.to)
        } else {
            Bound::Excluded(&self.to)
        }
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: PartialOrd,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end, true, false)
    }
}

impl<T> From<RangeInclusive<T>> for Range<T>
where
    T: PartialOrd,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (from, to) = range.into_inner();
        Self::new(from, to, true, true)
    }
}
