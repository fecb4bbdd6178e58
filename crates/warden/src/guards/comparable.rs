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

//! Ordering, range, floating-point and index guards.

use crate::{Argument, Result, raise};
use num_traits::Float;
use std::fmt::Display;
use warden_core::math::range::Range;

/// Guards for values with a partial order.
///
/// All failures are `GuardError::OutOfRange`.
///
/// # Examples
///
/// ```rust
/// use warden::prelude::*;
///
/// let percent = 120;
/// let err = arg!(percent)
///     .must_be_in(&Range::inclusive_between(0, 100))
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "percent must be between 0 (inclusive) and 100 (inclusive), but it actually is 120."
/// );
/// ```
pub trait ComparableGuards<T>: Sized {
    /// Fails unless the value is strictly less than `bound`.
    fn must_be_less_than(self, bound: T) -> Result<Self>;

    /// Fails unless the value is less than or equal to `bound`.
    fn must_be_less_than_or_equal_to(self, bound: T) -> Result<Self>;

    /// Fails unless the value is strictly greater than `bound`.
    fn must_be_greater_than(self, bound: T) -> Result<Self>;

    /// Fails unless the value is greater than or equal to `bound`.
    fn must_be_greater_than_or_equal_to(self, bound: T) -> Result<Self>;

    /// Fails unless `range` contains the value.
    fn must_be_in(self, range: &Range<T>) -> Result<Self>;

    /// Fails if `range` contains the value.
    fn must_not_be_in(self, range: &Range<T>) -> Result<Self>;
}

impl<T> ComparableGuards<T> for Argument<'_, T>
where
    T: PartialOrd + Display,
{
    #[inline]
    fn must_be_less_than(self, bound: T) -> Result<Self> {
        if self.value < bound {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("less than {}", bound),
            &self.value,
        ))
    }

    #[inline]
    fn must_be_less_than_or_equal_to(self, bound: T) -> Result<Self> {
        if self.value <= bound {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("less than or equal to {}", bound),
            &self.value,
        ))
    }

    #[inline]
    fn must_be_greater_than(self, bound: T) -> Result<Self> {
        if self.value > bound {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("greater than {}", bound),
            &self.value,
        ))
    }

    #[inline]
    fn must_be_greater_than_or_equal_to(self, bound: T) -> Result<Self> {
        if self.value >= bound {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("greater than or equal to {}", bound),
            &self.value,
        ))
    }

    #[inline]
    fn must_be_in(self, range: &Range<T>) -> Result<Self> {
        if range.contains(&self.value) {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("between {}", range.describe()),
            &self.value,
        ))
    }

    #[inline]
    fn must_not_be_in(self, range: &Range<T>) -> Result<Self> {
        if !range.contains(&self.value) {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("outside the range between {}", range.describe()),
            &self.value,
        ))
    }
}

/// Guards for floating-point values.
///
/// Approximate equality holds when `|value - other| < tolerance`. A `NaN`
/// on either side is never approximately equal to anything.
pub trait FloatGuards<F>: Sized {
    /// Fails unless the value is within `tolerance` of `other`.
    fn must_be_approximately(self, other: F, tolerance: F) -> Result<Self>;

    /// Fails if the value is within `tolerance` of `other`.
    fn must_not_be_approximately(self, other: F, tolerance: F) -> Result<Self>;

    /// Fails if the value is infinite or `NaN`.
    fn must_be_finite(self) -> Result<Self>;

    /// Fails if the value is `NaN`.
    fn must_not_be_nan(self) -> Result<Self>;
}

#[inline(always)]
fn is_approximately<F: Float>(value: F, other: F, tolerance: F) -> bool {
    (value - other).abs() < tolerance
}

impl<F> FloatGuards<F> for Argument<'_, F>
where
    F: Float + Display,
{
    fn must_be_approximately(self, other: F, tolerance: F) -> Result<Self> {
        if is_approximately(self.value, other, tolerance) {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("approximately {} (tolerance {})", other, tolerance),
            &self.value,
        ))
    }

    fn must_not_be_approximately(self, other: F, tolerance: F) -> Result<Self> {
        if !is_approximately(self.value, other, tolerance) {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("not approximately {} (tolerance {})", other, tolerance),
            &self.value,
        ))
    }

    fn must_be_finite(self) -> Result<Self> {
        if self.value.is_finite() {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &"a finite number",
            &self.value,
        ))
    }

    fn must_not_be_nan(self) -> Result<Self> {
        if !self.value.is_nan() {
            return Ok(self);
        }
        Err(raise::out_of_range(self.context(), &"a number", &self.value))
    }
}

impl Argument<'_, usize> {
    /// Fails with `OutOfRange` unless the value is a valid index into a
    /// collection of length `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let items = ["a", "b", "c"];
    /// let index = 3_usize;
    /// let err = arg!(index).must_be_valid_index_for(items.len()).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "index must be a valid index between 0 (inclusive) and 3 (exclusive), but it actually is 3."
    /// );
    /// ```
    #[inline]
    pub fn must_be_valid_index_for(self, len: usize) -> Result<Self> {
        let indices = Range::for_len(len);
        if indices.contains(&self.value) {
            return Ok(self);
        }
        Err(raise::out_of_range(
            self.context(),
            &format_args!("a valid index between {}", indices.describe()),
            &self.value,
        ))
    }
}
