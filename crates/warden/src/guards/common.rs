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

//! Equality, default-value, membership and reference-identity guards.

use crate::{Argument, Result, raise};
use std::fmt::Debug;

impl<T> Argument<'_, T> {
    /// Fails with `ArgumentDefault` if the value equals `T::default()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let id = 0_u64;
    /// let err = arg!(id).must_not_be_default().unwrap_err();
    /// assert_eq!(err.to_string(), "id must not be the default value 0.");
    /// ```
    pub fn must_not_be_default(self) -> Result<Self>
    where
        T: Default + PartialEq + Debug,
    {
        let default = T::default();
        if self.value == default {
            return Err(raise::argument_default(self.context(), &default));
        }
        Ok(self)
    }

    /// Fails with `ValuesNotEqual` unless the value equals `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let version = String::from("v2");
    /// assert!(arg!(version).must_be_equal_to("v2").is_ok());
    /// ```
    pub fn must_be_equal_to<U>(self, other: U) -> Result<Self>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        if self.value != other {
            return Err(raise::values_not_equal(self.context(), &other, &self.value));
        }
        Ok(self)
    }

    /// Fails with `ValuesEqual` if the value equals `other`.
    pub fn must_not_be_equal_to<U>(self, other: U) -> Result<Self>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        if self.value == other {
            return Err(raise::values_equal(self.context(), &other));
        }
        Ok(self)
    }

    /// Fails with `MissingItem` unless the value is one of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let level = "trace";
    /// let err = arg!(level).must_be_one_of(&["debug", "info"]).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "level must be one of [\"debug\", \"info\"], but it actually is \"trace\"."
    /// );
    /// ```
    pub fn must_be_one_of<U>(self, items: &[U]) -> Result<Self>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        if !items.iter().any(|item| self.value == *item) {
            return Err(raise::missing_item(
                self.context(),
                &format_args!("be one of {:?}, but it actually is {:?}", items, self.value),
            ));
        }
        Ok(self)
    }

    /// Fails with `ExistingItem` if the value is one of `items`.
    pub fn must_not_be_one_of<U>(self, items: &[U]) -> Result<Self>
    where
        T: PartialEq<U> + Debug,
        U: Debug,
    {
        if items.iter().any(|item| self.value == *item) {
            return Err(raise::existing_item(
                self.context(),
                &format_args!("not be one of {:?}, but it actually is {:?}", items, self.value),
            ));
        }
        Ok(self)
    }
}

impl<'v, T> Argument<'_, &'v T>
where
    T: ?Sized,
{
    /// Fails with `SameReference` unless the reference points to the same
    /// object as `other`.
    ///
    /// Identity is pointer identity; equal but distinct objects fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let a = vec![1];
    /// let b = vec![1];
    /// let current = &a;
    /// assert!(arg!(current).must_be_same_as(&a).is_ok());
    /// assert!(arg!(current).must_be_same_as(&b).is_err());
    /// ```
    pub fn must_be_same_as(self, other: &T) -> Result<Self> {
        if !std::ptr::eq(self.value, other) {
            return Err(raise::same_reference(
                self.context(),
                &"point to the same object as the expected reference",
            ));
        }
        Ok(self)
    }

    /// Fails with `SameReference` if the reference points to the same object as `other`.
    pub fn must_not_be_same_as(self, other: &T) -> Result<Self> {
        if std::ptr::eq(self.value, other) {
            return Err(raise::same_reference(
                self.context(),
                &"not point to the same object as the excluded reference",
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Argument, GuardError};

    #[test]
    fn test_must_not_be_default() {
        assert!(Argument::named(1, "n").must_not_be_default().is_ok());
        assert!(Argument::named(String::from("x"), "s").must_not_be_default().is_ok());

        let err = Argument::named(String::new(), "s").must_not_be_default().unwrap_err();
        assert!(matches!(err, GuardError::ArgumentDefault { .. }));
        assert_eq!(err.to_string(), "s must not be the default value \"\".");
    }

    #[test]
    fn test_must_be_equal_to() {
        let a = Argument::named(3, "n").must_be_equal_to(3).unwrap();
        assert_eq!(a.into_inner(), 3);

        let err = Argument::named(3, "n").must_be_equal_to(4).unwrap_err();
        assert!(matches!(err, GuardError::ValuesNotEqual { .. }));
        assert_eq!(err.to_string(), "n must be equal to 4, but it actually is 3.");
    }

    #[test]
    fn test_must_not_be_equal_to() {
        assert!(Argument::named("a", "s").must_not_be_equal_to("b").is_ok());
        let err = Argument::named("a", "s").must_not_be_equal_to("a").unwrap_err();
        assert!(matches!(err, GuardError::ValuesEqual { .. }));
        assert_eq!(err.to_string(), "s must not be equal to \"a\".");
    }

    #[test]
    fn test_membership() {
        assert!(Argument::named(2, "n").must_be_one_of(&[1, 2, 3]).is_ok());
        let err = Argument::named(5, "n").must_be_one_of(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, GuardError::MissingItem { .. }));

        assert!(Argument::named(5, "n").must_not_be_one_of(&[1, 2, 3]).is_ok());
        let err = Argument::named(2, "n").must_not_be_one_of(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, GuardError::ExistingItem { .. }));
        assert_eq!(err.to_string(), "n must not be one of [1, 2, 3], but it actually is 2.");
    }

    #[test]
    fn test_membership_empty_items() {
        assert!(Argument::named(1, "n").must_be_one_of::<i32>(&[]).is_err());
        assert!(Argument::named(1, "n").must_not_be_one_of::<i32>(&[]).is_ok());
    }

    #[test]
    fn test_reference_identity() {
        let a = String::from("x");
        let b = String::from("x");
        assert!(Argument::named(&a, "r").must_be_same_as(&a).is_ok());
        assert!(Argument::named(&a, "r").must_not_be_same_as(&b).is_ok());

        let err = Argument::named(&a, "r").must_not_be_same_as(&a).unwrap_err();
        assert!(matches!(err, GuardError::SameReference { .. }));

        let s: &str = "shared";
        assert!(Argument::named(s, "r").must_be_same_as(s).is_ok());
    }
}
