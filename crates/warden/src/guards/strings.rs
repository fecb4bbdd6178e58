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

//! # String Guards
//!
//! Guards for anything that can be viewed as a `&str`: `&str`, `String`,
//! `Cow<str>`, `Box<str>` and friends.
//!
//! Containment and equality guards take a `StringComparison` that selects
//! how the strings are compared. The comparison itself is implemented
//! without allocation in `warden_core::text`. Lengths are counted in
//! Unicode scalar values (`char`s), not bytes.
//!
//! ## Submodules
//!
//! The regular expression guards in `PatternGuards` are only available with
//! the `regex` feature, which is enabled by default.

use crate::{Argument, Result, raise};
use warden_core::{
    math::range::Range,
    text::{self, StringComparison},
};

#[cfg(feature = "regex")]
use once_cell::sync::Lazy;
#[cfg(feature = "regex")]
use regex::Regex;

/// Guards for string-like values.
///
/// # Examples
///
/// ```rust
/// use warden::prelude::*;
///
/// let path = "/api/v1/users";
/// let path = arg!(path)
///     .must_start_with("/API", StringComparison::OrdinalIgnoreCase)?
///     .must_not_contain("..", StringComparison::Ordinal)?
///     .into_inner();
/// assert_eq!(path, "/api/v1/users");
/// # Ok::<(), warden::GuardError>(())
/// ```
pub trait StringGuards: Sized {
    /// Fails with `EmptyString` if the string is empty.
    fn must_not_be_empty(self) -> Result<Self>;

    /// Fails with `WhiteSpaceString` if the string is empty or whitespace-only.
    fn must_not_be_blank(self) -> Result<Self>;

    /// Fails with `Substring` unless the string contains `value`.
    fn must_contain(self, value: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` if the string contains `value`.
    fn must_not_contain(self, value: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` unless `other` contains the string.
    fn must_be_substring_of(self, other: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` if `other` contains the string.
    fn must_not_be_substring_of(self, other: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` unless the string starts with `prefix`.
    fn must_start_with(self, prefix: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` if the string starts with `prefix`.
    fn must_not_start_with(self, prefix: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` unless the string ends with `suffix`.
    fn must_end_with(self, suffix: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `Substring` if the string ends with `suffix`.
    fn must_not_end_with(self, suffix: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `ValuesNotEqual` unless the string equals `other`.
    ///
    /// ```rust
    /// use warden::prelude::*;
    ///
    /// let answer = "  Yes ";
    /// assert!(arg!(answer)
    ///     .must_equal("yes", StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace)
    ///     .is_ok());
    /// ```
    fn must_equal(self, other: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `ValuesEqual` if the string equals `other`.
    fn must_not_equal(self, other: &str, comparison: StringComparison) -> Result<Self>;

    /// Fails with `StringLength` unless the string has exactly `length` chars.
    fn must_have_length(self, length: usize) -> Result<Self>;

    /// Fails with `StringLength` unless `range` contains the char count.
    fn must_have_length_in(self, range: &Range<usize>) -> Result<Self>;

    /// Fails with `StringLength` unless the string has fewer than `length` chars.
    fn must_be_shorter_than(self, length: usize) -> Result<Self>;

    /// Fails with `StringLength` unless the string has at most `length` chars.
    fn must_be_shorter_than_or_equal_to(self, length: usize) -> Result<Self>;

    /// Fails with `StringLength` unless the string has more than `length` chars.
    fn must_be_longer_than(self, length: usize) -> Result<Self>;

    /// Fails with `StringLength` unless the string has at least `length` chars.
    fn must_be_longer_than_or_equal_to(self, length: usize) -> Result<Self>;

    /// Fails with `NotTrimmed` on leading or trailing whitespace.
    fn must_be_trimmed(self) -> Result<Self>;

    /// Fails with `NotTrimmed` on leading whitespace.
    fn must_be_trimmed_at_start(self) -> Result<Self>;

    /// Fails with `NotTrimmed` on trailing whitespace.
    fn must_be_trimmed_at_end(self) -> Result<Self>;

    /// Fails with `InvalidArgument` unless the string is a file extension
    /// such as `".txt"`.
    fn must_be_file_extension(self) -> Result<Self>;

    /// Fails with `InvalidArgument` unless the string is `"\n"` or `"\r\n"`.
    fn must_be_new_line(self) -> Result<Self>;

    /// Fails with `InvalidArgument` unless the string is non-empty and
    /// contains only letters.
    fn must_contain_only_letters(self) -> Result<Self>;

    /// Fails with `InvalidArgument` unless the string is non-empty and
    /// contains only digits.
    fn must_contain_only_digits(self) -> Result<Self>;

    /// Fails with `InvalidArgument` unless the string is non-empty and
    /// contains only letters and digits.
    fn must_contain_only_letters_or_digits(self) -> Result<Self>;
}

impl<T> Argument<'_, T>
where
    T: AsRef<str>,
{
    #[inline(always)]
    fn text(&self) -> &str {
        self.value.as_ref()
    }

    #[inline]
    fn check_substring(self, holds: bool, expectation: std::fmt::Arguments<'_>) -> Result<Self> {
        if holds {
            return Ok(self);
        }
        Err(raise::substring(self.context(), &expectation, self.text()))
    }

    #[inline]
    fn check_length(self, holds: bool, expectation: std::fmt::Arguments<'_>) -> Result<Self> {
        if holds {
            return Ok(self);
        }
        Err(raise::string_length(
            self.context(),
            &expectation,
            self.char_count(),
        ))
    }

    #[inline]
    fn check_content(self, holds: bool, expectation: &str) -> Result<Self> {
        if holds {
            return Ok(self);
        }
        Err(raise::invalid_argument(
            self.context(),
            &format_args!("{}, but it actually is {:?}", expectation, self.text()),
        ))
    }

    #[inline]
    fn char_count(&self) -> usize {
        self.text().chars().count()
    }
}

impl<T> StringGuards for Argument<'_, T>
where
    T: AsRef<str>,
{
    #[inline]
    fn must_not_be_empty(self) -> Result<Self> {
        if self.text().is_empty() {
            return Err(raise::empty_string(self.context()));
        }
        Ok(self)
    }

    #[inline]
    fn must_not_be_blank(self) -> Result<Self> {
        if text::is_blank(self.text()) {
            return Err(raise::white_space_string(self.context(), self.text()));
        }
        Ok(self)
    }

    fn must_contain(self, value: &str, comparison: StringComparison) -> Result<Self> {
        let holds = text::contains(self.text(), value, comparison);
        self.check_substring(holds, format_args!("contain {:?} ({})", value, comparison))
    }

    fn must_not_contain(self, value: &str, comparison: StringComparison) -> Result<Self> {
        let holds = !text::contains(self.text(), value, comparison);
        self.check_substring(holds, format_args!("not contain {:?} ({})", value, comparison))
    }

    fn must_be_substring_of(self, other: &str, comparison: StringComparison) -> Result<Self> {
        let holds = text::contains(other, self.text(), comparison);
        self.check_substring(
            holds,
            format_args!("be a substring of {:?} ({})", other, comparison),
        )
    }

    fn must_not_be_substring_of(self, other: &str, comparison: StringComparison) -> Result<Self> {
        let holds = !text::contains(other, self.text(), comparison);
        self.check_substring(
            holds,
            format_args!("not be a substring of {:?} ({})", other, comparison),
        )
    }

    fn must_start_with(self, prefix: &str, comparison: StringComparison) -> Result<Self> {
        let holds = text::starts_with(self.text(), prefix, comparison);
        self.check_substring(holds, format_args!("start with {:?} ({})", prefix, comparison))
    }

    fn must_not_start_with(self, prefix: &str, comparison: StringComparison) -> Result<Self> {
        let holds = !text::starts_with(self.text(), prefix, comparison);
        self.check_substring(
            holds,
            format_args!("not start with {:?} ({})", prefix, comparison),
        )
    }

    fn must_end_with(self, suffix: &str, comparison: StringComparison) -> Result<Self> {
        let holds = text::ends_with(self.text(), suffix, comparison);
        self.check_substring(holds, format_args!("end with {:?} ({})", suffix, comparison))
    }

    fn must_not_end_with(self, suffix: &str, comparison: StringComparison) -> Result<Self> {
        let holds = !text::ends_with(self.text(), suffix, comparison);
        self.check_substring(holds, format_args!("not end with {:?} ({})", suffix, comparison))
    }

    fn must_equal(self, other: &str, comparison: StringComparison) -> Result<Self> {
        if text::equals(self.text(), other, comparison) {
            return Ok(self);
        }
        Err(raise::values_not_equal(self.context(), &other, &self.text()))
    }

    fn must_not_equal(self, other: &str, comparison: StringComparison) -> Result<Self> {
        if !text::equals(self.text(), other, comparison) {
            return Ok(self);
        }
        Err(raise::values_equal(self.context(), &other))
    }

    fn must_have_length(self, length: usize) -> Result<Self> {
        let holds = self.char_count() == length;
        self.check_length(holds, format_args!("have length {}", length))
    }

    fn must_have_length_in(self, range: &Range<usize>) -> Result<Self> {
        let holds = range.contains(&self.char_count());
        self.check_length(
            holds,
            format_args!("have a length between {}", range.describe()),
        )
    }

    fn must_be_shorter_than(self, length: usize) -> Result<Self> {
        let holds = self.char_count() < length;
        self.check_length(holds, format_args!("be shorter than {} chars", length))
    }

    fn must_be_shorter_than_or_equal_to(self, length: usize) -> Result<Self> {
        let holds = self.char_count() <= length;
        self.check_length(
            holds,
            format_args!("be shorter than or equal to {} chars", length),
        )
    }

    fn must_be_longer_than(self, length: usize) -> Result<Self> {
        let holds = self.char_count() > length;
        self.check_length(holds, format_args!("be longer than {} chars", length))
    }

    fn must_be_longer_than_or_equal_to(self, length: usize) -> Result<Self> {
        let holds = self.char_count() >= length;
        self.check_length(
            holds,
            format_args!("be longer than or equal to {} chars", length),
        )
    }

    fn must_be_trimmed(self) -> Result<Self> {
        if text::is_trimmed(self.text()) {
            return Ok(self);
        }
        Err(raise::not_trimmed(self.context(), &"be trimmed", self.text()))
    }

    fn must_be_trimmed_at_start(self) -> Result<Self> {
        if text::is_trimmed_at_start(self.text()) {
            return Ok(self);
        }
        Err(raise::not_trimmed(
            self.context(),
            &"be trimmed at the start",
            self.text(),
        ))
    }

    fn must_be_trimmed_at_end(self) -> Result<Self> {
        if text::is_trimmed_at_end(self.text()) {
            return Ok(self);
        }
        Err(raise::not_trimmed(
            self.context(),
            &"be trimmed at the end",
            self.text(),
        ))
    }

    fn must_be_file_extension(self) -> Result<Self> {
        let holds = text::is_file_extension(self.text());
        self.check_content(holds, "be a file extension")
    }

    fn must_be_new_line(self) -> Result<Self> {
        let holds = text::is_new_line(self.text());
        self.check_content(holds, "be a new line")
    }

    fn must_contain_only_letters(self) -> Result<Self> {
        let holds = text::is_letters(self.text());
        self.check_content(holds, "contain only letters")
    }

    fn must_contain_only_digits(self) -> Result<Self> {
        let holds = text::is_digits(self.text());
        self.check_content(holds, "contain only digits")
    }

    fn must_contain_only_letters_or_digits(self) -> Result<Self> {
        let holds = text::is_letters_or_digits(self.text());
        self.check_content(holds, "contain only letters or digits")
    }
}

/// The default pattern used by `must_be_email_address`.
///
/// A local part of printable ASCII atoms, an `@`, and a domain of at least
/// two dot-separated labels.
#[cfg(feature = "regex")]
pub static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("the email address pattern is a valid regular expression")
});

/// Regular expression guards.
///
/// # Examples
///
/// ```rust
/// use regex::Regex;
/// use warden::prelude::*;
///
/// let sku = "AB-1234";
/// let pattern = Regex::new(r"^[A-Z]{2}-\d{4}$").unwrap();
/// assert!(arg!(sku).must_match(&pattern).is_ok());
///
/// let contact = "jane.doe@example.com";
/// assert!(arg!(contact).must_be_email_address().is_ok());
///
/// let contact = "jane.doe@";
/// let err = arg!(contact).must_be_email_address().unwrap_err();
/// assert!(matches!(err, GuardError::InvalidEmailAddress { .. }));
/// ```
#[cfg(feature = "regex")]
pub trait PatternGuards: Sized {
    /// Fails with `StringMismatch` unless `pattern` matches the string.
    fn must_match(self, pattern: &Regex) -> Result<Self>;

    /// Fails with `InvalidEmailAddress` unless the string matches
    /// `EMAIL_ADDRESS`.
    fn must_be_email_address(self) -> Result<Self>;

    /// Fails with `InvalidEmailAddress` unless `pattern` matches the string.
    fn must_be_email_address_matching(self, pattern: &Regex) -> Result<Self>;
}

#[cfg(feature = "regex")]
impl<T> PatternGuards for Argument<'_, T>
where
    T: AsRef<str>,
{
    fn must_match(self, pattern: &Regex) -> Result<Self> {
        if pattern.is_match(self.text()) {
            return Ok(self);
        }
        Err(raise::string_mismatch(
            self.context(),
            pattern.as_str(),
            self.text(),
        ))
    }

    #[inline]
    fn must_be_email_address(self) -> Result<Self> {
        self.must_be_email_address_matching(&EMAIL_ADDRESS)
    }

    fn must_be_email_address_matching(self, pattern: &Regex) -> Result<Self> {
        if pattern.is_match(self.text()) {
            return Ok(self);
        }
        Err(raise::invalid_email_address(self.context(), self.text()))
    }
}
