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

//! The `Argument` wrapper that all guards are defined on.
//!
//! An `Argument` couples a value with the name of the parameter it was
//! passed as and an optional custom error message. Every guard consumes the
//! argument and hands it back on success, so checks chain with `?`:
//!
//! ```rust
//! use warden::prelude::*;
//!
//! fn connect(host: &str, port: u16) -> Result<String> {
//!     let host = arg!(host).must_not_be_blank()?.must_be_trimmed()?.into_inner();
//!     let port = arg!(port)
//!         .must_be_in(&Range::inclusive_between(1, 65535))?
//!         .into_inner();
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert_eq!(connect("localhost", 8080).unwrap(), "localhost:8080");
//! assert!(connect(" ", 8080).is_err());
//! assert!(connect("localhost", 0).is_err());
//! ```

use crate::raise::{self, Context};
use std::borrow::Cow;

/// A value under validation together with its parameter name.
///
/// # Examples
///
/// ```rust
/// use warden::prelude::*;
///
/// let arg = Argument::named(5, "retries").must_be_less_than(10).unwrap();
/// assert_eq!(arg.name(), Some("retries"));
/// assert_eq!(arg.into_inner(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an argument is validated by calling a guard and unwrapped with `into_inner`"]
pub struct Argument<'a, T> {
    pub(crate) value: T,
    pub(crate) name: Option<&'a str>,
    pub(crate) message: Option<Cow<'a, str>>,
}

impl<'a, T> Argument<'a, T> {
    /// Wraps an unnamed value. Messages refer to it as `"The value"`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            message: None,
        }
    }

    /// Wraps a value passed as the parameter `name`.
    #[inline]
    pub const fn named(value: T, name: &'a str) -> Self {
        Self {
            value,
            name: Some(name),
            message: None,
        }
    }

    /// Replaces the generated message of every subsequent failing guard.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::prelude::*;
    ///
    /// let user = "";
    /// let err = arg!(user)
    ///     .with_message("Please enter a user name.")
    ///     .must_not_be_empty()
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "Please enter a user name.");
    /// assert_eq!(err.parameter(), Some("user"));
    /// ```
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the parameter name, if any.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Returns the custom message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the wrapped value, keeping the name and custom message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::prelude::*;
    ///
    /// let input = "  42 ";
    /// let trimmed = arg!(input).map(str::trim).must_be_trimmed().unwrap();
    /// assert_eq!(trimmed.into_inner(), "42");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Argument<'a, U>
    where
        F: FnOnce(T) -> U,
    {
        Argument {
            value: f(self.value),
            name: self.name,
            message: self.message,
        }
    }

    /// Checks `predicate` and builds the error with a caller-supplied factory.
    ///
    /// This is the escape hatch for callers that report violations with their
    /// own error type instead of `GuardError`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum ConfigError { OddWorkers(u32) }
    ///
    /// let workers = 3_u32;
    /// let err = arg!(workers)
    ///     .ensure(|w| w % 2 == 0, |w| ConfigError::OddWorkers(*w))
    ///     .unwrap_err();
    /// assert_eq!(err, ConfigError::OddWorkers(3));
    /// ```
    #[inline]
    pub fn ensure<E, P, F>(self, predicate: P, factory: F) -> Result<Self, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        if predicate(&self.value) {
            Ok(self)
        } else {
            raise::custom_failure(self.context());
            Err(factory(&self.value))
        }
    }

    /// Returns the error context of this argument.
    #[inline]
    pub fn context(&self) -> Context<'_> {
        Context::new(self.name, self.message.as_deref())
    }

    /// Fails with `InvalidArgument` unless `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let batch = 48;
    /// assert!(arg!(batch).must_satisfy(|b| b % 16 == 0).is_ok());
    /// assert!(arg!(batch).must_satisfy(|b| b % 32 == 0).is_err());
    /// ```
    #[inline]
    pub fn must_satisfy<P>(self, predicate: P) -> crate::Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.value) {
            Ok(self)
        } else {
            Err(raise::invalid_argument(
                self.context(),
                &"satisfy the required condition",
            ))
        }
    }

    /// Fails with `InvalidArgument` if `predicate` holds.
    #[inline]
    pub fn must_not_satisfy<P>(self, predicate: P) -> crate::Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&self.value) {
            Err(raise::invalid_argument(
                self.context(),
                &"not satisfy the excluded condition",
            ))
        } else {
            Ok(self)
        }
    }
}

impl<T> AsRef<T> for Argument<'_, T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Wraps an expression in an `Argument` named after its source text.
///
/// `arg!(port)` is shorthand for `Argument::named(port, "port")`. A second
/// argument overrides the name.
///
/// # Examples
///
/// ```rust
/// use warden::prelude::*;
///
/// struct Config { timeout: u64 }
/// let config = Config { timeout: 0 };
///
/// let err = arg!(config.timeout).must_be_greater_than(0).unwrap_err();
/// assert_eq!(err.parameter(), Some("config.timeout"));
///
/// let err = arg!(config.timeout, "timeout").must_be_greater_than(0).unwrap_err();
/// assert_eq!(err.parameter(), Some("timeout"));
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr) => {
        $crate::Argument::named($value, stringify!($value))
    };
    ($value:expr, $name:expr) => {
        $crate::Argument::named($value, $name)
    };
}
