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

//! Guards for optional arguments.

use crate::{Argument, Result, raise, raise::Context};

impl<'a, T> Argument<'a, Option<T>> {
    /// Fails with `ArgumentNone` if the value is `None`; otherwise unwraps it.
    ///
    /// This is the counterpart of a not-null check: the returned argument
    /// wraps the inner value and keeps the name and custom message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let timeout: Option<u64> = Some(30);
    /// let timeout = arg!(timeout).must_be_some().unwrap().into_inner();
    /// assert_eq!(timeout, 30);
    ///
    /// let missing: Option<u64> = None;
    /// let err = arg!(missing).must_be_some().unwrap_err();
    /// assert_eq!(err.to_string(), "missing must not be None.");
    /// ```
    pub fn must_be_some(self) -> Result<Argument<'a, T>> {
        match self.value {
            Some(value) => Ok(Argument {
                value,
                name: self.name,
                message: self.message,
            }),
            None => Err(raise::argument_none(Context::new(
                self.name,
                self.message.as_deref(),
            ))),
        }
    }

    /// Unwraps the value, or builds the error with `factory` if it is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::arg;
    ///
    /// let token: Option<&str> = None;
    /// let err = arg!(token).must_be_some_or_else(|| "unauthenticated").unwrap_err();
    /// assert_eq!(err, "unauthenticated");
    /// ```
    pub fn must_be_some_or_else<E, F>(self, factory: F) -> std::result::Result<Argument<'a, T>, E>
    where
        F: FnOnce() -> E,
    {
        match self.value {
            Some(value) => Ok(Argument {
                value,
                name: self.name,
                message: self.message,
            }),
            None => {
                raise::custom_failure(Context::new(self.name, self.message.as_deref()));
                Err(factory())
            }
        }
    }

    /// Fails with `InvalidArgument` if the value is `Some`.
    pub fn must_be_none(self) -> Result<Self> {
        if self.value().is_some() {
            return Err(raise::invalid_argument(self.context(), &"be None"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Argument, GuardError, raise};

    #[test]
    fn test_must_be_some_unwraps() {
        let a = Argument::named(Some("x"), "name")
            .with_message("custom")
            .must_be_some()
            .unwrap();
        assert_eq!(a.name(), Some("name"));
        assert_eq!(a.message(), Some("custom"));
        assert_eq!(a.into_inner(), "x");
    }

    #[test]
    fn test_must_be_some_fails_on_none() {
        let err = Argument::<Option<i32>>::named(None, "count")
            .must_be_some()
            .unwrap_err();
        assert!(matches!(err, GuardError::ArgumentNone { .. }));
        assert_eq!(err.parameter(), Some("count"));
    }

    #[test]
    fn test_must_be_some_unnamed_message() {
        let err = Argument::<Option<i32>>::new(None).must_be_some().unwrap_err();
        assert_eq!(err.to_string(), "The value must not be None.");
    }

    #[test]
    fn test_must_be_some_or_else() {
        let ok: Result<_, &str> = Argument::new(Some(1)).must_be_some_or_else(|| "missing");
        assert_eq!(ok.unwrap().into_inner(), 1);
    }

    #[test]
    fn test_must_be_some_or_else_failure_is_logged() {
        raise::capture::install();
        let err = Argument::<Option<u8>>::named(None, "or_else_logged_param")
            .must_be_some_or_else(|| "missing")
            .unwrap_err();
        assert_eq!(err, "missing");
        let records = raise::capture::records_for("or_else_logged_param");
        assert_eq!(records.len(), 1);
        assert!(records[0].contains("category=custom"));
    }

    #[test]
    fn test_must_be_none() {
        assert!(Argument::<Option<u8>>::named(None, "x").must_be_none().is_ok());
        let err = Argument::named(Some(1), "x").must_be_none().unwrap_err();
        assert!(matches!(err, GuardError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "x must be None.");
    }
}
