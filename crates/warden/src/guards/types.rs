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

//! Downcasting guards for dynamically typed values.

use crate::{Argument, Result, raise, raise::Context};
use std::any::{Any, type_name};

impl<'a, 'v> Argument<'a, &'v dyn Any> {
    /// Downcasts the value to `U`, failing with `TypeMismatch` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use warden::{arg, GuardError};
    ///
    /// let payload: &dyn Any = &42_u32;
    /// let n = arg!(payload).must_be_of_type::<u32>().unwrap().into_inner();
    /// assert_eq!(*n, 42);
    ///
    /// let err = arg!(payload).must_be_of_type::<String>().unwrap_err();
    /// assert!(matches!(err, GuardError::TypeMismatch { .. }));
    /// assert_eq!(err.to_string(), "payload must be of type alloc::string::String.");
    /// ```
    pub fn must_be_of_type<U: Any>(self) -> Result<Argument<'a, &'v U>> {
        match self.value.downcast_ref::<U>() {
            Some(value) => Ok(Argument {
                value,
                name: self.name,
                message: self.message,
            }),
            None => Err(raise::type_mismatch(self.context(), type_name::<U>())),
        }
    }
}

impl<'a> Argument<'a, Box<dyn Any>> {
    /// Downcasts the boxed value to `U`, failing with `TypeMismatch` otherwise.
    pub fn must_be_of_type<U: Any>(self) -> Result<Argument<'a, Box<U>>> {
        match self.value.downcast::<U>() {
            Ok(value) => Ok(Argument {
                value,
                name: self.name,
                message: self.message,
            }),
            Err(_) => Err(raise::type_mismatch(
                Context::new(self.name, self.message.as_deref()),
                type_name::<U>(),
            )),
        }
    }
}
