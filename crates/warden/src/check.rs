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

//! Free-standing checks for conditions that are not tied to a single
//! argument value.
//!
//! ```rust
//! use warden::check;
//!
//! struct Connection { open: bool }
//!
//! impl Connection {
//!     fn send(&self, payload: &[u8]) -> warden::Result<usize> {
//!         check::invalid_state(!self.open, "The connection is closed.")?;
//!         check::invalid_argument(payload.len() > 1024, "payload", "The payload exceeds 1 KiB.")?;
//!         Ok(payload.len())
//!     }
//! }
//!
//! let closed = Connection { open: false };
//! assert_eq!(closed.send(b"hi").unwrap_err().to_string(), "The connection is closed.");
//! ```

use crate::{
    Result,
    raise::{self, Context},
};

/// Fails with `InvalidState` if `condition` holds.
///
/// `message` is used verbatim as the error message.
#[inline]
pub fn invalid_state(condition: bool, message: &str) -> Result<()> {
    if condition {
        return Err(raise::invalid_state(Context::unnamed(), message));
    }
    Ok(())
}

/// Fails with `InvalidArgument` for `parameter` if `condition` holds.
///
/// `message` is used verbatim as the error message.
#[inline]
pub fn invalid_argument(condition: bool, parameter: &str, message: &str) -> Result<()> {
    if condition {
        return Err(raise::invalid_argument(
            Context::new(Some(parameter), Some(message)),
            &"",
        ));
    }
    Ok(())
}

/// Returns the value inside `option`, failing with `ArgumentNone` for
/// `parameter` if it is `None`.
///
/// # Examples
///
/// ```rust
/// use warden::check;
///
/// let timeout: Option<u64> = Some(30);
/// assert_eq!(check::must_not_be_none(timeout, "timeout").unwrap(), 30);
///
/// let err = check::must_not_be_none(None::<u64>, "timeout").unwrap_err();
/// assert_eq!(err.to_string(), "timeout must not be None.");
/// ```
#[inline]
pub fn must_not_be_none<T>(option: Option<T>, parameter: &str) -> Result<T> {
    option.ok_or_else(|| raise::argument_none(Context::named(parameter)))
}
