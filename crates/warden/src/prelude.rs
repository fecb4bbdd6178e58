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

//! Everything needed to write guard clauses with a single import.
//!
//! ```rust
//! use warden::prelude::*;
//!
//! fn rename(name: &str) -> Result<&str> {
//!     Ok(arg!(name).must_not_be_blank()?.must_be_shorter_than(64)?.into_inner())
//! }
//!
//! assert!(rename("report").is_ok());
//! ```

pub use crate::{
    Argument, GuardError, Result, arg,
    guards::{Collection, CollectionGuards, ComparableGuards, FloatGuards, StringGuards},
};
pub use warden_core::{math::range::Range, text::StringComparison};

#[cfg(feature = "regex")]
pub use crate::guards::PatternGuards;
