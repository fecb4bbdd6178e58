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

//! # Guard Families
//!
//! The checks available on an `Argument`, grouped by the kind of value they
//! inspect. Families whose method names are unique are inherent methods of
//! `Argument`; families that share names (e.g. `must_not_be_empty` for
//! strings and collections) are traits, re-exported by `crate::prelude`.
//!
//! ## Submodules
//!
//! - `option`: `must_be_some` (unwrapping), `must_be_some_or_else`, `must_be_none`.
//! - `common`: Equality, default-value, membership and reference-identity
//!   checks (`must_be_equal_to`, `must_not_be_default`, `must_be_one_of`,
//!   `must_be_same_as`, ...).
//! - `comparable`: Ordering and range checks for `PartialOrd` values
//!   (`ComparableGuards`), tolerance checks for floats (`FloatGuards`) and
//!   `must_be_valid_index_for` on `usize`.
//! - `strings`: Emptiness, containment, equality, length, trimming and
//!   character-class checks for anything that is `AsRef<str>` (`StringGuards`),
//!   and regex-based checks behind the `regex` feature (`PatternGuards`).
//! - `collections`: The `Collection` abstraction and count/membership checks
//!   (`CollectionGuards`).
//! - `types`: Downcasting checks for `&dyn Any` and `Box<dyn Any>`.

pub mod collections;
pub mod common;
pub mod comparable;
pub mod option;
pub mod strings;
pub mod types;

pub use collections::{Collection, CollectionGuards};
pub use comparable::{ComparableGuards, FloatGuards};
#[cfg(feature = "regex")]
pub use strings::PatternGuards;
pub use strings::StringGuards;
