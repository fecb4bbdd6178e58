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

//! # Warden Core
//!
//! Pure, allocation-free building blocks behind the `warden` guard clauses.
//! Nothing in this crate knows about errors or parameter names; the guard
//! crate layers those on top.
//!
//! ## Modules
//!
//! - `math`: The `Range<T>` value type with independently inclusive or
//!   exclusive bounds, a fluent builder (`Range::from_inclusive(0).to_exclusive(10)`),
//!   containment queries, and conversions from `std::ops::Range` and
//!   `RangeInclusive`.
//! - `hash`: A deterministic multiply-add hash combinator (`MultiplyAddHasher`,
//!   `create_hash_code`, `multiply_add_hash!`) that folds several values into
//!   a single `i32`.
//! - `text`: String comparison modes (`StringComparison`) with ordinal,
//!   case-insensitive, Unicode-invariant and whitespace-insensitive semantics,
//!   plus character-level predicates (`is_blank`, `is_trimmed`,
//!   `is_file_extension`, ...).
//!
//! Refer to each module for detailed APIs and examples.

pub mod hash;
pub mod math;
pub mod text;
