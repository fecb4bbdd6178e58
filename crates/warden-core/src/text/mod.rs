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

//! # Text Primitives
//!
//! String comparison and inspection helpers used by the string guards.
//!
//! ## Submodules
//!
//! - `comparison`: The `StringComparison` modes and the allocation-free
//!   comparison operations built on them (`equals`, `find`, `contains`,
//!   `starts_with`, `ends_with`). Each mode views a string as a lazily folded
//!   `char` stream (`Folded`) that applies canonical composition, case
//!   folding, and whitespace skipping as required.
//! - `predicates`: Character-level predicates such as `is_blank`,
//!   `is_trimmed`, `is_new_line`, `is_letters_or_digits`, and
//!   `is_file_extension`.
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::text::{StringComparison, contains, equals, is_blank};
//!
//! assert!(equals("Hello World", "helloworld", StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace));
//! assert!(contains("Content-Type", "type", StringComparison::OrdinalIgnoreCase));
//! assert!(is_blank(" \t\n"));
//! ```

pub mod comparison;
pub mod predicates;

pub use comparison::{
    Folded, StringComparison, contains, ends_with, equals, equals_ordinal_ignore_case_ignore_white_space,
    equals_ordinal_ignore_white_space, find, starts_with,
};
pub use predicates::{
    is_blank, is_digits, is_file_extension, is_letters, is_letters_or_digits, is_new_line,
    is_trimmed, is_trimmed_at_end, is_trimmed_at_start,
};
