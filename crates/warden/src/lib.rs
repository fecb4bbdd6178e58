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

//! # Warden
//!
//! Guard clauses for validating arguments at the top of a function. Each
//! guard consumes an `Argument`, checks a single precondition and hands the
//! argument back, so checks chain with `?` and the validated value is
//! unwrapped in the same expression:
//!
//! ```rust
//! use warden::prelude::*;
//!
//! fn schedule(name: Option<&str>, priority: i32, tags: &[&str]) -> Result<String> {
//!     let name = arg!(name).must_be_some()?.must_not_be_blank()?.into_inner();
//!     let priority = arg!(priority)
//!         .must_be_in(&Range::inclusive_between(1, 5))?
//!         .into_inner();
//!     let tags = arg!(tags).must_have_max_count(3)?.into_inner();
//!     Ok(format!("{name}:{priority}:{}", tags.join(",")))
//! }
//!
//! assert_eq!(schedule(Some("nightly"), 2, &["db"]).unwrap(), "nightly:2:db");
//!
//! let err = schedule(Some("nightly"), 9, &[]).unwrap_err();
//! assert_eq!(err.parameter(), Some("priority"));
//! assert_eq!(
//!     err.to_string(),
//!     "priority must be between 1 (inclusive) and 5 (inclusive), but it actually is 9."
//! );
//! ```
//!
//! ## Modules
//!
//! - `argument`: The `Argument` wrapper, the `arg!` macro, custom messages
//!   (`with_message`) and custom error factories (`ensure`).
//! - `guards`: The guard families for options, equality, ordering and
//!   ranges, strings, collections and dynamic types.
//! - `check`: Free-standing state and argument checks.
//! - `error`: `GuardError`, one variant per violation category.
//! - `raise`: Constructors that build `GuardError`s with default messages.
//! - `prelude`: Glob-importable re-exports, including the guard traits.
//!
//! The building blocks from `warden-core` are re-exported as `hash`, `math`
//! and `text`.
//!
//! ## Features
//!
//! - `regex` (default): Regular expression and email address guards.
//! - `serde`: `Serialize`/`Deserialize` for `Range` and `StringComparison`.
//!
//! ## Logging
//!
//! Every violation is logged with `log::debug!` on the `warden` target. The
//! crate never installs a logger.

pub mod argument;
pub mod check;
pub mod error;
pub mod guards;
pub mod prelude;
pub mod raise;

pub use argument::Argument;
pub use error::{GuardError, Result};
pub use warden_core::{hash, math, text};
