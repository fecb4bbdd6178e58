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

//! Constructors for `GuardError`, one per violation category.
//!
//! Each constructor takes a `Context` naming the offending parameter and an
//! optional custom message. When no custom message is given, the default
//! message is generated from the subject ("the parameter name", or
//! `"The value"` for unnamed arguments) and the details of the violation:
//!
//! ```text
//! <subject> must <expectation>[, but it actually <actual>].
//! ```
//!
//! Every constructed error is reported through `log::debug!` on the
//! `warden` target before it is returned.

use crate::error::GuardError;
use std::fmt::{Debug, Display};

/// The subject used in messages when no parameter name is available.
pub const UNNAMED_SUBJECT: &str = "The value";

/// Names the offending parameter and carries an optional custom message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context<'a> {
    parameter: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> Context<'a> {
    /// Creates a new context.
    #[inline]
    pub const fn new(parameter: Option<&'a str>, message: Option<&'a str>) -> Self {
        Self { parameter, message }
    }

    /// Creates a context for the named parameter with the default message.
    #[inline]
    pub const fn named(parameter: &'a str) -> Self {
        Self::new(Some(parameter), None)
    }

    /// Creates a context for an unnamed value with the default message.
    #[inline]
    pub const fn unnamed() -> Self {
        Self::new(None, None)
    }

    /// Returns the parameter name.
    #[inline]
    pub const fn parameter(&self) -> Option<&'a str> {
        self.parameter
    }

    /// Returns the custom message.
    #[inline]
    pub const fn message(&self) -> Option<&'a str> {
        self.message
    }

    #[inline]
    fn subject(&self) -> &'a str {
        self.parameter.unwrap_or(UNNAMED_SUBJECT)
    }

    #[inline]
    fn owned_parameter(&self) -> Option<String> {
        self.parameter.map(str::to_owned)
    }

    fn resolve(&self, expectation: &dyn Display, actual: Option<&dyn Display>) -> String {
        match (self.message, actual) {
            (Some(custom), _) => custom.to_owned(),
            (None, Some(actual)) => format!(
                "{} must {}, but it actually {}.",
                self.subject(),
                expectation,
                actual
            ),
            (None, None) => format!("{} must {}.", self.subject(), expectation),
        }
    }
}

#[inline]
fn emit(error: GuardError) -> GuardError {
    log::debug!(
        target: "warden",
        "guard violated: category={} parameter={} message={:?}",
        error.category(),
        error.parameter().unwrap_or("<unnamed>"),
        error.message()
    );
    error
}

/// Logs a violation whose error was built by a caller-supplied factory.
///
/// The error type is unknown here, so the category is reported as `custom`.
#[inline]
pub(crate) fn custom_failure(ctx: Context<'_>) {
    log::debug!(
        target: "warden",
        "guard violated: category=custom parameter={}",
        ctx.parameter().unwrap_or("<unnamed>")
    );
}

macro_rules! violation {
    ($variant:ident, $ctx:expr, $expectation:expr) => {
        emit(GuardError::$variant {
            parameter: $ctx.owned_parameter(),
            message: $ctx.resolve(&$expectation, None),
        })
    };
    ($variant:ident, $ctx:expr, $expectation:expr, $actual:expr) => {
        emit(GuardError::$variant {
            parameter: $ctx.owned_parameter(),
            message: $ctx.resolve(&$expectation, Some(&$actual)),
        })
    };
}

/// An optional argument was `None`.
pub fn argument_none(ctx: Context<'_>) -> GuardError {
    violation!(ArgumentNone, ctx, "not be None")
}

/// A value equals its type's default.
pub fn argument_default(ctx: Context<'_>, default: &dyn Debug) -> GuardError {
    violation!(
        ArgumentDefault,
        ctx,
        format_args!("not be the default value {:?}", default)
    )
}

/// A string is empty.
pub fn empty_string(ctx: Context<'_>) -> GuardError {
    violation!(EmptyString, ctx, "not be an empty string")
}

/// A string is empty or whitespace-only.
pub fn white_space_string(ctx: Context<'_>, value: &str) -> GuardError {
    violation!(
        WhiteSpaceString,
        ctx,
        "not be empty or contain only whitespace",
        format_args!("is {:?}", value)
    )
}

/// A collection is empty.
pub fn empty_collection(ctx: Context<'_>) -> GuardError {
    violation!(EmptyCollection, ctx, "not be an empty collection")
}

/// A value is outside of its admissible range.
///
/// `expectation` completes "must be ..." (e.g. `"less than 10"`); `actual`
/// is the offending value.
pub fn out_of_range(ctx: Context<'_>, expectation: &dyn Display, actual: &dyn Display) -> GuardError {
    violation!(
        OutOfRange,
        ctx,
        format_args!("be {}", expectation),
        format_args!("is {}", actual)
    )
}

/// A string has an invalid length.
///
/// `expectation` completes "must ..." (e.g. `"have length 5"`).
pub fn string_length(ctx: Context<'_>, expectation: &dyn Display, length: usize) -> GuardError {
    violation!(
        StringLength,
        ctx,
        expectation,
        format_args!("has length {}", length)
    )
}

/// A collection has an invalid number of elements.
///
/// `expectation` completes "must ..." (e.g. `"contain at least 2 items"`).
pub fn collection_count(ctx: Context<'_>, expectation: &dyn Display, count: usize) -> GuardError {
    violation!(
        CollectionCount,
        ctx,
        expectation,
        format_args!("contains {} {}", count, items(count))
    )
}

/// A substring, prefix or suffix expectation is violated.
///
/// `expectation` completes "must ..." (e.g. `"contain \"abc\" (Ordinal)"`).
pub fn substring(ctx: Context<'_>, expectation: &dyn Display, value: &str) -> GuardError {
    violation!(Substring, ctx, expectation, format_args!("is {:?}", value))
}

/// A string does not match a regular expression.
pub fn string_mismatch(ctx: Context<'_>, pattern: &str, value: &str) -> GuardError {
    violation!(
        StringMismatch,
        ctx,
        format_args!("match the regular expression {:?}", pattern),
        format_args!("is {:?}", value)
    )
}

/// A string is not a valid email address.
pub fn invalid_email_address(ctx: Context<'_>, value: &str) -> GuardError {
    violation!(
        InvalidEmailAddress,
        ctx,
        "be a valid email address",
        format_args!("is {:?}", value)
    )
}

/// A string has leading or trailing whitespace.
///
/// `expectation` completes "must ..." (e.g. `"be trimmed at the start"`).
pub fn not_trimmed(ctx: Context<'_>, expectation: &dyn Display, value: &str) -> GuardError {
    violation!(NotTrimmed, ctx, expectation, format_args!("is {:?}", value))
}

/// A value differs from the value it must equal.
pub fn values_not_equal(ctx: Context<'_>, expected: &dyn Debug, actual: &dyn Debug) -> GuardError {
    violation!(
        ValuesNotEqual,
        ctx,
        format_args!("be equal to {:?}", expected),
        format_args!("is {:?}", actual)
    )
}

/// A value equals the value it must differ from.
pub fn values_equal(ctx: Context<'_>, other: &dyn Debug) -> GuardError {
    violation!(ValuesEqual, ctx, format_args!("not be equal to {:?}", other))
}

/// A reference identity expectation is violated.
///
/// `expectation` completes "must ..." (e.g. `"not point to the same object as other"`).
pub fn same_reference(ctx: Context<'_>, expectation: &dyn Display) -> GuardError {
    violation!(SameReference, ctx, expectation)
}

/// A dynamically typed value is not of the expected type.
pub fn type_mismatch(ctx: Context<'_>, expected: &str) -> GuardError {
    violation!(TypeMismatch, ctx, format_args!("be of type {}", expected))
}

/// An item is missing from a collection.
///
/// `expectation` completes "must ..." (e.g. `"contain 5"`).
pub fn missing_item(ctx: Context<'_>, expectation: &dyn Display) -> GuardError {
    violation!(MissingItem, ctx, expectation)
}

/// An item is unexpectedly part of a collection.
///
/// `expectation` completes "must ..." (e.g. `"not contain 5"`).
pub fn existing_item(ctx: Context<'_>, expectation: &dyn Display) -> GuardError {
    violation!(ExistingItem, ctx, expectation)
}

/// An object is in a state that does not permit the operation.
///
/// Unlike the other constructors, the message is used verbatim.
pub fn invalid_state(ctx: Context<'_>, message: &str) -> GuardError {
    emit(GuardError::InvalidState {
        parameter: ctx.owned_parameter(),
        message: ctx.message.unwrap_or(message).to_owned(),
    })
}

/// A generic argument predicate failed.
///
/// `expectation` completes "must ..." (e.g. `"satisfy the required condition"`).
pub fn invalid_argument(ctx: Context<'_>, expectation: &dyn Display) -> GuardError {
    violation!(InvalidArgument, ctx, expectation)
}

#[inline(always)]
pub(crate) fn items(count: usize) -> &'static str {
    if count == 1 { "item" } else { "items" }
}
