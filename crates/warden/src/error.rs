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

//! Error type for violated guard clauses.
//!
//! Every variant of `GuardError` is one violation category and carries the
//! name of the offending parameter (if known) together with a
//! human-readable message. Errors are created by the constructors in
//! `crate::raise`, which generate the default messages.

use thiserror::Error;

/// Result type for guard checks.
pub type Result<T> = std::result::Result<T, GuardError>;

/// The error returned when a guard clause is violated.
///
/// # Examples
///
/// ```rust
/// use warden::{arg, GuardError};
///
/// let name: Option<&str> = None;
/// let err = arg!(name).must_be_some().unwrap_err();
/// assert!(matches!(err, GuardError::ArgumentNone { .. }));
/// assert_eq!(err.parameter(), Some("name"));
/// assert_eq!(err.to_string(), "name must not be None.");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuardError {
    /// An optional argument was `None`.
    #[error("{message}")]
    ArgumentNone {
        parameter: Option<String>,
        message: String,
    },

    /// A value was equal to its type's default value.
    #[error("{message}")]
    ArgumentDefault {
        parameter: Option<String>,
        message: String,
    },

    /// A string was empty.
    #[error("{message}")]
    EmptyString {
        parameter: Option<String>,
        message: String,
    },

    /// A string was empty or consisted only of whitespace.
    #[error("{message}")]
    WhiteSpaceString {
        parameter: Option<String>,
        message: String,
    },

    /// A collection contained no elements.
    #[error("{message}")]
    EmptyCollection {
        parameter: Option<String>,
        message: String,
    },

    /// A value lay outside of its admissible range.
    #[error("{message}")]
    OutOfRange {
        parameter: Option<String>,
        message: String,
    },

    /// A string had an invalid length.
    #[error("{message}")]
    StringLength {
        parameter: Option<String>,
        message: String,
    },

    /// A collection had an invalid number of elements.
    #[error("{message}")]
    CollectionCount {
        parameter: Option<String>,
        message: String,
    },

    /// A substring, prefix or suffix expectation was violated.
    #[error("{message}")]
    Substring {
        parameter: Option<String>,
        message: String,
    },

    /// A string did not match a regular expression.
    #[error("{message}")]
    StringMismatch {
        parameter: Option<String>,
        message: String,
    },

    /// A string was not a valid email address.
    #[error("{message}")]
    InvalidEmailAddress {
        parameter: Option<String>,
        message: String,
    },

    /// A string started or ended with whitespace.
    #[error("{message}")]
    NotTrimmed {
        parameter: Option<String>,
        message: String,
    },

    /// A value was expected to equal another value but did not.
    #[error("{message}")]
    ValuesNotEqual {
        parameter: Option<String>,
        message: String,
    },

    /// A value was expected to differ from another value but did not.
    #[error("{message}")]
    ValuesEqual {
        parameter: Option<String>,
        message: String,
    },

    /// A reference identity expectation was violated.
    #[error("{message}")]
    SameReference {
        parameter: Option<String>,
        message: String,
    },

    /// A dynamically typed value was not of the expected type.
    #[error("{message}")]
    TypeMismatch {
        parameter: Option<String>,
        message: String,
    },

    /// An item was expected to be part of a collection but was not.
    #[error("{message}")]
    MissingItem {
        parameter: Option<String>,
        message: String,
    },

    /// An item was expected not to be part of a collection but was.
    #[error("{message}")]
    ExistingItem {
        parameter: Option<String>,
        message: String,
    },

    /// An object was in a state that does not permit the operation.
    #[error("{message}")]
    InvalidState {
        parameter: Option<String>,
        message: String,
    },

    /// A generic argument predicate failed.
    #[error("{message}")]
    InvalidArgument {
        parameter: Option<String>,
        message: String,
    },
}

/// Expands to a `match` that binds the shared fields of every variant.
macro_rules! for_each_variant {
    ($value:expr, |$parameter:ident, $message:ident| $body:expr) => {
        match $value {
            GuardError::ArgumentNone { parameter: $parameter, message: $message }
            | GuardError::ArgumentDefault { parameter: $parameter, message: $message }
            | GuardError::EmptyString { parameter: $parameter, message: $message }
            | GuardError::WhiteSpaceString { parameter: $parameter, message: $message }
            | GuardError::EmptyCollection { parameter: $parameter, message: $message }
            | GuardError::OutOfRange { parameter: $parameter, message: $message }
            | GuardError::StringLength { parameter: $parameter, message: $message }
            | GuardError::CollectionCount { parameter: $parameter, message: $message }
            | GuardError::Substring { parameter: $parameter, message: $message }
            | GuardError::StringMismatch { parameter: $parameter, message: $message }
            | GuardError::InvalidEmailAddress { parameter: $parameter, message: $message }
            | GuardError::NotTrimmed { parameter: $parameter, message: $message }
            | GuardError::ValuesNotEqual { parameter: $parameter, message: $message }
            | GuardError::ValuesEqual { parameter: $parameter, message: $message }
            | GuardError::SameReference { parameter: $parameter, message: $message }
            | GuardError::TypeMismatch { parameter: $parameter, message: $message }
            | GuardError::MissingItem { parameter: $parameter, message: $message }
            | GuardError::ExistingItem { parameter: $parameter, message: $message }
            | GuardError::InvalidState { parameter: $parameter, message: $message }
            | GuardError::InvalidArgument { parameter: $parameter, message: $message } => $body,
        }
    };
}

impl GuardError {
    /// Returns the name of the offending parameter, if one was supplied.
    #[inline]
    pub fn parameter(&self) -> Option<&str> {
        for_each_variant!(self, |parameter, _message| parameter.as_deref())
    }

    /// Returns the human-readable description of the violation.
    #[inline]
    pub fn message(&self) -> &str {
        for_each_variant!(self, |_parameter, message| message.as_str())
    }

    /// Replaces the message while keeping the category and parameter.
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        for_each_variant!(&mut self, |_parameter, message| *message = new_message.into());
        self
    }

    /// Returns the name of the violation category, e.g. `"OutOfRange"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use warden::prelude::*;
    ///
    /// let port = 0_u16;
    /// let err = arg!(port).must_be_greater_than(0).unwrap_err();
    /// assert_eq!(err.category(), "OutOfRange");
    /// ```
    pub fn category(&self) -> &'static str {
        match self {
            Self::ArgumentNone { .. } => "ArgumentNone",
            Self::ArgumentDefault { .. } => "ArgumentDefault",
            Self::EmptyString { .. } => "EmptyString",
            Self::WhiteSpaceString { .. } => "WhiteSpaceString",
            Self::EmptyCollection { .. } => "EmptyCollection",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::StringLength { .. } => "StringLength",
            Self::CollectionCount { .. } => "CollectionCount",
            Self::Substring { .. } => "Substring",
            Self::StringMismatch { .. } => "StringMismatch",
            Self::InvalidEmailAddress { .. } => "InvalidEmailAddress",
            Self::NotTrimmed { .. } => "NotTrimmed",
            Self::ValuesNotEqual { .. } => "ValuesNotEqual",
            Self::ValuesEqual { .. } => "ValuesEqual",
            Self::SameReference { .. } => "SameReference",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::MissingItem { .. } => "MissingItem",
            Self::ExistingItem { .. } => "ExistingItem",
            Self::InvalidState { .. } => "InvalidState",
            Self::InvalidArgument { .. } => "InvalidArgument",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GuardError {
        GuardError::OutOfRange {
            parameter: Some("port".to_string()),
            message: "port must be greater than 0, but it actually is 0.".to_string(),
        }
    }

    #[test]
    fn test_accessors() {
        let err = sample();
        assert_eq!(err.parameter(), Some("port"));
        assert_eq!(err.category(), "OutOfRange");
        assert_eq!(err.message(), "port must be greater than 0, but it actually is 0.");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_with_message_keeps_category_and_parameter() {
        let err = sample().with_message("custom");
        assert_eq!(err.message(), "custom");
        assert_eq!(err.parameter(), Some("port"));
        assert!(matches!(err, GuardError::OutOfRange { .. }));
    }

    #[test]
    fn test_unnamed_parameter() {
        let err = GuardError::InvalidState {
            parameter: None,
            message: "not started".to_string(),
        };
        assert_eq!(err.parameter(), None);
        assert_eq!(err.to_string(), "not started");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&sample());
    }
}
