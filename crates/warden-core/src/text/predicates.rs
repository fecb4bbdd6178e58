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

//! Character-level string predicates.
//!
//! All predicates operate on Unicode scalar values and use the Unicode
//! definitions of whitespace, letters and numerics from `char`.

/// Characters that may not appear in a file name on any common platform.
const INVALID_FILE_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Returns `true` if `s` is empty or consists only of whitespace.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\r\n"));
/// assert!(!is_blank(" x "));
/// ```
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Returns `true` if `s` does not start with whitespace.
#[inline]
pub fn is_trimmed_at_start(s: &str) -> bool {
    s.chars().next().is_none_or(|c| !c.is_whitespace())
}

/// Returns `true` if `s` does not end with whitespace.
#[inline]
pub fn is_trimmed_at_end(s: &str) -> bool {
    s.chars().next_back().is_none_or(|c| !c.is_whitespace())
}

/// Returns `true` if `s` neither starts nor ends with whitespace.
///
/// The empty string is trimmed; a whitespace-only string is not.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::is_trimmed;
///
/// assert!(is_trimmed(""));
/// assert!(is_trimmed("a b"));
/// assert!(!is_trimmed(" a"));
/// assert!(!is_trimmed("a\n"));
/// ```
#[inline]
pub fn is_trimmed(s: &str) -> bool {
    is_trimmed_at_start(s) && is_trimmed_at_end(s)
}

/// Returns `true` if `s` is exactly one line break, `"\n"` or `"\r\n"`.
#[inline]
pub fn is_new_line(s: &str) -> bool {
    s == "\n" || s == "\r\n"
}

/// Returns `true` if `s` is non-empty and every character is alphabetic.
#[inline]
pub fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Returns `true` if `s` is non-empty and every character is numeric.
#[inline]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

/// Returns `true` if `s` is non-empty and every character is alphanumeric.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::is_letters_or_digits;
///
/// assert!(is_letters_or_digits("abc123"));
/// assert!(is_letters_or_digits("Ünïcödé٣"));
/// assert!(!is_letters_or_digits("a-b"));
/// assert!(!is_letters_or_digits(""));
/// ```
#[inline]
pub fn is_letters_or_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// Returns `true` if `s` is a file extension such as `".txt"`.
///
/// A file extension starts with a single `.` followed by at least one
/// character; none of the following characters may be a `.`, a control
/// character, or a character that is invalid in file names.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::is_file_extension;
///
/// assert!(is_file_extension(".txt"));
/// assert!(is_file_extension(".tar"));
/// assert!(!is_file_extension(".tar.gz"));
/// assert!(!is_file_extension("txt"));
/// assert!(!is_file_extension("."));
/// assert!(!is_file_extension(".t?t"));
/// ```
pub fn is_file_extension(s: &str) -> bool {
    let Some(rest) = s.strip_prefix('.') else {
        return false;
    };
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c != '.' && !c.is_control() && !INVALID_FILE_NAME_CHARS.contains(&c))
}
