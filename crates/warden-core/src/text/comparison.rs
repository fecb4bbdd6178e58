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

//! String comparison modes.
//!
//! The ordinal modes compare bytes or ASCII-folded bytes and take the
//! standard library fast paths where one exists. The invariant modes are the
//! locale-free counterpart of culture-aware comparison: strings are compared
//! by canonical equivalence (NFC), so a precomposed `é` equals `e` followed by
//! a combining acute accent. The whitespace-insensitive modes drop every
//! Unicode whitespace character on both sides before comparing.
//!
//! None of the operations allocate. Non-ordinal modes walk two `Folded`
//! streams in lockstep; substring search restarts a stream at each candidate
//! char boundary of the haystack.

use std::{fmt::Display, str::Chars};
use unicode_normalization::{
    Recompositions, UnicodeNormalization, char::canonical_combining_class,
};

/// The semantics used to compare two strings.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{equals, StringComparison};
///
/// assert!(!equals("Straße", "STRASSE", StringComparison::OrdinalIgnoreCase));
/// assert!(equals("Caf\u{e9}", "cafe\u{301}", StringComparison::InvariantIgnoreCase));
/// assert!(equals("a b\tc", "abc", StringComparison::OrdinalIgnoreWhiteSpace));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StringComparison {
    /// Byte-exact comparison.
    #[default]
    Ordinal,
    /// ASCII case-insensitive comparison; non-ASCII characters must match exactly.
    OrdinalIgnoreCase,
    /// Comparison by canonical equivalence (NFC).
    Invariant,
    /// Comparison by canonical equivalence after full Unicode lowercase mapping.
    InvariantIgnoreCase,
    /// Byte-exact comparison ignoring all whitespace characters.
    OrdinalIgnoreWhiteSpace,
    /// ASCII case-insensitive comparison ignoring all whitespace characters.
    OrdinalIgnoreCaseIgnoreWhiteSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseFolding {
    None,
    Ascii,
    Unicode,
}

impl StringComparison {
    /// All comparison modes, in declaration order.
    pub const ALL: [StringComparison; 6] = [
        StringComparison::Ordinal,
        StringComparison::OrdinalIgnoreCase,
        StringComparison::Invariant,
        StringComparison::InvariantIgnoreCase,
        StringComparison::OrdinalIgnoreWhiteSpace,
        StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace,
    ];

    /// Returns `true` if the mode treats upper and lower case as equal.
    #[inline]
    pub const fn ignores_case(self) -> bool {
        matches!(
            self,
            Self::OrdinalIgnoreCase | Self::InvariantIgnoreCase | Self::OrdinalIgnoreCaseIgnoreWhiteSpace
        )
    }

    /// Returns `true` if the mode skips whitespace characters.
    #[inline]
    pub const fn ignores_white_space(self) -> bool {
        matches!(
            self,
            Self::OrdinalIgnoreWhiteSpace | Self::OrdinalIgnoreCaseIgnoreWhiteSpace
        )
    }

    #[inline]
    const fn case_folding(self) -> CaseFolding {
        match self {
            Self::Ordinal | Self::Invariant | Self::OrdinalIgnoreWhiteSpace => CaseFolding::None,
            Self::OrdinalIgnoreCase | Self::OrdinalIgnoreCaseIgnoreWhiteSpace => CaseFolding::Ascii,
            Self::InvariantIgnoreCase => CaseFolding::Unicode,
        }
    }

    #[inline]
    const fn composes(self) -> bool {
        matches!(self, Self::Invariant | Self::InvariantIgnoreCase)
    }

    /// Returns `true` if a match may begin at `c`.
    ///
    /// Whitespace never starts a match in the whitespace-insensitive modes.
    /// In the composing modes a combining mark belongs to the preceding
    /// starter, so a match never begins inside a composed character.
    #[inline]
    fn can_start_match(self, c: char) -> bool {
        if self.ignores_white_space() && c.is_whitespace() {
            return false;
        }
        !(self.composes() && canonical_combining_class(c) != 0)
    }

    /// Returns the `char` stream of `s` as seen by this comparison mode.
    ///
    /// Two strings are equal under the mode iff their folded streams are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::text::StringComparison;
    ///
    /// let folded: String = StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace
    ///     .fold(" Ab C ")
    ///     .collect();
    /// assert_eq!(folded, "abc");
    /// ```
    #[inline]
    pub fn fold(self, s: &str) -> Folded<'_> {
        let source = if self.composes() {
            Source::Composed(s.chars().nfc())
        } else {
            Source::Raw(s.chars())
        };
        Folded {
            source,
            case: self.case_folding(),
            skip_white_space: self.ignores_white_space(),
            pending: None,
        }
    }
}

impl Display for StringComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ordinal => "Ordinal",
            Self::OrdinalIgnoreCase => "OrdinalIgnoreCase",
            Self::Invariant => "Invariant",
            Self::InvariantIgnoreCase => "InvariantIgnoreCase",
            Self::OrdinalIgnoreWhiteSpace => "OrdinalIgnoreWhiteSpace",
            Self::OrdinalIgnoreCaseIgnoreWhiteSpace => "OrdinalIgnoreCaseIgnoreWhiteSpace",
        };
        f.write_str(name)
    }
}

enum Source<'a> {
    Raw(Chars<'a>),
    Composed(Recompositions<Chars<'a>>),
}

impl Iterator for Source<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match self {
            Source::Raw(chars) => chars.next(),
            Source::Composed(chars) => chars.next(),
        }
    }
}

/// A string viewed through a `StringComparison` mode.
///
/// Created by `StringComparison::fold`. The iterator is lazy and does not
/// allocate; Unicode lowercase expansions (e.g. `İ` to `i̇`) are buffered in
/// a fixed-size `ToLowercase` iterator.
pub struct Folded<'a> {
    source: Source<'a>,
    case: CaseFolding,
    skip_white_space: bool,
    pending: Option<std::char::ToLowercase>,
}

impl Iterator for Folded<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(pending) = &mut self.pending {
                if let Some(c) = pending.next() {
                    return Some(c);
                }
                self.pending = None;
            }

            let c = self.source.next()?;
            if self.skip_white_space && c.is_whitespace() {
                continue;
            }
            match self.case {
                CaseFolding::None => return Some(c),
                CaseFolding::Ascii => return Some(c.to_ascii_lowercase()),
                CaseFolding::Unicode => self.pending = Some(c.to_lowercase()),
            }
        }
    }
}

/// Returns `true` if `prefix` is exhausted before `stream` diverges from it.
#[inline]
fn is_prefix_of<I, J>(mut prefix: I, mut stream: J) -> bool
where
    I: Iterator<Item = char>,
    J: Iterator<Item = char>,
{
    loop {
        match prefix.next() {
            None => return true,
            Some(expected) => match stream.next() {
                Some(actual) if actual == expected => {}
                _ => return false,
            },
        }
    }
}

/// Returns `true` if `a` and `b` are equal under `comparison`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{equals, StringComparison};
///
/// assert!(equals("GUARD", "guard", StringComparison::OrdinalIgnoreCase));
/// assert!(!equals("GUARD", "guard", StringComparison::Ordinal));
/// assert!(equals("   ", "", StringComparison::OrdinalIgnoreWhiteSpace));
/// ```
#[inline]
pub fn equals(a: &str, b: &str, comparison: StringComparison) -> bool {
    match comparison {
        StringComparison::Ordinal => a == b,
        StringComparison::OrdinalIgnoreCase => a.eq_ignore_ascii_case(b),
        _ => comparison.fold(a).eq(comparison.fold(b)),
    }
}

/// Returns `true` if `a` and `b` are equal when all whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::equals_ordinal_ignore_white_space;
///
/// assert!(equals_ordinal_ignore_white_space("{ \"a\": 1 }", "{\"a\":1}"));
/// assert!(!equals_ordinal_ignore_white_space("A", "a"));
/// ```
#[inline]
pub fn equals_ordinal_ignore_white_space(a: &str, b: &str) -> bool {
    equals(a, b, StringComparison::OrdinalIgnoreWhiteSpace)
}

/// Returns `true` if `a` and `b` are equal when all whitespace and ASCII case is ignored.
#[inline]
pub fn equals_ordinal_ignore_case_ignore_white_space(a: &str, b: &str) -> bool {
    equals(a, b, StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace)
}

/// Returns the byte offset of the first occurrence of `needle` in `haystack`
/// under `comparison`.
///
/// An empty needle (or, in the whitespace-insensitive modes, a needle that
/// consists only of whitespace) matches at offset `0`. In the
/// whitespace-insensitive modes a match never starts on a whitespace
/// character. In the invariant modes a match never starts on a combining
/// mark, so canonically equivalent haystacks give the same answer.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{find, StringComparison};
///
/// assert_eq!(find("Hello World", "WORLD", StringComparison::OrdinalIgnoreCase), Some(6));
/// assert_eq!(find("a  b c", "bc", StringComparison::OrdinalIgnoreWhiteSpace), Some(3));
/// assert_eq!(find("abc", "", StringComparison::Ordinal), Some(0));
/// assert_eq!(find("abc", "d", StringComparison::Invariant), None);
/// ```
pub fn find(haystack: &str, needle: &str, comparison: StringComparison) -> Option<usize> {
    match comparison {
        StringComparison::Ordinal => haystack.find(needle),
        StringComparison::OrdinalIgnoreCase => {
            if needle.is_empty() {
                return Some(0);
            }
            // A match begins with the needle's first byte, so it always lies
            // on a char boundary of the haystack.
            haystack
                .as_bytes()
                .windows(needle.len())
                .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
        }
        _ => {
            if comparison.fold(needle).next().is_none() {
                return Some(0);
            }
            haystack
                .char_indices()
                .filter(|&(_, c)| comparison.can_start_match(c))
                .map(|(i, _)| i)
                .find(|&i| is_prefix_of(comparison.fold(needle), comparison.fold(&haystack[i..])))
        }
    }
}

/// Returns `true` if `needle` occurs in `haystack` under `comparison`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{contains, StringComparison};
///
/// assert!(contains("Guard Clause", "clause", StringComparison::OrdinalIgnoreCase));
/// assert!(!contains("Guard Clause", "clause", StringComparison::Ordinal));
/// assert!(contains("anything", "", StringComparison::Invariant));
/// ```
#[inline]
pub fn contains(haystack: &str, needle: &str, comparison: StringComparison) -> bool {
    find(haystack, needle, comparison).is_some()
}

/// Returns `true` if `haystack` begins with `prefix` under `comparison`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{starts_with, StringComparison};
///
/// assert!(starts_with("https://example.com", "HTTPS", StringComparison::OrdinalIgnoreCase));
/// assert!(starts_with("  x y z", "xy", StringComparison::OrdinalIgnoreWhiteSpace));
/// ```
#[inline]
pub fn starts_with(haystack: &str, prefix: &str, comparison: StringComparison) -> bool {
    match comparison {
        StringComparison::Ordinal => haystack.starts_with(prefix),
        _ => is_prefix_of(comparison.fold(prefix), comparison.fold(haystack)),
    }
}

/// Returns `true` if `haystack` ends with `suffix` under `comparison`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::text::{ends_with, StringComparison};
///
/// assert!(ends_with("report.PDF", ".pdf", StringComparison::OrdinalIgnoreCase));
/// assert!(ends_with("a b c  ", "bc", StringComparison::OrdinalIgnoreWhiteSpace));
/// assert!(!ends_with("abc", "b", StringComparison::Invariant));
/// ```
pub fn ends_with(haystack: &str, suffix: &str, comparison: StringComparison) -> bool {
    match comparison {
        StringComparison::Ordinal => haystack.ends_with(suffix),
        StringComparison::OrdinalIgnoreCase => {
            haystack.len() >= suffix.len()
                && haystack.as_bytes()[haystack.len() - suffix.len()..]
                    .eq_ignore_ascii_case(suffix.as_bytes())
        }
        _ => {
            if comparison.fold(suffix).next().is_none() {
                return true;
            }
            haystack
                .char_indices()
                .rev()
                .filter(|&(_, c)| comparison.can_start_match(c))
                .any(|(i, _)| comparison.fold(&haystack[i..]).eq(comparison.fold(suffix)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "abc", true)]
    #[case("abc", "ABC", false)]
    #[case("", "", true)]
    #[case("a", "", false)]
    fn test_equals_ordinal(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(equals(a, b, StringComparison::Ordinal), expected);
    }

    #[rstest]
    #[case("abc", "ABC", true)]
    #[case("Ärger", "äRGER", false)] // Non-ASCII is compared exactly
    #[case("ärger", "äRGER", true)]
    #[case("abc", "abd", false)]
    fn test_equals_ordinal_ignore_case(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(equals(a, b, StringComparison::OrdinalIgnoreCase), expected);
    }

    #[test]
    fn test_equals_invariant_canonical_equivalence() {
        let precomposed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert!(!equals(precomposed, decomposed, StringComparison::Ordinal));
        assert!(equals(precomposed, decomposed, StringComparison::Invariant));
        assert!(!equals("CAF\u{c9}", decomposed, StringComparison::Invariant));
        assert!(equals("CAF\u{c9}", decomposed, StringComparison::InvariantIgnoreCase));
        assert!(equals("ÄRGER", "ärger", StringComparison::InvariantIgnoreCase));
    }

    #[rstest]
    #[case("a b c", "abc", true)]
    #[case(" \t\n", "", true)]
    #[case("ab", "a b ", true)]
    #[case("abc", "ab", false)]
    #[case("A B", "ab", false)]
    fn test_equals_ordinal_ignore_white_space(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(equals_ordinal_ignore_white_space(a, b), expected);
        assert_eq!(equals_ordinal_ignore_white_space(b, a), expected);
    }

    #[rstest]
    #[case("A B C", "abc", true)]
    #[case("Hello\u{a0}World", "helloworld", true)] // Non-breaking space is whitespace
    #[case("abc", "abcd", false)]
    fn test_equals_ordinal_ignore_case_ignore_white_space(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(equals_ordinal_ignore_case_ignore_white_space(a, b), expected);
    }

    #[test]
    fn test_fold_unicode_lowercase_expansion() {
        // 'İ' lowercases to two chars: 'i' + U+0307
        let folded: String = StringComparison::InvariantIgnoreCase.fold("İ").collect();
        assert_eq!(folded.chars().count(), 2);
        assert!(equals("İ", "i\u{307}", StringComparison::InvariantIgnoreCase));
    }

    #[test]
    fn test_find_all_modes_empty_needle() {
        for cmp in StringComparison::ALL {
            assert_eq!(find("abc", "", cmp), Some(0), "{cmp}");
            assert_eq!(find("", "", cmp), Some(0), "{cmp}");
            assert!(contains("abc", "", cmp), "{cmp}");
        }
    }

    #[test]
    fn test_find_offsets() {
        assert_eq!(find("xxabc", "abc", StringComparison::Ordinal), Some(2));
        assert_eq!(find("xxABC", "abc", StringComparison::OrdinalIgnoreCase), Some(2));
        assert_eq!(find("ééabc", "ABC", StringComparison::OrdinalIgnoreCase), Some(4));
        assert_eq!(find("xxABC", "abc", StringComparison::InvariantIgnoreCase), Some(2));
        assert_eq!(find("x  a b", "ab", StringComparison::OrdinalIgnoreWhiteSpace), Some(3));
        assert_eq!(find("abc", "abcd", StringComparison::OrdinalIgnoreCase), None);
        assert_eq!(find("ab", "abc", StringComparison::Invariant), None);
    }

    #[test]
    fn test_find_whitespace_only_needle() {
        assert_eq!(find("abc", "   ", StringComparison::OrdinalIgnoreWhiteSpace), Some(0));
        assert_eq!(find("abc", "   ", StringComparison::Ordinal), None);
    }

    #[rstest]
    #[case("\u{301}")]
    #[case("e")]
    #[case("f\u{e9}")]
    #[case("fe\u{301}")]
    #[case("caf")]
    fn test_invariant_search_agrees_for_equivalent_haystacks(#[case] needle: &str) {
        let precomposed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        for cmp in [StringComparison::Invariant, StringComparison::InvariantIgnoreCase] {
            assert_eq!(
                contains(decomposed, needle, cmp),
                contains(precomposed, needle, cmp),
                "contains {needle:?} {cmp}"
            );
            assert_eq!(
                ends_with(decomposed, needle, cmp),
                ends_with(precomposed, needle, cmp),
                "ends_with {needle:?} {cmp}"
            );
        }
    }

    #[test]
    fn test_invariant_match_never_starts_on_combining_mark() {
        assert!(!contains("cafe\u{301}", "\u{301}", StringComparison::Invariant));
        assert!(!ends_with("cafe\u{301}", "\u{301}", StringComparison::Invariant));
        assert_eq!(find("cafe\u{301}", "f\u{e9}", StringComparison::Invariant), Some(2));
        // Ordinal modes still see the bare mark.
        assert!(contains("cafe\u{301}", "\u{301}", StringComparison::Ordinal));
    }

    #[test]
    fn test_contains_invariant() {
        let haystack = "le caf\u{e9} noir";
        assert!(contains(haystack, "cafe\u{301}", StringComparison::Invariant));
        assert!(contains(haystack, "CAFE\u{301}", StringComparison::InvariantIgnoreCase));
        assert!(!contains(haystack, "cafe\u{301}", StringComparison::Ordinal));
    }

    #[rstest]
    #[case(StringComparison::Ordinal, "Guard", "Gu", true)]
    #[case(StringComparison::Ordinal, "Guard", "gu", false)]
    #[case(StringComparison::OrdinalIgnoreCase, "Guard", "gU", true)]
    #[case(StringComparison::OrdinalIgnoreWhiteSpace, " G u ard", "Gua", true)]
    #[case(StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace, " G u ard", "gua", true)]
    #[case(StringComparison::Invariant, "e\u{301}t\u{e9}", "\u{e9}", true)]
    #[case(StringComparison::Invariant, "Guard", "Guardian", false)]
    fn test_starts_with(
        #[case] cmp: StringComparison,
        #[case] haystack: &str,
        #[case] prefix: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(starts_with(haystack, prefix, cmp), expected);
    }

    #[rstest]
    #[case(StringComparison::Ordinal, "file.txt", ".txt", true)]
    #[case(StringComparison::Ordinal, "file.txt", ".TXT", false)]
    #[case(StringComparison::OrdinalIgnoreCase, "file.txt", ".TXT", true)]
    #[case(StringComparison::OrdinalIgnoreCase, "txt", "file.txt", false)]
    #[case(StringComparison::OrdinalIgnoreWhiteSpace, "a b c ", "b c", true)]
    #[case(StringComparison::InvariantIgnoreCase, "t\u{e9}", "E\u{301}", true)]
    #[case(StringComparison::Invariant, "abc", "", true)]
    #[case(StringComparison::Invariant, "abc", "ab", false)]
    fn test_ends_with(
        #[case] cmp: StringComparison,
        #[case] haystack: &str,
        #[case] suffix: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(ends_with(haystack, suffix, cmp), expected);
    }

    #[test]
    fn test_flags() {
        assert!(StringComparison::OrdinalIgnoreCase.ignores_case());
        assert!(!StringComparison::OrdinalIgnoreWhiteSpace.ignores_case());
        assert!(StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace.ignores_white_space());
        assert!(!StringComparison::Invariant.ignores_white_space());
        assert_eq!(StringComparison::default(), StringComparison::Ordinal);
        assert_eq!(StringComparison::InvariantIgnoreCase.to_string(), "InvariantIgnoreCase");
    }
}
