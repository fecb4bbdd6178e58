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

use proptest::prelude::*;
use warden::prelude::*;

proptest! {
    #[test]
    fn prop_passing_guards_return_value_unchanged(value in any::<i64>()) {
        let checked = Argument::named(value, "value")
            .must_be_greater_than_or_equal_to(i64::MIN)
            .and_then(|a| a.must_be_less_than_or_equal_to(i64::MAX))
            .and_then(|a| a.must_be_equal_to(value))
            .unwrap();
        prop_assert_eq!(checked.into_inner(), value);
    }

    #[test]
    fn prop_range_guard_agrees_with_contains(
        from in -50i32..50,
        len in 0i32..50,
        value in -120i32..120,
        from_inclusive: bool,
        to_inclusive: bool,
    ) {
        let range = Range::new(from, from + len, from_inclusive, to_inclusive);
        let inside = Argument::named(value, "value").must_be_in(&range);
        let outside = Argument::named(value, "value").must_not_be_in(&range);
        prop_assert_eq!(inside.is_ok(), range.contains(&value));
        prop_assert_eq!(outside.is_ok(), !range.contains(&value));
    }

    #[test]
    fn prop_failures_name_parameter_and_category(
        name in "[a-z_]{1,12}",
        value in 0u32..1000,
    ) {
        let err = Argument::named(value, name.as_str())
            .must_be_greater_than(1000)
            .unwrap_err();
        prop_assert_eq!(err.parameter(), Some(name.as_str()));
        prop_assert_eq!(err.category(), "OutOfRange");
        let expected_prefix = format!("{name} must be greater than 1000");
        prop_assert!(err.to_string().starts_with(&expected_prefix));
    }

    #[test]
    fn prop_string_length_counts_chars(s in "\\PC{0,16}") {
        let len = s.chars().count();
        prop_assert!(Argument::named(s.as_str(), "s").must_have_length(len).is_ok());
        prop_assert!(Argument::named(s.as_str(), "s").must_be_shorter_than(len + 1).is_ok());
        prop_assert!(Argument::named(s.as_str(), "s").must_be_longer_than(len).is_err());
    }

    #[test]
    fn prop_custom_message_is_used_verbatim(message in "[A-Za-z ]{1,40}") {
        let err = Argument::named("", "s")
            .with_message(message.clone())
            .must_not_be_empty()
            .unwrap_err();
        prop_assert_eq!(err.message(), message.as_str());
    }

    #[test]
    fn prop_collection_count_guards_agree(len in 0usize..8, bound in 0usize..8) {
        let items: Vec<usize> = (0..len).collect();
        prop_assert_eq!(Argument::new(&items).must_have_count(bound).is_ok(), len == bound);
        prop_assert_eq!(Argument::new(&items).must_have_min_count(bound).is_ok(), len >= bound);
        prop_assert_eq!(Argument::new(&items).must_have_max_count(bound).is_ok(), len <= bound);
    }
}
