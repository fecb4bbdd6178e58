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

//! End-to-end behavior of guard chains as seen by a caller.

use rstest::rstest;
use std::collections::HashMap;
use warden::prelude::*;
use warden::{check, hash::create_hash_code};

#[derive(Debug, PartialEq)]
struct Account {
    owner: String,
    email: String,
    tier: u8,
    tags: Vec<String>,
}

fn open_account(
    owner: Option<&str>,
    email: &str,
    tier: u8,
    tags: Vec<String>,
) -> warden::Result<Account> {
    let owner = arg!(owner)
        .must_be_some()?
        .must_not_be_blank()?
        .must_be_trimmed()?
        .must_have_length_in(&Range::inclusive_between(2, 32))?
        .into_inner();
    let email = arg!(email).must_contain("@", StringComparison::Ordinal)?.into_inner();
    let tier = arg!(tier).must_be_in(&Range::from_inclusive(1).to_exclusive(4))?.into_inner();
    let tags = arg!(tags)
        .must_have_max_count(3)?
        .must_not_contain_item(&String::from("banned"))?
        .into_inner();

    Ok(Account {
        owner: owner.to_owned(),
        email: email.to_owned(),
        tier,
        tags,
    })
}

#[test]
fn test_valid_input_passes_through_unchanged() {
    let account = open_account(Some("Ada"), "ada@example.com", 2, vec!["beta".into()]).unwrap();
    assert_eq!(
        account,
        Account {
            owner: "Ada".into(),
            email: "ada@example.com".into(),
            tier: 2,
            tags: vec!["beta".into()],
        }
    );
}

#[rstest]
#[case(None, "a@b.c", 1, vec![], "owner", "ArgumentNone")]
#[case(Some("   "), "a@b.c", 1, vec![], "owner", "WhiteSpaceString")]
#[case(Some(" Ada"), "a@b.c", 1, vec![], "owner", "NotTrimmed")]
#[case(Some("A"), "a@b.c", 1, vec![], "owner", "StringLength")]
#[case(Some("Ada"), "ada.example.com", 1, vec![], "email", "Substring")]
#[case(Some("Ada"), "a@b.c", 4, vec![], "tier", "OutOfRange")]
#[case(Some("Ada"), "a@b.c", 1, vec!["a".into(), "b".into(), "c".into(), "d".into()], "tags", "CollectionCount")]
#[case(Some("Ada"), "a@b.c", 1, vec!["banned".into()], "tags", "ExistingItem")]
fn test_first_violation_is_reported(
    #[case] owner: Option<&str>,
    #[case] email: &str,
    #[case] tier: u8,
    #[case] tags: Vec<String>,
    #[case] parameter: &str,
    #[case] category: &str,
) {
    let err = open_account(owner, email, tier, tags).unwrap_err();
    assert_eq!(err.parameter(), Some(parameter));
    assert_eq!(err.category(), category);
    assert!(
        err.to_string().starts_with(parameter),
        "message should name the parameter: {err}"
    );
}

#[test]
fn test_custom_message_applies_to_every_following_guard() {
    let name = "x";
    let err = arg!(name)
        .with_message("Names need at least three characters.")
        .must_not_be_empty()
        .and_then(|a| a.must_be_longer_than_or_equal_to(3))
        .unwrap_err();
    assert!(matches!(err, GuardError::StringLength { .. }));
    assert_eq!(err.to_string(), "Names need at least three characters.");
    assert_eq!(err.parameter(), Some("name"));
}

#[test]
fn test_unnamed_arguments_use_generic_subject() {
    let err = Argument::new(-3).must_be_greater_than(0).unwrap_err();
    assert_eq!(err.parameter(), None);
    assert_eq!(
        err.to_string(),
        "The value must be greater than 0, but it actually is -3."
    );
}

#[derive(Debug, PartialEq)]
enum SettingsError {
    Missing(&'static str),
    TooLarge { limit: usize, actual: usize },
}

#[test]
fn test_custom_error_factories() {
    let cache_size: Option<usize> = None;
    let err = arg!(cache_size)
        .must_be_some_or_else(|| SettingsError::Missing("cache_size"))
        .unwrap_err();
    assert_eq!(err, SettingsError::Missing("cache_size"));

    let cache_size = 4096_usize;
    let err = arg!(cache_size)
        .ensure(
            |size| *size <= 1024,
            |size| SettingsError::TooLarge { limit: 1024, actual: *size },
        )
        .unwrap_err();
    assert_eq!(err, SettingsError::TooLarge { limit: 1024, actual: 4096 });
}

#[test]
fn test_guard_error_converts_into_boxed_error() {
    fn parse_port(port: i64) -> std::result::Result<u16, Box<dyn std::error::Error>> {
        let port = arg!(port).must_be_in(&Range::inclusive_between(1, 65535))?.into_inner();
        Ok(u16::try_from(port)?)
    }

    assert_eq!(parse_port(443).unwrap(), 443);
    let err = parse_port(70000).unwrap_err();
    assert!(err.downcast_ref::<GuardError>().is_some());
}

#[test]
fn test_option_and_map_guards_compose() {
    let mut limits = HashMap::new();
    limits.insert("cpu", 4);
    let key = "cpu";

    let limit = arg!(limits.get(key), "limits[cpu]")
        .must_be_some()
        .and_then(|a| a.map(|v| *v).must_be_less_than_or_equal_to(8))
        .unwrap()
        .into_inner();
    assert_eq!(limit, 4);

    let err = arg!(limits.get("mem"), "limits[mem]").must_be_some().unwrap_err();
    assert_eq!(err.to_string(), "limits[mem] must not be None.");
}

#[test]
fn test_free_checks() {
    let started = false;
    let err = check::invalid_state(!started, "The scheduler has not been started.").unwrap_err();
    assert_eq!(err.category(), "InvalidState");

    let threads = check::must_not_be_none(Some(8), "threads").unwrap();
    assert_eq!(threads, 8);
}

#[test]
fn test_range_hash_code_matches_combinator() {
    let range = Range::inclusive_between(3, 9);
    let expected = warden::hash::MultiplyAddHasher::new()
        .combine(&3)
        .combine(&true)
        .combine(&9)
        .combine(&true)
        .finish();
    assert_eq!(range.hash_code(), expected);
    assert_ne!(create_hash_code([3, 9]), create_hash_code([9, 3]));
}

#[cfg(feature = "regex")]
#[test]
fn test_email_guards_through_prelude() {
    let contact = "ops@example.org";
    assert!(arg!(contact).must_be_email_address().is_ok());

    let contact = "ops at example.org";
    let err = arg!(contact).must_be_email_address().unwrap_err();
    assert_eq!(err.category(), "InvalidEmailAddress");
    assert_eq!(
        err.to_string(),
        "contact must be a valid email address, but it actually is \"ops at example.org\"."
    );
}
