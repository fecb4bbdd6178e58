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

//! # Collection Guards
//!
//! Count and membership guards for the standard collections.
//!
//! The guards are defined over the `Collection` trait, which abstracts the
//! two operations they need: the number of items and item lookup. It is
//! implemented for `Vec`, `VecDeque`, slices, arrays, `HashSet`, `BTreeSet`,
//! the keys of `HashMap` and `BTreeMap`, and for references to any of them.

use crate::{Argument, Result, raise};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    fmt::Debug,
    hash::{BuildHasher, Hash},
};

/// A collection with a known number of items that supports lookup.
pub trait Collection {
    /// The type used for lookups. For maps this is the key type.
    type Item;

    /// Returns the number of items.
    fn count(&self) -> usize;

    /// Returns `true` if `item` is part of the collection.
    fn contains_item(&self, item: &Self::Item) -> bool;
}

macro_rules! impl_sequence_collection {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T> Collection for $ty<T>
            where
                T: PartialEq,
            {
                type Item = T;

                #[inline]
                fn count(&self) -> usize {
                    self.len()
                }

                #[inline]
                fn contains_item(&self, item: &T) -> bool {
                    self.contains(item)
                }
            }
        )*
    };
}

impl_sequence_collection!(Vec, VecDeque);

impl<T> Collection for [T]
where
    T: PartialEq,
{
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T, const N: usize> Collection for [T; N]
where
    T: PartialEq,
{
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        N
    }

    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T, S> Collection for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<T> Collection for BTreeSet<T>
where
    T: Ord,
{
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains_item(&self, item: &T) -> bool {
        self.contains(item)
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = K;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains_item(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> Collection for BTreeMap<K, V>
where
    K: Ord,
{
    type Item = K;

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn contains_item(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<C> Collection for &C
where
    C: Collection + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }

    #[inline]
    fn contains_item(&self, item: &Self::Item) -> bool {
        (**self).contains_item(item)
    }
}

/// Guards for values implementing `Collection`.
///
/// # Examples
///
/// ```rust
/// use warden::prelude::*;
///
/// let hosts = vec!["a.example", "b.example"];
/// let hosts = arg!(hosts)
///     .must_have_min_count(2)?
///     .must_not_contain_item(&"localhost")?
///     .into_inner();
/// assert_eq!(hosts.len(), 2);
///
/// let ports: &[u16] = &[];
/// let err = arg!(ports).must_not_be_empty().unwrap_err();
/// assert!(matches!(err, GuardError::EmptyCollection { .. }));
/// # Ok::<(), GuardError>(())
/// ```
pub trait CollectionGuards: Sized {
    /// The collection's item type.
    type Item;

    /// Fails with `EmptyCollection` if the collection has no items.
    fn must_not_be_empty(self) -> Result<Self>;

    /// Fails with `CollectionCount` unless the collection has exactly `count` items.
    fn must_have_count(self, count: usize) -> Result<Self>;

    /// Fails with `CollectionCount` unless the collection has at least `count` items.
    fn must_have_min_count(self, count: usize) -> Result<Self>;

    /// Fails with `CollectionCount` unless the collection has at most `count` items.
    fn must_have_max_count(self, count: usize) -> Result<Self>;

    /// Fails with `MissingItem` unless the collection contains `item`.
    fn must_contain_item(self, item: &Self::Item) -> Result<Self>
    where
        Self::Item: Debug;

    /// Fails with `ExistingItem` if the collection contains `item`.
    fn must_not_contain_item(self, item: &Self::Item) -> Result<Self>
    where
        Self::Item: Debug;
}

impl<C> Argument<'_, C>
where
    C: Collection,
{
    #[inline]
    fn check_count(self, holds: bool, bound: &str, count: usize) -> Result<Self> {
        if holds {
            return Ok(self);
        }
        Err(raise::collection_count(
            self.context(),
            &format_args!("contain {} {} {}", bound, count, raise::items(count)),
            self.value.count(),
        ))
    }
}

impl<C> CollectionGuards for Argument<'_, C>
where
    C: Collection,
{
    type Item = C::Item;

    #[inline]
    fn must_not_be_empty(self) -> Result<Self> {
        if self.value.count() == 0 {
            return Err(raise::empty_collection(self.context()));
        }
        Ok(self)
    }

    fn must_have_count(self, count: usize) -> Result<Self> {
        let holds = self.value.count() == count;
        self.check_count(holds, "exactly", count)
    }

    fn must_have_min_count(self, count: usize) -> Result<Self> {
        let holds = self.value.count() >= count;
        self.check_count(holds, "at least", count)
    }

    fn must_have_max_count(self, count: usize) -> Result<Self> {
        let holds = self.value.count() <= count;
        self.check_count(holds, "at most", count)
    }

    fn must_contain_item(self, item: &Self::Item) -> Result<Self>
    where
        Self::Item: Debug,
    {
        if self.value.contains_item(item) {
            return Ok(self);
        }
        Err(raise::missing_item(
            self.context(),
            &format_args!("contain {:?}", item),
        ))
    }

    fn must_not_contain_item(self, item: &Self::Item) -> Result<Self>
    where
        Self::Item: Debug,
    {
        if !self.value.contains_item(item) {
            return Ok(self);
        }
        Err(raise::existing_item(
            self.context(),
            &format_args!("not contain {:?}", item),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GuardError;
    use rstest::rstest;

    #[test]
    fn test_collection_impls() {
        let v = vec![1, 2, 3];
        assert_eq!(v.count(), 3);
        assert!(v.contains_item(&2));
        assert_eq!([1, 2].count(), 2);
        assert_eq!(v.as_slice().count(), 3);

        let d: VecDeque<_> = v.iter().copied().collect();
        assert!(d.contains_item(&3));

        let s: HashSet<_> = ["a", "b"].into_iter().collect();
        assert!(s.contains_item(&"a"));
        let b: BTreeSet<_> = [1, 2].into_iter().collect();
        assert!(!b.contains_item(&9));

        let m: HashMap<_, _> = [("k", 1)].into_iter().collect();
        assert!(m.contains_item(&"k"));
        let bm: BTreeMap<_, _> = [(1, "v")].into_iter().collect();
        assert_eq!((&bm).count(), 1);
    }

    #[test]
    fn test_must_not_be_empty() {
        assert!(Argument::named(vec![1], "v").must_not_be_empty().is_ok());

        let err = Argument::named(Vec::<i32>::new(), "v").must_not_be_empty().unwrap_err();
        assert!(matches!(err, GuardError::EmptyCollection { .. }));
        assert_eq!(err.to_string(), "v must not be an empty collection.");
    }

    #[rstest]
    #[case(2, true, true, true)]
    #[case(1, false, true, false)]
    #[case(3, false, false, true)]
    fn test_count_guards(
        #[case] count: usize,
        #[case] exact: bool,
        #[case] min: bool,
        #[case] max: bool,
    ) {
        let items = [10, 20];
        assert_eq!(Argument::named(&items, "xs").must_have_count(count).is_ok(), exact);
        assert_eq!(Argument::named(&items, "xs").must_have_min_count(count).is_ok(), min);
        assert_eq!(Argument::named(&items, "xs").must_have_max_count(count).is_ok(), max);
    }

    #[test]
    fn test_count_message() {
        let err = Argument::named(vec!['a'], "xs").must_have_min_count(2).unwrap_err();
        assert!(matches!(err, GuardError::CollectionCount { .. }));
        assert_eq!(
            err.to_string(),
            "xs must contain at least 2 items, but it actually contains 1 item."
        );
    }

    #[test]
    fn test_membership() {
        let set: BTreeSet<_> = ["read", "write"].into_iter().collect();
        assert!(Argument::named(&set, "scopes").must_contain_item(&"read").is_ok());

        let err = Argument::named(&set, "scopes").must_contain_item(&"admin").unwrap_err();
        assert!(matches!(err, GuardError::MissingItem { .. }));
        assert_eq!(err.to_string(), "scopes must contain \"admin\".");

        let err = Argument::named(set, "scopes").must_not_contain_item(&"write").unwrap_err();
        assert!(matches!(err, GuardError::ExistingItem { .. }));
    }

    #[test]
    fn test_map_membership_uses_keys() {
        let mut env = HashMap::new();
        env.insert("HOME", "/root");
        assert!(Argument::named(&env, "env").must_contain_item(&"HOME").is_ok());
        assert!(Argument::named(&env, "env").must_contain_item(&"/root").is_err());
    }
}
