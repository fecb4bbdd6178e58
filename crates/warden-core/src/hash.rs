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

//! # Multiply-Add Hashing
//!
//! A small, deterministic hash combinator that folds a sequence of values
//! into a single `i32`. Starting from `FIRST_PRIME`, every element hash is
//! mixed in with `hash = hash * SECOND_PRIME + element` using wrapping
//! arithmetic.
//!
//! Element hashes are computed with `rustc_hash::FxHasher`, which uses no
//! random seed. The combined hash of the same values is therefore identical
//! across runs of the same build, which makes it usable for snapshot tests
//! and diagnostic output. It is not a cryptographic hash, and it is not
//! stable across platforms with different pointer widths.
//!
//! ## Usage
//!
//! ```rust
//! use warden_core::hash::{MultiplyAddHasher, FIRST_PRIME};
//! use warden_core::multiply_add_hash;
//!
//! let a = MultiplyAddHasher::new().combine("port").combine(&8080_u16).finish();
//! let b = multiply_add_hash!("port", 8080_u16);
//! assert_eq!(a, b);
//!
//! assert_eq!(MultiplyAddHasher::new().finish(), FIRST_PRIME);
//! ```

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// The seed of every multiply-add hash.
pub const FIRST_PRIME: i32 = 1_322_837_333;

/// The multiplier applied to the running hash before each element is added.
pub const SECOND_PRIME: i32 = 266_467;

/// Computes the 32-bit element hash of `value`.
///
/// The 64-bit `FxHasher` output is folded by xoring its high and low halves.
///
/// # Examples
///
/// ```rust
/// # use warden_core::hash::hash_of;
///
/// assert_eq!(hash_of("abc"), hash_of("abc"));
/// assert_eq!(hash_of(&42_u64), hash_of(&42_u64));
/// ```
#[inline]
pub fn hash_of<T>(value: &T) -> i32
where
    T: Hash + ?Sized,
{
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let h = hasher.finish();
    ((h >> 32) ^ h) as u32 as i32
}

/// A builder that combines element hashes with the multiply-add scheme.
///
/// The builder is `Copy` and consumed by value, so partial hashes can be
/// forked cheaply.
///
/// # Examples
///
/// ```rust
/// # use warden_core::hash::MultiplyAddHasher;
///
/// let prefix = MultiplyAddHasher::new().combine(&1);
/// let left = prefix.combine(&2).finish();
/// let right = prefix.combine(&3).finish();
/// assert_ne!(left, right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a hasher does nothing unless `finish` is called"]
pub struct MultiplyAddHasher {
    hash: i32,
}

impl MultiplyAddHasher {
    /// Creates a new hasher seeded with `FIRST_PRIME`.
    #[inline]
    pub const fn new() -> Self {
        Self { hash: FIRST_PRIME }
    }

    /// Mixes an already computed element hash into the running hash.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::hash::{MultiplyAddHasher, FIRST_PRIME, SECOND_PRIME};
    ///
    /// let h = MultiplyAddHasher::new().combine_raw(7).finish();
    /// assert_eq!(h, FIRST_PRIME.wrapping_mul(SECOND_PRIME).wrapping_add(7));
    /// ```
    #[inline]
    pub const fn combine_raw(self, element_hash: i32) -> Self {
        Self {
            hash: self
                .hash
                .wrapping_mul(SECOND_PRIME)
                .wrapping_add(element_hash),
        }
    }

    /// Mixes the hash of `value` into the running hash.
    #[inline]
    pub fn combine<T>(self, value: &T) -> Self
    where
        T: Hash + ?Sized,
    {
        self.combine_raw(hash_of(value))
    }

    /// Mixes an optional value into the running hash, where `None` contributes `0`.
    ///
    /// Note that this differs from `combine(&Some(v))`, which hashes the
    /// `Option` itself including its discriminant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use warden_core::hash::MultiplyAddHasher;
    ///
    /// let none = MultiplyAddHasher::new().combine_optional::<i32>(None).finish();
    /// let zero = MultiplyAddHasher::new().combine_raw(0).finish();
    /// assert_eq!(none, zero);
    /// ```
    #[inline]
    pub fn combine_optional<T>(self, value: Option<&T>) -> Self
    where
        T: Hash + ?Sized,
    {
        self.combine_raw(value.map_or(0, hash_of))
    }

    /// Mixes every element of `values` into the running hash, in iteration order.
    #[inline]
    pub fn combine_all<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Hash,
    {
        values
            .into_iter()
            .fold(self, |hasher, value| hasher.combine(&value))
    }

    /// Returns the combined hash.
    #[inline]
    pub const fn finish(self) -> i32 {
        self.hash
    }
}

impl Default for MultiplyAddHasher {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Combines all `values` into a single multiply-add hash.
///
/// An empty sequence yields `FIRST_PRIME`.
///
/// # Examples
///
/// ```rust
/// # use warden_core::hash::{create_hash_code, FIRST_PRIME};
///
/// assert_eq!(create_hash_code(Vec::<u8>::new()), FIRST_PRIME);
/// assert_eq!(create_hash_code(["a", "b"]), create_hash_code(vec!["a", "b"]));
/// ```
#[inline]
pub fn create_hash_code<I>(values: I) -> i32
where
    I: IntoIterator,
    I::Item: Hash,
{
    MultiplyAddHasher::new().combine_all(values).finish()
}

/// Combines a heterogeneous list of values into a single multiply-add hash.
///
/// Every argument must implement `Hash`; arguments are hashed by reference.
///
/// # Examples
///
/// ```rust
/// # use warden_core::multiply_add_hash;
/// # use warden_core::hash::MultiplyAddHasher;
///
/// let h = multiply_add_hash!(1_u8, "two", 3.0_f64.to_bits());
/// let expected = MultiplyAddHasher::new()
///     .combine(&1_u8)
///     .combine("two")
///     .combine(&3.0_f64.to_bits())
///     .finish();
/// assert_eq!(h, expected);
/// ```
#[macro_export]
macro_rules! multiply_add_hash {
    ($($value:expr),* $(,)?) => {
        $crate::hash::MultiplyAddHasher::new()$(.combine(&$value))*.finish()
    };
}
