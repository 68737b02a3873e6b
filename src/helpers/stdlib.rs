//! Standard library adapters for constructing [`Sequence`]s.
//!
//! These helpers turn native Rust data into sequences of `(key, value)` pairs.
//! The source shape is fixed at compile time, so no dispatch happens per pull.
//! For values whose shape is only known at runtime, see [`Source`](crate::Source).
//!
//! ### Overview
//! - [`from_vec`] -- indexed collection, keyed by position.
//! - [`from_map`] -- keyed collection, in the collection's own order.
//! - [`from_chars`] -- characters of a string, keyed by character index.
//! - [`from_pairs_iter`] -- an iterator that already yields pairs, unchanged.
//! - [`from_iter`] -- any enumerable, keyed by position.
//!
//! ### Example
//! ```
//! use seqflow::*;
//! use std::collections::BTreeMap;
//!
//! let words = from_vec(vec!["alpha", "beta"]);
//! assert_eq!(words.collect::<Vec<_>>(), vec![(0, "alpha"), (1, "beta")]);
//!
//! let scores = BTreeMap::from([("bob", 2), ("ann", 1)]);
//! assert_eq!(from_map(scores).keys().to_vec(), vec!["ann", "bob"]);
//!
//! assert_eq!(from_chars("héllo").take(2).to_vec(), vec!['h', 'é']);
//! ```

use crate::Sequence;
use std::iter::{Enumerate, Fuse};
use std::str::Chars;

/// Create a [`Sequence`] from a [`Vec<V>`], keyed by index.
pub fn from_vec<V>(data: Vec<V>) -> Sequence<Enumerate<std::vec::IntoIter<V>>> {
    Sequence::new(data.into_iter().enumerate())
}

/// Create a [`Sequence`] from a keyed collection.
///
/// Accepts anything that iterates as `(key, value)`: `HashMap`, `BTreeMap`,
/// `IndexMap`, or a plain `Vec` of pairs. Pairs come out in the collection's
/// native enumeration order.
pub fn from_map<K, V, M>(map: M) -> Sequence<Fuse<M::IntoIter>>
where
    M: IntoIterator<Item = (K, V)>,
{
    Sequence::new(map.into_iter().fuse())
}

/// Create a [`Sequence`] over the characters of `s`, keyed by character
/// position (not byte offset).
pub fn from_chars(s: &str) -> Sequence<Enumerate<Chars<'_>>> {
    Sequence::new(s.chars().enumerate())
}

/// Wrap an iterator that already produces `(key, value)` pairs.
///
/// Nothing is pulled until the sequence is. The iterator is fused: after the
/// first `None`, it is never polled again.
pub fn from_pairs_iter<K, V, I>(iter: I) -> Sequence<Fuse<I>>
where
    I: Iterator<Item = (K, V)>,
{
    Sequence::new(iter.fuse())
}

/// Create a [`Sequence`] from any enumerable, keyed by position.
///
/// ```
/// use seqflow::*;
///
/// let squares = from_iter((1..).map(|n: u32| n * n)).take(3).to_vec();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn from_iter<V, I>(iter: I) -> Sequence<Enumerate<Fuse<I::IntoIter>>>
where
    I: IntoIterator<Item = V>,
{
    Sequence::new(iter.into_iter().fuse().enumerate())
}
