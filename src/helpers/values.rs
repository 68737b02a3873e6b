//! Key/value-preserving primitive transforms.
//!
//! These are pure pull-through wrappers: each pulled pair is transformed or
//! dropped on the spot, and nothing is buffered.
//!
//! ## Provided methods
//! - [`map`](Sequence::map), [`map_keys`](Sequence::map_keys),
//!   [`map_key_value`](Sequence::map_key_value) -- rewrite values, keys or both
//! - [`filter`](Sequence::filter), [`filter_keys`](Sequence::filter_keys) --
//!   keep pairs matching a predicate
//! - [`values`](Sequence::values), [`keys`](Sequence::keys) -- drop one side
//! - [`flip`](Sequence::flip), [`reindex`](Sequence::reindex) -- derive new keys
//! - [`compact`](Sequence::compact) -- drop `None` values
//!
//! ## Example
//! ```
//! use seqflow::*;
//!
//! let kv = from_map(vec![("a", 1u32), ("b", 5), ("c", 8)]);
//!
//! let out = kv
//!     .map(|v| v * 2)
//!     .filter(|v| *v > 5)
//!     .map_keys(str::to_uppercase)
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(out, vec![("B".to_string(), 10), ("C".to_string(), 16)]);
//! ```

use crate::sequence::{
    CompactOp, FilterKeysOp, FilterOp, FlipOp, InspectOp, KeyedMap, KeysOp, MapKeyValueOp,
    MapKeysOp, MapOnOp, MapOp, ReindexOp, ValuesOp,
};
use crate::Sequence;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Transform each value, keeping its key.
    pub fn map<U, F>(self, f: F) -> Sequence<MapOp<I, F>>
    where
        F: FnMut(V) -> U,
    {
        Sequence::new(MapOp { iter: self.iter, f })
    }

    /// Transform each key, keeping its value.
    pub fn map_keys<J, F>(self, f: F) -> Sequence<MapKeysOp<I, F>>
    where
        F: FnMut(K) -> J,
    {
        Sequence::new(MapKeysOp { iter: self.iter, f })
    }

    /// Replace each pair with `f((key, value))`.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let out = from_map(vec![("a", 1), ("b", 2)])
    ///     .map_key_value(|(k, v)| (v, k.repeat(v)))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(out, vec![(1, "a".to_string()), (2, "bb".to_string())]);
    /// ```
    pub fn map_key_value<J, U, F>(self, f: F) -> Sequence<MapKeyValueOp<I, F>>
    where
        F: FnMut((K, V)) -> (J, U),
    {
        Sequence::new(MapKeyValueOp { iter: self.iter, f })
    }

    /// Keep only pairs whose value satisfies `pred`.
    pub fn filter<P>(self, pred: P) -> Sequence<FilterOp<I, P>>
    where
        P: FnMut(&V) -> bool,
    {
        Sequence::new(FilterOp {
            iter: self.iter,
            pred,
        })
    }

    /// Keep only pairs whose key satisfies `pred`.
    pub fn filter_keys<P>(self, pred: P) -> Sequence<FilterKeysOp<I, P>>
    where
        P: FnMut(&K) -> bool,
    {
        Sequence::new(FilterKeysOp {
            iter: self.iter,
            pred,
        })
    }

    /// Keep only pairs whose key is one of `keys`.
    pub fn within<S>(self, keys: S) -> Sequence<FilterKeysOp<I, impl FnMut(&K) -> bool>>
    where
        S: IntoIterator<Item = K>,
        K: Eq + Hash,
    {
        let set: HashSet<K> = keys.into_iter().collect();
        self.filter_keys(move |k| set.contains(k))
    }

    /// Drop pairs whose key is one of `keys`.
    pub fn without<S>(self, keys: S) -> Sequence<FilterKeysOp<I, impl FnMut(&K) -> bool>>
    where
        S: IntoIterator<Item = K>,
        K: Eq + Hash,
    {
        let set: HashSet<K> = keys.into_iter().collect();
        self.filter_keys(move |k| !set.contains(k))
    }

    /// Discard keys; values are re-keyed by position starting at 0.
    pub fn values(self) -> Sequence<ValuesOp<I>> {
        Sequence::new(ValuesOp {
            iter: self.iter,
            pos: 0,
        })
    }

    /// Discard values; keys become the values, keyed by position.
    pub fn keys(self) -> Sequence<KeysOp<I>> {
        Sequence::new(KeysOp {
            iter: self.iter,
            pos: 0,
        })
    }

    /// Swap keys and values.
    ///
    /// Nothing is validated here. Values that cannot serve as keys only fail
    /// once a keyed terminal such as
    /// [`to_json_object`](Sequence::to_json_object) tries to use them.
    pub fn flip(self) -> Sequence<FlipOp<I>> {
        Sequence::new(FlipOp { iter: self.iter })
    }

    /// Recompute each key as `f(&value)`.
    ///
    /// Duplicate computed keys are emitted as-is. Materializing with
    /// [`to_keyed`](Sequence::to_keyed) lets the last one win.
    pub fn reindex<J, F>(self, f: F) -> Sequence<ReindexOp<I, F>>
    where
        F: FnMut(&V) -> J,
    {
        Sequence::new(ReindexOp { iter: self.iter, f })
    }

    /// Apply the transform registered under a pair's key; other pairs pass
    /// through untouched.
    ///
    /// ```
    /// use seqflow::*;
    /// use std::collections::HashMap;
    ///
    /// let mut maps: HashMap<&str, KeyedMap<'_, i32>> = HashMap::new();
    /// maps.insert("b", Box::new(|v| v * 100));
    ///
    /// let out = from_map(vec![("a", 1), ("b", 2)]).map_on(maps).to_vec();
    /// assert_eq!(out, vec![1, 200]);
    /// ```
    pub fn map_on<'a>(self, maps: HashMap<K, KeyedMap<'a, V>>) -> Sequence<MapOnOp<'a, I, K, V>>
    where
        K: Eq + Hash,
    {
        Sequence::new(MapOnOp {
            iter: self.iter,
            maps,
        })
    }

    /// Observe every pair as it is pulled.
    pub fn inspect_pairs<F>(self, f: F) -> Sequence<InspectOp<I, F>>
    where
        F: FnMut(&K, &V),
    {
        Sequence::new(InspectOp { iter: self.iter, f })
    }
}

impl<K, T, I> Sequence<I>
where
    I: Iterator<Item = (K, Option<T>)>,
{
    /// Drop pairs whose value is `None`; the remaining pairs keep their keys.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let out = from_vec(vec![Some(1), None, Some(3)]).compact().collect::<Vec<_>>();
    /// assert_eq!(out, vec![(0, 1), (2, 3)]);
    /// ```
    pub fn compact(self) -> Sequence<CompactOp<I>> {
        Sequence::new(CompactOp { iter: self.iter })
    }
}
