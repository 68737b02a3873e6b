//! Terminal consumers: the operations that drive a [`Sequence`] and return
//! something that is not a sequence.
//!
//! Consumers pull in order and stop as soon as their answer is known, so the
//! short-circuiting ones ([`all`](Sequence::all), [`any`](Sequence::any),
//! [`search`](Sequence::search), [`index_of`](Sequence::index_of),
//! [`head`](Sequence::head)) are safe on unbounded sources when a match exists.
//!
//! ```
//! use seqflow::*;
//!
//! let total = from_vec(vec![1, 2, 3]).reduce(0, |acc, v| acc + v);
//! assert_eq!(total, 6);
//!
//! let found = range(1, i64::MAX, None)?.search(|v| v * v > 50);
//! assert_eq!(found, Some(8));
//! # Ok::<(), SeqError>(())
//! ```

use crate::error::{Result, SeqError};
use crate::key::ObjectKey;
use crate::Sequence;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Values a [`partition`](Sequence::partition) callback may return.
///
/// `false`/`true` select buckets 0 and 1. Integers select their own value.
/// Floats are truncated toward zero. Negative or non-finite values select no
/// bucket at all.
pub trait BucketIndex {
    fn bucket_index(self) -> Option<usize>;
}

impl BucketIndex for bool {
    fn bucket_index(self) -> Option<usize> {
        Some(usize::from(self))
    }
}

impl BucketIndex for f64 {
    fn bucket_index(self) -> Option<usize> {
        let t = self.trunc();
        if t.is_finite() && t >= 0.0 && t <= usize::MAX as f64 {
            Some(t as usize)
        } else {
            None
        }
    }
}

macro_rules! int_bucket_index {
    ($($t:ty),*) => {$(
        impl BucketIndex for $t {
            fn bucket_index(self) -> Option<usize> {
                usize::try_from(self).ok()
            }
        }
    )*};
}
int_bucket_index!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Left fold over the values.
    pub fn reduce<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, V) -> A,
    {
        let mut f = f;
        self.iter.fold(seed, |acc, (_, v)| f(acc, v))
    }

    /// Left fold over whole pairs.
    pub fn reduce_key_value<A, F>(self, seed: A, f: F) -> A
    where
        F: FnMut(A, (K, V)) -> A,
    {
        self.iter.fold(seed, f)
    }

    /// Collect the values in order, discarding keys.
    pub fn to_vec(self) -> Vec<V> {
        self.iter.map(|(_, v)| v).collect()
    }

    /// Collect into an insertion-ordered map.
    ///
    /// A repeated key overwrites the earlier value but keeps the earlier
    /// position.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let m = from_vec(vec!["a", "bb", "cc"]).reindex(|v| v.len()).to_keyed();
    /// assert_eq!(m.into_iter().collect::<Vec<_>>(), vec![(1, "a"), (2, "cc")]);
    /// ```
    pub fn to_keyed(self) -> IndexMap<K, V>
    where
        K: Hash + Eq,
    {
        self.iter.collect()
    }

    /// Collect into a JSON object, converting keys with [`ObjectKey`] and
    /// values with serde.
    ///
    /// # Errors
    /// [`SeqError::InvalidKey`] for a key with no string form (for example a
    /// `flip`ped float), [`SeqError::Json`] when a value fails to serialize.
    pub fn to_json_object(self) -> Result<Map<String, Value>>
    where
        K: ObjectKey,
        V: Serialize,
    {
        let mut out = Map::new();
        for (k, v) in self.iter {
            out.insert(k.object_key()?, serde_json::to_value(v)?);
        }
        Ok(out)
    }

    /// `true` when every value satisfies `pred`; stops at the first failure.
    /// An empty sequence yields `true`.
    pub fn all<P>(self, pred: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        let mut pred = pred;
        let mut iter = self.iter;
        iter.all(|(_, v)| pred(&v))
    }

    /// `true` when some value satisfies `pred`; stops at the first match.
    pub fn any<P>(self, pred: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        let mut pred = pred;
        let mut iter = self.iter;
        iter.any(|(_, v)| pred(&v))
    }

    /// First value satisfying `pred`.
    pub fn search<P>(self, pred: P) -> Option<V>
    where
        P: FnMut(&V) -> bool,
    {
        let mut pred = pred;
        let mut iter = self.iter;
        iter.find_map(|(_, v)| pred(&v).then_some(v))
    }

    /// Key of the first value satisfying `pred`.
    pub fn index_of<P>(self, pred: P) -> Option<K>
    where
        P: FnMut(&V) -> bool,
    {
        let mut pred = pred;
        let mut iter = self.iter;
        iter.find_map(|(k, v)| pred(&v).then_some(k))
    }

    /// First value, pulling exactly one pair.
    pub fn head(self) -> Option<V> {
        let mut iter = self.iter;
        iter.next().map(|(_, v)| v)
    }

    /// Run `f` on every value.
    pub fn each<F>(self, f: F)
    where
        F: FnMut(V),
    {
        let mut f = f;
        self.iter.for_each(|(_, v)| f(v));
    }

    /// Distribute values into `parts` buckets chosen by `f`.
    ///
    /// Every bucket is present in the result, empty or not, and values keep
    /// their relative order inside a bucket. Keys are discarded.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] when `parts` is zero or `f` selects a
    /// bucket outside `0..parts`.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let [odd, even]: [Vec<i32>; 2] = from_vec(vec![1, 2, 3, 4])
    ///     .partition(|v| v % 2 == 0, 2)?
    ///     .try_into()
    ///     .expect("two buckets");
    /// assert_eq!((odd, even), (vec![1, 3], vec![2, 4]));
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn partition<B, F>(self, f: F, parts: usize) -> Result<Vec<Vec<V>>>
    where
        B: BucketIndex,
        F: FnMut(&V) -> B,
    {
        if parts == 0 {
            return Err(SeqError::invalid("parts", "partition needs at least one bucket"));
        }
        let mut f = f;
        let mut buckets: Vec<Vec<V>> = (0..parts).map(|_| Vec::new()).collect();
        for (_, v) in self.iter {
            let bucket = f(&v)
                .bucket_index()
                .and_then(|i| buckets.get_mut(i))
                .ok_or_else(|| {
                    SeqError::invalid("parts", format!("selected bucket is outside 0..{parts}"))
                })?;
            bucket.push(v);
        }
        Ok(buckets)
    }

    /// Order values by the position of `f(value)` in `ordered`.
    ///
    /// Values whose key appears more than once in the input collapse to the
    /// last one seen. Positions of `ordered` that no value maps to are absent
    /// from the output.
    ///
    /// # Errors
    /// [`SeqError::KeyNotInOrdering`] on the first value whose key is missing
    /// from `ordered`.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let out = from_vec(vec![("c", 3), ("a", 1), ("b", 2)])
    ///     .sort_from_array(|(name, _)| *name, &["a", "b", "c"])?;
    /// assert_eq!(out, vec![("a", 1), ("b", 2), ("c", 3)]);
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn sort_from_array<G, F>(self, f: F, ordered: &[G]) -> Result<Vec<V>>
    where
        G: Hash + Eq + Display,
        F: FnMut(&V) -> G,
    {
        let mut f = f;
        let positions: HashMap<&G, usize> = ordered.iter().enumerate().map(|(i, g)| (g, i)).collect();
        let mut slots: Vec<Option<V>> = (0..ordered.len()).map(|_| None).collect();
        for (_, v) in self.iter {
            let key = f(&v);
            let Some(&pos) = positions.get(&key) else {
                return Err(SeqError::KeyNotInOrdering {
                    key: key.to_string(),
                });
            };
            slots[pos] = Some(v);
        }
        Ok(slots.into_iter().flatten().collect())
    }

    /// Thread an accumulator through the values, collecting what `f` emits.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let (total, running) = from_vec(vec![1, 2, 3]).map_accum(0, |acc, v| (acc + v, acc + v));
    /// assert_eq!((total, running), (6, vec![1, 3, 6]));
    /// ```
    pub fn map_accum<A, U, F>(self, seed: A, f: F) -> (A, Vec<U>)
    where
        F: FnMut(A, V) -> (A, U),
    {
        let mut f = f;
        let mut acc = seed;
        let mut out = Vec::new();
        for (_, v) in self.iter {
            let (next, u) = f(acc, v);
            acc = next;
            out.push(u);
        }
        (acc, out)
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
    V: AsRef<str>,
{
    /// Concatenate string values with `sep` between them.
    pub fn join(self, sep: &str) -> String {
        let mut out = String::new();
        for (i, (_, v)) in self.iter.enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            out.push_str(v.as_ref());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn float_buckets_truncate() {
        let parts = from_vec(vec![0.2, 1.9, 2.5]).partition(|v| *v, 3).unwrap();
        assert_eq!(parts, vec![vec![0.2], vec![1.9], vec![2.5]]);
    }

    #[test]
    fn negative_bucket_is_rejected() {
        let err = from_vec(vec![1, 2]).partition(|_| -1, 2).unwrap_err();
        assert!(matches!(err, SeqError::InvalidArgument { name: "parts", .. }));
    }
}
