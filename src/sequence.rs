//! The [`Sequence`] type and its stateless, key/value-preserving operators.
//!
//! A `Sequence<I>` wraps any iterator of `(key, value)` pairs. Every combinator
//! consumes the sequence and returns a new one wrapping an explicit operator
//! state machine; nothing is evaluated until a consumer pulls.
//!
//! The operators in this file hold O(1) state per pair. Windowing and
//! multi-source operators live next to the methods that build them under
//! `helpers/`.

use std::collections::HashMap;
use std::hash::Hash;
use std::iter::FusedIterator;

/// A lazy, ordered stream of `(key, value)` pairs.
///
/// `Sequence` is itself an [`Iterator`], so it can be pulled manually with
/// [`next`](Iterator::next) or [`pull`](Sequence::pull), driven by a `for`
/// loop, or drained by one of the terminal consumers.
///
/// ```
/// use seqflow::*;
///
/// let evens = from_vec(vec![1, 2, 3, 4])
///     .filter(|v| v % 2 == 0)
///     .map(|v| v * 10);
/// assert_eq!(evens.collect::<Vec<_>>(), vec![(1, 20), (3, 40)]);
/// ```
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless pulled"]
pub struct Sequence<I> {
    pub(crate) iter: I,
}

/// A type-erased pair iterator, produced by [`Sequence::boxed`].
pub type BoxedPairs<'a, K, V> = Box<dyn Iterator<Item = (K, V)> + 'a>;

impl<I> Sequence<I> {
    /// Wrap an iterator that already yields `(key, value)` pairs.
    ///
    /// The stateless operators forward `None` as they see it, so `iter` must
    /// not resume after returning `None`. Use [`from_pairs_iter`](crate::from_pairs_iter)
    /// to fuse an arbitrary iterator first.
    #[inline]
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Unwrap the underlying operator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterator for Sequence<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Sequence<I> {}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Pull the next pair, or `None` once the sequence is exhausted.
    #[inline]
    pub fn pull(&mut self) -> Option<(K, V)> {
        self.iter.next()
    }

    /// Erase the operator type so sequences built differently can be chained
    /// or zipped together.
    pub fn boxed<'a>(self) -> Sequence<BoxedPairs<'a, K, V>>
    where
        I: 'a,
    {
        Sequence::new(Box::new(self.iter))
    }
}

// ---- Stateless operators ----

/// Replaces each value with `f(value)`.
#[derive(Clone)]
pub struct MapOp<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}
impl<K, V, U, I, F> Iterator for MapOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(V) -> U,
{
    type Item = (K, U);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        Some((k, (self.f)(v)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Replaces each key with `f(key)`.
#[derive(Clone)]
pub struct MapKeysOp<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}
impl<K, V, J, I, F> Iterator for MapKeysOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(K) -> J,
{
    type Item = (J, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        Some(((self.f)(k), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Replaces the whole pair with `f((key, value))`.
#[derive(Clone)]
pub struct MapKeyValueOp<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}
impl<K, V, J, U, I, F> Iterator for MapKeyValueOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut((K, V)) -> (J, U),
{
    type Item = (J, U);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Keeps pairs whose value satisfies the predicate.
#[derive(Clone)]
pub struct FilterOp<I, P> {
    pub(crate) iter: I,
    pub(crate) pred: P,
}
impl<K, V, I, P> Iterator for FilterOp<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (k, v) = self.iter.next()?;
            if (self.pred)(&v) {
                return Some((k, v));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Keeps pairs whose key satisfies the predicate.
#[derive(Clone)]
pub struct FilterKeysOp<I, P> {
    pub(crate) iter: I,
    pub(crate) pred: P,
}
impl<K, V, I, P> Iterator for FilterKeysOp<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (k, v) = self.iter.next()?;
            if (self.pred)(&k) {
                return Some((k, v));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Drops keys, re-keying values by position.
#[derive(Clone)]
pub struct ValuesOp<I> {
    pub(crate) iter: I,
    pub(crate) pos: usize,
}
impl<K, V, I> Iterator for ValuesOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, v) = self.iter.next()?;
        let pos = self.pos;
        self.pos += 1;
        Some((pos, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Drops values, emitting the keys as values keyed by position.
#[derive(Clone)]
pub struct KeysOp<I> {
    pub(crate) iter: I,
    pub(crate) pos: usize,
}
impl<K, V, I> Iterator for KeysOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, K);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (k, _) = self.iter.next()?;
        let pos = self.pos;
        self.pos += 1;
        Some((pos, k))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Swaps keys and values.
#[derive(Clone)]
pub struct FlipOp<I> {
    pub(crate) iter: I,
}
impl<K, V, I> Iterator for FlipOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (V, K);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        Some((v, k))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Drops pairs whose value is `None`, unwrapping the rest.
#[derive(Clone)]
pub struct CompactOp<I> {
    pub(crate) iter: I,
}
impl<K, T, I> Iterator for CompactOp<I>
where
    I: Iterator<Item = (K, Option<T>)>,
{
    type Item = (K, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let (k, Some(v)) = self.iter.next()? {
                return Some((k, v));
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Recomputes each key from its value.
#[derive(Clone)]
pub struct ReindexOp<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}
impl<K, V, J, I, F> Iterator for ReindexOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&V) -> J,
{
    type Item = (J, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, v) = self.iter.next()?;
        Some(((self.f)(&v), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Per-key value transform used by [`Sequence::map_on`].
pub type KeyedMap<'a, V> = Box<dyn FnMut(V) -> V + 'a>;

/// Applies the transform registered for a pair's key, if any.
pub struct MapOnOp<'a, I, K, V> {
    pub(crate) iter: I,
    pub(crate) maps: HashMap<K, KeyedMap<'a, V>>,
}
impl<K, V, I> Iterator for MapOnOp<'_, I, K, V>
where
    I: Iterator<Item = (K, V)>,
    K: Eq + Hash,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        let v = match self.maps.get_mut(&k) {
            Some(f) => f(v),
            None => v,
        };
        Some((k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Calls an observer for each pair without altering it.
#[derive(Clone)]
pub struct InspectOp<I, F> {
    pub(crate) iter: I,
    pub(crate) f: F,
}
impl<K, V, I, F> Iterator for InspectOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&K, &V),
{
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.iter.next()?;
        (self.f)(&k, &v);
        Some((k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
