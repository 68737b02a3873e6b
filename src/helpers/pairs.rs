//! Operators that reshape whole pairs: `flat_map`, `to_pairs`, `from_pairs`.

use crate::Sequence;

/// Expands each value into the pairs returned by `f`, adopting their keys.
pub struct FlatMapOp<I, F, R: IntoIterator> {
    iter: I,
    f: F,
    inner: Option<R::IntoIter>,
}

impl<K, V, K2, V2, I, F, R> Iterator for FlatMapOp<I, F, R>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(V) -> R,
    R: IntoIterator<Item = (K2, V2)>,
{
    type Item = (K2, V2);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.next() {
                    Some(pair) => return Some(pair),
                    None => self.inner = None,
                }
            }
            let (_, v) = self.iter.next()?;
            self.inner = Some((self.f)(v).into_iter());
        }
    }
}

/// Wraps each pair as a value, keyed by position.
#[derive(Clone, Debug)]
pub struct ToPairsOp<I> {
    iter: I,
    pos: usize,
}

impl<K, V, I> Iterator for ToPairsOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, (K, V));

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.iter.next()?;
        let pos = self.pos;
        self.pos += 1;
        Some((pos, pair))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Unwraps pair-valued pairs, discarding the outer key.
#[derive(Clone, Debug)]
pub struct FromPairsOp<I> {
    iter: I,
}

impl<K, K2, V2, I> Iterator for FromPairsOp<I>
where
    I: Iterator<Item = (K, (K2, V2))>,
{
    type Item = (K2, V2);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, pair)| pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Replace every value with the pairs `f(value)` returns.
    ///
    /// The outer key is dropped; the returned keys are used as-is.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// let out = from_vec(vec![2, 3])
    ///     .flat_map(|n| (0..n).map(move |i| (format!("{n}.{i}"), i)))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(out[2], ("3.0".to_string(), 0));
    /// assert_eq!(out.len(), 5);
    /// ```
    pub fn flat_map<R, F>(self, f: F) -> Sequence<FlatMapOp<I, F, R>>
    where
        F: FnMut(V) -> R,
        R: IntoIterator,
    {
        Sequence::new(FlatMapOp {
            iter: self.iter,
            f,
            inner: None,
        })
    }

    /// Turn each `(key, value)` into `(position, (key, value))`.
    pub fn to_pairs(self) -> Sequence<ToPairsOp<I>> {
        Sequence::new(ToPairsOp {
            iter: self.iter,
            pos: 0,
        })
    }
}

impl<K, K2, V2, I> Sequence<I>
where
    I: Iterator<Item = (K, (K2, V2))>,
{
    /// Inverse of [`to_pairs`](Sequence::to_pairs): values that are pairs
    /// become the pairs of the output.
    pub fn from_pairs(self) -> Sequence<FromPairsOp<I>> {
        Sequence::new(FromPairsOp { iter: self.iter })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn flat_map_skips_empty_expansions() {
        let out = from_vec(vec![0, 2, 0, 1])
            .flat_map(|n| vec![(n, n); n])
            .collect::<Vec<_>>();
        assert_eq!(out, vec![(2, 2), (2, 2), (1, 1)]);
    }

    #[test]
    fn to_pairs_then_from_pairs_restores_keys() {
        let out = from_map(vec![("x", 1), ("y", 2)])
            .to_pairs()
            .from_pairs()
            .collect::<Vec<_>>();
        assert_eq!(out, vec![("x", 1), ("y", 2)]);
    }
}
