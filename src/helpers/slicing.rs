//! Positional and predicate-driven slicing.
//!
//! All slicing operators stop pulling upstream as soon as their answer is
//! known, so they are safe to use on unbounded sources:
//!
//! ```
//! use seqflow::*;
//!
//! let naturals = from_iter(0u64..);
//! let window = naturals.slice(2, Some(3))?.to_vec();
//! assert_eq!(window, vec![2, 3, 4]);
//! # Ok::<(), SeqError>(())
//! ```

use crate::error::{Result, SeqError};
use crate::Sequence;

/// Emits the pairs whose running index falls in `[start, end)`.
#[derive(Clone, Debug)]
pub struct SliceOp<I> {
    iter: I,
    start: usize,
    /// Exclusive end index; `None` means unbounded.
    end: Option<usize>,
    index: usize,
    done: bool,
}

impl<I: Iterator> Iterator for SliceOp<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.end.is_some_and(|end| self.index >= end) {
                tracing::trace!(index = self.index, "slice reached its end");
                self.done = true;
                return None;
            }
            let Some(item) = self.iter.next() else {
                self.done = true;
                return None;
            };
            let index = self.index;
            self.index += 1;
            if index >= self.start {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        let skip = self.start.saturating_sub(self.index);
        let remaining = self.end.map(|end| end.saturating_sub(self.index.max(self.start)));
        let lo = lo.saturating_sub(skip);
        let hi = hi.map(|hi| hi.saturating_sub(skip));
        match remaining {
            Some(rem) => (lo.min(rem), Some(hi.map_or(rem, |hi| hi.min(rem)))),
            None => (lo, hi),
        }
    }
}

/// Emits pairs while the predicate holds, then stops for good.
#[derive(Clone)]
pub struct TakeWhileOp<I, P> {
    iter: I,
    pred: P,
    done: bool,
}

impl<K, V, I, P> Iterator for TakeWhileOp<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some((k, v)) if (self.pred)(&v) => Some((k, v)),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Skips the leading run of pairs satisfying the predicate.
#[derive(Clone)]
pub struct DropWhileOp<I, P> {
    iter: I,
    pred: P,
    dropping: bool,
}

impl<K, V, I, P> Iterator for DropWhileOp<I, P>
where
    I: Iterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.dropping {
            return self.iter.next();
        }
        loop {
            let (k, v) = self.iter.next()?;
            if !(self.pred)(&v) {
                self.dropping = false;
                return Some((k, v));
            }
        }
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Emit the pairs at positions `start .. start + length`, keys intact.
    ///
    /// `length: None` runs to the end of the upstream. Once the last position
    /// has been emitted the upstream is never pulled again, so a zero length
    /// pulls nothing at all.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] when `start` is negative.
    pub fn slice(self, start: isize, length: Option<usize>) -> Result<Sequence<SliceOp<I>>> {
        let start = usize::try_from(start)
            .map_err(|_| SeqError::invalid("start", format!("must be >= 0, got {start}")))?;
        Ok(self.slice_from(start, length))
    }

    /// First `n` pairs.
    pub fn take(self, n: usize) -> Sequence<SliceOp<I>> {
        self.slice_from(0, Some(n))
    }

    /// Everything after the first `n` pairs.
    pub fn drop(self, n: usize) -> Sequence<SliceOp<I>> {
        self.slice_from(n, None)
    }

    fn slice_from(self, start: usize, length: Option<usize>) -> Sequence<SliceOp<I>> {
        Sequence::new(SliceOp {
            iter: self.iter,
            start,
            end: length.map(|len| start.saturating_add(len)),
            index: 0,
            done: length == Some(0),
        })
    }

    /// Emit pairs while `pred` holds on their values. The first failing pair
    /// is consumed but not emitted, and nothing after it is pulled.
    pub fn take_while<P>(self, pred: P) -> Sequence<TakeWhileOp<I, P>>
    where
        P: FnMut(&V) -> bool,
    {
        Sequence::new(TakeWhileOp {
            iter: self.iter,
            pred,
            done: false,
        })
    }

    /// Skip the leading pairs whose values satisfy `pred`. After the first
    /// failure every pair is emitted and `pred` is not consulted again.
    pub fn drop_while<P>(self, pred: P) -> Sequence<DropWhileOp<I, P>>
    where
        P: FnMut(&V) -> bool,
    {
        Sequence::new(DropWhileOp {
            iter: self.iter,
            pred,
            dropping: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn size_hint_accounts_for_window() {
        let s = from_vec((0..10).collect::<Vec<_>>()).slice(2, Some(3)).unwrap();
        assert_eq!(s.size_hint(), (3, Some(3)));
        let s = from_vec((0..4).collect::<Vec<_>>()).slice(2, Some(5)).unwrap();
        assert_eq!(s.size_hint(), (2, Some(2)));
        let s = from_vec((0..4).collect::<Vec<_>>()).drop(1);
        assert_eq!(s.size_hint(), (3, Some(3)));
    }

    #[test]
    fn no_resurrection_after_end() {
        let mut s = from_vec(vec![1, 2, 3]).take(1);
        assert_eq!(s.pull(), Some((0, 1)));
        assert_eq!(s.pull(), None);
        assert_eq!(s.pull(), None);
    }
}
