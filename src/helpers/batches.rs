//! Grouping operators for [`Sequence`].
//!
//! Provides two batching operators that collect consecutive values into
//! `Vec`s:
//!
//! - [`Sequence::chunk`] -- fixed-size groups; the trailing group may be short.
//! - [`Sequence::chunk_by`] (alias [`Sequence::group_by`]) -- groups that break
//!   whenever a computed key changes, optionally capped at a maximum size.
//!
//! Both emit `(group index, Vec<V>)` pairs, buffer at most one group at a
//! time, and always flush a non-empty trailing group when the upstream ends.

use crate::error::{Result, SeqError};
use crate::Sequence;

/// Fixed-size grouping state.
#[derive(Clone, Debug)]
pub struct ChunkOp<I> {
    iter: I,
    size: usize,
    emitted: usize,
    done: bool,
}

impl<K, V, I> Iterator for ChunkOp<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = (usize, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.iter.next() {
                Some((_, v)) => chunk.push(v),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            return None;
        }
        tracing::trace!(len = chunk.len(), "chunk flushed");
        let index = self.emitted;
        self.emitted += 1;
        Some((index, chunk))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        (lo.div_ceil(self.size), hi.map(|hi| hi.div_ceil(self.size)))
    }
}

/// Key-change grouping state.
///
/// `group_key` is the key computed for the most recent value; it is `None`
/// only while no group has been started.
#[derive(Clone)]
pub struct ChunkByOp<I, F, G, V> {
    iter: I,
    key_fn: F,
    max_size: Option<usize>,
    group: Vec<V>,
    group_key: Option<G>,
    emitted: usize,
    done: bool,
}

impl<K, V, G, I, F> Iterator for ChunkByOp<I, F, G, V>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(&V) -> G,
    G: PartialEq,
{
    type Item = (usize, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some((_, v)) = self.iter.next() {
            let key = (self.key_fn)(&v);
            let key_changed = self.group_key.as_ref().is_some_and(|g| *g != key);
            let full = self.max_size.is_some_and(|max| self.group.len() >= max);
            let flushed = if !self.group.is_empty() && (key_changed || full) {
                Some(std::mem::take(&mut self.group))
            } else {
                None
            };
            self.group.push(v);
            self.group_key = Some(key);
            if let Some(group) = flushed {
                return Some(self.emit(group));
            }
        }
        self.done = true;
        if self.group.is_empty() {
            None
        } else {
            let group = std::mem::take(&mut self.group);
            Some(self.emit(group))
        }
    }
}

impl<I, F, G, V> ChunkByOp<I, F, G, V> {
    fn emit(&mut self, group: Vec<V>) -> (usize, Vec<V>) {
        tracing::trace!(len = group.len(), "group flushed");
        let index = self.emitted;
        self.emitted += 1;
        (index, group)
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    /// Collect values into consecutive groups of `size`.
    ///
    /// The last group holds whatever remains and may be shorter. An empty
    /// upstream produces no groups.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] when `size` is zero.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let groups = from_vec(vec![1, 2, 3, 4, 5]).chunk(3)?.to_vec();
    /// assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5]]);
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn chunk(self, size: usize) -> Result<Sequence<ChunkOp<I>>> {
        if size == 0 {
            return Err(SeqError::invalid("size", "chunk size must be greater than 0"));
        }
        Ok(Sequence::new(ChunkOp {
            iter: self.iter,
            size,
            emitted: 0,
            done: false,
        }))
    }

    /// Group consecutive values sharing the same `key_fn` result.
    ///
    /// A new group starts when the key of the incoming value differs from the
    /// key of the previous one, or when the current group already holds
    /// `max_size` values.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`] when `max_size` is `Some(0)`.
    ///
    /// # Example
    /// ```
    /// use seqflow::*;
    ///
    /// let groups = from_vec(vec![1, 3, 2, 4, 5]).chunk_by(|x| x % 2, None)?.to_vec();
    /// assert_eq!(groups, vec![vec![1, 3], vec![2, 4], vec![5]]);
    /// # Ok::<(), SeqError>(())
    /// ```
    pub fn chunk_by<G, F>(
        self,
        key_fn: F,
        max_size: Option<usize>,
    ) -> Result<Sequence<ChunkByOp<I, F, G, V>>>
    where
        F: FnMut(&V) -> G,
        G: PartialEq,
    {
        if max_size == Some(0) {
            return Err(SeqError::invalid("max_size", "group size must be greater than 0"));
        }
        Ok(Sequence::new(ChunkByOp {
            iter: self.iter,
            key_fn,
            max_size,
            group: Vec::new(),
            group_key: None,
            emitted: 0,
            done: false,
        }))
    }

    /// Alias of [`chunk_by`](Sequence::chunk_by).
    ///
    /// # Errors
    /// Same as [`chunk_by`](Sequence::chunk_by).
    pub fn group_by<G, F>(
        self,
        key_fn: F,
        max_size: Option<usize>,
    ) -> Result<Sequence<ChunkByOp<I, F, G, V>>>
    where
        F: FnMut(&V) -> G,
        G: PartialEq,
    {
        self.chunk_by(key_fn, max_size)
    }
}
