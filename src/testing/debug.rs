//! Pass-through debug points for inspecting sequences during tests.
//!
//! Each point emits `tracing` events under the `seqflow::debug` target and
//! forwards pairs unchanged. Install a subscriber (for example
//! `tracing_subscriber::fmt`) to see the output.

use crate::Sequence;
use std::fmt::Debug;

/// Logs up to `limit` pairs, then a summary once the upstream ends.
pub struct DebugInspectOp<I, F> {
    iter: I,
    label: String,
    inspector: F,
    limit: usize,
    seen: usize,
    reported: bool,
}

impl<K, V, I, F> Iterator for DebugInspectOp<I, F>
where
    I: Iterator<Item = (K, V)>,
    K: Debug,
    V: Debug,
    F: FnMut(&V),
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let Some((k, v)) = self.iter.next() else {
            if !self.reported && self.seen > self.limit {
                self.reported = true;
                tracing::debug!(
                    target: "seqflow::debug",
                    label = %self.label,
                    "... ({} more pairs)",
                    self.seen - self.limit
                );
            }
            return None;
        };
        (self.inspector)(&v);
        if self.seen < self.limit {
            tracing::debug!(target: "seqflow::debug", label = %self.label, index = self.seen, ?k, ?v);
        }
        self.seen += 1;
        Some((k, v))
    }
}

/// Counts pairs and logs the total once the upstream ends.
pub struct DebugCountOp<I> {
    iter: I,
    label: String,
    seen: usize,
    reported: bool,
}

impl<I: Iterator> Iterator for DebugCountOp<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some(item) => {
                self.seen += 1;
                Some(item)
            }
            None => {
                if !self.reported {
                    self.reported = true;
                    tracing::debug!(target: "seqflow::debug", label = %self.label, count = self.seen);
                }
                None
            }
        }
    }
}

/// Debug points for any [`Sequence`].
///
/// ```
/// use seqflow::*;
/// use seqflow::testing::SequenceDebugExt;
///
/// let out = from_vec(vec![1, 2, 3, 4])
///     .debug_inspect("source")
///     .filter(|v| v % 2 == 0)
///     .debug_count("after filter")
///     .to_vec();
/// assert_eq!(out, vec![2, 4]);
/// ```
pub trait SequenceDebugExt<K, V>: Sized {
    type Iter: Iterator<Item = (K, V)>;

    /// Log the first ten pairs under `label`.
    fn debug_inspect(self, label: &str) -> Sequence<DebugInspectOp<Self::Iter, fn(&V)>>
    where
        K: Debug,
        V: Debug;

    /// Log the first ten pairs and run `inspector` on every value.
    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Sequence<DebugInspectOp<Self::Iter, F>>
    where
        K: Debug,
        V: Debug,
        F: FnMut(&V);

    /// Log how many pairs went past once the upstream ends.
    fn debug_count(self, label: &str) -> Sequence<DebugCountOp<Self::Iter>>;

    /// Log the first `n` pairs.
    fn debug_sample(self, n: usize, label: &str) -> Sequence<DebugInspectOp<Self::Iter, fn(&V)>>
    where
        K: Debug,
        V: Debug;
}

const INSPECT_LIMIT: usize = 10;

fn ignore<V>(_: &V) {}

impl<K, V, I> SequenceDebugExt<K, V> for Sequence<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Iter = I;

    fn debug_inspect(self, label: &str) -> Sequence<DebugInspectOp<I, fn(&V)>>
    where
        K: Debug,
        V: Debug,
    {
        self.debug_sample(INSPECT_LIMIT, label)
    }

    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Sequence<DebugInspectOp<I, F>>
    where
        K: Debug,
        V: Debug,
        F: FnMut(&V),
    {
        Sequence::new(DebugInspectOp {
            iter: self.iter,
            label: label.to_string(),
            inspector,
            limit: INSPECT_LIMIT,
            seen: 0,
            reported: false,
        })
    }

    fn debug_count(self, label: &str) -> Sequence<DebugCountOp<I>> {
        Sequence::new(DebugCountOp {
            iter: self.iter,
            label: label.to_string(),
            seen: 0,
            reported: false,
        })
    }

    fn debug_sample(self, n: usize, label: &str) -> Sequence<DebugInspectOp<I, fn(&V)>>
    where
        K: Debug,
        V: Debug,
    {
        Sequence::new(DebugInspectOp {
            iter: self.iter,
            label: label.to_string(),
            inspector: ignore::<V> as fn(&V),
            limit: n,
            seen: 0,
            reported: false,
        })
    }
}
