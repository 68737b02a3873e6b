//! Depth-bounded flattening of nested values.
//!
//! Expansion is driven by the [`Enumerable`] trait: a value that enumerates
//! into pairs is replaced by those pairs (adopting their keys), anything else
//! passes through with its original key. The depth bound comes from the
//! caller, not from the data, so structures nested deeper than the bound are
//! emitted as unexpanded values.
//!
//! ```
//! use seqflow::*;
//! use serde_json::json;
//!
//! let nested = from_json(json!([[1, 2], [3, [4, 5]]]))?;
//! let once = nested.flatten_levels(1).to_vec();
//! assert_eq!(once, vec![json!(1), json!(2), json!(3), json!([4, 5])]);
//! # Ok::<(), SeqError>(())
//! ```

use crate::source::Enumerable;
use crate::Sequence;

/// Explicit expansion stack: one entry per nested value currently being
/// drained, with the number of levels it may still expand (`None` = no bound).
pub struct FlattenOp<I, V: Enumerable> {
    iter: I,
    levels: Option<usize>,
    stack: Vec<(V::Entries, Option<usize>)>,
}

impl<I, V> Iterator for FlattenOp<I, V>
where
    I: Iterator<Item = (V::Key, V)>,
    V: Enumerable,
{
    type Item = (V::Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ((k, v), remaining) = if let Some((entries, remaining)) = self.stack.last_mut() {
                let remaining = *remaining;
                match entries.next() {
                    Some(pair) => (pair, remaining),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            } else {
                (self.iter.next()?, self.levels)
            };

            if remaining == Some(0) {
                return Some((k, v));
            }
            match v.into_entries() {
                Ok(entries) => self.stack.push((entries, remaining.map(|r| r - 1))),
                Err(v) => return Some((k, v)),
            }
        }
    }
}

impl<I, V> Sequence<I>
where
    I: Iterator<Item = (V::Key, V)>,
    V: Enumerable,
{
    /// Expand enumerable values recursively, without a depth bound.
    pub fn flatten(self) -> Sequence<FlattenOp<I, V>> {
        self.flatten_bounded(None)
    }

    /// Expand enumerable values at most `levels` deep. `0` passes every pair
    /// through unchanged.
    pub fn flatten_levels(self, levels: usize) -> Sequence<FlattenOp<I, V>> {
        self.flatten_bounded(Some(levels))
    }

    fn flatten_bounded(self, levels: Option<usize>) -> Sequence<FlattenOp<I, V>> {
        Sequence::new(FlattenOp {
            iter: self.iter,
            levels,
            stack: Vec::new(),
        })
    }
}
