//! Padding a sequence up to a minimum length.

use crate::Sequence;

/// Passes values through, then tops the output up with a fill value.
#[derive(Clone, Debug)]
pub struct PadOp<I, V> {
    iter: I,
    size: usize,
    fill: V,
    emitted: usize,
    exhausted: bool,
}

impl<K, V, I> Iterator for PadOp<I, V>
where
    I: Iterator<Item = (K, V)>,
    V: Clone,
{
    type Item = (usize, V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.exhausted {
            match self.iter.next() {
                Some((_, v)) => {
                    let index = self.emitted;
                    self.emitted += 1;
                    return Some((index, v));
                }
                None => self.exhausted = true,
            }
        }
        if self.emitted < self.size {
            let index = self.emitted;
            self.emitted += 1;
            Some((index, self.fill.clone()))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let missing = self.size.saturating_sub(self.emitted);
        if self.exhausted {
            return (missing, Some(missing));
        }
        let (lo, hi) = self.iter.size_hint();
        (lo.max(missing), hi.map(|hi| hi.max(missing)))
    }
}

impl<K, V, I> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
    V: Clone,
{
    /// Emit every value, then append copies of `fill` until at least `size`
    /// values have been produced. Longer inputs are never truncated.
    ///
    /// Keys are replaced by positions.
    ///
    /// ```
    /// use seqflow::*;
    ///
    /// assert_eq!(from_vec(vec![1, 2]).pad(5, 0).to_vec(), vec![1, 2, 0, 0, 0]);
    /// assert_eq!(from_vec(vec![1, 2, 3]).pad(2, 0).to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn pad(self, size: usize, fill: V) -> Sequence<PadOp<I, V>> {
        Sequence::new(PadOp {
            iter: self.iter,
            size,
            fill,
            emitted: 0,
            exhausted: false,
        })
    }
}
