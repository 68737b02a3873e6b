//! Inclusive integer ranges as sequences.

use crate::error::{Result, SeqError};
use crate::Sequence;

/// State of an inclusive arithmetic progression.
#[derive(Clone, Debug)]
pub struct RangeOp {
    next: i64,
    end: i64,
    step: i64,
    emitted: usize,
    done: bool,
}

impl Iterator for RangeOp {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let in_bounds = if self.step > 0 {
            self.next <= self.end
        } else {
            self.next >= self.end
        };
        if !in_bounds {
            self.done = true;
            return None;
        }
        let value = self.next;
        match value.checked_add(self.step) {
            Some(n) => self.next = n,
            None => self.done = true,
        }
        let index = self.emitted;
        self.emitted += 1;
        Some((index, value))
    }
}

impl std::iter::FusedIterator for RangeOp {}

/// Produce `start, start + step, ...` up to and including `end`.
///
/// The direction follows the bounds: ascending ranges default to a step of
/// `1`, descending ones to `-1`. When `start == end` exactly one value is
/// produced whatever the step.
///
/// # Errors
/// [`SeqError::InvalidArgument`] when `step` points away from `end` or is `0`.
///
/// # Example
/// ```
/// use seqflow::range;
///
/// assert_eq!(range(0, 6, Some(2))?.to_vec(), vec![0, 2, 4, 6]);
/// assert_eq!(range(3, 1, None)?.to_vec(), vec![3, 2, 1]);
/// assert!(range(0, 5, Some(-1)).is_err());
/// # Ok::<(), seqflow::SeqError>(())
/// ```
pub fn range(start: i64, end: i64, step: Option<i64>) -> Result<Sequence<RangeOp>> {
    let step = if start == end {
        1
    } else if start < end {
        let step = step.unwrap_or(1);
        if step <= 0 {
            return Err(SeqError::invalid("step", "step must be greater than 0"));
        }
        step
    } else {
        let step = step.unwrap_or(-1);
        if step >= 0 {
            return Err(SeqError::invalid("step", "step must be less than 0"));
        }
        step
    };
    Ok(Sequence::new(RangeOp {
        next: start,
        end,
        step,
        emitted: 0,
        done: false,
    }))
}
