//! Ready-made sources for tests: an instrumented unbounded counter and a
//! nested JSON document.

use crate::helpers::from_iter;
use crate::Sequence;
use serde_json::{json, Value};
use std::cell::Cell;
use std::iter::{Enumerate, Fuse, RepeatWith};
use std::rc::Rc;

/// Shared view of how many values a [`counting_from`] source has produced.
///
/// Clones observe the same counter, so a test can keep one while the source
/// moves into a pipeline.
#[derive(Clone, Debug, Default)]
pub struct PullCounter(Rc<Cell<usize>>);

impl PullCounter {
    /// Number of values pulled so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Source type returned by [`counting_from`].
pub type CountingSource = Sequence<Enumerate<Fuse<RepeatWith<Box<dyn FnMut() -> u64>>>>>;

/// An unbounded source yielding `start, start + 1, ...` keyed by position,
/// plus a counter of how many values were pulled from it.
///
/// ```
/// use seqflow::testing::counting_from;
///
/// let (source, pulls) = counting_from(10);
/// assert_eq!(source.take(3).to_vec(), vec![10, 11, 12]);
/// assert_eq!(pulls.get(), 3);
/// ```
#[must_use]
pub fn counting_from(start: u64) -> (CountingSource, PullCounter) {
    let counter = PullCounter::default();
    let seen = counter.clone();
    let mut next = start;
    let produce: Box<dyn FnMut() -> u64> = Box::new(move || {
        seen.bump();
        let v = next;
        next = next.wrapping_add(1);
        v
    });
    (from_iter(std::iter::repeat_with(produce)), counter)
}

/// A small document mixing arrays, objects and scalars at several depths.
///
/// Fully flattened, it yields `1, 2, 3, "x", 4, 5, true` in that order.
#[must_use]
pub fn sample_nested_json() -> Value {
    json!([
        1,
        [2, 3],
        {"name": "x", "inner": [4, [5]]},
        true
    ])
}
