//! Assertion functions for checking what a sequence produced.
//!
//! Every assertion panics with both collections in the message, so a failing
//! test shows the whole output rather than the first differing element only.

use std::fmt::Debug;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use seqflow::*;
/// use seqflow::testing::assert_collections_equal;
///
/// let out = from_vec(vec![1, 2, 3]).map(|v| v * 2).to_vec();
/// assert_collections_equal(&out, &[2, 4, 6]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a sequence's pairs match `expected` in order, reporting
/// whether a key or a value diverged first.
///
/// # Panics
///
/// Panics if the pair lists differ in length, in any key, or in any value.
///
/// # Example
///
/// ```
/// use seqflow::*;
/// use seqflow::testing::assert_pairs_equal;
///
/// let out = from_map(vec![("a", 1), ("b", 2)]).flip().collect::<Vec<_>>();
/// assert_pairs_equal(&out, &[(1, "a"), (2, "b")]);
/// ```
pub fn assert_pairs_equal<K, V>(actual: &[(K, V)], expected: &[(K, V)])
where
    K: Debug + PartialEq,
    V: Debug + PartialEq,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Pair count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            ak, ek,
            "Key mismatch at position {i}:\n  Expected: {ek:?}\n  Actual: {ak:?}\n  Full actual: {actual:?}"
        );
        assert_eq!(
            av, ev,
            "Value mismatch for key {ak:?} at position {i}:\n  Expected: {ev:?}\n  Actual: {av:?}"
        );
    }
}

/// Assert that every value a sequence produced satisfies `predicate`.
///
/// # Panics
///
/// Panics at the first position whose value fails the predicate.
pub fn assert_all<T: Debug>(output: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some(pos) = output.iter().position(|v| !predicate(v)) {
        panic!(
            "Value at position {pos} fails the predicate: {:?}\n  Output: {output:?}",
            output[pos]
        );
    }
}

/// Assert that at least one value a sequence produced satisfies `predicate`.
///
/// # Panics
///
/// Panics if no value does, including when the output is empty.
pub fn assert_any<T: Debug>(output: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        output.iter().any(predicate),
        "No value satisfies the predicate ({} values checked)\n  Output: {output:?}",
        output.len()
    );
}

/// Assert that no value a sequence produced satisfies `predicate`.
///
/// # Panics
///
/// Panics at the first position whose value matches.
pub fn assert_none<T: Debug>(output: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some(pos) = output.iter().position(&predicate) {
        panic!(
            "Value at position {pos} unexpectedly matches: {:?}\n  Output: {output:?}",
            output[pos]
        );
    }
}
