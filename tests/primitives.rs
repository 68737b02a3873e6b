//! Key/value-preserving primitive transforms.

use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn map_keeps_keys() -> Result<()> {
    let out = from_map(vec![("a", 1), ("b", 2)]).map(|v| v * 10).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[("a", 10), ("b", 20)]);
    Ok(())
}

#[test]
fn map_keys_and_map_key_value() -> Result<()> {
    let keys = from_vec(vec!["x", "y"]).map_keys(|k| k * 100).collect::<Vec<_>>();
    assert_pairs_equal(&keys, &[(0, "x"), (100, "y")]);

    let both = from_map(vec![("a", 1)])
        .map_key_value(|(k, v)| (v, k.to_uppercase()))
        .collect::<Vec<_>>();
    assert_eq!(both, vec![(1, "A".to_string())]);
    Ok(())
}

#[test]
fn filter_and_filter_keys() -> Result<()> {
    let kept = from_vec(vec![5, 6, 7, 8]).filter(|v| v % 2 == 1).collect::<Vec<_>>();
    assert_pairs_equal(&kept, &[(0, 5), (2, 7)]);

    let by_key = from_vec(vec![5, 6, 7, 8]).filter_keys(|k| *k >= 2).collect::<Vec<_>>();
    assert_pairs_equal(&by_key, &[(2, 7), (3, 8)]);
    Ok(())
}

#[test]
fn filter_pulls_no_further_than_needed() -> Result<()> {
    let (source, pulls) = counting_from(0);
    let first_multiple_of_seven = source.filter(|v| *v > 0 && v % 7 == 0).head();
    assert_eq!(first_multiple_of_seven, Some(7));
    assert_eq!(pulls.get(), 8);
    Ok(())
}

#[test]
fn values_and_keys_are_renumbered() -> Result<()> {
    let src = || from_map(vec![("a", 'p'), ("b", 'q')]);
    assert_pairs_equal(&src().values().collect::<Vec<_>>(), &[(0, 'p'), (1, 'q')]);
    assert_pairs_equal(&src().keys().collect::<Vec<_>>(), &[(0, "a"), (1, "b")]);
    Ok(())
}

#[test]
fn flip_swaps_sides() -> Result<()> {
    let out = from_vec(vec!["zero", "one"]).flip().collect::<Vec<_>>();
    assert_pairs_equal(&out, &[("zero", 0), ("one", 1)]);
    Ok(())
}

#[test]
fn flipped_unusable_keys_fail_at_keyed_terminal() -> Result<()> {
    let err = from_json(json!({"a": 1.5}))?.flip().to_json_object().unwrap_err();
    assert!(matches!(err, SeqError::InvalidKey { .. }), "{err}");

    let ok = from_json(json!({"a": "b"}))?.flip().to_json_object()?;
    assert_eq!(serde_json::Value::Object(ok), json!({"b": "a"}));
    Ok(())
}

#[test]
fn compact_drops_none_and_keeps_keys() -> Result<()> {
    let out = from_vec(vec![Some(1), None, Some(3), None]).compact().collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(0, 1), (2, 3)]);
    Ok(())
}

#[test]
fn reindex_derives_keys_from_values() -> Result<()> {
    let out = from_vec(vec!["ann", "bo"]).reindex(|v| v.len()).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(3, "ann"), (2, "bo")]);

    let collapsed = from_vec(vec!["ab", "cd", "e"]).reindex(|v| v.len()).to_keyed();
    assert_eq!(collapsed.get(&2), Some(&"cd"));
    assert_eq!(collapsed.len(), 2);
    Ok(())
}

#[test]
fn map_on_transforms_selected_keys() -> Result<()> {
    let mut maps: HashMap<&str, KeyedMap<'_, i32>> = HashMap::new();
    maps.insert("price", Box::new(|v| v * 2));
    let out = from_map(vec![("price", 10), ("qty", 3)]).map_on(maps).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[("price", 20), ("qty", 3)]);
    Ok(())
}

#[test]
fn within_and_without_filter_by_key_membership() -> Result<()> {
    let src = || from_map(vec![("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(src().within(["a", "c"]).to_vec(), vec![1, 3]);
    assert_eq!(src().without(["a", "c"]).to_vec(), vec![2]);
    Ok(())
}

#[test]
fn flat_map_adopts_inner_keys() -> Result<()> {
    let out = from_vec(vec!["a=1,b=2", "c=3"])
        .flat_map(|s| {
            s.split(',')
                .filter_map(|kv| kv.split_once('='))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert_pairs_equal(&out, &[("a", "1"), ("b", "2"), ("c", "3")]);
    Ok(())
}

#[test]
fn to_pairs_exposes_keys_as_values() -> Result<()> {
    let out = from_map(vec![("k", 'v')]).to_pairs().collect::<Vec<_>>();
    assert_eq!(out, vec![(0, ("k", 'v'))]);
    Ok(())
}

#[test]
fn inspect_pairs_observes_without_changing() -> Result<()> {
    let mut seen = Vec::new();
    let out = from_vec(vec![1, 2])
        .inspect_pairs(|k, v| seen.push((*k, *v)))
        .to_vec();
    assert_eq!(out, vec![1, 2]);
    assert_eq!(seen, vec![(0, 1), (1, 2)]);
    Ok(())
}

/// Yields one pair, reports exhaustion, then yields again if polled.
struct Resuming(usize);

impl Iterator for Resuming {
    type Item = (usize, i32);

    fn next(&mut self) -> Option<Self::Item> {
        self.0 += 1;
        match self.0 {
            1 => Some((1, 1)),
            3 => Some((3, 3)),
            _ => None,
        }
    }
}

#[test]
fn exhausted_sequences_stay_exhausted() -> Result<()> {
    let mut mapped = from_pairs_iter(Resuming(0)).map(|v| v * 10);
    assert_eq!([mapped.pull(), mapped.pull(), mapped.pull()], [Some((1, 10)), None, None]);

    let mut filtered = from_pairs_iter(Resuming(0)).filter(|_| true);
    assert_eq!([filtered.pull(), filtered.pull(), filtered.pull()], [Some((1, 1)), None, None]);

    let mut dropping = from_pairs_iter(Resuming(0)).drop_while(|_| false);
    assert_eq!([dropping.pull(), dropping.pull(), dropping.pull()], [Some((1, 1)), None, None]);

    let mut positional = from_iter(Resuming(0).map(|(_, v)| v)).values();
    assert_eq!([positional.pull(), positional.pull(), positional.pull()], [Some((0, 1)), None, None]);
    Ok(())
}

#[test]
#[should_panic(expected = "bad value 3")]
fn callback_panics_reach_the_caller() {
    let _ = from_vec(vec![1, 2, 3, 4])
        .filter(|v| *v > 0)
        .map(|v| if v == 3 { panic!("bad value {v}") } else { v })
        .to_vec();
}

#[test]
fn first_callback_error_reaches_the_caller_unchanged() -> Result<()> {
    let mut seen = Vec::new();
    let out = from_vec(vec!["1", "2", "x", "4", "y"])
        .map(|s| s.parse::<i32>().map_err(|e| format!("{s}: {e}")))
        .inspect_pairs(|k, _| seen.push(*k))
        .map(|r| r.map(|n| n * 2))
        .into_inner()
        .map(|(_, r)| r)
        .collect::<std::result::Result<Vec<_>, _>>();
    assert_eq!(out, Err("x: invalid digit found in string".to_string()));
    assert_eq!(seen, vec![0, 1, 2]);
    Ok(())
}
