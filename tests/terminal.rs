//! Terminal consumers.

use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;
use serde_json::json;

#[test]
fn reduce_folds_left() -> Result<()> {
    let s = from_vec(vec!["a", "b", "c"]).reduce(String::new(), |acc, v| acc + v);
    assert_eq!(s, "abc");

    let weighted = from_map(vec![(2, 10), (3, 100)]).reduce_key_value(0, |acc, (k, v)| acc + k * v);
    assert_eq!(weighted, 320);
    Ok(())
}

#[test]
fn to_keyed_overwrites_in_place() -> Result<()> {
    let m = from_map(vec![("a", 1), ("b", 2), ("a", 3)]).to_keyed();
    assert_eq!(m.into_iter().collect::<Vec<_>>(), vec![("a", 3), ("b", 2)]);
    Ok(())
}

#[test]
fn to_json_object_round_trips_a_document() -> Result<()> {
    let doc = json!({"name": "seq", "tags": ["a", "b"]});
    let obj = from_json(doc.clone())?.to_json_object()?;
    assert_eq!(serde_json::Value::Object(obj), doc);

    let numbered = from_vec(vec![true, false]).to_json_object()?;
    assert_eq!(serde_json::Value::Object(numbered), json!({"0": true, "1": false}));
    Ok(())
}

#[test]
fn short_circuiting_consumers_stop_early() -> Result<()> {
    let (source, pulls) = counting_from(0);
    assert!(source.any(|v| *v == 3));
    assert_eq!(pulls.get(), 4);

    let (source, pulls) = counting_from(0);
    assert!(!source.all(|v| *v < 2));
    assert_eq!(pulls.get(), 3);

    let (source, pulls) = counting_from(5);
    assert_eq!(source.head(), Some(5));
    assert_eq!(pulls.get(), 1);
    Ok(())
}

#[test]
fn all_and_any_on_empty() -> Result<()> {
    assert!(from_vec(Vec::<i32>::new()).all(|_| false));
    assert!(!from_vec(Vec::<i32>::new()).any(|_| true));
    Ok(())
}

#[test]
fn search_and_index_of() -> Result<()> {
    let src = || from_map(vec![("a", 1), ("b", 20), ("c", 30)]);
    assert_eq!(src().search(|v| *v > 10), Some(20));
    assert_eq!(src().index_of(|v| *v > 10), Some("b"));
    assert_eq!(src().index_of(|v| *v > 100), None);
    assert_eq!(from_vec(Vec::<u8>::new()).head(), None);
    Ok(())
}

#[test]
fn partition_with_boolean_predicate() -> Result<()> {
    let parts = from_vec(vec![1, 2, 3, 4, 5]).partition(|v| *v > 2, 2)?;
    assert_eq!(parts, vec![vec![1, 2], vec![3, 4, 5]]);
    Ok(())
}

#[test]
fn partition_with_explicit_bucket_numbers() -> Result<()> {
    let parts = from_vec(vec![1, 2, 3, 4]).partition(|v| if v % 2 == 0 { 0 } else { 1 }, 2)?;
    assert_eq!(parts, vec![vec![2, 4], vec![1, 3]]);

    let three = from_vec(vec![5]).partition(|_| 2usize, 3)?;
    assert_eq!(three, vec![vec![], vec![], vec![5]]);
    Ok(())
}

#[test]
fn partition_rejects_buckets_out_of_range() -> Result<()> {
    assert!(from_vec(vec![1]).partition(|_| 2u8, 2).is_err());
    assert!(from_vec(vec![1]).partition(|_| true, 0).is_err());
    Ok(())
}

#[test]
fn sort_from_array_orders_by_position() -> Result<()> {
    let rows = vec![("med", 2), ("low", 1), ("high", 3), ("low", 9)];
    let out = from_vec(rows.clone()).sort_from_array(|(name, _)| *name, &["high", "med", "low"])?;
    assert_eq!(out, vec![("high", 3), ("med", 2), ("low", 9)]);

    let err = from_vec(rows).sort_from_array(|(name, _)| *name, &["high"]).unwrap_err();
    match err {
        SeqError::KeyNotInOrdering { key } => assert_eq!(key, "med"),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn each_join_and_map_accum() -> Result<()> {
    let mut seen = Vec::new();
    from_vec(vec![3, 1]).each(|v| seen.push(v));
    assert_eq!(seen, vec![3, 1]);

    assert_eq!(from_vec(vec!["a", "b", "c"]).join(", "), "a, b, c");
    assert_eq!(from_vec(Vec::<String>::new()).join("-"), "");

    let (count, labelled) = from_vec(vec!["x", "y"]).map_accum(0, |n, v| (n + 1, format!("{n}:{v}")));
    assert_eq!(count, 2);
    assert_collections_equal(&labelled, &["0:x".to_string(), "1:y".to_string()]);
    Ok(())
}
