//! Source adapters: typed constructors and the dynamic JSON entry point.

use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn indexed_collection_is_keyed_by_position() -> Result<()> {
    let out = from_vec(vec!["a", "b", "c"]).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(0, "a"), (1, "b"), (2, "c")]);
    Ok(())
}

#[test]
fn keyed_collection_keeps_native_order() -> Result<()> {
    let map = BTreeMap::from([("z", 26), ("a", 1), ("m", 13)]);
    let out = from_map(map).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[("a", 1), ("m", 13), ("z", 26)]);

    let pairs = vec![("second", 2), ("first", 1)];
    assert_eq!(from_map(pairs).keys().to_vec(), vec!["second", "first"]);
    Ok(())
}

#[test]
fn characters_are_keyed_by_character_index() -> Result<()> {
    let out = from_chars("día").collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(0, 'd'), (1, 'í'), (2, 'a')]);
    Ok(())
}

#[test]
fn pair_iterators_pass_through_unchanged() -> Result<()> {
    let pairs = vec![("x", 1), ("x", 2), ("y", 3)];
    let out = from_pairs_iter(pairs.clone().into_iter()).collect::<Vec<_>>();
    assert_eq!(out, pairs);
    Ok(())
}

#[test]
fn adapters_are_lazy() -> Result<()> {
    let (source, pulls) = counting_from(0);
    let seq = source.map(|v| v + 1);
    assert_eq!(pulls.get(), 0);
    drop(seq);
    assert_eq!(pulls.get(), 0);
    Ok(())
}

#[test]
fn json_object_enumerates_in_insertion_order() -> Result<()> {
    let out = from_json(json!({"b": 1, "a": 2, "c": 3}))?.collect::<Vec<_>>();
    assert_pairs_equal(
        &out,
        &[
            (Key::from("b"), json!(1)),
            (Key::from("a"), json!(2)),
            (Key::from("c"), json!(3)),
        ],
    );
    Ok(())
}

#[test]
fn json_array_and_string_sources() -> Result<()> {
    let arr = from_json(json!([true, null]))?.collect::<Vec<_>>();
    assert_pairs_equal(&arr, &[(Key::Index(0), json!(true)), (Key::Index(1), json!(null))]);

    let chars = from_json(json!("ab"))?.values().to_vec();
    assert_eq!(chars, vec![json!("a"), json!("b")]);
    Ok(())
}

#[test]
fn scalars_are_not_sources() -> Result<()> {
    for value in [json!(null), json!(false), json!(3)] {
        let err = from_json(value).map(|s| s.count()).unwrap_err();
        assert!(matches!(err, SeqError::UnsupportedSource { .. }), "{err}");
    }
    Ok(())
}

#[test]
fn source_variants_build_directly() -> Result<()> {
    let keyed: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(r#"{"k": [1, 2]}"#)?;
    let out = iter(Source::from(keyed)).collect::<Vec<_>>();
    assert_eq!(out, vec![(Key::from("k"), json!([1, 2]))]);

    let indexed = iter(Source::from(vec![json!(1), json!(2)])).keys().to_vec();
    assert_eq!(indexed, vec![Key::Index(0), Key::Index(1)]);
    Ok(())
}

#[test]
fn positional_from_iter_over_any_enumerable() -> Result<()> {
    let out = from_iter("a-b-c".split('-')).collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(0, "a"), (1, "b"), (2, "c")]);
    Ok(())
}
