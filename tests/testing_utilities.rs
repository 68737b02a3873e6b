//! Integration tests for the testing utilities and configuration.

use anyhow::Result;
use seqflow::testing::*;
use seqflow::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("seqflow=trace"))
        .with_test_writer()
        .try_init();
}

#[test]
fn debug_points_pass_pairs_through() -> Result<()> {
    init_tracing();
    let out = from_vec((1..=25).collect::<Vec<_>>())
        .debug_inspect("source")
        .filter(|v| v % 5 == 0)
        .debug_count("multiples of five")
        .debug_sample(2, "first two")
        .collect::<Vec<_>>();
    assert_pairs_equal(&out, &[(4, 5), (9, 10), (14, 15), (19, 20), (24, 25)]);
    Ok(())
}

#[test]
fn debug_inspect_with_sees_every_value() -> Result<()> {
    init_tracing();
    let mut total = 0;
    let out = from_vec(vec![1, 2, 3])
        .debug_inspect_with("sum", |v| total += v)
        .to_vec();
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(total, 6);
    Ok(())
}

#[test]
fn counting_source_tracks_pulls() -> Result<()> {
    let (source, pulls) = counting_from(3);
    let observer = pulls.clone();
    let mut seq = source.map(|v| v * 2);
    assert_eq!(seq.pull(), Some((0, 6)));
    assert_eq!(seq.pull(), Some((1, 8)));
    assert_eq!(observer.get(), 2);
    assert_eq!(pulls.get(), 2);
    Ok(())
}

#[test]
fn nested_fixture_shape() -> Result<()> {
    let doc = sample_nested_json();
    assert!(doc.is_array());
    assert_eq!(from_json(doc)?.flatten().count(), 7);
    Ok(())
}

#[test]
fn assertions_accept_matching_output() -> Result<()> {
    let out = from_vec(vec![2, 4, 6]).to_vec();
    assert_collections_equal(&out, &[2, 4, 6]);
    assert_all(&out, |v| v % 2 == 0);
    assert_any(&out, |v| *v > 5);
    assert_none(&out, |v| *v > 6);
    Ok(())
}

#[test]
#[should_panic(expected = "Collection mismatch at index 1")]
fn assertions_report_first_difference() {
    assert_collections_equal(&[1, 2, 3], &[1, 5, 3]);
}

#[test]
#[should_panic(expected = "Key mismatch at position 0")]
fn pair_assertion_reports_keys() {
    assert_pairs_equal(&[("a", 1)], &[("b", 1)]);
}

#[test]
fn limits_load_from_json() -> Result<()> {
    assert_eq!(Limits::from_json_str("{}")?, Limits::default());
    assert_eq!(
        Limits::from_json_str(r#"{"max_buffered": null}"#)?,
        Limits::unbounded()
    );
    assert!(Limits::from_json_str("{\"max_buffered\": -1}").is_err());
    Ok(())
}

#[test]
#[should_panic(expected = "Value at position 2 fails the predicate: 5")]
fn assert_all_names_the_failing_position() {
    let out = from_vec(vec![2, 4, 5, 6]).to_vec();
    assert_all(&out, |v| v % 2 == 0);
}

#[test]
#[should_panic(expected = "Value at position 1 unexpectedly matches")]
fn assert_none_names_the_matching_position() {
    assert_none(&[1, 7, 9], |v| *v > 5);
}
