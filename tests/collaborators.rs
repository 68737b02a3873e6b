//! Path utilities, composition, handler stacks and retry.

use anyhow::Result;
use seqflow::compose::{compose_all, pipe_all, Stack};
use seqflow::path::{has_index_in, index_in, set_index_in, update_index_in};
use seqflow::retry::{retry, RetryPolicy};
use seqflow::{compose, pipe, Key, SeqError};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn index_in_walks_arrays_and_objects() -> Result<()> {
    let data = json!({"a": [{"b": 1}, {"b": 2}]});
    let path = [Key::from("a"), Key::Index(1), Key::from("b")];
    assert_eq!(index_in(&path, &data), Some(&json!(2)));
    assert!(has_index_in(&path, &data));

    assert_eq!(index_in(&[Key::from("a"), Key::Index(5)], &data), None);
    assert!(!has_index_in(&[Key::from("a"), Key::from("b")], &data));
    assert_eq!(index_in(&[], &data), Some(&data));
    Ok(())
}

#[test]
fn null_values_are_present() -> Result<()> {
    let data = json!({"a": null});
    assert_eq!(index_in(&[Key::from("a")], &data), Some(&json!(null)));
    assert!(has_index_in(&[Key::from("a")], &data));
    Ok(())
}

#[test]
fn update_index_in_passes_current_value() -> Result<()> {
    let data = json!({"counts": {"x": 1}});
    let data = update_index_in(&[Key::from("counts"), Key::from("x")], data, |v| {
        json!(v.and_then(|v| v.as_i64()).unwrap_or(0) + 1)
    })?;
    let data = update_index_in(&[Key::from("counts"), Key::from("y")], data, |v| {
        assert!(v.is_none());
        json!(1)
    })?;
    assert_eq!(data, json!({"counts": {"x": 2, "y": 1}}));
    Ok(())
}

#[test]
fn update_index_in_requires_intermediate_segments() -> Result<()> {
    let err = set_index_in(&[Key::from("missing"), Key::from("x")], json!(1), json!({})).unwrap_err();
    match err {
        SeqError::PathNotFound { path } => assert_eq!(path, "missing -> x"),
        other => panic!("unexpected error: {other}"),
    }

    let err = set_index_in(&[], json!(1), json!({})).unwrap_err();
    assert!(matches!(err, SeqError::InvalidArgument { .. }));
    Ok(())
}

#[test]
fn set_index_in_arrays() -> Result<()> {
    let data = set_index_in(&[Key::Index(1)], json!("b"), json!(["a", "x"]))?;
    assert_eq!(data, json!(["a", "b"]));

    let data = set_index_in(&[Key::Index(2)], json!("c"), data)?;
    assert_eq!(data, json!(["a", "b", "c"]));

    assert!(set_index_in(&[Key::Index(9)], json!("z"), data).is_err());
    Ok(())
}

#[test]
fn pipe_and_compose_order() -> Result<()> {
    let add_then_double = pipe!(|x: i32| x + 1, |x: i32| x * 2);
    let double_then_add = compose!(|x: i32| x + 1, |x: i32| x * 2);
    assert_eq!(add_then_double(5), 12);
    assert_eq!(double_then_add(5), 11);

    let to_len = pipe!(|s: String| s.len());
    assert_eq!(to_len("abc".to_string()), 3);
    Ok(())
}

#[test]
fn runtime_composition() -> Result<()> {
    let fns: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 3)];
    assert_eq!(pipe_all(fns)(1), 6);

    let fns: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 3)];
    assert_eq!(compose_all(fns)(1), 4);

    let identity = pipe_all(Vec::<fn(i32) -> i32>::new());
    assert_eq!(identity(7), 7);
    Ok(())
}

#[test]
fn stack_runs_last_pushed_first() -> Result<()> {
    let order = Rc::new(Cell::new(0));
    let mut stack = Stack::<u32, String>::new().with_last(|n| Ok(format!("fallback {n}")));

    let seen = order.clone();
    stack.push(move |n, next| {
        seen.set(seen.get() * 10 + 1);
        next.run(n)
    });
    let seen = order.clone();
    stack.push(move |n, next| {
        seen.set(seen.get() * 10 + 2);
        if n == 0 { Ok("zero".into()) } else { next.run(n + 1) }
    });

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.run(4)?, "fallback 5");
    assert_eq!(order.get(), 21);
    assert_eq!(stack.run(0)?, "zero");
    Ok(())
}

#[test]
fn empty_stack_has_no_handler() -> Result<()> {
    let stack = Stack::<(), ()>::new();
    let err = stack.run(()).unwrap_err();
    assert!(matches!(err.downcast_ref::<SeqError>(), Some(SeqError::NoHandler)));
    Ok(())
}

#[test]
fn retry_policies() -> Result<()> {
    let attempts = Cell::new(0);
    let flaky = |attempt: u32| {
        attempts.set(attempts.get() + 1);
        if attempt < 3 { anyhow::bail!("attempt {attempt}") } else { Ok(attempt) }
    };

    assert_eq!(retry(flaky, true)?, 3);
    assert_eq!(attempts.get(), 4);

    attempts.set(0);
    let err = retry(flaky, 1u32).unwrap_err();
    assert_eq!(err.to_string(), "attempt 1");
    assert_eq!(attempts.get(), 2);

    attempts.set(0);
    assert!(retry(flaky, false).is_err());
    assert_eq!(attempts.get(), 1);

    attempts.set(0);
    let value = retry(flaky, RetryPolicy::when(|retries, _| retries < 10))?;
    assert_eq!(value, 3);
    Ok(())
}
