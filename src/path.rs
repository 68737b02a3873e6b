//! Nested lookup and update over JSON values, addressed by a path of [`Key`]s.
//!
//! `Key::Index` addresses array elements; `Key::Name` addresses object
//! members. An index may also address an object member whose name is that
//! number written out, since JSON object keys are always strings.
//!
//! ```
//! use seqflow::path::{index_in, set_index_in};
//! use seqflow::Key;
//! use serde_json::json;
//!
//! let data = json!({"users": [{"name": "ann"}]});
//! let path = [Key::from("users"), Key::Index(0), Key::from("name")];
//! assert_eq!(index_in(&path, &data), Some(&json!("ann")));
//!
//! let data = set_index_in(&path, json!("bob"), data)?;
//! assert_eq!(data["users"][0]["name"], "bob");
//! # Ok::<(), seqflow::SeqError>(())
//! ```

use crate::error::{Result, SeqError};
use crate::key::Key;
use serde_json::Value;

fn child<'a>(data: &'a Value, key: &Key) -> Option<&'a Value> {
    match (data, key) {
        (Value::Array(items), Key::Index(i)) => items.get(*i),
        (Value::Object(map), key) => map.get(&key.to_string()),
        _ => None,
    }
}

fn child_mut<'a>(data: &'a mut Value, key: &Key) -> Option<&'a mut Value> {
    match (data, key) {
        (Value::Array(items), Key::Index(i)) => items.get_mut(*i),
        (Value::Object(map), key) => map.get_mut(&key.to_string()),
        _ => None,
    }
}

fn describe(path: &[Key]) -> String {
    path.iter().map(Key::to_string).collect::<Vec<_>>().join(" -> ")
}

/// Follow `path` into `data`. An empty path returns `data` itself.
pub fn index_in<'a>(path: &[Key], data: &'a Value) -> Option<&'a Value> {
    path.iter().try_fold(data, child)
}

/// Whether every segment of `path` resolves.
pub fn has_index_in(path: &[Key], data: &Value) -> bool {
    index_in(path, data).is_some()
}

/// Replace the value at `path` with `update(current)`.
///
/// Every segment but the last must already resolve to a container. The last
/// segment may be missing: `update` then receives `None` and its result is
/// inserted (for arrays, only directly after the last element).
///
/// # Errors
/// [`SeqError::InvalidArgument`] for an empty path, [`SeqError::PathNotFound`]
/// when an intermediate segment is missing or the final slot cannot be
/// created.
pub fn update_index_in<F>(path: &[Key], data: Value, update: F) -> Result<Value>
where
    F: FnOnce(Option<Value>) -> Value,
{
    let Some((last, parents)) = path.split_last() else {
        return Err(SeqError::invalid("path", "path must not be empty"));
    };
    let not_found = || SeqError::PathNotFound {
        path: describe(path),
    };

    let mut data = data;
    let mut cursor = &mut data;
    for key in parents {
        cursor = child_mut(cursor, key).ok_or_else(not_found)?;
    }

    match (cursor, last) {
        (Value::Object(map), key) => {
            let name = key.to_string();
            match map.get_mut(&name) {
                Some(slot) => {
                    let current = std::mem::take(slot);
                    *slot = update(Some(current));
                }
                None => {
                    map.insert(name, update(None));
                }
            }
        }
        (Value::Array(items), Key::Index(i)) if *i < items.len() => {
            let current = std::mem::take(&mut items[*i]);
            items[*i] = update(Some(current));
        }
        (Value::Array(items), Key::Index(i)) if *i == items.len() => {
            items.push(update(None));
        }
        _ => return Err(not_found()),
    }
    Ok(data)
}

/// Set the value at `path`, with the same rules as [`update_index_in`].
///
/// # Errors
/// Same as [`update_index_in`].
pub fn set_index_in(path: &[Key], value: Value, data: Value) -> Result<Value> {
    update_index_in(path, data, |_| value)
}
