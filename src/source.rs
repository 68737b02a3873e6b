//! Dynamic sources whose shape is only known at runtime.
//!
//! [`Source`] is a closed set of enumerable shapes. The shape is resolved once,
//! when the source is built, and [`iter`] turns it into a sequence of
//! `(Key, Value)` pairs. Converting an arbitrary [`serde_json::Value`] is the
//! usual way in:
//!
//! ```
//! use seqflow::*;
//! use serde_json::json;
//!
//! let pairs = from_json(json!({"a": 1, "b": 2}))?.collect::<Vec<_>>();
//! assert_eq!(pairs, vec![(Key::from("a"), json!(1)), (Key::from("b"), json!(2))]);
//!
//! let err = from_json(json!(42)).unwrap_err();
//! assert!(matches!(err, SeqError::UnsupportedSource { kind: "number" }));
//! # Ok::<(), SeqError>(())
//! ```

use crate::error::{Result, SeqError};
use crate::key::Key;
use crate::Sequence;
use serde_json::{Map, Value};
use std::fmt;
use std::iter::{Enumerate, Fuse, FusedIterator};

/// The source shapes the adapter understands.
pub enum Source {
    /// Values keyed by position.
    Indexed(Vec<Value>),
    /// Values keyed by name, in insertion order.
    Keyed(Map<String, Value>),
    /// One single-character string per character, keyed by character index.
    Chars(String),
    /// A producer that already yields pairs.
    Iter(Box<dyn Iterator<Item = (Key, Value)>>),
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Indexed(v) => f.debug_tuple("Indexed").field(v).finish(),
            Source::Keyed(m) => f.debug_tuple("Keyed").field(m).finish(),
            Source::Chars(s) => f.debug_tuple("Chars").field(s).finish(),
            Source::Iter(_) => f.write_str("Iter(..)"),
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Source {
    type Error = SeqError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Source::Indexed(items)),
            Value::Object(map) => Ok(Source::Keyed(map)),
            Value::String(s) => Ok(Source::Chars(s)),
            other => Err(SeqError::UnsupportedSource {
                kind: kind_of(&other),
            }),
        }
    }
}

impl From<Vec<Value>> for Source {
    fn from(items: Vec<Value>) -> Self {
        Source::Indexed(items)
    }
}

impl From<Map<String, Value>> for Source {
    fn from(map: Map<String, Value>) -> Self {
        Source::Keyed(map)
    }
}

/// Pair iterator over the entries of a JSON array or object.
pub enum JsonEntries {
    Array(Enumerate<std::vec::IntoIter<Value>>),
    Object(serde_json::map::IntoIter),
}

impl Iterator for JsonEntries {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            JsonEntries::Array(it) => it.next().map(|(i, v)| (Key::Index(i), v)),
            JsonEntries::Object(it) => it.next().map(|(k, v)| (Key::Name(k), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            JsonEntries::Array(it) => it.size_hint(),
            JsonEntries::Object(it) => it.size_hint(),
        }
    }
}

impl FusedIterator for JsonEntries {}

impl fmt::Debug for JsonEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, remaining) = match self {
            JsonEntries::Array(it) => ("Array", it.len()),
            JsonEntries::Object(it) => ("Object", it.len()),
        };
        f.debug_struct(name).field("remaining", &remaining).finish()
    }
}

/// Operator state for a resolved [`Source`].
///
/// Producers are fused, so once a pull returns `None` every later pull does too.
pub enum SourceIter {
    Entries(JsonEntries),
    Chars { chars: std::vec::IntoIter<char>, index: usize },
    Iter(Fuse<Box<dyn Iterator<Item = (Key, Value)>>>),
}

impl fmt::Debug for SourceIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceIter::Entries(entries) => f.debug_tuple("Entries").field(entries).finish(),
            SourceIter::Chars { chars, index } => f
                .debug_struct("Chars")
                .field("remaining", &chars.as_slice())
                .field("index", index)
                .finish(),
            SourceIter::Iter(_) => f.write_str("Iter(..)"),
        }
    }
}

impl Iterator for SourceIter {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SourceIter::Entries(entries) => entries.next(),
            SourceIter::Chars { chars, index } => {
                let c = chars.next()?;
                let key = Key::Index(*index);
                *index += 1;
                Some((key, Value::String(c.to_string())))
            }
            SourceIter::Iter(it) => it.next(),
        }
    }
}

impl FusedIterator for SourceIter {}

/// Turn a [`Source`] into a sequence of `(Key, Value)` pairs.
pub fn iter(source: Source) -> Sequence<SourceIter> {
    let state = match source {
        Source::Indexed(items) => SourceIter::Entries(JsonEntries::Array(items.into_iter().enumerate())),
        Source::Keyed(map) => SourceIter::Entries(JsonEntries::Object(map.into_iter())),
        Source::Chars(s) => SourceIter::Chars {
            chars: s.chars().collect::<Vec<_>>().into_iter(),
            index: 0,
        },
        Source::Iter(it) => SourceIter::Iter(it.fuse()),
    };
    Sequence::new(state)
}

/// Resolve a JSON value into a [`Source`] and iterate it.
///
/// # Errors
/// [`SeqError::UnsupportedSource`] for `null`, booleans and numbers.
pub fn from_json(value: Value) -> Result<Sequence<SourceIter>> {
    Source::try_from(value).map(iter)
}

/// Values that may themselves be enumerated into pairs.
///
/// [`Sequence::flatten`] uses this to decide which values to expand.
pub trait Enumerable: Sized {
    type Key;
    type Entries: Iterator<Item = (Self::Key, Self)>;

    /// Return the nested entries, or hand the value back when it is a scalar.
    ///
    /// # Errors
    /// Returns `Err(self)` for values that are not enumerable.
    fn into_entries(self) -> std::result::Result<Self::Entries, Self>;
}

/// Arrays and objects are enumerable; strings and other scalars are not.
impl Enumerable for Value {
    type Key = Key;
    type Entries = JsonEntries;

    fn into_entries(self) -> std::result::Result<JsonEntries, Value> {
        match self {
            Value::Array(items) => Ok(JsonEntries::Array(items.into_iter().enumerate())),
            Value::Object(map) => Ok(JsonEntries::Object(map.into_iter())),
            other => Err(other),
        }
    }
}
