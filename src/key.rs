//! Keys for runtime-shaped data.
//!
//! [`Key`] names a slot in a JSON array or object. [`ObjectKey`] converts the
//! keys of typed sequences into object member names for
//! [`to_json_object`](crate::Sequence::to_json_object).

use crate::error::SeqError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A dynamic collection key: a position in an indexed collection or a name in
/// a keyed one.
///
/// Dynamic sources ([`Source`](crate::Source)), `flatten` over JSON values and
/// the path utilities all speak in `Key`s. Ordering puts every `Index` before
/// every `Name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(s) => Some(s),
            Key::Index(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}
impl From<&str> for Key {
    #[inline]
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}
impl From<String> for Key {
    #[inline]
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(i) => Value::from(i),
            Key::Name(s) => Value::String(s),
        }
    }
}

/// Only strings and non-negative integers are usable as keys.
impl TryFrom<&Value> for Key {
    type Error = SeqError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Key::Name(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(Key::Index)
                .ok_or_else(|| SeqError::InvalidKey {
                    value: value.to_string(),
                }),
            other => Err(SeqError::InvalidKey {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for Key {
    type Error = SeqError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Key::try_from(&value)
    }
}

/// Conversion of a sequence key into the string key of a JSON object.
///
/// Used by [`Sequence::to_json_object`](crate::Sequence::to_json_object), which
/// is where a `flip`ped sequence with unusable keys finally fails.
pub trait ObjectKey {
    /// # Errors
    /// Returns [`SeqError::InvalidKey`] when the key has no string form.
    fn object_key(&self) -> Result<String, SeqError>;
}

impl ObjectKey for Key {
    fn object_key(&self) -> Result<String, SeqError> {
        Ok(self.to_string())
    }
}
impl ObjectKey for String {
    fn object_key(&self) -> Result<String, SeqError> {
        Ok(self.clone())
    }
}
impl ObjectKey for &str {
    fn object_key(&self) -> Result<String, SeqError> {
        Ok((*self).to_string())
    }
}
impl ObjectKey for char {
    fn object_key(&self) -> Result<String, SeqError> {
        Ok(self.to_string())
    }
}
impl ObjectKey for Value {
    fn object_key(&self) -> Result<String, SeqError> {
        Key::try_from(self).map(|k| k.to_string())
    }
}

macro_rules! int_object_key {
    ($($t:ty),*) => {$(
        impl ObjectKey for $t {
            fn object_key(&self) -> Result<String, SeqError> {
                Ok(self.to_string())
            }
        }
    )*};
}
int_object_key!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);
