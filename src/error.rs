//! Error type shared by every fallible operation in the crate.
//!
//! Combinators report precondition failures synchronously when they are
//! constructed; terminal consumers report failures discovered while draining.
//! Errors raised by caller callbacks are never wrapped here.

use thiserror::Error;

/// Errors surfaced by adapters, combinators, terminal consumers and the
/// collaborator utilities.
#[derive(Debug, Error)]
pub enum SeqError {
    /// The adapter was handed a value that has no enumeration.
    #[error("unsupported source: a {kind} value cannot be converted into a sequence")]
    UnsupportedSource { kind: &'static str },

    /// A numeric parameter violated its precondition.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// `sort_from_array` met an element whose key is not in the ordering.
    #[error("cannot sort element key {key} because it does not exist in the ordered elements")]
    KeyNotInOrdering { key: String },

    /// A value could not be used as a key of a keyed collection.
    #[error("value {value} cannot be used as a key")]
    InvalidKey { value: String },

    /// A path did not resolve before its final segment.
    #[error("could not update the path {path} because it could not be found")]
    PathNotFound { path: String },

    /// No handler of a `Stack` produced a result.
    #[error("no stack handler was able to capture this request")]
    NoHandler,

    /// A source that must be buffered grew past the configured limit.
    #[error("buffered more than {limit} elements from {what}")]
    BufferLimit { what: &'static str, limit: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SeqError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SeqError> = std::result::Result<T, E>;
