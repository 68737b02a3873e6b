//! Buffering limits for combinators that must hold a source in memory.
//!
//! `product` replays sources 2..n for every element of the first source and
//! `difference_with` rescans its exclusion set for every kept element. Both
//! buffer those sources exactly once, and [`Limits`] bounds how large that
//! buffer may grow. An unbounded source therefore fails with
//! [`SeqError::BufferLimit`](crate::SeqError::BufferLimit) instead of
//! exhausting memory.
//!
//! ```
//! use seqflow::config::Limits;
//!
//! let limits = Limits::from_json_str(r#"{ "max_buffered": 64 }"#)?;
//! assert_eq!(limits.max_buffered, Some(64));
//! assert_eq!(Limits::default().max_buffered, Some(Limits::DEFAULT_MAX_BUFFERED));
//! # Ok::<(), seqflow::SeqError>(())
//! ```

use crate::error::{Result, SeqError};
use serde::{Deserialize, Serialize};

/// Upper bounds applied while buffering a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of elements buffered from a single source.
    /// `None` disables the check.
    pub max_buffered: Option<usize>,
}

impl Limits {
    /// Default cap on buffered elements per source.
    pub const DEFAULT_MAX_BUFFERED: usize = 1 << 20;

    /// Limits with no cap at all.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_buffered: None }
    }

    #[must_use]
    pub const fn with_max_buffered(mut self, max: usize) -> Self {
        self.max_buffered = Some(max);
        self
    }

    /// Parse limits from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`SeqError::Json`] when the document is malformed.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Drain `iter` into a vector, failing once more than `max_buffered`
    /// elements have been pulled. Never pulls more than `max_buffered + 1`.
    pub(crate) fn buffer<T, I>(&self, what: &'static str, iter: I) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = Vec::new();
        for item in iter {
            if let Some(limit) = self.max_buffered {
                if out.len() >= limit {
                    return Err(SeqError::BufferLimit { what, limit });
                }
            }
            out.push(item);
        }
        tracing::debug!(what, buffered = out.len(), "buffered source");
        Ok(out)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_buffered: Some(Self::DEFAULT_MAX_BUFFERED),
        }
    }
}
