//! # seqflow
//!
//! **Lazy, key-preserving sequence combinators** for Rust.
//!
//! A [`Sequence`] is an ordered stream of `(key, value)` pairs that is only
//! evaluated when something pulls from it. Every combinator consumes a
//! sequence and returns a new one wrapping an explicit operator state
//! machine, so pipelines are cheap to build, run in constant memory unless an
//! operator documents otherwise, and work on unbounded sources.
//!
//! ## Key Features
//!
//! - **Keys travel with values** - `map`, `filter`, `slice` and friends keep
//!   each value's key; dedicated operators rewrite keys when asked to
//! - **Pull-driven** - nothing upstream is touched until a consumer pulls, and
//!   each operator pulls no more than it needs
//! - **Windowing** - `slice`, `take_while`, `chunk`, `chunk_by`, `pad`
//! - **Multi-source** - `zip`, `chain`, `product`, `difference_with`, `flatten`
//! - **Dynamic sources** - iterate JSON arrays, objects and strings through
//!   [`Source`] and [`from_json`]
//! - **Collaborators** - path lookup/update over JSON ([`path`]), function
//!   composition and handler stacks ([`compose`](mod@compose)), [`retry`](retry::retry)
//!
//! ## Quick Start
//!
//! ```
//! use seqflow::*;
//!
//! # fn main() -> Result<()> {
//! let words = from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
//!
//! let groups = words
//!     .chunk_by(|w| w.chars().next(), None)?
//!     .map(|group| group.join("+"))
//!     .to_vec();
//!
//! assert_eq!(groups, vec!["apple+avocado", "banana+blueberry", "cherry"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! `Sequence<I>` wraps any `I: Iterator<Item = (K, V)>` and is an [`Iterator`]
//! itself, so `for` loops and the standard adapters work on it. Its inherent
//! methods take precedence over the `Iterator` methods of the same name.
//!
//! ### Adapters
//!
//! - [`from_vec`], [`from_iter`] - values keyed by position
//! - [`from_map`] - a keyed collection in its own order
//! - [`from_chars`] - characters keyed by character index
//! - [`from_pairs_iter`] - an iterator that already yields pairs
//! - [`iter`] / [`from_json`] - runtime-shaped [`Source`]s yielding `(Key, Value)`
//!
//! ### Fallible construction
//!
//! Combinators with preconditions (`slice`, `chunk`, `chunk_by`, `range`,
//! `product`, `difference_with`) return [`Result`] when they are built; once a
//! sequence exists, pulling from it never fails on the crate's behalf.
//! Buffering operators are bounded by [`config::Limits`].
//!
//! ### Logging
//!
//! The crate emits [`tracing`] events: `debug` when a source is buffered or a
//! retry attempt fails, `trace` for window flushes and slice ends. The
//! [`testing`] module adds pass-through debug points.

pub mod compose;
pub mod config;
pub mod error;
pub mod helpers;
pub mod key;
pub mod path;
pub mod range;
pub mod retry;
pub mod sequence;
pub mod source;
pub mod testing;

pub use config::Limits;
pub use error::{Result, SeqError};
pub use helpers::*;
pub use key::{Key, ObjectKey};
pub use range::{range, RangeOp};
pub use sequence::*;
pub use source::{from_json, iter, Enumerable, JsonEntries, Source, SourceIter};
