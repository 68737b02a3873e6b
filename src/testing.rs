//! Testing utilities for seqflow pipelines.
//!
//! - **Assertions**: compare what a sequence produced with what was expected
//! - **Fixtures**: an instrumented unbounded source and a nested JSON document
//! - **Debug utilities**: pass-through points that log pairs with `tracing`
//!
//! # Quick Start
//!
//! ```
//! use seqflow::*;
//! use seqflow::testing::*;
//!
//! fn evens_are_doubled() -> anyhow::Result<()> {
//!     let (source, pulls) = counting_from(1);
//!     let out = source
//!         .filter(|v| v % 2 == 0)
//!         .map(|v| v * 2)
//!         .debug_inspect("doubled")
//!         .take(3)
//!         .to_vec();
//!
//!     assert_collections_equal(&out, &[4, 8, 12]);
//!     assert_eq!(pulls.get(), 6);
//!     Ok(())
//! }
//! # evens_are_doubled().unwrap();
//! ```
//!
//! Laziness checks are the main use of [`counting_from`]: build the pipeline,
//! pull what the test needs, then assert on [`PullCounter::get`].

pub mod assertions;
pub mod debug;
pub mod fixtures;

pub use assertions::*;
pub use debug::*;
pub use fixtures::*;
