pub(crate) mod batches;
pub(crate) mod flatten;
pub(crate) mod multi;
pub(crate) mod pad;
pub(crate) mod pairs;
pub(crate) mod slicing;
pub(crate) mod stdlib;
pub(crate) mod terminal;
pub(crate) mod values;

pub use batches::{ChunkByOp, ChunkOp};
pub use flatten::FlattenOp;
pub use pad::PadOp;
pub use pairs::{FlatMapOp, FromPairsOp, ToPairsOp};
pub use slicing::{DropWhileOp, SliceOp, TakeWhileOp};
pub use terminal::BucketIndex;

// Only re-export files with top-level functions
pub use multi::*;
pub use stdlib::*;
