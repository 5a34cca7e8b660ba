//! A fixed-capacity circular index for rolling-window data collection.
//!
//! [`RingIndex`] tracks a write cursor and a count of written entries for a
//! ring of compile-time capacity. It stores no elements itself. The caller
//! owns the backing storage and uses the index to decide which slot to write
//! the next element into and to walk the written slots from oldest to newest.
#![warn(missing_docs)]

mod ring_index;

pub use ring_index::{Counter, RingIndex, RingIter};
