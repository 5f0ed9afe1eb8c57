//! Zero-copy entity buffers.
//!
//! An [`EntityBuffer`] borrows a byte region filled by some producer with
//! variable-length records. A [`BufferIterator`] walks the records by their
//! declared size, and [`Entities`] turns each record into a typed
//! [`EntityView`], one per pull.
//!
//! ```text
//! +--------+--------+-----------+--------+--------+---------+----
//! | size   | type   | payload   | size   | type   | payload | ...
//! +--------+--------+-----------+--------+--------+---------+----
//!  record 0                      record 1
//! ```
//!
//! See [`format`] for the header layout.

pub mod format;
mod buffer;
mod entity;
mod dispatch;

#[cfg(feature = "mmap")]
mod mmap;

#[cfg(test)]
pub(crate) mod testing;

pub use format::{DiffMarker, ItemType, RecordHeader, RECORD_HEADER_SIZE};
pub use buffer::{BufferIterator, EntityBuffer, Record, Records};
pub use entity::{AreaView, ChangesetView, EntityView, NodeView, RelationView, WayView};
pub use dispatch::{next_entity, Entities};

#[cfg(feature = "mmap")]
pub use mmap::MappedBuffer;
