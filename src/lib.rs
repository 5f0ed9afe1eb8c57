//! # osm-buffer
//!
//! Compact OpenStreetMap timestamps and zero-copy entity buffers.
//!
//! ## Modules
//!
//! - [`time`] - 32-bit [`Timestamp`] and the `yyyy-mm-ddThh:mm:ssZ` codec
//! - [`memory`] - [`EntityBuffer`] over externally owned records, its cursor,
//!   and dispatch to typed entity views
//! - [`util`] - Errors and min/max reduction helpers
//!
//! ## Example
//!
//! ```
//! use osm_buffer::{EntityBuffer, EntityView, Timestamp};
//!
//! let ts: Timestamp = "2004-01-30T07:12:35Z".parse().unwrap();
//! assert_eq!(ts.seconds_since_epoch(), 1_075_446_755);
//! assert_eq!(ts.to_string(), "2004-01-30T07:12:35Z");
//!
//! // one node record: size 8, item type 1, no flags, empty payload
//! let bytes = [8, 0, 0, 0, 1, 0, 0, 0];
//! let buffer = EntityBuffer::new(&bytes);
//! for entity in buffer.entities() {
//!     match entity.unwrap() {
//!         EntityView::Node(node) => assert!(node.payload().is_empty()),
//!         other => panic!("unexpected {:?}", other.kind()),
//!     }
//! }
//! ```

pub mod util;
pub mod time;
pub mod memory;

// Re-export commonly used types
pub use util::{Error, Result, TimestampError};
pub use time::{end_of_time, start_of_time, Timestamp};
pub use memory::{BufferIterator, Entities, EntityBuffer, EntityView, ItemType, Record};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result, TimestampError, MinMaxSeed, MinOp, MaxOp};
    pub use crate::time::{end_of_time, start_of_time, Timestamp};
    pub use crate::memory::*;
}
