//! OSM timestamps.
//!
//! - [`Timestamp`] - 32-bit seconds since the epoch, `0` meaning unset
//! - [`parse_timestamp`] / [`format_timestamp`] - the `yyyy-mm-ddThh:mm:ssZ`
//!   text form

mod civil;
mod iso;
mod timestamp;

pub use iso::{format_timestamp, parse_timestamp, write_timestamp, TIMESTAMP_LENGTH};
pub use timestamp::{end_of_time, start_of_time, Timestamp};
