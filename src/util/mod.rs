//! Utility types shared across the crate.
//!
//! - [`Error`] / [`Result`] / [`TimestampError`] - Error handling
//! - [`MinMaxSeed`], [`MinOp`], [`MaxOp`] - Min/max reductions

mod error;
mod minmax;

pub use error::*;
pub use minmax::*;
