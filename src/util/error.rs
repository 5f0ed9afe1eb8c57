//! Error types for osm-buffer.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Calendar field that failed the range check while parsing a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalendarField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl CalendarField {
    /// Lowercase field name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for CalendarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to parse an ISO-8601 `yyyy-mm-ddThh:mm:ssZ` timestamp.
///
/// There are exactly two kinds: the text does not have the fixed layout,
/// or it does but one of the numeric fields is out of range.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampError {
    /// Wrong length, wrong separator, or a non-digit where a digit belongs.
    #[error("can not parse timestamp: expected yyyy-mm-ddThh:mm:ssZ")]
    InvalidFormat,

    /// Layout is fine but a field is outside its allowed range.
    #[error("can not parse timestamp: {field} {value} out of range")]
    InvalidCalendarField { field: CalendarField, value: u32 },
}

/// Main error type for buffer and I/O operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Timestamp text could not be parsed
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    /// Record header carries a tag that is not an OSM entity
    #[error("Unknown item type 0x{item_type:04x} at offset {offset}")]
    UnknownItemType { item_type: u16, offset: usize },

    /// Record declares a size smaller than its header or beyond the buffer
    #[error("Invalid record size {size} at offset {offset} (buffer length: {len})")]
    InvalidRecordSize { size: u32, offset: usize, len: usize },

    /// Not enough bytes left for a record header
    #[error("Truncated record header at offset {offset}: need {needed} bytes, have {available}")]
    Truncated { offset: usize, needed: usize, available: usize },

    /// Iterator used at or past the end of its buffer
    #[error("Iterator at offset {offset} is past the end of the buffer")]
    PastEnd { offset: usize },

    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a truncated-header error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated { offset, needed, available }
    }

    /// True if the error means the buffer content itself is corrupt, as
    /// opposed to an I/O or usage problem.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::UnknownItemType { .. } | Self::InvalidRecordSize { .. } | Self::Truncated { .. }
        )
    }
}

/// Result type alias for osm-buffer operations.
pub type Result<T> = std::result::Result<T, Error>;
