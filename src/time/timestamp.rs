//! The OSM timestamp value type.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use super::iso;
use crate::util::{MinMaxSeed, TimestampError};

/// A point in time with one-second resolution.
///
/// Internally an unsigned 32-bit count of seconds since
/// 1970-01-01T00:00:00Z, so it overflows in 2106. OpenStreetMap started long
/// after 1970, so there is no need for earlier dates.
///
/// The value `0` means "not set". It is also the epoch instant itself;
/// the two can not be told apart. [`Timestamp::default`] is this sentinel.
///
/// Ordering is the unsigned order of the stored seconds. Adding or
/// subtracting seconds wraps silently on 32-bit overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(u32);

impl Timestamp {
    /// Ordered before every other valid timestamp.
    pub const START_OF_TIME: Self = Self(1);

    /// Ordered after every other valid timestamp.
    pub const END_OF_TIME: Self = Self(u32::MAX);

    /// Create a timestamp from seconds since the epoch.
    #[inline]
    pub const fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Parse an ISO date/time string in the format `yyyy-mm-ddThh:mm:ssZ`.
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        iso::parse_timestamp(text).map(Self)
    }

    /// True if the timestamp is set to something other than `0`.
    #[inline]
    pub const fn valid(self) -> bool {
        self.0 != 0
    }

    /// Seconds since the epoch.
    #[inline]
    pub const fn seconds_since_epoch(self) -> i64 {
        self.0 as i64
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }

    /// ISO `yyyy-mm-ddThh:mm:ssZ` form, or an empty string if not valid.
    pub fn to_iso(self) -> String {
        iso::format_timestamp(self.0)
    }
}

/// A timestamp guaranteed to be ordered before any other valid timestamp.
#[inline]
pub const fn start_of_time() -> Timestamp {
    Timestamp::START_OF_TIME
}

/// A timestamp guaranteed to be ordered after any other valid timestamp.
#[inline]
pub const fn end_of_time() -> Timestamp {
    Timestamp::END_OF_TIME
}

impl MinMaxSeed for Timestamp {
    #[inline]
    fn min_op_start_value() -> Self {
        end_of_time()
    }

    #[inline]
    fn max_op_start_value() -> Self {
        start_of_time()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        iso::write_timestamp(f, self.0)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

// Integer conversions keep the low 32 bits, no range check.

impl From<u32> for Timestamp {
    #[inline]
    fn from(seconds: u32) -> Self {
        Self(seconds)
    }
}

impl From<i32> for Timestamp {
    #[inline]
    fn from(seconds: i32) -> Self {
        Self(seconds as u32)
    }
}

impl From<u64> for Timestamp {
    #[inline]
    fn from(seconds: u64) -> Self {
        Self(seconds as u32)
    }
}

impl From<i64> for Timestamp {
    #[inline]
    fn from(seconds: i64) -> Self {
        Self(seconds as u32)
    }
}

impl From<Timestamp> for u32 {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl From<Timestamp> for u64 {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        u64::from(ts.0)
    }
}

impl From<Timestamp> for i64 {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        ts.seconds_since_epoch()
    }
}

impl From<Timestamp> for bool {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        ts.valid()
    }
}

impl AddAssign<i64> for Timestamp {
    #[inline]
    fn add_assign(&mut self, seconds: i64) {
        self.0 = self.0.wrapping_add(seconds as u32);
    }
}

impl SubAssign<i64> for Timestamp {
    #[inline]
    fn sub_assign(&mut self, seconds: i64) {
        self.0 = self.0.wrapping_sub(seconds as u32);
    }
}

impl Add<i64> for Timestamp {
    type Output = Self;

    #[inline]
    fn add(mut self, seconds: i64) -> Self {
        self += seconds;
        self
    }
}

impl Sub<i64> for Timestamp {
    type Output = Self;

    #[inline]
    fn sub(mut self, seconds: i64) -> Self {
        self -= seconds;
        self
    }
}
