//! Fixed-layout ISO-8601 timestamp text: `yyyy-mm-ddThh:mm:ssZ`.
//!
//! Parsing is a plain byte-level check followed by integer arithmetic. No
//! locale, no timezone database and no date library are involved, so the
//! accept/reject behaviour is identical on every platform.

use std::fmt;

use super::civil::CivilDateTime;
use crate::util::{CalendarField, TimestampError};

/// Length of an ISO timestamp string.
pub const TIMESTAMP_LENGTH: usize = 20;

/// Character classes per position; `d` is any ASCII digit.
const LAYOUT: &[u8; TIMESTAMP_LENGTH] = b"dddd-dd-ddTdd:dd:ddZ";

/// Month lengths used for the day range check.
///
/// February is always 29: a leap day is accepted in every year and lands
/// on March 1st when the year is not a leap year.
const MONTH_LENGTHS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Earliest accepted year.
const MIN_YEAR: u32 = 1900;

/// Parse `yyyy-mm-ddThh:mm:ssZ` into seconds since the epoch.
///
/// The result is truncated to 32 bits the same way as
/// [`Timestamp::from`](super::Timestamp) on an integer, so years before
/// 1970 or after 2106 wrap.
pub fn parse_timestamp(text: &str) -> Result<u32, TimestampError> {
    let bytes = text.as_bytes();
    if bytes.len() != TIMESTAMP_LENGTH {
        return Err(TimestampError::InvalidFormat);
    }

    let layout_ok = bytes.iter().zip(LAYOUT.iter()).all(|(&b, &class)| {
        if class == b'd' {
            b.is_ascii_digit()
        } else {
            b == class
        }
    });
    if !layout_ok {
        return Err(TimestampError::InvalidFormat);
    }

    let fields = CivilDateTime {
        year: i64::from(digits(bytes, 0, 4)),
        month: digits(bytes, 5, 2),
        day: digits(bytes, 8, 2),
        hour: digits(bytes, 11, 2),
        minute: digits(bytes, 14, 2),
        second: digits(bytes, 17, 2),
    };
    check_ranges(&fields)?;

    Ok(fields.to_epoch_seconds() as u32)
}

/// Render seconds since the epoch as `yyyy-mm-ddThh:mm:ssZ`.
///
/// Returns an empty string for `0`, the unset sentinel.
pub fn format_timestamp(seconds: u32) -> String {
    let mut s = String::with_capacity(TIMESTAMP_LENGTH);
    // writing into a String can not fail
    let _ = write_timestamp(&mut s, seconds);
    s
}

/// Write the ISO form of `seconds` into any formatter; writes nothing for `0`.
pub fn write_timestamp<W: fmt::Write>(out: &mut W, seconds: u32) -> fmt::Result {
    if seconds == 0 {
        return Ok(());
    }
    let t = CivilDateTime::from_epoch_seconds(i64::from(seconds));
    write!(
        out,
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        t.year, t.month, t.day, t.hour, t.minute, t.second
    )
}

/// Decimal value of `len` digit bytes starting at `start`. Layout is
/// already checked, so every byte is `0`-`9`.
#[inline]
fn digits(bytes: &[u8], start: usize, len: usize) -> u32 {
    bytes[start..start + len]
        .iter()
        .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0'))
}

fn check_ranges(t: &CivilDateTime) -> Result<(), TimestampError> {
    let field_err = |field, value| Err(TimestampError::InvalidCalendarField { field, value });

    // year has at most four digits, the cast is lossless
    let year = t.year as u32;
    if year < MIN_YEAR {
        return field_err(CalendarField::Year, year);
    }
    if !(1..=12).contains(&t.month) {
        return field_err(CalendarField::Month, t.month);
    }
    if !(1..=MONTH_LENGTHS[t.month as usize - 1]).contains(&t.day) {
        return field_err(CalendarField::Day, t.day);
    }
    if t.hour > 23 {
        return field_err(CalendarField::Hour, t.hour);
    }
    if t.minute > 59 {
        return field_err(CalendarField::Minute, t.minute);
    }
    // 60 is a leap second
    if t.second > 60 {
        return field_err(CalendarField::Second, t.second);
    }
    Ok(())
}
