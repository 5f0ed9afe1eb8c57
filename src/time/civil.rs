//! Timezone-free proleptic Gregorian calendar arithmetic.
//!
//! Days are counted relative to 1970-01-01. Both directions work on 400-year
//! eras (146097 days each) with years starting on March 1st, which puts the
//! leap day at the end of the year and keeps the month offsets linear.

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const UNIX_EPOCH_DAY: i64 = 719_468;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Broken-down UTC calendar time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CivilDateTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    /// Seconds since the epoch.
    ///
    /// Fields are not range checked. Out-of-range days and seconds carry
    /// into the following month or minute, so `2003-02-29` is the same
    /// instant as `2003-03-01` and `23:59:60` is midnight of the next day.
    pub fn to_epoch_seconds(self) -> i64 {
        let days = days_from_civil(self.year, self.month, self.day);
        days * SECONDS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Split seconds since the epoch into calendar fields.
    pub fn from_epoch_seconds(seconds: i64) -> Self {
        let days = seconds.div_euclid(SECONDS_PER_DAY);
        let secs_of_day = seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        let (year, month, day) = civil_from_days(days);
        Self {
            year,
            month,
            day,
            hour: secs_of_day / 3600,
            minute: secs_of_day % 3600 / 60,
            second: secs_of_day % 60,
        }
    }
}

/// Number of days from 1970-01-01 to the given date.
pub(crate) fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    // March = 0 .. February = 11
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY
}

/// Calendar date `(year, month, day)` for a day count relative to 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let days = days + UNIX_EPOCH_DAY;
    let era = days.div_euclid(DAYS_PER_ERA);
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 }) as u32;
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_day() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_known_days() {
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
        assert_eq!(days_from_civil(2004, 2, 29), 12_477);
        assert_eq!(civil_from_days(12_477), (2004, 2, 29));
        assert_eq!(civil_from_days(12_478), (2004, 3, 1));
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn test_century_rules() {
        // 1900 and 2100 are not leap years, 2000 is
        assert_eq!(days_from_civil(1900, 3, 1) - days_from_civil(1900, 2, 28), 1);
        assert_eq!(days_from_civil(2000, 3, 1) - days_from_civil(2000, 2, 28), 2);
        assert_eq!(days_from_civil(2100, 3, 1) - days_from_civil(2100, 2, 28), 1);
    }

    #[test]
    fn test_feb_29_in_common_year_carries() {
        assert_eq!(days_from_civil(2003, 2, 29), days_from_civil(2003, 3, 1));
    }

    #[test]
    fn test_days_roundtrip_across_range() {
        // 1900-01-01 .. 2106-12-31, step through every day
        let first = days_from_civil(1900, 1, 1);
        let last = days_from_civil(2106, 12, 31);
        for days in first..=last {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_seconds_split() {
        let t = CivilDateTime::from_epoch_seconds(1_075_446_755);
        assert_eq!(
            t,
            CivilDateTime { year: 2004, month: 1, day: 30, hour: 7, minute: 12, second: 35 }
        );
        assert_eq!(t.to_epoch_seconds(), 1_075_446_755);
    }

    #[test]
    fn test_leap_second_carries() {
        let t = CivilDateTime { year: 2012, month: 6, day: 30, hour: 23, minute: 59, second: 60 };
        assert_eq!(t.to_epoch_seconds(), 1_341_100_800);
    }
}
