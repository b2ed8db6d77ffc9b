//! Time conversion: absolute instants to Julian days and back, plus the Julian-cycle
//! helpers used to locate solar transit.
//!
//! The working unit of the ephemeris code is days since J2000.0. Day boundaries of the
//! Julian count are shifted by half a day so that they line up with UT midnight.

#![allow(clippy::many_single_char_names)]

use crate::constants::{J0, J1970, J2000, SECONDS_PER_DAY, TRANSIT_CORRECTION};
use crate::math::{TAU, floor, round, sin};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Hours per day.
const HOURS_PER_DAY: f64 = 24.0;

/// Julian day number of 1970-01-01, the integer part of [`J1970`].
const UNIX_EPOCH_DAY_NUMBER: i64 = 2_440_588;

/// An absolute instant expressed as a Julian day.
///
/// A `JulianDate` always holds a finite value; "no such instant" is expressed as
/// `Option<JulianDate>` by the solvers (see [`from_julian`]).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    /// Julian day (UT)
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a Julian day number, or `None` if `j` is NaN or infinite.
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// assert!(JulianDate::from_julian(2_451_545.0).is_some());
    /// assert!(JulianDate::from_julian(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn from_julian(j: f64) -> Option<Self> {
        if j.is_finite() { Some(Self { jd: j }) } else { None }
    }

    /// Creates a Julian date from seconds since the Unix epoch.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if `seconds` is not finite.
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// let jd = JulianDate::from_unix_seconds(0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_440_587.5);
    /// ```
    pub fn from_unix_seconds(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(Error::invalid_datetime("unix timestamp must be finite"));
        }
        Ok(Self {
            jd: seconds / SECONDS_PER_DAY - 0.5 + J1970,
        })
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let seconds = datetime.timestamp() as f64
            + f64::from(datetime.timestamp_subsec_nanos()) / 1_000_000_000.0;
        Self {
            jd: seconds / SECONDS_PER_DAY - 0.5 + J1970,
        }
    }

    /// Creates a new Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// Dates before 1582-10-15 are interpreted in the Julian calendar.
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges (month 1-12, day
    /// 1-31 and within the month, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
    /// assert_eq!(jd.days_since_j2000(), 4811.5);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        let days = day_number(year, month, day) - UNIX_EPOCH_DAY_NUMBER;
        #[allow(clippy::cast_precision_loss)]
        let seconds =
            days as f64 * SECONDS_PER_DAY + f64::from(hour * 3600 + minute * 60) + second;
        Self::from_unix_seconds(seconds)
    }

    /// Gets the Julian day value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch (may be fractional or negative).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> f64 {
        (self.jd + 0.5 - J1970) * SECONDS_PER_DAY
    }

    /// Returns the instant `hours` later (earlier if negative).
    #[must_use]
    pub fn add_hours(self, hours: f64) -> Self {
        self.add_days(hours / HOURS_PER_DAY)
    }

    /// Returns the instant `days` later (earlier if negative).
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// Converts to a UTC `DateTime`.
    ///
    /// Returns `None` when the instant is outside the range chrono can represent.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let seconds = self.unix_seconds();
        let whole = floor(seconds);
        if !(-9.0e15..=9.0e15).contains(&whole) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nanos = round((seconds - whole) * 1_000_000_000.0) as u32;
        #[allow(clippy::cast_possible_truncation)]
        let whole = whole as i64;
        if nanos >= 1_000_000_000 {
            DateTime::from_timestamp(whole.checked_add(1)?, 0)
        } else {
            DateTime::from_timestamp(whole, nanos)
        }
    }

    /// Converts to a `DateTime` in the given time zone.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.to_datetime().map(|utc| utc.with_timezone(tz))
    }
}

/// Days since J2000.0 for the given instant.
#[must_use]
pub fn to_days(date: JulianDate) -> f64 {
    date.days_since_j2000()
}

/// Maps a Julian day back to an instant.
///
/// This is where a NaN produced by an out-of-range `acos` in the solar solver turns into
/// "this event does not happen".
#[must_use]
pub fn from_julian(j: f64) -> Option<JulianDate> {
    JulianDate::from_julian(j)
}

/// Number of the solar day cycle nearest to `days`, for an observer at west longitude `lw` (radians).
#[must_use]
pub fn julian_cycle(days: f64, lw: f64) -> f64 {
    round(days - J0 - lw / TAU)
}

/// Approximate days since J2000 at which hour angle `ht` is reached in cycle `n`.
#[must_use]
pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

/// Refines an approximate transit with the equation of center and equation of time terms.
///
/// Returns a Julian day (not days since J2000).
#[must_use]
pub fn solar_transit_j(ds: f64, mean_anomaly: f64, ecliptic_longitude: f64) -> f64 {
    J2000
        + ds
        + TRANSIT_CORRECTION[0] * sin(mean_anomaly)
        + TRANSIT_CORRECTION[1] * sin(2.0 * ecliptic_longitude)
}

/// Julian day number (the day beginning at noon UT) of a calendar date.
///
/// Fliegel and Van Flandern, with dates before 1582-10-15 read in the Julian calendar.
fn day_number(year: i32, month: u32, day: u32) -> i64 {
    // count the year from March so that the leap day comes last
    let a = i64::from(month <= 2);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    let days = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);

    if is_gregorian_date(year, month, day) {
        days - y.div_euclid(100) + y.div_euclid(400) - 32_045
    } else {
        days - 32_083
    }
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, is_gregorian) {
                29
            } else {
                28
            }
        }
        _ => 31,
    };
    Ok(days)
}
