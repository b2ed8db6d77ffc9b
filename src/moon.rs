//! Moon position, illumination, and moonrise/moonset.
//!
//! Positions come from a truncated lunar series (one term each in longitude, latitude
//! and distance). Rise and set are found numerically: the refraction-corrected altitude is
//! sampled hourly and a parabola through each pair of consecutive two-hour windows is
//! solved for its zero crossings.

#![allow(clippy::many_single_char_names)]

use crate::constants::{
    MOON_ARGUMENT_OF_LATITUDE, MOON_DISTANCE_KM, MOON_HORIZON_ALTITUDE, MOON_LATITUDE_AMPLITUDE,
    MOON_LONGITUDE_AMPLITUDE, MOON_MEAN_ANOMALY, MOON_MEAN_LONGITUDE, RAD, SUN_DISTANCE_KM,
};
use crate::coords::{
    altitude, azimuth, declination, moon_refraction, parallactic_angle, right_ascension,
    sidereal_time,
};
use crate::math::{PI, acos, atan2, cos, sin, sqrt};
use crate::sun::sun_coords;
use crate::time::{JulianDate, to_days};
use crate::types::{GeocentricCoordinates, MoonIllumination, MoonPosition, MoonTimes, Observer};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Number of two-hour windows scanned for moonrise and moonset.
const WINDOWS: u32 = 12;

/// Geocentric equatorial coordinates of the Moon, `d` days after J2000.0.
#[must_use]
pub fn moon_coords(d: f64) -> GeocentricCoordinates {
    let big_l = RAD * (MOON_MEAN_LONGITUDE[0] + MOON_MEAN_LONGITUDE[1] * d);
    let m = RAD * (MOON_MEAN_ANOMALY[0] + MOON_MEAN_ANOMALY[1] * d);
    let f = RAD * (MOON_ARGUMENT_OF_LATITUDE[0] + MOON_ARGUMENT_OF_LATITUDE[1] * d);

    let l = big_l + RAD * MOON_LONGITUDE_AMPLITUDE * sin(m);
    let b = RAD * MOON_LATITUDE_AMPLITUDE * sin(f);
    let distance = MOON_DISTANCE_KM[0] + MOON_DISTANCE_KM[1] * cos(m);

    GeocentricCoordinates::new(right_ascension(l, b), declination(l, b), distance)
}

/// Calculates the apparent position of the Moon for an instant.
///
/// The altitude includes a refraction correction. Latitude and longitude are in degrees
/// (longitude positive east) and are not validated.
///
/// # Example
/// ```
/// # use suncalc::{moon_position_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let position = moon_position_from_julian(jd, 50.5, 30.5);
/// assert!((position.distance() - 364_121.372_562_562_94).abs() < 1e-6);
/// ```
#[must_use]
pub fn moon_position_from_julian(date: JulianDate, latitude: f64, longitude: f64) -> MoonPosition {
    let observer = Observer::new_unchecked(latitude, longitude);
    let (lw, phi) = (observer.lw(), observer.phi());
    let d = to_days(date);

    let c = moon_coords(d);
    let dec = c.declination();
    let h = sidereal_time(d, lw) - c.right_ascension();

    let mut alt = altitude(h, phi, dec);
    alt += moon_refraction(alt);

    MoonPosition::new(
        azimuth(h, phi, dec),
        alt,
        c.distance(),
        parallactic_angle(h, phi, dec),
    )
}

/// Calculates the apparent position of the Moon for a chrono `DateTime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn moon_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> MoonPosition {
    moon_position_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
}

/// Calculates the illuminated fraction and phase of the Moon.
///
/// Geocentric, so the result does not depend on the observer.
///
/// # Example
/// ```
/// # use suncalc::{MoonPhase, moon_illumination_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let illumination = moon_illumination_from_julian(jd);
/// assert!((illumination.fraction() - 0.4848068202456373).abs() < 1e-9);
/// assert_eq!(illumination.phase_name(), MoonPhase::LastQuarter);
/// ```
#[must_use]
pub fn moon_illumination_from_julian(date: JulianDate) -> MoonIllumination {
    let d = to_days(date);
    let s = sun_coords(d);
    let m = moon_coords(d);

    let (sun_dec, sun_ra) = (s.declination(), s.right_ascension());
    let (moon_dec, moon_ra) = (m.declination(), m.right_ascension());

    // geocentric elongation of the Moon from the Sun
    let phi = acos(
        sin(sun_dec) * sin(moon_dec) + cos(sun_dec) * cos(moon_dec) * cos(sun_ra - moon_ra),
    );
    // selenocentric elongation of the Earth from the Sun
    let inc = atan2(
        SUN_DISTANCE_KM * sin(phi),
        m.distance() - SUN_DISTANCE_KM * cos(phi),
    );
    let angle = atan2(
        cos(sun_dec) * sin(sun_ra - moon_ra),
        sin(sun_dec) * cos(moon_dec) - cos(sun_dec) * sin(moon_dec) * cos(sun_ra - moon_ra),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    let mut phase = 0.5 + 0.5 * inc * sign / PI;
    // exact conjunction lands on 1.0, which is the same phase as 0.0
    if phase >= 1.0 {
        phase -= 1.0;
    }

    MoonIllumination::new((1.0 + cos(inc)) / 2.0, phase, angle)
}

/// Calculates the illuminated fraction and phase of the Moon for a chrono `DateTime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn moon_illumination<Tz: TimeZone>(datetime: DateTime<Tz>) -> MoonIllumination {
    moon_illumination_from_julian(JulianDate::from_datetime(&datetime))
}

/// Zero crossings of the parabola through three altitudes sampled one hour apart.
///
/// Offsets are in hours relative to the middle sample.
#[derive(Debug, Clone, Copy)]
struct Window {
    /// Crossings within ±1 hour of the middle sample
    roots: u8,
    /// Earlier crossing, or the only one when `roots == 1`
    x1: f64,
    x2: f64,
    /// Altitude at the parabola's extremum
    ye: f64,
}

impl Window {
    fn fit(h0: f64, h1: f64, h2: f64) -> Self {
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        let ye = (a * xe + b) * xe + h1;
        let d = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let (mut x1, mut x2) = (0.0, 0.0);
        if d >= 0.0 {
            let dx = sqrt(d) / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        Self { roots, x1, x2, ye }
    }
}

/// Calculates moonrise and moonset in the 24 hours starting at `date`.
///
/// Latitude and longitude are in degrees (longitude positive east) and are not
/// validated.
///
/// # Example
/// ```
/// # use suncalc::{moon_times_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 4, 0, 0, 0.0).unwrap();
/// let times = moon_times_from_julian(jd, 50.5, 30.5);
/// assert!(times.rise().is_some());
/// assert!(times.set().is_some());
/// ```
#[must_use]
pub fn moon_times_from_julian(date: JulianDate, latitude: f64, longitude: f64) -> MoonTimes {
    let hc = MOON_HORIZON_ALTITUDE * RAD;
    let altitude_at = |hours: u32| {
        moon_position_from_julian(date.add_hours(f64::from(hours)), latitude, longitude).altitude()
            - hc
    };

    let mut h0 = altitude_at(0);
    let mut rise = None;
    let mut set = None;
    let mut ye = 0.0;

    for i in (1..2 * WINDOWS).step_by(2) {
        let h1 = altitude_at(i);
        let h2 = altitude_at(i + 1);
        let window = Window::fit(h0, h1, h2);
        ye = window.ye;

        let hour = f64::from(i);
        match window.roots {
            1 if h0 < 0.0 => rise = Some(hour + window.x1),
            1 => set = Some(hour + window.x1),
            2 if window.ye < 0.0 => {
                rise = Some(hour + window.x2);
                set = Some(hour + window.x1);
            }
            2 => {
                rise = Some(hour + window.x1);
                set = Some(hour + window.x2);
            }
            _ => {}
        }
        if window.roots > 0 {
            log::trace!(
                "moon crosses the horizon {} time(s) between hours {} and {}",
                window.roots,
                i - 1,
                i + 1
            );
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    if rise.is_none() && set.is_none() {
        let always_up = ye > 0.0;
        log::debug!(
            "moon stays {} the horizon for 24 hours from JD {:.4}",
            if always_up { "above" } else { "below" },
            date.julian_date()
        );
        return if always_up {
            MoonTimes::AlwaysUp
        } else {
            MoonTimes::AlwaysDown
        };
    }

    MoonTimes::Crossings {
        rise: rise.map(|hours| date.add_hours(hours)),
        set: set.map(|hours| date.add_hours(hours)),
    }
}

/// Calculates moonrise and moonset in the 24 hours starting at `datetime`.
///
/// Times are returned in the time zone of `datetime`. To get the events of a calendar
/// day, pass local midnight.
///
/// # Example
/// ```
/// use suncalc::moon_times;
/// use chrono::{DateTime, Utc};
///
/// let date = "2013-03-04T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let times = moon_times(date, 50.5, 30.5);
/// let rise = times.rise().unwrap();
/// assert_eq!(rise.format("%Y-%m-%d %H").to_string(), "2013-03-04 23");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn moon_times<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> MoonTimes<DateTime<Tz>> {
    let tz = datetime.timezone();
    moon_times_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
        .map(|jd| jd.to_datetime_in(&tz))
}
