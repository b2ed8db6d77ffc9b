//! Sun position and the times of sunrise, sunset, twilight and golden hour.
//!
//! The solar model is a low-precision series (mean anomaly, equation of center,
//! fixed obliquity) accurate to about a minute for event times. Event times are found in
//! closed form: solar transit from the Julian cycle, then the evening crossing of each
//! altitude threshold from the hour angle. Morning crossings are mirrored about solar
//! noon.

#![allow(clippy::many_single_char_names)]

use crate::constants::{
    EARTH_PERIHELION, EQUATION_OF_CENTER, RAD, SOLAR_MEAN_ANOMALY_AT_EPOCH,
    SOLAR_MEAN_ANOMALY_RATE,
};
use crate::coords::{altitude, azimuth, declination, hour_angle, right_ascension, sidereal_time};
use crate::math::{PI, normalize_radians, sin};
use crate::time::{JulianDate, approx_transit, from_julian, julian_cycle, solar_transit_j, to_days};
use crate::types::{
    EquatorialCoordinates, Horizon, HorizonEvents, Observer, SunEvent, SunPosition, SunTimes,
};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Solar mean anomaly in radians, reduced to [0, 2π).
#[must_use]
pub fn solar_mean_anomaly(d: f64) -> f64 {
    normalize_radians(RAD * (SOLAR_MEAN_ANOMALY_AT_EPOCH + SOLAR_MEAN_ANOMALY_RATE * d))
}

/// Ecliptic longitude of the Sun in radians, in [0, 2π), for mean anomaly `m`.
#[must_use]
pub fn ecliptic_longitude(m: f64) -> f64 {
    let [c1, c2, c3] = EQUATION_OF_CENTER;
    let c = RAD * (c1 * sin(m) + c2 * sin(2.0 * m) + c3 * sin(3.0 * m));
    let p = RAD * EARTH_PERIHELION;

    normalize_radians(m + c + p + PI)
}

/// Equatorial coordinates of the Sun, `d` days after J2000.0.
#[must_use]
pub fn sun_coords(d: f64) -> EquatorialCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(d));

    EquatorialCoordinates::new(right_ascension(l, 0.0), declination(l, 0.0))
}

/// Julian day at which the Sun sinks through altitude `h` (radians) in cycle `n`.
///
/// NaN when the Sun never reaches `h` that day.
#[must_use]
pub fn sun_event_julian_day(h: f64, phi: f64, dec: f64, lw: f64, n: f64, m: f64, l: f64) -> f64 {
    let w = hour_angle(h, phi, dec);
    let a = approx_transit(w, lw, n);
    solar_transit_j(a, m, l)
}

/// Calculates the apparent position of the Sun for an instant.
///
/// Latitude and longitude are in degrees (longitude positive east) and are not
/// validated.
///
/// # Example
/// ```
/// # use suncalc::{sun_position_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let position = sun_position_from_julian(jd, 50.5, 30.5);
/// assert!((position.altitude() - -0.7000406838781611).abs() < 1e-9);
/// ```
#[must_use]
pub fn sun_position_from_julian(date: JulianDate, latitude: f64, longitude: f64) -> SunPosition {
    let observer = Observer::new_unchecked(latitude, longitude);
    let (lw, phi) = (observer.lw(), observer.phi());
    let d = to_days(date);

    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension();

    SunPosition::new(
        azimuth(h, phi, c.declination()),
        altitude(h, phi, c.declination()),
    )
}

/// Calculates the apparent position of the Sun for a chrono `DateTime`.
///
/// # Example
/// ```
/// use suncalc::sun_position;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = sun_position(datetime, 50.5, 30.5);
/// assert!(!position.is_above_horizon());
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sun_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    sun_position_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
}

/// Solar quantities shared by every threshold of one solar day.
struct SolarDay {
    noon: f64,
    phi: f64,
    dec: f64,
    lw: f64,
    n: f64,
    m: f64,
    l: f64,
}

impl SolarDay {
    /// Solar day containing the transit nearest to `date`.
    fn new(date: JulianDate, observer: Observer) -> Self {
        let lw = observer.lw();
        let phi = observer.phi();
        let d = to_days(date);

        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);

        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = declination(l, 0.0);

        Self {
            noon: solar_transit_j(ds, m, l),
            phi,
            dec,
            lw,
            n,
            m,
            l,
        }
    }

    fn solar_noon(&self) -> Option<JulianDate> {
        from_julian(self.noon)
    }

    fn nadir(&self) -> Option<JulianDate> {
        from_julian(self.noon - 0.5)
    }

    /// Morning and evening crossings of `horizon`.
    fn crossings(&self, horizon: Horizon) -> HorizonEvents {
        let set = sun_event_julian_day(
            horizon.radians(),
            self.phi,
            self.dec,
            self.lw,
            self.n,
            self.m,
            self.l,
        );
        let rise = self.noon - (set - self.noon);

        let events = HorizonEvents::new(from_julian(rise), from_julian(set));
        if events.evening().is_none() {
            log::debug!(
                "sun does not cross {}° on the solar day of JD {:.4}",
                horizon.altitude(),
                self.noon
            );
        }
        events
    }

    fn sun_times(&self) -> SunTimes {
        let mut events = [None; SunEvent::COUNT];
        events[SunEvent::SolarNoon as usize] = self.solar_noon();
        events[SunEvent::Nadir as usize] = self.nadir();

        for horizon in Horizon::STANDARD {
            if let Some((morning, evening)) = horizon.events() {
                let crossings = self.crossings(horizon);
                events[morning as usize] = crossings.morning().copied();
                events[evening as usize] = crossings.evening().copied();
            }
        }

        SunTimes::from_events(events)
    }
}

/// Calculates the named solar events of the day containing `date`.
///
/// The day is the solar day whose transit is nearest to `date` at the observer's
/// longitude. Events the Sun does not reach that day are `None`; solar noon and nadir
/// are always present for valid coordinates.
///
/// # Example
/// ```
/// # use suncalc::{sun_times_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let times = sun_times_from_julian(jd, 50.5, 30.5);
///
/// let noon = times.solar_noon().unwrap();
/// let sunrise = times.sunrise().unwrap();
/// assert!(sunrise < noon);
/// ```
#[must_use]
pub fn sun_times_from_julian(date: JulianDate, latitude: f64, longitude: f64) -> SunTimes {
    SolarDay::new(date, Observer::new_unchecked(latitude, longitude)).sun_times()
}

/// Calculates the named solar events of the day containing `datetime`.
///
/// Times are returned in the time zone of `datetime`. The day is the one whose solar
/// noon is nearest to `datetime`, so passing local noon selects the local calendar day.
///
/// # Example
/// ```
/// use suncalc::sun_times;
/// use chrono::{DateTime, FixedOffset};
///
/// let date = "2013-03-05T00:00:00Z".parse::<DateTime<FixedOffset>>().unwrap();
/// let times = sun_times(date, 50.5, 30.5);
///
/// let sunrise = times.sunrise().unwrap();
/// assert_eq!(sunrise.format("%H:%M").to_string(), "04:34");
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn sun_times<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunTimes<DateTime<Tz>> {
    let tz = datetime.timezone();
    sun_times_from_julian(JulianDate::from_datetime(&datetime), latitude, longitude)
        .map(|jd| jd.to_datetime_in(&tz))
}

/// Calculates when the Sun crosses an arbitrary altitude on the day containing `date`.
///
/// # Example
/// ```
/// # use suncalc::{Horizon, sun_event_times_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let blue_hour = Horizon::custom(-4.0).unwrap();
/// let events = sun_event_times_from_julian(jd, 50.5, 30.5, blue_hour);
/// assert!(events.morning().is_some());
/// assert!(events.evening().is_some());
/// ```
#[must_use]
pub fn sun_event_times_from_julian(
    date: JulianDate,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> HorizonEvents {
    SolarDay::new(date, Observer::new_unchecked(latitude, longitude)).crossings(horizon)
}

/// Calculates when the Sun crosses an arbitrary altitude, in the time zone of `datetime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn sun_event_times<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> HorizonEvents<DateTime<Tz>> {
    let tz = datetime.timezone();
    sun_event_times_from_julian(
        JulianDate::from_datetime(&datetime),
        latitude,
        longitude,
        horizon,
    )
    .map(|jd| jd.to_datetime_in(&tz))
}

/// Calculates the crossings of several altitudes, sharing the per-day solar quantities.
///
/// # Example
/// ```
/// # use suncalc::{Horizon, sun_event_times_multiple_from_julian, time::JulianDate};
/// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let horizons = [Horizon::CivilTwilight, Horizon::custom(-4.0).unwrap()];
/// for (horizon, events) in sun_event_times_multiple_from_julian(jd, 50.5, 30.5, horizons) {
///     assert!(events.morning().is_some(), "{horizon:?}");
/// }
/// ```
pub fn sun_event_times_multiple_from_julian<H>(
    date: JulianDate,
    latitude: f64,
    longitude: f64,
    horizons: H,
) -> impl Iterator<Item = (Horizon, HorizonEvents)>
where
    H: IntoIterator<Item = Horizon>,
{
    let day = SolarDay::new(date, Observer::new_unchecked(latitude, longitude));
    horizons
        .into_iter()
        .map(move |horizon| (horizon, day.crossings(horizon)))
}

/// Calculates the crossings of several altitudes, in the time zone of `datetime`.
#[cfg(feature = "chrono")]
pub fn sun_event_times_multiple<Tz, H>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizons: H,
) -> impl Iterator<Item = (Horizon, HorizonEvents<DateTime<Tz>>)>
where
    Tz: TimeZone,
    H: IntoIterator<Item = Horizon>,
{
    let tz = datetime.timezone();
    sun_event_times_multiple_from_julian(
        JulianDate::from_datetime(&datetime),
        latitude,
        longitude,
        horizons,
    )
    .map(move |(horizon, events)| (horizon, events.map(|jd| jd.to_datetime_in(&tz))))
}
