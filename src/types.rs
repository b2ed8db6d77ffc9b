//! Value types produced and consumed by the Sun and Moon calculations.
//!
//! Every type here is an immutable record built once per query. Angles are radians
//! unless an accessor says otherwise.

use crate::constants::RAD;
use crate::error::{check_altitude, check_coordinates};
use crate::math::{normalize_degrees_0_to_360, radians_to_degrees, round};
use crate::time::JulianDate;
use crate::Result;

/// An observer on the Earth's surface.
///
/// Latitude is positive north, longitude positive east, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Creates an observer, rejecting coordinates outside ±90° / ±180°.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    ///
    /// # Example
    /// ```
    /// # use suncalc::Observer;
    /// let kyiv = Observer::new(50.5, 30.5).unwrap();
    /// assert_eq!(kyiv.latitude(), 50.5);
    /// assert!(Observer::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates an observer without validating the coordinates.
    ///
    /// Out-of-range values are passed straight to the formulas.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians (φ).
    pub(crate) fn phi(&self) -> f64 {
        RAD * self.latitude
    }

    /// Longitude in radians, positive west (the hour-angle convention).
    pub(crate) fn lw(&self) -> f64 {
        RAD * -self.longitude
    }
}

/// Altitude thresholds of the Sun that define the named daily events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Upper limb on the horizon, refraction included (-0.83°): sunrise and sunset
    SunriseSunset,
    /// Lower limb on the horizon (-0.3°): sunrise end and sunset start
    SunriseEndSunsetStart,
    /// Civil twilight (Sun 6° below the horizon): dawn and dusk
    CivilTwilight,
    /// Nautical twilight (Sun 12° below the horizon)
    NauticalTwilight,
    /// Astronomical twilight (Sun 18° below the horizon): night end and night
    AstronomicalTwilight,
    /// Sun 6° above the horizon: golden hour end and golden hour start
    GoldenHour,
    /// Custom altitude in degrees.
    ///
    /// Must be a number in -90..=90. NaN is not supported: it breaks `Eq` and `Hash`.
    /// [`Horizon::custom`] enforces this.
    Custom(f64),
}

impl Horizon {
    /// The six thresholds reported by [`crate::sun_times`].
    pub const STANDARD: [Self; 6] = [
        Self::SunriseSunset,
        Self::SunriseEndSunsetStart,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
        Self::GoldenHour,
    ];

    /// Gets the altitude angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83,
            Self::SunriseEndSunsetStart => -0.3,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::GoldenHour => 6.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the altitude angle in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.altitude() * RAD
    }

    /// Creates a custom horizon with the specified altitude angle.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if the altitude is outside -90 to +90 degrees or NaN.
    pub fn custom(altitude_degrees: f64) -> Result<Self> {
        check_altitude(altitude_degrees)?;
        Ok(Self::Custom(altitude_degrees))
    }

    /// The morning and evening events bounded by this threshold, if it is a standard one.
    #[must_use]
    pub const fn events(&self) -> Option<(SunEvent, SunEvent)> {
        match self {
            Self::SunriseSunset => Some((SunEvent::Sunrise, SunEvent::Sunset)),
            Self::SunriseEndSunsetStart => Some((SunEvent::SunriseEnd, SunEvent::SunsetStart)),
            Self::CivilTwilight => Some((SunEvent::Dawn, SunEvent::Dusk)),
            Self::NauticalTwilight => Some((SunEvent::NauticalDawn, SunEvent::NauticalDusk)),
            Self::AstronomicalTwilight => Some((SunEvent::NightEnd, SunEvent::Night)),
            Self::GoldenHour => Some((SunEvent::GoldenHourEnd, SunEvent::GoldenHour)),
            Self::Custom(_) => None,
        }
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::SunriseSunset => 0.hash(state),
            Self::SunriseEndSunsetStart => 1.hash(state),
            Self::CivilTwilight => 2.hash(state),
            Self::NauticalTwilight => 3.hash(state),
            Self::AstronomicalTwilight => 4.hash(state),
            Self::GoldenHour => 5.hash(state),
            Self::Custom(angle) => {
                6.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// The named instants reported in [`SunTimes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SunEvent {
    /// Darkest moment of the night, the Sun at its lowest
    Nadir,
    /// Morning astronomical twilight starts
    NightEnd,
    /// Morning nautical twilight starts
    NauticalDawn,
    /// Morning civil twilight starts
    Dawn,
    /// Top edge of the Sun appears on the horizon
    Sunrise,
    /// Bottom edge of the Sun touches the horizon
    SunriseEnd,
    /// Morning golden hour ends
    GoldenHourEnd,
    /// Sun at its highest
    SolarNoon,
    /// Evening golden hour starts
    GoldenHour,
    /// Bottom edge of the Sun touches the horizon
    SunsetStart,
    /// Sun disappears below the horizon
    Sunset,
    /// Evening nautical twilight starts
    Dusk,
    /// Evening astronomical twilight starts
    NauticalDusk,
    /// Dark enough for astronomical observations
    Night,
}

impl SunEvent {
    /// Number of named events.
    pub const COUNT: usize = 14;

    /// All events, in the order they happen on an ordinary mid-latitude day.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nadir,
        Self::NightEnd,
        Self::NauticalDawn,
        Self::Dawn,
        Self::Sunrise,
        Self::SunriseEnd,
        Self::GoldenHourEnd,
        Self::SolarNoon,
        Self::GoldenHour,
        Self::SunsetStart,
        Self::Sunset,
        Self::Dusk,
        Self::NauticalDusk,
        Self::Night,
    ];

    /// The altitude threshold that defines this event; `None` for solar noon and nadir.
    #[must_use]
    pub const fn horizon(&self) -> Option<Horizon> {
        match self {
            Self::Sunrise | Self::Sunset => Some(Horizon::SunriseSunset),
            Self::SunriseEnd | Self::SunsetStart => Some(Horizon::SunriseEndSunsetStart),
            Self::Dawn | Self::Dusk => Some(Horizon::CivilTwilight),
            Self::NauticalDawn | Self::NauticalDusk => Some(Horizon::NauticalTwilight),
            Self::NightEnd | Self::Night => Some(Horizon::AstronomicalTwilight),
            Self::GoldenHourEnd | Self::GoldenHour => Some(Horizon::GoldenHour),
            Self::SolarNoon | Self::Nadir => None,
        }
    }

    /// Whether the event belongs to the morning half of the day (before solar noon).
    #[must_use]
    pub const fn is_morning(&self) -> bool {
        matches!(
            self,
            Self::NightEnd
                | Self::NauticalDawn
                | Self::Dawn
                | Self::Sunrise
                | Self::SunriseEnd
                | Self::GoldenHourEnd
        )
    }

    /// Camel-case name used by other suncalc ports (`"sunriseEnd"`, `"nauticalDusk"`, ...).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nadir => "nadir",
            Self::NightEnd => "nightEnd",
            Self::NauticalDawn => "nauticalDawn",
            Self::Dawn => "dawn",
            Self::Sunrise => "sunrise",
            Self::SunriseEnd => "sunriseEnd",
            Self::GoldenHourEnd => "goldenHourEnd",
            Self::SolarNoon => "solarNoon",
            Self::GoldenHour => "goldenHour",
            Self::SunsetStart => "sunsetStart",
            Self::Sunset => "sunset",
            Self::Dusk => "dusk",
            Self::NauticalDusk => "nauticalDusk",
            Self::Night => "night",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Sun position relative to the Earth's equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    right_ascension: f64,
    declination: f64,
}

impl EquatorialCoordinates {
    /// Creates equatorial coordinates from right ascension and declination in radians.
    #[must_use]
    pub const fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Right ascension in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Moon position relative to the Earth's equator, with its distance from the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricCoordinates {
    right_ascension: f64,
    declination: f64,
    distance: f64,
}

impl GeocentricCoordinates {
    /// Creates geocentric coordinates; angles in radians, distance in km.
    #[must_use]
    pub const fn new(right_ascension: f64, declination: f64, distance: f64) -> Self {
        Self {
            right_ascension,
            declination,
            distance,
        }
    }

    /// Right ascension in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Earth-Moon distance in km.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Apparent position of the Sun for an observer.
///
/// Azimuth is measured from south, increasing westward: 0 = south, π/2 = west,
/// -π/2 = east. Altitude is the angle above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    azimuth: f64,
    altitude: f64,
}

impl SunPosition {
    pub(crate) const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Azimuth in radians, from south, increasing westward.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Azimuth in degrees, from south, increasing westward.
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Azimuth in degrees from north, clockwise, in [0, 360).
    #[must_use]
    pub fn compass_azimuth(&self) -> f64 {
        compass_degrees(self.azimuth)
    }

    /// Checks if the Sun's centre is above the horizon.
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Apparent position of the Moon for an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    azimuth: f64,
    altitude: f64,
    distance: f64,
    parallactic_angle: f64,
}

impl MoonPosition {
    pub(crate) const fn new(
        azimuth: f64,
        altitude: f64,
        distance: f64,
        parallactic_angle: f64,
    ) -> Self {
        Self {
            azimuth,
            altitude,
            distance,
            parallactic_angle,
        }
    }

    /// Azimuth in radians, from south, increasing westward.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Refraction-corrected altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Earth-Moon distance in km.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Parallactic angle in radians.
    #[must_use]
    pub const fn parallactic_angle(&self) -> f64 {
        self.parallactic_angle
    }

    /// Azimuth in degrees, from south, increasing westward.
    #[must_use]
    pub const fn azimuth_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth)
    }

    /// Altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Azimuth in degrees from north, clockwise, in [0, 360).
    #[must_use]
    pub fn compass_azimuth(&self) -> f64 {
        compass_degrees(self.azimuth)
    }

    /// Checks if the Moon is above the horizon.
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

fn compass_degrees(south_based_azimuth: f64) -> f64 {
    normalize_degrees_0_to_360(radians_to_degrees(south_based_azimuth) + 180.0)
}

/// Named lunar phases, each covering an eighth of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// Phase near 0
    NewMoon,
    /// Between new moon and first quarter
    WaxingCrescent,
    /// Phase near 0.25
    FirstQuarter,
    /// Between first quarter and full moon
    WaxingGibbous,
    /// Phase near 0.5
    FullMoon,
    /// Between full moon and last quarter
    WaningGibbous,
    /// Phase near 0.75
    LastQuarter,
    /// Between last quarter and new moon
    WaningCrescent,
}

impl MoonPhase {
    /// Classifies a phase value in [0, 1).
    ///
    /// The four principal phases own the sixteenth of a cycle on either side of their
    /// exact value.
    #[must_use]
    pub fn from_phase(phase: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let octant = (round(phase * 8.0) as u32) % 8;
        match octant {
            0 => Self::NewMoon,
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::FullMoon,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            _ => Self::WaningCrescent,
        }
    }
}

/// Illuminated part of the Moon's disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonIllumination {
    fraction: f64,
    phase: f64,
    angle: f64,
}

impl MoonIllumination {
    pub(crate) const fn new(fraction: f64, phase: f64, angle: f64) -> Self {
        Self {
            fraction,
            phase,
            angle,
        }
    }

    /// Illuminated fraction of the disk, from 0 (new) to 1 (full).
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Phase in [0, 1): 0 new moon, 0.25 first quarter, 0.5 full moon, 0.75 last quarter.
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Midpoint angle of the illuminated limb in radians, eastward from the north point of the disk.
    ///
    /// Negative while waxing, positive while waning.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether the illuminated fraction is growing.
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }

    /// The named phase.
    #[must_use]
    pub fn phase_name(&self) -> MoonPhase {
        MoonPhase::from_phase(self.phase)
    }
}

/// Times of the named solar events of one day.
///
/// Every event is optional: `None` means the Sun does not reach the event's altitude on
/// that day at that latitude (polar day or polar night). Solar noon and nadir are
/// always present for valid coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes<T = JulianDate> {
    events: [Option<T>; SunEvent::COUNT],
}

impl<T> SunTimes<T> {
    pub(crate) const fn from_events(events: [Option<T>; SunEvent::COUNT]) -> Self {
        Self { events }
    }

    /// Gets the time of the given event.
    pub const fn get(&self, event: SunEvent) -> Option<&T> {
        self.events[event.index()].as_ref()
    }

    /// Iterates over all events in chronological order, including absent ones.
    pub fn iter(&self) -> impl Iterator<Item = (SunEvent, Option<&T>)> + '_ {
        SunEvent::ALL
            .iter()
            .map(move |&event| (event, self.get(event)))
    }

    /// Converts every present time, dropping those the conversion rejects.
    pub fn map<U, F>(self, mut f: F) -> SunTimes<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        SunTimes {
            events: self.events.map(|event| event.and_then(&mut f)),
        }
    }

    /// Top edge of the Sun appears on the horizon.
    pub const fn sunrise(&self) -> Option<&T> {
        self.get(SunEvent::Sunrise)
    }

    /// Bottom edge of the Sun touches the horizon in the morning.
    pub const fn sunrise_end(&self) -> Option<&T> {
        self.get(SunEvent::SunriseEnd)
    }

    /// Morning golden hour ends.
    pub const fn golden_hour_end(&self) -> Option<&T> {
        self.get(SunEvent::GoldenHourEnd)
    }

    /// Sun at its highest.
    pub const fn solar_noon(&self) -> Option<&T> {
        self.get(SunEvent::SolarNoon)
    }

    /// Evening golden hour starts.
    pub const fn golden_hour(&self) -> Option<&T> {
        self.get(SunEvent::GoldenHour)
    }

    /// Bottom edge of the Sun touches the horizon in the evening.
    pub const fn sunset_start(&self) -> Option<&T> {
        self.get(SunEvent::SunsetStart)
    }

    /// Sun disappears below the horizon.
    pub const fn sunset(&self) -> Option<&T> {
        self.get(SunEvent::Sunset)
    }

    /// Evening nautical twilight starts.
    pub const fn dusk(&self) -> Option<&T> {
        self.get(SunEvent::Dusk)
    }

    /// Evening astronomical twilight starts.
    pub const fn nautical_dusk(&self) -> Option<&T> {
        self.get(SunEvent::NauticalDusk)
    }

    /// Dark enough for astronomical observations.
    pub const fn night(&self) -> Option<&T> {
        self.get(SunEvent::Night)
    }

    /// Sun at its lowest, half a day before solar noon.
    pub const fn nadir(&self) -> Option<&T> {
        self.get(SunEvent::Nadir)
    }

    /// Morning astronomical twilight starts.
    pub const fn night_end(&self) -> Option<&T> {
        self.get(SunEvent::NightEnd)
    }

    /// Morning nautical twilight starts.
    pub const fn nautical_dawn(&self) -> Option<&T> {
        self.get(SunEvent::NauticalDawn)
    }

    /// Morning civil twilight starts.
    pub const fn dawn(&self) -> Option<&T> {
        self.get(SunEvent::Dawn)
    }
}

/// Morning and evening crossings of a single altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizonEvents<T = JulianDate> {
    morning: Option<T>,
    evening: Option<T>,
}

impl<T> HorizonEvents<T> {
    pub(crate) const fn new(morning: Option<T>, evening: Option<T>) -> Self {
        Self { morning, evening }
    }

    /// Time the Sun climbs through the threshold.
    pub const fn morning(&self) -> Option<&T> {
        self.morning.as_ref()
    }

    /// Time the Sun sinks through the threshold.
    pub const fn evening(&self) -> Option<&T> {
        self.evening.as_ref()
    }

    /// Converts both times, dropping those the conversion rejects.
    pub fn map<U, F>(self, mut f: F) -> HorizonEvents<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        HorizonEvents {
            morning: self.morning.and_then(&mut f),
            evening: self.evening.and_then(&mut f),
        }
    }
}

/// Moonrise and moonset within a 24-hour window.
///
/// Exactly one variant describes a day: the Moon crosses the horizon at least once, or
/// it stays above, or it stays below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonTimes<T = JulianDate> {
    /// The Moon rises, sets, or both; at least one of the two is present
    Crossings {
        /// Time of moonrise
        rise: Option<T>,
        /// Time of moonset
        set: Option<T>,
    },
    /// The Moon stays above the horizon for the whole window
    AlwaysUp,
    /// The Moon stays below the horizon for the whole window
    AlwaysDown,
}

impl<T> MoonTimes<T> {
    /// Gets moonrise, if it happens in the window.
    pub const fn rise(&self) -> Option<&T> {
        match self {
            Self::Crossings { rise, .. } => rise.as_ref(),
            Self::AlwaysUp | Self::AlwaysDown => None,
        }
    }

    /// Gets moonset, if it happens in the window.
    pub const fn set(&self) -> Option<&T> {
        match self {
            Self::Crossings { set, .. } => set.as_ref(),
            Self::AlwaysUp | Self::AlwaysDown => None,
        }
    }

    /// Checks if the Moon never sets in the window.
    pub const fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    /// Checks if the Moon never rises in the window.
    pub const fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Converts the rise and set times, dropping those the conversion rejects.
    pub fn map<U, F>(self, mut f: F) -> MoonTimes<U>
    where
        F: FnMut(T) -> Option<U>,
    {
        match self {
            Self::Crossings { rise, set } => MoonTimes::Crossings {
                rise: rise.and_then(&mut f),
                set: set.and_then(&mut f),
            },
            Self::AlwaysUp => MoonTimes::AlwaysUp,
            Self::AlwaysDown => MoonTimes::AlwaysDown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    #[test]
    fn test_horizon_altitudes() {
        assert_eq!(Horizon::SunriseSunset.altitude(), -0.83);
        assert_eq!(Horizon::SunriseEndSunsetStart.altitude(), -0.3);
        assert_eq!(Horizon::CivilTwilight.altitude(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.altitude(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.altitude(), -18.0);
        assert_eq!(Horizon::GoldenHour.altitude(), 6.0);

        let custom = Horizon::custom(-4.0).unwrap();
        assert_eq!(custom.altitude(), -4.0);
        assert!(custom.events().is_none());

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
    }

    #[test]
    fn test_custom_horizon_rejects_nan() {
        assert!(matches!(
            Horizon::custom(f64::NAN),
            Err(crate::Error::InvalidAltitude { .. })
        ));

        // every horizon the constructor accepts is equal to itself
        for degrees in [-90.0, -18.0, -0.0, 0.0, 6.0, 90.0] {
            let horizon = Horizon::custom(degrees).unwrap();
            assert_eq!(horizon, horizon);
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom(0.0));
        set.insert(Horizon::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_horizon_and_event_mapping_agree() {
        for horizon in Horizon::STANDARD {
            let (morning, evening) = horizon.events().unwrap();
            assert!(morning.is_morning());
            assert!(!evening.is_morning());
            assert_eq!(morning.horizon(), Some(horizon));
            assert_eq!(evening.horizon(), Some(horizon));
        }
        assert_eq!(SunEvent::SolarNoon.horizon(), None);
        assert_eq!(SunEvent::Nadir.horizon(), None);
    }

    #[test]
    fn test_sun_event_order_and_names() {
        for pair in SunEvent::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (i, event) in SunEvent::ALL.iter().enumerate() {
            assert_eq!(event.index(), i);
        }
        assert_eq!(SunEvent::NauticalDusk.name(), "nauticalDusk");
        assert_eq!(SunEvent::GoldenHourEnd.name(), "goldenHourEnd");
    }

    #[test]
    fn test_observer() {
        let observer = Observer::new(50.5, 30.5).unwrap();
        assert!((observer.phi() - 50.5 * PI / 180.0).abs() < 1e-12);
        assert!((observer.lw() + 30.5 * PI / 180.0).abs() < 1e-12);

        assert!(Observer::new(-91.0, 0.0).is_err());
        assert!(Observer::new(0.0, 180.5).is_err());

        let permissive = Observer::new_unchecked(95.0, 400.0);
        assert_eq!(permissive.latitude(), 95.0);
        assert_eq!(permissive.longitude(), 400.0);
    }

    #[test]
    fn test_compass_azimuth() {
        let south = SunPosition::new(0.0, 0.5);
        assert!((south.compass_azimuth() - 180.0).abs() < 1e-10);
        assert!(south.is_above_horizon());

        let east = SunPosition::new(-PI / 2.0, -0.1);
        assert!((east.compass_azimuth() - 90.0).abs() < 1e-10);
        assert!(!east.is_above_horizon());

        let north = MoonPosition::new(PI, 0.0, 384_400.0, 0.0);
        assert!(north.compass_azimuth().abs() < 1e-10);
        assert!(!north.is_above_horizon());
    }

    #[test]
    fn test_moon_phase_classification() {
        assert_eq!(MoonPhase::from_phase(0.0), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_phase(0.98), MoonPhase::NewMoon);
        assert_eq!(MoonPhase::from_phase(0.13), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_phase(0.25), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_phase(0.4), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::from_phase(0.5), MoonPhase::FullMoon);
        assert_eq!(MoonPhase::from_phase(0.62), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::from_phase(0.7548), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_phase(0.86), MoonPhase::WaningCrescent);

        let illumination = MoonIllumination::new(0.48, 0.7548, 1.67);
        assert_eq!(illumination.phase_name(), MoonPhase::LastQuarter);
        assert!(!illumination.is_waxing());
    }

    #[test]
    fn test_sun_times_access_and_map() {
        let mut events = [None; SunEvent::COUNT];
        events[SunEvent::SolarNoon.index()] = Some(12.0);
        events[SunEvent::Nadir.index()] = Some(0.0);
        events[SunEvent::Sunrise.index()] = Some(6.0);
        let times = SunTimes::from_events(events);

        assert_eq!(times.solar_noon(), Some(&12.0));
        assert_eq!(times.sunrise(), Some(&6.0));
        assert_eq!(times.sunset(), None);
        assert_eq!(times.iter().filter(|(_, t)| t.is_some()).count(), 3);
        assert_eq!(times.iter().next(), Some((SunEvent::Nadir, Some(&0.0))));

        let mapped = times.map(|hours| (hours > 1.0).then(|| hours * 60.0));
        assert_eq!(mapped.solar_noon(), Some(&720.0));
        assert_eq!(mapped.nadir(), None);
    }

    #[test]
    fn test_moon_times_variants() {
        let crossing: MoonTimes<f64> = MoonTimes::Crossings {
            rise: Some(3.0),
            set: None,
        };
        assert_eq!(crossing.rise(), Some(&3.0));
        assert_eq!(crossing.set(), None);
        assert!(!crossing.is_always_up());
        assert!(!crossing.is_always_down());

        let up: MoonTimes<f64> = MoonTimes::AlwaysUp;
        assert!(up.is_always_up());
        assert!(!up.is_always_down());
        assert_eq!(up.rise(), None);

        let down = MoonTimes::<f64>::AlwaysDown.map(|t| Some(t * 2.0));
        assert!(down.is_always_down());
    }

    #[test]
    fn test_horizon_events_map() {
        let events = HorizonEvents::new(Some(1.0), None);
        let mapped = events.map(|t: f64| Some(t + 1.0));
        assert_eq!(mapped.morning(), Some(&2.0));
        assert_eq!(mapped.evening(), None);
    }
}
