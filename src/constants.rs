//! Fixed constants of the low-precision Sun and Moon models.
//!
//! Angles are given in degrees exactly as they appear in the published series and are
//! converted with [`RAD`] at the point of use.

#![allow(clippy::unreadable_literal)]

/// Radians per degree.
pub const RAD: f64 = core::f64::consts::PI / 180.0;

/// Seconds per day (86,400).
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day at which the Unix epoch day starts counting (the epoch itself is `J1970 - 0.5`).
pub const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000: f64 = 2_451_545.0;

/// Correction between the mean and the true solar transit, in days.
pub const J0: f64 = 0.0009;

/// Obliquity of the Earth's ecliptic in degrees.
pub const OBLIQUITY_DEGREES: f64 = 23.4397;

/// Solar mean anomaly at J2000 in degrees.
pub const SOLAR_MEAN_ANOMALY_AT_EPOCH: f64 = 357.5291;

/// Daily motion of the solar mean anomaly in degrees.
pub const SOLAR_MEAN_ANOMALY_RATE: f64 = 0.98560028;

/// Equation of center coefficients (degrees) for sin M, sin 2M and sin 3M.
pub const EQUATION_OF_CENTER: [f64; 3] = [1.9148, 0.02, 0.0003];

/// Ecliptic longitude of the Earth's perihelion in degrees.
pub const EARTH_PERIHELION: f64 = 102.9372;

/// Equation of time coefficients (days) for sin M and sin 2L.
pub const TRANSIT_CORRECTION: [f64; 2] = [0.0053, -0.0069];

/// Greenwich sidereal time at J2000 in degrees.
pub const SIDEREAL_TIME_AT_EPOCH: f64 = 280.16;

/// Sidereal rotation per day in degrees.
pub const SIDEREAL_TIME_RATE: f64 = 360.9856235;

/// Moon mean longitude at J2000 and daily rate, in degrees.
pub const MOON_MEAN_LONGITUDE: [f64; 2] = [218.316, 13.176396];

/// Moon mean anomaly at J2000 and daily rate, in degrees.
pub const MOON_MEAN_ANOMALY: [f64; 2] = [134.963, 13.064993];

/// Moon argument of latitude (mean distance from the ascending node) at J2000 and daily rate, in degrees.
pub const MOON_ARGUMENT_OF_LATITUDE: [f64; 2] = [93.272, 13.229350];

/// Amplitude of the Moon's longitude perturbation in degrees.
pub const MOON_LONGITUDE_AMPLITUDE: f64 = 6.289;

/// Amplitude of the Moon's latitude term in degrees.
pub const MOON_LATITUDE_AMPLITUDE: f64 = 5.128;

/// Mean Earth-Moon distance in km and the amplitude of its variation.
pub const MOON_DISTANCE_KM: [f64; 2] = [385001.0, -20905.0];

/// Fixed Earth-Sun distance in km used for the illumination geometry.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Altitude of the Moon's centre at rise/set, in degrees (parallax and refraction).
pub const MOON_HORIZON_ALTITUDE: f64 = 0.133;

/// Coefficients of the Moon refraction term, in degrees.
pub const MOON_REFRACTION: [f64; 3] = [0.017, 10.26, 5.10];
