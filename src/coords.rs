//! Coordinate transforms shared by the Sun and Moon models.
//!
//! Ecliptic → equatorial → horizontal, plus sidereal time, hour angle and the Moon's
//! parallactic angle. All angles are radians; `d` is days since J2000.0.

#![allow(clippy::many_single_char_names)]

use crate::constants::{
    MOON_REFRACTION, OBLIQUITY_DEGREES, RAD, SIDEREAL_TIME_AT_EPOCH, SIDEREAL_TIME_RATE,
};
use crate::math::{acos, asin, atan2, cos, sin, tan};

/// Obliquity of the ecliptic in radians.
const E: f64 = RAD * OBLIQUITY_DEGREES;

/// Right ascension for ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn right_ascension(l: f64, b: f64) -> f64 {
    atan2(sin(l) * cos(E) - tan(b) * sin(E), cos(l))
}

/// Declination for ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn declination(l: f64, b: f64) -> f64 {
    asin(sin(b) * cos(E) + cos(b) * sin(E) * sin(l))
}

/// Local sidereal time for an observer at west longitude `lw`.
#[must_use]
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (SIDEREAL_TIME_AT_EPOCH + SIDEREAL_TIME_RATE * d) - lw
}

/// Azimuth from south, increasing westward, for hour angle `h`, latitude `phi` and declination `dec`.
#[must_use]
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), cos(h) * sin(phi) - tan(dec) * cos(phi))
}

/// Altitude above the horizon for hour angle `h`, latitude `phi` and declination `dec`.
#[must_use]
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    asin(sin(phi) * sin(dec) + cos(phi) * cos(dec) * cos(h))
}

/// Hour angle at which a body of declination `dec` reaches altitude `h0`.
///
/// NaN when the body never reaches that altitude at latitude `phi`.
#[must_use]
pub fn hour_angle(h0: f64, phi: f64, dec: f64) -> f64 {
    acos((sin(h0) - sin(phi) * sin(dec)) / (cos(phi) * cos(dec)))
}

/// Angle between the direction to the celestial pole and the zenith, at the body.
#[must_use]
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), tan(phi) * cos(dec) - sin(dec) * cos(h))
}

/// Refraction correction to add to the Moon's true altitude `h`.
///
/// A fixed form of Saemundsson's formula; it goes slightly negative for bodies just
/// above the horizon.
#[must_use]
pub fn moon_refraction(h: f64) -> f64 {
    let [a, b, c] = MOON_REFRACTION;
    RAD * a / tan(h + RAD * b / (h + RAD * c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_equinox_point() {
        // the vernal equinox lies on both the ecliptic and the equator
        assert!(right_ascension(0.0, 0.0).abs() < EPSILON);
        assert!(declination(0.0, 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_solstice_declination_equals_obliquity() {
        assert!((declination(PI / 2.0, 0.0) - E).abs() < EPSILON);
        assert!((declination(-PI / 2.0, 0.0) + E).abs() < EPSILON);
        assert!((right_ascension(PI / 2.0, 0.0) - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_sidereal_time() {
        assert!((sidereal_time(0.0, 0.0) - 280.16 * RAD).abs() < EPSILON);
        // an eastern observer is ahead of Greenwich
        assert!((sidereal_time(0.0, -RAD * 30.0) - 310.16 * RAD).abs() < EPSILON);
    }

    #[test]
    fn test_horizontal_transform_on_meridian() {
        let phi = 50.0 * RAD;
        let dec = 10.0 * RAD;
        // upper culmination: due south at 90° - φ + δ
        assert!((altitude(0.0, phi, dec) - 50.0 * RAD).abs() < EPSILON);
        assert!(azimuth(0.0, phi, dec).abs() < EPSILON);
        // a body west of the meridian has a positive azimuth
        assert!(azimuth(0.5, phi, dec) > 0.0);
        assert!(azimuth(-0.5, phi, dec) < 0.0);
    }

    #[test]
    fn test_hour_angle_inverts_altitude() {
        let phi = 50.5 * RAD;
        let dec = -6.0 * RAD;
        let h0 = -0.83 * RAD;
        let h = hour_angle(h0, phi, dec);
        assert!((altitude(h, phi, dec) - h0).abs() < 1e-10);
    }

    #[test]
    fn test_hour_angle_unreachable_is_nan() {
        // near the pole in midwinter the Sun never climbs to the horizon
        assert!(hour_angle(-0.83 * RAD, 85.0 * RAD, -20.0 * RAD).is_nan());
        // and in midsummer it never sinks to it
        assert!(hour_angle(-0.83 * RAD, 85.0 * RAD, 20.0 * RAD).is_nan());
    }

    #[test]
    fn test_parallactic_angle_zero_on_meridian() {
        assert!(parallactic_angle(0.0, 50.0 * RAD, 10.0 * RAD).abs() < EPSILON);
    }

    #[test]
    fn test_refraction_raises_low_bodies() {
        let correction = moon_refraction(10.0 * RAD);
        assert!(correction > 0.0);
        assert!(correction < 0.05 * RAD);
        // negligible near the zenith
        assert!(moon_refraction(80.0 * RAD).abs() < 0.01 * RAD);
    }
}
