//! # suncalc
//!
//! Sun and Moon positions, sunrise, sunset, twilight, golden hour, moonrise, moonset and
//! lunar phase for any place on Earth.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This is a low-precision ephemeris: event times are good to about a minute, positions
//! to a fraction of a degree. That is plenty for scheduling, photography, mapping and
//! lighting control, and it keeps every calculation a few dozen floating-point operations.
//!
//! ## Features
//!
//! - Sun position and the 14 named solar events of a day, plus crossings of any custom altitude
//! - Moon position (with refraction and parallactic angle), illumination and rise/set
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: stateless, immutable data structures, no allocation
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! suncalc = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! suncalc = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! suncalc = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun times (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use suncalc::{SunEvent, sun_times};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Kyiv, local noon picks the local calendar day
//! let date = "2013-03-05T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let times = sun_times(date, 50.5, 30.5);
//!
//! for (event, time) in times.iter() {
//!     match time {
//!         Some(time) => println!("{:>14}: {}", event.name(), time.format("%H:%M:%S")),
//!         None => println!("{:>14}: does not occur", event.name()),
//!     }
//! }
//! assert!(times.get(SunEvent::Sunrise).is_some());
//! # }
//! ```
//!
//! ### Sun and Moon position (numeric API, no chrono)
//! ```rust
//! use suncalc::{moon_illumination_from_julian, sun_position_from_julian, time::JulianDate};
//!
//! let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
//!
//! let sun = sun_position_from_julian(jd, 50.5, 30.5);
//! println!("Sun altitude: {:.2}°", sun.altitude_degrees());
//! println!("Sun azimuth: {:.2}° (from north)", sun.compass_azimuth());
//!
//! let moon = moon_illumination_from_julian(jd);
//! println!("Moon: {:?}, {:.0}% lit", moon.phase_name(), moon.fraction() * 100.0);
//! ```
//!
//! ### Moonrise and moonset (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use suncalc::{MoonTimes, moon_times};
//! use chrono::{DateTime, Utc};
//!
//! let date = "2013-03-04T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! match moon_times(date, 50.5, 30.5) {
//!     MoonTimes::Crossings { rise, set } => {
//!         println!("Moonrise: {rise:?}");
//!         println!("Moonset: {set:?}");
//!     }
//!     MoonTimes::AlwaysUp => println!("Moon up all day"),
//!     MoonTimes::AlwaysDown => println!("Moon down all day"),
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: radians from south, increasing westward (0 = south, π/2 = west);
//!   [`SunPosition::compass_azimuth`] gives the usual degrees from north
//! - **Altitude**: radians above the horizon
//! - **Latitude / longitude**: degrees, north and east positive
//!
//! Event times that do not happen on a given day (polar day, polar night, a Moon that
//! does not rise) are `None`; the calculations themselves never fail.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::moon::{moon_illumination, moon_position, moon_times};
pub use crate::moon::{moon_illumination_from_julian, moon_position_from_julian, moon_times_from_julian};
#[cfg(feature = "chrono")]
pub use crate::sun::{sun_event_times, sun_event_times_multiple, sun_position, sun_times};
pub use crate::sun::{
    sun_event_times_from_julian, sun_event_times_multiple_from_julian, sun_position_from_julian,
    sun_times_from_julian,
};
pub use crate::types::{
    EquatorialCoordinates, GeocentricCoordinates, Horizon, HorizonEvents, MoonIllumination,
    MoonPhase, MoonPosition, MoonTimes, Observer, SunEvent, SunPosition, SunTimes,
};

// Body modules
pub mod moon;
pub mod sun;

// Core modules
pub mod coords;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod constants;
pub mod time;
