//! Example demonstrating usage without chrono.
//!
//! Works with `default-features = false` plus either `std` or `libm`; times go in and
//! out as Julian dates.

use suncalc::{
    Horizon, Observer, moon_illumination_from_julian, moon_times_from_julian,
    sun_event_times_from_julian, sun_position_from_julian, sun_times_from_julian,
    time::JulianDate,
};

fn hours_utc(date: JulianDate, midnight: JulianDate) -> f64 {
    (date.julian_date() - midnight.julian_date()) * 24.0
}

fn main() {
    // Vienna, validated once up front
    let vienna = Observer::new(48.21, 16.37).expect("valid coordinates");
    let (lat, lon) = (vienna.latitude(), vienna.longitude());

    let midnight = JulianDate::from_utc(2024, 6, 21, 0, 0, 0.0).expect("valid date");
    let noon = midnight.add_hours(12.0);
    println!("Julian Date: {:.6}", noon.julian_date());

    let times = sun_times_from_julian(noon, lat, lon);
    println!("\nSun times (hours after 00:00 UTC):");
    for (event, time) in times.iter() {
        match time {
            Some(time) => println!("  {:>14}: {:6.3}", event.name(), hours_utc(*time, midnight)),
            None => println!("  {:>14}: does not occur", event.name()),
        }
    }

    let custom = Horizon::custom(10.0).expect("valid altitude");
    let events = sun_event_times_from_julian(noon, lat, lon, custom);
    if let (Some(up), Some(down)) = (events.morning(), events.evening()) {
        println!(
            "\nSun above 10° from {:.3} to {:.3}",
            hours_utc(*up, midnight),
            hours_utc(*down, midnight)
        );
    }

    let position = sun_position_from_julian(noon, lat, lon);
    println!("\nSun at 12:00 UTC:");
    println!("  Azimuth: {:.3}° (from north)", position.compass_azimuth());
    println!("  Altitude: {:.3}°", position.altitude_degrees());

    let illumination = moon_illumination_from_julian(noon);
    println!(
        "\nMoon: {:?}, {:.1}% illuminated",
        illumination.phase_name(),
        illumination.fraction() * 100.0
    );

    let moon = moon_times_from_julian(midnight, lat, lon);
    if let Some(rise) = moon.rise() {
        println!("  Moonrise: {:.3} h UTC", hours_utc(*rise, midnight));
    }
    if let Some(set) = moon.set() {
        println!("  Moonset: {:.3} h UTC", hours_utc(*set, midnight));
    }
}
