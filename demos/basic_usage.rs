//! Basic Sun and Moon calculations for one place and day.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use suncalc::{moon_illumination, moon_position, moon_times, sun_position, sun_times};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local noon selects the local calendar day
    let datetime = "2013-03-05T12:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    let latitude = 50.5; // Kyiv
    let longitude = 30.5;

    let times = sun_times(datetime, latitude, longitude);
    println!("Sun times for Kyiv on {}:", datetime.date_naive());
    for (event, time) in times.iter() {
        match time {
            Some(time) => println!("  {:>14}: {}", event.name(), time.format("%H:%M:%S %:z")),
            None => println!("  {:>14}: does not occur", event.name()),
        }
    }

    // Same moment expressed in UTC
    let utc = Utc.with_ymd_and_hms(2013, 3, 5, 10, 0, 0).unwrap();
    let position = sun_position(utc, latitude, longitude);
    println!("\nSun position at {utc}:");
    println!("  Azimuth: {:.3}° (from north)", position.compass_azimuth());
    println!("  Altitude: {:.3}°", position.altitude_degrees());
    if position.is_above_horizon() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    let moon = moon_position(utc, latitude, longitude);
    println!("\nMoon position:");
    println!("  Azimuth: {:.3}° (from north)", moon.compass_azimuth());
    println!("  Altitude: {:.3}°", moon.altitude_degrees());
    println!("  Distance: {:.0} km", moon.distance());

    let illumination = moon_illumination(utc);
    println!(
        "  Phase: {:?} ({:.1}% illuminated)",
        illumination.phase_name(),
        illumination.fraction() * 100.0
    );

    let midnight = "2013-03-05T00:00:00+02:00".parse::<DateTime<FixedOffset>>()?;
    let moon_day = moon_times(midnight, latitude, longitude);
    if moon_day.is_always_up() {
        println!("  Moon is up all day");
    } else if moon_day.is_always_down() {
        println!("  Moon is down all day");
    } else {
        if let Some(rise) = moon_day.rise() {
            println!("  Moonrise: {}", rise.format("%H:%M"));
        }
        if let Some(set) = moon_day.set() {
            println!("  Moonset: {}", set.format("%H:%M"));
        }
    }

    Ok(())
}
