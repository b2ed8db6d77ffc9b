//! Twilight and golden hour across latitudes, including polar day and polar night.

use chrono::{DateTime, Utc};
use suncalc::{Horizon, sun_event_times, sun_times};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        ("Quito", -0.1807, -78.4678),
        ("Sydney", -33.8688, 151.2093),
        ("Vienna", 48.21, 16.37),
        ("Reykjavik", 64.1466, -21.9426),
        ("Tromsø", 69.6492, 18.9553),
        ("Longyearbyen", 78.2232, 15.6267),
    ];

    for date in ["2024-06-21T12:00:00Z", "2024-12-21T12:00:00Z"] {
        let datetime = date.parse::<DateTime<Utc>>()?;
        println!("{} (UTC)", datetime.date_naive());
        println!(
            "  {:<13} {:>8} {:>8} {:>8} {:>8} {:>11}",
            "place", "dawn", "sunrise", "sunset", "dusk", "blue hour"
        );

        for (name, latitude, longitude) in places {
            let times = sun_times(datetime, latitude, longitude);
            let blue_hour =
                sun_event_times(datetime, latitude, longitude, Horizon::custom(-4.0)?);

            let show = |time: Option<&DateTime<Utc>>| {
                time.map_or_else(|| "--".to_string(), |t| t.format("%H:%M").to_string())
            };
            println!(
                "  {:<13} {:>8} {:>8} {:>8} {:>8} {:>11}",
                name,
                show(times.dawn()),
                show(times.sunrise()),
                show(times.sunset()),
                show(times.dusk()),
                show(blue_hour.evening()),
            );
        }
        println!();
    }

    Ok(())
}
