//! Lunar phase calendar for one month.

use chrono::{Duration, TimeZone, Utc};
use suncalc::moon_illumination;

fn main() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut previous = None;

    println!("Moon phases, January 2024 (00:00 UTC)");
    for day in 0..31 {
        let datetime = start + Duration::days(day);
        let illumination = moon_illumination(datetime);
        let phase = illumination.phase_name();

        let marker = if previous == Some(phase) { "" } else { " <" };
        previous = Some(phase);

        println!(
            "  {}  {:>5.1}%  {:<16}{}",
            datetime.format("%Y-%m-%d"),
            illumination.fraction() * 100.0,
            format!("{phase:?}"),
            marker
        );
    }

    let full = (0..31 * 24)
        .map(|hour| start + Duration::hours(hour))
        .max_by(|a, b| {
            moon_illumination(*a)
                .fraction()
                .total_cmp(&moon_illumination(*b).fraction())
        });
    if let Some(full) = full {
        let illumination = moon_illumination(full);
        println!(
            "\nFullest around {}: {:.2}% ({:?})",
            full.format("%Y-%m-%d %H:00"),
            illumination.fraction() * 100.0,
            illumination.phase_name()
        );
    }
}
