#![cfg(feature = "chrono")]

//! Results depend only on the absolute instant, never on the time zone it is expressed in.

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::{America::New_York, Australia::Sydney, Europe::Kyiv, Pacific::Honolulu, Tz};
use suncalc::{SunEvent, moon_illumination, moon_times, sun_position, sun_times};

#[test]
fn same_instant_in_any_zone_gives_same_results() {
    let utc = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();

    for tz in [Kyiv, New_York, Sydney, Honolulu] {
        let local = utc.with_timezone(&tz);

        assert_eq!(
            sun_position(local.clone(), 50.5, 30.5),
            sun_position(utc, 50.5, 30.5)
        );
        assert_eq!(moon_illumination(local.clone()), moon_illumination(utc));

        let local_times = sun_times(local, 50.5, 30.5);
        let utc_times = sun_times(utc, 50.5, 30.5);
        for event in SunEvent::ALL {
            assert_eq!(
                local_times.get(event).map(|t| t.with_timezone(&Utc)),
                utc_times.get(event).copied(),
                "{event:?} in {tz}"
            );
        }
    }
}

#[test]
fn results_are_expressed_in_callers_zone() {
    let local_noon = Kyiv.with_ymd_and_hms(2013, 3, 5, 12, 0, 0).unwrap();
    let times = sun_times(local_noon, 50.5, 30.5);

    let sunrise = times.sunrise().unwrap();
    assert_eq!(sunrise.timezone(), Kyiv);
    assert_eq!(sunrise.format("%H:%M").to_string(), "06:34");

    let moon = moon_times(Kyiv.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap(), 50.5, 30.5);
    if let Some(rise) = moon.rise() {
        assert_eq!(rise.timezone(), Kyiv);
    }
}

#[test]
fn local_noon_picks_the_local_day() {
    // Honolulu noon is 22:00 UTC, already the next day in UTC terms
    let local_noon = Honolulu.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let times = sun_times(local_noon, 21.3069, -157.8583);

    let noon = times.solar_noon().unwrap();
    assert_eq!(noon.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert!(times.sunrise().unwrap() < noon);
    assert!(times.sunset().unwrap() > noon);
}

#[test]
fn daylight_saving_transitions_do_not_disturb_results() {
    // US clocks spring forward on 2024-03-10 at 02:00 local time
    let before = New_York.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
    let after = New_York.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();

    let day_before = sun_times(before, 40.7128, -74.006);
    let day_after = sun_times(after, 40.7128, -74.006);

    let noon_before = day_before.solar_noon().unwrap();
    let noon_after = day_after.solar_noon().unwrap();
    let elapsed = noon_after.clone() - noon_before.clone();

    // about one day apart in absolute time, while the local clock reading jumps by an hour
    assert!((elapsed.num_seconds() - 86_400).abs() < 60);
    assert_eq!(noon_before.format("%H").to_string(), "12");
    assert_eq!(noon_after.format("%H").to_string(), "13");
}

#[test]
fn moon_times_accept_any_zone() {
    let zones: [Tz; 3] = [Kyiv, Sydney, Honolulu];
    for tz in zones {
        let start = tz.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let times = moon_times(start.clone(), 35.0, 0.0);
        let utc_times = moon_times(start.with_timezone(&Utc), 35.0, 0.0);

        assert_eq!(times.rise().map(|t| t.with_timezone(&Utc)), utc_times.rise().copied());
        assert_eq!(times.set().map(|t| t.with_timezone(&Utc)), utc_times.set().copied());
        assert_eq!(times.is_always_up(), utc_times.is_always_up());
    }
}
