#![cfg(test)]

use std::collections::HashSet;

use chrono::{TimeZone, Timelike, Utc};
use strum::IntoEnumIterator;

use super::*;

#[test]
fn test_lookup_known() {
    let cases = [
        ("UTC", 0),
        ("GMT", 0),
        ("CET", 3600),
        ("CEST", 7200),
        ("EST", -5 * 3600),
        ("HST", -10 * 3600),
        ("AKDT", -8 * 3600),
        ("ACST", 9 * 3600 + 1800),
        ("ACDT", 10 * 3600 + 1800),
        ("IST", 5 * 3600 + 1800),
        ("NZDT", 13 * 3600),
        ("WITA", 8 * 3600),
        ("ART", -3 * 3600),
    ];

    for (abbreviation, seconds) in cases {
        let tz = lookup(abbreviation);
        assert_eq!(tz.name(), abbreviation, "{abbreviation} should keep its own name.");
        assert_eq!(
            tz.offset_seconds(),
            seconds,
            "{abbreviation} should have an offset of {seconds} seconds."
        );
    }
}

#[test]
fn test_lookup_fallback() {
    let local = Timezone::local();

    assert_eq!(lookup("Local").name(), "Local");
    assert_eq!(lookup("XYZ").name(), "Local", "Unknown codes should fall back to local time.");
    assert_eq!(lookup("XYZ").offset(), local.offset());
    assert_eq!(lookup("est").name(), "Local", "Lookup should be case-sensitive.");
    assert_eq!(lookup("").name(), "Local");

    assert_eq!(try_lookup("XYZ"), None);
    assert_eq!(try_lookup("JST").map(|tz| tz.offset_seconds()), Some(9 * 3600));
}

#[test]
fn test_abbreviation_table() {
    for abbreviation in Abbreviation::iter() {
        assert_eq!(
            abbreviation.as_str().parse::<Abbreviation>(),
            Ok(abbreviation),
            "Every code should parse back to its abbreviation."
        );
        assert_eq!(abbreviation.to_string(), abbreviation.as_str());
        assert_ne!(abbreviation.description(), abbreviation.as_str());

        match abbreviation.offset_seconds() {
            Some(seconds) => {
                assert!(seconds.abs() < 86_400);
                assert_eq!(abbreviation.timezone().offset_seconds(), seconds);
                assert_eq!(abbreviation.timezone().name(), abbreviation.as_str());
            }
            None => assert_eq!(abbreviation, Abbreviation::Local),
        }
    }

    assert_eq!(Abbreviation::Local.as_str(), "Local");
    assert_eq!(Abbreviation::Akst.as_str(), "AKST");
    assert_eq!(Abbreviation::Mst.description(), "Mountain Standard Time");
    assert_eq!(Abbreviation::Local.description(), "Local Time");
}

#[test]
fn test_all() {
    let zones = all();

    assert_eq!(zones.len(), Abbreviation::iter().count());
    assert_eq!(zones[0], Timezone::utc(), "UTC should come first.");
    assert_eq!(zones[1].name(), "Local");
    assert_eq!(
        zones.iter().rev().take(4).map(Timezone::name).collect::<Vec<_>>(),
        ["ART", "WIT", "WITA", "WIB"],
        "The registry should list timezones grouped by region."
    );

    let names: HashSet<_> = zones.iter().map(Timezone::name).collect();
    assert_eq!(names.len(), zones.len(), "Every timezone should have a distinct name.");
    for name in ["GMT", "PST", "AEST", "NZST", "HKT", "SGT", "PHT", "SAST", "EAT", "MSK", "WIB"] {
        assert!(names.contains(name), "{name} should be in the registry.");
    }
}

#[test]
fn test_timezone() {
    let tz = Timezone::fixed("NPT", 5 * 3600 + 45 * 60).unwrap();
    assert_eq!(tz.name(), "NPT");
    assert_eq!(tz.to_string(), "NPT (UTC+05:45)");
    assert_eq!(lookup("PST").to_string(), "PST (UTC-08:00)");
    assert_eq!(Timezone::utc().to_string(), "UTC (UTC+00:00)");

    assert_eq!(
        Timezone::fixed("bad", -86_400),
        Err(OffsetOutOfRange { seconds: -86_400 })
    );
    assert_eq!(
        Timezone::fixed("bad", 90_000).unwrap_err().to_string(),
        "offset of 90000 seconds is not within a day of UTC"
    );

    let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let converted = lookup("ACDT").convert(noon);
    assert_eq!(converted.hour(), 22);
    assert_eq!(converted.minute(), 30);
    assert_eq!(converted, noon, "Conversion should preserve the instant.");

    assert_eq!(lookup("EST").now().offset().local_minus_utc(), -5 * 3600);
}
