use strum::IntoEnumIterator;

use super::{Abbreviation, Timezone};

/// Looks up the timezone for an abbreviation such as `"EST"` or `"AEDT"`, falling back to the
/// local timezone if the abbreviation isn't recognized.
///
/// # Examples
/// ```
/// # use utility_lib::time::timezone;
/// assert_eq!(timezone::lookup("PST").offset_seconds(), -8 * 3600);
/// assert_eq!(timezone::lookup("Atlantis").name(), "Local");
/// ```
pub fn lookup(abbreviation: &str) -> Timezone {
    try_lookup(abbreviation).unwrap_or_else(|| {
        tracing::debug!(abbreviation, "unrecognized timezone abbreviation, using local time");
        Timezone::local()
    })
}

/// Looks up the timezone for an abbreviation, returning None if it isn't recognized.
pub fn try_lookup(abbreviation: &str) -> Option<Timezone> {
    abbreviation
        .parse::<Abbreviation>()
        .ok()
        .map(Abbreviation::timezone)
}

/// Returns every timezone in the registry, including UTC and the local timezone.
pub fn all() -> Vec<Timezone> {
    Abbreviation::iter().map(Abbreviation::timezone).collect()
}
