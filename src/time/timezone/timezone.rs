use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

use super::error::OffsetOutOfRange;

/// A named, fixed offset from UTC.
///
/// Timezones never observe daylight saving: "CET" and "CEST" are separate timezones, each with its
/// own constant offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timezone {
    name: &'static str,
    offset: FixedOffset,
}

impl Timezone {
    /// Creates a Timezone with the provided name and offset east of UTC, in seconds.
    ///
    /// # Errors
    /// Returns [`OffsetOutOfRange`] unless `-86_400 < seconds < 86_400`.
    ///
    /// # Examples
    /// ```
    /// # use utility_lib::time::timezone::Timezone;
    /// let tz = Timezone::fixed("IST", 5 * 3600 + 30 * 60).unwrap();
    /// assert_eq!(tz.to_string(), "IST (UTC+05:30)");
    /// assert!(Timezone::fixed("??", 86_400).is_err());
    /// ```
    pub fn fixed(name: &'static str, seconds: i32) -> Result<Timezone, OffsetOutOfRange> {
        FixedOffset::east_opt(seconds)
            .map(|offset| Timezone { name, offset })
            .ok_or(OffsetOutOfRange { seconds })
    }

    /// Returns Coordinated Universal Time.
    pub fn utc() -> Timezone {
        Timezone {
            name: "UTC",
            offset: Utc.fix(),
        }
    }

    /// Returns the local timezone, using the offset that the system reports for the current
    /// instant.
    pub fn local() -> Timezone {
        Timezone {
            name: "Local",
            offset: Local::now().offset().fix(),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Returns the offset east of UTC, in seconds.
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    /// Returns the current date and time in this timezone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.convert(Utc::now())
    }

    /// Converts a UTC date and time into this timezone.
    pub fn convert(&self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc.with_timezone(&self.offset)
    }
}

impl Display for Timezone {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (UTC{})", self.name, self.offset)
    }
}
