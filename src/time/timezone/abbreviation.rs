use strum::EnumMessage;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use super::Timezone;
use crate::util::result::ResultExtension;

const HOUR: i32 = 3600;
const MINUTE: i32 = 60;

/// A timezone abbreviation recognized by the registry.
///
/// Abbreviations parse from and display as their exact upper-case code (`"AEST"`), except for
/// [`Local`](Abbreviation::Local), which is written `"Local"`. Parsing is case-sensitive.
///
/// # Examples
/// ```
/// # use utility_lib::time::timezone::Abbreviation;
/// let abbr: Abbreviation = "ACST".parse().unwrap();
/// assert_eq!(abbr, Abbreviation::Acst);
/// assert_eq!(abbr.offset_seconds(), Some(9 * 3600 + 30 * 60));
/// assert_eq!(abbr.description(), "Australian Central Standard Time");
/// assert!("acst".parse::<Abbreviation>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter, EnumMessage,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Abbreviation {
    /// Coordinated Universal Time
    Utc,
    /// Local Time
    #[strum(to_string = "Local")]
    Local,

    // Europe
    /// Greenwich Mean Time
    Gmt,
    /// Central European Time
    Cet,
    /// Central European Summer Time
    Cest,

    // North America
    /// Eastern Standard Time
    Est,
    /// Eastern Daylight Time
    Edt,
    /// Central Standard Time
    Cst,
    /// Central Daylight Time
    Cdt,
    /// Mountain Standard Time
    Mst,
    /// Mountain Daylight Time
    Mdt,
    /// Pacific Standard Time
    Pst,
    /// Pacific Daylight Time
    Pdt,
    /// Atlantic Standard Time
    Ast,
    /// Atlantic Daylight Time
    Adt,
    /// Hawaii Standard Time
    Hst,
    /// Alaska Standard Time
    Akst,
    /// Alaska Daylight Time
    Akdt,

    // Australia
    /// Australian Eastern Standard Time
    Aest,
    /// Australian Eastern Daylight Time
    Aedt,
    /// Australian Central Standard Time
    Acst,
    /// Australian Central Daylight Time
    Acdt,
    /// Australian Western Standard Time
    Awst,

    // New Zealand
    /// New Zealand Standard Time
    Nzst,
    /// New Zealand Daylight Time
    Nzdt,

    // Asia
    /// India Standard Time
    Ist,
    /// Japan Standard Time
    Jst,
    /// Korea Standard Time
    Kst,
    /// Hong Kong Time
    Hkt,
    /// Singapore Time
    Sgt,
    /// Philippine Time
    Pht,

    // Africa
    /// South Africa Standard Time
    Sast,
    /// East Africa Time
    Eat,

    // Russia
    /// Moscow Standard Time
    Msk,

    // Indonesia
    /// Western Indonesia Time
    Wib,
    /// Central Indonesia Time
    Wita,
    /// Eastern Indonesia Time
    Wit,

    // South America
    /// Argentina Time
    Art,
}

impl Abbreviation {
    /// Returns the code of this abbreviation, as it is parsed and displayed.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the timezone, e.g. "Japan Standard Time" for [`Jst`](Self::Jst).
    pub fn description(self) -> &'static str {
        self.get_documentation().unwrap_or_else(|| self.as_str())
    }

    /// Returns the fixed offset from UTC in seconds, or None for [`Local`](Self::Local), which
    /// depends on the system configuration.
    pub const fn offset_seconds(self) -> Option<i32> {
        use Abbreviation::*;

        let seconds = match self {
            Local => return None,
            Utc | Gmt => 0,
            Cet => HOUR,
            Cest | Sast => 2 * HOUR,
            Eat | Msk => 3 * HOUR,
            Ist => 5 * HOUR + 30 * MINUTE,
            Wib => 7 * HOUR,
            Awst | Hkt | Sgt | Pht | Wita => 8 * HOUR,
            Jst | Kst | Wit => 9 * HOUR,
            Acst => 9 * HOUR + 30 * MINUTE,
            Aest => 10 * HOUR,
            Acdt => 10 * HOUR + 30 * MINUTE,
            Aedt => 11 * HOUR,
            Nzst => 12 * HOUR,
            Nzdt => 13 * HOUR,
            Adt | Art => -3 * HOUR,
            Ast | Edt => -4 * HOUR,
            Est | Cdt => -5 * HOUR,
            Cst | Mdt => -6 * HOUR,
            Mst | Pdt => -7 * HOUR,
            Pst | Akdt => -8 * HOUR,
            Akst => -9 * HOUR,
            Hst => -10 * HOUR,
        };

        Some(seconds)
    }

    /// Resolves the abbreviation to a [`Timezone`]. [`Local`](Self::Local) is resolved against the
    /// system's current local offset.
    pub fn timezone(self) -> Timezone {
        match self.offset_seconds() {
            // Every entry in the table is within a day of UTC.
            Some(seconds) => Timezone::fixed(self.as_str(), seconds).throw(),
            None => Timezone::local(),
        }
    }
}
