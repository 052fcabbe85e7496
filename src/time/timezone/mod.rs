//! A registry of common timezone abbreviations and their fixed offsets from UTC.
//!
//! The registry is a closed table: [`Abbreviation`] lists every recognized code, [`lookup`]
//! resolves a code to a [`Timezone`] and [`all`] lists the whole table. Abbreviations that aren't
//! recognized resolve to the local timezone rather than failing.

mod abbreviation;
mod error;
mod registry;
mod tests;
mod timezone;

pub use abbreviation::*;
pub use error::*;
pub use registry::*;
pub use timezone::*;
