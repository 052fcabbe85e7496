//! Time-related utilities.

pub mod timezone;

#[doc(inline)]
pub use timezone::{Abbreviation, Timezone};
