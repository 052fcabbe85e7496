//! A couple of small, unrelated utilities that keep turning up in my projects.
//!
//! # Contents
//! - [`collections::sequence`]: [`Sequence`](collections::Sequence), an ordered collection with
//!   the convenience methods of a JavaScript Array (`map`, `filter`, `reduce`, `splice`, `flat`,
//!   ...), along with [`Nested`](collections::sequence::Nested) values for flattening.
//! - [`time::timezone`]: a registry of common timezone abbreviations ("EST", "AEDT", "IST", ...)
//!   and their fixed offsets from UTC.
//!
//! The two have nothing to do with each other, and each sits behind its own feature (`sequence`
//! and `time`), both enabled by default.
//!
//! # Method
//! [`Sequence`](collections::Sequence) wraps a [`Vec`] and dereferences to a slice, so only the
//! behavior that slices don't already provide is written out. Where JavaScript mixes methods that
//! modify an array with ones that copy it, Sequence keeps them apart: methods that take `&mut self`
//! modify it in place, methods that take `&self` return a new Sequence (`to_sorted`,
//! `to_reversed`, `to_spliced`, `slice`, `with`, ...).
//!
//! # Error Handling
//! Two styles are used, depending on the method:
//! - Reads degrade silently. [`at`](collections::Sequence::at), `pop` and `shift` return
//!   [`T::default()`](Default) when there is nothing to return, and an unrecognized timezone
//!   abbreviation resolves to the local timezone.
//! - Operations on ranges or indices that would produce a new value return a [`Result`], with a
//!   small error struct that implements [`Error`](std::error::Error) and describes the problem.
//!
//! Nothing in this crate writes to stdout or stderr. The timezone registry emits [`tracing`]
//! events, which go nowhere unless the application installs a subscriber.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
