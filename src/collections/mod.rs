//! General-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), so the
//! whole slice API comes for free and only the additional behavior is written out.

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "sequence")]
#[doc(inline)]
pub use sequence::Sequence;
